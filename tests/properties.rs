use objcull::geometry::{Vector2f, Vector3f};
use objcull::{Mesh, Polygon, ReadOptions, parse_str, write_to};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A well-formed mesh: every face index lands inside its table.
#[derive(Debug, Clone)]
struct ArbMesh(Mesh);

fn finite(g: &mut Gen) -> f32 {
    let value = f32::arbitrary(g);
    if value.is_finite() { value } else { 0.0 }
}

fn index(g: &mut Gen, len: usize) -> usize {
    usize::arbitrary(g) % len
}

fn attribute_indices(g: &mut Gen, slots: usize, table: usize) -> Vec<isize> {
    if table == 0 {
        return Vec::new();
    }
    let count = usize::arbitrary(g) % (slots + 1);
    (0..count).map(|_| index(g, table) as isize).collect()
}

impl Arbitrary for ArbMesh {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut mesh = Mesh::new();
        let positions = 1 + usize::arbitrary(g) % 12;
        let textures = usize::arbitrary(g) % 4;
        let normals = usize::arbitrary(g) % 4;

        for _ in 0..positions {
            mesh.push_position(Vector3f::new(finite(g), finite(g), finite(g)));
        }
        for _ in 0..textures {
            mesh.push_texture_coordinate(Vector2f::new(finite(g), finite(g)));
        }
        for _ in 0..normals {
            mesh.push_normal(Vector3f::new(finite(g), finite(g), finite(g)));
        }

        for _ in 0..usize::arbitrary(g) % 8 {
            let len = 1 + usize::arbitrary(g) % 5;
            let vertex_indices: Vec<usize> = (0..len).map(|_| index(g, positions)).collect();
            // Attribute lists cover a prefix of the slots, which is all the
            // text form can express (`f 1/1 2`, `f 1//1 2/1`).
            let texture_indices = attribute_indices(g, len, textures);
            let normal_indices = attribute_indices(g, len, normals);
            mesh.push_face(Polygon::with_attributes(vertex_indices, texture_indices, normal_indices));
        }

        ArbMesh(mesh)
    }
}

fn to_text(mesh: &Mesh) -> String {
    let mut buffer = Vec::new();
    write_to(mesh, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[quickcheck]
fn written_mesh_reads_back_equal(mesh: ArbMesh) -> bool {
    let text = to_text(&mesh.0);
    parse_str(&text, ReadOptions { strict_indices: true }).unwrap() == mesh.0
}

#[quickcheck]
fn only_faces_free_of_removed_vertices_survive(mesh: ArbMesh, removed: Vec<u8>) -> bool {
    let removed: Vec<usize> = removed.into_iter().map(|i| usize::from(i % 16)).collect();
    let mut mesh = mesh.0;
    let before = mesh.clone();
    mesh.remove_vertices(&removed);

    let kept: Vec<&Polygon> = before
        .faces()
        .iter()
        .filter(|face| !face.vertex_indices().iter().any(|v| removed.contains(v)))
        .collect();
    kept.len() == mesh.faces().len()
        && kept
            .iter()
            .zip(mesh.faces())
            .all(|(old, new)| old.len() == new.len() && old.normal_indices() == new.normal_indices())
}

#[quickcheck]
fn surviving_indices_shift_by_removed_below(mesh: ArbMesh, removed: Vec<u8>) -> bool {
    let mut removed: Vec<usize> = removed.into_iter().map(|i| usize::from(i % 16)).collect();
    removed.sort_unstable();
    removed.dedup();
    let mut mesh = mesh.0;
    let before = mesh.clone();
    mesh.remove_vertices(&removed);

    let expected: Vec<Vec<usize>> = before
        .faces()
        .iter()
        .filter(|face| !face.vertex_indices().iter().any(|v| removed.contains(v)))
        .map(|face| {
            face.vertex_indices()
                .iter()
                .map(|&v| v - removed.iter().filter(|&&s| s < v).count())
                .collect()
        })
        .collect();
    let actual: Vec<Vec<usize>> = mesh.faces().iter().map(|f| f.vertex_indices().to_vec()).collect();

    expected == actual
        && mesh
            .faces()
            .iter()
            .all(|f| f.vertex_indices().iter().all(|&v| v < mesh.positions().len()))
}

#[quickcheck]
fn position_count_drops_by_in_range_removals(mesh: ArbMesh, removed: Vec<u8>) -> bool {
    let removed: Vec<usize> = removed.into_iter().map(usize::from).collect();
    let mut mesh = mesh.0;
    let len = mesh.positions().len();
    let mut in_range: Vec<usize> = removed.iter().copied().filter(|&i| i < len).collect();
    in_range.sort_unstable();
    in_range.dedup();

    mesh.remove_vertices(&removed);

    mesh.positions().len() == len - in_range.len()
}

#[quickcheck]
fn out_of_range_only_removal_is_a_no_op(mesh: ArbMesh, offsets: Vec<u16>) -> bool {
    let mut mesh = mesh.0;
    let before = mesh.clone();
    let len = mesh.positions().len();
    let removed: Vec<usize> = offsets.into_iter().map(|o| len + usize::from(o)).collect();

    mesh.remove_vertices(&removed);

    mesh == before
}

#[test]
fn partial_attribute_faces_read_back_equal() {
    let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1 2 3\nf 1//1 2/1 3\nf 1/1/1 2//1 3\n";
    let mesh = parse_str(text, ReadOptions { strict_indices: true }).unwrap();
    assert_eq!(mesh.faces()[1].texture_indices(), &[0]);
    assert_eq!(mesh.faces()[1].normal_indices(), &[0]);

    let again = parse_str(&to_text(&mesh), ReadOptions { strict_indices: true }).unwrap();
    assert_eq!(again, mesh);
}

#[test]
fn removing_the_middle_vertex_of_a_triangle() {
    let mut mesh = parse_str("v 0 0 0\nv 1 0 0\nv 2 0 0\nf 1 2 3", ReadOptions::default()).unwrap();
    mesh.remove_vertices(&[1]);
    assert_eq!(
        mesh.positions(),
        &[Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(2.0, 0.0, 0.0)]
    );
    assert!(mesh.faces().is_empty());
}
