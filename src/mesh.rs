use crate::error::{Error, Result};
use crate::geometry::{Normal, Position, TextureCoordinate};
use crate::polygon::Polygon;

/// Four insertion-ordered tables. Faces refer to the other three by zero-based index.
///
/// Equality is structural over all four tables, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Position>,
    texture_coordinates: Vec<TextureCoordinate>,
    normals: Vec<Normal>,
    faces: Vec<Polygon>,
}

impl Mesh {
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            texture_coordinates: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn push_position(&mut self, position: Position) {
        self.positions.push(position);
    }

    pub fn push_texture_coordinate(&mut self, texture_coordinate: TextureCoordinate) {
        self.texture_coordinates.push(texture_coordinate);
    }

    pub fn push_normal(&mut self, normal: Normal) {
        self.normals.push(normal);
    }

    pub fn push_face(&mut self, face: Polygon) {
        self.faces.push(face);
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn texture_coordinates(&self) -> &[TextureCoordinate] {
        &self.texture_coordinates
    }

    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    #[inline]
    pub fn faces(&self) -> &[Polygon] {
        &self.faces
    }

    /// Whole-model checks run once the last line has been read.
    ///
    /// Only vertex indices are bounds-checked unless `strict_indices` is set,
    /// in which case texture and normal indices are checked against their own tables.
    pub fn validate(&self, strict_indices: bool) -> Result<()> {
        if self.positions.is_empty() {
            return Err(Error::format("model has no vertices", 0));
        }

        for face in &self.faces {
            if face.vertex_indices().iter().any(|&i| i >= self.positions.len()) {
                return Err(Error::format("invalid vertex index in polygon", 0));
            }
            if !strict_indices {
                continue;
            }
            if face.texture_indices().iter().any(|&i| !in_range(i, self.texture_coordinates.len())) {
                return Err(Error::format("invalid texture index in polygon", 0));
            }
            if face.normal_indices().iter().any(|&i| !in_range(i, self.normals.len())) {
                return Err(Error::format("invalid normal index in polygon", 0));
            }
        }

        Ok(())
    }

    pub(crate) fn positions_mut(&mut self) -> &mut Vec<Position> {
        &mut self.positions
    }

    pub(crate) fn faces_mut(&mut self) -> &mut Vec<Polygon> {
        &mut self.faces
    }
}

fn in_range(index: isize, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|index| index < len)
}
