use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::mesh::Mesh;

/// Writes `mesh` to `path`, replacing any existing file.
pub fn write(mesh: &Mesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    write_to(mesh, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(path, e))?;

    info!(
        "Saved {} positions and {} faces to {}",
        mesh.positions().len(),
        mesh.faces().len(),
        path.display()
    );
    Ok(())
}

/// Serializes `mesh` to any writer. Indices are written 1-based.
pub fn write_to<W: Write>(mesh: &Mesh, writer: &mut W) -> std::io::Result<()> {
    for position in mesh.positions() {
        writeln!(writer, "v {}", position)?;
    }

    for texture_coordinate in mesh.texture_coordinates() {
        writeln!(writer, "vt {}", texture_coordinate)?;
    }

    for normal in mesh.normals() {
        writeln!(writer, "vn {}", normal)?;
    }

    for face in mesh.faces() {
        write!(writer, "f")?;
        for (vertex, texture, normal) in face.references() {
            match (texture, normal) {
                (Some(t), Some(n)) => write!(writer, " {}/{}/{}", vertex + 1, t + 1, n + 1)?,
                (Some(t), None) => write!(writer, " {}/{}", vertex + 1, t + 1)?,
                (None, Some(n)) => write!(writer, " {}//{}", vertex + 1, n + 1)?,
                (None, None) => write!(writer, " {}", vertex + 1)?,
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}
