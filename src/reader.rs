//! Line-oriented OBJ reader.
//!
//! Recognized records are `v`, `vt`, `vn` and `f`. Blank lines and `#` comments
//! are skipped; any other record keyword is logged and ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::geometry::{Vector2f, Vector3f};
use crate::mesh::Mesh;
use crate::polygon::Polygon;

const OBJ_VERTEX_TOKEN: &str = "v";
const OBJ_TEXTURE_TOKEN: &str = "vt";
const OBJ_NORMAL_TOKEN: &str = "vn";
const OBJ_FACE_TOKEN: &str = "f";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Also bounds-check texture and normal indices once reading is done.
    pub strict_indices: bool,
}

/// Reads the mesh stored at `path` with default options.
pub fn read(path: impl AsRef<Path>) -> Result<Mesh> {
    read_with(path, ReadOptions::default())
}

pub fn read_with(path: impl AsRef<Path>, options: ReadOptions) -> Result<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);

    let mut parser = ObjParser::default();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        parser.parse_line(&line, line_index + 1)?;
    }

    parser.finish(options, &path.display().to_string())
}

/// Parses an in-memory OBJ document.
pub fn parse_str(text: &str, options: ReadOptions) -> Result<Mesh> {
    let mut parser = ObjParser::default();
    for (line_index, line) in text.lines().enumerate() {
        parser.parse_line(line, line_index + 1)?;
    }

    parser.finish(options, "<memory>")
}

#[derive(Debug, Default)]
struct ObjParser {
    mesh: Mesh,
    /// Set when a face refers to a vertex below 1. Such a face is not kept and
    /// the model fails the end-of-read vertex check.
    vertex_underflow: bool,
}

impl ObjParser {
    fn parse_line(&mut self, line: &str, line_index: usize) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let mut words = line.split_whitespace();
        let Some(token) = words.next() else {
            return Ok(());
        };
        let args: Vec<&str> = words.collect();

        match token {
            OBJ_VERTEX_TOKEN => self.mesh.push_position(parse_vector3(&args, line_index)?),
            OBJ_TEXTURE_TOKEN => self.mesh.push_texture_coordinate(parse_vector2(&args, line_index)?),
            OBJ_NORMAL_TOKEN => self.mesh.push_normal(parse_vector3(&args, line_index)?),
            OBJ_FACE_TOKEN => match parse_face(&args, line_index)? {
                Some(polygon) => self.mesh.push_face(polygon),
                None => self.vertex_underflow = true,
            },
            _ => warn!("Unknown token at line {}: {}", line_index, token),
        }

        Ok(())
    }

    fn finish(self, options: ReadOptions, source: &str) -> Result<Mesh> {
        let mesh = self.mesh;
        mesh.validate(options.strict_indices)?;
        if self.vertex_underflow {
            return Err(Error::format("invalid vertex index in polygon", 0));
        }

        info!(
            "Read {}: {} positions, {} texture coordinates, {} normals, {} faces",
            source,
            mesh.positions().len(),
            mesh.texture_coordinates().len(),
            mesh.normals().len(),
            mesh.faces().len()
        );
        Ok(mesh)
    }
}

fn parse_float(args: &[&str], position: usize, line_index: usize) -> Result<f32> {
    args.get(position)
        .ok_or_else(|| Error::format("too few arguments", line_index))?
        .parse::<f32>()
        .map_err(|_| Error::format("failed to parse float", line_index))
}

// Fields past the required count are ignored.
fn parse_vector3(args: &[&str], line_index: usize) -> Result<Vector3f> {
    Ok(Vector3f::new(
        parse_float(args, 0, line_index)?,
        parse_float(args, 1, line_index)?,
        parse_float(args, 2, line_index)?,
    ))
}

fn parse_vector2(args: &[&str], line_index: usize) -> Result<Vector2f> {
    Ok(Vector2f::new(
        parse_float(args, 0, line_index)?,
        parse_float(args, 1, line_index)?,
    ))
}

/// `None` when some reference points below the first vertex. The whole line is
/// still parsed so later tokens report their own errors.
fn parse_face(args: &[&str], line_index: usize) -> Result<Option<Polygon>> {
    if args.is_empty() {
        return Err(Error::format("too few arguments", line_index));
    }

    let mut polygon = Polygon::default();
    let mut underflow = false;
    for word in args {
        let (vertex, texture, normal) = parse_face_word(word, line_index)?;
        match usize::try_from(vertex) {
            Ok(vertex) => polygon.push_reference(vertex, texture, normal),
            Err(_) => underflow = true,
        }
    }
    Ok(if underflow { None } else { Some(polygon) })
}

/// Splits one `i`, `i/j`, `i//k` or `i/j/k` reference into zero-based indices.
fn parse_face_word(word: &str, line_index: usize) -> Result<(isize, Option<isize>, Option<isize>)> {
    let mut parts: Vec<&str> = word.split('/').collect();
    // Trailing empty parts carry nothing: "1/2/" reads as "1/2".
    while parts.last() == Some(&"") {
        parts.pop();
    }

    match parts.as_slice() {
        [vertex] => Ok((parse_index(vertex, line_index)?, None, None)),
        [vertex, texture] => Ok((
            parse_index(vertex, line_index)?,
            Some(parse_index(texture, line_index)?),
            None,
        )),
        [vertex, texture, normal] => {
            let vertex = parse_index(vertex, line_index)?;
            let normal = parse_index(normal, line_index)?;
            let texture = if texture.is_empty() {
                None
            } else {
                Some(parse_index(texture, line_index)?)
            };
            Ok((vertex, texture, Some(normal)))
        }
        _ => Err(Error::format("invalid element size", line_index)),
    }
}

/// 1-based `int` token to a zero-based index. Values below 1 come out negative.
fn parse_index(word: &str, line_index: usize) -> Result<isize> {
    let one_based: i32 = word
        .parse()
        .map_err(|_| Error::format("failed to parse int", line_index))?;
    isize::try_from(i64::from(one_based) - 1)
        .map_err(|_| Error::format("failed to parse int", line_index))
}
