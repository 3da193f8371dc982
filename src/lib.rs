pub mod error;
pub mod geometry;
pub mod mesh;
pub mod polygon;
pub mod reader;
pub mod session;
pub mod writer;
mod removal;

pub use crate::error::{Error, Result};
pub use crate::mesh::Mesh;
pub use crate::polygon::Polygon;
pub use crate::reader::{ReadOptions, parse_str, read, read_with};
pub use crate::writer::{write, write_to};
