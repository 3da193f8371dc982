//! End-to-end flow: pick a file, pick vertices, remove them, save.
//!
//! Choosing paths and indices is delegated to a [`Collaborator`], so the flow
//! works the same behind a console prompt, a dialog or a test double.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::reader::{ReadOptions, read_with};
use crate::writer::write;

pub trait Collaborator {
    /// `None` when the user abandons the selection.
    fn select_input_path(&mut self) -> Option<PathBuf>;

    /// Zero-based position indices to remove. May be empty.
    fn prompt_vertex_indices(&mut self) -> Vec<usize>;

    /// `None` when the user abandons saving.
    fn select_output_path(&mut self, default_path: &Path) -> Option<PathBuf>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub read: ReadOptions,
    /// Read the saved file back and compare it with the in-memory mesh.
    pub verify: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            read: ReadOptions::default(),
            verify: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    NoInput,
    InputUnreadable(PathBuf),
    NoIndicesSelected,
    IndexOutOfRange { index: usize, positions: usize },
    NoOutput,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalReport {
    pub positions_before: usize,
    pub positions_after: usize,
    pub faces_before: usize,
    pub faces_after: usize,
}

impl RemovalReport {
    fn measure(before: &Mesh, after: &Mesh) -> Self {
        Self {
            positions_before: before.positions().len(),
            positions_after: after.positions().len(),
            faces_before: before.faces().len(),
            faces_after: after.faces().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Aborted(AbortReason),
    Saved {
        path: PathBuf,
        report: RemovalReport,
        /// `None` when verification was disabled.
        verified: Option<bool>,
    },
}

/// Runs the whole flow once.
///
/// Abandoned selections, an unreadable input and bad indices end in
/// [`Outcome::Aborted`]; malformed input and write failures are returned as errors.
pub fn run<C: Collaborator>(collaborator: &mut C, options: SessionOptions) -> Result<Outcome> {
    let Some(input) = collaborator.select_input_path() else {
        info!("File selection cancelled");
        return Ok(Outcome::Aborted(AbortReason::NoInput));
    };

    let mut mesh = match read_with(&input, options.read) {
        Ok(mesh) => mesh,
        Err(Error::Io { path, source }) => {
            info!("Input file is not readable: {}: {}", path.display(), source);
            return Ok(Outcome::Aborted(AbortReason::InputUnreadable(input)));
        }
        Err(e) => return Err(e),
    };

    let indices = collaborator.prompt_vertex_indices();
    if indices.is_empty() {
        info!("No vertices selected for removal");
        return Ok(Outcome::Aborted(AbortReason::NoIndicesSelected));
    }

    let positions = mesh.positions().len();
    if let Some(&index) = indices.iter().find(|&&i| i >= positions) {
        info!(
            "Vertex index {} is out of range, valid range is 0-{}",
            index,
            positions - 1
        );
        return Ok(Outcome::Aborted(AbortReason::IndexOutOfRange { index, positions }));
    }

    let original = mesh.clone();
    mesh.remove_vertices(&indices);
    let report = RemovalReport::measure(&original, &mesh);

    let Some(output) = collaborator.select_output_path(&input) else {
        info!("Save cancelled");
        return Ok(Outcome::Aborted(AbortReason::NoOutput));
    };

    write(&mesh, &output)?;

    let verified = if options.verify {
        Some(verify(&mesh, &output, options.read))
    } else {
        None
    };

    Ok(Outcome::Saved {
        path: output,
        report,
        verified,
    })
}

fn verify(mesh: &Mesh, path: &Path, options: ReadOptions) -> bool {
    match read_with(path, options) {
        Ok(saved) if saved == *mesh => true,
        Ok(_) => {
            warn!("Model changed after saving: {}", path.display());
            false
        }
        Err(e) => {
            warn!("Could not read back {}: {}", path.display(), e);
            false
        }
    }
}
