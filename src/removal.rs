use tracing::debug;

use crate::mesh::Mesh;

impl Mesh {
    /// Removes the given positions, drops every face that references one of them,
    /// and renumbers the vertex indices of the faces that remain.
    ///
    /// Indices outside the position table are ignored. Duplicates count once.
    /// Texture coordinates, normals and their face indices are left untouched.
    pub fn remove_vertices(&mut self, indices: &[usize]) {
        self.remove_vertex_set(indices.iter().copied());
    }

    /// Same as [`Mesh::remove_vertices`] for any source of indices.
    pub fn remove_vertex_set<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let mut removed: Vec<usize> = indices.into_iter().collect();
        removed.sort_unstable();
        removed.dedup();
        if removed.is_empty() {
            return;
        }

        // Faces go first: a face touching any removed index is dropped whole.
        let faces_before = self.faces().len();
        self.faces_mut()
            .retain(|face| !face.vertex_indices().iter().any(|i| removed.binary_search(i).is_ok()));

        // Highest to lowest so pending indices keep their meaning.
        let positions = self.positions_mut();
        let positions_before = positions.len();
        for &index in removed.iter().rev() {
            if index < positions.len() {
                positions.remove(index);
            }
        }
        let positions_after = positions.len();

        for face in self.faces_mut() {
            for vertex in face.vertex_indices_mut() {
                let shift = removed.partition_point(|&r| r < *vertex);
                *vertex -= shift;
            }
        }

        debug!(
            "Removed {} positions and {} faces",
            positions_before - positions_after,
            faces_before - self.faces().len()
        );
    }
}
