/// One face record: parallel zero-based index lists into the mesh tables.
///
/// `texture_indices` and `normal_indices` may be shorter than `vertex_indices`
/// (or empty) when references omit them. They are signed because they are only
/// bounds-checked on request, so a `0` or negative reference survives a read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    vertex_indices: Vec<usize>,
    texture_indices: Vec<isize>,
    normal_indices: Vec<isize>,
}

impl Polygon {
    #[inline]
    #[must_use]
    pub fn new(vertex_indices: Vec<usize>) -> Self {
        Self {
            vertex_indices,
            texture_indices: Vec::new(),
            normal_indices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(
        vertex_indices: Vec<usize>,
        texture_indices: Vec<isize>,
        normal_indices: Vec<isize>,
    ) -> Self {
        Self {
            vertex_indices,
            texture_indices,
            normal_indices,
        }
    }

    #[inline]
    pub fn vertex_indices(&self) -> &[usize] {
        &self.vertex_indices
    }

    #[inline]
    pub fn texture_indices(&self) -> &[isize] {
        &self.texture_indices
    }

    #[inline]
    pub fn normal_indices(&self) -> &[isize] {
        &self.normal_indices
    }

    /// Number of face-vertex references.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertex_indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_indices.is_empty()
    }

    /// `(vertex, texture, normal)` for each reference slot.
    pub fn references(&self) -> impl Iterator<Item = (usize, Option<isize>, Option<isize>)> + '_ {
        self.vertex_indices.iter().enumerate().map(|(slot, &vertex)| {
            (
                vertex,
                self.texture_indices.get(slot).copied(),
                self.normal_indices.get(slot).copied(),
            )
        })
    }

    pub(crate) fn push_reference(&mut self, vertex: usize, texture: Option<isize>, normal: Option<isize>) {
        self.vertex_indices.push(vertex);
        if let Some(texture) = texture {
            self.texture_indices.push(texture);
        }
        if let Some(normal) = normal {
            self.normal_indices.push(normal);
        }
    }

    pub(crate) fn vertex_indices_mut(&mut self) -> &mut [usize] {
        &mut self.vertex_indices
    }
}
