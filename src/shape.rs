//! Shape descriptor for reduction kernels.

/// Extents of a tensor together with the set of axes being reduced.
///
/// The descriptor is dynamically ranked on purpose: operators advertise which
/// specializations they support by validating the descriptor, rather than by
/// the type system. The reference layernorm accepts rank 2 with the last axis
/// reduced and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceShape {
    /// Extent along each axis, outermost first.
    pub lengths: Vec<usize>,
    /// Indices of the axes being reduced.
    pub reduce_dims: Vec<usize>,
}

impl ReduceShape {
    pub fn new(lengths: Vec<usize>, reduce_dims: Vec<usize>) -> Self {
        Self {
            lengths,
            reduce_dims,
        }
    }

    /// Descriptor for the rank-2, reduce-last-axis case: `rows` independent
    /// rows of `cols` features each.
    pub fn row_wise(rows: usize, cols: usize) -> Self {
        Self {
            lengths: vec![rows, cols],
            reduce_dims: vec![1],
        }
    }

    pub fn rank(&self) -> usize {
        self.lengths.len()
    }

    /// Extent along one axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= rank()`.
    pub fn extent(&self, axis: usize) -> usize {
        self.lengths[axis]
    }
}
