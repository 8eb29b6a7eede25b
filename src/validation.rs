//! Shape validation for normalization kernels.
//!
//! Validation is the only checked failure path in this crate: an operator
//! either supports a shape descriptor or it does not, decided before the
//! kernel runs. Extent mismatches between the descriptor and the actual
//! tensor views are a caller contract and surface as index panics, not as
//! errors from here.

use thiserror::Error;

use crate::shape::ReduceShape;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("unsupported rank {0}, layernorm reference requires rank 2")]
    UnsupportedRank(usize),
    #[error("unsupported reduce dims {0:?}, only the last axis [1] is supported")]
    UnsupportedReduceDims(Vec<usize>),
}

/// Check that a descriptor names the rank-2, reduce-last-axis specialization.
///
/// Pure predicate over the descriptor; never inspects tensor data.
pub fn validate_reduce_shape(shape: &ReduceShape) -> Result<(), ShapeError> {
    if shape.rank() != 2 {
        return Err(ShapeError::UnsupportedRank(shape.rank()));
    }
    if shape.reduce_dims.as_slice() != [1] {
        return Err(ShapeError::UnsupportedReduceDims(shape.reduce_dims.clone()));
    }
    Ok(())
}
