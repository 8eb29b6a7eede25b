//! refnorm-kernels: golden-model normalization operators.
//!
//! This crate provides CPU reference implementations used as correctness
//! oracles for optimized normalization kernels:
//! - **Explicit Precision Discipline**: storage and compute types are
//!   separate generic parameters; all intermediate math runs in the compute
//!   type
//! - **Strided Tensors**: inputs and outputs are `ndarray` views, contiguous
//!   or not
//! - **Gate-then-Run Protocol**: a pure shape predicate decides support
//!   before the kernel executes
//!
//! # Quick Start
//!
//! ```ignore
//! use refnorm_kernels::{LayerNormArgs, PassThrough, ReduceShape, ReferenceLayerNorm};
//!
//! let op = ReferenceLayerNorm::new();
//! let args = LayerNormArgs {
//!     x: x.view(),
//!     gamma: gamma.view(),
//!     beta: beta.view(),
//!     y: y.view_mut(),
//!     saved_mean: saved_mean.view_mut(),
//!     saved_inv_std: saved_inv_std.view_mut(),
//!     post_op: PassThrough,
//!     shape: ReduceShape::row_wise(rows, cols),
//!     eps: 1e-5f32,
//! };
//! let metric = op.execute(args)?;
//! ```

pub mod ops;
pub mod shape;
pub mod traits;
pub mod validation;

pub use ops::layer_norm::{LayerNormArgs, ReferenceLayerNorm};
pub use ops::post_ops::{PassThrough, PostOp, Relu};
pub use shape::ReduceShape;
pub use traits::{Compute, Element};
pub use validation::{validate_reduce_shape, ShapeError};
