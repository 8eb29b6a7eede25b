pub mod layer_norm;
pub mod post_ops;

pub use layer_norm::{LayerNormArgs, ReferenceLayerNorm};
pub use post_ops::{PassThrough, PostOp, Relu};
