//! Elementwise epilogue transforms for normalization kernels.
//!
//! A post-op is applied to each value after normalization and the affine
//! transform, while the value is still in compute precision. [`PassThrough`]
//! is the identity; any `Fn(C) -> C` closure also qualifies.

use crate::traits::Compute;

/// Final elementwise transform applied before the output store.
pub trait PostOp<C: Compute> {
    fn apply(&self, y: C) -> C;
}

/// Identity epilogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThrough;

impl<C: Compute> PostOp<C> for PassThrough {
    #[inline(always)]
    fn apply(&self, y: C) -> C {
        y
    }
}

/// `max(y, 0)` epilogue, for fused norm-then-activation checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relu;

impl<C: Compute> PostOp<C> for Relu {
    #[inline(always)]
    fn apply(&self, y: C) -> C {
        if y > C::ZERO {
            y
        } else {
            C::ZERO
        }
    }
}

impl<C: Compute, F: Fn(C) -> C> PostOp<C> for F {
    #[inline(always)]
    fn apply(&self, y: C) -> C {
        self(y)
    }
}
