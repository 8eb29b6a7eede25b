//! Golden-model Layer Normalization.
//!
//! Row-wise layernorm over a 2-D batch, written as a correctness oracle for
//! optimized kernels rather than as a fast path itself.
//!
//! # Formula
//!
//! ```text
//! mean[m]    = sum_n(x[m,n]) / N
//! var[m]     = sum_n(x[m,n]^2) / N - mean[m]^2
//! inv_std[m] = 1 / sqrt(var[m] + eps)
//! y[m,n]     = post_op((x[m,n] - mean[m]) * inv_std[m] * gamma[n] + beta[n])
//! ```
//!
//! # Design
//!
//! - All arithmetic runs in an explicit compute type `C`; storage types are
//!   converted on read and on the final store, nowhere else.
//! - The variance uses the `E[x^2] - E[x]^2` form. Optimized kernels are
//!   compared against this oracle within a fixed tolerance that assumes this
//!   exact formula, so it must not be swapped for a centered or Welford
//!   scheme even though those are more stable.
//! - Tensors are `ndarray` views and may be non-contiguous; the kernel only
//!   uses multi-index access.

use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2};

use crate::ops::post_ops::PostOp;
use crate::shape::ReduceShape;
use crate::traits::{Compute, Element};
use crate::validation::{validate_reduce_shape, ShapeError};

/// One layernorm invocation, fully described.
///
/// Construction performs no validation; gate with
/// [`ReferenceLayerNorm::is_supported_argument`] before running. The mutable
/// views are the only mutation channel — the args value itself is consumed
/// unchanged.
///
/// Extent consistency between the views and `shape` is the caller's
/// responsibility; mismatches panic on index, they are not reported.
pub struct LayerNormArgs<'a, X, G, B, Y, S, C, Op>
where
    X: Element,
    G: Element,
    B: Element,
    Y: Element,
    S: Element,
    C: Compute,
    Op: PostOp<C>,
{
    /// Input batch, `M x N`.
    pub x: ArrayView2<'a, X>,
    /// Per-column scale, length `N`.
    pub gamma: ArrayView1<'a, G>,
    /// Per-column shift, length `N`.
    pub beta: ArrayView1<'a, B>,
    /// Output batch, `M x N`. Must not alias `x`.
    pub y: ArrayViewMut2<'a, Y>,
    /// Per-row mean, length `M`, written for downstream consumers.
    pub saved_mean: ArrayViewMut1<'a, S>,
    /// Per-row `1/sqrt(var + eps)`, length `M`, written for downstream
    /// consumers.
    pub saved_inv_std: ArrayViewMut1<'a, S>,
    /// Epilogue applied to each value while still in compute precision.
    pub post_op: Op,
    /// Extents and reduced axes; must describe `(M, N)` reducing axis 1.
    pub shape: ReduceShape,
    /// Added to the variance before the square root.
    pub eps: C,
}

/// Stateless reference operator for row-wise layernorm.
///
/// Supports exactly the rank-2, reduce-last-axis specialization. `run` on a
/// rejected argument is unspecified; callers consult the gate first or go
/// through [`execute`](Self::execute).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceLayerNorm;

impl ReferenceLayerNorm {
    pub fn new() -> Self {
        Self
    }

    /// Human-readable operator identifier for dispatch and reporting.
    pub fn name(&self) -> &'static str {
        "layer_norm_reference"
    }

    /// The reference build is always usable; there are no compile-time
    /// kernel variants to gate on.
    pub const fn is_valid_compilation_parameter() -> bool {
        true
    }

    /// Shape gate: true iff the argument describes rank 2 with the last
    /// axis reduced. Pure, no side effects.
    pub fn is_supported_argument<X, G, B, Y, S, C, Op>(
        &self,
        args: &LayerNormArgs<'_, X, G, B, Y, S, C, Op>,
    ) -> bool
    where
        X: Element,
        G: Element,
        B: Element,
        Y: Element,
        S: Element,
        C: Compute,
        Op: PostOp<C>,
    {
        validate_reduce_shape(&args.shape).is_ok()
    }

    /// Run the two-pass reference computation, consuming the argument.
    ///
    /// Returns the metric slot of the shared execution-result protocol;
    /// always 0.0 for the reference (optimized implementations repurpose it
    /// for elapsed time).
    pub fn run<X, G, B, Y, S, C, Op>(
        &self,
        mut args: LayerNormArgs<'_, X, G, B, Y, S, C, Op>,
    ) -> f32
    where
        X: Element,
        G: Element,
        B: Element,
        Y: Element,
        S: Element,
        C: Compute,
        Op: PostOp<C>,
    {
        let rows = args.shape.extent(0);
        let cols = args.shape.extent(1);

        let mut mean = vec![C::ZERO; rows];
        let mut var = vec![C::ZERO; rows];

        // Pass 1: per-row sum and sum of squares, accumulated in compute
        // precision. Rows are independent.
        for m in 0..rows {
            let mut sum = C::ZERO;
            let mut sum_sq = C::ZERO;

            for n in 0..cols {
                let x_val: C = args.x[[m, n]].convert();
                sum = sum + x_val;
                sum_sq = sum_sq + x_val * x_val;
            }

            let len = C::from_usize(cols);
            mean[m] = sum / len;
            var[m] = sum_sq / len - mean[m] * mean[m];
        }

        // Pass 2: normalize, affine, epilogue, store.
        for m in 0..rows {
            let divisor = C::ONE / (var[m] + args.eps).sqrt();

            for n in 0..cols {
                let x_val: C = args.x[[m, n]].convert();
                let gamma_val: C = args.gamma[n].convert();
                let beta_val: C = args.beta[n].convert();

                let mut y_val = (x_val - mean[m]) * divisor;
                y_val = y_val * gamma_val + beta_val;
                y_val = args.post_op.apply(y_val);

                args.y[[m, n]] = y_val.convert();
            }

            args.saved_mean[m] = mean[m].convert();
            args.saved_inv_std[m] = divisor.convert();
        }

        0.0
    }

    /// Gate-then-run convenience entry.
    pub fn execute<X, G, B, Y, S, C, Op>(
        &self,
        args: LayerNormArgs<'_, X, G, B, Y, S, C, Op>,
    ) -> Result<f32, ShapeError>
    where
        X: Element,
        G: Element,
        B: Element,
        Y: Element,
        S: Element,
        C: Compute,
        Op: PostOp<C>,
    {
        validate_reduce_shape(&args.shape)?;
        log::debug!(
            "layer_norm_reference: rows={} cols={}",
            args.shape.extent(0),
            args.shape.extent(1)
        );
        Ok(self.run(args))
    }
}
