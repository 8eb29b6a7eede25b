//! Scalar traits for mixed-precision reference kernels.
//!
//! Storage and compute precision are kept distinct: tensors may hold narrow
//! types (f16, bf16) while all intermediate arithmetic runs in a wider
//! [`Compute`] type. Conversions are routed through f64, which is exact for
//! every supported storage/compute pair.

use std::fmt::Debug;

use half::{bf16, f16};

/// A scalar type that can live in tensor storage.
///
/// Implemented for `f32`, `f64`, and the `half` types. Storage scalars only
/// need to round-trip through f64; arithmetic happens in a [`Compute`] type.
pub trait Element: Debug + Clone + Copy + Default + Send + Sync + 'static {
    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    /// Convert into another element type. Widening conversions are exact;
    /// narrowing conversions round once, at this call site.
    #[inline(always)]
    fn convert<T: Element>(self) -> T {
        T::from_f64(self.to_f64())
    }
}

impl Element for f32 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Element for f16 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        f16::from_f64(v)
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }
}

impl Element for bf16 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        bf16::from_f64(v)
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        bf16::to_f64(self)
    }
}

/// An element type wide enough to accumulate in.
///
/// Reference kernels accumulate sums, squares, and divisors in this type and
/// convert to the storage type only on the final write. Implemented for `f32`
/// and `f64`; the half types are storage-only.
pub trait Compute:
    Element
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn sqrt(self) -> Self;

    #[inline(always)]
    fn from_usize(v: usize) -> Self {
        Self::from_f64(v as f64)
    }
}

impl Compute for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Compute for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}
