//! Portable vector lanes for the dot-product kernels.
//!
//! The kernels are generic over [`Lanes`], so the blocking code never names
//! an instruction set. `wide` picks SSE/AVX/NEON/simd128 at compile time and
//! falls back to plain arrays elsewhere; [`Scalar`] is the width-1 path.
//! All lane arithmetic wraps on overflow.

use wide::{i32x4, i32x8};

pub trait Lanes: Copy {
    /// Elements processed per step.
    const WIDTH: usize;

    fn zero() -> Self;

    /// Loads the first `WIDTH` elements of `src`.
    fn load(src: &[i32]) -> Self;

    /// `self + a * b`, lane-wise.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// Horizontal reduction: sum of all lanes.
    fn reduce_sum(self) -> i32;
}

/// Width-1 fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar(pub i32);

impl Lanes for Scalar {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn zero() -> Self {
        Scalar(0)
    }

    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        Scalar(src[0])
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Scalar(self.0.wrapping_add(a.0.wrapping_mul(b.0)))
    }

    #[inline(always)]
    fn reduce_sum(self) -> i32 {
        self.0
    }
}

impl Lanes for i32x4 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn zero() -> Self {
        i32x4::splat(0)
    }

    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        let mut tmp = [0i32; 4];
        tmp.copy_from_slice(&src[..4]);
        i32x4::from(tmp)
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self + a * b
    }

    #[inline(always)]
    fn reduce_sum(self) -> i32 {
        self.to_array()
            .iter()
            .fold(0i32, |acc, &lane| acc.wrapping_add(lane))
    }
}

impl Lanes for i32x8 {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn zero() -> Self {
        i32x8::splat(0)
    }

    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        let mut tmp = [0i32; 8];
        tmp.copy_from_slice(&src[..8]);
        i32x8::from(tmp)
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self + a * b
    }

    #[inline(always)]
    fn reduce_sum(self) -> i32 {
        self.to_array()
            .iter()
            .fold(0i32, |acc, &lane| acc.wrapping_add(lane))
    }
}

/// Dot product of two equal-length slices: full vector steps, then a scalar
/// cleanup of the `len % V::WIDTH` remainder.
#[inline(always)]
pub fn dot<V: Lanes>(a: &[i32], b: &[i32]) -> i32 {
    debug_assert_eq!(a.len(), b.len());
    let len = a.len();
    let main = len - len % V::WIDTH;

    let mut acc = V::zero();
    let mut p = 0;
    while p < main {
        acc = acc.mul_add(V::load(&a[p..]), V::load(&b[p..]));
        p += V::WIDTH;
    }

    let mut sum = acc.reduce_sum();
    for q in main..len {
        sum = sum.wrapping_add(a[q].wrapping_mul(b[q]));
    }
    sum
}
