//! Dense square integer matrix multiplication, built from scratch.
//!
//! Three ways to compute `C = A × B` on `i32` matrices, all returning the
//! same result: the textbook triple loop, a per-cell vector dot product
//! against the transposed B, and a cache-blocked GEMM that packs register
//! blocks of rows and runs a 4×4 microkernel over them.
//!
//! ## Usage
//!
//! ```
//! use densemm::{create_random, equals, multiply_naive, multiply_tiled};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let a = create_random(70, 1, 10, &mut rng).unwrap();
//! let b = create_random(70, 1, 10, &mut rng).unwrap();
//!
//! let naive = multiply_naive(&a, &b).unwrap();
//! let tiled = multiply_tiled(&a, &b).unwrap();
//! assert!(equals(&naive, &tiled));
//! ```
//!
//! ## What's inside
//!
//! - `Matrix`: flat row-major storage plus a transposed mirror
//! - Portable vector lanes (`wide::i32x4`, `wide::i32x8`, scalar width 1)
//! - 4×4 microkernel with 16 accumulators and scalar tail cleanup
//! - Three-level cache blocking with row packing
//!
//! Arithmetic wraps on overflow in every path, so the fast paths agree with
//! the naive loop bit-for-bit.

pub mod blocked;
pub mod config;
pub mod error;
pub mod kernels;
pub mod matrix;

pub use config::{DEFAULT_TILE_SIZE, MR, TileConfig};
pub use error::{MatmulError, Result};
pub use kernels::lanes::{Lanes, Scalar};
pub use matrix::storage::Matrix;

use rand::Rng;
use wide::i32x4;

use crate::error::try_zeroed;

/// An `n × n` matrix with every element drawn uniformly from `[lower, upper]`.
///
/// The generator is supplied by the caller so fixtures can be reproduced.
///
/// # Errors
///
/// `InvalidRange` if `lower > upper`, `AllocationFailed` if storage can't
/// be reserved.
pub fn create_random<R: Rng + ?Sized>(
    dimension: usize,
    lower: i32,
    upper: i32,
    rng: &mut R,
) -> Result<Matrix> {
    Matrix::random(dimension, lower, upper, rng)
}

/// `true` iff both matrices have the same dimension and every element matches.
pub fn equals(a: &Matrix, b: &Matrix) -> bool {
    a == b
}

/// Matrix multiply with the naive i-j-k loop: the correctness reference.
///
/// # Errors
///
/// `DimensionMismatch` if the operands differ in size.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let n = check_dims(a, b)?;
    let mut c = try_zeroed(n * n)?;
    matrix::naive_ijk::matmul_naive_ijk(a.as_slice(), b.as_slice(), &mut c, n);
    Matrix::with_mirror(n, c)
}

/// Per-cell vector dot products against the transposed B, 4 lanes wide.
pub fn multiply_simd(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_simd_with::<i32x4>(a, b)
}

/// Same as [`multiply_simd`] with the vector type chosen by the caller.
pub fn multiply_simd_with<V: Lanes>(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let n = check_dims(a, b)?;
    let mut c = try_zeroed(n * n)?;
    blocked::simple_simd::matmul_simple_simd::<V>(a.as_slice(), b.transposed(), &mut c, n);
    Matrix::with_mirror(n, c)
}

/// Cache-blocked multiply with the 4×4 kernel, 4 lanes wide, default tiles.
///
/// Equal to [`multiply_naive`] for every dimension.
pub fn multiply_tiled(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_tiled_with::<i32x4>(a, b, &TileConfig::default())
}

/// Same as [`multiply_tiled`] with the vector type and tile size chosen by
/// the caller.
///
/// ```
/// use densemm::{Matrix, Scalar, TileConfig, multiply_tiled_with};
///
/// let a = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
/// let b = Matrix::from_vec(2, vec![5, 6, 7, 8]).unwrap();
/// let config = TileConfig::new(8).unwrap();
///
/// let c = multiply_tiled_with::<Scalar>(&a, &b, &config).unwrap();
/// assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
/// ```
pub fn multiply_tiled_with<V: Lanes>(a: &Matrix, b: &Matrix, config: &TileConfig) -> Result<Matrix> {
    let n = check_dims(a, b)?;
    let mut c = try_zeroed(n * n)?;
    blocked::gemm_4x4::matmul_blocked_4x4::<V>(
        a.as_slice(),
        b.transposed(),
        &mut c,
        n,
        config.tile_size(),
    )?;
    Matrix::with_mirror(n, c)
}

fn check_dims(a: &Matrix, b: &Matrix) -> Result<usize> {
    if a.dimension() != b.dimension() {
        return Err(MatmulError::DimensionMismatch {
            left: a.dimension(),
            right: b.dimension(),
        });
    }
    Ok(a.dimension())
}
