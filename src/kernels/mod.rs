//! Vectorised microkernels for the inner loop of matrix multiplication.
//!
//! These kernels compute small tiles of C += A × Bᵀ from packed panels.
//! They're called by the blocked GEMM after packing rows of A and of the
//! transposed B into contiguous scratch buffers.
//!
//! - `lanes`: the portable vector abstraction (`Scalar`, `i32x4`, `i32x8`)
//! - `kernel_4x4`: full 4×4 tile, 16 accumulators, plus the partial edge tile

pub mod kernel_4x4;
pub mod lanes;
