//! Packed and blocked GEMM implementations.
//!
//! These functions consume A and the transposed B, stage row windows into
//! contiguous panels, and call the microkernels for the inner computation.
//!
//! - `pack`: copies register blocks of rows into scratch panels
//! - `gemm_4x4`: three-level cache tiling around the 4×4 kernel
//! - `simple_simd`: vector dot products per cell, no blocking

pub mod gemm_4x4;
pub mod pack;
pub mod simple_simd;
