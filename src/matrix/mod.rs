//! Dense storage and the naive reference multiply.
//!
//! The naive path is the correctness oracle the vectorised and tiled
//! implementations are checked against.

pub mod naive_ijk;
pub mod storage;
pub mod transpose;
