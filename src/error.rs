use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    #[error("dimension mismatch: [{left}x{left}] @ [{right}x{right}]")]
    DimensionMismatch { left: usize, right: usize },
    #[error("invalid value range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: i32, upper: i32 },
    #[error("buffer length mismatch for {dimension}x{dimension} matrix: expected {expected}, got {got}")]
    BufferLength {
        dimension: usize,
        expected: usize,
        got: usize,
    },
    #[error("failed to allocate storage for {elements} elements")]
    AllocationFailed { elements: usize },
    #[error("tile size {tile_size} must be a non-zero multiple of the register block width {register_block} whose pack buffers fit in memory")]
    InvalidTileSize {
        tile_size: usize,
        register_block: usize,
    },
    #[error("dimension {dimension} is too large: element count overflows usize")]
    Overflow { dimension: usize },
}

pub type Result<T> = std::result::Result<T, MatmulError>;

/// Allocates a zeroed buffer of `len` elements, reporting failure instead of aborting.
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<i32>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| MatmulError::AllocationFailed { elements: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// `n * n`, checked.
pub(crate) fn square_len(dimension: usize) -> Result<usize> {
    dimension
        .checked_mul(dimension)
        .ok_or(MatmulError::Overflow { dimension })
}
