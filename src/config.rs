//! Blocking parameters for the tiled multiply.
//!
//! The register-block width is fixed at compile time because the microkernel
//! keeps an `MR × MR` grid of accumulators. The cache tile is a runtime knob:
//! it must be a multiple of `MR` so that register blocks never straddle two
//! tiles.

use crate::error::{MatmulError, Result};

/// Register-block width: rows of A and rows of Bᵀ processed per microkernel call.
pub const MR: usize = 4;

/// Default cache tile, in elements, along each of the three loop dimensions.
///
/// Three 64×64 `i32` tiles come to 48KB, which sits comfortably in L1/L2.
pub const DEFAULT_TILE_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfig {
    tile_size: usize,
}

impl TileConfig {
    pub fn new(tile_size: usize) -> Result<Self> {
        if tile_size == 0 || tile_size % MR != 0 || MR.checked_mul(tile_size).is_none() {
            return Err(MatmulError::InvalidTileSize {
                tile_size,
                register_block: MR,
            });
        }
        Ok(Self { tile_size })
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tile() {
        assert_eq!(TileConfig::default().tile_size(), DEFAULT_TILE_SIZE);
        assert_eq!(DEFAULT_TILE_SIZE % MR, 0);
    }

    #[test]
    fn test_rejects_bad_tiles() {
        for bad in [0, 1, 6, 65] {
            assert_eq!(
                TileConfig::new(bad),
                Err(MatmulError::InvalidTileSize {
                    tile_size: bad,
                    register_block: MR
                })
            );
        }
        assert_eq!(TileConfig::new(8).unwrap().tile_size(), 8);
    }

    #[test]
    fn test_rejects_tiles_whose_pack_size_overflows() {
        // Multiple of MR, but MR * tile does not fit in usize
        let too_big = (usize::MAX / (MR * MR) + 1) * MR;
        assert_eq!(
            TileConfig::new(too_big),
            Err(MatmulError::InvalidTileSize {
                tile_size: too_big,
                register_block: MR
            })
        );

        let largest = (usize::MAX / (MR * MR)) * MR;
        assert_eq!(TileConfig::new(largest).unwrap().tile_size(), largest);
    }
}
