//! 4×4 blocked GEMM over packed row windows.

use crate::config::MR;
use crate::error::{Result, try_zeroed};
use crate::kernels::kernel_4x4::{kernel_4x4, kernel_edge};
use crate::kernels::lanes::Lanes;

use super::pack::pack_rows;

/// Cache-blocked matrix multiplication using the 4×4 microkernel.
///
/// Three levels of tiling (output rows, output columns, reduction), each
/// `tile` wide and clipped to `n` at the end. Inside a tile, rows of A are
/// packed four at a time for the current reduction window, then for every
/// group of four columns the matching rows of Bᵀ are packed and the kernel
/// adds the 4×4 partial dot products into C. Register blocks cut short by
/// the tile or matrix edge go through `kernel_edge`, and the kernels finish
/// reduction windows that are not a multiple of `V::WIDTH` themselves, so
/// every `n` is handled.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `bt` - Transposed matrix B^T (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, must be all zero (C += A * B)
/// * `n` - Dimension
/// * `tile` - Cache tile size, a non-zero multiple of `MR`; clamped to `n`
///   rounded up to a multiple of `MR`
///
/// # Errors
///
/// Fails only if the two pack buffers cannot be allocated.
pub fn matmul_blocked_4x4<V: Lanes>(
    a: &[i32],
    bt: &[i32],
    c: &mut [i32],
    n: usize,
    tile: usize,
) -> Result<()> {
    debug_assert!(tile > 0 && tile % MR == 0);
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(bt.len(), n * n);
    debug_assert_eq!(c.len(), n * n);

    // A tile wider than the matrix buys nothing; cap it at n rounded up to MR
    let tile = tile.min(n.div_ceil(MR) * MR).max(MR);

    // One register block of each operand, as long as the widest window
    let mut a_pack = try_zeroed(MR * tile)?;
    let mut b_pack = try_zeroed(MR * tile)?;

    for ii in (0..n).step_by(tile) {
        let i_end = (ii + tile).min(n);

        for jj in (0..n).step_by(tile) {
            let j_end = (jj + tile).min(n);

            for kk in (0..n).step_by(tile) {
                let kc = (kk + tile).min(n) - kk;

                for i in (ii..i_end).step_by(MR) {
                    let rows = MR.min(i_end - i);
                    pack_rows(a, n, i, rows, kk, kc, &mut a_pack);

                    for j in (jj..j_end).step_by(MR) {
                        let cols = MR.min(j_end - j);
                        pack_rows(bt, n, j, cols, kk, kc, &mut b_pack);

                        if rows == MR && cols == MR {
                            kernel_4x4::<V>(&a_pack, &b_pack, kc, c, n, i, j);
                        } else {
                            kernel_edge::<V>(&a_pack, &b_pack, kc, rows, cols, c, n, i, j);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::lanes::Scalar;
    use crate::matrix::naive_ijk::matmul_naive_ijk;
    use crate::matrix::transpose::transpose_square;
    use wide::{i32x4, i32x8};

    fn check<V: Lanes>(n: usize, tile: usize) {
        let a: Vec<i32> = (0..(n * n) as i32).map(|i| i % 10 - 4).collect();
        let b: Vec<i32> = (0..(n * n) as i32).map(|i| i % 7 + 1).collect();
        let mut bt = vec![0; n * n];
        transpose_square(&b, &mut bt, n);

        let mut c_naive = vec![0; n * n];
        matmul_naive_ijk(&a, &b, &mut c_naive, n);

        let mut c_gemm = vec![0; n * n];
        matmul_blocked_4x4::<V>(&a, &bt, &mut c_gemm, n, tile).unwrap();

        assert_eq!(c_naive, c_gemm, "n={} tile={} width={}", n, tile, V::WIDTH);
    }

    #[test]
    fn test_gemm_4x4_correctness() {
        for n in [0, 1, 3, 4, 5, 8, 9, 13, 16, 17, 33] {
            for tile in [4, 8, 16] {
                check::<Scalar>(n, tile);
                check::<i32x4>(n, tile);
                check::<i32x8>(n, tile);
            }
        }
    }

    #[test]
    fn test_gemm_4x4_multiple_reduction_blocks() {
        // 70 = one full 64-wide window plus a 6-wide tail window
        check::<i32x4>(70, 64);
        check::<i32x8>(70, 64);
        check::<i32x4>(64, 64);
    }

    #[test]
    fn test_gemm_4x4_oversized_tile() {
        // Unclamped, the pack buffers alone would need MR * tile elements
        let huge = (usize::MAX / (MR * MR)) * MR;
        for n in [0, 1, 4, 9, 70] {
            check::<i32x4>(n, huge);
            check::<Scalar>(n, huge);
        }
    }
}
