//! 4×4 dot-product microkernel for matrix multiplication.

use super::lanes::{Lanes, dot};
use crate::config::MR;

/// Computes a 4×4 tile: C[row..row+4, col..col+4] += A_packed · B_packedᵀ
///
/// Both panels hold `MR` rows of `kc` values each, laid out
/// `[row0][row1][row2][row3]`. `b_pack` comes from the transposed B, so row
/// `j` of it is column `col + j` of B and every output cell is a plain dot
/// product of two contiguous windows.
///
/// Keeps 16 vector accumulators, one per output cell. Each step loads one
/// vector from each of the 8 panel rows and does 16 multiply-adds. The
/// `kc % V::WIDTH` tail is finished in scalar code after the horizontal
/// reduction. Results are added into C, never stored, so C must start at
/// zero before the first reduction block of a tile.
///
/// # Arguments
///
/// * `a_pack` - Packed A panel, at least `MR * kc` values
/// * `b_pack` - Packed Bᵀ panel, at least `MR * kc` values
/// * `kc` - Length of the reduction window
/// * `c` - Output matrix, row-major with leading dimension `ldc`
/// * `row`, `col` - Top-left cell of the tile in C
#[inline]
pub fn kernel_4x4<V: Lanes>(
    a_pack: &[i32],
    b_pack: &[i32],
    kc: usize,
    c: &mut [i32],
    ldc: usize,
    row: usize,
    col: usize,
) {
    let main = kc - kc % V::WIDTH;

    let mut acc = [[V::zero(); MR]; MR];

    let mut p = 0;
    while p < main {
        let a_vec: [V; MR] = std::array::from_fn(|i| V::load(&a_pack[i * kc + p..]));
        let b_vec: [V; MR] = std::array::from_fn(|j| V::load(&b_pack[j * kc + p..]));

        for i in 0..MR {
            for j in 0..MR {
                acc[i][j] = acc[i][j].mul_add(a_vec[i], b_vec[j]);
            }
        }
        p += V::WIDTH;
    }

    for i in 0..MR {
        let a_row = &a_pack[i * kc..(i + 1) * kc];
        for j in 0..MR {
            let b_row = &b_pack[j * kc..(j + 1) * kc];

            let mut sum = acc[i][j].reduce_sum();
            for q in main..kc {
                sum = sum.wrapping_add(a_row[q].wrapping_mul(b_row[q]));
            }

            let cell = &mut c[(row + i) * ldc + col + j];
            *cell = cell.wrapping_add(sum);
        }
    }
}

/// Partial tile at a block edge: `rows × cols` with `rows, cols <= MR`.
///
/// Same panel layout and accumulate-only contract as [`kernel_4x4`], but
/// each cell is an independent vector dot product, so any shape works.
#[allow(clippy::too_many_arguments)]
pub fn kernel_edge<V: Lanes>(
    a_pack: &[i32],
    b_pack: &[i32],
    kc: usize,
    rows: usize,
    cols: usize,
    c: &mut [i32],
    ldc: usize,
    row: usize,
    col: usize,
) {
    debug_assert!(rows <= MR && cols <= MR);

    for i in 0..rows {
        let a_row = &a_pack[i * kc..(i + 1) * kc];
        for j in 0..cols {
            let b_row = &b_pack[j * kc..(j + 1) * kc];
            let cell = &mut c[(row + i) * ldc + col + j];
            *cell = cell.wrapping_add(dot::<V>(a_row, b_row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::lanes::Scalar;
    use wide::{i32x4, i32x8};

    fn panels(kc: usize) -> (Vec<i32>, Vec<i32>) {
        let a: Vec<i32> = (0..(MR * kc) as i32).map(|x| x % 7 - 3).collect();
        let b: Vec<i32> = (0..(MR * kc) as i32).map(|x| x % 5 + 1).collect();
        (a, b)
    }

    fn reference(a: &[i32], b: &[i32], kc: usize, i: usize, j: usize) -> i32 {
        (0..kc).map(|q| a[i * kc + q] * b[j * kc + q]).sum()
    }

    fn check_full<V: Lanes>(kc: usize) {
        let (a, b) = panels(kc);
        let ldc = 6;
        let mut c = vec![0; ldc * ldc];

        kernel_4x4::<V>(&a, &b, kc, &mut c, ldc, 1, 2);

        for r in 0..ldc {
            for col in 0..ldc {
                let expected = if (1..5).contains(&r) && (2..6).contains(&col) {
                    reference(&a, &b, kc, r - 1, col - 2)
                } else {
                    0
                };
                assert_eq!(c[r * ldc + col], expected, "kc={} r={} c={}", kc, r, col);
            }
        }
    }

    #[test]
    fn test_kernel_4x4_all_widths() {
        for kc in [1, 3, 4, 7, 8, 9, 16, 17] {
            check_full::<Scalar>(kc);
            check_full::<i32x4>(kc);
            check_full::<i32x8>(kc);
        }
    }

    #[test]
    fn test_kernel_accumulates() {
        let kc = 8;
        let (a, b) = panels(kc);
        let mut c = vec![10; MR * MR];

        kernel_4x4::<i32x4>(&a, &b, kc, &mut c, MR, 0, 0);
        kernel_4x4::<i32x4>(&a, &b, kc, &mut c, MR, 0, 0);

        for i in 0..MR {
            for j in 0..MR {
                assert_eq!(c[i * MR + j], 10 + 2 * reference(&a, &b, kc, i, j));
            }
        }
    }

    #[test]
    fn test_kernel_edge_touches_only_its_cells() {
        let kc = 5;
        let (a, b) = panels(kc);
        let mut c = vec![0; MR * MR];

        kernel_edge::<i32x4>(&a, &b, kc, 3, 2, &mut c, MR, 0, 1);

        for i in 0..MR {
            for j in 0..MR {
                let expected = if i < 3 && (1..3).contains(&j) {
                    reference(&a, &b, kc, i, j - 1)
                } else {
                    0
                };
                assert_eq!(c[i * MR + j], expected, "i={} j={}", i, j);
            }
        }
    }
}
