//! Vectorised matmul without cache blocking.
//!
//! Transposes B, then computes each output cell as one vector dot product of
//! a row of A and a row of Bᵀ. No packing and no tiling: kept as the middle
//! rung between the naive loop and the blocked GEMM.

use crate::kernels::lanes::{Lanes, dot};

/// C = A * B from A and the transposed B.
///
/// Every cell is overwritten, so `c` may hold anything on entry. Reduction
/// lengths that are not a multiple of `V::WIDTH` are finished in scalar code.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `bt` - Transposed matrix B^T (n × n), row-major
/// * `c` - Matrix C (n × n), row-major
/// * `n` - Dimension
pub fn matmul_simple_simd<V: Lanes>(a: &[i32], bt: &[i32], c: &mut [i32], n: usize) {
    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let b_row = &bt[j * n..(j + 1) * n];
            c[i * n + j] = dot::<V>(a_row, b_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::lanes::Scalar;
    use wide::i32x8;

    #[test]
    fn test_simple_simd_2x2() {
        // B = [[5, 6], [7, 8]] stored transposed
        let a = vec![1, 2, 3, 4];
        let bt = vec![5, 7, 6, 8];
        let mut c = vec![-1; 4];

        matmul_simple_simd::<i32x8>(&a, &bt, &mut c, 2);
        assert_eq!(c, vec![19, 22, 43, 50]);

        matmul_simple_simd::<Scalar>(&a, &bt, &mut c, 2);
        assert_eq!(c, vec![19, 22, 43, 50]);
    }
}
