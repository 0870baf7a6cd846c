/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. It's slow because
/// the innermost loop accesses B with stride `n` (column-wise), causing
/// cache misses on every iteration.
///
/// Use this as a correctness baseline, not for performance. Every output
/// cell is zeroed before its sum is taken, so `c` may hold anything on entry.
/// Arithmetic wraps on overflow, like the vector lanes of the fast paths.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten (C = A * B)
/// * `n` - Dimension
pub fn matmul_naive_ijk(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    for i in 0..n {
        for j in 0..n {
            c[i * n + j] = 0;
            for p in 0..n {
                c[i * n + j] = c[i * n + j].wrapping_add(a[i * n + p].wrapping_mul(b[p * n + j]));
            }
        }
    }
}
