/// Transpose a square matrix: dst = src^T
///
/// Single pass over the upper triangle plus the diagonal. Each visit of
/// `(r, c)` with `c >= r` writes both mirrored cells, so every element of
/// `dst` is written exactly once (the diagonal twice, with the same value).
///
/// # Arguments
///
/// * `src` - Source matrix (n × n), row-major
/// * `dst` - Destination matrix (n × n), row-major
/// * `n` - Dimension
///
/// # Example
///
/// ```
/// use densemm::matrix::transpose::transpose_square;
///
/// let src = vec![1, 2, 3,
///                4, 5, 6,
///                7, 8, 9];
/// let mut dst = vec![0; 9];
///
/// transpose_square(&src, &mut dst, 3);
///
/// assert_eq!(dst, vec![1, 4, 7,
///                      2, 5, 8,
///                      3, 6, 9]);
/// ```
pub fn transpose_square(src: &[i32], dst: &mut [i32], n: usize) {
    debug_assert_eq!(src.len(), n * n);
    debug_assert_eq!(dst.len(), n * n);

    for r in 0..n {
        for c in r..n {
            dst[c * n + r] = src[r * n + c];
            dst[r * n + c] = src[c * n + r];
        }
    }
}
