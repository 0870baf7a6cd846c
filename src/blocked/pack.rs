//! Packing of row windows into contiguous panels.

/// Packs `rows` consecutive rows of a row-major matrix, each cut to the
/// reduction window `[k_start, k_start + kc)`, into `pack` as
/// `[row0-window][row1-window]...`.
///
/// Used for both operands: rows of A, and rows of Bᵀ (columns of B). The
/// kernel then walks each panel row with stride 1 instead of stride `ld`.
/// The caller guarantees the rows and the window lie inside `src` and that
/// `pack` holds at least `rows * kc` values.
///
/// # Arguments
///
/// * `src` - Source matrix, row-major with leading dimension `ld`
/// * `first_row` - First row to pack
/// * `rows` - Number of rows (the register-block width, or less at an edge)
/// * `k_start`, `kc` - Start and length of the reduction window
pub fn pack_rows(
    src: &[i32],
    ld: usize,
    first_row: usize,
    rows: usize,
    k_start: usize,
    kc: usize,
    pack: &mut [i32],
) {
    for r in 0..rows {
        let from = (first_row + r) * ld + k_start;
        pack[r * kc..(r + 1) * kc].copy_from_slice(&src[from..from + kc]);
    }
}
