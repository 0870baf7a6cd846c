//! Dense N×N storage with a transposed mirror.

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use super::transpose::transpose_square;
use crate::error::{MatmulError, Result, square_len, try_zeroed};

/// A dense square matrix of `i32`, row-major.
///
/// Alongside the row-major data it keeps `transposed`, a row-major copy of
/// the transpose, so that column `c` of the matrix is the contiguous slice
/// `transposed[c * n..(c + 1) * n]`. The mirror is derived once when the
/// values are set and never patched afterwards; nothing outside this module
/// can write into a `Matrix`.
#[derive(Clone)]
pub struct Matrix {
    n: usize,
    data: Vec<i32>,
    transposed: Vec<i32>,
}

impl Matrix {
    /// An all-zero `n × n` matrix.
    pub fn zeros(n: usize) -> Result<Self> {
        let len = square_len(n)?;
        Ok(Self {
            n,
            data: try_zeroed(len)?,
            transposed: try_zeroed(len)?,
        })
    }

    /// Wraps a row-major buffer of `n * n` values.
    ///
    /// ```
    /// use densemm::Matrix;
    ///
    /// let m = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.get(1, 0), 3);
    /// assert_eq!(m.transposed_row(0), &[1, 3]);
    /// ```
    pub fn from_vec(n: usize, data: Vec<i32>) -> Result<Self> {
        let expected = square_len(n)?;
        if data.len() != expected {
            return Err(MatmulError::BufferLength {
                dimension: n,
                expected,
                got: data.len(),
            });
        }
        Self::with_mirror(n, data)
    }

    /// Fills an `n × n` matrix with values drawn uniformly and independently
    /// from `[lower, upper]` using the caller's generator.
    pub fn random<R: Rng + ?Sized>(n: usize, lower: i32, upper: i32, rng: &mut R) -> Result<Self> {
        if lower > upper {
            return Err(MatmulError::InvalidRange { lower, upper });
        }
        let len = square_len(n)?;
        let dist = Uniform::new_inclusive(lower, upper);

        let mut data = try_zeroed(len)?;
        for value in data.iter_mut() {
            *value = dist.sample(rng);
        }
        Self::with_mirror(n, data)
    }

    /// Same as [`Matrix::random`] with a `StdRng` seeded from `seed`.
    pub fn random_seeded(n: usize, lower: i32, upper: i32, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(n, lower, upper, &mut rng)
    }

    /// Takes ownership of finished row-major values and derives the mirror.
    pub(crate) fn with_mirror(n: usize, data: Vec<i32>) -> Result<Self> {
        let mut transposed = try_zeroed(data.len())?;
        transpose_square(&data, &mut transposed, n);
        Ok(Self {
            n,
            data,
            transposed,
        })
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Flat index of `(row, col)` in row-major order.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the dimension.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(
            row < self.n && col < self.n,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.n,
            self.n
        );
        self.data[self.offset(row, col)]
    }

    pub fn try_get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.n && col < self.n {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Row-major values of the transpose.
    pub fn transposed(&self) -> &[i32] {
        &self.transposed
    }

    pub fn row(&self, row: usize) -> &[i32] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Column `col` of the matrix, read contiguously from the mirror.
    pub fn transposed_row(&self, col: usize) -> &[i32] {
        &self.transposed[col * self.n..(col + 1) * self.n]
    }
}

/// Element-wise comparison of the row-major values; the mirror is not consulted.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.data == other.data
    }
}

impl Eq for Matrix {}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("n", &self.n)
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            for value in self.row(r) {
                write!(f, "{:8}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(3).unwrap();
        assert_eq!(m.dimension(), 3);
        assert!(m.as_slice().iter().all(|&v| v == 0));
        assert!(m.transposed().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert_eq!(
            Matrix::from_vec(3, vec![0; 8]),
            Err(MatmulError::BufferLength {
                dimension: 3,
                expected: 9,
                got: 8
            })
        );
    }

    #[test]
    fn test_random_rejects_inverted_range() {
        assert_eq!(
            Matrix::random_seeded(4, 10, 1, 7),
            Err(MatmulError::InvalidRange {
                lower: 10,
                upper: 1
            })
        );
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Matrix::random_seeded(9, -5, 5, 42).unwrap();
        let b = Matrix::random_seeded(9, -5, 5, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_value_range() {
        let m = Matrix::random_seeded(5, 3, 3, 1).unwrap();
        assert!(m.as_slice().iter().all(|&v| v == 3));
    }

    #[test]
    fn test_accessors() {
        let m = Matrix::from_vec(3, (1..=9).collect()).unwrap();
        assert_eq!(m.offset(2, 1), 7);
        assert_eq!(m.get(2, 1), 8);
        assert_eq!(m.try_get(3, 0), None);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.transposed_row(1), &[2, 5, 8]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let m = Matrix::zeros(2).unwrap();
        m.get(0, 2);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_vec(2, vec![1, -2, 30, 4]).unwrap();
        assert_eq!(
            m.to_string(),
            "       1      -2\n      30       4\n"
        );
    }
}
