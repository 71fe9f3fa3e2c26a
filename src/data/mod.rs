//! Dense 2-D buffers and axis selection.
//!
//! [`Matrix`] is a rectangular row-major buffer: rows are contiguous, so
//! `row_slice()` is O(1) while column access is strided. It is the 2-D
//! counterpart of the plain slices used by the 1-D operations; transforms and
//! extrapolation read it through the same accessors the tests use.

use std::iter::FusedIterator;

/// Batching direction for matrix operations.
///
/// `Rows` applies a 1-D operation independently to each row, `Columns` to
/// each column. There is no cross-lane interaction either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// Dense row-major matrix.
///
/// Stores `rows × cols` elements contiguously, row after row. Rectangularity
/// is enforced at construction, so shape checks elsewhere reduce to comparing
/// `(rows, cols)` pairs.
///
/// # Example
///
/// ```
/// use sigproc_rs::data::Matrix;
///
/// let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
/// assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
/// assert_eq!(m.get(1, 2), Some(&6.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Box<[T]>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Create a matrix from a row-major `Vec`, taking ownership.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "Data length {} does not match dimensions {}x{}",
            data.len(),
            rows,
            cols
        );
        Self {
            data: data.into_boxed_slice(),
            rows,
            cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The underlying row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying row-major storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get element at (row, col), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.data[row * self.cols + col])
    }

    /// Mutable element at (row, col), or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&mut self.data[row * self.cols + col])
    }

    /// Get a row as a contiguous slice. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "Row index {} out of bounds", row);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Get a mutable row slice. O(1).
    #[inline]
    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows, "Row index {} out of bounds", row);
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterate over a column (strided access).
    ///
    /// Slower than `row_slice()` because consecutive elements are `cols`
    /// apart in memory.
    #[inline]
    pub fn col_iter(&self, col: usize) -> StridedIter<'_, T> {
        assert!(col < self.cols, "Column index {} out of bounds", col);
        StridedIter::new(&self.data, col, self.cols, self.rows)
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Create a matrix filled with `T::default()`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_vec(vec![T::default(); rows * cols], rows, cols)
    }
}

impl<T: Copy> Matrix<T> {
    /// Copy column `col` into `buf`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols` or `buf.len() < rows`.
    pub fn copy_col(&self, col: usize, buf: &mut [T]) {
        assert!(col < self.cols, "Column index {} out of bounds", col);
        assert!(
            buf.len() >= self.rows,
            "Buffer too small: {} < {}",
            buf.len(),
            self.rows
        );
        for (row, dst) in buf[..self.rows].iter_mut().enumerate() {
            *dst = self.data[row * self.cols + col];
        }
    }

    /// Write `buf` into column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols` or `buf.len() < rows`.
    pub fn write_col(&mut self, col: usize, buf: &[T]) {
        assert!(col < self.cols, "Column index {} out of bounds", col);
        assert!(
            buf.len() >= self.rows,
            "Buffer too small: {} < {}",
            buf.len(),
            self.rows
        );
        for (row, &src) in buf[..self.rows].iter().enumerate() {
            self.data[row * self.cols + col] = src;
        }
    }
}

/// Iterator over elements with a fixed stride.
///
/// Used for the non-contiguous dimension of a row-major matrix (columns).
#[derive(Debug, Clone)]
pub struct StridedIter<'a, T> {
    data: &'a [T],
    pos: usize,
    stride: usize,
    remaining: usize,
}

impl<'a, T> StridedIter<'a, T> {
    #[inline]
    fn new(data: &'a [T], start: usize, stride: usize, count: usize) -> Self {
        Self {
            data,
            pos: start,
            stride,
            remaining: count,
        }
    }
}

impl<'a, T> Iterator for StridedIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.pos];
        self.pos += self.stride;
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for StridedIter<'_, T> {}
impl<T> FusedIterator for StridedIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_from_vec() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.shape(), (2, 3));
    }

    #[test]
    #[should_panic(expected = "does not match dimensions")]
    fn create_wrong_size_panics() {
        Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 3);
    }

    #[test]
    fn get_element() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(m.get(0, 0), Some(&1));
        assert_eq!(m.get(1, 2), Some(&6));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn row_slices() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(m.row_slice(0), &[1, 2, 3]);
        assert_eq!(m.row_slice(1), &[4, 5, 6]);
    }

    #[test]
    fn row_slice_mut_writes_through() {
        let mut m = Matrix::from_vec(vec![0; 6], 2, 3);
        m.row_slice_mut(1).copy_from_slice(&[7, 8, 9]);
        assert_eq!(m.as_slice(), &[0, 0, 0, 7, 8, 9]);
    }

    #[test]
    fn col_iter_is_strided() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3);
        let col1: Vec<_> = m.col_iter(1).copied().collect();
        assert_eq!(col1, vec![2, 5]);
    }

    #[test]
    fn col_iter_exact_size() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(m.col_iter(0).len(), 2);
    }

    #[test]
    fn copy_and_write_col() {
        let mut m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 3, 2);
        let mut buf = [0; 3];
        m.copy_col(1, &mut buf);
        assert_eq!(buf, [2, 4, 6]);

        m.write_col(0, &[9, 9, 9]);
        assert_eq!(m.as_slice(), &[9, 2, 9, 4, 9, 6]);
    }

    #[test]
    fn zeros_is_default_filled() {
        let m: Matrix<f64> = Matrix::zeros(2, 2);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }
}
