//! Dense, row-major two-dimensional storage.
//!
//! [`Matrix`] owns a single contiguous buffer of `rows * cols` values. Checked
//! accessors ([`get`](Matrix::get), [`set`](Matrix::set), ...) report
//! [`MatrixError::IndexOutOfRange`], while indexing by `(row, col)` panics like
//! slice indexing does.

use std::{
    fmt, mem,
    ops::{Index, IndexMut},
};

use super::error::MatrixError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a `rows` x `cols` matrix with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a `rows` x `cols` matrix with cells initialized by `f(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }

        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        let index = self.offset(row, col)?;
        Ok(&self.data[index])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let index = self.offset(row, col)?;
        Ok(&mut self.data[index])
    }

    /// Stores `value` at `(row, col)` and returns the value it replaced.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<T, MatrixError> {
        let cell = self.get_mut(row, col)?;
        Ok(mem::replace(cell, value))
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterates over all cells in row-major order as `(row, col, value)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (i / cols, i % cols, value))
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Copies all cells of `other` to the same positions in `self`.
    ///
    /// Cells of `self` outside of the extent of `other` are left untouched.
    /// Fails if `other` is larger than `self` in either dimension.
    pub fn copy_from(&mut self, other: &Matrix<T>) -> Result<(), MatrixError>
    where
        T: Clone,
    {
        self.check_fits(other)?;

        for row in 0..other.rows {
            let src = &other.data[row * other.cols..(row + 1) * other.cols];
            let start = row * self.cols;
            self.data[start..start + other.cols].clone_from_slice(src);
        }

        Ok(())
    }

    /// Moves all cells of `other` to the same positions in `self`.
    ///
    /// Same as [`copy_from`](Matrix::copy_from), but consumes the source
    /// instead of cloning its values.
    pub fn move_from(&mut self, other: Matrix<T>) -> Result<(), MatrixError> {
        self.check_fits(&other)?;

        let cols = other.cols;
        for (i, value) in other.data.into_iter().enumerate() {
            let index = (i / cols) * self.cols + i % cols;
            self.data[index] = value;
        }

        Ok(())
    }

    /// Returns a new `rows` x `cols` matrix holding a copy of `self` in its
    /// top-left corner and `fill` elsewhere.
    ///
    /// Fails if the requested extent is smaller than the current one in either
    /// dimension.
    pub fn resized(&self, rows: usize, cols: usize, fill: T) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let mut next = Matrix::new(rows, cols, fill);
        next.copy_from(self)?;
        Ok(next)
    }

    /// Consumes the matrix and returns one with at least `rows` x `cols` cells,
    /// existing values moved to the same positions and new cells initialized by
    /// `fill`.
    ///
    /// Never shrinks: each dimension is the maximum of the current and
    /// requested one.
    pub fn grow<F>(self, rows: usize, cols: usize, mut fill: F) -> Self
    where
        F: FnMut() -> T,
    {
        let rows = rows.max(self.rows);
        let cols = cols.max(self.cols);

        if rows == self.rows && cols == self.cols {
            return self;
        }

        let prev_cols = self.cols;
        let mut data = Vec::with_capacity(rows * cols);
        let mut prev = self.data.into_iter();

        for row in 0..rows {
            if row < self.rows {
                data.extend(prev.by_ref().take(prev_cols));
                data.extend((prev_cols..cols).map(|_| fill()));
            } else {
                data.extend((0..cols).map(|_| fill()));
            }
        }

        Self { data, rows, cols }
    }

    /// Exchanges contents with `other` without copying any cell.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn check_fits(&self, other: &Matrix<T>) -> Result<(), MatrixError> {
        if self.rows < other.rows || self.cols < other.cols {
            Err(MatrixError::SizeMismatch {
                rows: self.rows,
                cols: self.cols,
                min_rows: other.rows,
                min_cols: other.cols,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) is out of range for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) is out of range for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for row in 0..self.rows {
            write!(f, " ")?;
            for col in 0..self.cols {
                write!(f, "{}, ", self.data[row * self.cols + col])?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
