//! Compressed Sparse Column (CSC) matrix container
//!
//! An owned, validated holder for the three CSC arrays. Construction runs
//! the full input validation, so the conversion methods on a live container
//! are infallible.

use std::fmt;

use num_traits::Num;

use crate::error::{ConvertError, Result};
use crate::matrix::convert::{self, PointerConvention, Triplet};

/// A sparse matrix in Compressed Sparse Column (CSC) format
///
/// The CSC format stores a sparse matrix using three arrays:
/// - col_ptr: Array of size n_cols + 1 containing indices into row_idx and values arrays
/// - row_idx: Array of size nnz containing row indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
#[derive(Clone)]
pub struct CscMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Column pointers (size: n_cols + 1)
    /// col_ptr[j] is the index in row_idx and values where column j starts
    /// col_ptr[n_cols] is equal to nnz
    pub col_ptr: Vec<usize>,

    /// Row indices (size: nnz)
    pub row_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a new CSC matrix with the given dimensions and data
    ///
    /// # Errors
    ///
    /// Fails if the input arrays are inconsistent:
    /// - `col_ptr.len()` must be `n_cols + 1`
    /// - `row_idx.len()` must equal `values.len()`
    /// - `col_ptr` must be non-decreasing, starting at 0 and ending at nnz
    /// - every entry of `row_idx` must be below `n_rows`
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if col_ptr.len() != n_cols + 1 {
            return Err(ConvertError::PointerCount {
                found: col_ptr.len(),
                n_cols,
            });
        }

        convert::validate_structure(
            values.len(),
            row_idx.len(),
            &col_ptr,
            PointerConvention::Canonical,
        )?;
        convert::validate_bounds(&row_idx, n_rows)?;

        Ok(Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        })
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in column j
    ///
    /// Each item is a tuple (row_idx, value) representing a non-zero element
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_ptr[j];
        let end = self.col_ptr[j + 1];

        self.row_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }

    /// Streams the stored entries as COO triplets in column-major order
    ///
    /// Within a column, entries keep their stored order. The iterator
    /// borrows the container; dropping it early is free.
    pub fn triplets(&self) -> impl Iterator<Item = Triplet<T>> + '_ {
        (0..self.n_cols)
            .flat_map(move |j| self.col_iter(j).map(move |(row, &val)| (row, j, val)))
    }

    /// Materializes all stored entries as COO triplets
    pub fn to_coo(&self) -> Vec<Triplet<T>> {
        self.triplets().collect()
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        let col_ptr = vec![0; n_cols + 1];
        let row_idx = Vec::new();
        let values = Vec::new();

        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut col_ptr = Vec::with_capacity(n + 1);
        let mut row_idx = Vec::with_capacity(n);
        let mut values = Vec::with_capacity(n);

        for i in 0..=n {
            col_ptr.push(i);
        }

        for i in 0..n {
            row_idx.push(i);
            values.push(T::one());
        }

        Self {
            n_rows: n,
            n_cols: n,
            col_ptr,
            row_idx,
            values,
        }
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for CscMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CscMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_cols_to_print = 5.min(self.n_cols);

        if max_cols_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for j in 0..max_cols_to_print {
                write!(f, "    col {}: ", j)?;
                let start = self.col_ptr[j];
                let end = self.col_ptr[j + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for i in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.row_idx[i], self.values[i])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_cols > max_cols_to_print {
                writeln!(f, "    ... ({} more columns)", self.n_cols - max_cols_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
