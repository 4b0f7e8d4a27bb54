//! Utilities for converting between our matrix formats and external libraries
//!
//! The sprs bridges double as an independent reference path in the tests:
//! a conversion result loaded into `sprs::TriMat` must describe the same
//! matrix as the CSC input handed to sprs directly.

use num_traits::Num;
use sprs::{CsMat, TriMat};

use crate::error::Result;
use crate::matrix::convert::Triplet;
use crate::matrix::CscMatrix;

/// Converts our CSC matrix format to sprs CsMat format (as CSC)
pub fn to_sprs_csc<T>(matrix: &CscMatrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new_csc(
        (matrix.n_rows, matrix.n_cols),
        matrix.col_ptr.clone(),
        matrix.row_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts a sprs CsMat into our CSC container
///
/// Row-major sprs matrices are converted to column storage first.
pub fn from_sprs_csc<T>(matrix: CsMat<T>) -> Result<CscMatrix<T>>
where
    T: Copy + Num + Default,
{
    let matrix = if matrix.is_csc() {
        matrix
    } else {
        matrix.to_csc()
    };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    CscMatrix::new(n_rows, n_cols, indptr, indices, data)
}

/// Builds a sprs triplet (COO) matrix from converter output
pub fn to_sprs_triplets<T>(n_rows: usize, n_cols: usize, triplets: &[Triplet<T>]) -> TriMat<T>
where
    T: Copy + Num + Default,
{
    let mut tri = TriMat::new((n_rows, n_cols));
    for &(row, col, value) in triplets {
        tri.add_triplet(row, col, value);
    }
    tri
}
