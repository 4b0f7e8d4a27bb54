//! # Parallel Batch Conversion
//!
//! Each conversion is a pure function over its own inputs, so a batch of
//! matrices maps directly onto a Rayon pool with no coordination: no shared
//! mutable state, no locks, each invocation writing to its own output.

use num_traits::Num;
use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::convert::{self, Triplet};
use crate::matrix::CscMatrix;

/// Borrowed CSC input arrays for batch conversion
#[derive(Debug, Clone, Copy)]
pub struct CscSlices<'a, T> {
    pub values: &'a [T],
    pub row_indices: &'a [usize],
    pub col_pointers: &'a [usize],
}

/// Converts every matrix in the batch
///
/// Containers are validated at construction, so the per-matrix conversion
/// cannot fail. Dispatch falls back to a sequential loop when the batch or
/// the machine is too small for parallelism to pay off.
pub fn convert_batch<T>(matrices: &[CscMatrix<T>]) -> Vec<Vec<Triplet<T>>>
where
    T: Copy + Num + Send + Sync,
{
    if matrices.len() < 2 || num_cpus::get() < 2 {
        return matrices.iter().map(CscMatrix::to_coo).collect();
    }

    matrices.par_iter().map(CscMatrix::to_coo).collect()
}

/// Converts a batch of raw CSC triples, reporting each failure independently
///
/// One malformed input does not poison its neighbors: the output holds one
/// `Result` per input, in input order.
pub fn try_convert_batch<T>(
    inputs: &[CscSlices<'_, T>],
    num_rows: Option<usize>,
) -> Vec<Result<Vec<Triplet<T>>>>
where
    T: Copy + Send + Sync,
{
    inputs
        .par_iter()
        .map(|input| {
            convert::convert(
                input.values,
                input.row_indices,
                input.col_pointers,
                num_rows,
            )
        })
        .collect()
}
