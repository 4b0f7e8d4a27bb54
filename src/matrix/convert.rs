//! Core CSC to COO conversion
//!
//! The converter walks the column pointer array, slices the parallel
//! `values`/`row_indices` arrays into per-column segments, and emits one
//! `(row, col, value)` triplet per stored entry. Emission is column-major:
//! records appear in non-decreasing column order, and within a column they
//! keep the relative order of the input segment. No sorting by row takes
//! place.
//!
//! Two entry points share the same validation:
//!
//! - [`convert`] / [`convert_with`] materialize the whole output after all
//!   validation (structure and, when `num_rows` is supplied, row bounds)
//!   has passed. No partial output on a structural error.
//! - [`Triplets`] produces records lazily with memory use independent of
//!   `nnz`. Pointer structure is still validated up front; row bounds are
//!   checked per record, surfacing as a single `Err` item.

use crate::error::{ConvertError, Result};

/// A single COO record: `(row, col, value)`
pub type Triplet<T> = (usize, usize, T);

/// How the column pointer array delimits columns
///
/// `Canonical` is the strict CSC convention: `num_columns + 1` entries, the
/// final one equal to `nnz`. `ImplicitFinal` accepts a pointer array with
/// one start offset per column and no trailing sentinel; the final column
/// ends at `nnz`. Columnar dumps of uncertain provenance sometimes arrive
/// in the shorter layout, so it is supported as an explicit opt-in, never
/// inferred from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerConvention {
    /// `col_pointers.len() == num_columns + 1`, final entry equals `nnz`
    #[default]
    Canonical,
    /// `col_pointers.len() == num_columns`, final boundary implicitly `nnz`
    ImplicitFinal,
}

impl PointerConvention {
    /// Number of columns described by a pointer array of length `len`
    fn num_cols(self, len: usize) -> usize {
        match self {
            PointerConvention::Canonical => len - 1,
            PointerConvention::ImplicitFinal => len,
        }
    }

    /// Exclusive end of column `col`'s segment
    fn segment_end(self, col_pointers: &[usize], col: usize, nnz: usize) -> usize {
        match self {
            PointerConvention::Canonical => col_pointers[col + 1],
            PointerConvention::ImplicitFinal => {
                if col + 1 < col_pointers.len() {
                    col_pointers[col + 1]
                } else {
                    nnz
                }
            }
        }
    }
}

/// Checks the structural invariants of a CSC triple
///
/// Row-index bounds are checked separately: buffered conversion scans them
/// before emitting, streaming conversion checks them per record.
pub(crate) fn validate_structure(
    num_values: usize,
    num_row_indices: usize,
    col_pointers: &[usize],
    convention: PointerConvention,
) -> Result<()> {
    if num_values != num_row_indices {
        return Err(ConvertError::Shape {
            values: num_values,
            row_indices: num_row_indices,
        });
    }

    if col_pointers.is_empty() {
        return Err(ConvertError::EmptyPointers);
    }

    if col_pointers[0] != 0 {
        return Err(ConvertError::BadStart {
            found: col_pointers[0],
        });
    }

    for (i, pair) in col_pointers.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(ConvertError::NonMonotonic {
                index: i + 1,
                prev: pair[0],
                next: pair[1],
            });
        }
    }

    // With monotonicity and a zero start established, checking the final
    // entry bounds every segment within [0, nnz].
    let last = col_pointers[col_pointers.len() - 1];
    match convention {
        PointerConvention::Canonical => {
            if last != num_values {
                return Err(ConvertError::BadEnd {
                    found: last,
                    nnz: num_values,
                });
            }
        }
        PointerConvention::ImplicitFinal => {
            if last > num_values {
                return Err(ConvertError::BadEnd {
                    found: last,
                    nnz: num_values,
                });
            }
        }
    }

    Ok(())
}

/// Checks every row index against a declared row count
pub(crate) fn validate_bounds(row_indices: &[usize], n_rows: usize) -> Result<()> {
    for (pos, &row) in row_indices.iter().enumerate() {
        if row >= n_rows {
            return Err(ConvertError::RowOutOfBounds { pos, row, n_rows });
        }
    }
    Ok(())
}

/// Converts a CSC triple into COO triplets, materializing the whole output
///
/// Supplying `num_rows` enables bounds validation of the row indices. All
/// validation happens before the first record is produced, so a failed call
/// emits nothing.
///
/// # Examples
///
/// ```
/// use csc2coo::convert;
///
/// let triplets = convert(&[10, 20, 30], &[2, 0, 1], &[0, 1, 3], None).unwrap();
/// assert_eq!(triplets, vec![(2, 0, 10), (0, 1, 20), (1, 1, 30)]);
/// ```
pub fn convert<T: Copy>(
    values: &[T],
    row_indices: &[usize],
    col_pointers: &[usize],
    num_rows: Option<usize>,
) -> Result<Vec<Triplet<T>>> {
    convert_with(
        values,
        row_indices,
        col_pointers,
        num_rows,
        PointerConvention::Canonical,
    )
}

/// Like [`convert`], with an explicit pointer-array convention
pub fn convert_with<T: Copy>(
    values: &[T],
    row_indices: &[usize],
    col_pointers: &[usize],
    num_rows: Option<usize>,
    convention: PointerConvention,
) -> Result<Vec<Triplet<T>>> {
    validate_structure(values.len(), row_indices.len(), col_pointers, convention)?;
    if let Some(n_rows) = num_rows {
        validate_bounds(row_indices, n_rows)?;
    }

    let n_cols = convention.num_cols(col_pointers.len());
    let mut out = Vec::with_capacity(values.len());

    for col in 0..n_cols {
        let start = col_pointers[col];
        let end = convention.segment_end(col_pointers, col, values.len());

        for i in start..end {
            out.push((row_indices[i], col, values[i]));
        }
    }

    Ok(out)
}

/// Streaming CSC to COO conversion
///
/// Yields `Result<Triplet<T>>` lazily, so the output never has to be
/// materialized and the caller may stop consuming at any point with no
/// cleanup required. [`Triplets::new`] validates the pointer structure up
/// front (`O(num_columns)`); row-index bounds, when `num_rows` is supplied,
/// are checked as records are produced. A bounds violation surfaces as a
/// single `Err` item, after which the iterator is exhausted.
#[derive(Debug)]
pub struct Triplets<'a, T> {
    values: &'a [T],
    row_indices: &'a [usize],
    col_pointers: &'a [usize],
    convention: PointerConvention,
    num_rows: Option<usize>,
    n_cols: usize,
    col: usize,
    pos: usize,
    end: usize,
    done: bool,
}

impl<'a, T: Copy> Triplets<'a, T> {
    /// Creates a streaming conversion under the canonical pointer convention
    pub fn new(
        values: &'a [T],
        row_indices: &'a [usize],
        col_pointers: &'a [usize],
        num_rows: Option<usize>,
    ) -> Result<Self> {
        Self::with_convention(
            values,
            row_indices,
            col_pointers,
            num_rows,
            PointerConvention::Canonical,
        )
    }

    /// Creates a streaming conversion with an explicit pointer convention
    pub fn with_convention(
        values: &'a [T],
        row_indices: &'a [usize],
        col_pointers: &'a [usize],
        num_rows: Option<usize>,
        convention: PointerConvention,
    ) -> Result<Self> {
        validate_structure(values.len(), row_indices.len(), col_pointers, convention)?;

        let n_cols = convention.num_cols(col_pointers.len());
        let (pos, end) = if n_cols == 0 {
            (0, 0)
        } else {
            (
                col_pointers[0],
                convention.segment_end(col_pointers, 0, values.len()),
            )
        };

        Ok(Self {
            values,
            row_indices,
            col_pointers,
            convention,
            num_rows,
            n_cols,
            col: 0,
            pos,
            end,
            done: n_cols == 0,
        })
    }

    /// Records not yet produced (assuming no bounds failure intervenes)
    pub fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            // Column segments partition [0, nnz), so the current position
            // determines how much of the stream is left.
            self.values.len() - self.pos
        }
    }
}

impl<'a, T: Copy> Iterator for Triplets<'a, T> {
    type Item = Result<Triplet<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Skip empty columns; consecutive equal pointers contribute nothing.
        while self.pos == self.end {
            self.col += 1;
            if self.col >= self.n_cols {
                self.done = true;
                return None;
            }
            self.pos = self.col_pointers[self.col];
            self.end = self
                .convention
                .segment_end(self.col_pointers, self.col, self.values.len());
        }

        let i = self.pos;
        self.pos += 1;

        let row = self.row_indices[i];
        if let Some(n_rows) = self.num_rows {
            if row >= n_rows {
                self.done = true;
                return Some(Err(ConvertError::RowOutOfBounds {
                    pos: i,
                    row,
                    n_rows,
                }));
            }
        }

        Some(Ok((row, self.col, self.values[i])))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        if self.num_rows.is_none() {
            (remaining, Some(remaining))
        } else {
            // A bounds failure replaces the tail of the stream with one Err.
            (0, Some(remaining))
        }
    }
}

impl<'a, T: Copy> std::iter::FusedIterator for Triplets<'a, T> {}
