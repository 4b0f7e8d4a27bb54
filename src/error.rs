//! Error types for CSC validation, conversion, and the I/O collaborators

use thiserror::Error;

/// Result type alias using the crate's [`ConvertError`]
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors surfaced by input validation, conversion, and file I/O
///
/// Every violated input invariant maps to exactly one variant; nothing is
/// silently repaired. [`ConvertError::kind`] gives the coarse class when a
/// caller only cares about the category of failure.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// `values` and `row_indices` must be parallel arrays of equal length
    #[error("{values} values but {row_indices} row indices")]
    Shape { values: usize, row_indices: usize },

    /// The column pointer array was empty
    ///
    /// A matrix with zero columns still carries the single `[0]` sentinel.
    #[error("column pointer array is empty (a zero-column matrix still needs the 0 sentinel)")]
    EmptyPointers,

    /// The column pointer array length disagrees with a declared column count
    #[error("column pointer array has {found} entries for {n_cols} columns")]
    PointerCount { found: usize, n_cols: usize },

    /// The leading column pointer must be zero
    #[error("column pointers must start at 0, found {found}")]
    BadStart { found: usize },

    /// Column pointers must be non-decreasing
    #[error("column pointers decrease at entry {index}: {prev} -> {next}")]
    NonMonotonic {
        index: usize,
        prev: usize,
        next: usize,
    },

    /// The final column pointer disagrees with the number of stored entries
    #[error("final column pointer is {found} but there are {nnz} stored entries")]
    BadEnd { found: usize, nnz: usize },

    /// A row index exceeds the declared row count
    #[error("row index {row} at position {pos} is out of bounds for {n_rows} rows")]
    RowOutOfBounds {
        pos: usize,
        row: usize,
        n_rows: usize,
    },

    /// Reading or writing a collaborator file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A textual record could not be parsed as a number
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },
}

/// Coarse classification of [`ConvertError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Array lengths are structurally inconsistent
    Shape,
    /// The column pointer array violates monotonicity or the sentinel invariants
    MalformedIndex,
    /// A row index exceeds a declared bound
    Bounds,
    /// An I/O collaborator failed
    Io,
    /// A textual record was not numeric
    Parse,
}

impl ConvertError {
    /// Returns the taxonomy class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Shape { .. }
            | ConvertError::EmptyPointers
            | ConvertError::PointerCount { .. } => ErrorKind::Shape,
            ConvertError::BadStart { .. }
            | ConvertError::NonMonotonic { .. }
            | ConvertError::BadEnd { .. } => ErrorKind::MalformedIndex,
            ConvertError::RowOutOfBounds { .. } => ErrorKind::Bounds,
            ConvertError::Io(_) => ErrorKind::Io,
            ConvertError::Parse { .. } => ErrorKind::Parse,
        }
    }
}
