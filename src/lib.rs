//! # csc2coo: validated CSC to COO conversion
//!
//! A small conversion engine that turns a Compressed-Sparse-Column matrix
//! (three parallel arrays: values, row indices, column pointers) into
//! Coordinate-format triplets `(row, col, value)`, one per stored entry.
//!
//! ## Overview
//!
//! The crate is built around one pure, single-pass transformation with two
//! faces:
//!
//! - **Buffered**: [`convert`] validates the whole input (pointer structure
//!   and, optionally, row-index bounds) and materializes every triplet.
//!   Nothing is emitted on a structural error.
//! - **Streaming**: [`Triplets`] validates the pointer structure up front
//!   and then produces records lazily, so memory use stays constant in the
//!   output size. Consumers may stop early at no cost.
//!
//! Records come out in column-major order: non-decreasing column index,
//! and within a column the stored order of the input segment. The output is
//! never row-sorted.
//!
//! Around the core sit small collaborators: a columnar text reader
//! ([`read_column`]), COO sinks ([`CsvSink`], Matrix Market output), batch
//! conversion over independent matrices ([`convert_batch`]), and bridges to
//! the sprs ecosystem types.
//!
//! ## Usage
//!
//! ```
//! use csc2coo::convert;
//!
//! let values = [10, 20, 30];
//! let row_indices = [2, 0, 1];
//! let col_pointers = [0, 1, 3];
//!
//! let triplets = convert(&values, &row_indices, &col_pointers, None).unwrap();
//! assert_eq!(triplets, vec![(2, 0, 10), (0, 1, 20), (1, 1, 30)]);
//! ```
//!
//! Streaming into a sink:
//!
//! ```
//! use csc2coo::{drain, CsvSink, Triplets};
//!
//! let values = [1.5, 2.5];
//! let row_indices = [0, 1];
//! let col_pointers = [0, 1, 2];
//!
//! let triplets = Triplets::new(&values, &row_indices, &col_pointers, Some(2)).unwrap();
//! let mut sink = CsvSink::new(Vec::new());
//! drain(triplets, &mut sink).unwrap();
//! ```

pub mod error;
pub mod io;
pub mod matrix;
pub mod parallel;
pub mod utils;

// Re-export primary components
pub use error::{ConvertError, ErrorKind, Result};
pub use io::reader::read_column;
pub use io::writer::{drain, write_csv, write_matrix_market, CooSink, CsvSink};
pub use matrix::convert::{convert, convert_with, PointerConvention, Triplet, Triplets};
pub use matrix::CscMatrix;
pub use parallel::{convert_batch, try_convert_batch, CscSlices};
pub use utils::{from_sprs_csc, to_sprs_csc, to_sprs_triplets};

/// Version information for the csc2coo library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
