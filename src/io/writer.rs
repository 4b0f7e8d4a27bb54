//! COO record sinks
//!
//! Sinks own the textual encoding of emitted records; the converter only
//! hands them `(row, col, value)` tuples, one at a time. A sink learns how
//! its stream ended: `finish` after the last record of a complete stream,
//! `abort` when validation failed mid-stream, so partial output is never
//! mistaken for a finished matrix.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::matrix::convert::{Triplet, Triplets};

/// Accepts COO records one at a time
pub trait CooSink<T> {
    /// Writes one record
    fn write(&mut self, row: usize, col: usize, value: T) -> Result<()>;

    /// Called once after the final record of a successfully completed stream
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the stream terminated abnormally
    fn abort(&mut self) {}
}

/// CSV sink writing a `row,col,value` header followed by one record per line
pub struct CsvSink<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Consumes the sink, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one `row,col,value` line, emitting the header first if needed
    pub fn write_record<T: Display>(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.write_header()?;
        writeln!(self.out, "{},{},{}", row, col, value)?;
        Ok(())
    }

    /// Flushes the underlying writer
    ///
    /// A zero-record matrix still gets its header.
    pub fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        self.out.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "row,col,value")?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write, T: Display> CooSink<T> for CsvSink<W> {
    fn write(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.write_record(row, col, value)
    }

    fn finish(&mut self) -> Result<()> {
        CsvSink::finish(self)
    }
}

/// Drives a streaming conversion into a sink
///
/// On an incremental validation failure the sink's `abort` hook runs before
/// the error propagates to the caller.
pub fn drain<T, S>(triplets: Triplets<'_, T>, sink: &mut S) -> Result<()>
where
    T: Copy,
    S: CooSink<T>,
{
    for record in triplets {
        match record {
            Ok((row, col, value)) => sink.write(row, col, value)?,
            Err(err) => {
                sink.abort();
                return Err(err);
            }
        }
    }
    sink.finish()
}

/// Writes triplets to `path` as CSV via [`CsvSink`]
pub fn write_csv<T, P>(path: P, triplets: &[Triplet<T>]) -> Result<()>
where
    T: Copy + Display,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut sink = CsvSink::new(BufWriter::new(file));

    for &(row, col, value) in triplets {
        sink.write_record(row, col, value)?;
    }
    sink.finish()
}

/// Writes triplets in Matrix Market coordinate format
///
/// Indices are converted to the format's 1-based convention. The header
/// needs `nnz` up front, so this writer is buffered-only.
pub fn write_matrix_market<T, P>(
    path: P,
    n_rows: usize,
    n_cols: usize,
    triplets: &[Triplet<T>],
) -> Result<()>
where
    T: Copy + Display,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "%%MatrixMarket matrix coordinate real general")?;
    writeln!(out, "{} {} {}", n_rows, n_cols, triplets.len())?;

    for &(row, col, value) in triplets {
        writeln!(out, "{} {} {}", row + 1, col + 1, value)?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_sink_writes_header_then_records() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_record(2, 0, 10).unwrap();
        sink.write_record(0, 1, 20).unwrap();
        sink.finish().unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "row,col,value\n2,0,10\n0,1,20\n");
    }

    #[test]
    fn empty_stream_still_writes_header() {
        let mut sink = CsvSink::new(Vec::new());
        sink.finish().unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "row,col,value\n");
    }

    #[test]
    fn drain_feeds_every_record() {
        let values = [10, 20, 30];
        let rows = [2, 0, 1];
        let ptrs = [0, 1, 3];

        let iter = Triplets::new(&values, &rows, &ptrs, None).unwrap();
        let mut sink = CsvSink::new(Vec::new());
        drain(iter, &mut sink).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "row,col,value\n2,0,10\n0,1,20\n1,1,30\n");
    }
}
