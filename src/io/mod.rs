// I/O collaborators: columnar readers and COO record sinks

pub mod reader;
pub mod writer;

pub use reader::read_column;
pub use writer::{drain, write_csv, write_matrix_market, CooSink, CsvSink};
