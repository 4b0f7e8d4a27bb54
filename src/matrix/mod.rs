// Matrix data structures and format conversion

pub mod convert;
pub mod csc;

pub use convert::{convert, convert_with, PointerConvention, Triplet, Triplets};
pub use csc::CscMatrix;
