// Interop with external sparse matrix libraries

pub mod formats;

pub use formats::{from_sprs_csc, to_sprs_csc, to_sprs_triplets};
