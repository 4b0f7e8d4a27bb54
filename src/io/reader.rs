//! Reading columnar numeric text files
//!
//! The converter's inputs arrive as three separate text files, one stored
//! value per record (a single CSV column each). The reader's contract is
//! deliberately small: produce the numeric values in encounter order, taking
//! the first comma- or whitespace-delimited field of each record and
//! skipping blank lines. Anything richer (headers, multi-column layouts)
//! belongs to a different tool.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// Reads one numeric value per record from a delimited text file
///
/// # Errors
///
/// Fails with `Io` if the file cannot be opened or read, and with `Parse`
/// (carrying the 1-based line number and the offending token) if a record's
/// first field is not a number.
pub fn read_column<T, P>(path: P) -> Result<Vec<T>>
where
    T: FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let field = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .next()
            .unwrap_or(line);

        match field.parse::<T>() {
            Ok(value) => out.push(value),
            Err(_) => {
                return Err(ConvertError::Parse {
                    line: lineno + 1,
                    token: field.to_string(),
                })
            }
        }
    }

    Ok(out)
}
