use std::env;
use std::process;

use csc2coo::{convert, read_column, write_csv};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!(
            "usage: {} <values-file> <row-indices-file> <col-pointers-file> <output.csv>",
            args.first().map(String::as_str).unwrap_or("csc2coo")
        );
        process::exit(2);
    }

    if let Err(err) = run(&args[1], &args[2], &args[3], &args[4]) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(
    values_path: &str,
    indices_path: &str,
    pointers_path: &str,
    out_path: &str,
) -> csc2coo::Result<()> {
    let values: Vec<f64> = read_column(values_path)?;
    let row_indices: Vec<usize> = read_column(indices_path)?;
    let col_pointers: Vec<usize> = read_column(pointers_path)?;

    let triplets = convert(&values, &row_indices, &col_pointers, None)?;
    write_csv(out_path, &triplets)?;

    println!("wrote {} records to {}", triplets.len(), out_path);
    Ok(())
}
