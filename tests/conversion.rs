//! Integration tests for the CSC to COO conversion engine

use csc2coo::{
    convert, convert_with, ConvertError, CscMatrix, ErrorKind, PointerConvention, Triplets,
};

/// A 4x3 matrix with an unsorted column, an empty column, and a duplicate row
///
/// ```text
/// col 0: rows [3, 0] (stored out of order)
/// col 1: (empty)
/// col 2: rows [1, 3, 2]
/// ```
fn awkward_input() -> (Vec<f64>, Vec<usize>, Vec<usize>) {
    let values = vec![9.0, 1.0, 2.0, 4.0, 3.0];
    let row_indices = vec![3, 0, 1, 3, 2];
    let col_pointers = vec![0, 2, 2, 5];
    (values, row_indices, col_pointers)
}

#[test]
fn converts_concrete_example() {
    let triplets = convert(&[10, 20, 30], &[2, 0, 1], &[0, 1, 3], None).unwrap();
    assert_eq!(triplets, vec![(2, 0, 10), (0, 1, 20), (1, 1, 30)]);
}

#[test]
fn empty_matrix_with_empty_columns_succeeds() {
    // Two empty columns, zero stored entries: valid, not an error.
    let triplets = convert::<f64>(&[], &[], &[0, 0, 0], None).unwrap();
    assert_eq!(triplets, vec![]);
}

#[test]
fn declared_bounds_reject_out_of_range_row() {
    let err = convert(&[5], &[1], &[0, 1], Some(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
    assert!(matches!(
        err,
        ConvertError::RowOutOfBounds {
            pos: 0,
            row: 1,
            n_rows: 1
        }
    ));
}

#[test]
fn record_count_equals_nnz() {
    let (values, row_indices, col_pointers) = awkward_input();
    let triplets = convert(&values, &row_indices, &col_pointers, Some(4)).unwrap();
    assert_eq!(triplets.len(), values.len());
}

#[test]
fn column_coverage_matches_pointer_gaps() {
    let (values, row_indices, col_pointers) = awkward_input();
    let triplets = convert(&values, &row_indices, &col_pointers, None).unwrap();

    for col in 0..col_pointers.len() - 1 {
        let expected = col_pointers[col + 1] - col_pointers[col];
        let found = triplets.iter().filter(|&&(_, c, _)| c == col).count();
        assert_eq!(found, expected, "coverage mismatch in column {}", col);
    }
}

#[test]
fn order_within_column_is_preserved() {
    let (values, row_indices, col_pointers) = awkward_input();
    let triplets = convert(&values, &row_indices, &col_pointers, None).unwrap();

    // Column 0 stores rows [3, 0]; the converter must not sort them.
    let col0: Vec<_> = triplets.iter().filter(|&&(_, c, _)| c == 0).collect();
    assert_eq!(col0, vec![&(3, 0, 9.0), &(0, 0, 1.0)]);

    // Column 2 keeps its stored order too.
    let col2: Vec<_> = triplets.iter().filter(|&&(_, c, _)| c == 2).collect();
    assert_eq!(col2, vec![&(1, 2, 2.0), &(3, 2, 4.0), &(2, 2, 3.0)]);
}

#[test]
fn columns_come_out_in_nondecreasing_order() {
    let (values, row_indices, col_pointers) = awkward_input();
    let triplets = convert(&values, &row_indices, &col_pointers, None).unwrap();

    let cols: Vec<_> = triplets.iter().map(|&(_, c, _)| c).collect();
    let mut sorted = cols.clone();
    sorted.sort_unstable();
    assert_eq!(cols, sorted);
}

#[test]
fn empty_column_contributes_no_records() {
    let (values, row_indices, col_pointers) = awkward_input();
    let triplets = convert(&values, &row_indices, &col_pointers, None).unwrap();

    assert_eq!(triplets.iter().filter(|&&(_, c, _)| c == 1).count(), 0);
    // Conversion still succeeded for the surrounding columns.
    assert_eq!(triplets.len(), 5);
}

#[test]
fn non_monotonic_pointers_rejected_without_output() {
    let err = convert(&[1, 2, 3, 4, 5], &[0, 1, 2, 3, 4], &[0, 3, 2, 5], None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedIndex);
    assert!(matches!(
        err,
        ConvertError::NonMonotonic {
            index: 2,
            prev: 3,
            next: 2
        }
    ));
}

#[test]
fn length_mismatch_rejected() {
    let err = convert(&[1.0, 2.0], &[0], &[0, 2], None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn empty_pointer_array_rejected() {
    let err = convert::<i32>(&[], &[], &[], None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn missing_final_sentinel_rejected_under_canonical_convention() {
    // Three stored entries but the last pointer claims two.
    let err = convert(&[1, 2, 3], &[0, 1, 2], &[0, 1, 2], None).unwrap_err();
    assert!(matches!(err, ConvertError::BadEnd { found: 2, nnz: 3 }));
}

#[test]
fn implicit_final_convention_reads_the_short_layout() {
    // The same input accepted once the shorter layout is requested
    // explicitly: two columns, final boundary implicitly nnz.
    let triplets = convert_with(
        &[1, 2, 3],
        &[0, 1, 2],
        &[0, 1],
        None,
        PointerConvention::ImplicitFinal,
    )
    .unwrap();
    assert_eq!(triplets, vec![(0, 0, 1), (1, 1, 2), (2, 1, 3)]);
}

#[test]
fn implicit_final_tolerates_canonical_input() {
    // A canonical-length array under the short convention gains one
    // trailing empty column and loses no records.
    let triplets = convert_with(
        &[7, 8],
        &[0, 1],
        &[0, 1, 2],
        None,
        PointerConvention::ImplicitFinal,
    )
    .unwrap();
    assert_eq!(triplets, vec![(0, 0, 7), (1, 1, 8)]);
}

#[test]
fn streaming_matches_buffered() {
    let (values, row_indices, col_pointers) = awkward_input();

    let buffered = convert(&values, &row_indices, &col_pointers, Some(4)).unwrap();
    let streamed: Vec<_> = Triplets::new(&values, &row_indices, &col_pointers, Some(4))
        .unwrap()
        .collect::<csc2coo::Result<_>>()
        .unwrap();

    assert_eq!(buffered, streamed);
}

#[test]
fn streaming_surfaces_bounds_error_once_then_ends() {
    // Second entry is out of bounds for a 2-row matrix.
    let mut iter = Triplets::new(&[1, 2, 3], &[0, 5, 1], &[0, 2, 3], Some(2)).unwrap();

    assert_eq!(iter.next().unwrap().unwrap(), (0, 0, 1));
    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn streaming_validates_pointers_before_any_record() {
    let err = Triplets::new(&[1, 2], &[0, 1], &[0, 2, 1, 2], None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedIndex);
}

#[test]
fn streaming_can_stop_early() {
    let (values, row_indices, col_pointers) = awkward_input();

    let head: Vec<_> = Triplets::new(&values, &row_indices, &col_pointers, None)
        .unwrap()
        .take(2)
        .collect::<csc2coo::Result<_>>()
        .unwrap();

    assert_eq!(head, vec![(3, 0, 9.0), (0, 0, 1.0)]);
}

#[test]
fn container_conversion_agrees_with_raw_conversion() {
    let (values, row_indices, col_pointers) = awkward_input();

    let matrix = CscMatrix::new(
        4,
        3,
        col_pointers.clone(),
        row_indices.clone(),
        values.clone(),
    )
    .unwrap();

    let raw = convert(&values, &row_indices, &col_pointers, Some(4)).unwrap();
    assert_eq!(matrix.to_coo(), raw);
}

#[test]
fn zeros_container_converts_to_nothing() {
    let matrix = CscMatrix::<f64>::zeros(10, 7);
    assert_eq!(matrix.to_coo(), vec![]);
}

#[test]
fn generic_over_integer_and_float_scalars() {
    let ints = convert(&[1i64, 2], &[0, 0], &[0, 1, 2], None).unwrap();
    assert_eq!(ints, vec![(0, 0, 1i64), (0, 1, 2)]);

    let floats = convert(&[1.5f32, 2.5], &[0, 0], &[0, 1, 2], None).unwrap();
    assert_eq!(floats, vec![(0, 0, 1.5f32), (0, 1, 2.5)]);
}
