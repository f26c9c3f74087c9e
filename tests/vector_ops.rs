//! Integration tests for the Vector container and its arithmetic.

use rowvec::{vector, Vector, VectorError};

// ---------------------------------------------------------------------------
// Construction and accessors
// ---------------------------------------------------------------------------

#[test]
fn vector_from_vec_and_len() {
    let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
}

#[test]
fn vector_empty() {
    let v = Vector::new(vec![]);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn vector_from_elem() {
    let v = Vector::from_elem(5, 42.0);
    assert_eq!(v.len(), 5);
    for value in v.iter() {
        assert_eq!(*value, 42.0);
    }
}

#[test]
fn vector_zeros_and_ones() {
    assert_eq!(Vector::zeros(3).to_vec(), vec![0.0, 0.0, 0.0]);
    assert_eq!(Vector::ones(2).to_vec(), vec![1.0, 1.0]);
}

#[test]
fn vector_macro_widens_integer_literals() {
    let v = vector![1, 2, 3, 4];
    assert_eq!(v, Vector::new(vec![1.0, 2.0, 3.0, 4.0]));
}

#[test]
fn vector_macro_empty() {
    let v = vector![];
    assert!(v.is_empty());
}

#[test]
fn vector_indexing_and_get() {
    let v = vector![10, 20, 30];
    assert_eq!(v[0], 10.0);
    assert_eq!(v[2], 30.0);
    assert_eq!(v.get(1), Some(20.0));
    assert_eq!(v.get(3), None);
}

#[test]
fn vector_values_preserve_order() {
    let v = vector![4, 1, 3];
    assert_eq!(v.values(), &[4.0, 1.0, 3.0]);
}

#[test]
fn vector_from_iterator() {
    let v: Vector = (1..=4).map(|i| i as f64).collect();
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn vector_into_vec() {
    let v = vector![1.5, 2.5];
    let raw: Vec<f64> = v.into();
    assert_eq!(raw, vec![1.5, 2.5]);
}

#[test]
fn vector_mapv() {
    let v = vector![1, 2, 3];
    let doubled = v.mapv(|x| x * 2.0);
    assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0]);
}

#[test]
fn vector_shape_is_one_row() {
    let v = vector![1, 2, 3, 4];
    assert_eq!(v.shape(), (1, 4));
    assert_eq!(vector![].shape(), (1, 0));
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn display_brackets_and_commas() {
    let v = vector![1, 2, 3, 4];
    assert_eq!(format!("{}", v), "[1, 2, 3, 4]");
}

#[test]
fn display_empty() {
    assert_eq!(format!("{}", vector![]), "[]");
}

#[test]
fn display_fractional_values() {
    let v = vector![1.5, 2.25];
    assert_eq!(format!("{}", v), "[1.5, 2.25]");
}

// ---------------------------------------------------------------------------
// Addition and vector_sum
// ---------------------------------------------------------------------------

#[test]
fn checked_add_is_pairwise() {
    let x = vector![1, 2, 3, 4];
    let y = vector![1, 2, 3, 4];
    let sum = x.checked_add(&y).unwrap();
    assert_eq!(sum.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn checked_add_length_mismatch() {
    let x = vector![1, 2, 3];
    let y = vector![1, 2];
    let err = x.checked_add(&y).unwrap_err();
    assert_eq!(err, VectorError::LengthMismatch { left: 3, right: 2 });
}

#[test]
fn add_operator_matches_checked_add() {
    let x = vector![1, 2];
    let y = vector![3, 4];
    assert_eq!(&x + &y, x.checked_add(&y).unwrap());
}

#[test]
fn addition_commutes() {
    let x = vector![1.0, -2.5, 4.0];
    let y = vector![0.5, 3.5, -1.0];
    assert_eq!(&x + &y, &y + &x);
}

#[test]
#[should_panic(expected = "equal length")]
fn add_operator_mismatched_lengths_panics() {
    let x = vector![1, 2, 3];
    let y = vector![1, 2];
    let _ = &x + &y;
}

#[test]
fn vector_sum_folds_all_arguments() {
    let x = vector![1, 2, 3, 4];
    let y = vector![1, 2, 3, 4];
    let z = Vector::ones(4);
    let total = x.vector_sum([&y, &z]).unwrap();
    assert_eq!(total.to_vec(), vec![3.0, 5.0, 7.0, 9.0]);
}

#[test]
fn vector_sum_with_no_extra_vectors_is_identity() {
    let x = vector![1, 2, 3, 4];
    let others: [&Vector; 0] = [];
    let total = x.vector_sum(others).unwrap();
    assert_eq!(total, x);
}

#[test]
fn vector_sum_propagates_length_mismatch() {
    let x = vector![1, 2, 3];
    let y = vector![1, 2, 3];
    let bad = vector![1, 2];
    let err = x.vector_sum([&y, &bad]).unwrap_err();
    assert_eq!(err, VectorError::LengthMismatch { left: 3, right: 2 });
}

// ---------------------------------------------------------------------------
// Dot product and scaling
// ---------------------------------------------------------------------------

#[test]
fn dot_product_value() {
    let x = vector![1, 2, 3, 4];
    let y = vector![1, 2, 3, 4];
    assert_eq!(x.dot(&y).unwrap(), 30.0);
}

#[test]
fn dot_commutes() {
    let x = vector![1.0, 2.0, -3.0];
    let y = vector![4.0, -5.0, 6.0];
    assert_eq!(x.dot(&y).unwrap(), y.dot(&x).unwrap());
}

#[test]
fn dot_length_mismatch() {
    let x = vector![1, 2];
    let y = vector![1, 2, 3];
    let err = x.dot(&y).unwrap_err();
    assert_eq!(err, VectorError::LengthMismatch { left: 2, right: 3 });
}

#[test]
fn mul_operator_on_vectors_is_dot() {
    let x = vector![1, 2, 3, 4];
    let y = vector![1, 2, 3, 4];
    assert_eq!(&x * &y, 30.0);
}

#[test]
#[should_panic(expected = "equal length")]
fn mul_operator_mismatched_lengths_panics() {
    let x = vector![1, 2];
    let y = vector![1, 2, 3];
    let _ = &x * &y;
}

#[test]
fn scale_multiplies_each_element() {
    let x = vector![1, 2, 3, 4];
    assert_eq!(x.scale(2.0).to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn mul_operator_with_scalar_is_scale() {
    let x = vector![1, 2, 3];
    assert_eq!(&x * 0.5, x.scale(0.5));
}

#[test]
fn scale_by_zero_gives_zeros() {
    let x = vector![1, 2, 3];
    assert_eq!(x.scale(0.0), Vector::zeros(3));
}

// ---------------------------------------------------------------------------
// Sums and norms
// ---------------------------------------------------------------------------

#[test]
fn sum_of_elements() {
    assert_eq!(vector![1, 2, 3, 4].sum(), 10.0);
    assert_eq!(vector![].sum(), 0.0);
}

#[test]
fn sum_of_squares_value() {
    assert_eq!(vector![1, 2, 3, 4].sum_of_squares(), 30.0);
    assert_eq!(vector![].sum_of_squares(), 0.0);
}

#[test]
fn norm_of_three_four_is_five() {
    let x = vector![3, 4];
    assert_eq!(x.norm(), 5.0);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn vector_serializes_as_plain_array() {
    let v = vector![1, 2];
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.0,2.0]");
}

#[test]
fn vector_round_trips_json() {
    let v = vector![1.5, -2.5, 0.0];
    let json = serde_json::to_string(&v).unwrap();
    let back: Vector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
