use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Index, Mul};
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorError};

/// An ordered, immutable sequence of `f64` values.
///
/// Length is fixed at construction and elements cannot be mutated in place;
/// every arithmetic operation returns a new `Vector`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(data)
    }

    pub fn from_elem(len: usize, value: f64) -> Self {
        Vector::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self {
        Vector::from_elem(len, 0.0)
    }

    pub fn ones(len: usize) -> Self {
        Vector::from_elem(len, 1.0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Shape under the row-vector convention: one row, `len()` columns.
    pub fn shape(&self) -> (usize, usize) {
        (1, self.len())
    }

    pub fn mapv<F>(&self, mut f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        Vector::from_vec(self.data.iter().map(|v| f(*v)).collect())
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Prints the bracketed element list (`[1, 2, 3, 4]`) to stdout.
    pub fn display(&self) {
        println!("{}", self);
    }

    pub(crate) fn check_same_length(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(VectorError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Elementwise addition. The `&a + &b` operator is the panicking
    /// equivalent.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.check_same_length(other)?;
        Ok(Vector::from_vec(
            self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        ))
    }

    /// Folds `self` and every vector in `others` into a single elementwise
    /// sum. With no extra vectors the result is a copy of `self`.
    pub fn vector_sum<'a, I>(&self, others: I) -> Result<Vector>
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let mut total = self.clone();
        for other in others {
            total = total.checked_add(other)?;
        }
        Ok(total)
    }

    /// Dot product. The `&a * &b` operator is the panicking equivalent.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_length(other)?;
        Ok(dot_scalar(self.values(), other.values()))
    }

    /// Multiplies every element by `factor`.
    pub fn scale(&self, factor: f64) -> Vector {
        self.mapv(|value| value * factor)
    }

    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    pub fn sum_of_squares(&self) -> f64 {
        dot_scalar(self.values(), self.values())
    }

    /// Euclidean length, `sqrt(sum_of_squares())`.
    pub fn norm(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }
}

fn dot_scalar(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Elementwise addition requires vectors of equal length"
        );
        Vector::from_vec(self.iter().zip(rhs.iter()).map(|(a, b)| a + b).collect())
    }
}

impl<'a, 'b> Mul<&'b Vector> for &'a Vector {
    type Output = f64;

    fn mul(self, rhs: &'b Vector) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Dot product requires vectors of equal length"
        );
        dot_scalar(self.values(), rhs.values())
    }
}

impl<'a> Mul<f64> for &'a Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Builds a [`Vector`] from a comma-separated list of numeric values.
/// Integer literals are widened to `f64`; `vector![]` is the empty vector.
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new(Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Vector::new(vec![$($value as f64),+])
    };
}
