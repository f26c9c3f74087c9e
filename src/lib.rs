//! rowvec: a self-contained row-vector type with descriptive statistics.
//!
//! This crate provides a single central abstraction, [`Vector`]: an ordered,
//! immutable sequence of `f64` supporting elementwise arithmetic (addition,
//! dot product, scalar scaling) and descriptive statistics (mean, median,
//! quantiles, variance, covariance, correlation, summaries).
//!
//! The numeric core is hand-rolled over `Vec<f64>` with no numerics-library
//! dependency; failure cases surface as typed [`VectorError`] values rather
//! than panics, except for the operator sugar (`&a + &b`, `&a * &b`), which
//! asserts on length mismatch.
pub mod error;
pub mod stats;
pub mod vector;

pub use error::{Result, VectorError};
pub use stats::{QuantileStrategy, Summary};
pub use vector::Vector;
