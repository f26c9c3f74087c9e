//! Descriptive statistics over [`Vector`].
//!
//! Order statistics work on an ascending-sorted copy; the vector itself is
//! never mutated. Sample statistics use Bessel's correction (`n - 1`
//! denominator) throughout.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorError};
use crate::vector::Vector;

/// Rule for reading a quantile off the ascending-sorted values.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuantileStrategy {
    /// Value at index `floor(p * n)`; accepts `p` in `[0, 1)`.
    Index,
    /// R-7 linear interpolation between neighboring order statistics;
    /// accepts `p` in `[0, 1]`.
    Linear,
}

impl Default for QuantileStrategy {
    fn default() -> Self {
        QuantileStrategy::Index
    }
}

impl FromStr for QuantileStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "index" => Ok(QuantileStrategy::Index),
            "linear" => Ok(QuantileStrategy::Linear),
            _ => Err(format!(
                "Unknown quantile strategy: {}. Valid options are `index` and `linear`",
                s
            )),
        }
    }
}

impl Vector {
    /// Minimum standard deviation accepted when standardizing, to avoid
    /// division by zero on constant data.
    const MIN_STD: f64 = 1e-12;

    fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.to_vec();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        sorted
    }

    /// Arithmetic mean. Errors on an empty vector.
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        Ok(self.sum() / self.len() as f64)
    }

    /// Middle value of the sorted copy; the average of the two middle values
    /// when the length is even. Errors on an empty vector.
    pub fn median(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        let sorted = self.sorted_values();
        let n = sorted.len();
        if n % 2 == 1 {
            Ok(sorted[n / 2])
        } else {
            Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        }
    }

    /// Index-based quantile: the sorted value at `floor(p * n)`, for `p` in
    /// `[0, 1)`. Shorthand for [`Vector::quantile_with`] under
    /// [`QuantileStrategy::Index`].
    pub fn quantile(&self, p: f64) -> Result<f64> {
        self.quantile_with(p, QuantileStrategy::Index)
    }

    /// Compute a quantile under an explicit strategy.
    ///
    /// # Arguments
    ///
    /// * `p` - The probability to evaluate. `Index` accepts `[0, 1)`;
    ///   `Linear` accepts the closed `[0, 1]`.
    /// * `strategy` - The rule mapping `p` onto the sorted values.
    ///
    /// # Returns
    ///
    /// The quantile value, or `QuantileOutOfRange` when `p` falls outside
    /// the strategy's accepted range, or `EmptyVector` for empty input.
    pub fn quantile_with(&self, p: f64, strategy: QuantileStrategy) -> Result<f64> {
        let in_range = match strategy {
            QuantileStrategy::Index => (0.0..1.0).contains(&p),
            QuantileStrategy::Linear => (0.0..=1.0).contains(&p),
        };
        if !in_range {
            return Err(VectorError::QuantileOutOfRange { p });
        }
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        let sorted = self.sorted_values();
        let n = sorted.len();
        match strategy {
            QuantileStrategy::Index => {
                let idx = ((p * n as f64).floor() as usize).min(n - 1);
                Ok(sorted[idx])
            }
            QuantileStrategy::Linear => {
                let h = (n - 1) as f64 * p;
                let j = h.floor() as usize;
                let g = h - h.floor();
                if j + 1 >= n {
                    Ok(sorted[n - 1])
                } else {
                    Ok((1.0 - g) * sorted[j] + g * sorted[j + 1])
                }
            }
        }
    }

    /// Sample variance (`n - 1` denominator). Errors on an empty vector and
    /// on a single-element vector.
    pub fn variance(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        if self.len() < 2 {
            return Err(VectorError::InsufficientData {
                len: self.len(),
                required: 2,
            });
        }
        let mean = self.mean()?;
        let centered = self.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>();
        Ok(centered / (self.len() - 1) as f64)
    }

    /// Sample standard deviation, `sqrt(variance())`.
    pub fn standard_deviation(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }

    /// `quantile(0.75) - quantile(0.25)` under the index strategy.
    pub fn interquartile_range(&self) -> Result<f64> {
        Ok(self.quantile(0.75)? - self.quantile(0.25)?)
    }

    /// Estimate the sample covariance between two vectors.
    ///
    /// Cov(X, Y) = sum((x_i - mean(x)) * (y_i - mean(y))) / (n - 1)
    ///
    /// # Arguments
    ///
    /// * `other` - The second vector; must match `self` in length.
    ///
    /// # Returns
    ///
    /// The covariance, or `LengthMismatch` when lengths differ,
    /// `EmptyVector` for empty input, `InsufficientData` for a single pair.
    pub fn covariance(&self, other: &Vector) -> Result<f64> {
        self.check_same_length(other)?;
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        if self.len() < 2 {
            return Err(VectorError::InsufficientData {
                len: self.len(),
                required: 2,
            });
        }
        let mean_x = self.mean()?;
        let mean_y = other.mean()?;
        let cross = self
            .iter()
            .zip(other.iter())
            .map(|(&x, &y)| (x - mean_x) * (y - mean_y))
            .sum::<f64>();
        Ok(cross / (self.len() - 1) as f64)
    }

    /// Pearson correlation: `covariance / (std_x * std_y)` when both
    /// standard deviations are strictly positive, `0.0` otherwise.
    pub fn correlation(&self, other: &Vector) -> Result<f64> {
        self.check_same_length(other)?;
        let std_x = self.standard_deviation()?;
        let std_y = other.standard_deviation()?;
        if std_x > 0.0 && std_y > 0.0 {
            Ok(self.covariance(other)? / (std_x * std_y))
        } else {
            log::debug!(
                "Zero standard deviation in correlation (left: {}, right: {}); returning 0",
                std_x,
                std_y
            );
            Ok(0.0)
        }
    }

    /// Smallest element. Errors on an empty vector.
    pub fn min(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        Ok(self.iter().fold(f64::INFINITY, |acc, &x| acc.min(x)))
    }

    /// Largest element. Errors on an empty vector.
    pub fn max(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        Ok(self.iter().fold(f64::NEG_INFINITY, |acc, &x| acc.max(x)))
    }

    /// Z-score standardization: `(x - mean) / std` per element, returned as
    /// a new vector. Constant input standardizes to zeros.
    pub fn normalized(&self) -> Result<Vector> {
        let mean = self.mean()?;
        let std = self.standard_deviation()?;
        let std = if std < Self::MIN_STD {
            log::debug!(
                "Standard deviation {} below minimum; clamping before standardization",
                std
            );
            Self::MIN_STD
        } else {
            std
        };
        Ok(self.mapv(|value| (value - mean) / std))
    }

    /// Compute a [`Summary`] of the vector. Errors on an empty vector;
    /// `std_dev` is `None` when fewer than two values are present.
    pub fn describe(&self) -> Result<Summary> {
        if self.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        let std_dev = match self.standard_deviation() {
            Ok(value) => Some(value),
            Err(VectorError::InsufficientData { .. }) => None,
            Err(err) => return Err(err),
        };
        let q1 = self.quantile(0.25)?;
        let q3 = self.quantile(0.75)?;
        Ok(Summary {
            len: self.len(),
            mean: self.mean()?,
            median: self.median()?,
            std_dev,
            min: self.min()?,
            max: self.max()?,
            q1,
            q3,
            iqr: q3 - q1,
        })
    }
}

/// Descriptive snapshot of a vector, produced by [`Vector::describe`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Summary {
    pub len: usize,
    pub mean: f64,
    pub median: f64,
    /// `None` when the vector holds fewer than two values.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Vector Summary -----")?;
        writeln!(f, "count    {}", self.len)?;
        writeln!(f, "mean     {}", self.mean)?;
        writeln!(f, "median   {}", self.median)?;
        match self.std_dev {
            Some(std_dev) => writeln!(f, "std_dev  {}", std_dev)?,
            None => writeln!(f, "std_dev  n/a")?,
        }
        writeln!(f, "min      {}", self.min)?;
        writeln!(f, "max      {}", self.max)?;
        writeln!(f, "q1       {}", self.q1)?;
        writeln!(f, "q3       {}", self.q3)?;
        write!(f, "iqr      {}", self.iqr)
    }
}
