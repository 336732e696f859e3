use serde::{Deserialize, Serialize};

use tallybook_core::{DomainError, DomainResult, ValueObject};

use crate::rounding::{PRICE_DECIMAL_PLACES, round_half_up};

/// A non-empty, finite batch of prices submitted together.
///
/// The series is validated once on construction and never mutated, so every
/// statistic below can rely on at least one finite element being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct NumericSeries {
    values: Vec<f64>,
}

impl NumericSeries {
    pub fn new(values: Vec<f64>) -> DomainResult<Self> {
        if values.is_empty() {
            return Err(DomainError::validation("series cannot be empty"));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(DomainError::validation(format!(
                "series values must be finite (got {bad})"
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Arithmetic mean, rounded half-up to two places.
    pub fn average(&self) -> f64 {
        let sum: f64 = self.values.iter().sum();
        round_half_up(sum / self.values.len() as f64, PRICE_DECIMAL_PLACES)
    }

    /// Greatest element, rounded half-up to two places.
    ///
    /// Linear scan seeded with the first element; only a strictly greater
    /// value replaces the current maximum.
    pub fn maximum(&self) -> f64 {
        let mut greatest = self.values[0];
        for &value in &self.values[1..] {
            if value > greatest {
                greatest = value;
            }
        }
        round_half_up(greatest, PRICE_DECIMAL_PLACES)
    }

    /// Number of elements exactly equal to `target`.
    ///
    /// Plain `f64` equality with no tolerance: two inputs match only if they
    /// parse to the same float.
    pub fn count_occurrences(&self, target: f64) -> usize {
        self.values.iter().filter(|&&value| value == target).count()
    }

    /// Running totals, rounded to two places at every step.
    ///
    /// `result[0] = round(s[0])` and `result[i] = round(result[i - 1] + s[i])`;
    /// the rounded prefix (not the raw running sum) feeds the next step.
    pub fn cumulative_sum(&self) -> CumulativeSeries {
        let mut running = 0.0;
        let totals = self
            .values
            .iter()
            .map(|&value| {
                running = round_half_up(running + value, PRICE_DECIMAL_PLACES);
                running
            })
            .collect();
        CumulativeSeries(totals)
    }
}

impl TryFrom<Vec<f64>> for NumericSeries {
    type Error = DomainError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<NumericSeries> for Vec<f64> {
    fn from(series: NumericSeries) -> Self {
        series.values
    }
}

impl ValueObject for NumericSeries {}

/// Stepwise-rounded prefix sums of a [`NumericSeries`].
///
/// Displays as `[3.00, 6.45]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CumulativeSeries(Vec<f64>);

impl CumulativeSeries {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The overall total (last prefix sum).
    pub fn total(&self) -> Option<f64> {
        self.0.last().copied()
    }
}

impl core::fmt::Display for CumulativeSeries {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:.2}")?;
        }
        f.write_str("]")
    }
}

impl ValueObject for CumulativeSeries {}
