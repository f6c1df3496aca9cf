//! Drift and volatility estimation from historical prices.

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::model::{HistoricalSeries, ReturnMethod};

/// Drift/volatility estimate derived from one historical series.
///
/// Immutable once computed; the simulation stage only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnEstimate {
    pub method: ReturnMethod,
    /// Arithmetic mean of the per-period returns (the drift)
    pub mean_return: f64,
    /// Unbiased sample standard deviation of the per-period returns
    pub volatility: f64,
    /// The per-period return series the moments were computed from
    pub period_returns: Vec<f64>,
}

impl ReturnEstimate {
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.volatility * self.volatility
    }
}

/// Estimate drift and volatility from consecutive closes.
///
/// Needs at least two price points to form one return. A single return has
/// no sample standard deviation (denominator n-1 is zero); volatility is
/// reported as 0.0 in that case so it stays non-negative and finite.
pub fn estimate_returns(
    series: &HistoricalSeries,
    method: ReturnMethod,
) -> Result<ReturnEstimate, EstimateError> {
    if series.len() < 2 {
        return Err(EstimateError::InsufficientData {
            points: series.len(),
        });
    }

    let closes = series.closes();
    let period_returns: Vec<f64> = closes
        .windows(2)
        .map(|pair| match method {
            ReturnMethod::Simple => (pair[1] - pair[0]) / pair[0],
            ReturnMethod::Logarithmic => (pair[1] / pair[0]).ln(),
        })
        .collect();

    let n = period_returns.len() as f64;
    let mean_return = period_returns.iter().sum::<f64>() / n;

    let volatility = if period_returns.len() < 2 {
        0.0
    } else {
        let sum_sq: f64 = period_returns
            .iter()
            .map(|r| (r - mean_return).powi(2))
            .sum();
        (sum_sq / (n - 1.0)).sqrt()
    };

    Ok(ReturnEstimate {
        method,
        mean_return,
        volatility,
        period_returns,
    })
}
