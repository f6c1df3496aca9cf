//! Value objects produced by the simulation and risk stages.

use serde::{Deserialize, Serialize};

/// Simulated price paths: one row per independent simulation.
///
/// Column 0 of every row equals the starting price; column `t` is the
/// simulated price `t` days into the forecast. Rows are independent and
/// identically distributed. A matrix is never mutated after simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatrix {
    starting_price: f64,
    paths: Vec<Vec<f64>>,
}

impl PathMatrix {
    pub(crate) fn new(starting_price: f64, paths: Vec<Vec<f64>>) -> Self {
        Self {
            starting_price,
            paths,
        }
    }

    #[must_use]
    pub fn starting_price(&self) -> f64 {
        self.starting_price
    }

    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Days simulated past day zero.
    #[must_use]
    pub fn horizon_days(&self) -> usize {
        self.paths.first().map_or(0, |p| p.len().saturating_sub(1))
    }

    #[must_use]
    pub fn path(&self, index: usize) -> &[f64] {
        &self.paths[index]
    }

    #[must_use]
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.paths
    }

    /// Final-day price of every path, in row order.
    #[must_use]
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths.iter().filter_map(|p| p.last().copied()).collect()
    }
}

/// Tail-risk snapshot derived from the terminal-price distribution.
///
/// Losses are relative to the starting price; a negative loss is an
/// expected gain. When losses are expressed as positive magnitudes,
/// `conditional_value_at_risk >= value_at_risk` whenever the tail is
/// non-degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Confidence level the thresholds were computed at, in percent
    pub confidence_level: f64,
    /// Loss at the VaR threshold
    pub value_at_risk: f64,
    /// Terminal price at the VaR threshold
    pub price_at_var: f64,
    /// Average loss over the tail at or below the VaR price
    pub conditional_value_at_risk: f64,
    /// Average terminal price over that tail
    pub price_at_cvar: f64,
    /// Loss at the distribution mean
    pub mean_loss: f64,
    /// Mean terminal price
    pub mean_price: f64,
}
