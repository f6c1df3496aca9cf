//! Tail-risk metrics over the terminal-price distribution.

use crate::error::{ConfigError, RiskError};
use crate::model::{RiskReport, validate_confidence};

/// Percentile of `sorted` (ascending) by linear interpolation between
/// order statistics at rank `p * (n - 1)`, `p` in [0, 1].
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let weight = rank - lo as f64;
    sorted[lo] * (1.0 - weight) + sorted[hi] * weight
}

/// Derive VaR, CVaR and mean loss from the terminal prices of a run.
///
/// `price_at_var` is the `(100 - confidence_level)`-th percentile of the
/// terminal prices; the conditional tail is every price at or below it.
/// Losses are `starting_price - price`, so a negative loss is a gain.
pub fn evaluate(
    terminal_prices: &[f64],
    starting_price: f64,
    confidence_level: f64,
) -> Result<RiskReport, RiskError> {
    validate_confidence(confidence_level)?;
    if terminal_prices.is_empty() {
        return Err(RiskError::Config(ConfigError::EmptyTerminalPrices));
    }

    let mut sorted = terminal_prices.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p = (100.0 - confidence_level) / 100.0;
    let price_at_var = percentile_sorted(&sorted, p);
    let value_at_risk = starting_price - price_at_var;

    let tail_len = sorted.partition_point(|&price| price <= price_at_var);
    if tail_len == 0 {
        return Err(RiskError::EmptyTail {
            threshold: price_at_var,
        });
    }
    let price_at_cvar = sorted[..tail_len].iter().sum::<f64>() / tail_len as f64;
    let conditional_value_at_risk = starting_price - price_at_cvar;

    let mean_price = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let mean_loss = starting_price - mean_price;

    Ok(RiskReport {
        confidence_level,
        value_at_risk,
        price_at_var,
        conditional_value_at_risk,
        price_at_cvar,
        mean_loss,
        mean_price,
    })
}
