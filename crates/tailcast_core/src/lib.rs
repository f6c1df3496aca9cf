//! Monte Carlo price forecasting and tail-risk analysis.
//!
//! Given a historical closing-price series, this crate estimates drift and
//! volatility from per-period returns, simulates many independent future
//! price paths under a geometric random-walk assumption, and reduces the
//! terminal-price distribution to Value at Risk, Conditional Value at Risk
//! and expected loss.
//!
//! The run is a strict linear pipeline: fetch (through [`source::PriceSource`])
//! -> estimate -> simulate -> evaluate. Each stage consumes and produces
//! immutable value objects; any failure aborts the run with nothing partial.
//!
//! ```ignore
//! use tailcast_core::{ForecastConfig, ReturnMethod, run_forecast};
//!
//! let config = ForecastConfig {
//!     num_simulations: 1000,
//!     horizon_days: 90,
//!     starting_price: series.last_close().unwrap(),
//!     confidence_level: 95.0,
//! };
//! let forecast = run_forecast(&series, ReturnMethod::Simple, &config, 42)?;
//! println!("VaR: {:.2}", forecast.report.value_at_risk);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod forecast;
pub mod risk;
pub mod simulation;
pub mod source;
pub mod statistics;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use forecast::{Forecast, run_forecast};
pub use model::{
    ForecastConfig, HistoricalSeries, PathMatrix, PricePoint, ReturnMethod, RiskReport,
};
pub use statistics::ReturnEstimate;
