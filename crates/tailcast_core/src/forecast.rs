//! The forecast pipeline: estimate, simulate, evaluate.

use crate::error::ForecastError;
use crate::model::{ForecastConfig, HistoricalSeries, PathMatrix, ReturnMethod, RiskReport};
use crate::risk;
use crate::simulation;
use crate::statistics::{self, ReturnEstimate};

/// Everything a single run produces. Immutable once built; a new run
/// produces entirely new instances.
#[derive(Debug, Clone)]
pub struct Forecast {
    pub estimate: ReturnEstimate,
    pub paths: PathMatrix,
    /// Final-day price of every path, in row order
    pub terminal_prices: Vec<f64>,
    pub report: RiskReport,
}

/// Run the full pipeline over an already-fetched series.
///
/// Stages run strictly in order with no backward transitions; the first
/// failure aborts the run and nothing partial is returned.
pub fn run_forecast(
    series: &HistoricalSeries,
    method: ReturnMethod,
    config: &ForecastConfig,
    seed: u64,
) -> Result<Forecast, ForecastError> {
    let estimate = statistics::estimate_returns(series, method)?;
    let paths = simulation::simulate(&estimate, config, seed)?;
    let terminal_prices = paths.terminal_prices();
    let report = risk::evaluate(
        &terminal_prices,
        config.starting_price,
        config.confidence_level,
    )?;

    Ok(Forecast {
        estimate,
        paths,
        terminal_prices,
        report,
    })
}
