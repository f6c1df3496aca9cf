//! Run configuration for a single forecast.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How per-period returns are derived from consecutive closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnMethod {
    /// `(p[i] - p[i-1]) / p[i-1]`
    #[default]
    Simple,
    /// `ln(p[i] / p[i-1])`
    Logarithmic,
}

/// Parameters for a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of independent simulated paths
    pub num_simulations: usize,
    /// Days into the future to simulate
    pub horizon_days: usize,
    /// Price at day zero of every path
    pub starting_price: f64,
    /// VaR/CVaR confidence level in percent, strictly inside (0, 100)
    pub confidence_level: f64,
}

impl ForecastConfig {
    /// Check every bound before any simulation work begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_simulations == 0 {
            return Err(ConfigError::NoSimulations);
        }
        if self.horizon_days == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if !self.starting_price.is_finite() || self.starting_price <= 0.0 {
            return Err(ConfigError::NonPositivePrice(self.starting_price));
        }
        validate_confidence(self.confidence_level)
    }
}

/// Confidence levels are percentages strictly inside (0, 100).
pub fn validate_confidence(level: f64) -> Result<(), ConfigError> {
    if !level.is_finite() || level <= 0.0 || level >= 100.0 {
        return Err(ConfigError::ConfidenceOutOfRange(level));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ForecastConfig {
        ForecastConfig {
            num_simulations: 1000,
            horizon_days: 90,
            starting_price: 100.0,
            confidence_level: 95.0,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn bounds_are_enforced() {
        let mut c = config();
        c.num_simulations = 0;
        assert!(matches!(c.validate(), Err(ConfigError::NoSimulations)));

        let mut c = config();
        c.horizon_days = 0;
        assert!(matches!(c.validate(), Err(ConfigError::ZeroHorizon)));

        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut c = config();
            c.starting_price = price;
            assert!(matches!(c.validate(), Err(ConfigError::NonPositivePrice(_))));
        }
    }

    #[test]
    fn confidence_is_exclusive_on_both_ends() {
        assert!(validate_confidence(50.0).is_ok());
        assert!(validate_confidence(0.001).is_ok());
        assert!(validate_confidence(99.999).is_ok());

        for level in [0.0, 100.0, -5.0, 120.0, f64::NAN] {
            assert!(matches!(
                validate_confidence(level),
                Err(ConfigError::ConfidenceOutOfRange(_))
            ));
        }
    }
}
