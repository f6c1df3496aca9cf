//! Error taxonomy for the forecast pipeline.
//!
//! Every failure here is fatal to the run: a run either produces a complete
//! forecast or nothing. The engine retries nothing; retry policy belongs to
//! the data-source collaborator.

use std::fmt;

use jiff::civil::Date;

/// Historical data retrieval failed.
#[derive(Debug, Clone)]
pub enum SourceError {
    /// The source produced nothing usable for `asset` in `[start, end)`.
    Unavailable {
        asset: String,
        start: Date,
        end: Date,
        reason: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable {
                asset,
                start,
                end,
                reason,
            } => {
                write!(
                    f,
                    "historical data unavailable for {asset} in [{start}, {end}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// A price series failed validation.
#[derive(Debug, Clone)]
pub enum SeriesError {
    /// Dates must be strictly increasing; `index` is the offending point.
    NotChronological { index: usize, date: Date },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::NotChronological { index, date } => {
                write!(
                    f,
                    "price point {index} ({date}) is not strictly after its predecessor"
                )
            }
        }
    }
}

impl std::error::Error for SeriesError {}

/// Return estimation failed.
#[derive(Debug, Clone)]
pub enum EstimateError {
    /// Fewer than two price points; no return can be computed.
    InsufficientData { points: usize },
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::InsufficientData { points } => {
                write!(
                    f,
                    "cannot estimate returns from {points} price point(s), need at least 2"
                )
            }
        }
    }
}

impl std::error::Error for EstimateError {}

/// A run configuration bound was violated.
///
/// Caught before any simulation work begins.
#[derive(Debug, Clone)]
pub enum ConfigError {
    NoSimulations,
    ZeroHorizon,
    NonPositivePrice(f64),
    ConfidenceOutOfRange(f64),
    EmptyTerminalPrices,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoSimulations => {
                write!(f, "number of simulations must be positive")
            }
            ConfigError::ZeroHorizon => {
                write!(f, "forecast horizon must be at least one day")
            }
            ConfigError::NonPositivePrice(price) => {
                write!(f, "starting price must be positive, got {price}")
            }
            ConfigError::ConfidenceOutOfRange(level) => {
                write!(f, "confidence level must be inside (0, 100), got {level}")
            }
            ConfigError::EmptyTerminalPrices => {
                write!(f, "terminal price sequence is empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Risk evaluation failed.
#[derive(Debug, Clone)]
pub enum RiskError {
    Config(ConfigError),
    /// No terminal price fell at or below the VaR price; the tail average
    /// is undefined. Indicates a degenerate configuration.
    EmptyTail { threshold: f64 },
}

impl fmt::Display for RiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskError::Config(e) => write!(f, "{e}"),
            RiskError::EmptyTail { threshold } => {
                write!(
                    f,
                    "no terminal prices at or below the VaR price {threshold}"
                )
            }
        }
    }
}

impl std::error::Error for RiskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RiskError::Config(e) => Some(e),
            RiskError::EmptyTail { .. } => None,
        }
    }
}

impl From<ConfigError> for RiskError {
    fn from(e: ConfigError) -> Self {
        RiskError::Config(e)
    }
}

/// Any stage of the forecast pipeline failed.
#[derive(Debug, Clone)]
pub enum ForecastError {
    Source(SourceError),
    Series(SeriesError),
    Estimate(EstimateError),
    Config(ConfigError),
    Risk(RiskError),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::Source(e) => write!(f, "{e}"),
            ForecastError::Series(e) => write!(f, "{e}"),
            ForecastError::Estimate(e) => write!(f, "{e}"),
            ForecastError::Config(e) => write!(f, "{e}"),
            ForecastError::Risk(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ForecastError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ForecastError::Source(e) => Some(e),
            ForecastError::Series(e) => Some(e),
            ForecastError::Estimate(e) => Some(e),
            ForecastError::Config(e) => Some(e),
            ForecastError::Risk(e) => Some(e),
        }
    }
}

impl From<SourceError> for ForecastError {
    fn from(e: SourceError) -> Self {
        ForecastError::Source(e)
    }
}

impl From<SeriesError> for ForecastError {
    fn from(e: SeriesError) -> Self {
        ForecastError::Series(e)
    }
}

impl From<EstimateError> for ForecastError {
    fn from(e: EstimateError) -> Self {
        ForecastError::Estimate(e)
    }
}

impl From<ConfigError> for ForecastError {
    fn from(e: ConfigError) -> Self {
        ForecastError::Config(e)
    }
}

impl From<RiskError> for ForecastError {
    fn from(e: RiskError) -> Self {
        ForecastError::Risk(e)
    }
}
