//! Plain-text and JSON run reports.

use jiff::civil::Date;
use serde::Serialize;
use tailcast_core::model::{ForecastConfig, ReturnMethod};
use tailcast_core::{Forecast, RiskReport};

use crate::format::{format_currency, format_percentage};

/// Machine-readable run summary for `--json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    asset: &'a str,
    initial_date: Date,
    num_simulations: usize,
    horizon_days: usize,
    starting_price: f64,
    method: ReturnMethod,
    mean_return: f64,
    volatility: f64,
    risk: &'a RiskReport,
}

pub fn to_json(
    asset: &str,
    initial_date: Date,
    config: &ForecastConfig,
    forecast: &Forecast,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        asset,
        initial_date,
        num_simulations: config.num_simulations,
        horizon_days: config.horizon_days,
        starting_price: config.starting_price,
        method: forecast.estimate.method,
        mean_return: forecast.estimate.mean_return,
        volatility: forecast.estimate.volatility,
        risk: &forecast.report,
    })
}

pub fn render_text(
    asset: &str,
    initial_date: Date,
    config: &ForecastConfig,
    forecast: &Forecast,
) -> String {
    let estimate = &forecast.estimate;
    let report = &forecast.report;
    let method = match estimate.method {
        ReturnMethod::Simple => "simple",
        ReturnMethod::Logarithmic => "logarithmic",
    };

    let mut out = String::new();
    out.push_str(&format!("Monte Carlo forecast for {asset}\n"));
    out.push_str(&format!("  Initial date:        {initial_date}\n"));
    out.push_str(&format!(
        "  Starting price:      {}\n",
        format_currency(config.starting_price)
    ));
    out.push_str(&format!(
        "  Paths simulated:     {} x {} days\n",
        config.num_simulations, config.horizon_days
    ));
    out.push('\n');

    out.push_str(&format!("Historical estimate ({method} returns)\n"));
    out.push_str(&format!(
        "  Drift (daily):       {}\n",
        format_percentage(estimate.mean_return)
    ));
    out.push_str(&format!(
        "  Volatility (daily):  {}\n",
        format_percentage(estimate.volatility)
    ));
    out.push('\n');

    out.push_str(&format!(
        "Tail risk at {:.0}% confidence\n",
        report.confidence_level
    ));
    out.push_str(&format!(
        "  VaR:   price {}  loss {}\n",
        format_currency(report.price_at_var),
        format_currency(report.value_at_risk)
    ));
    out.push_str(&format!(
        "  CVaR:  price {}  loss {}\n",
        format_currency(report.price_at_cvar),
        format_currency(report.conditional_value_at_risk)
    ));
    out.push_str(&format!(
        "  Mean:  price {}  loss {}\n",
        format_currency(report.mean_price),
        format_currency(report.mean_loss)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use tailcast_core::model::HistoricalSeries;
    use tailcast_core::{PricePoint, run_forecast};

    fn sample_forecast() -> (ForecastConfig, Forecast) {
        let points = (0..10)
            .map(|i| PricePoint {
                date: date(2024, 1, 1 + i as i8),
                close: 100.0 + i as f64,
            })
            .collect();
        let series = HistoricalSeries::new(points).unwrap();
        let config = ForecastConfig {
            num_simulations: 50,
            horizon_days: 10,
            starting_price: 109.0,
            confidence_level: 95.0,
        };
        let forecast = run_forecast(&series, ReturnMethod::Simple, &config, 42).unwrap();
        (config, forecast)
    }

    #[test]
    fn text_report_mentions_the_key_figures() {
        let (config, forecast) = sample_forecast();
        let text = render_text("ACME", date(2024, 1, 10), &config, &forecast);

        assert!(text.contains("Monte Carlo forecast for ACME"));
        assert!(text.contains("2024-01-10"));
        assert!(text.contains("50 x 10 days"));
        assert!(text.contains("VaR:"));
        assert!(text.contains("CVaR:"));
        assert!(text.contains("simple returns"));
    }

    #[test]
    fn json_report_round_trips() {
        let (config, forecast) = sample_forecast();
        let json = to_json("ACME", date(2024, 1, 10), &config, &forecast).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["asset"], "ACME");
        assert_eq!(value["num_simulations"], 50);
        assert!(value["risk"]["value_at_risk"].is_number());
    }
}
