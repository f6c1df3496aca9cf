use std::path::PathBuf;

use clap::Parser;
use jiff::ToSpan;
use jiff::civil::Date;
use tailcast_core::model::{ForecastConfig, ReturnMethod};
use tailcast_core::source::PriceSource;
use tracing::info;

mod app;
mod charts;
mod format;
mod logging;
mod report;
mod source;

use app::App;
use source::CsvSource;

#[derive(Parser, Debug)]
#[command(name = "tailcast")]
#[command(about = "Monte Carlo price forecasting with VaR/CVaR tail-risk metrics")]
struct Args {
    /// Asset symbol to forecast
    #[arg(long, default_value = "AAPL")]
    asset: String,

    /// Days into the future the forecast extends
    #[arg(long, default_value_t = 90)]
    forecast_horizon: usize,

    /// Date the forecast starts from (YYYY-MM-DD); also the end of the
    /// historical window. Defaults to today.
    #[arg(long)]
    initial_date: Option<Date>,

    /// Days of historical data the estimate is drawn from
    #[arg(long, default_value_t = 500)]
    lookback_days: i64,

    /// Number of simulated paths
    #[arg(long, default_value_t = 1000)]
    simulations: usize,

    /// VaR/CVaR confidence level in percent
    #[arg(long, default_value_t = 95.0)]
    confidence: f64,

    /// Return estimation method
    #[arg(long, value_enum, default_value_t = Method::Simple)]
    method: Method,

    /// CSV file of historical closes for the asset (date,close per line)
    #[arg(long)]
    data: PathBuf,

    /// Seed for the random source; fixed seed means reproducible paths
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Open the interactive chart viewer after the run
    #[arg(long)]
    chart: bool,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Method {
    Simple,
    Log,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Simple => write!(f, "simple"),
            Method::Log => write!(f, "log"),
        }
    }
}

impl From<Method> for ReturnMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Simple => ReturnMethod::Simple,
            Method::Log => ReturnMethod::Logarithmic,
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tailcast")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&default_log_dir(), &args.log_level)?;

    let initial_date = args
        .initial_date
        .unwrap_or_else(|| jiff::Zoned::now().date());
    let hist_start = initial_date.saturating_sub(args.lookback_days.days());

    info!(asset = %args.asset, %initial_date, %hist_start, "fetching historical window");

    let source = CsvSource::open(&args.data)?;
    let series = source.fetch(&args.asset, hist_start, initial_date)?;

    let starting_price = series
        .last_close()
        .ok_or_else(|| color_eyre::eyre::eyre!("historical series is empty"))?;

    let config = ForecastConfig {
        num_simulations: args.simulations,
        horizon_days: args.forecast_horizon,
        starting_price,
        confidence_level: args.confidence,
    };

    let forecast = tailcast_core::run_forecast(&series, args.method.into(), &config, args.seed)?;

    info!(
        paths = forecast.paths.num_paths(),
        var = forecast.report.value_at_risk,
        cvar = forecast.report.conditional_value_at_risk,
        "forecast complete"
    );

    if args.json {
        println!(
            "{}",
            report::to_json(&args.asset, initial_date, &config, &forecast)?
        );
    } else {
        print!(
            "{}",
            report::render_text(&args.asset, initial_date, &config, &forecast)
        );
    }

    if args.chart {
        let mut app = App::new(args.asset.clone(), initial_date, forecast);
        ratatui::run(|terminal| app.run(terminal))?;
        if let Err(err) = ratatui::try_restore() {
            tracing::error!("Failed to restore terminal: {err}");
        }
    }

    Ok(())
}
