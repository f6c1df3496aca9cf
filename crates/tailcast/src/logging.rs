use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `{log_dir}/tailcast.log`.
///
/// Logs go to a file because the chart viewer owns the terminal. The log
/// level comes from `level` unless the `RUST_LOG` environment variable
/// overrides it.
pub fn init_logging(log_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join("tailcast.log");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("tailcast={level},tailcast_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "tailcast logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}
