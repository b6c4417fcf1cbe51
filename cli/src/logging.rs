use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use toltec_repeat_core::api::{CliError, LoggingConfig};

const LOG_PREFIX: &str = "toltec-repeat";

/// Logs go to stderr; stdout carries the pattern and match listing.
///
/// `RUST_LOG` wins over the configured level. The returned guard must live
/// until exit so the file writer flushes.
pub fn init(cfg: &LoggingConfig) -> Result<Option<WorkerGuard>, CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    if cfg.directory.trim().is_empty() {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .map_err(|e| CliError::Logging(e.to_string()))?;
        return Ok(None);
    }

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(&cfg.directory)
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing::debug!(directory = %cfg.directory, "file logging enabled");
    Ok(Some(guard))
}
