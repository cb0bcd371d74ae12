//! Logging and tracing initialization.

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber from the logging config.
///
/// `RUST_LOG` wins over the configured level filter. With a `file`
/// configured, output is appended there instead of stderr; degraded
/// pipeline states (null predictions, stale weights, swallowed store
/// errors) all surface through this subscriber rather than as errors.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    // Arc<File> because the subscriber needs a MakeWriter it can hand
    // out per event.
    let file = config.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("gazekit: cannot open log file {}: {e}", path.display()))
            .ok()
            .map(std::sync::Arc::new)
    });

    match (config.json, file) {
        (true, Some(file)) => {
            let subscriber = builder.json().with_writer(file).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (true, None) => {
            let subscriber = builder.json().finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, Some(file)) => {
            let subscriber = builder.with_ansi(false).with_writer(file).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, None) => {
            let subscriber = builder.finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}
