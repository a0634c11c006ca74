use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// the verdict on stdout stays machine readable.
pub fn init_logging(config: &LoggingConfig) {
    if tracing::subscriber::set_global_default(build_subscriber(config)).is_err() {
        tracing::warn!("Global tracing subscriber already installed");
    }
}

fn build_subscriber(config: &LoggingConfig) -> Box<dyn Subscriber + Send + Sync> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => Box::new(registry.with(fmt::layer().json().with_writer(std::io::stderr))),
        LogFormat::Pretty => Box::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(std::io::stderr),
            ),
        ),
    }
}
