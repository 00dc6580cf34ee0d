use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::configuration::{LogFormat, LoggerSettings};

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
///
/// The returned guard flushes the file appender and must be held for the
/// lifetime of the process.
pub fn init(settings: &LoggerSettings) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    // console layer for tracing-subscriber
    let console = match settings.format {
        LogFormat::Json => fmt::Layer::new()
            .with_span_events(FmtSpan::CLOSE)
            .json()
            .boxed(),
        LogFormat::Pretty => fmt::Layer::new().pretty().boxed(),
        LogFormat::Compact => fmt::Layer::new().compact().boxed(),
    };

    // file appender layer for tracing-subscriber
    let (file, guard) = match &settings.file_appender {
        Some(appender) => {
            let file_appender =
                tracing_appender::rolling::daily(&appender.directory, &appender.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .try_init()
    {
        eprintln!("tracing subscriber already installed: {}", e);
    }
    guard
}
