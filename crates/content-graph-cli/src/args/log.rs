use clap::ValueEnum;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, EnvFilter, Layer};

/// Target of the schema library's events. The binary shares it, being named `content-graph`.
const LIBRARY_TARGET: &str = "content_graph";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the schema library
    Error,
    /// Warnings and errors from the schema library
    #[default]
    Warn,
    /// Info, warning and error messages from the schema library
    Info,
    /// Debug, info, warning and error messages from the schema library
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    /// `RUST_LOG` overrides the level when set.
    pub(crate) fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()))
    }

    fn directives(self) -> String {
        let level = match self {
            LogLevel::Off => return "off".to_owned(),
            LogLevel::Trace => return "trace".to_owned(),
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };

        format!("{LIBRARY_TARGET}={level},off")
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogStyle {
    /// Standard text
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl LogStyle {
    /// Logs go to stderr, stdout is reserved for command output.
    pub(crate) fn layer<S>(self) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        match self {
            // colored only on interactive terminals
            LogStyle::Text => layer.with_ansi(atty::is(atty::Stream::Stderr)).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}
