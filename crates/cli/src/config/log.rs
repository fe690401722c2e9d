//! Logging configuration for the command-line tools.
//!
//! [`LogConfig`] selects the sinks (stderr, stdout, journald, a file), the
//! minimum level and the line format. Rendered manifests go to stdout, so
//! stderr is the only sink enabled by default.
use std::{fmt, fs::OpenOptions, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use snafu::Snafu;
use tracing_subscriber::{
    Layer, fmt::writer::BoxMakeWriter, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Where log events go and how they look.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    /// Append log events to this file. The file is created if missing.
    #[serde(default = "LogConfig::default_file_path")]
    pub file_path: Option<PathBuf>,

    #[serde(default = "LogConfig::default_emit_journald")]
    pub emit_journald: bool,

    #[serde(default = "LogConfig::default_emit_stdout")]
    pub emit_stdout: bool,

    #[serde(default = "LogConfig::default_emit_stderr")]
    pub emit_stderr: bool,

    /// Events below this level are dropped.
    #[serde(default = "LogConfig::default_log_level")]
    #[serde_as(as = "DisplayFromStr")]
    pub level: tracing::Level,

    #[serde(default)]
    #[serde_as(as = "DisplayFromStr")]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_path: Self::default_file_path(),
            emit_journald: Self::default_emit_journald(),
            emit_stdout: Self::default_emit_stdout(),
            emit_stderr: Self::default_emit_stderr(),
            level: Self::default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub const fn default_log_level() -> tracing::Level { tracing::Level::INFO }

    #[inline]
    #[must_use]
    pub const fn default_file_path() -> Option<PathBuf> { None }

    #[inline]
    #[must_use]
    pub const fn default_emit_journald() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stdout() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stderr() -> bool { true }

    /// Installs the global `tracing` subscriber described by this config.
    ///
    /// A sink that cannot be opened (an unwritable file, a missing journald
    /// socket) is skipped rather than reported.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been installed.
    pub fn registry(&self) {
        let Self { file_path, emit_journald, emit_stdout, emit_stderr, level, format } = self;

        let filter_layer = tracing_subscriber::filter::LevelFilter::from_level(*level);

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(emit_journald.then(|| LogDriver::Journald.layer(*format)))
            .with(file_path.clone().map(|path| LogDriver::File(path).layer(*format)))
            .with(emit_stdout.then(|| LogDriver::Stdout.layer(*format)))
            .with(emit_stderr.then(|| LogDriver::Stderr.layer(*format)))
            .init();
    }
}

/// Line format of the `fmt` sinks. Journald ignores it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Multi-line, human oriented output with thread information.
    Pretty,
    #[default]
    Compact,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(ParseLogFormatError::Invalid { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseLogFormatError {
    #[snafu(display("'{value}' is not a valid log format, expected 'pretty' or 'compact'"))]
    Invalid { value: String },
}

#[derive(Clone, Debug)]
enum LogDriver {
    Stdout,
    Stderr,
    Journald,
    File(PathBuf),
}

impl LogDriver {
    #[allow(clippy::type_repetition_in_bounds)]
    fn layer<S>(self, format: LogFormat) -> Option<Box<dyn Layer<S> + Send + Sync + 'static>>
    where
        S: tracing::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let writer = match self {
            Self::Journald => return Some(Box::new(tracing_journald::layer().ok()?)),
            Self::Stdout => BoxMakeWriter::new(std::io::stdout),
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
                BoxMakeWriter::new(file)
            }
        };

        let fmt = tracing_subscriber::fmt::layer().with_writer(writer);
        match format {
            LogFormat::Pretty => {
                Some(Box::new(fmt.pretty().with_thread_ids(true).with_thread_names(true)))
            }
            LogFormat::Compact => Some(Box::new(fmt.compact().with_target(false))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logs_to_stderr_only() {
        let config = LogConfig::default();
        assert!(config.emit_stderr);
        assert!(!config.emit_stdout);
        assert!(!config.emit_journald);
        assert!(config.file_path.is_none());
        assert_eq!(config.level, tracing::Level::INFO);
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LogConfig = serde_yaml::from_str("level: debug\nformat: pretty\n").unwrap();
        assert_eq!(config.level, tracing::Level::DEBUG);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.emit_stderr);
    }

    #[test]
    fn test_deserialize_file_path() {
        let config: LogConfig =
            serde_yaml::from_str("filePath: /tmp/kibana-pod.log\nemitStderr: false\n").unwrap();
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/kibana-pod.log")));
        assert!(!config.emit_stderr);
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("json".parse::<LogFormat>().is_err());
    }
}
