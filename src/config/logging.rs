//! Logging section of the configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Severity threshold accepted in `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Directive string for `EnvFilter`. tracing has no level above ERROR,
    /// so CRITICAL shares it.
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "expected one of {}",
                    LogLevel::ALL.map(|level| level.as_str()).join(", ")
                )
            })
    }
}

/// Output layout of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }

    /// Resolve a `LOG_FORMAT` value. Unknown values (for example a printf-style
    /// template) fall back to [`LogFormat::Full`] and are returned so the
    /// caller can report them.
    pub fn resolve(raw: &str) -> (LogFormat, Option<String>) {
        match raw.trim().to_ascii_lowercase().as_str() {
            "full" | "text" => (LogFormat::Full, None),
            "compact" => (LogFormat::Compact, None),
            "pretty" => (LogFormat::Pretty, None),
            "json" => (LogFormat::Json, None),
            _ => (LogFormat::Full, Some(raw.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `LOG_*` settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub to_file: bool,
    pub file: PathBuf,
    pub format: LogFormat,
    /// `LOG_FORMAT` value that was not recognised, if any
    pub unrecognized_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parses_case_insensitively() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" CRITICAL ".parse::<LogLevel>().unwrap(), LogLevel::Critical);
    }

    #[test]
    fn test_log_level_rejects_unknown_names() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(err.contains("DEBUG, INFO, WARNING, ERROR, CRITICAL"));
        // tracing's own spelling is not one of the accepted names
        assert!("warn".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_critical_maps_to_error() {
        assert_eq!(LogLevel::Critical.as_filter_directive(), "error");
        assert_eq!(LogLevel::Warning.as_filter_directive(), "warn");
    }

    #[test]
    fn test_log_format_fallback_reports_template() {
        assert_eq!(LogFormat::resolve("JSON"), (LogFormat::Json, None));

        let template = "%(asctime)s - %(name)s - %(levelname)s - %(message)s";
        let (format, ignored) = LogFormat::resolve(template);
        assert_eq!(format, LogFormat::Full);
        assert_eq!(ignored.as_deref(), Some(template));
    }
}
