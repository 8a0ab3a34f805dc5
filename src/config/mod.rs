//! Configuration for Ferrous typed clients
//!
//! Settings come from a redis.conf-style file or are built in code. They
//! control logging and whether issued commands are traced.

mod parser;

pub use parser::{parse_config_file, parse_config_str, ConfigParseError};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log file path (`None` for stdout)
    pub log_file: Option<PathBuf>,

    /// Log every issued command with its arguments at debug level.
    /// Off by default since arguments may carry values and secrets.
    pub log_commands: bool,
}

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - most verbose
    Debug,

    /// Verbose level
    Verbose,

    /// Notice level - default
    Notice,

    /// Warning level
    Warning,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::Notice,
            log_file: None,
            log_commands: false,
        }
    }
}

impl LogLevel {
    /// The tracing level this Redis log level corresponds to
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::TRACE,
            LogLevel::Verbose => tracing::Level::DEBUG,
            LogLevel::Notice => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "verbose" => Ok(LogLevel::Verbose),
            "notice" => Ok(LogLevel::Notice),
            "warning" => Ok(LogLevel::Warning),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
            LogLevel::Notice => "notice",
            LogLevel::Warning => "warning",
        };
        f.write_str(name)
    }
}
