//! Configuration file parser
//!
//! Parses redis.conf-style `name value` lines.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Config, LogLevel};

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid line format
    #[error("Invalid line format at line {0}: {1}")]
    Format(usize, String),

    /// Invalid parameter value
    #[error("Invalid value for parameter '{0}' at line {1}: {2}")]
    Value(String, usize, String),

    /// Unknown parameter
    #[error("Unknown parameter '{0}' at line {1}")]
    UnknownParam(String, usize),
}

/// Parse a configuration file
pub fn parse_config_file(path: &Path) -> Result<Config, ConfigParseError> {
    let text = fs::read_to_string(path)?;
    parse_config_str(&text)
}

/// Parse configuration text
pub fn parse_config_str(text: &str) -> Result<Config, ConfigParseError> {
    let mut config = Config::default();

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.splitn(2, ' ').collect();
        if parts.len() != 2 {
            return Err(ConfigParseError::Format(line_num + 1, line.to_string()));
        }

        let param = parts[0].trim().to_lowercase();
        let value = parts[1].trim();

        apply_config_param(&mut config, &param, value, line_num + 1)?;
    }

    Ok(config)
}

fn apply_config_param(config: &mut Config, param: &str, value: &str, line_num: usize) -> Result<(), ConfigParseError> {
    match param {
        "loglevel" => {
            config.log_level = value.parse::<LogLevel>()
                .map_err(|_| ConfigParseError::Value(param.to_string(), line_num, value.to_string()))?;
        }
        "logfile" => {
            let path = value.trim_matches('"');
            config.log_file = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }
        "log-commands" => {
            config.log_commands = parse_yes_no(param, value, line_num)?;
        }
        _ => return Err(ConfigParseError::UnknownParam(param.to_string(), line_num)),
    }

    Ok(())
}

/// Parse a yes/no value
fn parse_yes_no(param: &str, value: &str, line_num: usize) -> Result<bool, ConfigParseError> {
    match value.to_lowercase().as_str() {
        "yes" | "1" => Ok(true),
        "no" | "0" => Ok(false),
        _ => Err(ConfigParseError::Value(param.to_string(), line_num, value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let config_content = r#"
# Client logging
loglevel verbose
logfile /var/log/ferrous-client.log

log-commands yes
"#;

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();
        write(path, config_content).unwrap();

        let config = parse_config_file(path).unwrap();

        assert_eq!(config.log_level, LogLevel::Verbose);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/ferrous-client.log")));
        assert!(config.log_commands);
    }

    #[test]
    fn test_empty_logfile_means_stdout() {
        let config = parse_config_str("logfile \"\"\n").unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_config_str("loglevel notice\nloglevel shouting\n").unwrap_err();
        assert!(matches!(err, ConfigParseError::Value(ref p, 2, _) if p == "loglevel"));

        let err = parse_config_str("# comment\nport 6379\n").unwrap_err();
        assert!(matches!(err, ConfigParseError::UnknownParam(ref p, 2) if p == "port"));

        let err = parse_config_str("log-commands\n").unwrap_err();
        assert!(matches!(err, ConfigParseError::Format(1, _)));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_config_file(Path::new("/nonexistent/ferrous-client.conf")).unwrap_err();
        assert!(matches!(err, ConfigParseError::Io(_)));
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("test", "yes", 1).unwrap());
        assert!(!parse_yes_no("test", "no", 1).unwrap());
        assert!(parse_yes_no("test", "1", 1).unwrap());
        assert!(!parse_yes_no("test", "0", 1).unwrap());
        assert!(parse_yes_no("test", "invalid", 1).is_err());
    }
}
