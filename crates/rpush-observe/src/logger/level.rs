use std::{fmt, str::FromStr};

use crate::logger::error::LoggerError;

/// Verbosity accepted on the command line.
///
/// Names follow the classic syslog-style set. `Critical` silences everything: nothing in this program logs above error severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LoggerLevel {
    Critical,
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl LoggerLevel {
    pub const NAMES: [&'static str; 5] = ["CRITICAL", "ERROR", "WARNING", "INFO", "DEBUG"];

    pub fn new(s: &str) -> Result<Self, LoggerError> {
        s.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerLevel::Critical => "CRITICAL",
            LoggerLevel::Error => "ERROR",
            LoggerLevel::Warning => "WARNING",
            LoggerLevel::Info => "INFO",
            LoggerLevel::Debug => "DEBUG",
        }
    }

    /// `EnvFilter` directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LoggerLevel::Critical => "off",
            LoggerLevel::Error => "error",
            LoggerLevel::Warning => "warn",
            LoggerLevel::Info => "info",
            LoggerLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(LoggerLevel::Critical),
            "ERROR" => Ok(LoggerLevel::Error),
            "WARNING" => Ok(LoggerLevel::Warning),
            "INFO" => Ok(LoggerLevel::Info),
            "DEBUG" => Ok(LoggerLevel::Debug),
            _ => Err(LoggerError::InvalidLogLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_names() {
        for name in LoggerLevel::NAMES {
            let level = LoggerLevel::new(name).unwrap();
            assert_eq!(level.as_str(), name);
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(matches!(
            LoggerLevel::new("info"),
            Err(LoggerError::InvalidLogLevel(ref s)) if s == "info"
        ));
        assert!(LoggerLevel::new("TRACE").is_err());
    }

    #[test]
    fn directives() {
        assert_eq!(LoggerLevel::Critical.as_directive(), "off");
        assert_eq!(LoggerLevel::Error.as_directive(), "error");
        assert_eq!(LoggerLevel::Warning.as_directive(), "warn");
        assert_eq!(LoggerLevel::Info.as_directive(), "info");
        assert_eq!(LoggerLevel::Debug.as_directive(), "debug");
    }

    #[test]
    fn default_is_info() {
        assert_eq!(LoggerLevel::default(), LoggerLevel::Info);
    }
}
