/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use crate::LogError;

/// Syslog style severity, a smaller value is more severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    // system is unusable
    Emergency = 0,
    // action must be taken immediately
    Alert = 1,
    // critical conditions
    Critical = 2,
    // error conditions
    Error = 3,
    // warning conditions
    Warning = 4,
    // normal, but significant, condition
    Notice = 5,
    // informational message
    Info = 6,
    // debug-level message
    Debug = 7,
    // resource usage dumps
    Resources = 8,
}

impl Priority {
    /// Entries at or above this severity go to the high priority channel.
    pub const HIGH_PRIORITY_BOUNDARY: Priority = Priority::Warning;

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Priority::Emergency),
            1 => Some(Priority::Alert),
            2 => Some(Priority::Critical),
            3 => Some(Priority::Error),
            4 => Some(Priority::Warning),
            5 => Some(Priority::Notice),
            6 => Some(Priority::Info),
            7 => Some(Priority::Debug),
            8 => Some(Priority::Resources),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Emergency => "Emergency",
            Priority::Alert => "Alert",
            Priority::Critical => "Critical",
            Priority::Error => "Error",
            Priority::Warning => "Warning",
            Priority::Notice => "Notice",
            Priority::Info => "Info",
            Priority::Debug => "Debug",
            Priority::Resources => "Resources",
        }
    }

    /// Whether a threshold set to `self` lets `priority` through.
    #[inline]
    pub const fn admits(self, priority: Priority) -> bool {
        priority.as_u8() <= self.as_u8()
    }

    #[inline]
    pub const fn is_high(self) -> bool {
        Self::HIGH_PRIORITY_BOUNDARY.admits(self)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = u8::from_str(s) {
            return Priority::from_u8(v).ok_or_else(|| LogError::InvalidPriority(s.to_string()));
        }
        match s.to_lowercase().as_str() {
            "emergency" | "emerg" => Ok(Priority::Emergency),
            "alert" => Ok(Priority::Alert),
            "critical" | "crit" => Ok(Priority::Critical),
            "error" | "err" => Ok(Priority::Error),
            "warning" | "warn" => Ok(Priority::Warning),
            "notice" => Ok(Priority::Notice),
            "info" => Ok(Priority::Info),
            "debug" => Ok(Priority::Debug),
            "resources" => Ok(Priority::Resources),
            _ => Err(LogError::InvalidPriority(s.to_string())),
        }
    }
}

/// Coarse verbosity presets exposed to the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoggingLevel {
    Silent,
    Verbose,
    Info,
    Debug,
}

impl LoggingLevel {
    pub const fn threshold(self) -> Priority {
        match self {
            LoggingLevel::Silent => Priority::Warning,
            LoggingLevel::Verbose => Priority::Notice,
            LoggingLevel::Info => Priority::Info,
            LoggingLevel::Debug => Priority::Debug,
        }
    }
}

impl FromStr for LoggingLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" => Ok(LoggingLevel::Silent),
            "verbose" => Ok(LoggingLevel::Verbose),
            "info" => Ok(LoggingLevel::Info),
            "debug" => Ok(LoggingLevel::Debug),
            _ => Err(LogError::InvalidLoggingLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits() {
        assert!(Priority::Warning.admits(Priority::Warning));
        assert!(Priority::Warning.admits(Priority::Error));
        assert!(!Priority::Warning.admits(Priority::Notice));
        assert!(Priority::Resources.admits(Priority::Emergency));
        assert!(!Priority::Emergency.admits(Priority::Alert));
    }

    #[test]
    fn high_boundary() {
        assert!(Priority::Emergency.is_high());
        assert!(Priority::Error.is_high());
        assert!(Priority::Warning.is_high());
        assert!(!Priority::Notice.is_high());
        assert!(!Priority::Debug.is_high());
    }

    #[test]
    fn parse_priority() {
        assert_eq!(Priority::from_str("warn").unwrap(), Priority::Warning);
        assert_eq!(Priority::from_str("ERROR").unwrap(), Priority::Error);
        assert_eq!(Priority::from_str("7").unwrap(), Priority::Debug);
        assert!(Priority::from_str("9").is_err());
        assert!(Priority::from_str("loud").is_err());
    }

    #[test]
    fn u8_conversion() {
        for v in 0..=8u8 {
            assert_eq!(Priority::from_u8(v).unwrap().as_u8(), v);
        }
        assert!(Priority::from_u8(9).is_none());
    }

    #[test]
    fn logging_level() {
        assert_eq!(LoggingLevel::Silent.threshold(), Priority::Warning);
        assert_eq!(LoggingLevel::Verbose.threshold(), Priority::Notice);
        assert_eq!(
            LoggingLevel::from_str("Debug").unwrap().threshold(),
            Priority::Debug
        );
        assert!(LoggingLevel::from_str("noisy").is_err());
    }
}
