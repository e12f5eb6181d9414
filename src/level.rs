//! # Severity Levels
//!
//! Eight ordered severities shared with syslog(3). A lower numeric value is
//! more severe: `Emerg` is 0 and `Debug` is 7. A message is emitted by a
//! namespace when `message_level <= namespace_threshold`, so the derived
//! `Ord` on [`Level`] can be used directly for filtering.

use std::fmt;
use std::str::FromStr;

/// Severity of a log message, or threshold of a namespace
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// System is unusable
    Emerg = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Crit = 2,
    /// Error conditions
    Err = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal, but significant, condition
    Notice = 5,
    /// Informational message
    Info = 6,
    /// Debug-level message
    Debug = 7,
}

impl Level {
    /// All levels from most to least severe
    pub const ALL: [Level; 8] = [
        Level::Emerg,
        Level::Alert,
        Level::Crit,
        Level::Err,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// Numeric value, identical to the syslog priority
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a raw value, clamping anything outside 0..=7.
    ///
    /// Negative values become `Emerg` and values above 7 become `Debug`.
    pub fn from_i64_clamped(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Level::Emerg,
            1 => Level::Alert,
            2 => Level::Crit,
            3 => Level::Err,
            4 => Level::Warning,
            5 => Level::Notice,
            6 => Level::Info,
            _ => Level::Debug,
        }
    }

    /// Exact conversion from the numeric representation
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Canonical lowercase name of the level
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Emerg => "emerg",
            Level::Alert => "alert",
            Level::Crit => "crit",
            Level::Err => "err",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Whether a message at `self` passes a namespace threshold
    #[inline]
    pub fn passes(self, threshold: Level) -> bool {
        self <= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid logging level '{}' (expected 0-7 or emerg, alert, crit, err, warning, notice, info, debug)",
            self.0
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, ParseLevelError> {
        let trimmed = s.trim();

        if let Ok(n) = trimmed.parse::<u8>() {
            return Level::from_u8(n).ok_or_else(|| ParseLevelError(s.to_string()));
        }

        let level = match trimmed.to_ascii_lowercase().as_str() {
            "emerg" | "emergency" => Level::Emerg,
            "alert" => Level::Alert,
            "crit" | "critical" => Level::Crit,
            "err" | "error" => Level::Err,
            "warning" | "warn" => Level::Warning,
            "notice" => Level::Notice,
            "info" => Level::Info,
            "debug" => Level::Debug,
            _ => return Err(ParseLevelError(s.to_string())),
        };

        Ok(level)
    }
}

/// Parse a level the way C `atoi` reads an integer prefix.
///
/// Leading whitespace and one sign character are accepted, parsing stops at
/// the first non-digit, and input without any digits yields 0. The result is
/// clamped into the valid range.
pub fn parse_level_prefix(input: &str) -> Level {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        value = -value;
    }

    Level::from_i64_clamped(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Emerg < Level::Debug);
        assert!(Level::Err.passes(Level::Warning));
        assert!(Level::Warning.passes(Level::Warning));
        assert!(!Level::Notice.passes(Level::Warning));
    }

    #[test]
    fn test_level_numbers_match_syslog() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.as_u8() as usize, i);
            assert_eq!(Level::from_u8(i as u8), Some(*level));
        }
        assert_eq!(Level::from_u8(8), None);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("Error".parse::<Level>().unwrap(), Level::Err);
        assert_eq!("3".parse::<Level>().unwrap(), Level::Err);
        assert!("8".parse::<Level>().is_err());
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_parse_level_prefix_behaves_like_atoi() {
        assert_eq!(parse_level_prefix("3,file:///tmp/x"), Level::Err);
        assert_eq!(parse_level_prefix("  6"), Level::Info);
        assert_eq!(parse_level_prefix("+5"), Level::Notice);
        assert_eq!(parse_level_prefix("2.9"), Level::Crit);
        assert_eq!(parse_level_prefix("abc"), Level::Emerg);
        assert_eq!(parse_level_prefix(""), Level::Emerg);
        assert_eq!(parse_level_prefix("-4"), Level::Emerg);
        assert_eq!(parse_level_prefix("42"), Level::Debug);
        assert_eq!(parse_level_prefix("99999999999999999999999"), Level::Debug);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Emerg.as_str(), "emerg");
    }
}
