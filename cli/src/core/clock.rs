//! # Clock Capability
//!
//! File: cli/src/core/clock.rs
//!
//! The session never reads the system time directly. It is handed a `Clock`
//! and a validated `TimeFormat`, which keeps timestamps deterministic in tests.
//!
use crate::core::error::{NeutronError, Result};
use anyhow::anyhow;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// Source of "current time" for message timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A strftime pattern that has been checked to contain no invalid specifiers.
///
/// chrono panics when formatting with a malformed pattern, so patterns coming
/// from configuration go through `TimeFormat::parse` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat(String);

/// Two-digit hour and minute.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

impl TimeFormat {
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(anyhow!(NeutronError::Config(
                "chat.time_format must not be empty".to_string()
            )));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(anyhow!(NeutronError::Config(format!(
                "chat.time_format '{}' is not a valid strftime pattern",
                pattern
            ))));
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self, time: &DateTime<Local>) -> String {
        time.format(&self.0).to_string()
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self(DEFAULT_TIME_FORMAT.to_string())
    }
}

/// Clock frozen at a single instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl FixedClock {
    /// Today's date at the given local wall-clock time.
    pub fn at(hour: u32, minute: u32) -> Self {
        use chrono::TimeZone;
        let date = Local::now().date_naive();
        let naive = date
            .and_hms_opt(hour, minute, 0)
            .expect("valid wall-clock time");
        let local = Local
            .from_local_datetime(&naive)
            .earliest()
            .expect("local time exists");
        Self(local)
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_hour_minute() {
        let clock = FixedClock::at(9, 5);
        assert_eq!(TimeFormat::default().format(&clock.now()), "09:05");
    }

    #[test]
    fn test_custom_format() {
        let fmt = TimeFormat::parse("%H:%M:%S").unwrap();
        assert_eq!(fmt.format(&FixedClock::at(14, 30).now()), "14:30:00");
        assert_eq!(fmt.as_str(), "%H:%M:%S");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = TimeFormat::parse("%Q").unwrap_err();
        assert!(err.to_string().contains("not a valid strftime pattern"));
        assert!(TimeFormat::parse("").is_err());
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
