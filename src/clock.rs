use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Date format used in every log line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time-of-day format used in every log line.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Wall-clock stamp of a log call, pre-rendered as display strings.
///
/// The instant is kept alongside the strings so the error cache can key
/// entries by when they were produced.
///
/// # Examples
///
/// ```
/// # use tintlog::clock::Stamp;
/// let stamp = Stamp::now();
/// assert_eq!(stamp.date().len(), 10);
/// assert_eq!(stamp.time().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    at: SystemTime,
    date: String,
    time: String,
}

impl Stamp {
    pub fn now() -> Self {
        Self::from_local(Local::now())
    }

    pub fn from_local(at: DateTime<Local>) -> Self {
        Self {
            at: at.into(),
            date: at.format(DATE_FORMAT).to_string(),
            time: at.format(TIME_FORMAT).to_string(),
        }
    }

    pub fn at(&self) -> SystemTime {
        self.at
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_instant_rendering() {
        let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let stamp = Stamp::from_local(at);
        assert_eq!(stamp.date(), "2024-01-02");
        assert_eq!(stamp.time(), "03:04:05");
        assert_eq!(stamp.at(), SystemTime::from(at));
    }

    #[test]
    fn test_now_is_monotonic_enough() {
        let first = Stamp::now();
        let second = Stamp::now();
        assert!(second.at() >= first.at());
    }
}
