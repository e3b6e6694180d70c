use std::env;
use std::time::Duration;

/// Subject used for batch reports when none is configured.
pub const DEFAULT_REPORT_SUBJECT: &str = "tintlog error report";

/// Settings owned by a single [`Logger`](crate::Logger).
///
/// Built once at construction time and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Carried for verbosity gating; no level is filtered on it today.
    pub debug_mode: bool,
    /// How often a [`Reporter`](crate::Reporter) flushes the error cache.
    /// `None` disables periodic reporting.
    pub report_interval: Option<Duration>,
    pub report_subject: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_mode: false,
            report_interval: None,
            report_subject: DEFAULT_REPORT_SUBJECT.to_string(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment.
    ///
    /// * `TINTLOG_DEBUG` - `1` or `true` enables debug mode
    /// * `TINTLOG_REPORT_INTERVAL_SECS` - positive whole seconds
    /// * `TINTLOG_REPORT_SUBJECT` - subject line for batch reports
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let debug_mode = lookup("TINTLOG_DEBUG")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(defaults.debug_mode);
        let report_interval = lookup("TINTLOG_REPORT_INTERVAL_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let report_subject = lookup("TINTLOG_REPORT_SUBJECT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.report_subject);

        Self {
            debug_mode,
            report_interval,
            report_subject,
        }
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = Some(interval);
        self
    }

    pub fn with_report_subject(mut self, subject: impl Into<String>) -> Self {
        self.report_subject = subject.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("TINTLOG_DEBUG", "true"),
            ("TINTLOG_REPORT_INTERVAL_SECS", "30"),
            ("TINTLOG_REPORT_SUBJECT", "nightly errors"),
        ]));
        assert!(cfg.debug_mode);
        assert_eq!(cfg.report_interval, Some(Duration::from_secs(30)));
        assert_eq!(cfg.report_subject, "nightly errors");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("TINTLOG_DEBUG", "maybe"),
            ("TINTLOG_REPORT_INTERVAL_SECS", "0"),
            ("TINTLOG_REPORT_SUBJECT", "  "),
        ]));
        assert!(!cfg.debug_mode);
        assert_eq!(cfg.report_interval, None);
        assert_eq!(cfg.report_subject, DEFAULT_REPORT_SUBJECT);
    }

    #[test]
    fn test_builder_setters() {
        let cfg = Config::default()
            .with_debug_mode(true)
            .with_report_interval(Duration::from_millis(250))
            .with_report_subject("ops");
        assert!(cfg.debug_mode);
        assert_eq!(cfg.report_interval, Some(Duration::from_millis(250)));
        assert_eq!(cfg.report_subject, "ops");
    }
}
