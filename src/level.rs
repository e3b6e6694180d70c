use std::fmt;

/// Severity category of a log line.
///
/// The `*WithContext` variants render the calling function and line in the
/// header instead of the message, and move the message to a `↳` detail line.
/// `Debug` and `Alert` always render with context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Info,
    InfoWithContext,
    Warn,
    WarnWithContext,
    Debug,
    Alert,
}

impl Level {
    /// The fixed-width tag placed between the brackets of a log line.
    ///
    /// ```
    /// # use tintlog::Level;
    /// assert_eq!(Level::Info.tag(), " INFO ");
    /// assert_eq!(Level::Error.tag(), " ERROR");
    /// ```
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Error => " ERROR",
            Level::Info | Level::InfoWithContext => " INFO ",
            Level::Warn | Level::WarnWithContext => " WARN ",
            Level::Debug => " DBUG ",
            Level::Alert => " ALERT",
        }
    }

    /// Whether the header carries `(function:line)` instead of the message.
    pub const fn has_context(self) -> bool {
        matches!(
            self,
            Level::InfoWithContext | Level::WarnWithContext | Level::Debug | Level::Alert
        )
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_fixed_width() {
        let all = [
            Level::Error,
            Level::Info,
            Level::InfoWithContext,
            Level::Warn,
            Level::WarnWithContext,
            Level::Debug,
            Level::Alert,
        ];
        for level in all {
            assert_eq!(level.tag().len(), 6, "tag for {:?} should be 6 chars", level);
        }
    }

    #[test]
    fn test_context_levels() {
        assert!(!Level::Info.has_context());
        assert!(!Level::Warn.has_context());
        assert!(!Level::Error.has_context());
        assert!(Level::InfoWithContext.has_context());
        assert!(Level::WarnWithContext.has_context());
        assert!(Level::Debug.has_context());
        assert!(Level::Alert.has_context());
    }

    #[test]
    fn test_display_trims_padding() {
        assert_eq!(Level::Debug.to_string(), "DBUG");
        assert_eq!(Level::InfoWithContext.to_string(), "INFO");
    }
}
