use std::io::{self, Write};

use crate::arg::LogArg;
use crate::cache::ErrorCache;
use crate::caller::Caller;
use crate::clock::Stamp;
use crate::config::Config;
use crate::formatter::{concat, format_direct_error, format_record, format_styled};
use crate::level::Level;
use crate::sender::{AlertSender, BatchSender, SendResult};

/// Destination for rendered console lines.
///
/// The logger never writes to the terminal itself; it hands each finished
/// line to a handler. [`Stdout`] is what [`Logger::new`] uses, tests and
/// embedding applications can supply their own.
///
/// Handlers must not fail loudly: logging is fail-silent, so a handler that
/// cannot write should drop the line.
pub trait LineHandler: Send + Sync {
    fn handle_line(&self, line: &str);
}

/// Writes each line to standard output, ignoring write errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl LineHandler for Stdout {
    fn handle_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", line);
    }
}

impl<T: LineHandler + ?Sized> LineHandler for std::sync::Arc<T> {
    fn handle_line(&self, line: &str) {
        (**self).handle_line(line)
    }
}

/// A configured logger with its own error cache.
///
/// Every entry point is an independent pipeline: stamp the call, join the
/// arguments, format, emit. The only state shared between calls is the
/// [`ErrorCache`], which collects Error-level entries for batch reporting.
///
/// # Thread Safety
///
/// `Logger` is `Send + Sync` and meant to be shared (for example behind an
/// `Arc`). Lines from concurrent calls may interleave on the console.
///
/// # Examples
///
/// ```
/// # use tintlog::{Config, Logger, info, error};
/// let logger = Logger::new(Config::default());
///
/// info!(logger, "build", " ", "ok");
/// error!(logger, "disk full");
///
/// assert_eq!(logger.cache().len(), 1);
/// ```
pub struct Logger {
    cache: ErrorCache,
    config: Config,
    output: Box<dyn LineHandler>,
}

impl Logger {
    /// Creates a logger printing to standard output.
    pub fn new(config: Config) -> Self {
        Self::with_output(config, Stdout)
    }

    /// Creates a logger that hands its console lines to `output`.
    pub fn with_output(config: Config, output: impl LineHandler + 'static) -> Self {
        Self {
            cache: ErrorCache::new(),
            config,
            output: Box::new(output),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the logger was built in debug mode. No level is gated on it.
    pub fn is_debug_mode(&self) -> bool {
        self.config.debug_mode
    }

    pub fn cache(&self) -> &ErrorCache {
        &self.cache
    }

    /// Records an error.
    ///
    /// The unstyled `[ ERROR] date time (function:line)` record, with the
    /// message on a `↳` line, goes into the error cache. The raw message is
    /// forwarded to the instance-free Error printer through this logger's
    /// output, stamped with the same instant as the cached record.
    pub fn error(&self, caller: &Caller, args: &[&dyn LogArg]) {
        let stamp = Stamp::now();
        let message = concat(args);
        let content = format_record(Level::Error, &message, stamp.date(), stamp.time(), caller);
        self.cache.add(stamp.at(), content);
        emit_error(&*self.output, &message, &stamp);
    }

    pub fn info(&self, args: &[&dyn LogArg]) {
        emit(&*self.output, Level::Info, &Caller::unknown(), args);
    }

    pub fn info_c(&self, caller: &Caller, args: &[&dyn LogArg]) {
        emit(&*self.output, Level::InfoWithContext, caller, args);
    }

    pub fn warn(&self, args: &[&dyn LogArg]) {
        emit(&*self.output, Level::Warn, &Caller::unknown(), args);
    }

    pub fn warn_c(&self, caller: &Caller, args: &[&dyn LogArg]) {
        emit(&*self.output, Level::WarnWithContext, caller, args);
    }

    pub fn debug(&self, caller: &Caller, args: &[&dyn LogArg]) {
        emit(&*self.output, Level::Debug, caller, args);
    }

    /// Prints an alert and delivers it through `sender` before returning.
    ///
    /// The console gets the styled lines; the sender gets the unstyled,
    /// fully contextualized record. A failed delivery is returned to the
    /// caller and is not cached.
    pub fn alert(
        &self,
        caller: &Caller,
        args: &[&dyn LogArg],
        sender: &dyn AlertSender,
    ) -> SendResult<()> {
        let stamp = Stamp::now();
        let message = concat(args);
        let lines = format_styled(
            Level::Alert,
            &message,
            stamp.date(),
            stamp.time(),
            caller,
            !args.is_empty(),
        );
        for line in &lines {
            self.output.handle_line(line);
        }

        let record = format_record(Level::Alert, &message, stamp.date(), stamp.time(), caller);
        sender.send(&record).map_err(|e| {
            tracing::warn!(error = %e, "alert delivery failed");
            e
        })
    }

    /// Hands every cached error to `sender` as one batch.
    ///
    /// Does nothing when the cache is empty. On success the entries are gone
    /// from the cache; on failure they are put back in their original order
    /// and the error is returned.
    ///
    /// # Returns
    ///
    /// The number of entries delivered.
    pub fn flush_cache(&self, sender: &dyn BatchSender) -> SendResult<usize> {
        let entries = self.cache.drain_entries();
        if entries.is_empty() {
            return Ok(0);
        }

        let lines: Vec<String> = entries.values().cloned().collect();
        match sender.send(&self.config.report_subject, &lines) {
            Ok(()) => {
                tracing::debug!(count = lines.len(), "flushed error cache");
                Ok(lines.len())
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    count = lines.len(),
                    "batch delivery failed, entries restored"
                );
                self.cache.restore(entries);
                Err(e)
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Formats a styled record and writes its lines to `out`.
pub(crate) fn emit(out: &dyn LineHandler, level: Level, caller: &Caller, args: &[&dyn LogArg]) {
    let stamp = Stamp::now();
    let message = concat(args);
    let lines = format_styled(
        level,
        &message,
        stamp.date(),
        stamp.time(),
        caller,
        !args.is_empty(),
    );
    for line in &lines {
        out.handle_line(line);
    }
}

/// The instance-free Error printer.
pub(crate) fn emit_error(out: &dyn LineHandler, message: &str, stamp: &Stamp) {
    out.handle_line(&format_direct_error(message, stamp.date(), stamp.time()));
}
