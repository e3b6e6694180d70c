use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::logger::Logger;
use crate::sender::BatchSender;

/// Background thread that periodically flushes a logger's error cache.
///
/// Every `interval` the reporter calls [`Logger::flush_cache`]. A failed
/// delivery leaves the entries in the cache for the next tick. Stopping the
/// reporter (explicitly or by dropping it) performs one last flush so
/// nothing recorded before shutdown is left behind.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use std::time::Duration;
/// # use tintlog::{BatchSender, Config, Logger, Reporter, SendResult};
/// struct Discard;
/// impl BatchSender for Discard {
///     fn send(&self, _subject: &str, _lines: &[String]) -> SendResult<()> {
///         Ok(())
///     }
/// }
///
/// let logger = Arc::new(Logger::new(Config::default()));
/// let reporter = Reporter::spawn(logger, Arc::new(Discard), Duration::from_secs(60)).unwrap();
/// reporter.stop();
/// ```
pub struct Reporter {
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Reporter {
    /// Starts a reporter flushing every `interval`.
    ///
    /// A zero `interval` is rejected with [`io::ErrorKind::InvalidInput`].
    pub fn spawn(
        logger: Arc<Logger>,
        sender: Arc<dyn BatchSender>,
        interval: Duration,
    ) -> io::Result<Self> {
        if interval.is_zero() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "report interval must be greater than zero",
            ));
        }
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("tintlog-reporter".to_string())
            .spawn(move || {
                tracing::debug!(?interval, "reporter started");
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            // failures are logged by flush_cache and retried next tick
                            let _ = logger.flush_cache(&*sender);
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                let _ = logger.flush_cache(&*sender);
                tracing::debug!("reporter stopped");
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Starts a reporter using the logger's configured interval.
    ///
    /// Returns `Ok(None)` when the configuration has no report interval.
    pub fn from_config(logger: Arc<Logger>, sender: Arc<dyn BatchSender>) -> io::Result<Option<Self>> {
        match logger.config().report_interval {
            Some(interval) => Self::spawn(logger, sender, interval).map(Some),
            None => Ok(None),
        }
    }

    /// Stops the thread after a final flush and waits for it to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("reporter thread panicked");
            }
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
