use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tintlog::{error, BatchSender, Config, LineHandler, Logger, Reporter, SendError, SendResult};

struct NullHandler;

impl LineHandler for NullHandler {
    fn handle_line(&self, _line: &str) {
        // keep test output quiet
    }
}

#[derive(Default)]
struct CountingSender {
    batches: AtomicUsize,
    lines: Mutex<Vec<String>>,
}

impl BatchSender for CountingSender {
    fn send(&self, _subject: &str, lines: &[String]) -> SendResult<()> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.lines.lock().unwrap().extend_from_slice(lines);
        Ok(())
    }
}

/// Fails the first `failures` sends, then succeeds.
struct FlakySender {
    failures: AtomicUsize,
    delivered: AtomicUsize,
}

impl BatchSender for FlakySender {
    fn send(&self, _subject: &str, lines: &[String]) -> SendResult<()> {
        if self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(SendError::Unavailable("flaky".to_string()));
        }
        self.delivered.fetch_add(lines.len(), Ordering::SeqCst);
        Ok(())
    }
}

fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    cond()
}

#[test]
fn test_periodic_flush() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let logger = Arc::new(Logger::with_output(Config::default(), NullHandler));
    let sender = Arc::new(CountingSender::default());
    let reporter = Reporter::spawn(logger.clone(), sender.clone(), Duration::from_millis(10)).unwrap();

    error!(logger, "first");
    error!(logger, "second");
    assert!(
        wait_until(Duration::from_secs(5), || logger.cache().is_empty()),
        "Reporter should drain the cache"
    );

    reporter.stop();
    assert_eq!(sender.lines.lock().unwrap().len(), 2);
}

#[test]
fn test_stop_performs_final_flush() {
    let logger = Arc::new(Logger::with_output(Config::default(), NullHandler));
    let sender = Arc::new(CountingSender::default());
    let reporter = Reporter::spawn(logger.clone(), sender.clone(), Duration::from_secs(3600)).unwrap();

    error!(logger, "pending at shutdown");
    reporter.stop();

    assert!(logger.cache().is_empty());
    assert_eq!(sender.batches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_drop_stops_reporter() {
    let logger = Arc::new(Logger::with_output(Config::default(), NullHandler));
    let sender = Arc::new(CountingSender::default());
    {
        let _reporter =
            Reporter::spawn(logger.clone(), sender.clone(), Duration::from_secs(3600)).unwrap();
        error!(logger, "dropped");
    }
    assert!(logger.cache().is_empty());
    assert_eq!(Arc::strong_count(&logger), 1, "Reporter thread should have released the logger");
}

#[test]
fn test_failed_send_retried_next_tick() {
    let logger = Arc::new(Logger::with_output(Config::default(), NullHandler));
    let sender = Arc::new(FlakySender {
        failures: AtomicUsize::new(2),
        delivered: AtomicUsize::new(0),
    });
    let reporter = Reporter::spawn(logger.clone(), sender.clone(), Duration::from_millis(10)).unwrap();

    error!(logger, "eventually delivered");
    assert!(wait_until(Duration::from_secs(5), || {
        sender.delivered.load(Ordering::SeqCst) == 1
    }));
    reporter.stop();
    assert!(logger.cache().is_empty());
}

#[test]
fn test_zero_interval_is_rejected() {
    let logger = Arc::new(Logger::with_output(Config::default(), NullHandler));
    let sender = Arc::new(CountingSender::default());

    let result = Reporter::spawn(logger.clone(), sender.clone(), Duration::ZERO);
    assert_eq!(result.err().map(|e| e.kind()), Some(io::ErrorKind::InvalidInput));

    let config = Config::default().with_report_interval(Duration::ZERO);
    let logger = Arc::new(Logger::with_output(config, NullHandler));
    let result = Reporter::from_config(logger, sender);
    assert_eq!(result.err().map(|e| e.kind()), Some(io::ErrorKind::InvalidInput));
}

#[test]
fn test_from_config_without_interval() {
    let logger = Arc::new(Logger::with_output(Config::default(), NullHandler));
    let sender = Arc::new(CountingSender::default());
    let reporter = Reporter::from_config(logger, sender).unwrap();
    assert!(reporter.is_none());
}

#[test]
fn test_from_config_with_interval() {
    let config = Config::default().with_report_interval(Duration::from_millis(10));
    let logger = Arc::new(Logger::with_output(config, NullHandler));
    let sender = Arc::new(CountingSender::default());
    let reporter = Reporter::from_config(logger.clone(), sender.clone())
        .unwrap()
        .expect("interval is configured");

    error!(logger, "configured");
    assert!(wait_until(Duration::from_secs(5), || logger.cache().is_empty()));
    reporter.stop();
}
