use std::io;
use std::sync::Arc;

use tintlog::{
    alert, debug, error, info, info_c, warn, warn_c, AlertSender, BatchSender, Config, Logger,
    Reporter, SendResult,
};
use tracing_subscriber::EnvFilter;

/// Prints delivered batches to stderr in place of a real transport.
struct StderrSender;

impl BatchSender for StderrSender {
    fn send(&self, subject: &str, lines: &[String]) -> SendResult<()> {
        eprintln!("--- {} ({} entries) ---", subject, lines.len());
        for line in lines {
            eprintln!("{}", line);
        }
        Ok(())
    }
}

impl AlertSender for StderrSender {
    fn send(&self, message: &str) -> SendResult<()> {
        eprintln!("--- alert ---\n{}", message);
        Ok(())
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let logger = Arc::new(Logger::new(Config::from_env()));
    let sender = Arc::new(StderrSender);
    let reporter = Reporter::from_config(logger.clone(), sender.clone())?;

    info!(logger, "build", " ", "ok");
    info_c!(logger);
    info_c!(logger, "loaded ", 3, " plugins");
    warn!(logger, "cache at ", 93, "%");
    warn_c!(logger, "slow response: ", 1.25, "s");
    debug!(logger, "debug mode: ", logger.is_debug_mode());
    error!(logger, "disk full");
    if let Err(e) = alert!(logger, StderrSender, "primary database unreachable") {
        eprintln!("alert failed: {}", e);
    }

    match reporter {
        Some(reporter) => reporter.stop(),
        None => {
            if let Err(e) = logger.flush_cache(&*sender) {
                eprintln!("report failed: {}", e);
            }
        }
    }
    Ok(())
}
