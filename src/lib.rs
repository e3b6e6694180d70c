//! # tintlog
//!
//! A small leveled console logger with an in-memory error cache:
//!
//! * **Readable output**: colored, bracket-tagged lines with date and time
//! * **Caller context**: `_c` variants, `debug!` and `alert!` show the calling
//!   function and line
//! * **Error cache**: Error-level entries are kept for batch reporting and can
//!   be drained into any [`BatchSender`]
//!
//! ## Main Components
//!
//! * `Logger`: configured instance owning an `ErrorCache`
//! * `formatter`: pure functions rendering plain and styled records
//! * `ErrorCache`: thread-safe, insertion-ordered store of error entries
//! * `direct`: instance-free functions and the process-wide default logger
//! * `Reporter`: background thread flushing the cache on an interval
//!
//! ## Quick Start
//!
//! ```
//! use tintlog::{BatchSender, Config, Logger, SendResult, error, info, warn_c};
//!
//! struct PrintSender;
//! impl BatchSender for PrintSender {
//!     fn send(&self, subject: &str, lines: &[String]) -> SendResult<()> {
//!         println!("{subject}: {} entries", lines.len());
//!         Ok(())
//!     }
//! }
//!
//! let logger = Logger::new(Config::default());
//!
//! info!(logger, "build", " ", "ok");
//! warn_c!(logger, "cache is ", 93, "% full");
//! error!(logger, "disk full");
//!
//! assert_eq!(logger.flush_cache(&PrintSender).unwrap(), 1);
//! assert!(logger.cache().is_empty());
//! ```

mod arg;
mod cache;
mod caller;
pub mod clock;
mod config;
pub mod direct;
pub mod formatter;
mod level;
mod logger;
mod macros;
mod reporter;
mod sender;

pub use arg::{LogArg, Operand};
pub use cache::{CacheKey, ErrorCache};
pub use caller::Caller;
pub use config::{Config, DEFAULT_REPORT_SUBJECT};
pub use level::Level;
pub use logger::{LineHandler, Logger, Stdout};
pub use reporter::Reporter;
pub use sender::{AlertSender, BatchSender, SendError, SendResult};
