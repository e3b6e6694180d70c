use thiserror::Error;

/// Failure reported by a delivery collaborator.
#[derive(Debug, Error)]
pub enum SendError {
    /// The remote end received the batch and refused it.
    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// The channel could not be reached at all.
    #[error("delivery channel unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type SendResult<T> = Result<T, SendError>;

/// Delivers a batch of cached Error entries to an outside channel.
///
/// Implementations decide what "outside" means (mail, webhook, a file). The
/// logger only guarantees that `lines` is non-empty and oldest-first, and
/// that the entries are put back in the cache if `send` fails.
///
/// # Usage
///
/// ```
/// # use tintlog::{BatchSender, SendResult};
/// struct StderrSender;
///
/// impl BatchSender for StderrSender {
///     fn send(&self, subject: &str, lines: &[String]) -> SendResult<()> {
///         eprintln!("== {subject} ==");
///         for line in lines {
///             eprintln!("{line}");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait BatchSender: Send + Sync {
    fn send(&self, subject: &str, lines: &[String]) -> SendResult<()>;
}

/// Delivers one fully contextualized message immediately.
///
/// Called synchronously from [`Logger::alert`](crate::Logger::alert); the
/// caller waits for the result.
pub trait AlertSender: Send + Sync {
    fn send(&self, message: &str) -> SendResult<()>;
}

impl<T: BatchSender + ?Sized> BatchSender for std::sync::Arc<T> {
    fn send(&self, subject: &str, lines: &[String]) -> SendResult<()> {
        (**self).send(subject, lines)
    }
}

impl<T: AlertSender + ?Sized> AlertSender for std::sync::Arc<T> {
    fn send(&self, message: &str) -> SendResult<()> {
        (**self).send(message)
    }
}
