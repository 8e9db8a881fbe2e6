//! Error types for retry execution.
//!
//! [`RetryError`] is the error-typed view of a terminal
//! [`AttemptOutcome`](crate::AttemptOutcome): it says **why** an attempt run
//! stopped without success. Produced by
//! [`AttemptOutcome::into_result`](crate::AttemptOutcome::into_result) for
//! callers that want to propagate the outcome with `?` instead of matching
//! on the enum.

use thiserror::Error;

/// # Why an attempt run ended without success.
///
/// One variant per non-success terminal state of
/// [`Backoff::attempt`](crate::Backoff::attempt).
#[non_exhaustive]
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryError {
    /// Every retry in the budget was spent and the operation still failed.
    #[error("retry budget exhausted")]
    Exhausted,

    /// The operation reported a failure that retrying cannot fix.
    #[error("operation failed with a non-retryable error")]
    NonRetryable,
}

impl RetryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use reprise::RetryError;
    ///
    /// assert_eq!(RetryError::Exhausted.as_label(), "retry_exhausted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RetryError::Exhausted => "retry_exhausted",
            RetryError::NonRetryable => "retry_non_retryable",
        }
    }
}
