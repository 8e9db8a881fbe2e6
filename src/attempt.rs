//! # Blocking attempt execution.
//!
//! [`Backoff::attempt`] drives a fallible operation through its retry
//! schedule. The operation reports each invocation's result as an
//! [`AttemptOutcome`]; the loop sleeps through the scheduled delay after
//! every retryable failure until the operation settles or the budget runs
//! out.
//!
//! ## Flow
//! ```text
//! loop {
//!   ├─► outcome = operation()
//!   ├─ Success    ─► return Success
//!   ├─ HardError  ─► return HardError (budget ignored)
//!   └─ Failure    ─► backoff.next_delay()
//!        ├─ None     ─► return Failure (budget spent)
//!        └─ Some(d)  ─► thread::sleep(d), continue
//! }
//! ```
//!
//! ## Rules
//! - The operation runs at least once, even with a zero retry budget.
//! - The wait blocks the calling thread; there is no cancellation point.
//! - A hard error returns immediately no matter how much budget remains.
//! - The controller can be consumed in place or kept by the caller and
//!   reused across runs after [`Backoff::reset`].

use std::thread;

use tracing::{debug, warn};

use crate::backoff::Backoff;
use crate::error::RetryError;
use crate::policies::DelayPolicy;

/// Result of one invocation of a retried operation, and of the whole run.
///
/// The operation returns one of these per invocation; [`Backoff::attempt`]
/// returns the terminal one. [`AttemptOutcome::Failure`] asks for a retry,
/// [`AttemptOutcome::HardError`] stops the loop on the spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The operation succeeded; nothing left to do.
    Success,
    /// The operation failed but may succeed if retried.
    Failure,
    /// The operation failed in a way retrying cannot fix.
    HardError,
}

impl AttemptOutcome {
    /// Returns `true` for [`AttemptOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Success)
    }

    /// Indicates whether the outcome is worth another invocation.
    ///
    /// Returns `true` only for [`AttemptOutcome::Failure`]; both success and
    /// hard errors settle the run.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AttemptOutcome::Failure)
    }

    /// Converts a terminal outcome into a `Result`.
    ///
    /// `Failure` maps to [`RetryError::Exhausted`] and `HardError` to
    /// [`RetryError::NonRetryable`], matching what each means once
    /// [`Backoff::attempt`] has returned it.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use reprise::{AttemptOutcome, Backoff, RetryError};
    ///
    /// let outcome = Backoff::constant(Duration::from_millis(1), 1)
    ///     .attempt(|| AttemptOutcome::HardError);
    /// assert_eq!(outcome.into_result(), Err(RetryError::NonRetryable));
    /// ```
    pub fn into_result(self) -> Result<(), RetryError> {
        match self {
            AttemptOutcome::Success => Ok(()),
            AttemptOutcome::Failure => Err(RetryError::Exhausted),
            AttemptOutcome::HardError => Err(RetryError::NonRetryable),
        }
    }
}

impl<P: DelayPolicy> Backoff<P> {
    /// Runs `operation` until it settles or the retry budget is spent.
    ///
    /// Invokes the operation at least once, regardless of budget. After each
    /// [`AttemptOutcome::Failure`] the next scheduled delay is slept through
    /// on the calling thread; [`AttemptOutcome::Success`] and
    /// [`AttemptOutcome::HardError`] return immediately.
    ///
    /// Works on an owned controller as well as a caller-retained one:
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use reprise::{AttemptOutcome, Backoff};
    ///
    /// // One-off controller, consumed in place.
    /// let outcome = Backoff::exponential(Duration::from_millis(1), 3)
    ///     .attempt(|| AttemptOutcome::Success);
    /// assert!(outcome.is_success());
    ///
    /// // Caller-retained controller, reusable after a reset.
    /// let mut backoff = Backoff::constant(Duration::from_millis(1), 2);
    /// let outcome = backoff.attempt(|| AttemptOutcome::Failure);
    /// assert!(!outcome.is_success());
    /// assert_eq!(backoff.retries_done(), 2);
    ///
    /// backoff.reset();
    /// let outcome = backoff.attempt(|| AttemptOutcome::Success);
    /// assert!(outcome.is_success());
    /// ```
    pub fn attempt<F>(&mut self, mut operation: F) -> AttemptOutcome
    where
        F: FnMut() -> AttemptOutcome,
    {
        loop {
            let outcome = operation();
            if outcome.is_success() {
                return outcome;
            }
            if !outcome.is_retryable() {
                debug!("operation failed with a non-retryable error, stopping");
                return outcome;
            }

            match self.next_delay() {
                None => {
                    warn!(
                        max_retries = self.max_retries(),
                        "retry budget exhausted, giving up"
                    );
                    return outcome;
                }
                Some(delay) => {
                    debug!(?delay, retry = self.retries_done(), "retry scheduled");
                    thread::sleep(delay);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_success_without_retry() {
        let mut calls = 0;
        let outcome = Backoff::constant(Duration::from_millis(4), 3).attempt(|| {
            calls += 1;
            AttemptOutcome::Success
        });

        assert!(outcome.is_success());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_success_after_retries() {
        let mut calls = 0;
        let outcome = Backoff::exponential(Duration::from_millis(1), 5).attempt(|| {
            calls += 1;
            if calls == 3 {
                AttemptOutcome::Success
            } else {
                AttemptOutcome::Failure
            }
        });

        assert!(outcome.is_success());
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_budget_exhaustion_returns_failure() {
        let mut calls = 0;
        let outcome = Backoff::decorrelated_jitter_capped(
            Duration::from_millis(1),
            3,
            Duration::from_millis(5),
        )
        .attempt(|| {
            calls += 1;
            AttemptOutcome::Failure
        });

        assert_eq!(outcome, AttemptOutcome::Failure);
        assert_eq!(calls, 4); // one invocation plus three retries
    }

    #[test]
    fn test_hard_error_stops_despite_budget() {
        let mut calls = 0;
        let outcome = Backoff::decorrelated_jitter_capped(
            Duration::from_millis(1),
            3,
            Duration::from_millis(10),
        )
        .attempt(|| {
            calls += 1;
            if calls == 1 {
                AttemptOutcome::Failure
            } else {
                AttemptOutcome::HardError
            }
        });

        assert_eq!(outcome, AttemptOutcome::HardError);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_zero_budget_runs_exactly_once() {
        let mut calls = 0;
        let outcome = Backoff::constant(Duration::from_millis(1), 0).attempt(|| {
            calls += 1;
            AttemptOutcome::Failure
        });

        assert_eq!(outcome, AttemptOutcome::Failure);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_reuse_after_reset() {
        let mut backoff = Backoff::constant(Duration::from_millis(1), 3);
        let outcome = backoff.attempt(|| AttemptOutcome::Failure);
        assert_eq!(outcome, AttemptOutcome::Failure);
        assert_eq!(backoff.next_delay(), None);

        backoff.reset();

        let mut calls = 0;
        let outcome = backoff.attempt(|| {
            calls += 1;
            AttemptOutcome::Failure
        });

        assert_eq!(calls, 4); // one invocation plus three retries
        assert_eq!(outcome, AttemptOutcome::Failure);
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(AttemptOutcome::Success.is_success());
        assert!(!AttemptOutcome::Failure.is_success());
        assert!(!AttemptOutcome::HardError.is_success());

        assert!(AttemptOutcome::Failure.is_retryable());
        assert!(!AttemptOutcome::Success.is_retryable());
        assert!(!AttemptOutcome::HardError.is_retryable());
    }

    #[test]
    fn test_outcome_into_result() {
        assert_eq!(AttemptOutcome::Success.into_result(), Ok(()));
        assert_eq!(
            AttemptOutcome::Failure.into_result(),
            Err(RetryError::Exhausted)
        );
        assert_eq!(
            AttemptOutcome::HardError.into_result(),
            Err(RetryError::NonRetryable)
        );
    }
}
