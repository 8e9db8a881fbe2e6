//! # Retry budget and delay scheduling.
//!
//! [`Backoff`] pairs a [`DelayPolicy`] with a base delay and a retry budget.
//! Each [`Backoff::next_delay`] call either yields the delay before the next
//! retry or signals that the budget is spent; [`Backoff::reset`] re-arms the
//! budget so the controller can be reused.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use reprise::Backoff;
//!
//! let mut backoff = Backoff::linear(
//!     Duration::from_secs(10),
//!     3,
//!     Duration::from_secs(5),
//! );
//!
//! assert_eq!(backoff.next_delay(), Some(Duration::from_secs(10)));
//! assert_eq!(backoff.next_delay(), Some(Duration::from_secs(15)));
//! assert_eq!(backoff.next_delay(), Some(Duration::from_secs(20)));
//! assert_eq!(backoff.next_delay(), None); // budget spent
//!
//! backoff.reset();
//! assert_eq!(backoff.next_delay(), Some(Duration::from_secs(10)));
//! ```

use std::time::Duration;

use crate::policies::{
    Constant, DecorrelatedJitter, DelayPolicy, Exponential, FullJitter, Linear,
};

/// Schedules retry delays against a bounded retry budget.
///
/// Generic over the [`DelayPolicy`] that computes each delay, so an
/// unsuitable policy type is rejected at compile time. The policy rides
/// along as a regular field; jittered policies keep their generator state
/// for the controller's lifetime.
///
/// ### Notes
/// - Constructors for the built-in policies come in pairs, with and without
///   a delay cap: [`Backoff::constant`], [`Backoff::linear`],
///   [`Backoff::linear_capped`], [`Backoff::exponential`],
///   [`Backoff::exponential_capped`], [`Backoff::full_jitter`],
///   [`Backoff::full_jitter_capped`], [`Backoff::decorrelated_jitter`],
///   [`Backoff::decorrelated_jitter_capped`].
/// - [`Backoff::new`] wires in any custom [`DelayPolicy`].
#[derive(Clone, Debug)]
pub struct Backoff<P> {
    policy: P,
    base_delay: Duration,
    max_retries: u32,
    retries_done: u32,
}

impl<P: DelayPolicy> Backoff<P> {
    /// Creates a controller from a base delay, a retry budget, and a policy.
    pub fn new(base_delay: Duration, max_retries: u32, policy: P) -> Self {
        Self {
            policy,
            base_delay,
            max_retries,
            retries_done: 0,
        }
    }

    /// Returns the delay before the next retry, or `None` once the budget
    /// is spent.
    ///
    /// Each `Some` consumes one retry from the budget. The policy sees the
    /// number of retries performed so far as the attempt index, so the first
    /// delay is always computed for attempt 0.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.retries_done == self.max_retries {
            return None;
        }

        let delay = self.policy.apply(self.base_delay, self.retries_done);
        self.retries_done += 1;
        Some(delay)
    }

    /// Re-arms the retry budget.
    ///
    /// Only the retry counter goes back to zero. Policy state is untouched:
    /// a [`DecorrelatedJitter`] keeps its remembered last delay, so a reused
    /// controller continues the random walk rather than restarting it.
    pub fn reset(&mut self) {
        self.retries_done = 0;
    }

    /// Base delay fed to the policy on every call.
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Total number of retries the budget allows.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Number of retries performed since construction or the last reset.
    pub fn retries_done(&self) -> u32 {
        self.retries_done
    }
}

impl Backoff<Constant> {
    /// Controller that waits `base_delay` before every retry.
    pub fn constant(base_delay: Duration, max_retries: u32) -> Self {
        Self::new(base_delay, max_retries, Constant)
    }
}

impl Backoff<Linear> {
    /// Controller whose delay grows by `increment` per retry, unbounded.
    pub fn linear(base_delay: Duration, max_retries: u32, increment: Duration) -> Self {
        Self::new(base_delay, max_retries, Linear::new(increment))
    }

    /// Controller whose delay grows by `increment` per retry, up to `cap`.
    pub fn linear_capped(
        base_delay: Duration,
        max_retries: u32,
        increment: Duration,
        cap: Duration,
    ) -> Self {
        Self::new(base_delay, max_retries, Linear::capped(increment, cap))
    }
}

impl Backoff<Exponential> {
    /// Controller whose delay doubles per retry, unbounded.
    pub fn exponential(base_delay: Duration, max_retries: u32) -> Self {
        Self::new(base_delay, max_retries, Exponential::new())
    }

    /// Controller whose delay doubles per retry, up to `cap`.
    pub fn exponential_capped(base_delay: Duration, max_retries: u32, cap: Duration) -> Self {
        Self::new(base_delay, max_retries, Exponential::capped(cap))
    }
}

impl Backoff<FullJitter> {
    /// Controller drawing each delay from `[0, base × 2^n]`.
    pub fn full_jitter(base_delay: Duration, max_retries: u32) -> Self {
        Self::new(base_delay, max_retries, FullJitter::new())
    }

    /// Controller drawing each delay from `[0, min(base × 2^n, cap)]`.
    pub fn full_jitter_capped(base_delay: Duration, max_retries: u32, cap: Duration) -> Self {
        Self::new(base_delay, max_retries, FullJitter::capped(cap))
    }
}

impl Backoff<DecorrelatedJitter> {
    /// Controller drawing each delay from `[base, last × 3]`.
    pub fn decorrelated_jitter(base_delay: Duration, max_retries: u32) -> Self {
        Self::new(base_delay, max_retries, DecorrelatedJitter::new())
    }

    /// Controller drawing each delay from `[base, last × 3]`, clamped to `cap`.
    pub fn decorrelated_jitter_capped(
        base_delay: Duration,
        max_retries: u32,
        cap: Duration,
    ) -> Self {
        Self::new(base_delay, max_retries, DecorrelatedJitter::capped(cap))
    }
}
