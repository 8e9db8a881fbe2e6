//! # Delay policy contract.
//!
//! [`DelayPolicy`] maps a base delay and a zero-based attempt index to the
//! delay before the next retry. [`Backoff`](crate::Backoff) is generic over
//! this trait, so a policy type without the required shape is rejected at
//! compile time.
//!
//! Implementations in this crate:
//! - [`Constant`](crate::Constant): always the base delay
//! - [`Linear`](crate::Linear): base plus a fixed increment per retry
//! - [`Exponential`](crate::Exponential): base doubled per retry
//! - [`FullJitter`](crate::FullJitter): uniform draw under the exponential curve
//! - [`DecorrelatedJitter`](crate::DecorrelatedJitter): uniform draw tracking the previous delay
//!
//! ## Units
//! Delays are [`Duration`]s, but policy arithmetic works on whole
//! milliseconds. Sub-millisecond fractions of inputs are truncated and
//! out-of-range values saturate, so `apply` is total for any combination of
//! base, attempt index, and cap.

use std::time::Duration;

/// Computes the delay before the next retry.
///
/// `base` is the controller's base delay and `attempt_index` the zero-based
/// count of retries already performed. Deterministic policies must return
/// the same delay for the same inputs; jittered policies draw from internal
/// generator state but must stay within their documented bounds on every
/// call.
///
/// The method takes `&mut self` so stateful policies (jitter generators,
/// decorrelated history) can update themselves per call.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use reprise::{Backoff, DelayPolicy};
///
/// // Repeats each delay step twice before growing.
/// struct StepWise;
///
/// impl DelayPolicy for StepWise {
///     fn apply(&mut self, base: Duration, attempt_index: u32) -> Duration {
///         base * (1 + attempt_index / 2)
///     }
/// }
///
/// let mut backoff = Backoff::new(Duration::from_millis(100), 4, StepWise);
/// assert_eq!(backoff.next_delay(), Some(Duration::from_millis(100)));
/// assert_eq!(backoff.next_delay(), Some(Duration::from_millis(100)));
/// assert_eq!(backoff.next_delay(), Some(Duration::from_millis(200)));
/// ```
pub trait DelayPolicy {
    /// Returns the delay for the retry at `attempt_index` (0-based).
    fn apply(&mut self, base: Duration, attempt_index: u32) -> Duration;
}

/// Widest shift that keeps `1 << shift` within `u64`.
const MAX_SHIFT: u32 = 63;

/// Converts a delay to whole milliseconds, saturating at `u64::MAX`.
pub(crate) fn clamped_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// `min(base × 2^attempt_index, cap)` in milliseconds, saturating.
///
/// The growth curve shared by [`Exponential`](crate::Exponential) and
/// [`FullJitter`](crate::FullJitter).
pub(crate) fn exponential_bound(base_ms: u64, attempt_index: u32, cap_ms: u64) -> u64 {
    let factor = 1u64 << attempt_index.min(MAX_SHIFT);
    base_ms.saturating_mul(factor).min(cap_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_millis_truncates_sub_millisecond() {
        assert_eq!(clamped_millis(Duration::from_micros(1999)), 1);
        assert_eq!(clamped_millis(Duration::from_nanos(999_999)), 0);
    }

    #[test]
    fn test_clamped_millis_saturates() {
        assert_eq!(clamped_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_exponential_bound_doubles() {
        assert_eq!(exponential_bound(100, 0, u64::MAX), 100);
        assert_eq!(exponential_bound(100, 1, u64::MAX), 200);
        assert_eq!(exponential_bound(100, 5, u64::MAX), 3_200);
    }

    #[test]
    fn test_exponential_bound_respects_cap() {
        assert_eq!(exponential_bound(8_000, 2, 60_000), 32_000);
        assert_eq!(exponential_bound(8_000, 3, 60_000), 60_000);
        assert_eq!(exponential_bound(8_000, 4, 60_000), 60_000);
    }

    #[test]
    fn test_exponential_bound_huge_attempt_saturates() {
        assert_eq!(exponential_bound(100, u32::MAX, u64::MAX), u64::MAX);
        assert_eq!(exponential_bound(100, u32::MAX, 60_000), 60_000);
        assert_eq!(exponential_bound(0, u32::MAX, 60_000), 0);
    }
}
