//! # Deterministic delay policies.
//!
//! The non-random members of the policy family. Each computes the retry
//! delay from the base delay and the attempt index alone:
//!
//! - [`Constant`]: every retry waits the base delay
//! - [`Linear`]: the delay grows by a fixed increment per retry
//! - [`Exponential`]: the delay doubles per retry
//!
//! [`Linear`] and [`Exponential`] take an optional cap; without one, growth
//! is bounded only by the saturation limit of the millisecond arithmetic.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use reprise::{DelayPolicy, Linear};
//!
//! let mut policy = Linear::capped(Duration::from_secs(15), Duration::from_secs(50));
//! let base = Duration::from_secs(10);
//!
//! assert_eq!(policy.apply(base, 0), Duration::from_secs(10));
//! assert_eq!(policy.apply(base, 1), Duration::from_secs(25));
//! assert_eq!(policy.apply(base, 2), Duration::from_secs(40));
//! assert_eq!(policy.apply(base, 3), Duration::from_secs(50)); // capped
//! ```

use std::time::Duration;

use crate::policies::policy::{clamped_millis, exponential_bound, DelayPolicy};

/// Delay policy that always returns the base delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Constant;

impl DelayPolicy for Constant {
    fn apply(&mut self, base: Duration, _attempt_index: u32) -> Duration {
        base
    }
}

/// Delay policy that grows by a fixed increment per retry.
///
/// The delay for attempt `n` is `min(base + n × increment, cap)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Linear {
    increment: Duration,
    cap: Duration,
}

impl Linear {
    /// Creates an uncapped linear policy with the given increment.
    pub fn new(increment: Duration) -> Self {
        Self::capped(increment, Duration::MAX)
    }

    /// Creates a linear policy whose delay never exceeds `cap`.
    pub fn capped(increment: Duration, cap: Duration) -> Self {
        Self { increment, cap }
    }
}

impl DelayPolicy for Linear {
    fn apply(&mut self, base: Duration, attempt_index: u32) -> Duration {
        let step = clamped_millis(self.increment).saturating_mul(u64::from(attempt_index));
        let delay = clamped_millis(base).saturating_add(step);
        Duration::from_millis(delay.min(clamped_millis(self.cap)))
    }
}

/// Delay policy that doubles per retry.
///
/// The delay for attempt `n` is `min(base × 2^n, cap)`. The growth factor is
/// fixed at 2; the exponent is clamped before it can overflow, so very large
/// attempt indexes saturate instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exponential {
    cap: Duration,
}

impl Exponential {
    /// Creates an uncapped exponential policy.
    pub fn new() -> Self {
        Self::capped(Duration::MAX)
    }

    /// Creates an exponential policy whose delay never exceeds `cap`.
    pub fn capped(cap: Duration) -> Self {
        Self { cap }
    }
}

impl Default for Exponential {
    /// Returns an uncapped exponential policy.
    fn default() -> Self {
        Self::new()
    }
}

impl DelayPolicy for Exponential {
    fn apply(&mut self, base: Duration, attempt_index: u32) -> Duration {
        let bound = exponential_bound(
            clamped_millis(base),
            attempt_index,
            clamped_millis(self.cap),
        );
        Duration::from_millis(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_returns_base_for_every_attempt() {
        let mut policy = Constant;
        let base = Duration::from_secs(1);
        for attempt in 0..10 {
            assert_eq!(policy.apply(base, attempt), base);
        }
    }

    #[test]
    fn test_attempt_zero_returns_base() {
        let base = Duration::from_millis(100);
        assert_eq!(Constant.apply(base, 0), base);
        assert_eq!(Linear::new(Duration::from_secs(1)).apply(base, 0), base);
        assert_eq!(Exponential::new().apply(base, 0), base);
    }

    #[test]
    fn test_linear_delay_sequence() {
        let mut policy = Linear::new(Duration::from_secs(5));
        let base = Duration::from_secs(10);

        let delays: Vec<_> = (0..5).map(|i| policy.apply(base, i)).collect();
        let expected: Vec<_> = [10, 15, 20, 25, 30]
            .iter()
            .map(|s| Duration::from_secs(*s))
            .collect();
        assert_eq!(delays, expected);
    }

    #[test]
    fn test_linear_saturates_at_cap() {
        let mut policy = Linear::capped(Duration::from_secs(15), Duration::from_secs(50));
        let base = Duration::from_secs(10);

        let delays: Vec<_> = (0..7).map(|i| policy.apply(base, i)).collect();
        let expected: Vec<_> = [10, 25, 40, 50, 50, 50, 50]
            .iter()
            .map(|s| Duration::from_secs(*s))
            .collect();
        assert_eq!(delays, expected);
    }

    #[test]
    fn test_linear_cap_holds_for_huge_attempts() {
        let mut policy = Linear::capped(Duration::from_secs(15), Duration::from_secs(50));
        assert_eq!(
            policy.apply(Duration::from_secs(10), u32::MAX),
            Duration::from_secs(50)
        );
    }

    #[test]
    fn test_linear_cap_below_base_pins_to_cap() {
        let mut policy = Linear::capped(Duration::from_secs(1), Duration::from_secs(5));
        assert_eq!(
            policy.apply(Duration::from_secs(10), 0),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_exponential_delay_sequence() {
        let mut policy = Exponential::new();
        let base = Duration::from_secs(4);

        let delays: Vec<_> = (0..5).map(|i| policy.apply(base, i)).collect();
        let expected: Vec<_> = [4, 8, 16, 32, 64]
            .iter()
            .map(|s| Duration::from_secs(*s))
            .collect();
        assert_eq!(delays, expected);
    }

    #[test]
    fn test_exponential_saturates_at_cap() {
        let mut policy = Exponential::capped(Duration::from_secs(60));
        let base = Duration::from_secs(8);

        let delays: Vec<_> = (0..5).map(|i| policy.apply(base, i)).collect();
        let expected: Vec<_> = [8, 16, 32, 60, 60]
            .iter()
            .map(|s| Duration::from_secs(*s))
            .collect();
        assert_eq!(delays, expected);
    }

    #[test]
    fn test_exponential_huge_attempt_clamps_to_cap() {
        let mut policy = Exponential::capped(Duration::from_secs(60));
        assert_eq!(
            policy.apply(Duration::from_millis(100), u32::MAX),
            Duration::from_secs(60)
        );
    }
}
