//! # Jittered delay policies.
//!
//! The randomized members of the policy family, for spreading out retries
//! that would otherwise land in lockstep when many clients back off from the
//! same incident:
//!
//! - [`FullJitter`]: uniform draw in `[0, min(base × 2^n, cap)]`
//! - [`DecorrelatedJitter`]: uniform draw in `[base, last × 3]`, clamped to
//!   the cap; the clamped result becomes the next `last`
//!
//! Each instance owns a [`StdRng`] seeded from system entropy at
//! construction, so independent policies draw independent sequences and a
//! clone continues from the state of its source. Draws are not reproducible;
//! only the bounds above are guaranteed.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::policies::policy::{clamped_millis, exponential_bound, DelayPolicy};

/// Delay policy drawing uniformly from `[0, min(base × 2^n, cap)]`.
///
/// Follows the exponential growth curve but may shorten any wait down to
/// zero, which spreads retries the most aggressively.
#[derive(Clone, Debug)]
pub struct FullJitter {
    rng: StdRng,
    cap: Duration,
}

impl FullJitter {
    /// Creates an uncapped full-jitter policy.
    pub fn new() -> Self {
        Self::capped(Duration::MAX)
    }

    /// Creates a full-jitter policy whose delay never exceeds `cap`.
    pub fn capped(cap: Duration) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            cap,
        }
    }
}

impl Default for FullJitter {
    /// Returns an uncapped full-jitter policy.
    fn default() -> Self {
        Self::new()
    }
}

impl DelayPolicy for FullJitter {
    fn apply(&mut self, base: Duration, attempt_index: u32) -> Duration {
        let bound = exponential_bound(
            clamped_millis(base),
            attempt_index,
            clamped_millis(self.cap),
        );
        Duration::from_millis(self.rng.random_range(0..=bound))
    }
}

/// Delay policy drawing uniformly from `[base, last × 3]`, clamped to the cap.
///
/// `last` starts out as the base delay and is replaced by each clamped draw,
/// so consecutive delays wander upward instead of following a fixed curve.
/// The attempt index is ignored; history alone drives the growth.
///
/// ### Notes
/// - The remembered `last` survives [`Backoff::reset`](crate::Backoff::reset).
///   A controller reused after exhaustion keeps drawing from where the
///   previous sequence left off.
#[derive(Clone, Debug)]
pub struct DecorrelatedJitter {
    rng: StdRng,
    cap: Duration,
    last_ms: Option<u64>,
}

impl DecorrelatedJitter {
    /// Creates an uncapped decorrelated-jitter policy.
    pub fn new() -> Self {
        Self::capped(Duration::MAX)
    }

    /// Creates a decorrelated-jitter policy whose delay never exceeds `cap`.
    pub fn capped(cap: Duration) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            cap,
            last_ms: None,
        }
    }
}

impl Default for DecorrelatedJitter {
    /// Returns an uncapped decorrelated-jitter policy.
    fn default() -> Self {
        Self::new()
    }
}

impl DelayPolicy for DecorrelatedJitter {
    fn apply(&mut self, base: Duration, _attempt_index: u32) -> Duration {
        let base_ms = clamped_millis(base);
        let last = self.last_ms.unwrap_or(base_ms);

        // A cap below the base can drag `last` under the base; the upper
        // bound must never drop below the lower one or the draw is invalid.
        let bound = last.saturating_mul(3).max(base_ms);
        let drawn = self.rng.random_range(base_ms..=bound);

        let delay = drawn.min(clamped_millis(self.cap));
        self.last_ms = Some(delay);
        Duration::from_millis(delay)
    }
}
