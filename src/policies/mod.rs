//! Delay policies for retry scheduling.
//!
//! This module groups the policy contract and its implementations, which
//! control **how long** to wait before each retry.
//!
//! ## Contents
//! - [`DelayPolicy`] the contract consumed by [`Backoff`](crate::Backoff)
//! - [`Constant`] fixed delay for every retry
//! - [`Linear`] delay grows by a fixed increment
//! - [`Exponential`] delay doubles per retry
//! - [`FullJitter`] random delay under the exponential curve
//! - [`DecorrelatedJitter`] random delay tracking the previous draw
//!
//! ## Quick wiring
//! ```text
//! Backoff<P: DelayPolicy> { base_delay, max_retries, retries_done }
//!      └─► next_delay() calls P::apply(base_delay, retries_done)
//!           └─► Backoff::attempt() sleeps on the returned delay
//! ```
//!
//! ## Defaults
//! - Caps default to unbounded (`Duration::MAX`); pass one via `capped`.
//! - Jitter policies seed their generator from system entropy per instance.

mod fixed;
mod jitter;
mod policy;

pub use fixed::{Constant, Exponential, Linear};
pub use jitter::{DecorrelatedJitter, FullJitter};
pub use policy::DelayPolicy;
