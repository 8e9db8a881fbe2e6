//! # reprise
//!
//! **Reprise** is a small retry/backoff library for Rust.
//!
//! It provides a family of delay policies, a budgeted backoff controller,
//! and a blocking executor that drives a fallible operation through its
//! retry schedule. The crate does no I/O and holds no opinion about what
//! failed; the operation itself decides whether an error is worth retrying.
//!
//! ## Architecture
//! ```text
//!          ┌───────────────────────────────┐
//!          │      Backoff::attempt()       │
//!          │ (invoke operation, sleep on   │
//!          │  the delay between retries)   │
//!          └───────────────┬───────────────┘
//!                          ▼
//!          ┌───────────────────────────────┐
//!          │          Backoff<P>           │
//!          │  base_delay + retry budget    │
//!          │  next_delay() / reset()       │
//!          └───────────────┬───────────────┘
//!                          ▼
//!          ┌───────────────────────────────┐
//!          │        P: DelayPolicy         │
//!          │  Constant │ Linear │          │
//!          │  Exponential │ FullJitter │   │
//!          │  DecorrelatedJitter           │
//!          └───────────────────────────────┘
//! ```
//!
//! ### Attempt lifecycle
//! ```text
//! Backoff::attempt(operation)
//!
//! loop {
//!   ├─► operation() ─► AttemptOutcome
//!   ├─ Success   ─► return (done)
//!   ├─ HardError ─► return (non-retryable, budget ignored)
//!   └─ Failure   ─► next_delay()
//!        ├─ None        ─► return Failure (budget spent)
//!        └─ Some(delay)    [delay = P::apply(base_delay, retries_done)]
//!             ├─ thread::sleep(delay)
//!             └─ continue
//! }
//! ```
//!
//! ## Features
//! | Area           | Description                                          | Key types / traits                     |
//! |----------------|------------------------------------------------------|----------------------------------------|
//! | **Policies**   | How retry delays evolve (fixed curves and jittered). | [`DelayPolicy`], [`Constant`], [`Linear`], [`Exponential`], [`FullJitter`], [`DecorrelatedJitter`] |
//! | **Scheduling** | Budgeted delay sequencing, reusable via reset.       | [`Backoff`]                            |
//! | **Execution**  | Blocking retry loop over a fallible operation.       | [`AttemptOutcome`]                     |
//! | **Errors**     | Error-typed view of a terminal outcome.              | [`RetryError`]                         |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use reprise::{AttemptOutcome, Backoff};
//!
//! fn flaky() -> Result<(), &'static str> {
//!     Err("transient glitch")
//! }
//!
//! // Wait 10ms, 20ms, 40ms between retries, at most 3 retries.
//! let mut backoff = Backoff::exponential(Duration::from_millis(10), 3);
//!
//! let outcome = backoff.attempt(|| match flaky() {
//!     Ok(()) => AttemptOutcome::Success,
//!     Err("corrupted state") => AttemptOutcome::HardError,
//!     Err(_) => AttemptOutcome::Failure,
//! });
//!
//! assert!(!outcome.is_success());
//! assert_eq!(backoff.retries_done(), 3);
//!
//! // The controller is reusable: re-arm the budget and go again.
//! backoff.reset();
//! assert_eq!(backoff.retries_done(), 0);
//! ```

mod attempt;
mod backoff;
mod error;
mod policies;

// ---- Public re-exports ----

pub use attempt::AttemptOutcome;
pub use backoff::Backoff;
pub use error::RetryError;
pub use policies::{Constant, DecorrelatedJitter, DelayPolicy, Exponential, FullJitter, Linear};
