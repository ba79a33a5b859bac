// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic trailing-edge debouncer.
//!
//! Time is supplied by the caller as monotonic milliseconds; the debouncer
//! never reads a clock or spawns a timer. Hosts either:
//!
//! 1) Arm their own one-shot timer with the [`TimerToken`] returned by
//!    [`Debouncer::schedule`] and call [`Debouncer::fire`] when it elapses, or
//! 2) Call [`Debouncer::poll`] from an existing frame/event loop.
//!
//! Only the most recently issued token can fire. Earlier tokens are stale as
//! soon as a new signal is scheduled.
//!
//! ## Minimal example
//!
//! ```
//! use understory_fit::debounce::Debouncer;
//!
//! let mut d = Debouncer::new(200);
//! let first = d.schedule(0);
//! let second = d.schedule(150);
//!
//! // The superseded timer is ignored.
//! assert!(!d.fire(first));
//! assert!(!d.poll(300));
//! assert!(d.poll(350));
//! assert!(!d.fire(second));
//! ```

/// Identity of one scheduled deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Raw generation number, useful as a host timer id.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Delays an action until signals have been quiet for `delay_ms`.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay_ms: u64,
    generation: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            deadline: None,
        }
    }

    /// Quiet period in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a signal at `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: u64) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now.saturating_add(self.delay_ms));
        TimerToken(self.generation)
    }

    /// Returns `true` if `token` is the pending deadline.
    #[must_use]
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.deadline.is_some() && token.0 == self.generation
    }

    /// Consumes the pending deadline if `token` identifies it.
    ///
    /// Returns `false` for stale or already-fired tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.is_current(token) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Consumes the pending deadline if it has elapsed by `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Time at which the pending deadline elapses.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
