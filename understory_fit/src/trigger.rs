// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive recomputation: turns resize, load and toggle signals into applied
//! transforms.
//!
//! ## Usage
//!
//! 1) Implement [`FitHost`] for the rendering layer that owns the container
//!    and its content blocks.
//! 2) Build a [`FitController`] and call [`FitController::start`] once the
//!    content is mounted.
//! 3) Forward container resizes to [`FitController::on_container_resize`] and
//!    drive the debounce with [`FitController::on_timer`] or
//!    [`FitController::poll`].
//! 4) Forward content loads and the toggle command to
//!    [`FitController::on_content_load`] and
//!    [`FitController::on_toggle_enabled`]; both recompute immediately.

use alloc::vec::Vec;

use kurbo::Size;

use crate::compute::compute_transform;
use crate::config::{ConfigStore, FitConfig};
use crate::debounce::{Debouncer, TimerToken};
use crate::error::FitError;
use crate::transform::FitTransform;

/// Rendering collaborator that measures the container and receives transforms.
pub trait FitHost {
    /// Opaque handle to one content block.
    type Block: Clone;

    /// Current inner size of the container, in container pixels.
    fn container_size(&self) -> Size;

    /// Blocks at the root of the content tree.
    ///
    /// Nested blocks inherit their ancestor's transform and must not be listed.
    fn root_blocks(&self) -> Vec<Self::Block>;

    /// Pins a root block to the design size before it is transformed.
    fn size_block(&mut self, _block: &Self::Block, _design: Size) {}

    /// Applies `transform` to a root block, replacing any previous one.
    fn apply_transform(&mut self, block: &Self::Block, transform: &FitTransform);
}

/// Whether a debounced recomputation is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TriggerState {
    /// Nothing scheduled.
    #[default]
    Idle,
    /// A resize was seen and a recomputation is waiting for the quiet period.
    PendingRecompute,
}

/// Result of one recomputation attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Recompute {
    /// The transform was computed and handed to every root block.
    Applied(FitTransform),
    /// The measurement was unusable; the previous transform stays in place.
    Skipped(FitError),
}

impl Recompute {
    /// The applied transform, if any.
    #[must_use]
    pub fn transform(&self) -> Option<FitTransform> {
        match self {
            Self::Applied(t) => Some(*t),
            Self::Skipped(_) => None,
        }
    }
}

/// Drives [`compute_transform`] from host signals and applies the results.
///
/// All methods run on the caller's thread; time is passed in as monotonic
/// milliseconds.
#[derive(Debug)]
pub struct FitController<H: FitHost> {
    store: ConfigStore,
    debounce: Debouncer,
    host: H,
    last: Option<FitTransform>,
}

impl<H: FitHost> FitController<H> {
    /// Creates a controller. Nothing is applied until a signal arrives or
    /// [`FitController::start`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: FitConfig, host: H) -> Result<Self, FitError> {
        let store = ConfigStore::new(config)?;
        Ok(Self {
            debounce: Debouncer::new(config.debounce_ms),
            store,
            host,
            last: None,
        })
    }

    /// Enables scaling and performs the initial fit.
    pub fn start(&mut self) -> Recompute {
        self.enable()
    }

    /// Handles a container resize observed at `now`.
    ///
    /// Any pending recomputation is superseded. The returned token identifies
    /// the new deadline for hosts that arm their own timer.
    pub fn on_container_resize(&mut self, now: u64) -> TimerToken {
        let token = self.debounce.schedule(now);
        log::trace!(
            "fit: resize at {now}ms, recompute due at {:?}ms",
            self.debounce.deadline()
        );
        token
    }

    /// Handles a host timer armed for `token`.
    ///
    /// Stale tokens are ignored and return `None`.
    pub fn on_timer(&mut self, token: TimerToken) -> Option<Recompute> {
        if self.debounce.fire(token) {
            Some(self.recompute())
        } else {
            None
        }
    }

    /// Runs the pending recomputation if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: u64) -> Option<Recompute> {
        if self.debounce.poll(now) {
            Some(self.recompute())
        } else {
            None
        }
    }

    /// Handles a content load by recomputing immediately.
    ///
    /// Layout may change once images and fonts arrive, so this does not wait
    /// for the debounce and leaves any pending resize in place.
    pub fn on_content_load(&mut self) -> Recompute {
        self.recompute()
    }

    /// Handles the toggle command.
    pub fn on_toggle_enabled(&mut self) -> Recompute {
        self.toggle()
    }

    /// Enables scaling and recomputes.
    pub fn enable(&mut self) -> Recompute {
        self.store.enable();
        self.recompute()
    }

    /// Disables scaling and applies the identity transform.
    pub fn disable(&mut self) -> Recompute {
        self.store.disable();
        self.recompute()
    }

    /// Flips between enabled and disabled and recomputes.
    pub fn toggle(&mut self) -> Recompute {
        let enabled = self.store.toggle();
        log::debug!("fit: scaling {}", if enabled { "enabled" } else { "disabled" });
        self.recompute()
    }

    /// Measures the container, computes a transform from the current
    /// configuration and applies it to every root block.
    ///
    /// Degenerate measurements are reported and skipped; the next signal
    /// retries.
    pub fn recompute(&mut self) -> Recompute {
        let config = self.store.snapshot();
        let container = self.host.container_size();
        let transform = match compute_transform(&config, container) {
            Ok(t) => t,
            Err(err) => {
                log::warn!("fit: skipping recompute: {err}");
                return Recompute::Skipped(err);
            }
        };

        let blocks = self.host.root_blocks();
        log::debug!(
            "fit: applying {transform:?} to {} root blocks in {}x{}",
            blocks.len(),
            container.width,
            container.height
        );
        for block in &blocks {
            self.host.size_block(block, config.design);
            self.host.apply_transform(block, &transform);
        }
        self.last = Some(transform);
        Recompute::Applied(transform)
    }

    /// Whether a debounced recomputation is waiting.
    #[must_use]
    pub fn state(&self) -> TriggerState {
        if self.debounce.is_pending() {
            TriggerState::PendingRecompute
        } else {
            TriggerState::Idle
        }
    }

    /// Deadline of the pending recomputation, if any.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<u64> {
        self.debounce.deadline()
    }

    /// The most recently applied transform.
    #[must_use]
    pub fn last_transform(&self) -> Option<FitTransform> {
        self.last
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &FitConfig {
        self.store.config()
    }

    /// Returns `true` if scaling is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.store.is_enabled()
    }

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host, e.g. to update its container size.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller and returns the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
