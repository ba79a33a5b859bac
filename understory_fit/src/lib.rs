// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_fit --heading-base-level=0

//! Understory Fit: map a fixed design-space rectangle onto a resizable container.
//!
//! Content such as slides is often authored for one reference size (the
//! *design size*) and shown in a container of whatever size the window
//! happens to be. This crate computes the scale and translation that make the
//! design rectangle fit the container, and decides when to recompute it.
//!
//! It is split into:
//! - [`FitConfig`] / [`ConfigStore`]: design size, margins, alignment mode,
//!   enabled flag and resize debounce interval.
//! - [`compute_transform`]: a pure function producing a [`FitTransform`].
//! - [`FitController`]: reacts to container resizes (debounced), content loads
//!   and the toggle command, and hands each result to a [`FitHost`].
//!
//! It does **not** own a scene graph, a clock, or a rendering backend. Callers
//! are expected to:
//! - Measure the container and enumerate root content blocks via [`FitHost`].
//! - Supply monotonic timestamps for resize events and drive the debounce
//!   timer (see [`debounce`]).
//! - Bind the toggle command to whatever key or control they like.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_fit::{AlignmentMode, FitConfig, FitTransform, compute_transform};
//!
//! let config = FitConfig::new(Size::new(800.0, 600.0))?
//!     .with_mode(AlignmentMode::CenterMiddle);
//!
//! // Container twice as wide, 1.5x as tall: uniform scale is 1.5.
//! let t = compute_transform(&config, Size::new(1600.0, 900.0))?;
//! assert_eq!((t.scale_x, t.scale_y), (1.5, 1.5));
//!
//! // Disabled configurations always yield the identity.
//! let off = config.with_enabled(false);
//! assert_eq!(compute_transform(&off, Size::new(1600.0, 900.0))?, FitTransform::IDENTITY);
//! # Ok::<(), understory_fit::FitError>(())
//! ```
//!
//! ## Driving a host
//!
//! ```rust
//! use kurbo::Size;
//! use understory_fit::{FitConfig, FitController, FitHost, FitTransform};
//!
//! struct Deck {
//!     size: Size,
//!     slides: Vec<(usize, FitTransform)>,
//! }
//!
//! impl FitHost for Deck {
//!     type Block = usize;
//!     fn container_size(&self) -> Size {
//!         self.size
//!     }
//!     fn root_blocks(&self) -> Vec<usize> {
//!         vec![0, 1, 2]
//!     }
//!     fn apply_transform(&mut self, block: &usize, transform: &FitTransform) {
//!         self.slides.push((*block, *transform));
//!     }
//! }
//!
//! let deck = Deck { size: Size::new(2720.0, 1536.0), slides: Vec::new() };
//! let mut fit = FitController::new(FitConfig::default(), deck)?;
//! fit.start();
//!
//! // A burst of resizes collapses into one recomputation.
//! fit.host_mut().size = Size::new(1360.0, 1536.0);
//! fit.on_container_resize(1_000);
//! fit.on_container_resize(1_050);
//! assert!(fit.poll(1_200).is_none());
//! assert!(fit.poll(1_250).is_some());
//! # Ok::<(), understory_fit::FitError>(())
//! ```
//!
//! ## Design notes
//!
//! - Alignment modes form a closed enum; unknown mode names are rejected when
//!   parsed rather than silently leaving content untransformed.
//! - A uniform scale of exactly `1.0` short-circuits to the identity.
//! - Measurements are never cached: each recomputation reads a fresh container
//!   size and one configuration snapshot.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod compute;
mod config;
pub mod debounce;
mod error;
mod mode;
mod transform;
mod trigger;

pub use compute::compute_transform;
pub use config::{ConfigStore, FitConfig, Margin};
pub use debounce::{Debouncer, TimerToken};
pub use error::{ConfigIssue, FitError};
pub use mode::AlignmentMode;
pub use transform::{FitTransform, ScaleOrigin};
pub use trigger::{FitController, FitHost, Recompute, TriggerState};
