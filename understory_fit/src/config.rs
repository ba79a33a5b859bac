// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::error::{ConfigIssue, FitError};
use crate::mode::AlignmentMode;

/// Extra space around the design rectangle, in design-space units.
///
/// Each value is added on both sides, so a margin of `5.0` widens an 800 unit
/// design to 810 units before the scale ratio is taken.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Margin {
    /// Horizontal margin on each of the left and right sides.
    pub x: f64,
    /// Vertical margin on each of the top and bottom sides.
    pub y: f64,
}

impl Margin {
    /// No margin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a margin from its horizontal and vertical parts.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a margin with the same value on both axes.
    #[must_use]
    pub const fn uniform(m: f64) -> Self {
        Self { x: m, y: m }
    }
}

/// Static description of how design-space content is fitted into a container.
///
/// Construct with [`FitConfig::new`] (or [`Default`]) and refine with the
/// `with_*` builders; each builder re-validates. Fields are public for
/// inspection, so consumers such as [`compute_transform`](crate::compute_transform)
/// still guard against degenerate values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    /// Size the content was authored for.
    pub design: Size,
    /// Margin added around the design before computing scale ratios.
    pub margin: Margin,
    /// Placement of the scaled content inside the container.
    pub mode: AlignmentMode,
    /// Whether scaling is active. Disabled configurations always produce the
    /// identity transform.
    pub enabled: bool,
    /// Quiet period, in milliseconds, before a burst of container resizes is
    /// acted on.
    pub debounce_ms: u64,
}

impl Default for FitConfig {
    /// A 1360x768 design, no margin, stretched, enabled, with a 200 ms debounce.
    fn default() -> Self {
        Self {
            design: Size::new(1360.0, 768.0),
            margin: Margin::ZERO,
            mode: AlignmentMode::default(),
            enabled: true,
            debounce_ms: 200,
        }
    }
}

impl FitConfig {
    /// Creates a configuration for the given design size, using defaults for
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidConfiguration`] if either design dimension
    /// is not a positive, finite number.
    pub fn new(design: Size) -> Result<Self, FitError> {
        Self {
            design,
            ..Self::default()
        }
        .validate()
    }

    /// Replaces the margin.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidConfiguration`] for negative or non-finite margins.
    pub fn with_margin(self, margin: Margin) -> Result<Self, FitError> {
        Self { margin, ..self }.validate()
    }

    /// Replaces the alignment mode.
    #[must_use]
    pub fn with_mode(self, mode: AlignmentMode) -> Self {
        Self { mode, ..self }
    }

    /// Replaces the enabled flag.
    #[must_use]
    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    /// Replaces the resize debounce interval.
    #[must_use]
    pub fn with_debounce_ms(self, debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            ..self
        }
    }

    /// Checks the static invariants, returning the configuration unchanged
    /// when they hold.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidConfiguration`] describing the first
    /// violated invariant.
    pub fn validate(self) -> Result<Self, FitError> {
        let Size { width, height } = self.design;
        if !is_positive(width) || !is_positive(height) {
            return Err(ConfigIssue::DesignSize { width, height }.into());
        }
        let Margin { x, y } = self.margin;
        if !is_non_negative(x) || !is_non_negative(y) {
            return Err(ConfigIssue::Margin { x, y }.into());
        }
        Ok(self)
    }

    /// Design size grown by the margin on every side.
    #[must_use]
    pub fn effective_design(&self) -> Size {
        Size::new(
            self.design.width + 2.0 * self.margin.x,
            self.design.height + 2.0 * self.margin.y,
        )
    }
}

/// Owner of the live [`FitConfig`].
///
/// Only the enabled flag changes after construction. Every recomputation
/// reads one [`ConfigStore::snapshot`] so a single fit never observes a
/// half-applied change.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    config: FitConfig,
}

impl ConfigStore {
    /// Wraps a configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: FitConfig) -> Result<Self, FitError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Read-only view of the current configuration.
    #[must_use]
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Copy of the current configuration for one recomputation.
    #[must_use]
    pub fn snapshot(&self) -> FitConfig {
        self.config
    }

    /// Returns `true` if scaling is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Sets the enabled flag, returning `true` if it changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.config.enabled != enabled;
        self.config.enabled = enabled;
        changed
    }

    /// Enables scaling, returning `true` if it was disabled.
    pub fn enable(&mut self) -> bool {
        self.set_enabled(true)
    }

    /// Disables scaling, returning `true` if it was enabled.
    pub fn disable(&mut self) -> bool {
        self.set_enabled(false)
    }

    /// Flips the enabled flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.config.enabled = !self.config.enabled;
        self.config.enabled
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
