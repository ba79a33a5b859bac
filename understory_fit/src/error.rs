// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// What was wrong with a rejected [`FitConfig`](crate::FitConfig).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigIssue {
    /// The design width or height was zero, negative, or not finite.
    DesignSize {
        /// Offending design width.
        width: f64,
        /// Offending design height.
        height: f64,
    },
    /// A margin was negative or not finite.
    Margin {
        /// Offending horizontal margin.
        x: f64,
        /// Offending vertical margin.
        y: f64,
    },
}

/// Errors produced while configuring or computing a fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitError {
    /// The static configuration is unusable.
    ///
    /// Raised when a configuration is built or handed to a
    /// [`FitController`](crate::FitController); there is no recovery.
    InvalidConfiguration(ConfigIssue),
    /// A measured container (or the design) has a non-positive extent.
    ///
    /// This is transient during layout; controllers skip the recomputation and
    /// keep the previous transform.
    DegenerateDimensions {
        /// Width that was measured.
        width: f64,
        /// Height that was measured.
        height: f64,
    },
    /// An alignment mode name did not match any [`AlignmentMode`](crate::AlignmentMode).
    UnsupportedAlignmentMode,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DesignSize { width, height } => {
                write!(f, "design size {width}x{height} must be positive and finite")
            }
            Self::Margin { x, y } => {
                write!(f, "margin ({x}, {y}) must be non-negative and finite")
            }
        }
    }
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(issue) => write!(f, "invalid fit configuration: {issue}"),
            Self::DegenerateDimensions { width, height } => {
                write!(f, "cannot fit into degenerate dimensions {width}x{height}")
            }
            Self::UnsupportedAlignmentMode => f.write_str("unsupported alignment mode"),
        }
    }
}

impl core::error::Error for FitError {}

impl From<ConfigIssue> for FitError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ConfigIssue, FitError};

    #[test]
    fn display_names_the_offending_values() {
        let err = FitError::from(ConfigIssue::DesignSize {
            width: 0.0,
            height: 600.0,
        });
        assert_eq!(
            err.to_string(),
            "invalid fit configuration: design size 0x600 must be positive and finite"
        );

        let err = FitError::DegenerateDimensions {
            width: 1024.0,
            height: 0.0,
        };
        assert_eq!(err.to_string(), "cannot fit into degenerate dimensions 1024x0");
    }
}
