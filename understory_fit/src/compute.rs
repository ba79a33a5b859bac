// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scale computer: a pure function from configuration and container size
//! to a [`FitTransform`].

use kurbo::{Size, Vec2};

use crate::config::{FitConfig, Margin};
use crate::error::{ConfigIssue, FitError};
use crate::mode::AlignmentMode;
use crate::transform::FitTransform;

/// Computes the transform fitting `config`'s design rectangle into `container`.
///
/// The result depends only on the arguments, so identical inputs always give
/// bit-identical transforms.
///
/// - A disabled configuration yields [`FitTransform::IDENTITY`] without
///   looking at `container`.
/// - When the uniform scale is exactly `1.0` the identity is returned for
///   every mode, [`AlignmentMode::Stretched`] included.
///
/// # Errors
///
/// Returns [`FitError::DegenerateDimensions`] if `container`, the design
/// size, or the design grown by its margin has a non-positive or non-finite
/// extent, or if their ratio is too extreme to represent.
///
/// Returns [`FitError::InvalidConfiguration`] if the margin is negative or
/// not finite.
///
/// # Example
///
/// ```rust
/// use kurbo::Size;
/// use understory_fit::{AlignmentMode, FitConfig, compute_transform};
///
/// let config = FitConfig::new(Size::new(800.0, 600.0))?
///     .with_mode(AlignmentMode::CenterMiddle);
/// let t = compute_transform(&config, Size::new(1600.0, 900.0))?;
/// assert_eq!(t.scale_x, 1.5);
/// assert_eq!(t.offset_y, 0.0);
/// # Ok::<(), understory_fit::FitError>(())
/// ```
pub fn compute_transform(config: &FitConfig, container: Size) -> Result<FitTransform, FitError> {
    if !config.enabled {
        return Ok(FitTransform::IDENTITY);
    }
    check_extent(container)?;
    check_extent(config.design)?;
    check_margin(config.margin)?;

    let design = config.design;
    let margin = config.margin;
    let effective = config.effective_design();
    check_extent(effective)?;

    let raw_x = container.width / effective.width;
    let raw_y = container.height / effective.height;
    // Extreme ratios can underflow to zero or overflow to infinity.
    check_extent(Size::new(raw_x, raw_y)).map_err(|_| FitError::DegenerateDimensions {
        width: container.width,
        height: container.height,
    })?;
    let s = raw_x.min(raw_y);

    if s == 1.0 {
        return Ok(FitTransform::IDENTITY);
    }

    let transform = match config.mode {
        AlignmentMode::TopLeft => FitTransform::uniform(s, Vec2::new(margin.x, margin.y)),
        AlignmentMode::CenterMiddle => FitTransform::uniform(
            s,
            Vec2::new(
                container.width / (2.0 * s) - design.width / 2.0,
                container.height / (2.0 * s) - design.height / 2.0,
            ),
        ),
        AlignmentMode::BottomRight => FitTransform::uniform(
            s,
            Vec2::new(
                container.width / s - design.width - margin.x,
                container.height / s - design.height - margin.y,
            ),
        ),
        AlignmentMode::Stretched => FitTransform::stretched(
            Vec2::new(raw_x, raw_y),
            Vec2::new(
                (container.width - design.width) / (2.0 * raw_x),
                (container.height - design.height) / (2.0 * raw_y),
            ),
        ),
    };
    Ok(transform)
}

fn check_margin(margin: Margin) -> Result<(), FitError> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    if ok(margin.x) && ok(margin.y) {
        Ok(())
    } else {
        Err(ConfigIssue::Margin {
            x: margin.x,
            y: margin.y,
        }
        .into())
    }
}

fn check_extent(size: Size) -> Result<(), FitError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(())
    } else {
        Err(FitError::DegenerateDimensions {
            width: size.width,
            height: size.height,
        })
    }
}
