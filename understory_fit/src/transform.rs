// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Point about which a [`FitTransform`] scales its content block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScaleOrigin {
    /// Scale about the block's top-left corner: a design point `p` lands at
    /// `scale * (p + offset)`.
    ///
    /// Uniform alignment modes produce this origin.
    #[default]
    TopLeft,
    /// Scale about the block's center `c`: a design point `p` lands at
    /// `c + scale * (p - c + offset)`.
    ///
    /// [`AlignmentMode::Stretched`](crate::AlignmentMode::Stretched) produces
    /// this origin.
    Center,
}

/// Scale and translation mapping design space onto container space.
///
/// A `FitTransform` is produced fresh by every recomputation and handed to
/// the rendering host; it is never updated in place. Offsets are expressed in
/// design units and applied before the scale (see [`ScaleOrigin`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal shift, in design units.
    pub offset_x: f64,
    /// Vertical shift, in design units.
    pub offset_y: f64,
    /// Where the scale is anchored.
    pub origin: ScaleOrigin,
}

impl Default for FitTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FitTransform {
    /// The transform that leaves content untouched.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        origin: ScaleOrigin::TopLeft,
    };

    /// Uniform scale anchored at the top-left corner.
    #[must_use]
    pub const fn uniform(scale: f64, offset: Vec2) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            offset_x: offset.x,
            offset_y: offset.y,
            origin: ScaleOrigin::TopLeft,
        }
    }

    /// Per-axis scale anchored at the content center.
    #[must_use]
    pub const fn stretched(scale: Vec2, offset: Vec2) -> Self {
        Self {
            scale_x: scale.x,
            scale_y: scale.y,
            offset_x: offset.x,
            offset_y: offset.y,
            origin: ScaleOrigin::Center,
        }
    }

    /// Returns `true` if this is exactly [`FitTransform::IDENTITY`].
    ///
    /// The origin is irrelevant when there is no scale and no offset.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0 && self.offset_x == 0.0 && self.offset_y == 0.0
    }

    /// Returns `true` if both axes share one scale factor.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.scale_x == self.scale_y
    }

    /// Scale factors as a vector.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.scale_x, self.scale_y)
    }

    /// Offsets as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Affine mapping a point in a `design`-sized block (relative to its
    /// top-left corner) into container space.
    ///
    /// `design` is only consulted for [`ScaleOrigin::Center`].
    #[must_use]
    pub fn to_affine(&self, design: Size) -> Affine {
        let scale = Affine::scale_non_uniform(self.scale_x, self.scale_y);
        match self.origin {
            ScaleOrigin::TopLeft => scale * Affine::translate(self.offset()),
            ScaleOrigin::Center => {
                let center = design.to_vec2() * 0.5;
                Affine::translate(center) * scale * Affine::translate(self.offset() - center)
            }
        }
    }

    /// Maps a single design-space point into container space.
    #[must_use]
    pub fn transform_point(&self, design: Size, pt: Point) -> Point {
        self.to_affine(design) * pt
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size, Vec2};

    use super::{FitTransform, ScaleOrigin};

    #[test]
    fn identity_maps_points_to_themselves() {
        let design = Size::new(800.0, 600.0);
        let t = FitTransform::IDENTITY;
        assert!(t.is_identity());
        assert!(t.is_uniform());
        assert_eq!(t.to_affine(design), Affine::IDENTITY);
        assert_eq!(FitTransform::default(), t);
    }

    #[test]
    fn top_left_origin_offsets_before_scaling() {
        let t = FitTransform::uniform(2.0, Vec2::new(10.0, 5.0));
        let p = t.transform_point(Size::new(100.0, 100.0), Point::new(1.0, 1.0));
        assert!((p.x - 22.0).abs() < 1e-9);
        assert!((p.y - 12.0).abs() < 1e-9);
    }

    #[test]
    fn center_origin_keeps_center_fixed_without_offset() {
        let design = Size::new(200.0, 100.0);
        let t = FitTransform::stretched(Vec2::new(3.0, 0.5), Vec2::ZERO);
        assert_eq!(t.origin, ScaleOrigin::Center);
        assert!(!t.is_uniform());

        let c = t.transform_point(design, Point::new(100.0, 50.0));
        assert!((c.x - 100.0).abs() < 1e-9);
        assert!((c.y - 50.0).abs() < 1e-9);

        let corner = t.transform_point(design, Point::ZERO);
        assert!((corner.x - (100.0 - 300.0)).abs() < 1e-9);
        assert!((corner.y - 25.0).abs() < 1e-9);
    }
}
