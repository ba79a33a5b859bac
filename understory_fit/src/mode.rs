// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::error::FitError;

/// How fitted content is positioned inside the container.
///
/// All modes except [`AlignmentMode::Stretched`] scale uniformly by the
/// smaller of the two axis ratios and differ only in where the leftover space
/// goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AlignmentMode {
    /// Hug the top-left corner, inside the margin.
    TopLeft,
    /// Center the design rectangle in the container.
    CenterMiddle,
    /// Hug the bottom-right corner, inside the margin.
    BottomRight,
    /// Scale each axis independently so the design (with margins) fills the
    /// container exactly.
    #[default]
    Stretched,
}

impl AlignmentMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::CenterMiddle,
        Self::BottomRight,
        Self::Stretched,
    ];

    /// Canonical name, as accepted by [`str::parse`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top left",
            Self::CenterMiddle => "center middle",
            Self::BottomRight => "bottom right",
            Self::Stretched => "stretched",
        }
    }

    /// Returns `true` if both axes share one scale factor.
    #[must_use]
    pub const fn is_uniform(self) -> bool {
        !matches!(self, Self::Stretched)
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlignmentMode {
    type Err = FitError;

    /// Parses the word-pair names hosts use in their options, in either order.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is = |name: &str| s.eq_ignore_ascii_case(name);
        if is("top left") || is("left top") {
            Ok(Self::TopLeft)
        } else if is("center middle") || is("middle center") {
            Ok(Self::CenterMiddle)
        } else if is("bottom right") || is("right bottom") {
            Ok(Self::BottomRight)
        } else if is("stretched") || is("stretch") {
            Ok(Self::Stretched)
        } else {
            Err(FitError::UnsupportedAlignmentMode)
        }
    }
}
