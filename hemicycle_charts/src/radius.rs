// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius ranges relative to the view.

use kurbo::{Point, Size};

/// A radial length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Length {
    /// Percentage of half the smaller view side: `100` reaches the nearest view edge.
    Percent(f64),
    /// Absolute length in scene units.
    Px(f64),
}

impl Length {
    /// Resolves against the smaller side of the view.
    pub fn resolve(self, view_min: f64) -> f64 {
        match self {
            Self::Percent(p) => p / 100.0 * view_min * 0.5,
            Self::Px(px) => px,
        }
    }
}

/// Inner and outer radius of a chart annulus.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusRange {
    /// Inner radius (hole size).
    pub inner: Length,
    /// Outer radius.
    pub outer: Length,
}

impl RadiusRange {
    /// Creates a range.
    pub fn new(inner: Length, outer: Length) -> Self {
        Self { inner, outer }
    }

    /// A range given as percentages.
    pub fn percent(inner: f64, outer: f64) -> Self {
        Self::new(Length::Percent(inner), Length::Percent(outer))
    }

    /// A range given in scene units.
    pub fn px(inner: f64, outer: f64) -> Self {
        Self::new(Length::Px(inner), Length::Px(outer))
    }

    /// Resolves `(inner, outer)` radii for a view.
    pub fn resolve(&self, view: Size) -> (f64, f64) {
        let view_min = view.min_side();
        (self.inner.resolve(view_min), self.outer.resolve(view_min))
    }
}

impl Default for RadiusRange {
    fn default() -> Self {
        Self::percent(30.0, 80.0)
    }
}

/// The center of a view with its origin at `(0, 0)`.
pub(crate) fn view_center(view: Size) -> Point {
    Point::new(view.width * 0.5, view.height * 0.5)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn percentages_use_half_the_smaller_side() {
        let (r0, r1) = RadiusRange::default().resolve(Size::new(400.0, 200.0));
        assert_eq!((r0, r1), (30.0, 80.0), "30% and 80% of 100");
    }

    #[test]
    fn pixel_lengths_ignore_the_view() {
        let (r0, r1) = RadiusRange::px(50.0, 200.0).resolve(Size::new(10.0, 10.0));
        assert_eq!((r0, r1), (50.0, 200.0), "absolute radii");
    }
}
