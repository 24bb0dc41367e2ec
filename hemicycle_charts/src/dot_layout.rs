// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The packed-dot ("parliament") representation of a proportion dataset.
//!
//! Each category gets the angular slice [`angular_slices`] assigns it, and every seat of the
//! shared ring grid that falls inside that slice becomes one dot in the category's color.
//! Dot counts are therefore proportional to category share, up to one seat per ring.

extern crate alloc;

use alloc::vec::Vec;

use hemicycle_core::{Mark, MarkGroup, MarkId};
use kurbo::{Point, Size};
use peniko::Color;

use crate::category::Category;
use crate::pack::ArcPacker;
use crate::palette::Palette;
use crate::radius::{RadiusRange, view_center};
use crate::slice::{AngularSlice, LayoutError, angular_slices};

/// Default divisor from the smaller view side to the dot diameter.
pub const DEFAULT_DOT_DIVISOR: f64 = 50.0;

/// Default gap added to the dot diameter to get the seat pitch.
pub const DEFAULT_DOT_GAP: f64 = 3.0;

/// Mark id namespace used for dots by default.
const DOT_NAMESPACE: u16 = 0xD0;

/// One packed dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Center in scene coordinates.
    pub center: Point,
    /// Dot radius.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
}

/// Shared parameters for laying out every category of one dot chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DotLayout {
    /// Center of the rings in scene coordinates.
    pub center: Point,
    /// Radius of the innermost ring.
    pub inner_radius: f64,
    /// Outer bound of the ring annulus.
    pub outer_radius: f64,
    /// Dot diameter.
    pub dot_diameter: f64,
    /// Extra spacing between neighboring dots.
    pub dot_gap: f64,
    /// Category colors.
    pub palette: Palette,
    /// Mark id namespace for generated dots.
    pub namespace: u16,
    /// Rendering order hint.
    pub z_index: i32,
}

impl DotLayout {
    /// Creates a layout with the default gap and palette.
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64, dot_diameter: f64) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            dot_diameter,
            dot_gap: DEFAULT_DOT_GAP,
            palette: Palette::default(),
            namespace: DOT_NAMESPACE,
            z_index: crate::z_order::DOTS,
        }
    }

    /// Derives a layout centered in `view`.
    ///
    /// Radii come from `radius`; the dot diameter is the smaller view side divided by
    /// `dot_divisor`.
    pub fn for_view(view: Size, radius: RadiusRange, dot_divisor: f64) -> Self {
        let (inner, outer) = radius.resolve(view);
        Self::new(
            view_center(view),
            inner,
            outer,
            view.min_side() / dot_divisor,
        )
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the gap between dots.
    pub fn with_dot_gap(mut self, dot_gap: f64) -> Self {
        self.dot_gap = dot_gap;
        self
    }

    /// Sets the mark id namespace.
    pub fn with_namespace(mut self, namespace: u16) -> Self {
        self.namespace = namespace;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Center-to-center seat spacing.
    pub fn pitch(&self) -> f64 {
        self.dot_diameter + self.dot_gap
    }

    /// The packer shared by every category.
    pub fn packer(&self) -> ArcPacker {
        ArcPacker::new(self.inner_radius, self.outer_radius, self.pitch())
    }

    /// Dots for one slice, in packing order.
    pub fn slice_dots(&self, slice: &AngularSlice) -> Vec<Dot> {
        let color = self.palette.color(slice.category_index);
        let radius = self.dot_diameter * 0.5;
        self.packer()
            .pack(slice.start_angle, slice.end_angle)
            .into_iter()
            .map(|p| Dot {
                center: self.center + p.to_vec2(),
                radius,
                color,
            })
            .collect()
    }

    /// Lays out every category, concatenating dots in category order.
    pub fn layout(&self, categories: &[Category]) -> Result<Vec<Dot>, LayoutError> {
        let slices = angular_slices(categories)?;
        Ok(slices.iter().flat_map(|s| self.slice_dots(s)).collect())
    }

    /// The dot group drawn for category `index`.
    ///
    /// `slices` must come from [`angular_slices`] for the full dataset; an out-of-range index
    /// yields an empty group.
    pub fn render_item(&self, slices: &[AngularSlice], index: usize) -> MarkGroup {
        let mut group = MarkGroup::new(index);
        let Some(slice) = slices.get(index) else {
            return group;
        };
        group.marks = self
            .slice_dots(slice)
            .into_iter()
            .enumerate()
            .map(|(seat, dot)| {
                Mark::circle(
                    MarkId::for_item(self.namespace, index, seat),
                    dot.center,
                    dot.radius,
                    dot.color,
                )
                .with_z_index(self.z_index)
            })
            .collect();
        group
    }

    /// Marks for every category.
    pub fn marks(&self, categories: &[Category]) -> Result<Vec<Mark>, LayoutError> {
        let slices = angular_slices(categories)?;
        Ok((0..slices.len())
            .flat_map(|i| self.render_item(&slices, i).into_marks())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn scenario() -> Vec<Category> {
        vec![
            Category::new("A", 10.0),
            Category::new("B", 20.0),
            Category::new("C", 30.0),
        ]
    }

    fn layout() -> DotLayout {
        DotLayout::for_view(
            Size::new(500.0, 500.0),
            RadiusRange::default(),
            DEFAULT_DOT_DIVISOR,
        )
    }

    #[test]
    fn view_derivation_matches_panel_sizing() {
        let l = layout();
        assert_eq!(l.center, Point::new(250.0, 250.0), "centered");
        assert_eq!((l.inner_radius, l.outer_radius), (75.0, 200.0), "30%..80%");
        assert_eq!(l.dot_diameter, 10.0, "500 / 50");
        assert_eq!(l.pitch(), 13.0, "diameter plus gap");
    }

    #[test]
    fn layout_is_idempotent() {
        let l = layout();
        let a = l.layout(&scenario()).unwrap();
        let b = l.layout(&scenario()).unwrap();
        assert_eq!(a, b, "pure function of its input");
        assert!(!a.is_empty(), "scenario has dots");
    }

    #[test]
    fn dots_are_colored_and_grouped_by_category() {
        let l = layout();
        let dots = l.layout(&scenario()).unwrap();
        let palette = Palette::default();
        let mut last_category = 0;
        for dot in &dots {
            let category = (0..3)
                .find(|i| palette.color(*i) == dot.color)
                .expect("color comes from the palette");
            assert!(category >= last_category, "category order is preserved");
            last_category = category;
            assert_eq!(dot.radius, 5.0, "radius is half the diameter");
        }
    }

    #[test]
    fn dot_counts_follow_value_shares() {
        let l = layout();
        let slices = angular_slices(&scenario()).unwrap();
        let counts: Vec<usize> = (0..3).map(|i| l.render_item(&slices, i).len()).collect();
        let seats: usize = l.packer().rings().map(|r| r.seats).sum();
        assert_eq!(counts.iter().sum::<usize>(), seats, "all seats are used");
        let rings = l.packer().rings().count();
        for (count, share) in counts.iter().zip([1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0]) {
            let expected = share * seats as f64;
            assert!(
                (*count as f64 - expected).abs() <= rings as f64,
                "count {count} should be within one seat per ring of {expected}"
            );
        }
    }

    #[test]
    fn render_item_ids_are_stable_and_distinct() {
        let l = layout();
        let slices = angular_slices(&scenario()).unwrap();
        let group = l.render_item(&slices, 1);
        assert_eq!(group.item, 1, "group remembers its item");
        let mut ids: Vec<_> = group.marks.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), group.len(), "ids are unique");
        assert_eq!(group, l.render_item(&slices, 1), "same input, same group");
        assert!(
            l.render_item(&slices, 7).is_empty(),
            "unknown item is empty"
        );
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert_eq!(layout().layout(&[]), Err(LayoutError::Empty), "no dots");
    }

    #[test]
    fn dots_stay_in_the_annulus() {
        let l = layout();
        for dot in l.layout(&scenario()).unwrap() {
            let d = (dot.center - l.center).hypot();
            assert!(
                d >= l.inner_radius - 1e-9 && d < l.outer_radius + l.pitch(),
                "distance {d}"
            );
        }
    }
}
