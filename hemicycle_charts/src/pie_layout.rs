// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The aggregate (pie) representation of a proportion dataset.

extern crate alloc;

use alloc::vec::Vec;

use hemicycle_core::{Mark, MarkId};
use kurbo::{Point, Size};

use crate::category::Category;
use crate::palette::Palette;
use crate::radius::{RadiusRange, view_center};
use crate::sector_mark::{SectorMarkSpec, StrokeStyle};
use crate::slice::{LayoutError, angular_slices, checked_total, equal_slices};

/// Mark id namespace used for sectors by default.
const SECTOR_NAMESPACE: u16 = 0x5E;

/// How sectors are shaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieKind {
    /// Full wedges from the center; the inner radius is ignored.
    Pie,
    /// Ring sectors between the inner and outer radius.
    #[default]
    Donut,
    /// Equal angles; each sector's outer radius grows with its value.
    Rose,
}

/// Shared parameters for the sectors of one pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieLayout {
    /// Chart center in scene coordinates.
    pub center: Point,
    /// Inner radius, used by [`PieKind::Donut`] and [`PieKind::Rose`].
    pub inner_radius: f64,
    /// Outer radius (the largest sector's radius for [`PieKind::Rose`]).
    pub outer_radius: f64,
    /// Sector shape.
    pub kind: PieKind,
    /// Category colors.
    pub palette: Palette,
    /// Optional sector outline.
    pub stroke: Option<StrokeStyle>,
    /// Mark id namespace for generated sectors.
    pub namespace: u16,
}

impl PieLayout {
    /// Creates a layout with the default palette and no outline.
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64, kind: PieKind) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            kind,
            palette: Palette::default(),
            stroke: None,
            namespace: SECTOR_NAMESPACE,
        }
    }

    /// Derives a layout centered in `view`.
    pub fn for_view(view: Size, radius: RadiusRange, kind: PieKind) -> Self {
        let (inner, outer) = radius.resolve(view);
        Self::new(view_center(view), inner, outer, kind)
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the sector outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the mark id namespace.
    pub fn with_namespace(mut self, namespace: u16) -> Self {
        self.namespace = namespace;
        self
    }

    /// One sector per category, in input order.
    pub fn sectors(&self, categories: &[Category]) -> Result<Vec<SectorMarkSpec>, LayoutError> {
        let sector = |index: usize, inner: f64, outer: f64, start: f64, end: f64| {
            let mut spec = SectorMarkSpec::new(
                MarkId::for_item(self.namespace, index, 0),
                self.center,
                inner,
                outer,
                start,
                end,
            )
            .with_fill(self.palette.color(index));
            spec.stroke = self.stroke.clone();
            spec
        };

        match self.kind {
            PieKind::Pie | PieKind::Donut => {
                let inner = if self.kind == PieKind::Pie {
                    0.0
                } else {
                    self.inner_radius
                };
                Ok(angular_slices(categories)?
                    .iter()
                    .map(|s| {
                        sector(
                            s.category_index,
                            inner,
                            self.outer_radius,
                            s.start_angle,
                            s.end_angle,
                        )
                    })
                    .collect())
            }
            PieKind::Rose => {
                checked_total(categories)?;
                let max = categories.iter().map(|c| c.value).fold(0.0_f64, f64::max);
                let band = self.outer_radius - self.inner_radius;
                Ok(equal_slices(categories.len())
                    .iter()
                    .zip(categories)
                    .map(|(s, c)| {
                        let outer = self.inner_radius + band * c.value / max;
                        sector(
                            s.category_index,
                            self.inner_radius,
                            outer,
                            s.start_angle,
                            s.end_angle,
                        )
                    })
                    .collect())
            }
        }
    }

    /// Sector marks for every category.
    pub fn marks(&self, categories: &[Category]) -> Result<Vec<Mark>, LayoutError> {
        Ok(self
            .sectors(categories)?
            .iter()
            .map(SectorMarkSpec::mark)
            .collect())
    }
}
