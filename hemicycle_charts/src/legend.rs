// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A single row of color swatches with labels, centered along the bottom edge of the view.
//! Text is not shaped here; widths come from a [`TextMeasurer`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hemicycle_core::{Mark, MarkId, MarkPayload, TextAnchor, TextBaseline, TextMark};
use kurbo::{Rect, Size};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::category::Category;
use crate::palette::Palette;
use crate::z_order;

/// Mark id namespace used for legend marks by default.
const LEGEND_NAMESPACE: u16 = 0x1E;

/// A minimal text measurement interface used for legend layout.
pub trait TextMeasurer {
    /// Returns `(width, height)` in scene units.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Assumes an average glyph width of 0.6em and a height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// A legend entry.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch fill.
    pub fill: Brush,
}

impl LegendItem {
    /// A solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// A horizontal legend: swatch + label per item, left to right.
#[derive(Clone, Debug)]
pub struct LegendSwatches {
    /// Mark id namespace.
    pub namespace: u16,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Gap between a swatch and its label.
    pub label_dx: f64,
    /// Gap between consecutive items.
    pub item_gap: f64,
    /// Distance from the bottom edge of the view.
    pub bottom_margin: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label paint.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatches {
    /// Creates a legend with default metrics.
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            namespace: LEGEND_NAMESPACE,
            swatch_size: 10.0,
            label_dx: 5.0,
            item_gap: 12.0,
            bottom_margin: 6.0,
            font_size: 12.0,
            text_fill: css::WHITE.into(),
            items,
        }
    }

    /// One item per category, colored like the chart.
    pub fn for_categories(categories: &[Category], palette: &Palette) -> Self {
        Self::new(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| LegendItem::solid(c.name.clone(), palette.color(i)))
                .collect(),
        )
    }

    /// Sets the label paint.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    fn item_widths(&self, measurer: &dyn TextMeasurer) -> Vec<f64> {
        self.items
            .iter()
            .map(|item| {
                let (w, _) = measurer.measure(&item.label, self.font_size);
                self.swatch_size + self.label_dx + w
            })
            .collect()
    }

    /// The size of the whole legend row.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let widths = self.item_widths(measurer);
        if widths.is_empty() {
            return Size::ZERO;
        }
        let gaps = self.item_gap * (widths.len() - 1) as f64;
        Size::new(widths.iter().sum::<f64>() + gaps, self.row_height())
    }

    /// Where the legend sits inside `view`: horizontally centered, at the bottom.
    pub fn bounds_in(&self, view: Size, measurer: &dyn TextMeasurer) -> Rect {
        let size = self.measure(measurer);
        let x0 = (view.width - size.width) * 0.5;
        let y1 = view.height - self.bottom_margin;
        Rect::new(x0, y1 - size.height, x0 + size.width, y1)
    }

    /// Swatch and label marks placed inside `view`.
    pub fn marks(&self, view: Size, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let bounds = self.bounds_in(view, measurer);
        let row_height = self.row_height();
        let swatch_y = bounds.y0 + (row_height - self.swatch_size) * 0.5;
        let label_y = bounds.y0 + row_height * 0.5;

        let mut out = Vec::with_capacity(self.items.len() * 2);
        let mut x = bounds.x0;
        for ((i, item), width) in self
            .items
            .iter()
            .enumerate()
            .zip(self.item_widths(measurer))
        {
            out.push(
                Mark::rect(
                    MarkId::for_item(self.namespace, i, 0),
                    Rect::new(
                        x,
                        swatch_y,
                        x + self.swatch_size,
                        swatch_y + self.swatch_size,
                    ),
                    item.fill.clone(),
                )
                .with_z_index(z_order::LEGEND_SWATCHES),
            );
            out.push(
                Mark::new(
                    MarkId::for_item(self.namespace, i, 1),
                    MarkPayload::Text(TextMark {
                        pos: (x + self.swatch_size + self.label_dx, label_y).into(),
                        text: item.label.clone(),
                        font_size: self.font_size,
                        fill: self.text_fill.clone(),
                        anchor: TextAnchor::Start,
                        baseline: TextBaseline::Middle,
                    }),
                )
                .with_z_index(z_order::LEGEND_LABELS),
            );
            x += width + self.item_gap;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use hemicycle_core::MarkKind;

    use super::*;

    fn legend() -> LegendSwatches {
        LegendSwatches::new(vec![
            LegendItem::solid("A", css::BLACK),
            LegendItem::solid("BBBB", css::BLACK),
        ])
    }

    #[test]
    fn measure_sums_items_and_gaps() {
        let size = legend().measure(&HeuristicTextMeasurer);
        // Item widths: 10 + 5 + 7.2 and 10 + 5 + 28.8, plus one 12 gap.
        assert!((size.width - 78.0).abs() < 1e-9, "width {}", size.width);
        assert_eq!(size.height, 12.0, "row height is the font size");
    }

    #[test]
    fn legend_is_centered_at_the_bottom() {
        let view = Size::new(200.0, 100.0);
        let b = legend().bounds_in(view, &HeuristicTextMeasurer);
        assert!((b.x0 - 61.0).abs() < 1e-9, "centered, x0 = {}", b.x0);
        assert_eq!(b.y1, 94.0, "bottom margin");
    }

    #[test]
    fn one_swatch_and_one_label_per_item() {
        let marks = legend().marks(Size::new(200.0, 100.0), &HeuristicTextMeasurer);
        let kinds: Vec<_> = marks.iter().map(Mark::kind).collect();
        assert_eq!(
            kinds,
            vec![
                MarkKind::Rect,
                MarkKind::Text,
                MarkKind::Rect,
                MarkKind::Text,
            ],
            "swatch then label"
        );
        let MarkPayload::Text(label) = &marks[3].payload else {
            panic!("expected a label");
        };
        assert_eq!(label.text, "BBBB", "labels keep their text");
    }

    #[test]
    fn empty_legend_has_no_size() {
        let size = LegendSwatches::new(Vec::new()).measure(&HeuristicTextMeasurer);
        assert_eq!(size, Size::ZERO, "nothing to draw");
    }
}
