// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative chart configuration handed to a backend.
//!
//! A [`ChartOption`] says *what* is on screen: background, legend and one series per dataset.
//! Lowering it into marks for a given view is deterministic, so a backend can diff the result
//! of two options by mark id.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use hemicycle_charts::{
    Category, DEFAULT_DOT_DIVISOR, DEFAULT_DOT_GAP, DotLayout, LayoutError, LegendSwatches,
    Palette, PieKind, PieLayout, RadiusRange, TextMeasurer,
};
use hemicycle_core::Mark;
use kurbo::Size;
use peniko::Color;

/// Which rendering of the dataset is live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Representation {
    /// Pie, donut or rose sectors.
    #[default]
    Pie,
    /// Packed dots in concentric rings.
    Dots,
}

impl Representation {
    /// The representation a toggle switches to.
    pub fn other(self) -> Self {
        match self {
            Self::Pie => Self::Dots,
            Self::Dots => Self::Pie,
        }
    }
}

/// A sector series.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSeries {
    /// Identity shared with the dots series so the host can morph one into the other.
    pub id: String,
    /// Sector shape.
    pub kind: PieKind,
    /// Radius range.
    pub radius: RadiusRange,
    /// Category colors.
    pub palette: Palette,
    /// Whether changes animate between representations.
    pub universal_transition: bool,
    /// Transition duration for updates.
    pub animation_duration_update: Duration,
    /// The dataset.
    pub data: Vec<Category>,
}

/// A packed-dot series.
#[derive(Clone, Debug, PartialEq)]
pub struct DotsSeries {
    /// Identity shared with the pie series.
    pub id: String,
    /// Radius range of the ring annulus.
    pub radius: RadiusRange,
    /// Category colors.
    pub palette: Palette,
    /// Smaller view side divided by this gives the dot diameter.
    pub dot_divisor: f64,
    /// Gap added to the dot diameter to get the seat pitch.
    pub dot_gap: f64,
    /// Whether changes animate between representations.
    pub universal_transition: bool,
    /// Transition duration for updates.
    pub animation_duration_update: Duration,
    /// The dataset.
    pub data: Vec<Category>,
}

/// One series of a chart option.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesOption {
    /// Sectors.
    Pie(PieSeries),
    /// Packed dots.
    Dots(DotsSeries),
}

impl SeriesOption {
    /// The series identity.
    pub fn id(&self) -> &str {
        match self {
            Self::Pie(s) => &s.id,
            Self::Dots(s) => &s.id,
        }
    }

    /// The representation this series draws.
    pub fn representation(&self) -> Representation {
        match self {
            Self::Pie(_) => Representation::Pie,
            Self::Dots(_) => Representation::Dots,
        }
    }

    /// The dataset.
    pub fn data(&self) -> &[Category] {
        match self {
            Self::Pie(s) => &s.data,
            Self::Dots(s) => &s.data,
        }
    }

    /// The category colors.
    pub fn palette(&self) -> &Palette {
        match self {
            Self::Pie(s) => &s.palette,
            Self::Dots(s) => &s.palette,
        }
    }

    /// The animation duration, if transitions are enabled.
    pub fn transition(&self) -> Option<Duration> {
        let (enabled, duration) = match self {
            Self::Pie(s) => (s.universal_transition, s.animation_duration_update),
            Self::Dots(s) => (s.universal_transition, s.animation_duration_update),
        };
        enabled.then_some(duration)
    }

    /// Marks for this series in `view`. An empty dataset draws nothing.
    pub fn marks(&self, view: Size) -> Result<Vec<Mark>, LayoutError> {
        if self.data().is_empty() {
            return Ok(Vec::new());
        }
        match self {
            Self::Pie(s) => PieLayout::for_view(view, s.radius, s.kind)
                .with_palette(s.palette.clone())
                .marks(&s.data),
            Self::Dots(s) => DotLayout::for_view(view, s.radius, s.dot_divisor)
                .with_dot_gap(s.dot_gap)
                .with_palette(s.palette.clone())
                .marks(&s.data),
        }
    }
}

/// Legend styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendOption {
    /// Label color.
    pub text_fill: Color,
    /// Label font size.
    pub font_size: f64,
}

/// Everything a backend needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOption {
    /// View background.
    pub background: Color,
    /// A legend for the first series, when set.
    pub legend: Option<LegendOption>,
    /// Series, drawn in order.
    pub series: Vec<SeriesOption>,
}

impl ChartOption {
    /// The representation of the first series.
    pub fn representation(&self) -> Option<Representation> {
        self.series.first().map(SeriesOption::representation)
    }

    /// The animation duration of the first series.
    pub fn transition(&self) -> Option<Duration> {
        self.series.first().and_then(SeriesOption::transition)
    }

    /// Folds `other` into `self`.
    ///
    /// Series are matched by id and replaced in place; unmatched series are appended. A legend
    /// in `other` replaces the current one, but an absent legend leaves it alone.
    pub fn merge(&mut self, other: Self) {
        self.background = other.background;
        if other.legend.is_some() {
            self.legend = other.legend;
        }
        for series in other.series {
            match self.series.iter_mut().find(|s| s.id() == series.id()) {
                Some(slot) => *slot = series,
                None => self.series.push(series),
            }
        }
    }

    /// Lowers the option into marks for `view`.
    pub fn marks(&self, view: Size, measurer: &dyn TextMeasurer) -> Result<Vec<Mark>, LayoutError> {
        let mut out = Vec::new();
        for series in &self.series {
            out.extend(series.marks(view)?);
        }
        let first = self.series.first().filter(|s| !s.data().is_empty());
        if let (Some(legend), Some(first)) = (self.legend, first) {
            let swatches = LegendSwatches::for_categories(first.data(), first.palette())
                .with_text_fill(legend.text_fill)
                .with_font_size(legend.font_size);
            out.extend(swatches.marks(view, measurer));
        }
        Ok(out)
    }
}

impl PieSeries {
    /// A donut series with default radius and animation.
    pub fn new(id: impl Into<String>, data: Vec<Category>) -> Self {
        Self {
            id: id.into(),
            kind: PieKind::default(),
            radius: RadiusRange::default(),
            palette: Palette::default(),
            universal_transition: true,
            animation_duration_update: Duration::from_millis(1000),
            data,
        }
    }
}

impl DotsSeries {
    /// A dots series with default sizing and animation.
    pub fn new(id: impl Into<String>, data: Vec<Category>) -> Self {
        Self {
            id: id.into(),
            radius: RadiusRange::default(),
            palette: Palette::default(),
            dot_divisor: DEFAULT_DOT_DIVISOR,
            dot_gap: DEFAULT_DOT_GAP,
            universal_transition: true,
            animation_duration_update: Duration::from_millis(1000),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use hemicycle_charts::HeuristicTextMeasurer;
    use hemicycle_core::MarkKind;
    use peniko::color::palette::css;

    use super::*;

    fn data() -> Vec<Category> {
        vec![Category::new("A", 1.0), Category::new("B", 3.0)]
    }

    fn option(series: SeriesOption) -> ChartOption {
        ChartOption {
            background: css::BLACK,
            legend: None,
            series: vec![series],
        }
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(
            Representation::Pie.other(),
            Representation::Dots,
            "pie to dots"
        );
        assert_eq!(
            Representation::Dots.other(),
            Representation::Pie,
            "dots to pie"
        );
    }

    #[test]
    fn empty_series_draws_nothing() {
        let opt = option(SeriesOption::Pie(PieSeries::new("distribution", Vec::new())));
        let marks = opt
            .marks(Size::new(100.0, 100.0), &HeuristicTextMeasurer)
            .unwrap();
        assert!(marks.is_empty(), "no data, no marks");
        assert_eq!(
            opt.representation(),
            Some(Representation::Pie),
            "still a pie"
        );
    }

    #[test]
    fn series_lower_to_their_mark_kinds() {
        let view = Size::new(300.0, 300.0);
        let pie = option(SeriesOption::Pie(PieSeries::new("d", data())));
        let dots = option(SeriesOption::Dots(DotsSeries::new("d", data())));
        let pie_marks = pie.marks(view, &HeuristicTextMeasurer).unwrap();
        let dot_marks = dots.marks(view, &HeuristicTextMeasurer).unwrap();
        assert_eq!(pie_marks.len(), 2, "one sector per category");
        assert!(
            pie_marks.iter().all(|m| m.kind() == MarkKind::Path),
            "sectors are paths"
        );
        assert!(dot_marks.len() > 2, "many dots");
        assert!(
            dot_marks.iter().all(|m| m.kind() == MarkKind::Circle),
            "dots are circles"
        );
    }

    #[test]
    fn legend_adds_swatches_and_labels() {
        let mut opt = option(SeriesOption::Pie(PieSeries::new("d", data())));
        opt.legend = Some(LegendOption {
            text_fill: css::WHITE,
            font_size: 12.0,
        });
        let marks = opt
            .marks(Size::new(300.0, 300.0), &HeuristicTextMeasurer)
            .unwrap();
        assert_eq!(marks.len(), 2 + 4, "two sectors and two legend items");
    }

    #[test]
    fn merge_replaces_series_by_id() {
        let mut opt = option(SeriesOption::Pie(PieSeries::new("d", Vec::new())));
        opt.merge(option(SeriesOption::Pie(PieSeries::new("d", data()))));
        assert_eq!(opt.series.len(), 1, "same id, same slot");
        assert_eq!(opt.series[0].data(), &data()[..], "data replaced");

        opt.merge(option(SeriesOption::Dots(DotsSeries::new("other", data()))));
        assert_eq!(opt.series.len(), 2, "new id is appended");
    }

    #[test]
    fn transitions_follow_the_flag() {
        let mut series = PieSeries::new("d", data());
        assert_eq!(
            SeriesOption::Pie(series.clone()).transition(),
            Some(Duration::from_millis(1000)),
            "animated by default"
        );
        series.universal_transition = false;
        assert_eq!(SeriesOption::Pie(series).transition(), None, "disabled");
    }
}
