// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-chart configuration.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use core::time::Duration;

use hemicycle_charts::{
    Category, DEFAULT_DOT_DIVISOR, DEFAULT_DOT_GAP, Palette, PieKind, RadiusRange,
};
use peniko::Color;

use crate::option::{
    ChartOption, DotsSeries, LegendOption, PieSeries, Representation, SeriesOption,
};

/// Default series identity shared by both representations.
pub const DEFAULT_SERIES_ID: &str = "distribution";

/// Background and text colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// View background.
    pub fn background(self) -> Color {
        match self {
            Self::Dark => Color::from_rgb8(0x10, 0x0c, 0x2a),
            Self::Light => Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }

    /// Legend text.
    pub fn foreground(self) -> Color {
        match self {
            Self::Dark => Color::from_rgb8(0xb9, 0xb8, 0xce),
            Self::Light => Color::from_rgb8(0x33, 0x33, 0x33),
        }
    }
}

/// How one proportion chart looks and behaves.
///
/// Pie, donut and rose charts are the same renderer with a different [`PieKind`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartOptions {
    /// Sector shape of the pie representation.
    pub kind: PieKind,
    /// Colors of the view.
    pub theme: Theme,
    /// Radius range shared by both representations.
    pub radius: RadiusRange,
    /// Category colors.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub palette: Palette,
    /// Time between representation switches.
    pub toggle_period: Duration,
    /// Animation duration of a switch.
    pub transition: Duration,
    /// Whether a legend is drawn.
    pub legend: bool,
    /// Legend font size.
    pub legend_font_size: f64,
    /// Smaller view side divided by this gives the dot diameter.
    pub dot_divisor: f64,
    /// Gap added to the dot diameter to get the seat pitch.
    pub dot_gap: f64,
    /// Series identity.
    pub series_id: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            kind: PieKind::Donut,
            theme: Theme::Dark,
            radius: RadiusRange::default(),
            palette: Palette::default(),
            toggle_period: Duration::from_secs(2),
            transition: Duration::from_millis(1000),
            legend: false,
            legend_font_size: 12.0,
            dot_divisor: DEFAULT_DOT_DIVISOR,
            dot_gap: DEFAULT_DOT_GAP,
            series_id: DEFAULT_SERIES_ID.into(),
        }
    }
}

impl ChartOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sector shape.
    pub fn with_kind(mut self, kind: PieKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the radius range.
    pub fn with_radius(mut self, radius: RadiusRange) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the time between switches.
    pub fn with_toggle_period(mut self, period: Duration) -> Self {
        self.toggle_period = period;
        self
    }

    /// Sets the switch animation duration.
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Turns the legend on or off.
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Sets the dot diameter divisor.
    pub fn with_dot_divisor(mut self, dot_divisor: f64) -> Self {
        self.dot_divisor = dot_divisor;
        self
    }

    /// Sets the gap between dots.
    pub fn with_dot_gap(mut self, dot_gap: f64) -> Self {
        self.dot_gap = dot_gap;
        self
    }

    /// Sets the series identity.
    pub fn with_series_id(mut self, series_id: impl Into<String>) -> Self {
        self.series_id = series_id.into();
        self
    }

    /// The pie option for `data`.
    pub fn pie_option(&self, data: &[Category]) -> ChartOption {
        self.wrap(SeriesOption::Pie(PieSeries {
            kind: self.kind,
            radius: self.radius,
            palette: self.palette.clone(),
            animation_duration_update: self.transition,
            ..PieSeries::new(self.series_id.clone(), data.to_vec())
        }))
    }

    /// The dots option for `data`.
    pub fn dots_option(&self, data: &[Category]) -> ChartOption {
        self.wrap(SeriesOption::Dots(DotsSeries {
            radius: self.radius,
            palette: self.palette.clone(),
            dot_divisor: self.dot_divisor,
            dot_gap: self.dot_gap,
            animation_duration_update: self.transition,
            ..DotsSeries::new(self.series_id.clone(), data.to_vec())
        }))
    }

    /// The option drawing `data` as `representation`.
    pub fn option_for(&self, representation: Representation, data: &[Category]) -> ChartOption {
        match representation {
            Representation::Pie => self.pie_option(data),
            Representation::Dots => self.dots_option(data),
        }
    }

    fn wrap(&self, series: SeriesOption) -> ChartOption {
        ChartOption {
            background: self.theme.background(),
            legend: self.legend.then(|| LegendOption {
                text_fill: self.theme.foreground(),
                font_size: self.legend_font_size,
            }),
            series: vec![series],
        }
    }
}
