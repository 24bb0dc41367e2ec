// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard panel glue for hemicycle proportion charts.
//!
//! A host panel mounts a [`ProportionChart`] on a [`ChartBackend`] (usually a
//! [`SceneBackend`] wrapping a `hemicycle_core::DrawSink`), forwards data refreshes as
//! [`PanelData`], and drives the toggle timer with elapsed time. The chart alternates between a
//! pie and a packed-dot rendering of the same dataset.
//!
//! ```
//! use core::time::Duration;
//!
//! use hemicycle_core::RetainedMarks;
//! use hemicycle_panel::{
//!     ChartOptions, PanelData, ProportionChart, Representation, SceneBackend,
//! };
//! use kurbo::Size;
//!
//! let backend = SceneBackend::new(RetainedMarks::new(), Size::new(400.0, 400.0));
//! let mut chart = ProportionChart::mount(Some(backend), ChartOptions::new()).unwrap();
//! chart
//!     .on_panel_update(&PanelData::from_columns([10.0, 20.0, 30.0], ["A", "B", "C"]))
//!     .unwrap();
//! chart.advance(Duration::from_secs(2)).unwrap();
//! assert_eq!(chart.representation(), Some(Representation::Dots));
//! ```
//!
//! Everything is single-threaded: events are handled one at a time, in order ([`ChartEvents`]).

#![no_std]

extern crate alloc;

mod backend;
mod chart;
mod config;
mod events;
mod interval;
mod option;
mod panel;

pub use backend::{ChartBackend, SceneBackend, SetOptionMode};
pub use chart::{ChartError, ProportionChart, TickOutcome};
pub use config::{ChartOptions, DEFAULT_SERIES_ID, Theme};
pub use events::{ChartEvent, ChartEvents, EventOutcome};
pub use interval::Interval;
pub use option::{ChartOption, DotsSeries, LegendOption, PieSeries, Representation, SeriesOption};
pub use panel::{DataFrame, Field, FieldValue, PanelData, PanelError};
