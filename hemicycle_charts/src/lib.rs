// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportion chart building blocks that generate `hemicycle_core` marks.
//!
//! A dataset is a list of [`Category`] values. Every chart starts by cutting the full circle
//! into [`AngularSlice`]s proportional to those values, then draws each slice either as a pie
//! sector ([`PieLayout`]) or as a block of seats packed into concentric rings ([`DotLayout`],
//! built on [`pack_arc`]).
//!
//! Everything here is a pure function of its inputs: the same categories and view produce the
//! same marks, with the same ids, every time.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod category;
mod dot_layout;
#[cfg(not(feature = "std"))]
mod float;
mod legend;
mod pack;
mod palette;
mod pie_layout;
mod radius;
mod sector_mark;
mod slice;
mod z_order;

pub use category::{Category, ColumnLengthMismatch, UNKNOWN_NAME};
pub use dot_layout::{DEFAULT_DOT_DIVISOR, DEFAULT_DOT_GAP, Dot, DotLayout};
pub use legend::{HeuristicTextMeasurer, LegendItem, LegendSwatches, TextMeasurer};
pub use pack::{ArcPacker, Ring, SEAT_TOLERANCE, pack_arc};
pub use palette::Palette;
pub use pie_layout::{PieKind, PieLayout};
pub use radius::{Length, RadiusRange};
pub use sector_mark::{SectorMarkSpec, StrokeStyle};
pub use slice::{AngularSlice, LayoutError, ORIGIN_ANGLE, angular_slices, equal_slices};
pub use z_order::*;
