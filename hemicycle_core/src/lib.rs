// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark model for hemicycle charts.
//!
//! Chart code produces a flat list of [`Mark`]s per frame. Each mark has a stable [`MarkId`],
//! so a [`Scene`] can diff successive lists into enter/update/exit records ([`MarkDiff`]).
//! Renderers are never called directly: they implement [`DrawSink`] and receive a [`Frame`]
//! holding the diffs plus an optional transition duration.
//!
//! Shaping, rasterization and animation curves are out of scope; they belong to the sink.

#![no_std]

extern crate alloc;

mod mark;
mod scene;
mod sink;

pub use mark::{
    CircleMark, Mark, MarkGroup, MarkId, MarkKind, MarkPayload, PathMark, RectMark, TextAnchor,
    TextBaseline, TextMark,
};
pub use scene::{MarkDiff, Scene};
pub use sink::{DrawSink, Frame, RetainedMarks};
