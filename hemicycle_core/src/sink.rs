// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering seam.
//!
//! Chart code never draws. It hands a [`Frame`] to whatever [`DrawSink`] the host injected:
//! an SVG writer, a GPU renderer, or a test recorder.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use hashbrown::HashMap;
use peniko::Color;

use crate::mark::{MarkId, MarkPayload};
use crate::scene::MarkDiff;

/// One presentation step.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Background fill of the whole view.
    pub background: Color,
    /// Changes since the previous frame.
    pub diffs: &'a [MarkDiff],
    /// When set, the sink may animate from the previous frame to this one over this duration.
    pub transition: Option<Duration>,
}

/// Receives frames from a chart.
pub trait DrawSink {
    /// Presents one frame.
    fn present(&mut self, frame: &Frame<'_>);
}

impl<S: DrawSink + ?Sized> DrawSink for &mut S {
    fn present(&mut self, frame: &Frame<'_>) {
        (**self).present(frame);
    }
}

/// Applies diffs to keep a copy of the marks currently on screen.
///
/// Useful for sinks that redraw everything each frame (SVG, immediate-mode renderers).
#[derive(Debug, Default)]
pub struct RetainedMarks {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl RetainedMarks {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a batch of diffs.
    pub fn apply(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id, z_index, new, ..
                } => {
                    self.marks.insert(*id, (*z_index, (**new).clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    ..
                } => {
                    self.marks.insert(*id, (*new_z_index, (**new).clone()));
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained marks in paint order: by `(z_index, id)`.
    pub fn in_paint_order(&self) -> Vec<(MarkId, &MarkPayload)> {
        let mut out: Vec<(i32, MarkId, &MarkPayload)> = self
            .marks
            .iter()
            .map(|(id, (z, payload))| (*z, *id, payload))
            .collect();
        out.sort_by_key(|(z, id, _)| (*z, *id));
        out.into_iter().map(|(_, id, p)| (id, p)).collect()
    }
}

impl DrawSink for RetainedMarks {
    fn present(&mut self, frame: &Frame<'_>) {
        self.apply(frame.diffs);
    }
}
