// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-to-frame mark diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change between two successive frames.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that did not exist in the previous frame.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Primitive kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Bounds of the new payload, if known.
        bounds: Option<Rect>,
    },
    /// A mark whose payload or z-index changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// Primitive kind of the new payload.
        kind: MarkKind,
        /// Previous paint order.
        old_z_index: i32,
        /// New paint order.
        new_z_index: i32,
        /// Previous payload.
        old: Box<MarkPayload>,
        /// New payload.
        new: Box<MarkPayload>,
    },
    /// A mark that is no longer present.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Primitive kind.
        kind: MarkKind,
        /// The last payload seen for this mark.
        old: Box<MarkPayload>,
    },
}

impl MarkDiff {
    /// The id this diff refers to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The set of marks currently on screen.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of marks currently held.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are held.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a mark by id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Replaces the scene content with `marks` and returns what changed.
    ///
    /// Enter and update records follow the order of `marks`; exit records are sorted by id.
    /// Ids are expected to be unique within one frame: a repeated id replaces the earlier
    /// mark with that id.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut order: Vec<MarkId> = Vec::with_capacity(marks.len());
        let mut next: HashMap<MarkId, Mark> = HashMap::with_capacity(marks.len());
        for mark in marks {
            let id = mark.id;
            if next.insert(id, mark).is_none() {
                order.push(id);
            }
        }

        let mut diffs = Vec::new();
        for id in &order {
            let new = &next[id];
            match self.marks.get(id) {
                None => diffs.push(MarkDiff::Enter {
                    id: *id,
                    kind: new.kind(),
                    z_index: new.z_index,
                    new: Box::new(new.payload.clone()),
                    bounds: new.payload.bounds(),
                }),
                Some(old) if old.payload != new.payload || old.z_index != new.z_index => {
                    diffs.push(MarkDiff::Update {
                        id: *id,
                        kind: new.kind(),
                        old_z_index: old.z_index,
                        new_z_index: new.z_index,
                        old: Box::new(old.payload.clone()),
                        new: Box::new(new.payload.clone()),
                    });
                }
                Some(_) => {}
            }
        }

        let mut exits: Vec<&Mark> = self
            .marks
            .values()
            .filter(|m| !next.contains_key(&m.id))
            .collect();
        exits.sort_by_key(|m| m.id);
        diffs.extend(exits.into_iter().map(|m| MarkDiff::Exit {
            id: m.id,
            kind: m.kind(),
            old: Box::new(m.payload.clone()),
        }));

        self.marks = next;
        diffs
    }

    /// Removes every mark, returning exit records sorted by id.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        self.tick(Vec::new())
    }
}
