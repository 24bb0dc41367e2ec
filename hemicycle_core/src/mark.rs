// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark identities and payloads.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::Brush;

/// Stable identity of a mark across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id for part `part` of data item `item` within a namespace.
    ///
    /// Layout: 16 bits of namespace, 16 bits of item, 32 bits of part. Items and parts wrap
    /// beyond those widths.
    pub fn for_item(namespace: u16, item: usize, part: usize) -> Self {
        let item = (item as u64) & 0xFFFF;
        let part = (part as u64) & 0xFFFF_FFFF;
        Self((u64::from(namespace) << 48) | (item << 32) | part)
    }

    /// Returns the namespace this id was derived in (see [`MarkId::for_item`]).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the shift leaves exactly 16 significant bits"
    )]
    pub fn namespace(self) -> u16 {
        (self.0 >> 48) as u16
    }
}

/// The primitive kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A filled circle.
    Circle,
    /// A filled and optionally stroked path.
    Path,
    /// A filled axis-aligned rectangle.
    Rect,
    /// A single line of text.
    Text,
}

/// Horizontal text anchoring relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the text.
    Start,
    /// The position is the middle of the text.
    Middle,
    /// The position is the end of the text.
    End,
}

/// Vertical text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is on the alphabetic baseline.
    Alphabetic,
    /// The position is at the vertical middle of the em box.
    Middle,
    /// The position is on the hanging baseline.
    Hanging,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleMark {
    /// Circle geometry in scene coordinates.
    pub circle: Circle,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled path with an optional stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint, ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width; zero disables stroking.
    pub stroke_width: f64,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position.
    pub pos: Point,
    /// The text content.
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
}

/// The resolved geometry and paint of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// See [`CircleMark`].
    Circle(CircleMark),
    /// See [`PathMark`].
    Path(PathMark),
    /// See [`RectMark`].
    Rect(RectMark),
    /// See [`TextMark`].
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the primitive kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Circle(_) => MarkKind::Circle,
            Self::Path(_) => MarkKind::Path,
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, or `None` for text (which needs shaping to be measured).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Circle(c) => Some(c.circle.bounding_box()),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
        }
    }
}

/// A stable-identity mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark at z-index 0.
    pub fn new(id: MarkId, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index: 0,
            payload,
        }
    }

    /// Creates a filled circle mark.
    pub fn circle(id: MarkId, center: Point, radius: f64, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            MarkPayload::Circle(CircleMark {
                circle: Circle::new(center, radius),
                fill: fill.into(),
            }),
        )
    }

    /// Creates a filled rectangle mark.
    pub fn rect(id: MarkId, rect: Rect, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            MarkPayload::Rect(RectMark {
                rect,
                fill: fill.into(),
            }),
        )
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the primitive kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}

/// The marks drawn for one data item.
///
/// A group has no geometry of its own; it only keeps per-item output together until it is
/// flattened into a frame's mark list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkGroup {
    /// Index of the data item this group belongs to.
    pub item: usize,
    /// Child marks in paint order.
    pub marks: Vec<Mark>,
}

impl MarkGroup {
    /// Creates an empty group for `item`.
    pub fn new(item: usize) -> Self {
        Self {
            item,
            marks: Vec::new(),
        }
    }

    /// Number of child marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Consumes the group, returning its children.
    pub fn into_marks(self) -> Vec<Mark> {
        self.marks
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn item_ids_pack_namespace_item_and_part() {
        let id = MarkId::for_item(0x12, 3, 7);
        assert_eq!(id.namespace(), 0x12, "namespace survives packing");
        assert_ne!(id, MarkId::for_item(0x12, 3, 8), "parts are distinct");
        assert_ne!(id, MarkId::for_item(0x12, 4, 7), "items are distinct");
        assert_ne!(id, MarkId::for_item(0x13, 3, 7), "namespaces are distinct");
    }

    #[test]
    fn circle_bounds_cover_the_disc() {
        let mark = Mark::circle(MarkId(1), Point::new(10.0, 20.0), 5.0, css::TOMATO);
        assert_eq!(mark.kind(), MarkKind::Circle, "circle constructor");
        assert_eq!(
            mark.payload.bounds(),
            Some(Rect::new(5.0, 15.0, 15.0, 25.0)),
            "bounds are the circle's bounding box"
        );
    }
}
