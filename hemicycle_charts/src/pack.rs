// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing dots into concentric arcs ("parliament" seating).
//!
//! The annulus `[inner_radius, outer_radius]` is cut into rings spaced `pitch` apart. Each
//! ring is divided into `round(total_angle * r / pitch)` equal seats around the *whole*
//! circle, so seat spacing along the arc stays close to `pitch` on every ring and is
//! independent of how wide any one slice is. Rounding the seat count first and deriving the
//! step from it keeps a ring's seats from drifting around the circle.
//!
//! A slice `[start, end)` owns the seats whose index lies in
//! `[seat_index(start), seat_index(end))`. Adjacent slices share a boundary and therefore a
//! boundary index, so every seat of a ring belongs to exactly one slice. A seat that falls on
//! a boundary belongs to the slice that starts there.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Seat-index tolerance when flooring a boundary onto a ring.
///
/// Boundaries that land on a seat up to rounding error snap onto that seat.
pub const SEAT_TOLERANCE: f64 = 1e-6;

/// One concentric row of seats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Ring radius.
    pub radius: f64,
    /// Seats around the full `total_angle`.
    pub seats: usize,
    /// Arc length between neighboring seats.
    pub step: f64,
}

impl Ring {
    /// Index of the first seat at or after `angle` (see [`SEAT_TOLERANCE`]).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "seat indices are bounded by the seat count of a ring"
    )]
    pub fn seat_index(&self, angle: f64) -> i64 {
        (angle * self.radius / self.step + SEAT_TOLERANCE).floor() as i64
    }

    /// Angle of seat `index`.
    pub fn seat_angle(&self, index: i64) -> f64 {
        index as f64 * self.step / self.radius
    }

    /// Position of seat `index` relative to the ring center.
    pub fn seat_point(&self, index: i64) -> Point {
        let angle = self.seat_angle(index);
        Point::new(self.radius * angle.cos(), self.radius * angle.sin())
    }
}

/// Shared ring parameters for packing several slices of one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPacker {
    /// Angle normalizing seat density, normally a full turn.
    pub total_angle: f64,
    /// Radius of the innermost ring.
    pub inner_radius: f64,
    /// Outer bound of the annulus.
    pub outer_radius: f64,
    /// Target center-to-center spacing, both between rings and along a ring.
    pub pitch: f64,
}

impl ArcPacker {
    /// Creates a packer over a full turn.
    pub fn new(inner_radius: f64, outer_radius: f64, pitch: f64) -> Self {
        Self {
            total_angle: TAU,
            inner_radius,
            outer_radius,
            pitch,
        }
    }

    /// Sets the normalizing angle.
    pub fn with_total_angle(mut self, total_angle: f64) -> Self {
        self.total_angle = total_angle;
        self
    }

    fn is_valid(&self) -> bool {
        self.total_angle.is_finite()
            && self.total_angle > 0.0
            && self.inner_radius.is_finite()
            && self.outer_radius.is_finite()
            && self.pitch.is_finite()
            && self.pitch > 0.0
    }

    /// Number of rings, `ceil((outer - inner) / pitch)`; zero for an empty or inverted annulus.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the row count is a small positive integer by construction"
    )]
    pub fn row_count(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        let rows = ((self.outer_radius - self.inner_radius) / self.pitch).ceil();
        if rows > 0.0 { rows as usize } else { 0 }
    }

    /// Rings from the innermost outward. Rings too small to hold a seat are skipped.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "seat counts are small positive integers by construction"
    )]
    pub fn rings(&self) -> impl Iterator<Item = Ring> + '_ {
        (0..self.row_count()).filter_map(move |i| {
            let radius = self.inner_radius + i as f64 * self.pitch;
            let seats = (self.total_angle * radius / self.pitch).round();
            if seats < 1.0 {
                return None;
            }
            Some(Ring {
                radius,
                seats: seats as usize,
                step: self.total_angle * radius / seats,
            })
        })
    }

    /// Packs the slice `[start_angle, end_angle)`.
    ///
    /// Points are relative to the packing center, ordered by ring (inner first) and then by
    /// increasing angle. Degenerate inputs produce no points.
    ///
    /// Both boundaries are floored onto each ring's seat grid, so the first point of a ring
    /// may sit up to one seat step *before* `start_angle`. Points never pass `end_angle`.
    pub fn pack(&self, start_angle: f64, end_angle: f64) -> Vec<Point> {
        let mut out = Vec::new();
        if !start_angle.is_finite() || !end_angle.is_finite() || start_angle >= end_angle {
            return out;
        }
        for ring in self.rings() {
            let first = ring.seat_index(start_angle);
            let last = ring.seat_index(end_angle);
            out.extend((first..last).map(|j| ring.seat_point(j)));
        }
        out
    }
}

/// Packs one slice: see [`ArcPacker::pack`].
pub fn pack_arc(
    start_angle: f64,
    end_angle: f64,
    total_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    pitch: f64,
) -> Vec<Point> {
    ArcPacker::new(inner_radius, outer_radius, pitch)
        .with_total_angle(total_angle)
        .pack(start_angle, end_angle)
}
