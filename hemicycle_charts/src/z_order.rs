// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Renderers sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Pie and donut sectors.
pub const SECTORS: i32 = 0;
/// Packed seat dots.
pub const DOTS: i32 = 20;
/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
