// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cutting the full circle into per-category angular slices.
//!
//! Angles are radians in screen space (y down), so increasing angle runs clockwise. Slices
//! start at 12 o'clock ([`ORIGIN_ANGLE`]).

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use crate::category::Category;

/// Angle of the first slice boundary (12 o'clock).
pub const ORIGIN_ANGLE: f64 = -FRAC_PI_2;

/// The angular interval `[start_angle, end_angle)` owned by one category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularSlice {
    /// Index of the category in the input list.
    pub category_index: usize,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

impl AngularSlice {
    /// The angular width of this slice.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Reasons a dataset cannot be laid out.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// There are no categories.
    #[error("no categories to lay out")]
    Empty,
    /// Every category value is zero, so no proportion is defined.
    #[error("category values sum to zero")]
    ZeroTotal,
    /// A category value is negative or not finite.
    #[error("category {index} has invalid value {value}")]
    InvalidValue {
        /// Index of the offending category.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}

/// Checks that `categories` can be sliced and returns their total.
pub(crate) fn checked_total(categories: &[Category]) -> Result<f64, LayoutError> {
    if categories.is_empty() {
        return Err(LayoutError::Empty);
    }
    let mut total = 0.0;
    for (index, c) in categories.iter().enumerate() {
        if !c.value.is_finite() || c.value < 0.0 {
            return Err(LayoutError::InvalidValue {
                index,
                value: c.value,
            });
        }
        total += c.value;
    }
    if total <= 0.0 {
        return Err(LayoutError::ZeroTotal);
    }
    Ok(total)
}

/// Allocates each category a share of the full circle proportional to its value.
///
/// Slices are contiguous, follow input order, and the last one ends exactly at
/// `ORIGIN_ANGLE + TAU` regardless of rounding in the running sum.
pub fn angular_slices(categories: &[Category]) -> Result<Vec<AngularSlice>, LayoutError> {
    let total = checked_total(categories)?;
    let last = categories.len() - 1;
    let mut cursor = ORIGIN_ANGLE;
    Ok(categories
        .iter()
        .enumerate()
        .map(|(category_index, c)| {
            let start_angle = cursor;
            cursor += c.value / total * TAU;
            let end_angle = if category_index == last {
                ORIGIN_ANGLE + TAU
            } else {
                cursor
            };
            AngularSlice {
                category_index,
                start_angle,
                end_angle,
            }
        })
        .collect())
}

/// Cuts the full circle into `count` equal slices (rose charts).
pub fn equal_slices(count: usize) -> Vec<AngularSlice> {
    let step = TAU / count as f64;
    (0..count)
        .map(|i| AngularSlice {
            category_index: i,
            start_angle: ORIGIN_ANGLE + i as f64 * step,
            end_angle: if i + 1 == count {
                ORIGIN_ANGLE + TAU
            } else {
                ORIGIN_ANGLE + (i + 1) as f64 * step
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::PI;

    use super::*;

    fn cats(values: &[f64]) -> Vec<Category> {
        values.iter().map(|v| Category::new("c", *v)).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn spans_follow_value_ratios_from_twelve_o_clock() {
        let slices = angular_slices(&cats(&[10.0, 20.0, 30.0])).unwrap();
        let rel: Vec<(f64, f64)> = slices
            .iter()
            .map(|s| (s.start_angle - ORIGIN_ANGLE, s.end_angle - ORIGIN_ANGLE))
            .collect();
        let expected = [(0.0, PI / 3.0), (PI / 3.0, PI), (PI, 2.0 * PI)];
        for (got, want) in rel.iter().zip(expected) {
            assert!(
                close(got.0, want.0) && close(got.1, want.1),
                "slice {got:?} should be {want:?}"
            );
        }
    }

    #[test]
    fn slices_are_contiguous_and_close_the_circle() {
        let slices = angular_slices(&cats(&[0.3, 1.7, 0.0, 4.1, 2.2])).unwrap();
        assert_eq!(slices[0].start_angle, ORIGIN_ANGLE, "starts at origin");
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle, "no gaps");
            assert!(
                pair[0].category_index < pair[1].category_index,
                "input order"
            );
        }
        assert_eq!(
            slices.last().unwrap().end_angle,
            ORIGIN_ANGLE + TAU,
            "closes exactly"
        );
        let sum: f64 = slices.iter().map(AngularSlice::span).sum();
        assert!(close(sum, TAU), "spans sum to a full turn, got {sum}");
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert_eq!(angular_slices(&[]), Err(LayoutError::Empty), "empty");
        assert_eq!(
            angular_slices(&cats(&[0.0, 0.0])),
            Err(LayoutError::ZeroTotal),
            "zero total"
        );
        assert!(
            matches!(
                angular_slices(&cats(&[1.0, -2.0])),
                Err(LayoutError::InvalidValue { index: 1, .. })
            ),
            "negative value"
        );
        assert!(
            matches!(
                angular_slices(&cats(&[f64::NAN])),
                Err(LayoutError::InvalidValue { index: 0, .. })
            ),
            "NaN value"
        );
    }

    #[test]
    fn equal_slices_share_the_circle() {
        let slices = equal_slices(4);
        assert_eq!(slices.len(), 4, "one slice per item");
        assert!(
            slices.iter().all(|s| close(s.span(), TAU / 4.0)),
            "all spans equal"
        );
        assert!(equal_slices(0).is_empty(), "no items, no slices");
        assert_eq!(
            slices[3].end_angle,
            ORIGIN_ANGLE + TAU,
            "last slice closes exactly"
        );
    }
}
