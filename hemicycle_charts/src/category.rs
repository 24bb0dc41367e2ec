// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Label used when a category has no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One labeled value of a proportion dataset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    /// Display name.
    pub name: String,
    /// Non-negative magnitude.
    pub value: f64,
}

impl Category {
    /// Creates a category.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Joins a value column and a label column index-for-index.
    ///
    /// A missing value reads as `0` and a missing label as [`UNKNOWN_NAME`]. The columns must
    /// have the same length.
    pub fn from_columns(
        values: &[Option<f64>],
        names: &[Option<String>],
    ) -> Result<Vec<Self>, ColumnLengthMismatch> {
        if values.len() != names.len() {
            return Err(ColumnLengthMismatch {
                values: values.len(),
                labels: names.len(),
            });
        }
        Ok(values
            .iter()
            .zip(names)
            .map(|(value, name)| Self {
                name: name.clone().unwrap_or_else(|| UNKNOWN_NAME.into()),
                value: value.unwrap_or(0.0),
            })
            .collect())
    }
}

/// The value and label columns of a dataset differ in length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("value column has {values} entries but label column has {labels}")]
pub struct ColumnLengthMismatch {
    /// Length of the value column.
    pub values: usize,
    /// Length of the label column.
    pub labels: usize,
}
