// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data handed over by the hosting dashboard panel.
//!
//! The host delivers query results as data frames of named columns. Proportion charts read the
//! first frame only: its first field holds the values and its second the labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hemicycle_charts::{Category, ColumnLengthMismatch};

/// One cell of a field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
    /// A missing cell.
    Null,
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A named column.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Cells, one per row.
    pub values: Vec<FieldValue>,
}

impl Field {
    /// Creates a field.
    pub fn new<V: Into<FieldValue>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A table of columns.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DataFrame {
    /// Columns in query order.
    pub fields: Vec<Field>,
}

/// Everything a panel receives on one data refresh.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelData {
    /// Query results.
    pub series: Vec<DataFrame>,
}

/// The panel data does not have the shape of a proportion dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// There is no data frame to read.
    #[error("panel data has no series")]
    MissingSeries,
    /// The value and label columns differ in length.
    #[error("value column has {values} entries but label column has {labels}")]
    LengthMismatch {
        /// Length of the value column.
        values: usize,
        /// Length of the label column.
        labels: usize,
    },
    /// A value cell holds text that is not a number.
    #[error("value at row {index} is not numeric")]
    NotNumeric {
        /// Row of the offending cell.
        index: usize,
    },
}

impl From<ColumnLengthMismatch> for PanelError {
    fn from(err: ColumnLengthMismatch) -> Self {
        Self::LengthMismatch {
            values: err.values,
            labels: err.labels,
        }
    }
}

impl PanelData {
    /// A single frame with a `value` column and a `name` column.
    pub fn from_columns<V, L>(
        values: impl IntoIterator<Item = V>,
        labels: impl IntoIterator<Item = L>,
    ) -> Self
    where
        V: Into<FieldValue>,
        L: Into<FieldValue>,
    {
        Self {
            series: alloc::vec![DataFrame {
                fields: alloc::vec![Field::new("value", values), Field::new("name", labels)],
            }],
        }
    }

    /// Extracts the categories of the first frame.
    ///
    /// A missing value or label field reads as an empty column. Null cells become `0` or
    /// the unknown label; numeric strings are parsed and numeric labels are formatted.
    pub fn categories(&self) -> Result<Vec<Category>, PanelError> {
        let frame = self.series.first().ok_or(PanelError::MissingSeries)?;
        let column = |i: usize| frame.fields.get(i).map_or(&[][..], |f| f.values.as_slice());

        let values = column(0)
            .iter()
            .enumerate()
            .map(|(index, cell)| match cell {
                FieldValue::Number(n) => Ok(Some(*n)),
                FieldValue::Text(s) => s
                    .trim()
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| PanelError::NotNumeric { index }),
                FieldValue::Null => Ok(None),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let labels: Vec<Option<String>> = column(1)
            .iter()
            .map(|cell| match cell {
                FieldValue::Number(n) => Some(format!("{n}")),
                FieldValue::Text(s) => Some(s.clone()),
                FieldValue::Null => None,
            })
            .collect();

        Ok(Category::from_columns(&values, &labels)?)
    }
}
