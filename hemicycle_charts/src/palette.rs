// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category colors.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

const DEFAULT_COLORS: [[u8; 3]; 9] = [
    [0x54, 0x70, 0xc6],
    [0x91, 0xcc, 0x75],
    [0xfa, 0xc8, 0x58],
    [0xee, 0x66, 0x66],
    [0x73, 0xc0, 0xde],
    [0x3b, 0xa2, 0x72],
    [0xfc, 0x84, 0x52],
    [0x9a, 0x60, 0xb4],
    [0xea, 0x7c, 0xcc],
];

/// An ordered list of category colors, cycled by category index.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette. An empty list falls back to [`Palette::default`].
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for category `index`, wrapping around.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|[r, g, b]| Color::from_rgb8(*r, *g, *b))
                .collect(),
        }
    }
}
