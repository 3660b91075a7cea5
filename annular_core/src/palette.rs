// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed sector color palette.
//!
//! Four colors are enough for any category count: sector `i` takes color
//! `i % 4`, so colors repeat when N > 4 and adjacent sectors still differ.

use core::fmt;

/// An opaque RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    /// Formats as a `#RRGGBB` hex triplet.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The sector fill palette: blue, green, amber, purple.
pub const PALETTE: [Color; 4] = [
    Color::rgb(0x3B, 0x82, 0xF6),
    Color::rgb(0x10, 0xB9, 0x81),
    Color::rgb(0xF5, 0x9E, 0x0B),
    Color::rgb(0x8B, 0x5C, 0xF6),
];

/// Returns the palette color for sector `index`, cycling every 4 entries.
#[inline]
#[must_use]
pub const fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
