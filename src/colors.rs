/*
colors.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridcode.

Gridcode is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridcode is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridcode. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Marker colors.
//!
//! Each puzzle point is identified by the color of the marker that must land
//! on it. The numeric representation (1 to 6) is the identifier that the
//! surrounding UI attaches to the draggable marker elements.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Identity of a draggable marker.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, FromRepr,
)]
#[repr(u8)]
pub enum MarkerColor {
    Yellow = 1,
    Blue = 2,
    Orange = 3,
    Green = 4,
    Purple = 5,
    White = 6,
}

impl MarkerColor {
    /// All the marker colors, in identifier order.
    pub const ALL: [MarkerColor; 6] = [
        MarkerColor::Yellow,
        MarkerColor::Blue,
        MarkerColor::Orange,
        MarkerColor::Green,
        MarkerColor::Purple,
        MarkerColor::White,
    ];

    /// Numeric identifier carried by the UI marker elements.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Display name of the color.
    pub fn name(self) -> &'static str {
        match self {
            MarkerColor::Yellow => "Yellow",
            MarkerColor::Blue => "Blue",
            MarkerColor::Orange => "Orange",
            MarkerColor::Green => "Green",
            MarkerColor::Purple => "Purple",
            MarkerColor::White => "White",
        }
    }

    /// CSS color used to paint the marker.
    pub fn css_color(self) -> &'static str {
        match self {
            MarkerColor::Yellow => "#ffff00",
            MarkerColor::Blue => "#0080ff",
            MarkerColor::Orange => "#ff8000",
            MarkerColor::Green => "#00ff88",
            MarkerColor::Purple => "#a855f7",
            MarkerColor::White => "#ffffff",
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_repr() {
        for color in MarkerColor::ALL {
            assert_eq!(MarkerColor::from_repr(color.id()), Some(color));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(MarkerColor::from_repr(0), None);
        assert_eq!(MarkerColor::from_repr(7), None);
    }

    #[test]
    fn display_uses_the_color_name() {
        assert_eq!(MarkerColor::Orange.to_string(), "Orange");
    }
}
