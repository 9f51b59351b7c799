/*
polygon.rs

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

//! Irregular polygon puzzle.
//!
//! Unlike the other puzzles, two of the points are chained to relative
//! points instead of the anchor.

use super::{Anchor, PointDefinition, PuzzleVariant};
use crate::colors::MarkerColor::{Blue, Green, Orange, Purple, White, Yellow};

/// Return the polygon puzzle.
pub fn variant() -> PuzzleVariant {
    PuzzleVariant {
        id: "polygon",
        name: "Polygon",
        definitions: vec![
            PointDefinition {
                color: Orange,
                digit: '4',
                anchor: Anchor::Absolute { x: 5, y: 9 },
                hint: Some("Orange base point: fixed coordinate (x:5, y:9)."),
            },
            PointDefinition {
                color: Green,
                digit: '8',
                anchor: Anchor::Relative { to: Orange, dx: 4, dy: 0 },
                hint: None,
            },
            PointDefinition {
                color: Purple,
                digit: '2',
                anchor: Anchor::Relative { to: Green, dx: -1, dy: -4 },
                hint: None,
            },
            PointDefinition {
                color: Blue,
                digit: '6',
                anchor: Anchor::Relative { to: Orange, dx: 0, dy: -6 },
                hint: None,
            },
            PointDefinition {
                color: Yellow,
                digit: '1',
                anchor: Anchor::Relative { to: Orange, dx: -4, dy: 0 },
                hint: None,
            },
            PointDefinition {
                color: White,
                digit: '5',
                anchor: Anchor::Relative { to: Yellow, dx: 1, dy: -4 },
                hint: None,
            },
        ],
        connection_path: vec![Orange, Green, Purple, Blue, White, Yellow, Orange],
        coordinate_order: vec![Orange, Green, Purple, Blue, White, Yellow],
    }
}
