/*
heart.rs

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

//! Heart-shaped puzzle.

use super::{Anchor, PointDefinition, PuzzleVariant};
use crate::colors::MarkerColor::{Blue, Green, Orange, Purple, White, Yellow};

/// Return the heart puzzle.
pub fn variant() -> PuzzleVariant {
    PuzzleVariant {
        id: "heart",
        name: "Heart",
        definitions: vec![
            PointDefinition {
                color: Orange,
                digit: '7',
                anchor: Anchor::Absolute { x: 5, y: 9 },
                hint: Some("Orange base point: fixed coordinate (x:5, y:9)."),
            },
            PointDefinition {
                color: Yellow,
                digit: '3',
                anchor: Anchor::Relative { to: Orange, dx: -3, dy: -2 },
                hint: None,
            },
            PointDefinition {
                color: Blue,
                digit: '9',
                anchor: Anchor::Relative { to: Orange, dx: -2, dy: 1 },
                hint: None,
            },
            PointDefinition {
                color: Green,
                digit: '4',
                anchor: Anchor::Relative { to: Orange, dx: 2, dy: 1 },
                hint: None,
            },
            PointDefinition {
                color: Purple,
                digit: '6',
                anchor: Anchor::Relative { to: Orange, dx: 3, dy: -2 },
                hint: None,
            },
            PointDefinition {
                color: White,
                digit: '8',
                anchor: Anchor::Relative { to: Yellow, dx: 3, dy: -3 },
                hint: None,
            },
        ],
        connection_path: vec![Yellow, Blue, Orange, Green, Purple, White, Yellow],
        coordinate_order: vec![Green, Blue, Orange, Yellow, Purple, White],
    }
}
