/*
validator.rs

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

//! Compare the player's placements against the resolved target points.
//!
//! These are pure queries over the placement store. They are recomputed on
//! demand after every mutation, never cached: a single move can evict and
//! re-home markers, and a solved puzzle goes back to unsolved when a marker
//! leaves its point.

use crate::placements::Placements;
use crate::resolver::ResolvedPoint;

/// Whether the marker for the given point sits on the point's coordinate.
pub fn is_correctly_placed(point: &ResolvedPoint, placements: &Placements) -> bool {
    placements.get(&point.coord_key()) == Some(point.color)
}

/// Whether every point has its marker correctly placed.
pub fn all_solved(points: &[ResolvedPoint], placements: &Placements) -> bool {
    points.iter().all(|p| is_correctly_placed(p, placements))
}

/// Number of correctly placed markers.
pub fn correct_count(points: &[ResolvedPoint], placements: &Placements) -> usize {
    points
        .iter()
        .filter(|p| is_correctly_placed(p, placements))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::MarkerColor::{Orange, Yellow};

    fn point(color: crate::colors::MarkerColor, x: i32, y: i32) -> ResolvedPoint {
        ResolvedPoint {
            color,
            x,
            y,
            digit: '0',
            hint: String::new(),
            reference: None,
        }
    }

    #[test]
    fn the_right_marker_on_the_right_coordinate_is_correct() {
        let mut placements: Placements = Placements::new();
        placements.place("5-9", Orange);

        assert!(is_correctly_placed(&point(Orange, 5, 9), &placements));
    }

    #[test]
    fn the_wrong_marker_on_the_right_coordinate_is_not_correct() {
        let mut placements: Placements = Placements::new();
        placements.place("2-7", Orange);

        assert!(!is_correctly_placed(&point(Yellow, 2, 7), &placements));
    }

    #[test]
    fn an_empty_coordinate_is_not_correct() {
        let placements: Placements = Placements::new();
        assert!(!is_correctly_placed(&point(Orange, 5, 9), &placements));
    }

    #[test]
    fn solved_state_regresses_when_a_marker_is_removed() {
        let points = vec![point(Orange, 5, 9), point(Yellow, 2, 7)];
        let mut placements: Placements = Placements::new();
        placements.place("5-9", Orange);
        placements.place("2-7", Yellow);
        assert!(all_solved(&points, &placements));
        assert_eq!(correct_count(&points, &placements), 2);

        placements.remove("2-7");
        assert!(!all_solved(&points, &placements));
        assert_eq!(correct_count(&points, &placements), 1);
    }
}
