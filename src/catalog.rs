/*
catalog.rs

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

//! Puzzle catalog.
//!
//! Each puzzle is declared in its own module as a [`PuzzleVariant`] value:
//! an ordered list of point definitions, where the first point is anchored to
//! a fixed coordinate and the other points are offsets from already-declared
//! points. The declaration order matters: the [`crate::resolver`] processes
//! the definitions top to bottom and rejects a reference to a point that has
//! not been declared yet.

// For developers: add your new puzzle to this list of modules.
pub mod heart;
pub mod house;
pub mod polygon;

use rand::Rng;
use serde::Serialize;

use crate::colors::MarkerColor;

/// Placement clue of a single point.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Fixed coordinate on the grid. Every variant needs at least one
    /// absolute point to root the resolution.
    Absolute { x: i32, y: i32 },

    /// Offset from the point of an already-declared marker.
    Relative { to: MarkerColor, dx: i32, dy: i32 },
}

/// Declarative definition of a single puzzle point.
#[derive(Serialize, Debug, Clone)]
pub struct PointDefinition {
    /// Marker that must land on the point. Unique within a variant.
    pub color: MarkerColor,

    /// Digit that the point contributes to the secret code.
    pub digit: char,

    /// Placement clue.
    pub anchor: Anchor,

    /// Precomputed clue text. When `None`, the resolver derives the text
    /// from the anchor.
    pub hint: Option<&'static str>,
}

/// A puzzle from the catalog.
#[derive(Serialize, Debug, Clone)]
pub struct PuzzleVariant {
    /// Identifier.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Point definitions, in dependency-respecting order.
    pub definitions: Vec<PointDefinition>,

    /// Traversal used to draw the completion lines, closed by repeating the
    /// first marker at the end. When empty, the traversal is computed from
    /// the resolved points instead.
    pub connection_path: Vec<MarkerColor>,

    /// Display order for the clue cards. When empty, the definition order
    /// is used.
    pub coordinate_order: Vec<MarkerColor>,
}

/// Return the complete puzzle catalog.
pub fn variants() -> Vec<PuzzleVariant> {
    vec![heart::variant(), house::variant(), polygon::variant()]
}

/// Pick a random puzzle from the catalog.
pub fn pick_random() -> PuzzleVariant {
    let mut all: Vec<PuzzleVariant> = variants();
    let i: usize = rand::rng().random_range(0..all.len());
    all.swap_remove(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_identifiers_are_unique() {
        let all: Vec<PuzzleVariant> = variants();
        for (i, variant) in all.iter().enumerate() {
            assert!(!variant.definitions.is_empty());
            for other in &all[i + 1..] {
                assert_ne!(variant.id, other.id);
            }
        }
    }

    #[test]
    fn explicit_paths_close_on_their_starting_marker() {
        for variant in variants() {
            assert_eq!(
                variant.connection_path.len(),
                variant.definitions.len() + 1,
                "{}",
                variant.id
            );
            assert_eq!(
                variant.connection_path.first(),
                variant.connection_path.last(),
                "{}",
                variant.id
            );
        }
    }

    #[test]
    fn picked_variant_comes_from_the_catalog() {
        let picked: PuzzleVariant = pick_random();
        assert!(variants().iter().any(|v| v.id == picked.id));
    }
}
