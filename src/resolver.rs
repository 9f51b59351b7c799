/*
resolver.rs

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

//! Resolve point definitions to absolute coordinates.
//!
//! Definitions are processed in declaration order: an absolute definition
//! resolves immediately, and a relative definition looks its reference up
//! among the points resolved so far. There is no topological sort. Puzzle
//! authors declare each relative point after the point it depends on, and a
//! forward reference is a hard error that surfaces the failing position.
//! Because a reference can only point backwards, reference cycles cannot
//! resolve and are reported the same way.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Anchor, PointDefinition};
use crate::colors::MarkerColor;
use crate::grid;
use crate::hint;

/// Type of errors.
///
/// All of them are structural defects in a puzzle definition. They abort the
/// session initialization; none of them is recoverable by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No absolute point definition to root the resolution.
    MissingAnchor,

    /// A relative definition references a marker that is not resolved at the
    /// time the definition is processed.
    UnresolvableReference {
        color: MarkerColor,
        reference: MarkerColor,
        position: usize,
    },

    /// The same marker is defined twice.
    DuplicateMarker { color: MarkerColor, position: usize },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolveError::MissingAnchor => {
                write!(f, "no point definition with an absolute coordinate")
            }
            ResolveError::UnresolvableReference {
                color,
                reference,
                position,
            } => write!(
                f,
                "point {color} (definition {position}) references {reference}, which is not resolved at that position"
            ),
            ResolveError::DuplicateMarker { color, position } => {
                write!(f, "point {color} (definition {position}) is defined twice")
            }
        }
    }
}

/// A puzzle point with its absolute coordinate, after resolution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPoint {
    /// Marker that must land on the point.
    pub color: MarkerColor,

    /// Column. On the grid when within `0..=GRID_SIZE`.
    pub x: i32,

    /// Row. On the grid when within `0..=GRID_SIZE`.
    pub y: i32,

    /// Digit that the point contributes to the secret code.
    pub digit: char,

    /// Clue text shown to the player.
    pub hint: String,

    /// Marker the coordinate was derived from, or `None` for an anchor.
    pub reference: Option<MarkerColor>,
}

impl ResolvedPoint {
    /// Coordinate key of the target, in the format the input layer produces.
    pub fn coord_key(&self) -> String {
        grid::coord_key(self.x, self.y)
    }

    /// Text for the point's clue card: anchors show their fixed coordinate,
    /// derived points show their hint.
    pub fn clue_text(&self) -> String {
        match self.reference {
            None => format!("(x:{}, y:{})", self.x, self.y),
            Some(_) => self.hint.clone(),
        }
    }
}

/// Resolve the point definitions of a puzzle to absolute coordinates.
///
/// An out-of-range coordinate is not an error: the point is unreachable by
/// normal play, which the `--check` catalog lint reports to the author, but
/// the session still loads. The coordinate is logged and left unclamped.
///
/// # Errors
///
/// The function fails when no definition is absolute, when a definition
/// references a marker that is not resolved yet, or when two definitions use
/// the same marker.
pub fn resolve(definitions: &[PointDefinition]) -> Result<Vec<ResolvedPoint>, ResolveError> {
    if !definitions
        .iter()
        .any(|d| matches!(d.anchor, Anchor::Absolute { .. }))
    {
        return Err(ResolveError::MissingAnchor);
    }

    let mut resolved: Vec<ResolvedPoint> = Vec::with_capacity(definitions.len());

    for (position, definition) in definitions.iter().enumerate() {
        if resolved.iter().any(|p| p.color == definition.color) {
            return Err(ResolveError::DuplicateMarker {
                color: definition.color,
                position,
            });
        }

        let (x, y, reference) = match definition.anchor {
            Anchor::Absolute { x, y } => (x, y, None),
            Anchor::Relative { to, dx, dy } => match resolved.iter().find(|p| p.color == to) {
                Some(r) => (r.x + dx, r.y + dy, Some(to)),
                None => {
                    return Err(ResolveError::UnresolvableReference {
                        color: definition.color,
                        reference: to,
                        position,
                    });
                }
            },
        };

        if !grid::in_bounds(x, y) {
            warn!("Point {} resolves out of range at ({x}, {y})", definition.color);
        }

        resolved.push(ResolvedPoint {
            color: definition.color,
            x,
            y,
            digit: definition.digit,
            hint: resolve_hint(definition, x, y),
            reference,
        });
    }

    Ok(resolved)
}

/// Return the markers whose resolved point falls outside the grid.
pub fn out_of_range(points: &[ResolvedPoint]) -> Vec<MarkerColor> {
    points
        .iter()
        .filter(|p| !grid::in_bounds(p.x, p.y))
        .map(|p| p.color)
        .collect()
}

/// Clue text of a definition: the precomputed hint when the author supplied
/// one, a derived text otherwise.
fn resolve_hint(definition: &PointDefinition, x: i32, y: i32) -> String {
    if let Some(h) = definition.hint {
        return h.to_string();
    }
    match definition.anchor {
        Anchor::Absolute { .. } => format!("Fixed coordinate (x:{x}, y:{y})."),
        Anchor::Relative { to, dx, dy } => {
            format!("From the {to} point, {}", hint::describe_offset(dx, dy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn absolute(color: MarkerColor, digit: char, x: i32, y: i32) -> PointDefinition {
        PointDefinition {
            color,
            digit,
            anchor: Anchor::Absolute { x, y },
            hint: None,
        }
    }

    fn relative(
        color: MarkerColor,
        digit: char,
        to: MarkerColor,
        dx: i32,
        dy: i32,
    ) -> PointDefinition {
        PointDefinition {
            color,
            digit,
            anchor: Anchor::Relative { to, dx, dy },
            hint: None,
        }
    }

    #[test]
    fn every_catalog_variant_resolves_completely() {
        for variant in catalog::variants() {
            let points: Vec<ResolvedPoint> =
                resolve(&variant.definitions).expect(variant.id);

            assert_eq!(points.len(), variant.definitions.len());
            for (i, point) in points.iter().enumerate() {
                assert!(grid::in_bounds(point.x, point.y), "{}", variant.id);
                for other in &points[i + 1..] {
                    assert_ne!(point.color, other.color, "{}", variant.id);
                }
            }
        }
    }

    #[test]
    fn offsets_chain_from_the_anchor() {
        let definitions = vec![
            absolute(MarkerColor::Orange, '7', 5, 9),
            relative(MarkerColor::Yellow, '3', MarkerColor::Orange, -3, -2),
            relative(MarkerColor::White, '8', MarkerColor::Yellow, 3, -3),
        ];

        let points: Vec<ResolvedPoint> = resolve(&definitions).expect("resolvable");
        assert_eq!((points[0].x, points[0].y), (5, 9));
        assert_eq!((points[1].x, points[1].y), (2, 7));
        assert_eq!((points[2].x, points[2].y), (5, 4));
        assert_eq!(points[0].reference, None);
        assert_eq!(points[2].reference, Some(MarkerColor::Yellow));
    }

    #[test]
    fn forward_reference_fails_with_its_position() {
        let definitions = vec![
            absolute(MarkerColor::Orange, '7', 5, 9),
            relative(MarkerColor::Yellow, '3', MarkerColor::Blue, 1, 1),
            absolute(MarkerColor::Blue, '9', 0, 0),
        ];

        assert_eq!(
            resolve(&definitions),
            Err(ResolveError::UnresolvableReference {
                color: MarkerColor::Yellow,
                reference: MarkerColor::Blue,
                position: 1,
            })
        );
    }

    #[test]
    fn missing_anchor_fails() {
        let definitions = vec![relative(
            MarkerColor::Yellow,
            '3',
            MarkerColor::Orange,
            1,
            1,
        )];
        assert_eq!(resolve(&definitions), Err(ResolveError::MissingAnchor));
    }

    #[test]
    fn duplicated_marker_fails() {
        let definitions = vec![
            absolute(MarkerColor::Orange, '7', 5, 9),
            absolute(MarkerColor::Orange, '3', 2, 2),
        ];
        assert_eq!(
            resolve(&definitions),
            Err(ResolveError::DuplicateMarker {
                color: MarkerColor::Orange,
                position: 1,
            })
        );
    }

    #[test]
    fn derived_hints_name_the_reference_point() {
        let definitions = vec![
            absolute(MarkerColor::Orange, '7', 5, 9),
            relative(MarkerColor::Yellow, '3', MarkerColor::Orange, -3, -2),
        ];

        let points: Vec<ResolvedPoint> = resolve(&definitions).expect("resolvable");
        assert_eq!(points[0].hint, "Fixed coordinate (x:5, y:9).");
        assert_eq!(
            points[1].hint,
            "From the Orange point, retreat 3 units left and go down 2 units."
        );
    }

    #[test]
    fn supplied_hints_are_kept_verbatim() {
        let mut definition: PointDefinition = absolute(MarkerColor::Orange, '7', 5, 9);
        definition.hint = Some("Start here.");

        let points: Vec<ResolvedPoint> = resolve(&[definition]).expect("resolvable");
        assert_eq!(points[0].hint, "Start here.");
    }

    #[test]
    fn out_of_range_points_are_detected_but_not_fatal() {
        let definitions = vec![
            absolute(MarkerColor::Orange, '7', 5, 9),
            relative(MarkerColor::Yellow, '3', MarkerColor::Orange, 9, 9),
        ];

        let points: Vec<ResolvedPoint> = resolve(&definitions).expect("still resolvable");
        assert_eq!((points[1].x, points[1].y), (14, 18));
        assert_eq!(out_of_range(&points), vec![MarkerColor::Yellow]);
    }

    #[test]
    fn clue_text_shows_the_coordinate_for_anchors_only() {
        let definitions = vec![
            absolute(MarkerColor::Orange, '7', 5, 9),
            relative(MarkerColor::Yellow, '3', MarkerColor::Orange, 0, -2),
        ];

        let points: Vec<ResolvedPoint> = resolve(&definitions).expect("resolvable");
        assert_eq!(points[0].clue_text(), "(x:5, y:9)");
        assert_eq!(points[1].clue_text(), points[1].hint);
    }
}
