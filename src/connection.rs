/*
connection.rs

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

//! Closed marker traversal for the completion lines.
//!
//! The UI draws a line between two consecutive markers of the traversal once
//! both are correctly placed, so that the figure appears as the player
//! progresses. Puzzle authors usually declare the traversal explicitly; when
//! they do not, a clockwise ordering around the centroid is computed.

use crate::colors::MarkerColor;
use crate::resolver::ResolvedPoint;

/// Build the closed traversal connecting the markers.
///
/// A non-empty `explicit` traversal is used verbatim, authoring overrides
/// computation. Otherwise the points are ordered clockwise around their
/// centroid, starting from the lowest point (leftmost on ties), and the
/// traversal is closed by repeating the starting marker.
///
/// The output covers every point exactly once plus the closing repeat, so
/// its length is always the number of points plus one.
pub fn build_path(points: &[ResolvedPoint], explicit: &[MarkerColor]) -> Vec<MarkerColor> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    if points.is_empty() {
        return Vec::new();
    }

    let cx: f64 = points.iter().map(|p| f64::from(p.x)).sum::<f64>() / points.len() as f64;
    let cy: f64 = points.iter().map(|p| f64::from(p.y)).sum::<f64>() / points.len() as f64;

    // Decreasing angle around the centroid, for a clockwise visual order.
    let mut sorted: Vec<&ResolvedPoint> = points.iter().collect();
    sorted.sort_by(|a, b| {
        let angle_a: f64 = (f64::from(a.y) - cy).atan2(f64::from(a.x) - cx);
        let angle_b: f64 = (f64::from(b.y) - cy).atan2(f64::from(b.x) - cx);
        angle_b.total_cmp(&angle_a)
    });

    // Start the traversal at the lowest point, leftmost on ties.
    let mut start: usize = 0;
    for (i, point) in sorted.iter().enumerate() {
        let best: &ResolvedPoint = sorted[start];
        if point.y < best.y || (point.y == best.y && point.x < best.x) {
            start = i;
        }
    }

    let mut path: Vec<MarkerColor> = Vec::with_capacity(sorted.len() + 1);
    path.extend(sorted[start..].iter().map(|p| p.color));
    path.extend(sorted[..start].iter().map(|p| p.color));
    path.push(path[0]);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::MarkerColor::{Blue, Green, Orange, Yellow};

    fn point(color: MarkerColor, x: i32, y: i32) -> ResolvedPoint {
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
    fn explicit_path_is_used_verbatim() {
        let points = vec![point(Orange, 5, 9), point(Yellow, 2, 7)];
        let explicit = vec![Yellow, Orange, Yellow];
        assert_eq!(build_path(&points, &explicit), explicit);
    }

    #[test]
    fn fallback_path_is_closed_and_covers_every_marker() {
        let points = vec![
            point(Orange, 5, 9),
            point(Yellow, 2, 7),
            point(Blue, 3, 10),
            point(Green, 7, 10),
        ];

        let path: Vec<MarkerColor> = build_path(&points, &[]);
        assert_eq!(path.len(), points.len() + 1);
        assert_eq!(path.first(), path.last());

        let mut interior: Vec<MarkerColor> = path[..path.len() - 1].to_vec();
        interior.sort();
        interior.dedup();
        assert_eq!(interior.len(), points.len());
    }

    #[test]
    fn fallback_path_walks_a_square_clockwise_from_the_bottom() {
        // Square around centroid (5, 5). The lowest-leftmost point is the
        // bottom-left corner; clockwise from there goes up first.
        let points = vec![
            point(Yellow, 2, 2),
            point(Blue, 2, 8),
            point(Green, 8, 8),
            point(Orange, 8, 2),
        ];

        let path: Vec<MarkerColor> = build_path(&points, &[]);
        assert_eq!(path, vec![Yellow, Blue, Green, Orange, Yellow]);
    }

    #[test]
    fn single_point_closes_on_itself() {
        let points = vec![point(Orange, 5, 9)];
        assert_eq!(build_path(&points, &[]), vec![Orange, Orange]);
    }

    #[test]
    fn no_points_yields_an_empty_path() {
        assert!(build_path(&[], &[]).is_empty());
    }
}
