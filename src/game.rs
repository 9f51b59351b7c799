/*
game.rs

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

//! Manage the status of a puzzle session in progress.
//!
//! A [`Game`] object owns everything the session needs: the selected
//! variant, its resolved points (computed once, immutable afterwards), the
//! live placement store, the connection path, and the keypad entry buffer.
//! The surrounding UI forwards every drop or click to [`Game::place`] and
//! [`Game::remove`], then reads the per-point statuses, the path segments,
//! the display code, and the counters back. Each session gets its own
//! instance; dropping it discards the whole session state.

use log::{debug, info};
use rand::seq::SliceRandom;

use crate::catalog::{self, PuzzleVariant};
use crate::code::{self, CodeCheck, CodeEntry};
use crate::colors::MarkerColor;
use crate::connection;
use crate::placements::{PlaceOutcome, Placements};
use crate::resolver::{self, ResolveError, ResolvedPoint};
use crate::validator;

/// Status of a puzzle point, for the rendering layer.
pub struct PointStatus {
    /// Marker expected on the point.
    pub color: MarkerColor,

    /// Target column.
    pub x: i32,

    /// Target row.
    pub y: i32,

    /// Digit revealed once the marker is correctly placed.
    pub digit: char,

    /// Clue text.
    pub hint: String,

    /// Marker the point was derived from, or `None` for the anchor.
    pub reference: Option<MarkerColor>,

    /// Whether the right marker sits on the point.
    pub correct: bool,
}

/// Segment of the connection path, for the rendering layer.
/// The UI draws a segment only when it is complete.
pub struct Segment {
    /// Marker at the start of the segment.
    pub from: MarkerColor,

    /// Marker at the end of the segment.
    pub to: MarkerColor,

    /// Whether both endpoints are correctly placed.
    pub complete: bool,
}

/// Manage the status of the puzzle session in progress.
pub struct Game {
    /// Puzzle being played.
    variant: PuzzleVariant,

    /// Resolved target points, computed once at session start.
    points: Vec<ResolvedPoint>,

    /// Closed traversal used to draw the completion lines.
    connection_path: Vec<MarkerColor>,

    /// The secret code.
    expected_code: String,

    /// Markers placed by the player.
    placements: Placements,

    /// Keypad input buffer.
    entry: CodeEntry,
}

impl Game {
    /// Start a session for the given puzzle.
    ///
    /// # Errors
    ///
    /// A structural defect in the puzzle definition (missing anchor,
    /// unresolvable reference, duplicated marker) aborts the
    /// initialization. These are authoring errors, not player errors; no
    /// session starts from a defective puzzle.
    pub fn new(variant: PuzzleVariant) -> Result<Self, ResolveError> {
        let points: Vec<ResolvedPoint> = resolver::resolve(&variant.definitions)?;
        let connection_path: Vec<MarkerColor> =
            connection::build_path(&points, &variant.connection_path);
        let expected_code: String = code::expected_code(&points);
        let entry: CodeEntry = CodeEntry::new(expected_code.chars().count());

        info!(
            "Puzzle loaded: {} ({}). Expected code: {expected_code}",
            variant.name, variant.id
        );

        Ok(Self {
            variant,
            points,
            connection_path,
            expected_code,
            placements: Placements::new(),
            entry,
        })
    }

    /// Start a session for a random puzzle from the catalog.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn random() -> Result<Self, ResolveError> {
        Self::new(catalog::pick_random())
    }

    /// The puzzle being played.
    pub fn variant(&self) -> &PuzzleVariant {
        &self.variant
    }

    /// The resolved target points, in definition order.
    pub fn points(&self) -> &[ResolvedPoint] {
        &self.points
    }

    /// The closed marker traversal.
    pub fn connection_path(&self) -> &[MarkerColor] {
        &self.connection_path
    }

    /// The secret code.
    pub fn expected_code(&self) -> &str {
        &self.expected_code
    }

    /// The placement store, read-only.
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// Drop a marker on a coordinate.
    pub fn place(&mut self, key: &str, color: MarkerColor) -> PlaceOutcome {
        let outcome: PlaceOutcome = self.placements.place(key, color);
        debug!(
            "placed: {}  correct: {}/{}",
            self.placements.len(),
            self.correct_count(),
            self.total_count()
        );
        outcome
    }

    /// Take a marker off a coordinate, back to the pool.
    pub fn remove(&mut self, key: &str) -> Option<MarkerColor> {
        self.placements.remove(key)
    }

    /// Per-point statuses for the rendering layer.
    pub fn point_statuses(&self) -> Vec<PointStatus> {
        self.points
            .iter()
            .map(|p| PointStatus {
                color: p.color,
                x: p.x,
                y: p.y,
                digit: p.digit,
                hint: p.hint.clone(),
                reference: p.reference,
                correct: validator::is_correctly_placed(p, &self.placements),
            })
            .collect()
    }

    /// Connection path segments with their completion flag.
    pub fn segments(&self) -> Vec<Segment> {
        self.connection_path
            .windows(2)
            .map(|pair| Segment {
                from: pair[0],
                to: pair[1],
                complete: self.endpoint_correct(pair[0]) && self.endpoint_correct(pair[1]),
            })
            .collect()
    }

    /// Whether the marker at one end of a segment is correctly placed.
    fn endpoint_correct(&self, color: MarkerColor) -> bool {
        self.points
            .iter()
            .find(|p| p.color == color)
            .is_some_and(|p| validator::is_correctly_placed(p, &self.placements))
    }

    /// The partially revealed code.
    pub fn display_code(&self) -> String {
        code::display_code(&self.points, &self.placements)
    }

    /// Number of correctly placed markers.
    pub fn correct_count(&self) -> usize {
        validator::correct_count(&self.points, &self.placements)
    }

    /// Number of target points.
    pub fn total_count(&self) -> usize {
        self.points.len()
    }

    /// Number of markers on the grid, correctly placed or not.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of markers still in the pool.
    pub fn remaining_count(&self) -> usize {
        self.points.len().saturating_sub(self.placements.len())
    }

    /// Whether every marker is correctly placed.
    ///
    /// Always recomputed from the current placements: removing or replacing
    /// a marker takes a solved puzzle back to unsolved.
    pub fn is_solved(&self) -> bool {
        validator::all_solved(&self.points, &self.placements)
    }

    /// Clue cards in display order: the configured coordinate order first
    /// (markers unknown to the puzzle are skipped), then any point the
    /// order missed, in definition order.
    pub fn clue_points(&self) -> Vec<&ResolvedPoint> {
        let mut cards: Vec<&ResolvedPoint> = Vec::with_capacity(self.points.len());

        for color in &self.variant.coordinate_order {
            if let Some(point) = self.points.iter().find(|p| p.color == *color)
                && !cards.iter().any(|c| c.color == *color)
            {
                cards.push(point);
            }
        }

        for point in &self.points {
            if !cards.iter().any(|c| c.color == point.color) {
                cards.push(point);
            }
        }
        cards
    }

    /// The puzzle markers in a random order, for the initial pool display.
    pub fn shuffled_pool(&self) -> Vec<MarkerColor> {
        let mut pool: Vec<MarkerColor> = self.points.iter().map(|p| p.color).collect();
        pool.shuffle(&mut rand::rng());
        pool
    }

    /// Markers not currently on the grid, in definition order.
    pub fn unplaced_colors(&self) -> Vec<MarkerColor> {
        self.points
            .iter()
            .map(|p| p.color)
            .filter(|c| self.placements.key_of(*c).is_none())
            .collect()
    }

    /// Append a digit to the keypad buffer. A full buffer rejects it.
    pub fn push_entry_digit(&mut self, digit: char) -> bool {
        self.entry.push(digit)
    }

    /// Remove the last digit from the keypad buffer.
    pub fn delete_entry_digit(&mut self) {
        self.entry.delete();
    }

    /// The keypad buffer content.
    pub fn entered_code(&self) -> &str {
        self.entry.get()
    }

    /// Check a code against the secret without touching the keypad buffer.
    pub fn check_code(&self, entered: &str) -> CodeCheck {
        code::check_entered(entered, &self.expected_code, self.is_solved())
    }

    /// Check the keypad buffer against the secret.
    ///
    /// A mismatch clears the buffer so the player can retype; an invalid
    /// entry (wrong length, puzzle unsolved) keeps it.
    pub fn confirm_entry(&mut self) -> CodeCheck {
        let result: CodeCheck = self.check_code(self.entry.get());
        match result {
            CodeCheck::Match | CodeCheck::Mismatch => self.entry.clear(),
            CodeCheck::Invalid(_) => (),
        }
        result
    }
}
