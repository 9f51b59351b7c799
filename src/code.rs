/*
code.rs

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

//! Secret code assembly and entry.
//!
//! Every puzzle point contributes one digit. The full code, in point
//! definition order, is the session's static secret; the display code
//! replaces the digit of every point that is not correctly placed yet with a
//! placeholder glyph. The on-screen keypad collects the player's answer in a
//! bounded [`CodeEntry`] buffer and submits it for checking.

use crate::placements::Placements;
use crate::resolver::ResolvedPoint;
use crate::validator;

/// Glyph shown in place of the digits that are not revealed yet.
pub const CODE_PLACEHOLDER: char = '•';

/// Lower bound of the keypad input capacity, whatever the code length.
pub const BASE_MAX_INPUT_LENGTH: usize = 8;

/// The secret code: each point's digit, in point definition order.
///
/// A pure function of the resolved points, so the code is stable for the
/// whole session.
pub fn expected_code(points: &[ResolvedPoint]) -> String {
    points.iter().map(|p| p.digit).collect()
}

/// The partially revealed code: a digit for every correctly placed point,
/// the placeholder glyph for the others.
pub fn display_code(points: &[ResolvedPoint], placements: &Placements) -> String {
    points
        .iter()
        .map(|p| {
            if validator::is_correctly_placed(p, placements) {
                p.digit
            } else {
                CODE_PLACEHOLDER
            }
        })
        .collect()
}

/// Reasons an entered code is rejected before being compared.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidCodeEntry {
    /// The markers are not all correctly placed yet.
    PuzzleUnsolved,

    /// The entered code does not have the expected number of digits.
    WrongLength { entered: usize, expected: usize },
}

/// Result of checking an entered code against the secret.
///
/// Rejections and mismatches are retryable; none of them mutates any puzzle
/// state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodeCheck {
    /// The entered code is the secret code.
    Match,

    /// The entry is rejected before comparison.
    Invalid(InvalidCodeEntry),

    /// The entered code differs from the secret code.
    Mismatch,
}

/// Check a player-entered code against the secret.
///
/// The comparison only happens once the puzzle is solved and the entry has
/// the expected length; everything else is an invalid entry, not a mismatch.
pub fn check_entered(entered: &str, expected: &str, solved: bool) -> CodeCheck {
    if !solved {
        return CodeCheck::Invalid(InvalidCodeEntry::PuzzleUnsolved);
    }

    let entered_len: usize = entered.chars().count();
    let expected_len: usize = expected.chars().count();
    if entered_len != expected_len {
        return CodeCheck::Invalid(InvalidCodeEntry::WrongLength {
            entered: entered_len,
            expected: expected_len,
        });
    }

    if entered == expected {
        CodeCheck::Match
    } else {
        CodeCheck::Mismatch
    }
}

/// Player-typed code buffer with a bounded capacity.
///
/// The capacity is `max(8, code length)`. Characters beyond the capacity are
/// rejected, not truncated: the buffer simply stops accepting digits.
#[derive(Debug, Clone)]
pub struct CodeEntry {
    /// Characters typed so far.
    buffer: String,

    /// Maximum number of characters the buffer accepts.
    capacity: usize,
}

impl CodeEntry {
    /// Create a buffer sized for the given code length.
    pub fn new(code_length: usize) -> Self {
        Self {
            buffer: String::new(),
            capacity: BASE_MAX_INPUT_LENGTH.max(code_length),
        }
    }

    /// Append a character. A full buffer rejects the character and returns
    /// `false`.
    pub fn push(&mut self, c: char) -> bool {
        if self.len() >= self.capacity {
            return false;
        }
        self.buffer.push(c);
        true
    }

    /// Remove the last character.
    pub fn delete(&mut self) {
        self.buffer.pop();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Return the typed characters.
    pub fn get(&self) -> &str {
        &self.buffer
    }

    /// Number of typed characters.
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Whether nothing is typed.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::MarkerColor::{Orange, Yellow};

    fn point(color: crate::colors::MarkerColor, digit: char, x: i32, y: i32) -> ResolvedPoint {
        ResolvedPoint {
            color,
            x,
            y,
            digit,
            hint: String::new(),
            reference: None,
        }
    }

    #[test]
    fn expected_code_follows_definition_order() {
        let points = vec![point(Orange, '7', 5, 9), point(Yellow, '3', 2, 7)];
        assert_eq!(expected_code(&points), "73");
        assert_eq!(expected_code(&points), "73");
    }

    #[test]
    fn display_code_reveals_correct_placements_only() {
        let points = vec![point(Orange, '7', 5, 9), point(Yellow, '3', 2, 7)];
        let mut placements: Placements = Placements::new();
        assert_eq!(display_code(&points, &placements), "••");

        placements.place("2-7", Yellow);
        assert_eq!(display_code(&points, &placements), "•3");

        placements.place("5-9", Orange);
        assert_eq!(display_code(&points, &placements), "73");
    }

    #[test]
    fn unsolved_entries_are_invalid_not_mismatched() {
        assert_eq!(
            check_entered("7", "73", false),
            CodeCheck::Invalid(InvalidCodeEntry::PuzzleUnsolved)
        );
    }

    #[test]
    fn wrong_length_is_invalid_not_mismatched() {
        assert_eq!(
            check_entered("7", "73", true),
            CodeCheck::Invalid(InvalidCodeEntry::WrongLength {
                entered: 1,
                expected: 2,
            })
        );
    }

    #[test]
    fn full_length_entries_are_compared() {
        assert_eq!(check_entered("73", "73", true), CodeCheck::Match);
        assert_eq!(check_entered("37", "73", true), CodeCheck::Mismatch);
    }

    #[test]
    fn entry_buffer_stops_accepting_at_capacity() {
        let mut entry: CodeEntry = CodeEntry::new(2);

        for _ in 0..BASE_MAX_INPUT_LENGTH {
            assert!(entry.push('1'));
        }
        assert!(!entry.push('1'));
        assert_eq!(entry.len(), BASE_MAX_INPUT_LENGTH);
    }

    #[test]
    fn entry_capacity_grows_with_long_codes() {
        let mut entry: CodeEntry = CodeEntry::new(12);
        for _ in 0..12 {
            assert!(entry.push('4'));
        }
        assert!(!entry.push('4'));
    }

    #[test]
    fn delete_and_clear_edit_the_buffer() {
        let mut entry: CodeEntry = CodeEntry::new(4);
        entry.push('7');
        entry.push('3');
        entry.delete();
        assert_eq!(entry.get(), "7");

        entry.clear();
        assert!(entry.is_empty());
    }
}
