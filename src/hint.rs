/*
hint.rs

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

//! Turn a relative offset into clue text.
//!
//! Puzzle authors can supply their own clue text for a point; when they do
//! not, the text is derived from the point's `(dx, dy)` offset with
//! [`describe_offset`].

/// Describe an `(dx, dy)` offset in words.
///
/// A positive `dx` advances right, a negative one retreats left; a positive
/// `dy` goes up, a negative one goes down. A zero component is omitted, and
/// an all-zero offset stays in place.
pub fn describe_offset(dx: i32, dy: i32) -> String {
    let mut parts: Vec<String> = Vec::new();

    if dx > 0 {
        parts.push(format!("advance {dx} unit{} right", plural(dx)));
    } else if dx < 0 {
        let step: i32 = dx.abs();
        parts.push(format!("retreat {step} unit{} left", plural(step)));
    }

    if dy > 0 {
        parts.push(format!("go up {dy} unit{}", plural(dy)));
    } else if dy < 0 {
        let step: i32 = dy.abs();
        parts.push(format!("go down {step} unit{}", plural(step)));
    }

    match parts.len() {
        0 => String::from("stay in place."),
        1 => format!("{}.", parts[0]),
        _ => format!("{} and {}.", parts[0], parts[1]),
    }
}

fn plural(step: i32) -> &'static str {
    if step == 1 { "" } else { "s" }
}
