/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers creating puzzles. The resolved
//! layout of a puzzle can be printed as JSON so that authors can see where
//! their offset chains actually land, and the whole catalog can be linted
//! for structural defects before shipping.
//!
//! # Examples
//!
//! List the available puzzles:
//!
//! ```text
//! $ gridcode --ls
//! Heart (heart, 6 points)
//! House (house, 6 points)
//! Polygon (polygon, 6 points)
//! ```
//!
//! Print the resolved layout of the heart puzzle:
//!
//! ```text
//! $ gridcode -p heart
//! {
//!   "id": "heart",
//!   ...
//!   "expected_code": "739468"
//! }
//! ```
//!
//! Lint the catalog:
//!
//! ```text
//! $ gridcode --check
//! heart: 6 points, code 739468
//! house: 6 points, code 526481
//! polygon: 6 points, code 482615
//! ```

use clap::Parser;
use log::debug;
use std::env;

use crate::catalog::{self, PuzzleVariant};
use crate::code;
use crate::colors::MarkerColor;
use crate::connection;
use crate::resolver::{self, ResolvedPoint};

/// Inspect and lint the Gridcode puzzle catalog.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the puzzles
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Identifier of the puzzle to resolve and print as JSON
    #[arg(short, long)]
    puzzle: Option<String>,

    /// Verify every puzzle in the catalog
    #[arg(short, long, default_value_t = false)]
    check: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
///
/// Return the process exit code, or `None` when no action was requested.
pub fn parse() -> Option<u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if !args.ls && !args.check && args.puzzle.is_none() {
        return None;
    }

    //
    // List the puzzles
    //
    if args.ls {
        for variant in catalog::variants() {
            println!(
                "{} ({}, {} points)",
                variant.name,
                variant.id,
                variant.definitions.len()
            );
        }
        return Some(0);
    }

    //
    // Lint the whole catalog
    //
    if args.check {
        return Some(check_catalog());
    }

    //
    // Resolve and print the requested puzzle
    //
    let id: String = args.puzzle.expect("Cannot retrieve puzzle identifier");
    match catalog::variants().into_iter().find(|v| v.id == id) {
        Some(variant) => Some(print_puzzle(&variant)),
        None => {
            eprintln!("Unknown puzzle {id}. Use --ls to list the available puzzles.");
            Some(1)
        }
    }
}

/// Resolve a puzzle and print its layout, traversal, and code as JSON.
fn print_puzzle(variant: &PuzzleVariant) -> u8 {
    let points: Vec<ResolvedPoint> = match resolver::resolve(&variant.definitions) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Error: {}: {e}", variant.id);
            return 1;
        }
    };

    let path: Vec<MarkerColor> = connection::build_path(&points, &variant.connection_path);

    let dump = serde_json::json!({
        "id": variant.id,
        "name": variant.name,
        "points": points,
        "connection_path": path,
        "expected_code": code::expected_code(&points),
    });

    match serde_json::to_string_pretty(&dump) {
        Ok(s) => {
            println!("{s}");
            0
        }
        Err(e) => {
            eprintln!("Error: cannot serialize {}: {e}", variant.id);
            1
        }
    }
}

/// Verify every puzzle in the catalog and report the structural defects.
fn check_catalog() -> u8 {
    let mut failures: usize = 0;

    for variant in catalog::variants() {
        debug!("Checking {}", variant.id);

        let points: Vec<ResolvedPoint> = match resolver::resolve(&variant.definitions) {
            Ok(points) => points,
            Err(e) => {
                eprintln!("{}: {e}", variant.id);
                failures += 1;
                continue;
            }
        };

        for color in resolver::out_of_range(&points) {
            eprintln!("{}: point {color} is outside the grid", variant.id);
            failures += 1;
        }

        let path: Vec<MarkerColor> = connection::build_path(&points, &variant.connection_path);
        if let Err(msg) = verify_path(&points, &path) {
            eprintln!("{}: {msg}", variant.id);
            failures += 1;
        }

        println!(
            "{}: {} points, code {}",
            variant.id,
            points.len(),
            code::expected_code(&points)
        );
    }

    if failures > 0 { 1 } else { 0 }
}

/// Check that a traversal is a closed cycle covering every point once.
fn verify_path(points: &[ResolvedPoint], path: &[MarkerColor]) -> Result<(), String> {
    if path.len() != points.len() + 1 {
        return Err(format!(
            "connection path has {} entries instead of {}",
            path.len(),
            points.len() + 1
        ));
    }
    if path.first() != path.last() {
        return Err(String::from(
            "connection path does not close on its starting marker",
        ));
    }
    for point in points {
        let occurrences: usize = path[..path.len() - 1]
            .iter()
            .filter(|c| **c == point.color)
            .count();
        if occurrences != 1 {
            return Err(format!(
                "marker {} appears {occurrences} times in the connection path",
                point.color
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::MarkerColor::{Orange, Yellow};

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
    fn shipped_catalog_passes_the_lint() {
        assert_eq!(check_catalog(), 0);
    }

    #[test]
    fn open_paths_are_rejected() {
        let points = vec![point(Orange, 5, 9), point(Yellow, 2, 7)];
        assert!(verify_path(&points, &[Orange, Yellow]).is_err());
        assert!(verify_path(&points, &[Orange, Yellow, Yellow]).is_err());
        assert!(verify_path(&points, &[Orange, Yellow, Orange]).is_ok());
    }
}
