/*
main.rs

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

use std::process::ExitCode;

use gridcode::cli_options;

fn main() -> ExitCode {
    // The game itself runs in the browser front end, which links the library
    // directly. This binary only carries the puzzle authoring tools.
    match cli_options::parse() {
        Some(ret) => ExitCode::from(ret),
        None => {
            eprintln!("No action requested. Use --help for the puzzle authoring options.");
            ExitCode::SUCCESS
        }
    }
}
