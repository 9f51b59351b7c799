/*
placements.rs

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

//! Manage the markers that the player placed on the grid.
//!
//! The store keeps a coordinate-to-marker map and a marker-to-coordinate map
//! so that both directions are cheap to look up. The two maps always agree:
//! a coordinate holds at most one marker, and a marker occupies at most one
//! coordinate.

use log::debug;
use std::collections::HashMap;

use crate::colors::MarkerColor;

/// Effects of a placement on the other bindings.
///
/// The UI uses the outcome to return an evicted marker to the unplaced pool
/// and to clear the moved marker's previous spot on the grid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaceOutcome {
    /// Marker that occupied the target coordinate and was removed.
    pub evicted: Option<MarkerColor>,

    /// Coordinate that the moved marker previously occupied, now cleared.
    pub vacated: Option<String>,

    /// Whether the store changed at all.
    pub changed: bool,
}

/// The markers currently placed on the grid.
#[derive(Debug, Default, Clone)]
pub struct Placements {
    /// Occupied coordinate keys and the marker on each of them.
    key_to_color: HashMap<String, MarkerColor>,

    /// Placed markers and the coordinate key each of them occupies.
    color_to_key: HashMap<MarkerColor, String>,
}

impl Placements {
    /// Create a [`Placements`] object.
    pub fn new() -> Self {
        Self {
            key_to_color: HashMap::new(),
            color_to_key: HashMap::new(),
        }
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.key_to_color.clear();
        self.color_to_key.clear();
    }

    /// Bind a marker to a coordinate key.
    ///
    /// A different marker already on the coordinate is evicted first. A
    /// marker that was placed elsewhere leaves its previous coordinate.
    /// Re-dropping a marker on the coordinate it already occupies changes
    /// nothing.
    pub fn place(&mut self, key: &str, color: MarkerColor) -> PlaceOutcome {
        let mut outcome: PlaceOutcome = PlaceOutcome::default();

        if self.key_to_color.get(key) == Some(&color) {
            return outcome;
        }

        if let Some(previous) = self.color_to_key.remove(&color) {
            self.key_to_color.remove(&previous);
            outcome.vacated = Some(previous);
        }

        if let Some(evicted) = self.key_to_color.insert(key.to_string(), color) {
            self.color_to_key.remove(&evicted);
            outcome.evicted = Some(evicted);
        }

        self.color_to_key.insert(color, key.to_string());
        outcome.changed = true;

        debug!(
            "Placed {color} at {key} (evicted: {:?}, vacated: {:?})",
            outcome.evicted, outcome.vacated
        );
        outcome
    }

    /// Clear the binding of a coordinate and return the removed marker.
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<MarkerColor> {
        match self.key_to_color.remove(key) {
            Some(color) => {
                self.color_to_key.remove(&color);
                debug!("Removed {color} from {key}");
                Some(color)
            }
            None => None,
        }
    }

    /// Return the marker on the given coordinate.
    pub fn get(&self, key: &str) -> Option<MarkerColor> {
        self.key_to_color.get(key).copied()
    }

    /// Return the coordinate that a marker occupies.
    pub fn key_of(&self, color: MarkerColor) -> Option<&str> {
        self.color_to_key.get(&color).map(String::as_str)
    }

    /// Number of placed markers.
    pub fn len(&self) -> usize {
        self.key_to_color.len()
    }

    /// Whether no marker is placed.
    pub fn is_empty(&self) -> bool {
        self.key_to_color.is_empty()
    }

    /// Read-only view of the coordinate bindings, for validation.
    pub fn snapshot(&self) -> &HashMap<String, MarkerColor> {
        &self.key_to_color
    }
}
