// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Error, Location, Result};
use std::collections::btree_map::{BTreeMap, Entry};

/// Name reported for ids which don't (or no longer) refer to a registered [Location].
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Set of [Locations](Location) keyed by their caller-assigned id,
/// holding at most `capacity` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRegistry {
    locations: BTreeMap<i64, String>,
    capacity: usize,
}

impl LocationRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            locations: BTreeMap::default(),
            capacity,
        }
    }

    /// Returns the number of registered locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, id: i64) -> bool {
        self.locations.contains_key(&id)
    }

    /// Retrieves the name of a location with the provided id.
    pub fn get(&self, id: i64) -> Option<&str> {
        self.locations.get(&id).map(String::as_str)
    }

    /// Retrieves the name of a location with the provided id,
    /// falling back to [UNKNOWN_LOCATION] for unregistered ids.
    pub fn name(&self, id: i64) -> &str {
        self.get(id).unwrap_or(UNKNOWN_LOCATION)
    }

    /// Returns an iterator over all locations, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.locations.iter().map(|(&id, name)| Location {
            id,
            name: name.clone(),
        })
    }

    /// Returns all locations ordered by name. Locations with equal names are ordered by id.
    pub fn sorted_by_name(&self) -> Vec<Location> {
        let mut sorted: Vec<Location> = self.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Registers a new location.
    ///
    /// Fails if the name is empty, the id is already taken or the registry is full.
    pub fn add(&mut self, id: i64, name: &str) -> Result<()> {
        if self.locations.len() >= self.capacity {
            return Err(Error::LocationCapacity(self.capacity));
        }
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        match self.locations.entry(id) {
            Entry::Occupied(_) => Err(Error::DuplicateLocation(id)),
            Entry::Vacant(e) => {
                e.insert(name.to_string());
                Ok(())
            }
        }
    }

    /// Removes a location with the given id.
    ///
    /// Roads referencing the location are left in place.
    pub fn remove(&mut self, id: i64) -> Result<Location> {
        self.locations
            .remove(&id)
            .map(|name| Location { id, name })
            .ok_or(Error::LocationNotFound(id))
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::with_capacity(crate::Options::default().max_locations)
    }
}
