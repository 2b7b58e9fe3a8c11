// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Error, LocationRegistry, Result, Road, Status};
use std::collections::btree_map::{BTreeMap, Entry};

/// Outcome of a successful [RoadGraph::add_road].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadInsertion {
    /// A one-way road was added.
    OneWay,

    /// A bidirectional road was added together with its mirror.
    Bidirectional,

    /// A bidirectional road was added, but an edge in the reverse direction
    /// already existed and was left untouched.
    MirrorAlreadyPresent,

    /// A bidirectional road was added, but its mirror was not, as the graph
    /// has run out of capacity. Only the forward direction exists.
    MirrorCapacityExceeded,
}

impl RoadInsertion {
    /// Returns `true` if a bidirectional road was requested, but no mirror edge was created.
    pub fn is_partial(self) -> bool {
        matches!(
            self,
            RoadInsertion::MirrorAlreadyPresent | RoadInsertion::MirrorCapacityExceeded
        )
    }
}

/// Directed, weighted [Roads](Road) between locations, keyed by their starting location.
///
/// The graph never contains self-loops nor two roads with the same `(from, to)` pair,
/// and holds at most `capacity` directed roads. Bidirectional roads are stored as
/// pairs of mirrored edges and every mutation of a bidirectional road is also applied
/// to the edge in the reverse direction.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadGraph {
    roads: BTreeMap<i64, Vec<Road>>,
    len: usize,
    capacity: usize,
}

impl RoadGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            roads: BTreeMap::default(),
            len: 0,
            capacity,
        }
    }

    /// Returns the number of directed roads in the graph.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator over all [Roads](Road), ordered by starting location.
    pub fn iter(&self) -> impl Iterator<Item = &Road> {
        self.roads.values().flatten()
    }

    /// Gets all outgoing [Roads](Road) from a location with a given id.
    pub fn get_edges(&self, from_id: i64) -> &[Road] {
        self.roads
            .get(&from_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Gets the [Road] from one location to another.
    pub fn get_road(&self, from_id: i64, to_id: i64) -> Option<&Road> {
        self.get_edges(from_id).iter().find(|r| r.to == to_id)
    }

    pub fn contains(&self, from_id: i64, to_id: i64) -> bool {
        self.get_road(from_id, to_id).is_some()
    }

    fn get_road_mut(&mut self, from_id: i64, to_id: i64) -> Option<&mut Road> {
        self.roads
            .get_mut(&from_id)
            .and_then(|roads| roads.iter_mut().find(|r| r.to == to_id))
    }

    fn insert(&mut self, road: Road) {
        debug_assert_ne!(road.from, road.to);
        debug_assert!(!self.contains(road.from, road.to));
        debug_assert!(self.len < self.capacity);

        self.roads.entry(road.from).or_default().push(road);
        self.len += 1;
    }

    fn remove(&mut self, from_id: i64, to_id: i64) -> Option<Road> {
        let Entry::Occupied(mut e) = self.roads.entry(from_id) else {
            return None;
        };

        let idx = e.get().iter().position(|r| r.to == to_id)?;
        let road = e.get_mut().remove(idx);
        if e.get().is_empty() {
            e.remove();
        }

        self.len -= 1;
        Some(road)
    }

    /// Adds a new [Road] to the graph.
    ///
    /// Both endpoints must be registered in `locations`. If the road is not one-way,
    /// the reverse edge is added as well, unless it already exists or the graph
    /// is full - in which case the returned [RoadInsertion] tells so.
    pub fn add_road(&mut self, locations: &LocationRegistry, road: Road) -> Result<RoadInsertion> {
        if road.from == road.to {
            return Err(Error::SelfLoop(road.from));
        }
        for endpoint in [road.from, road.to] {
            if !locations.contains(endpoint) {
                return Err(Error::UnknownEndpoint(endpoint));
            }
        }
        if self.contains(road.from, road.to) {
            return Err(Error::DuplicateRoad {
                from: road.from,
                to: road.to,
            });
        }
        if road.distance <= 0 {
            return Err(Error::NonPositiveDistance(road.distance));
        }
        if self.len >= self.capacity {
            return Err(Error::RoadCapacity(self.capacity));
        }

        self.insert(road);
        log::debug!("added road {} -> {}", road.from, road.to);

        if road.one_way {
            return Ok(RoadInsertion::OneWay);
        }

        if self.contains(road.to, road.from) {
            log::warn!(
                "road {} -> {} already exists, not mirroring road {} -> {}",
                road.to,
                road.from,
                road.from,
                road.to,
            );
            Ok(RoadInsertion::MirrorAlreadyPresent)
        } else if self.len >= self.capacity {
            log::warn!(
                "maximum number of roads ({}) reached, road {} -> {} was added without its mirror",
                self.capacity,
                road.from,
                road.to,
            );
            Ok(RoadInsertion::MirrorCapacityExceeded)
        } else {
            self.insert(road.mirrored());
            Ok(RoadInsertion::Bidirectional)
        }
    }

    /// Removes the road from one location to another, returning it.
    ///
    /// If the removed road was bidirectional, the reverse edge (if any) is removed as well.
    pub fn delete_road(&mut self, from_id: i64, to_id: i64) -> Result<Road> {
        let road = self.remove(from_id, to_id).ok_or(Error::RoadNotFound {
            from: from_id,
            to: to_id,
        })?;

        if !road.one_way && self.remove(to_id, from_id).is_some() {
            log::debug!("removed road {} <-> {}", from_id, to_id);
        } else {
            log::debug!("removed road {} -> {}", from_id, to_id);
        }

        Ok(road)
    }

    /// Applies `f` to the road from one location to another, and to its mirror if the
    /// road is bidirectional. Returns the updated forward road.
    fn update<F: FnMut(&mut Road)>(&mut self, from_id: i64, to_id: i64, mut f: F) -> Result<Road> {
        let road = self
            .get_road_mut(from_id, to_id)
            .ok_or(Error::RoadNotFound {
                from: from_id,
                to: to_id,
            })?;
        f(road);
        let road = *road;

        if !road.one_way {
            if let Some(mirror) = self.get_road_mut(to_id, from_id) {
                f(mirror);
            }
        }

        Ok(road)
    }

    /// Changes the distance of a road (and its mirror).
    pub fn set_distance(&mut self, from_id: i64, to_id: i64, distance: i64) -> Result<()> {
        if distance <= 0 {
            return Err(Error::NonPositiveDistance(distance));
        }
        self.update(from_id, to_id, |r| r.distance = distance)?;
        Ok(())
    }

    /// Changes the traffic status of a road (and its mirror).
    pub fn set_status(&mut self, from_id: i64, to_id: i64, status: Status) -> Result<()> {
        self.update(from_id, to_id, |r| r.status = status)?;
        Ok(())
    }

    /// Flips availability of a road, returning its new state.
    ///
    /// The mirror of a bidirectional road is set to the same state,
    /// even if it was out of sync before.
    pub fn toggle_availability(&mut self, from_id: i64, to_id: i64) -> Result<bool> {
        let available = !self
            .get_road(from_id, to_id)
            .ok_or(Error::RoadNotFound {
                from: from_id,
                to: to_id,
            })?
            .available;

        self.update(from_id, to_id, |r| r.available = available)?;
        Ok(available)
    }
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::with_capacity(crate::Options::default().max_roads)
    }
}
