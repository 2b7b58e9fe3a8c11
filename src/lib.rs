// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Traffic-aware routing over a small, hand-maintained road network.
//!
//! A [Network] holds named [Locations](Location), directed [Roads](Road) between them
//! and a log of previously computed routes. Roads may be one-way or bidirectional;
//! bidirectional roads are stored as two mirrored directed edges which are kept in sync
//! on every mutation. Shortest paths are computed with Dijkstra's algorithm,
//! skipping blocked and unavailable roads and inflating the cost of roads
//! with [heavy traffic](Status::HeavyTraffic).
//!
//! # Example
//!
//! ```
//! use smartnav::{Network, Status};
//!
//! let mut net = Network::default();
//! net.add_location(1, "Depot").unwrap();
//! net.add_location(2, "Market").unwrap();
//! net.add_location(3, "Harbour").unwrap();
//! net.add_road(1, 2, 5, Status::Normal, false, true).unwrap();
//! net.add_road(2, 3, 5, Status::HeavyTraffic, false, true).unwrap();
//! net.add_road(1, 3, 20, Status::Normal, false, true).unwrap();
//!
//! let route = net.compute_shortest_path(1, 3).unwrap();
//! assert_eq!(route.path, vec![1, 2, 3]);
//! assert_eq!(route.total_distance, 12);
//!
//! let cost = smartnav::estimate_cost(route.total_distance);
//! println!("{:.2} L, {}h {}m", cost.fuel_liters, cost.hours, cost.minutes);
//! ```

mod builder;
mod cost;
pub mod demo;
mod dijkstra;
mod error;
mod graph;
mod history;
mod network;
mod registry;
mod stats;

pub use builder::{RouteBuilder, ROUTE_END_MARKER};
pub use cost::{estimate_cost, CostEstimate, CostRates};
pub use dijkstra::{find_shortest_path, ShortestPath};
pub use error::{Error, ErrorKind, Result};
pub use graph::{RoadGraph, RoadInsertion};
pub use history::RouteHistory;
pub use network::{Network, Options};
pub use registry::{LocationRegistry, UNKNOWN_LOCATION};
pub use stats::Statistics;

/// Separator placed between location names in rendered routes.
pub const PATH_SEPARATOR: &str = " -> ";

/// A named place in the road network.
///
/// Ids are assigned by the caller and only need to be unique within a [LocationRegistry].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

/// Traffic condition of a [Road].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Normal,
    HeavyTraffic,
    Blocked,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Normal, Status::HeavyTraffic, Status::Blocked];

    /// Factor by which the base distance of a road is inflated for routing purposes.
    pub fn multiplier(self) -> f64 {
        match self {
            Status::HeavyTraffic => 1.5,
            Status::Normal | Status::Blocked => 1.0,
        }
    }

    /// Returns the routing weight of a road with the given base distance,
    /// `floor(distance × multiplier)`, or [None] for blocked roads.
    ///
    /// `distance` must be positive.
    pub fn weight(self, distance: i64) -> Option<i64> {
        debug_assert!(distance > 0);
        match self {
            Status::Normal => Some(distance),
            // floor(d * 1.5) computed exactly in integers
            Status::HeavyTraffic => Some(distance.saturating_add(distance / 2)),
            Status::Blocked => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Normal => "Normal",
            Status::HeavyTraffic => "Heavy Traffic",
            Status::Blocked => "Blocked",
        })
    }
}

impl std::str::FromStr for Status {
    type Err = Error;

    /// Parses the presentation form of a status. Both `"Heavy Traffic"` and
    /// `"HeavyTraffic"` are accepted; matching is exact otherwise.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Normal" => Ok(Status::Normal),
            "Heavy Traffic" | "HeavyTraffic" => Ok(Status::HeavyTraffic),
            "Blocked" => Ok(Status::Blocked),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// A directed connection between two [Locations](Location).
///
/// Bidirectional roads are represented by two `Road`s with `one_way == false`,
/// one in each direction (see [RoadGraph::add_road]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub from: i64,
    pub to: i64,
    pub distance: i64,
    pub status: Status,
    pub one_way: bool,
    pub available: bool,
}

impl Road {
    /// Returns the reverse edge of this road, as created for bidirectional roads.
    pub fn mirrored(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            one_way: false,
            ..*self
        }
    }

    /// Returns the cost of traversing this road, or [None] if the road can't be used
    /// (because it's [blocked](Status::Blocked) or unavailable).
    pub fn weight(&self) -> Option<i64> {
        if self.available {
            self.status.weight(self.distance)
        } else {
            None
        }
    }
}
