// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Network, Status};

/// Summary counts of a [Network].
///
/// Road counts are per directed edge, so a bidirectional road counts twice.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub locations: usize,
    pub roads: usize,
    pub normal: usize,
    pub heavy_traffic: usize,
    pub blocked: usize,
    pub available: usize,
    pub unavailable: usize,
    pub one_way: usize,

    /// Number of directed edges belonging to bidirectional roads,
    /// see [Statistics::bidirectional_roads].
    pub bidirectional_edges: usize,

    /// Sum of base (not traffic-weighted) distances of all roads.
    pub total_distance: i64,

    /// Mean base distance of a road, or [None] if there are no roads.
    pub average_distance: Option<f64>,

    /// Number of routes in the history.
    pub routes: usize,
}

impl Statistics {
    pub(crate) fn collect(network: &Network) -> Self {
        let mut s = Self {
            locations: network.locations().len(),
            routes: network.history().len(),
            ..Self::default()
        };

        for road in network.roads().iter() {
            s.roads += 1;
            match road.status {
                Status::Normal => s.normal += 1,
                Status::HeavyTraffic => s.heavy_traffic += 1,
                Status::Blocked => s.blocked += 1,
            }
            if road.available {
                s.available += 1;
            } else {
                s.unavailable += 1;
            }
            if road.one_way {
                s.one_way += 1;
            } else {
                s.bidirectional_edges += 1;
            }
            s.total_distance = s.total_distance.saturating_add(road.distance);
        }

        if s.roads > 0 {
            s.average_distance = Some(s.total_distance as f64 / s.roads as f64);
        }

        s
    }

    /// Number of bidirectional roads, counting each mirrored pair of edges once.
    pub fn bidirectional_roads(&self) -> usize {
        self.bidirectional_edges / 2
    }
}
