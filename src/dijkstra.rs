// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::iter;

use crate::{Error, Result, RoadGraph};

/// Result of [find_shortest_path].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Ids of locations along the path, including both endpoints.
    pub path: Vec<i64>,

    /// Sum of [weights](crate::Road::weight) of all traversed roads.
    pub total_distance: i64,
}

/// Follows `came_from` links back from `to_id`, returning the path in travel order.
fn reconstruct_path(came_from: &HashMap<i64, i64>, to_id: i64) -> Vec<i64> {
    let mut path: Vec<i64> =
        iter::successors(Some(to_id), |at| came_from.get(at).copied()).collect();
    path.reverse();
    path
}

/// Picks the unvisited location with the lowest tentative cost.
/// On ties, the location with the lowest id wins.
fn closest_unvisited(
    known_costs: &BTreeMap<i64, i64>,
    visited: &BTreeSet<i64>,
) -> Option<(i64, i64)> {
    let mut best: Option<(i64, i64)> = None;
    for (&id, &cost) in known_costs {
        if visited.contains(&id) {
            continue;
        }
        if best.map_or(true, |(_, best_cost)| cost < best_cost) {
            best = Some((id, cost));
        }
    }
    best
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the cheapest route between two locations in the provided graph.
///
/// Roads which are [blocked](crate::Status::Blocked) or unavailable are skipped,
/// other roads cost their [weight](crate::Road::weight). Roads leading to or from
/// removed locations are still traversed.
///
/// Tentative costs are kept in an ordered map keyed by location id, and the next
/// location to expand is found by a linear scan over it. This makes the search
/// quadratic in the number of reachable locations, which is fine for the small
/// networks this crate targets, and gives deterministic tie-breaking: among equally
/// distant candidates, the one with the lowest id is expanded first.
///
/// Returns [Error::NoPath] if `to_id` can't be reached from `from_id`.
pub fn find_shortest_path(g: &RoadGraph, from_id: i64, to_id: i64) -> Result<ShortestPath> {
    let mut known_costs: BTreeMap<i64, i64> = BTreeMap::default();
    let mut came_from: HashMap<i64, i64> = HashMap::default();
    let mut visited: BTreeSet<i64> = BTreeSet::default();

    known_costs.insert(from_id, 0);

    while let Some((at, cost)) = closest_unvisited(&known_costs, &visited) {
        visited.insert(at);

        // Costs of visited locations are final
        if at == to_id {
            break;
        }

        for road in g.get_edges(at) {
            let Some(weight) = road.weight() else {
                continue;
            };
            if visited.contains(&road.to) {
                continue;
            }

            let neighbor_cost = cost.saturating_add(weight);
            if neighbor_cost
                < known_costs
                    .get(&road.to)
                    .copied()
                    .unwrap_or(i64::MAX)
            {
                log::trace!("relaxed {} -> {}: {}", at, road.to, neighbor_cost);
                known_costs.insert(road.to, neighbor_cost);
                came_from.insert(road.to, at);
            }
        }
    }

    match known_costs.get(&to_id) {
        Some(&total_distance) => {
            let path = reconstruct_path(&came_from, to_id);
            log::debug!(
                "found path {} -> {} over {} locations, cost {} ({} expanded)",
                from_id,
                to_id,
                path.len(),
                total_distance,
                visited.len(),
            );
            Ok(ShortestPath {
                path,
                total_distance,
            })
        }

        None => {
            log::debug!(
                "no path {} -> {} ({} expanded)",
                from_id,
                to_id,
                visited.len()
            );
            Err(Error::NoPath {
                from: from_id,
                to: to_id,
            })
        }
    }
}
