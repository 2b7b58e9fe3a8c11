// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{
    find_shortest_path, CostEstimate, CostRates, Error, Location, LocationRegistry, Result, Road,
    RoadGraph, RoadInsertion, RouteHistory, ShortestPath, Statistics, Status, PATH_SEPARATOR,
};

/// Limits and rates of a [Network].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Maximum number of registered locations.
    pub max_locations: usize,

    /// Maximum number of directed roads. A bidirectional road takes up two slots.
    pub max_roads: usize,

    /// Rates used by [Network::estimate_cost].
    pub rates: CostRates,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_locations: 50,
            max_roads: 100,
            rates: CostRates::default(),
        }
    }
}

/// Locations, roads between them and the history of computed routes.
///
/// This is the entry point of the crate: all mutations go through a `Network`,
/// so that the invariants of its [LocationRegistry] and [RoadGraph] are preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    locations: LocationRegistry,
    roads: RoadGraph,
    history: RouteHistory,
    rates: CostRates,
}

impl Network {
    pub fn new(options: Options) -> Self {
        Self {
            locations: LocationRegistry::with_capacity(options.max_locations),
            roads: RoadGraph::with_capacity(options.max_roads),
            history: RouteHistory::default(),
            rates: options.rates,
        }
    }

    pub fn locations(&self) -> &LocationRegistry {
        &self.locations
    }

    pub fn roads(&self) -> &RoadGraph {
        &self.roads
    }

    pub fn history(&self) -> &RouteHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut RouteHistory {
        &mut self.history
    }

    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Returns the name of a location, or [UNKNOWN_LOCATION](crate::UNKNOWN_LOCATION).
    pub fn location_name(&self, id: i64) -> &str {
        self.locations.name(id)
    }

    /// Registers a new location, see [LocationRegistry::add].
    pub fn add_location(&mut self, id: i64, name: &str) -> Result<()> {
        self.locations.add(id, name)?;
        log::debug!("added location {} ({:?})", id, name);
        Ok(())
    }

    /// Removes a location. Roads to and from the location are preserved.
    pub fn remove_location(&mut self, id: i64) -> Result<Location> {
        let location = self.locations.remove(id)?;
        log::debug!("removed location {} ({:?})", id, location.name);
        Ok(location)
    }

    /// Adds a road between two registered locations, see [RoadGraph::add_road].
    pub fn add_road(
        &mut self,
        from_id: i64,
        to_id: i64,
        distance: i64,
        status: Status,
        one_way: bool,
        available: bool,
    ) -> Result<RoadInsertion> {
        self.roads.add_road(
            &self.locations,
            Road {
                from: from_id,
                to: to_id,
                distance,
                status,
                one_way,
                available,
            },
        )
    }

    /// Removes a road (and its mirror, if the road is bidirectional).
    pub fn remove_road(&mut self, from_id: i64, to_id: i64) -> Result<()> {
        self.roads.delete_road(from_id, to_id)?;
        Ok(())
    }

    pub fn update_road_distance(&mut self, from_id: i64, to_id: i64, distance: i64) -> Result<()> {
        self.roads.set_distance(from_id, to_id, distance)
    }

    pub fn update_road_status(&mut self, from_id: i64, to_id: i64, status: Status) -> Result<()> {
        self.roads.set_status(from_id, to_id, status)
    }

    /// Flips availability of a road, returning its new state.
    pub fn toggle_road_availability(&mut self, from_id: i64, to_id: i64) -> Result<bool> {
        self.roads.toggle_availability(from_id, to_id)
    }

    /// Gets all outgoing roads from a location.
    pub fn adjacency_of(&self, id: i64) -> &[Road] {
        self.roads.get_edges(id)
    }

    fn check_endpoints(&self, start: i64, end: i64) -> Result<()> {
        for id in [start, end] {
            if !self.locations.contains(id) {
                return Err(Error::UnknownEndpoint(id));
            }
        }
        if start == end {
            return Err(Error::SameEndpoints(start));
        }
        Ok(())
    }

    /// Finds the cheapest route between two distinct, registered locations
    /// and records it in the history.
    pub fn compute_shortest_path(&mut self, start: i64, end: i64) -> Result<ShortestPath> {
        self.check_endpoints(start, end)?;
        let route = find_shortest_path(&self.roads, start, end)?;
        let description = self.describe_path(&route);
        self.history.append(description);
        Ok(route)
    }

    /// Finds the cheapest route between two distinct, registered locations
    /// and estimates the cost of travelling it. The history is left untouched.
    pub fn estimate_path_cost(&self, start: i64, end: i64) -> Result<(ShortestPath, CostEstimate)> {
        self.check_endpoints(start, end)?;
        let route = find_shortest_path(&self.roads, start, end)?;
        let estimate = self.estimate_cost(route.total_distance);
        Ok((route, estimate))
    }

    /// Estimates the cost of travelling `total_distance` with the configured [rates](Options::rates).
    pub fn estimate_cost(&self, total_distance: i64) -> CostEstimate {
        self.rates.estimate(total_distance)
    }

    /// Returns the history description of a route, e.g. `"DHA -> Anarkali (Distance: 14 km)"`.
    pub fn describe_path(&self, route: &ShortestPath) -> String {
        let names: Vec<&str> = route
            .path
            .iter()
            .map(|&id| self.location_name(id))
            .collect();
        format!(
            "{} (Distance: {} km)",
            names.join(PATH_SEPARATOR),
            route.total_distance
        )
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Summarizes the current state of the network.
    pub fn statistics(&self) -> Statistics {
        Statistics::collect(self)
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, UNKNOWN_LOCATION};

    fn triangle() -> Network {
        let mut net = Network::default();
        net.add_location(1, "A").unwrap();
        net.add_location(2, "B").unwrap();
        net.add_location(3, "C").unwrap();
        net.add_road(1, 2, 5, Status::Normal, false, true).unwrap();
        net.add_road(2, 3, 5, Status::HeavyTraffic, false, true)
            .unwrap();
        net.add_road(1, 3, 20, Status::Normal, false, true).unwrap();
        net
    }

    #[test]
    fn shortest_path_is_recorded() {
        let mut net = triangle();
        let route = net.compute_shortest_path(1, 3).unwrap();
        assert_eq!(route.path, vec![1, 2, 3]);
        assert_eq!(route.total_distance, 12);
        assert_eq!(net.history().latest(), Some("A -> B -> C (Distance: 12 km)"));

        net.compute_shortest_path(3, 1).unwrap();
        assert_eq!(
            net.history().iter().collect::<Vec<_>>(),
            vec![
                "C -> B -> A (Distance: 12 km)",
                "A -> B -> C (Distance: 12 km)"
            ]
        );

        net.clear_history();
        assert!(net.history().is_empty());
    }

    #[test]
    fn shortest_path_endpoint_validation() {
        let mut net = triangle();

        let err = net.compute_shortest_path(1, 1).unwrap_err();
        assert_eq!(err, Error::SameEndpoints(1));
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = net.compute_shortest_path(1, 9).unwrap_err();
        assert_eq!(err, Error::UnknownEndpoint(9));
        assert_eq!(err.kind(), ErrorKind::Validation);

        assert!(net.history().is_empty());
    }

    #[test]
    fn no_path_is_not_recorded() {
        let mut net = triangle();
        net.add_location(4, "D").unwrap();

        let err = net.compute_shortest_path(1, 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoPath);
        assert!(net.history().is_empty());
    }

    #[test]
    fn blocking_only_connection() {
        let mut net = Network::default();
        net.add_location(1, "A").unwrap();
        net.add_location(2, "B").unwrap();
        net.add_road(1, 2, 3, Status::Normal, false, true).unwrap();
        assert!(net.compute_shortest_path(1, 2).is_ok());

        net.update_road_status(2, 1, Status::Blocked).unwrap();
        assert_eq!(
            net.compute_shortest_path(1, 2),
            Err(Error::NoPath { from: 1, to: 2 })
        );

        net.update_road_status(1, 2, Status::Normal).unwrap();
        assert_eq!(net.toggle_road_availability(1, 2), Ok(false));
        assert_eq!(
            net.compute_shortest_path(2, 1),
            Err(Error::NoPath { from: 2, to: 1 })
        );
    }

    #[test]
    fn estimate_path_cost() {
        let mut net = Network::default();
        net.add_location(1, "A").unwrap();
        net.add_location(2, "B").unwrap();
        net.add_road(1, 2, 40, Status::Normal, true, true).unwrap();

        let (route, cost) = net.estimate_path_cost(1, 2).unwrap();
        assert_eq!(route.total_distance, 40);
        assert_eq!((cost.hours, cost.minutes), (1, 0));
        assert_eq!(format!("{:.2}", cost.fuel_liters), "4.80");
        assert_eq!(format!("{:.2}", cost.fuel_cost), "7.20");
        assert!(net.history().is_empty());
    }

    #[test]
    fn custom_options() {
        let mut net = Network::new(Options {
            max_locations: 2,
            max_roads: 1,
            rates: CostRates {
                fuel_per_km: 1.0,
                average_speed_kmh: 10.0,
                fuel_price: 1.0,
            },
        });
        net.add_location(1, "A").unwrap();
        net.add_location(2, "B").unwrap();
        assert_eq!(net.add_location(3, "C"), Err(Error::LocationCapacity(2)));

        assert_eq!(
            net.add_road(1, 2, 15, Status::Normal, false, true),
            Ok(RoadInsertion::MirrorCapacityExceeded)
        );
        assert_eq!(
            net.add_road(2, 1, 15, Status::Normal, false, true),
            Err(Error::RoadCapacity(1))
        );

        let cost = net.estimate_cost(15);
        assert_eq!((cost.hours, cost.minutes), (1, 30));
        assert_eq!(cost.fuel_liters, 15.0);
    }

    #[test]
    fn mirror_invariant_through_network() {
        let mut net = triangle();
        for road in net.roads().iter() {
            let mirror = net.roads().get_road(road.to, road.from).unwrap();
            assert_eq!(mirror.distance, road.distance);
            assert_eq!(mirror.status, road.status);
            assert_eq!(mirror.available, road.available);
        }

        net.update_road_distance(3, 1, 9).unwrap();
        assert_eq!(net.roads().get_road(1, 3).unwrap().distance, 9);

        net.remove_road(1, 3).unwrap();
        assert!(net.adjacency_of(3).iter().all(|r| r.to != 1));
        assert_eq!(
            net.remove_road(1, 3).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn removed_locations_render_as_unknown() {
        let mut net = triangle();
        net.remove_location(2).unwrap();
        assert_eq!(net.adjacency_of(2).len(), 2);

        net.compute_shortest_path(1, 3).unwrap();
        assert_eq!(
            net.history().latest(),
            Some(format!("A -> {} -> C (Distance: 12 km)", UNKNOWN_LOCATION).as_str())
        );

        assert_eq!(
            net.remove_location(2).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }
}
