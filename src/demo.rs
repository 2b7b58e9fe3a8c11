// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Small sample network of neighbourhoods of Lahore.

use crate::{Network, Result, Status};

/// Locations of the demo network, as `(id, name)`.
pub const LOCATIONS: [(i64, &str); 10] = [
    (1, "DHA"),
    (2, "Sadar Bazaar"),
    (3, "Anarkali"),
    (4, "Model Town"),
    (5, "Gulberg"),
    (6, "Defence Road"),
    (7, "Canal Road"),
    (8, "Mall Road"),
    (9, "Johar Town"),
    (10, "Bahria Town"),
];

/// Bidirectional roads of the demo network, as `(from, to, distance, status)`.
pub const ROADS: [(i64, i64, i64, Status); 20] = [
    (1, 2, 8, Status::Normal),
    (2, 3, 6, Status::Normal),
    (3, 4, 12, Status::HeavyTraffic),
    (4, 5, 5, Status::Normal),
    (5, 6, 9, Status::Normal),
    (6, 7, 7, Status::HeavyTraffic),
    (7, 8, 4, Status::Normal),
    (8, 9, 10, Status::Blocked),
    (9, 10, 14, Status::Normal),
    (10, 1, 18, Status::HeavyTraffic),
    (1, 3, 14, Status::Normal),
    (2, 4, 15, Status::Normal),
    (3, 5, 11, Status::Normal),
    (4, 6, 8, Status::HeavyTraffic),
    (5, 7, 13, Status::Normal),
    (6, 8, 9, Status::Normal),
    (7, 9, 12, Status::Normal),
    (8, 10, 16, Status::HeavyTraffic),
    (2, 6, 18, Status::Normal),
    (9, 1, 20, Status::Normal),
];

/// Adds the demo [LOCATIONS] and [ROADS] to a network.
///
/// Fails if any of the demo ids are already taken, or the network
/// can't hold 10 locations and 40 directed roads.
pub fn load_demo(network: &mut Network) -> Result<()> {
    for (id, name) in LOCATIONS {
        network.add_location(id, name)?;
    }

    for (from, to, distance, status) in ROADS {
        let outcome = network.add_road(from, to, distance, status, false, true)?;
        if outcome.is_partial() {
            log::warn!("demo road {} <-> {} was only added one way", from, to);
        }
    }

    log::info!(
        "loaded demo network: {} locations, {} roads",
        network.locations().len(),
        network.roads().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Options};

    #[test]
    fn load() {
        let mut net = Network::default();
        load_demo(&mut net).unwrap();

        assert_eq!(net.locations().len(), 10);
        assert_eq!(net.roads().len(), 40);
        assert_eq!(net.location_name(8), "Mall Road");

        let s = net.statistics();
        assert_eq!(s.bidirectional_edges, 40);
        assert_eq!(s.bidirectional_roads(), 20);
        assert_eq!(s.blocked, 2);
        assert_eq!(s.heavy_traffic, 10);
    }

    #[test]
    fn shortest_path_avoids_blocked_road() {
        let mut net = Network::default();
        load_demo(&mut net).unwrap();

        let route = net.compute_shortest_path(1, 8).unwrap();
        assert_eq!(route.path, vec![1, 2, 6, 8]);
        assert_eq!(route.total_distance, 35);
        assert_eq!(
            net.history().latest(),
            Some("DHA -> Sadar Bazaar -> Defence Road -> Mall Road (Distance: 35 km)")
        );

        let route = net.compute_shortest_path(8, 9).unwrap();
        assert_eq!(route.path, vec![8, 7, 9]);
        assert_eq!(route.total_distance, 16);

        let (_, cost) = net.estimate_path_cost(1, 8).unwrap();
        assert_eq!((cost.hours, cost.minutes), (0, 52));
    }

    #[test]
    fn too_small_network() {
        let mut net = Network::new(Options {
            max_roads: 10,
            ..Options::default()
        });
        let err = load_demo(&mut net).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
    }
}
