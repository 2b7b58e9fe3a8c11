// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::iter;

use crate::{Error, Network, Result, PATH_SEPARATOR};

/// Marker appended to routes rendered by a [RouteBuilder].
pub const ROUTE_END_MARKER: &str = " (end)";

/// Helper for constructing a route by hand, one location at a time.
///
/// The route behaves like a stack: only its last location can be extended or removed.
/// Every extension must follow an existing road of the [Network] from the current
/// last location, so that only routes which can actually be driven can be built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteBuilder {
    path: Vec<i64>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the last location of the route.
    pub fn top(&self) -> Option<i64> {
        self.path.last().copied()
    }

    /// Returns location ids in travel order, from the first to the last one.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i64> + ExactSizeIterator + Clone + '_ {
        self.path.iter().copied()
    }

    /// Returns location ids in removal order, from the last to the first one.
    pub fn iter_from_top(&self) -> impl Iterator<Item = i64> + Clone + '_ {
        self.iter().rev()
    }

    /// Extends the route with another location.
    ///
    /// Fails with [Error::LocationNotFound] for unknown locations, and with
    /// [Error::NoRoad] if there is no road from the current last location to `id`.
    /// A failed push leaves the route unchanged.
    pub fn push(&mut self, network: &Network, id: i64) -> Result<()> {
        if !network.locations().contains(id) {
            return Err(Error::LocationNotFound(id));
        }

        if let Some(top) = self.top() {
            if !network.roads().contains(top, id) {
                return Err(Error::NoRoad { from: top, to: id });
            }
        }

        self.path.push(id);
        Ok(())
    }

    /// Removes and returns the last location of the route.
    pub fn pop(&mut self) -> Result<i64> {
        self.path.pop().ok_or(Error::EmptyBuilder)
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }

    /// Returns names of all locations in the route, in travel order.
    pub fn names<'a>(
        &'a self,
        network: &'a Network,
    ) -> impl Iterator<Item = &'a str> + Clone + 'a {
        self.path
            .iter()
            .map(move |&id| network.locations().name(id))
    }

    /// Returns fragments of the route description: location names interleaved
    /// with [PATH_SEPARATOR] and followed by [ROUTE_END_MARKER].
    ///
    /// Concatenating the fragments gives [RouteBuilder::render_string].
    pub fn render<'a>(
        &'a self,
        network: &'a Network,
    ) -> impl Iterator<Item = &'a str> + Clone + 'a {
        self.names(network)
            .enumerate()
            .flat_map(|(i, name)| {
                (i > 0)
                    .then_some(PATH_SEPARATOR)
                    .into_iter()
                    .chain(iter::once(name))
            })
            .chain(iter::once(ROUTE_END_MARKER))
    }

    /// Returns the description of the route, e.g. `"DHA -> Anarkali (end)"`.
    pub fn render_string(&self, network: &Network) -> String {
        self.render(network).collect()
    }

    /// Records the route in the [history](crate::RouteHistory) of the network,
    /// returning the recorded description.
    ///
    /// The route itself is left untouched, so that it can be further extended
    /// or [cleared](RouteBuilder::clear).
    pub fn commit(&self, network: &mut Network) -> Result<String> {
        if self.path.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let description = self.render_string(network);
        network.history_mut().append(description.clone());
        log::debug!("committed manual route over {} locations", self.path.len());
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Status};

    fn network() -> Network {
        let mut net = Network::default();
        net.add_location(1, "DHA").unwrap();
        net.add_location(2, "Sadar Bazaar").unwrap();
        net.add_location(3, "Anarkali").unwrap();
        net.add_location(4, "Model Town").unwrap();
        net.add_road(1, 2, 8, Status::Normal, false, true).unwrap();
        net.add_road(2, 3, 6, Status::Normal, false, true).unwrap();
        net.add_road(3, 4, 12, Status::Blocked, true, false).unwrap();
        net
    }

    #[test]
    fn push_follows_roads() {
        let net = network();
        let mut b = RouteBuilder::new();

        b.push(&net, 1).unwrap();
        b.push(&net, 2).unwrap();
        b.push(&net, 3).unwrap();
        // blocked and unavailable roads still count as roads
        b.push(&net, 4).unwrap();

        assert_eq!(b.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(b.iter_from_top().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(b.top(), Some(4));
    }

    #[test]
    fn push_rejects_non_adjacent() {
        let net = network();
        let mut b = RouteBuilder::new();
        b.push(&net, 1).unwrap();

        let err = b.push(&net, 3).unwrap_err();
        assert_eq!(err, Error::NoRoad { from: 1, to: 3 });
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![1]);

        // one-way road 3 -> 4 can't be driven backwards
        b.clear();
        b.push(&net, 4).unwrap();
        assert_eq!(b.push(&net, 3), Err(Error::NoRoad { from: 4, to: 3 }));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn push_rejects_unknown_location() {
        let net = network();
        let mut b = RouteBuilder::new();

        let err = b.push(&net, 42).unwrap_err();
        assert_eq!(err, Error::LocationNotFound(42));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(b.is_empty());
    }

    #[test]
    fn pop() {
        let net = network();
        let mut b = RouteBuilder::new();
        b.push(&net, 1).unwrap();
        b.push(&net, 2).unwrap();

        assert_eq!(b.pop(), Ok(2));
        assert_eq!(b.pop(), Ok(1));

        let err = b.pop().unwrap_err();
        assert_eq!(err, Error::EmptyBuilder);
        assert_eq!(err.kind(), ErrorKind::Empty);
    }

    #[test]
    fn render() {
        let mut net = network();
        let mut b = RouteBuilder::new();
        b.push(&net, 1).unwrap();
        b.push(&net, 2).unwrap();
        b.push(&net, 3).unwrap();

        let fragments = b.render(&net);
        assert_eq!(
            fragments.clone().collect::<Vec<_>>(),
            vec![
                "DHA",
                " -> ",
                "Sadar Bazaar",
                " -> ",
                "Anarkali",
                " (end)"
            ]
        );
        assert_eq!(
            fragments.collect::<String>(),
            "DHA -> Sadar Bazaar -> Anarkali (end)"
        );

        net.remove_location(2).unwrap();
        assert_eq!(
            b.render_string(&net),
            "DHA -> Unknown Location -> Anarkali (end)"
        );
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn render_single_location() {
        let net = network();
        let mut b = RouteBuilder::new();
        b.push(&net, 4).unwrap();
        assert_eq!(b.render_string(&net), "Model Town (end)");
    }

    #[test]
    fn commit() {
        let mut net = network();
        let mut b = RouteBuilder::new();

        assert_eq!(b.commit(&mut net), Err(Error::EmptyRoute));
        assert!(net.history().is_empty());

        b.push(&net, 1).unwrap();
        b.push(&net, 2).unwrap();
        assert_eq!(
            b.commit(&mut net).unwrap(),
            "DHA -> Sadar Bazaar (end)"
        );

        b.push(&net, 3).unwrap();
        b.commit(&mut net).unwrap();

        assert_eq!(
            net.history().iter().collect::<Vec<_>>(),
            vec![
                "DHA -> Sadar Bazaar -> Anarkali (end)",
                "DHA -> Sadar Bazaar (end)"
            ]
        );
        assert_eq!(b.len(), 3);
    }
}
