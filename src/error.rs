// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Broad category of an [Error], used by callers to decide how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or semantically invalid input.
    Validation,

    /// A referenced location or road doesn't exist.
    NotFound,

    /// A structural limit of the [Network](crate::Network) has been reached.
    Capacity,

    /// Route search found no connection between the requested locations.
    NoPath,

    /// An element was requested from an empty [RouteBuilder](crate::RouteBuilder).
    Empty,
}

/// Error conditions which may occur when querying or mutating a [Network](crate::Network).
///
/// None of these are fatal; every failed operation leaves the network unchanged
/// and can be retried with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("location name must not be empty")]
    EmptyName,

    #[error("location {0} already exists")]
    DuplicateLocation(i64),

    #[error("road can't start and end at location {0}")]
    SelfLoop(i64),

    #[error("road endpoint {0} is not a known location")]
    UnknownEndpoint(i64),

    #[error("distance must be positive, got {0}")]
    NonPositiveDistance(i64),

    #[error("unrecognized road status: {0:?} (expected Normal, Heavy Traffic or Blocked)")]
    UnknownStatus(String),

    #[error("road from {from} to {to} already exists")]
    DuplicateRoad { from: i64, to: i64 },

    #[error("no road from {from} to {to}")]
    NoRoad { from: i64, to: i64 },

    #[error("route is empty")]
    EmptyRoute,

    #[error("start and end location are the same: {0}")]
    SameEndpoints(i64),

    #[error("location {0} not found")]
    LocationNotFound(i64),

    #[error("road from {from} to {to} not found")]
    RoadNotFound { from: i64, to: i64 },

    #[error("maximum number of locations reached: {0}")]
    LocationCapacity(usize),

    #[error("maximum number of roads reached: {0}")]
    RoadCapacity(usize),

    #[error("no path from {from} to {to}")]
    NoPath { from: i64, to: i64 },

    #[error("route builder is empty")]
    EmptyBuilder,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyName
            | Error::DuplicateLocation(_)
            | Error::SelfLoop(_)
            | Error::UnknownEndpoint(_)
            | Error::NonPositiveDistance(_)
            | Error::UnknownStatus(_)
            | Error::DuplicateRoad { .. }
            | Error::NoRoad { .. }
            | Error::EmptyRoute
            | Error::SameEndpoints(_) => ErrorKind::Validation,

            Error::LocationNotFound(_) | Error::RoadNotFound { .. } => ErrorKind::NotFound,

            Error::LocationCapacity(_) | Error::RoadCapacity(_) => ErrorKind::Capacity,

            Error::NoPath { .. } => ErrorKind::NoPath,

            Error::EmptyBuilder => ErrorKind::Empty,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
