// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Error conditions which may occur during [RoutingEngine::route](crate::RoutingEngine::route).
///
/// Both are recoverable and caused by the query, not by the campus data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No building has the provided name.
    #[error("building '{0}' does not exist")]
    UnknownLocation(String),

    /// Both buildings exist, but there is no walkable connection between them.
    #[error("no route from '{start}' to '{end}'")]
    NoRouteFound { start: String, end: String },
}
