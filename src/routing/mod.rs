// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod dijkstra;
mod error;

use log::debug;

use crate::campus::Campus;
use crate::{BuildingRegistry, Location, PathGraph};

pub use error::RouteError;

/// Shortest route between two buildings.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Ids of visited [Locations](Location), from start to end (inclusive).
    pub path: Vec<i64>,

    /// Exact sum of distances of the traversed connections.
    pub total_distance: f64,
}

impl Route {
    /// Returns true if the route starts and ends at the same building.
    pub fn is_trivial(&self) -> bool {
        self.path.len() <= 1
    }
}

/// Computes shortest [Routes](Route) between buildings named by the caller.
///
/// The engine only borrows the campus, and every call is independent
/// of any other, so a single [Campus] may serve any number of engines
/// on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct RoutingEngine<'a> {
    registry: &'a BuildingRegistry,
    graph: &'a PathGraph,
}

impl<'a> RoutingEngine<'a> {
    pub fn new(campus: &'a Campus) -> Self {
        Self {
            registry: campus.registry(),
            graph: campus.graph(),
        }
    }

    /// Finds the shortest route between two buildings, identified by their names
    /// (see [BuildingRegistry::find_by_name]).
    ///
    /// When several routes share the shortest distance, the result is the one
    /// discovered first when expanding nodes in order of (distance, id),
    /// which makes the result reproducible for a given campus.
    pub fn route(&self, start_name: &str, end_name: &str) -> Result<Route, RouteError> {
        let start = self.resolve(start_name)?;
        let end = self.resolve(end_name)?;
        self.route_between(start, end)
    }

    /// Like [RoutingEngine::route], but for already resolved [Locations](Location).
    pub fn route_between(&self, start: &Location, end: &Location) -> Result<Route, RouteError> {
        if start.id == end.id {
            return Ok(Route {
                path: vec![start.id],
                total_distance: 0.0,
            });
        }

        let search = dijkstra::shortest_path(self.graph, start.id, end.id);
        debug!(
            "routed '{}' -> '{}': {} node(s) expanded, found: {}",
            start.name,
            end.name,
            search.expanded,
            search.route.is_some(),
        );

        search.route.ok_or_else(|| RouteError::NoRouteFound {
            start: start.name.clone(),
            end: end.name.clone(),
        })
    }

    /// Maps a route onto its [Locations](Location).
    ///
    /// Ids unknown to the registry are skipped; this can only happen
    /// for routes which were not produced by this engine.
    pub fn locations(&self, route: &Route) -> Vec<&'a Location> {
        route
            .path
            .iter()
            .filter_map(|&id| self.registry.find_by_id(id))
            .collect()
    }

    /// Finds a building by name, as [RoutingEngine::route] does for its arguments.
    pub fn resolve(&self, name: &str) -> Result<&'a Location, RouteError> {
        self.registry
            .find_by_name(name)
            .ok_or_else(|| RouteError::UnknownLocation(name.trim().to_string()))
    }
}
