// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::btree_map::BTreeMap;

use log::warn;

use crate::campus::ValidationError;
use crate::{BuildingRegistry, Edge};

/// Represents walkable connections between campus buildings as
/// a weighted adjacency list, keyed by [Location](crate::Location) id.
///
/// Every location of the [BuildingRegistry] the graph was built from has
/// an entry, even if it has no connections. Outgoing connections of
/// every node are sorted by neighbor id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PathGraph(BTreeMap<i64, Vec<(i64, f64)>>);

impl PathGraph {
    /// Builds the graph from [Edges](Edge) validated against the registry.
    ///
    /// Edges are inserted in both directions, unless `respect_oneway` is set
    /// and the edge is marked as [oneway](Edge::oneway). Parallel connections
    /// collapse to the shortest one.
    pub(crate) fn new(
        registry: &BuildingRegistry,
        edges: &[Edge],
        respect_oneway: bool,
    ) -> Result<Self, ValidationError> {
        let mut g = Self(
            registry
                .all()
                .iter()
                .map(|location| (location.id, Vec::default()))
                .collect(),
        );
        let mut collapsed: usize = 0;

        for edge in edges {
            Self::validate_edge(registry, edge)?;

            let forward_only = respect_oneway && edge.oneway;
            if g.set_edge(edge.from_id, edge.to_id, edge.distance) {
                collapsed += 1;
            }
            if !forward_only {
                g.set_edge(edge.to_id, edge.from_id, edge.distance);
            }
        }

        if collapsed > 0 {
            warn!("collapsed {} parallel path(s) to the shortest one", collapsed);
        }

        g.0.values_mut()
            .for_each(|edges| edges.sort_by_key(|&(to, _)| to));
        Ok(g)
    }

    fn validate_edge(registry: &BuildingRegistry, edge: &Edge) -> Result<(), ValidationError> {
        for id in [edge.from_id, edge.to_id] {
            if !registry.contains(id) {
                return Err(ValidationError::DanglingReference {
                    from: edge.from_id,
                    to: edge.to_id,
                    missing: id,
                });
            }
        }

        if edge.from_id == edge.to_id {
            return Err(ValidationError::SelfLoop(edge.from_id));
        }

        if !(edge.distance > 0.0 && edge.distance.is_finite()) {
            return Err(ValidationError::NonPositiveDistance {
                from: edge.from_id,
                to: edge.to_id,
                distance: edge.distance,
            });
        }

        Ok(())
    }

    /// Creates a connection, or shortens an existing one.
    /// Returns true if a connection between the nodes already existed.
    fn set_edge(&mut self, from_id: i64, to_id: i64, distance: f64) -> bool {
        let edges = self.0.entry(from_id).or_default();
        if let Some(existing) = edges.iter_mut().find(|(to, _)| *to == to_id) {
            existing.1 = existing.1.min(distance);
            true
        } else {
            edges.push((to_id, distance));
            false
        }
    }

    /// Returns the number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of directed connections in the graph;
    /// an undirected path counts twice.
    pub fn arc_count(&self) -> usize {
        self.0.values().map(|edges| edges.len()).sum()
    }

    pub fn has_node(&self, id: i64) -> bool {
        self.0.contains_key(&id)
    }

    /// Gets all outgoing connections, as `(neighbor_id, distance)` pairs
    /// in ascending neighbor id order.
    pub fn neighbors(&self, id: i64) -> &[(i64, f64)] {
        self.0
            .get(&id)
            .map(|edges| edges.as_slice())
            .unwrap_or_default()
    }

    /// Gets the distance of a direct connection from one node to another.
    /// If such a connection doesn't exist, returns [f64::INFINITY].
    pub fn get_edge(&self, from_id: i64, to_id: i64) -> f64 {
        self.neighbors(from_id)
            .iter()
            .find_map(|&(to, distance)| if to == to_id { Some(distance) } else { None })
            .unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    fn registry() -> BuildingRegistry {
        BuildingRegistry::new(vec![
            Location::new(1, "A", 0.0, 0.0),
            Location::new(2, "B", 1.0, 0.0),
            Location::new(3, "C", 2.0, 0.0),
            Location::new(4, "D", 3.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn undirected_by_default() {
        let g = PathGraph::new(
            &registry(),
            &[Edge::new(1, 2, 5.0), Edge::new(3, 2, 3.0)],
            false,
        )
        .unwrap();

        assert_eq!(g.len(), 4);
        assert_eq!(g.arc_count(), 4);
        assert_eq!(g.get_edge(1, 2), 5.0);
        assert_eq!(g.get_edge(2, 1), 5.0);
        assert_eq!(g.neighbors(2), &[(1, 5.0), (3, 3.0)]);
        assert!(g.get_edge(1, 3).is_infinite());
    }

    #[test]
    fn isolated_nodes_are_present() {
        let g = PathGraph::new(&registry(), &[Edge::new(1, 2, 5.0)], false).unwrap();
        assert!(g.has_node(4));
        assert!(g.neighbors(4).is_empty());
        assert!(!g.has_node(5));
        assert!(g.neighbors(5).is_empty());
    }

    #[test]
    fn parallel_edges_collapse_to_minimum() {
        let g = PathGraph::new(
            &registry(),
            &[
                Edge::new(1, 2, 5.0),
                Edge::new(2, 1, 4.0),
                Edge::new(1, 2, 6.0),
            ],
            false,
        )
        .unwrap();

        assert_eq!(g.get_edge(1, 2), 4.0);
        assert_eq!(g.get_edge(2, 1), 4.0);
        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn oneway_edges() {
        let mut oneway = Edge::new(1, 2, 5.0);
        oneway.oneway = true;

        let g = PathGraph::new(&registry(), &[oneway], true).unwrap();
        assert_eq!(g.get_edge(1, 2), 5.0);
        assert!(g.get_edge(2, 1).is_infinite());

        let g = PathGraph::new(&registry(), &[oneway], false).unwrap();
        assert_eq!(g.get_edge(2, 1), 5.0);
    }

    #[test]
    fn rejects_invalid_edges() {
        assert_eq!(
            PathGraph::new(&registry(), &[Edge::new(1, 9, 1.0)], false).unwrap_err(),
            ValidationError::DanglingReference {
                from: 1,
                to: 9,
                missing: 9
            },
        );
        assert_eq!(
            PathGraph::new(&registry(), &[Edge::new(2, 2, 1.0)], false).unwrap_err(),
            ValidationError::SelfLoop(2),
        );
        assert_eq!(
            PathGraph::new(&registry(), &[Edge::new(1, 2, 0.0)], false).unwrap_err(),
            ValidationError::NonPositiveDistance {
                from: 1,
                to: 2,
                distance: 0.0
            },
        );
        assert!(matches!(
            PathGraph::new(&registry(), &[Edge::new(1, 2, f64::NAN)], false),
            Err(ValidationError::NonPositiveDistance { .. })
        ));
    }
}
