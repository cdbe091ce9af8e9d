// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use log::info;

use super::{Campus, ValidationError};
use crate::{BuildingRegistry, Edge, Location, PathGraph};

#[derive(Debug, Clone, PartialEq)]
struct NamedConnection {
    from: String,
    to: String,
    distance: f64,
}

/// Collects buildings and connections, and validates them as a whole
/// when [building](CampusBuilder::build) the [Campus].
///
/// Nothing is checked until [CampusBuilder::build] is called,
/// so buildings and connections may be added in any order.
#[derive(Debug, Default, Clone)]
pub struct CampusBuilder {
    locations: Vec<Location>,
    edges: Vec<Edge>,
    named_connections: Vec<NamedConnection>,
    respect_oneway: bool,
    last_id: i64,
}

impl CampusBuilder {
    /// Controls whether [oneway](Edge::oneway) connections are traversable
    /// in one direction only. By default, all connections are undirected.
    pub fn respect_oneway(&mut self, respect_oneway: bool) -> &mut Self {
        self.respect_oneway = respect_oneway;
        self
    }

    /// Adds a building with an explicit id.
    pub fn add_location(&mut self, location: Location) {
        self.last_id = self.last_id.max(location.id);
        self.locations.push(location);
    }

    /// Adds a building with a freshly assigned id, which is returned.
    ///
    /// Assigned ids are greater than any id added before, and are never reused.
    /// Fails with [ValidationError::IdsExhausted] once an id of [i64::MAX] was added.
    pub fn add_building<S: Into<String>>(
        &mut self,
        name: S,
        x_coordinate: f64,
        y_coordinate: f64,
        qr_id: Option<&str>,
    ) -> Result<i64, ValidationError> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(ValidationError::IdsExhausted(self.last_id))?;
        let mut location = Location::new(id, name, x_coordinate, y_coordinate);
        location.qr_id = qr_id.map(str::to_string);
        self.add_location(location);
        Ok(id)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Adds an undirected connection between two buildings identified by name.
    /// Names are resolved when the campus is built.
    pub fn connect(&mut self, from_name: &str, to_name: &str, distance: f64) {
        self.named_connections.push(NamedConnection {
            from: from_name.to_string(),
            to: to_name.to_string(),
            distance,
        });
    }

    /// Validates all collected data and builds an immutable [Campus].
    pub fn build(self) -> Result<Campus, ValidationError> {
        let registry = BuildingRegistry::new(self.locations)?;

        let mut edges = self.edges;
        for c in self.named_connections {
            let from = Self::resolve(&registry, &c.from)?;
            let to = Self::resolve(&registry, &c.to)?;
            edges.push(Edge::new(from, to, c.distance));
        }

        let graph = PathGraph::new(&registry, &edges, self.respect_oneway)?;

        info!(
            "built campus with {} building(s) and {} connection(s)",
            registry.len(),
            edges.len(),
        );

        Ok(Campus { registry, graph })
    }

    fn resolve(registry: &BuildingRegistry, name: &str) -> Result<i64, ValidationError> {
        registry
            .find_by_name(name)
            .map(|location| location.id)
            .ok_or_else(|| ValidationError::UnknownName(name.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_increasing_ids() {
        let mut b = CampusBuilder::default();
        assert_eq!(b.add_building("Library", 0.0, 0.0, None).unwrap(), 1);
        b.add_location(Location::new(10, "Hostel", 1.0, 1.0));
        assert_eq!(b.add_building("Canteen", 2.0, 2.0, Some("QR-C")).unwrap(), 11);

        let campus = b.build().unwrap();
        let ids: Vec<i64> = campus.registry().all().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 10, 11]);
        assert_eq!(campus.registry().find_by_qr("QR-C").unwrap().id, 11);
    }

    #[test]
    fn refuses_to_wrap_ids() {
        let mut b = CampusBuilder::default();
        b.add_location(Location::new(i64::MAX, "Library", 0.0, 0.0));
        assert_eq!(
            b.add_building("Canteen", 2.0, 2.0, None),
            Err(ValidationError::IdsExhausted(i64::MAX)),
        );

        let campus = b.build().unwrap();
        assert_eq!(campus.registry().len(), 1);
    }

    #[test]
    fn connects_by_name() {
        let mut b = CampusBuilder::default();
        let library = b.add_building("Library", 0.0, 0.0, None).unwrap();
        let canteen = b.add_building("Canteen", 2.0, 2.0, None).unwrap();
        b.connect("library", "CANTEEN", 4.5);

        let campus = b.build().unwrap();
        assert_eq!(campus.graph().get_edge(library, canteen), 4.5);
        assert_eq!(campus.graph().get_edge(canteen, library), 4.5);
    }

    #[test]
    fn unknown_names_fail() {
        let mut b = CampusBuilder::default();
        b.add_building("Library", 0.0, 0.0, None).unwrap();
        b.connect("Library", "Gym", 4.5);
        assert_eq!(
            b.build().unwrap_err(),
            ValidationError::UnknownName("Gym".to_string()),
        );
    }

    #[test]
    fn dangling_edges_fail() {
        let mut b = CampusBuilder::default();
        b.add_building("Library", 0.0, 0.0, None).unwrap();
        b.add_edge(Edge::new(1, 2, 1.0));
        assert_eq!(
            b.build().unwrap_err(),
            ValidationError::DanglingReference {
                from: 1,
                to: 2,
                missing: 2
            },
        );
    }

    #[test]
    fn respects_oneway_when_asked() {
        let mut b = CampusBuilder::default();
        b.respect_oneway(true);
        b.add_building("Top", 0.0, 10.0, None).unwrap();
        b.add_building("Bottom", 0.0, 0.0, None).unwrap();
        b.add_edge(Edge {
            from_id: 1,
            to_id: 2,
            distance: 3.0,
            oneway: true,
        });

        let campus = b.build().unwrap();
        assert_eq!(campus.graph().get_edge(1, 2), 3.0);
        assert!(campus.graph().get_edge(2, 1).is_infinite());
    }
}
