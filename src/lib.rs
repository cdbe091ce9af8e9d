// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Shortest-path navigation over a static campus map.
//!
//! A [Campus](campus::Campus) is a [BuildingRegistry] of named [Locations](Location)
//! plus a [PathGraph] of walkable connections between them. It is built once
//! (from an XML dataset, or programmatically with a [CampusBuilder](campus::CampusBuilder)),
//! validated as a whole, and never modified afterwards, so it can be shared freely
//! between threads.
//!
//! Queries go through a [RoutingEngine] (Dijkstra over the [PathGraph]),
//! a [QrResolver] (scanned QR code to [Location]) and the [directions]
//! renderer; [NavigationService] bundles all three for a transport layer.
//!
//! # Example
//!
//! ```
//! let service = campusnav::NavigationService::new(campusnav::campus::demo());
//!
//! let navigation = service.navigate("library", "Hostel").expect("hostel is reachable");
//! assert_eq!(navigation.total_distance(), 37.0);
//! assert_eq!(
//!     navigation.path,
//!     vec!["Library", "Admin Office", "Canteen", "Hostel"],
//! );
//!
//! let here = service.resolve_qr("QR-BLOCK-A").expect("QR code is registered");
//! assert_eq!(here.name, "Block A");
//! ```

#[cfg(test)]
macro_rules! assert_almost_eq {
    ($a:expr, $b:expr) => {
        assert!(
            (($a - $b).abs() < 1e-6),
            "assertion failed: {} ≈ {}",
            $a,
            $b
        )
    };
}

pub mod campus;
pub mod directions;
mod graph;
mod qr;
mod registry;
mod routing;
pub mod service;

pub use graph::PathGraph;
pub use qr::{QrError, QrResolver};
pub use registry::{normalize_name, BuildingRegistry};
pub use routing::{Route, RouteError, RoutingEngine};
pub use service::{Navigation, NavigationService, ServiceError};

/// Represents a single campus building, which is a node of the [PathGraph].
///
/// `id` must be non-zero and unique within a [BuildingRegistry], and so must `name`
/// (compared with [normalize_name]) and `qr_id` (compared exactly).
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
    pub qr_id: Option<String>,
}

impl Location {
    pub fn new<S: Into<String>>(id: i64, name: S, x_coordinate: f64, y_coordinate: f64) -> Self {
        Self {
            id,
            name: name.into(),
            x_coordinate,
            y_coordinate,
            qr_id: None,
        }
    }

    /// Attaches a QR identifier to the location.
    pub fn with_qr<S: Into<String>>(mut self, qr_id: S) -> Self {
        self.qr_id = Some(qr_id.into());
        self
    }
}

/// Represents a walkable connection between two [Locations](Location).
///
/// Edges are undirected, unless `oneway` is set _and_ the campus was
/// loaded with [respect_oneway](campus::Options::respect_oneway).
/// `distance` must be a positive, finite number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from_id: i64,
    pub to_id: i64,
    pub distance: f64,
    pub oneway: bool,
}

impl Edge {
    pub fn new(from_id: i64, to_id: i64, distance: f64) -> Self {
        Self {
            from_id,
            to_id,
            distance,
            oneway: false,
        }
    }
}
