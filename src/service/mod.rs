// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Stateless façade over a [Campus], for use by a transport layer.
//!
//! [NavigationService] is cheap to clone and can be shared between threads;
//! every call depends only on the campus and its arguments. Results convert
//! into the serializable payloads of the [response] module.

pub mod response;

use std::sync::Arc;

use crate::campus::Campus;
use crate::{directions, Location, QrError, Route, RouteError};

/// Failure of a [NavigationService] call, caused by the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// A required argument was empty.
    #[error("'{0}' is required")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Qr(#[from] QrError),
}

impl ServiceError {
    /// Returns a stable, machine-readable name of the failure.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "MissingParameter",
            Self::Route(RouteError::UnknownLocation(_)) => "UnknownLocation",
            Self::Route(RouteError::NoRouteFound { .. }) => "NoRouteFound",
            Self::Qr(QrError::UnknownQr(_)) => "UnknownQr",
        }
    }
}

/// Result of [NavigationService::navigate].
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    /// Name of the starting building, as registered.
    pub start: String,

    /// Name of the destination building, as registered.
    pub end: String,

    /// Names of visited buildings, from start to end.
    pub path: Vec<String>,

    pub route: Route,

    /// Directions rendered by [directions::render].
    pub directions: String,
}

impl Navigation {
    /// Exact length of the route; see [Route::total_distance].
    pub fn total_distance(&self) -> f64 {
        self.route.total_distance
    }
}

#[derive(Debug, Clone)]
pub struct NavigationService {
    campus: Arc<Campus>,
}

impl NavigationService {
    pub fn new(campus: Campus) -> Self {
        Self::from_shared(Arc::new(campus))
    }

    pub fn from_shared(campus: Arc<Campus>) -> Self {
        Self { campus }
    }

    pub fn campus(&self) -> &Campus {
        &self.campus
    }

    /// Returns all buildings, in load order.
    pub fn list_buildings(&self) -> &[Location] {
        self.campus.registry().all()
    }

    /// Finds the shortest route between two buildings identified by name,
    /// and renders walking directions for it.
    pub fn navigate(&self, start: &str, end: &str) -> Result<Navigation, ServiceError> {
        let start = required("start", start)?;
        let end = required("end", end)?;

        let router = self.campus.router();
        let start = router.resolve(start)?;
        let end = router.resolve(end)?;
        let route = router.route_between(start, end)?;
        let locations = router.locations(&route);

        Ok(Navigation {
            start: start.name.clone(),
            end: end.name.clone(),
            path: locations.iter().map(|l| l.name.clone()).collect(),
            directions: directions::render(&locations),
            route,
        })
    }

    /// Maps a scanned QR identifier to the building it is attached to.
    pub fn resolve_qr(&self, qr_id: &str) -> Result<&Location, ServiceError> {
        let qr_id = required("qr_id", qr_id)?;
        Ok(self.campus.qr_resolver().resolve(qr_id)?)
    }

    /// Finds a building by its name, ignoring case and surrounding whitespace.
    pub fn find_building(&self, name: &str) -> Result<&Location, ServiceError> {
        let name = required("name", name)?;
        self.campus
            .registry()
            .find_by_name(name)
            .ok_or_else(|| RouteError::UnknownLocation(name.to_string()).into())
    }
}

fn required<'a>(parameter: &'static str, value: &'a str) -> Result<&'a str, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ServiceError::MissingParameter(parameter))
    } else {
        Ok(value)
    }
}
