// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Serializable payloads of [NavigationService](super::NavigationService) results.

use serde::{Deserialize, Serialize};

use super::{Navigation, ServiceError};
use crate::Location;

/// Rounds a distance to 2 decimal places, for display only.
pub fn round_distance(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}

/// Entry of the building listing. QR identifiers are deliberately left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSummary {
    pub id: i64,
    pub name: String,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
}

impl From<&Location> for BuildingSummary {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id,
            name: location.name.clone(),
            x_coordinate: location.x_coordinate,
            y_coordinate: location.y_coordinate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub start: String,
    pub end: String,
    pub path: Vec<String>,

    /// Route length, rounded with [round_distance].
    pub total_distance: f64,
    pub directions: String,
}

impl From<&Navigation> for NavigateResponse {
    fn from(navigation: &Navigation) -> Self {
        Self {
            start: navigation.start.clone(),
            end: navigation.end.clone(),
            path: navigation.path.clone(),
            total_distance: round_distance(navigation.total_distance()),
            directions: navigation.directions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub message: String,
    pub current_location: String,
}

impl From<&Location> for ScanResponse {
    fn from(location: &Location) -> Self {
        Self {
            message: "QR scanned successfully.".to_string(),
            current_location: location.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub name: String,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
}

impl From<&Location> for SearchResponse {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            x_coordinate: location.x_coordinate,
            y_coordinate: location.y_coordinate,
        }
    }
}

/// Failure payload. `reason` is one of the names returned by [ServiceError::reason].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub reason: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        Self {
            error: err.to_string(),
            reason: err.reason().to_string(),
        }
    }
}
