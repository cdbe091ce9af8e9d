// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::campus::Campus;
use crate::{BuildingRegistry, Location};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    /// The scanned identifier does not belong to any building.
    #[error("QR ID '{0}' is invalid")]
    UnknownQr(String),
}

/// Maps scanned QR identifiers to the [Location] they are attached to.
///
/// Recording the result as the caller's current location is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct QrResolver<'a> {
    registry: &'a BuildingRegistry,
}

impl<'a> QrResolver<'a> {
    pub fn new(campus: &'a Campus) -> Self {
        Self {
            registry: campus.registry(),
        }
    }

    pub fn resolve(&self, qr_id: &str) -> Result<&'a Location, QrError> {
        self.registry
            .find_by_qr(qr_id)
            .ok_or_else(|| QrError::UnknownQr(qr_id.trim().to_string()))
    }
}
