// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::hash_map::{Entry, HashMap};

use crate::campus::ValidationError;
use crate::Location;

/// Returns the key under which building names are compared:
/// surrounding whitespace is ignored, and so is letter case.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Holds all known [Locations](Location) of a campus, indexed by id,
/// [normalized](normalize_name) name and QR identifier.
///
/// The registry is immutable once built; lookups never allocate
/// except for name normalization.
#[derive(Debug, Default, Clone)]
pub struct BuildingRegistry {
    locations: Vec<Location>,
    by_id: HashMap<i64, usize>,
    by_name: HashMap<String, usize>,
    by_qr: HashMap<String, usize>,
}

impl BuildingRegistry {
    /// Builds a registry from locations in load order.
    ///
    /// Names are trimmed, and empty QR identifiers are treated as absent.
    /// Fails on zero ids, duplicate ids, names or QR identifiers, empty names
    /// and non-finite coordinates.
    pub(crate) fn new(locations: Vec<Location>) -> Result<Self, ValidationError> {
        let mut registry = Self {
            locations: Vec::with_capacity(locations.len()),
            by_id: HashMap::with_capacity(locations.len()),
            by_name: HashMap::with_capacity(locations.len()),
            by_qr: HashMap::default(),
        };

        for location in locations {
            registry.insert(location)?;
        }

        Ok(registry)
    }

    fn insert(&mut self, mut location: Location) -> Result<(), ValidationError> {
        location.name = location.name.trim().to_string();
        location.qr_id = location
            .qr_id
            .map(|qr| qr.trim().to_string())
            .filter(|qr| !qr.is_empty());

        if location.id == 0 {
            return Err(ValidationError::InvalidId(location.id));
        }
        if location.name.is_empty() {
            return Err(ValidationError::EmptyName(location.id));
        }
        if !location.x_coordinate.is_finite() || !location.y_coordinate.is_finite() {
            return Err(ValidationError::InvalidCoordinates(location.id));
        }

        let idx = self.locations.len();

        match self.by_id.entry(location.id) {
            Entry::Occupied(_) => return Err(ValidationError::DuplicateId(location.id)),
            Entry::Vacant(e) => {
                e.insert(idx);
            }
        }

        match self.by_name.entry(normalize_name(&location.name)) {
            Entry::Occupied(_) => return Err(ValidationError::DuplicateName(location.name)),
            Entry::Vacant(e) => {
                e.insert(idx);
            }
        }

        if let Some(ref qr_id) = location.qr_id {
            match self.by_qr.entry(qr_id.clone()) {
                Entry::Occupied(_) => return Err(ValidationError::DuplicateQr(qr_id.clone())),
                Entry::Vacant(e) => {
                    e.insert(idx);
                }
            }
        }

        self.locations.push(location);
        Ok(())
    }

    /// Returns the number of locations in the registry.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns all locations, in load order.
    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    /// Finds a location by its name, ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        self.by_name
            .get(&normalize_name(name))
            .map(|&idx| &self.locations[idx])
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Location> {
        self.by_id.get(&id).map(|&idx| &self.locations[idx])
    }

    /// Finds a location by its QR identifier. QR identifiers are opaque,
    /// and only surrounding whitespace is ignored.
    pub fn find_by_qr(&self, qr_id: &str) -> Option<&Location> {
        self.by_qr
            .get(qr_id.trim())
            .map(|&idx| &self.locations[idx])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }
}
