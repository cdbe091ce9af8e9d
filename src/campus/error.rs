// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;

/// Inconsistency in campus data, detected while building a [Campus](super::Campus).
///
/// A campus which fails validation is never constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("duplicate building id: {0}")]
    DuplicateId(i64),

    /// Two buildings share a name, ignoring case and surrounding whitespace.
    #[error("duplicate building name: '{0}'")]
    DuplicateName(String),

    #[error("duplicate QR id: '{0}'")]
    DuplicateQr(String),

    /// Building ids must be non-zero.
    #[error("invalid building id: {0}")]
    InvalidId(i64),

    /// No fresh id is left above the largest id already added.
    #[error("no building ids left after {0}")]
    IdsExhausted(i64),

    #[error("building {0} has an empty name")]
    EmptyName(i64),

    #[error("building {0} has non-finite coordinates")]
    InvalidCoordinates(i64),

    /// A connection added by name refers to a building which doesn't exist.
    #[error("connection refers to unknown building '{0}'")]
    UnknownName(String),

    #[error("connection {from} - {to} refers to unknown building {missing}")]
    DanglingReference { from: i64, to: i64, missing: i64 },

    #[error("building {0} is connected to itself")]
    SelfLoop(i64),

    /// Connection distance is not a positive, finite number.
    #[error("connection {from} - {to} has invalid distance {distance}")]
    NonPositiveDistance { from: i64, to: i64, distance: f64 },
}

/// Failure to load a [Campus](super::Campus) from a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A `building` or `path` element is missing a required attribute,
    /// or one of its attributes can't be parsed.
    #[error("invalid <{element}>: {reason}")]
    InvalidRecord {
        element: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
