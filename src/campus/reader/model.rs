// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Edge, Location};

/// Union over all elements of a campus dataset which carry data.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Building(Location),
    Path(Edge),
}
