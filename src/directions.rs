// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Conversion of routes into human-readable walking directions.
//!
//! Rendering is a pure function of the visited [Locations](Location):
//! the same path always yields the same text.

use std::fmt;

use crate::Location;

/// Directions returned for a route which starts at its destination.
pub const ALREADY_THERE: &str = "You are already at the destination.";

/// Separator placed between consecutive instructions by [render].
pub const STEP_SEPARATOR: &str = " → ";

/// One of the 8 principal compass points.
///
/// Campus coordinates are planar, with `x` growing eastwards
/// and `y` growing northwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Heading {
    const SECTORS: [Self; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Returns the compass point closest to the direction from one location
    /// to another, or `None` if both share their coordinates.
    pub fn between(from: &Location, to: &Location) -> Option<Self> {
        let dx = to.x_coordinate - from.x_coordinate;
        let dy = to.y_coordinate - from.y_coordinate;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        let degrees = dy.atan2(dx).to_degrees();
        let sector = ((degrees + 22.5).rem_euclid(360.0) / 45.0) as usize;
        Some(Self::SECTORS[sector % 8])
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::East => write!(f, "east"),
            Self::NorthEast => write!(f, "north-east"),
            Self::North => write!(f, "north"),
            Self::NorthWest => write!(f, "north-west"),
            Self::West => write!(f, "west"),
            Self::SouthWest => write!(f, "south-west"),
            Self::South => write!(f, "south"),
            Self::SouthEast => write!(f, "south-east"),
        }
    }
}

/// Produces one instruction per step of the path: where the walk starts,
/// followed by one instruction per traversed connection.
///
/// A path with a single location yields only [ALREADY_THERE],
/// and an empty path yields no instructions.
pub fn instructions(path: &[&Location]) -> Vec<String> {
    match path {
        [] => Vec::new(),
        [_] => vec![ALREADY_THERE.to_string()],
        [first, ..] => {
            let mut steps = Vec::with_capacity(path.len());
            steps.push(format!("You are at {}", first.name));

            let last_idx = path.len() - 2;
            for (idx, pair) in path.windows(2).enumerate() {
                let (from, to) = (pair[0], pair[1]);
                let mut step = match Heading::between(from, to) {
                    Some(heading) => format!("Head {} to {}", heading, to.name),
                    None => format!("Continue to {}", to.name),
                };
                if idx == last_idx {
                    step.push_str(" (Destination reached)");
                }
                steps.push(step);
            }

            steps
        }
    }
}

/// Renders the path as a single line of directions,
/// joining [instructions] with [STEP_SEPARATOR].
pub fn render(path: &[&Location]) -> String {
    instructions(path).join(STEP_SEPARATOR)
}
