// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::{Campus, CampusBuilder};
use crate::Location;

/// Buildings of the demo campus: name, x, y.
const BUILDINGS: &[(&str, f64, f64)] = &[
    ("Library", 10.0, 20.0),
    ("Canteen", 30.0, 15.0),
    ("Block A", 20.0, 30.0),
    ("Block B", 35.0, 35.0),
    ("Admin Office", 15.0, 10.0),
    ("Lab 1", 25.0, 28.0),
    ("Lab 2", 28.0, 40.0),
    ("Hostel", 45.0, 20.0),
];

/// Walkways of the demo campus: from, to, distance.
const CONNECTIONS: &[(&str, &str, f64)] = &[
    ("Library", "Block A", 12.0),
    ("Library", "Admin Office", 11.0),
    ("Admin Office", "Canteen", 16.0),
    ("Block A", "Lab 1", 7.0),
    ("Lab 1", "Lab 2", 9.0),
    ("Block A", "Block B", 14.0),
    ("Block B", "Lab 2", 8.0),
    ("Canteen", "Hostel", 10.0),
    ("Block B", "Hostel", 12.0),
    ("Lab 1", "Canteen", 13.0),
];

/// Returns the QR identifier printed on the demo campus signs,
/// e.g. `QR-BLOCK-A` for "Block A".
pub fn demo_qr_id(name: &str) -> String {
    format!("QR-{}", name.trim().to_uppercase().replace(' ', "-"))
}

/// Builds a small sample campus of 8 buildings (ids 1 to 8, in the order listed
/// by [Campus::registry]) connected with 10 undirected walkways.
///
/// Every building carries a [demo_qr_id].
pub fn demo() -> Campus {
    let mut b = CampusBuilder::default();
    for (id, &(name, x, y)) in (1..).zip(BUILDINGS) {
        b.add_location(Location::new(id, name, x, y).with_qr(demo_qr_id(name)));
    }
    for &(from, to, distance) in CONNECTIONS {
        b.connect(from, to, distance);
    }
    b.build().expect("demo campus data must be valid")
}
