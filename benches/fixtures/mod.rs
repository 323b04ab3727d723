// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use zonepick::layout::builtin::zone_table;
use zonepick::model::{
    EventLog, FloorGrid, Location, LocationTable, ShipmentId, TileCode, TimestampEvent, Zone,
};
use zonepick::store::{Dataset, FloorData};

pub const PLAN_WIDTH: usize = 238;
pub const PLAN_HEIGHT: usize = 46;

/// Zones of the mezzanine with their highest aisle number.
const ZONES: [(&str, u32); 7] = [
    ("A", 20),
    ("AR", 19),
    ("B", 20),
    ("C", 18),
    ("D", 8),
    ("E", 9),
    ("F", 9),
];

pub fn checksum_grid(grid: &FloorGrid) -> u64 {
    let mut acc = 0u64;
    for row in grid.rows() {
        for tile in row {
            acc = acc.wrapping_mul(131).wrapping_add(tile.as_char() as u64);
        }
    }
    acc
}

/// Location of shipment `idx`, spread over every zone, aisle and the first 56 bays.
pub fn location_for(idx: u64) -> Location {
    let (zone, max_aisle) = ZONES[(idx % ZONES.len() as u64) as usize];
    let aisle = ((idx / ZONES.len() as u64) % u64::from(max_aisle + 1)) as u32;
    let bay = 1 + ((idx.wrapping_mul(13)) % 56) as u32;
    Location::new(Zone::new(zone).expect("zone"), aisle, bay)
}

pub fn locations(shipments: u64) -> LocationTable {
    (0..shipments)
        .map(|idx| (ShipmentId::new(idx), location_for(idx)))
        .collect()
}

/// A floor plan with a lot (`#`) under every location that resolves onto the plan.
pub fn plan_for(locations: &LocationTable) -> FloorGrid {
    let zones = zone_table();
    let mut grid = FloorGrid::filled(PLAN_WIDTH, PLAN_HEIGHT, TileCode::Floor);
    for (_, location) in locations.iter() {
        if let Ok(pos) = zones.resolve(location) {
            grid.set(pos, TileCode::Lot);
        }
    }
    grid
}

fn ids(shipments: u64, start: u64, count: usize, stride: u64) -> Vec<ShipmentId> {
    (0..count as u64)
        .map(|j| ShipmentId::new((start + j * stride) % shipments))
        .collect()
}

pub fn events(shipments: u64, timestamps: usize, per_event: usize) -> EventLog {
    EventLog::from_events((0..timestamps).map(|idx| {
        let base = (idx as u64).wrapping_mul(7919);
        TimestampEvent {
            timestamp: format!("2020-01-01 {:06}", idx),
            ppid: idx as i64,
            pending: ids(shipments, base, per_event, 37),
            batched: ids(shipments, base + 11, per_event / 4, 53),
        }
    }))
}

pub mod site {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    pub enum Case {
        Small,
        Medium,
        Large,
    }

    impl Case {
        /// `(shipments, timestamps, pending ids per timestamp)`.
        fn params(self) -> (u64, usize, usize) {
            match self {
                Case::Small => (500, 50, 8),
                Case::Medium => (5_000, 500, 40),
                Case::Large => (50_000, 2_000, 200),
            }
        }

        pub fn name(self) -> &'static str {
            match self {
                Case::Small => "small",
                Case::Medium => "medium",
                Case::Large => "large",
            }
        }
    }

    pub fn fixture(case: Case) -> Dataset {
        let (shipments, timestamps, per_event) = case.params();
        let locations = locations(shipments);
        let grid = plan_for(&locations);
        Dataset::new(
            vec![FloorData::new("3FM", grid, locations)],
            zone_table(),
            events(shipments, timestamps, per_event),
        )
        .expect("bench dataset")
    }
}
