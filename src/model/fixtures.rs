// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Small hand-checked site used across unit tests.
//!
//! Zone `Q` puts aisle `a` at columns `3a` (odd bays) and `3a + 2` (even bays); bays 1-2 sit on
//! row 0, 3-4 on row 1 and so on.

use super::event::{EventLog, TimestampEvent};
use super::grid::FloorGrid;
use super::ids::{ShipmentId, Zone};
use super::location::{Location, LocationTable};
use crate::format::parse_floor_plan;
use crate::layout::{AisleRule, Band, Banding, ColumnRule, ZoneRule, ZoneTable};
use crate::store::{Dataset, FloorData};

pub(crate) const NORTH_PLAN: &str = "\
# . # # . #
# . # # . #
# . # . . .
";

pub(crate) fn zone(name: &str) -> Zone {
    Zone::new(name).expect("zone")
}

pub(crate) fn ids(values: &[u64]) -> Vec<ShipmentId> {
    values.iter().copied().map(ShipmentId::new).collect()
}

pub(crate) fn grid(plan: &str) -> FloorGrid {
    parse_floor_plan(plan).expect("floor plan")
}

pub(crate) fn q_zones() -> ZoneTable {
    ZoneTable::new(vec![ZoneRule {
        zone: zone("Q"),
        aisles: vec![AisleRule {
            from: 0,
            to: None,
            column: ColumnRule::linear(3, 1),
            banding: Banding::new([Band::rest(-1)]),
        }],
    }])
}

pub(crate) fn locations(rows: &[(u64, &str, u32, u32)]) -> LocationTable {
    rows.iter()
        .map(|&(id, name, aisle, bay)| (ShipmentId::new(id), Location::new(zone(name), aisle, bay)))
        .collect()
}

/// Floor `N1` locations:
/// 1 and 2 share (0,0), 3 sits at (2,0), 4 at (3,1), 5 on the floor tile (5,2),
/// 6 has an unknown zone and 7 resolves below the grid.
pub(crate) fn north_locations() -> LocationTable {
    locations(&[
        (1, "Q", 0, 1),
        (2, "Q", 0, 1),
        (3, "Q", 0, 2),
        (4, "Q", 1, 3),
        (5, "Q", 1, 6),
        (6, "Z", 0, 1),
        (7, "Q", 0, 9),
    ])
}

fn event(timestamp: &str, ppid: i64, pending: &[u64], batched: &[u64]) -> TimestampEvent {
    TimestampEvent {
        timestamp: timestamp.to_owned(),
        ppid,
        pending: ids(pending),
        batched: ids(batched),
    }
}

pub(crate) fn site_events() -> EventLog {
    EventLog::from_events([
        event("t1", 1, &[1, 2, 3], &[]),
        event("t2", 2, &[1], &[3, 4]),
        event("t3", 3, &[], &[1]),
        event("t4", 4, &[5, 6, 7, 99, 10], &[10]),
    ])
}

/// Two floors (`N1`, then `N2` with a single lot at (0,0) for shipment 10) sharing zone `Q`.
pub(crate) fn site() -> Dataset {
    let north = FloorData::new("N1", grid(NORTH_PLAN), north_locations());
    let south = FloorData::new("N2", grid("# .\n. .\n"), locations(&[(10, "Q", 0, 1)]));
    Dataset::new(vec![north, south], q_zones(), site_events()).expect("dataset")
}
