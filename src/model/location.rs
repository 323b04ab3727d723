// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use super::{ShipmentId, Zone};

/// Physical storage address of a shipment: zone, aisle within the zone, bay along the aisle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub zone: Zone,
    pub aisle: u32,
    pub bay: u32,
}

impl Location {
    pub fn new(zone: Zone, aisle: u32, bay: u32) -> Self {
        Self { zone, aisle, bay }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.zone, self.aisle, self.bay)
    }
}

/// Read-only lookup from shipment id to storage location, one per floor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationTable {
    entries: HashMap<ShipmentId, Location>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row. A repeated id replaces the earlier row and returns it.
    pub fn insert(&mut self, id: ShipmentId, location: Location) -> Option<Location> {
        self.entries.insert(id, location)
    }

    pub fn get(&self, id: ShipmentId) -> Option<&Location> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipmentId, &Location)> + '_ {
        self.entries.iter().map(|(id, location)| (*id, location))
    }
}

impl FromIterator<(ShipmentId, Location)> for LocationTable {
    fn from_iter<I: IntoIterator<Item = (ShipmentId, Location)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
