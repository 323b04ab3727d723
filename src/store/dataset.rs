// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use super::StoreError;
use crate::layout::{builtin, FloorDecor, ZoneTable};
use crate::model::{EventLog, FloorGrid, LocationTable};
use crate::ops::BatchedOnlyPolicy;

/// One floor: its base grid, its shipment locations and how it is decorated on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorData {
    pub name: String,
    pub title: String,
    pub grid: FloorGrid,
    pub locations: LocationTable,
    pub decor: FloorDecor,
}

impl FloorData {
    /// Creates a floor with the built-in title and decor for `name`, if there are any.
    pub fn new(name: impl Into<String>, grid: FloorGrid, locations: LocationTable) -> Self {
        let name = name.into();
        let title = builtin::floor_title(&name).unwrap_or(name.as_str()).to_owned();
        let decor = builtin::floor_decor(&name).unwrap_or_default();
        Self {
            name,
            title,
            grid,
            locations,
            decor,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_decor(mut self, decor: FloorDecor) -> Self {
        self.decor = decor;
        self
    }
}

/// Everything the viewer needs, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    floors: Vec<FloorData>,
    zones: ZoneTable,
    events: EventLog,
    batched_only: BatchedOnlyPolicy,
}

impl Dataset {
    /// Validates and assembles a dataset.
    ///
    /// There must be at least one floor and one event, and floor names must be unique.
    pub fn new(
        floors: Vec<FloorData>,
        zones: ZoneTable,
        events: EventLog,
    ) -> Result<Self, StoreError> {
        if floors.is_empty() {
            return Err(StoreError::NoFloors);
        }
        let mut seen = HashSet::new();
        for floor in &floors {
            if !seen.insert(floor.name.as_str()) {
                return Err(StoreError::DuplicateFloor {
                    name: floor.name.clone(),
                });
            }
        }
        if events.is_empty() {
            return Err(StoreError::EmptyEventLog);
        }

        Ok(Self {
            floors,
            zones,
            events,
            batched_only: BatchedOnlyPolicy::default(),
        })
    }

    pub fn with_batched_only(mut self, policy: BatchedOnlyPolicy) -> Self {
        self.batched_only = policy;
        self
    }

    pub fn floors(&self) -> &[FloorData] {
        &self.floors
    }

    pub fn floor(&self, name: &str) -> Option<&FloorData> {
        self.floors.iter().find(|floor| floor.name == name)
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn batched_only(&self) -> BatchedOnlyPolicy {
        self.batched_only
    }
}
