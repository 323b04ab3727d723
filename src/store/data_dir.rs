// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::{Dataset, FloorData};
use crate::format::{
    parse_event_log, parse_floor_plan, parse_locations, EventLogParseError, FloorPlanParseError,
    LocationTableParseError,
};
use crate::layout::{builtin, DecorError, FloorDecor, Segment, ZoneLabel, ZoneTable};
use crate::ops::BatchedOnlyPolicy;

mod helpers;

pub const MANIFEST_FILE: &str = "zonepick.json";
pub const DEFAULT_EVENTS_FILE: &str = "shipments_batchs_logs.txt";
/// Map and location files of the built-in floors, in display order.
pub const DEFAULT_FLOORS: [(&str, &str); 2] = [
    ("3F_zone_maps.txt", "locations_3F.csv"),
    ("3FM_zone_maps.txt", "locations_3FM.csv"),
];

/// Optional `zonepick.json` describing where the data files live and how to read them.
///
/// Paths are relative to the data directory. Every field may be omitted; the defaults are the two
/// built-in floors, the default event log name and the built-in zone table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub floors: Vec<FloorEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<PathBuf>,
    #[serde(default)]
    pub batched_only: BatchedOnlyPolicy,
    /// Replaces the built-in zone table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<ZoneTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloorEntry {
    /// Defaults to the map file name up to the first `_`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub map: PathBuf,
    pub locations: PathBuf,
    /// Replaces the built-in zone outlines of this floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlines: Option<Vec<Segment>>,
    /// Replaces the built-in zone labels of this floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<ZoneLabel>>,
}

impl FloorEntry {
    pub fn new(map: impl Into<PathBuf>, locations: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            title: None,
            map: map.into(),
            locations: locations.into(),
            outlines: None,
            labels: None,
        }
    }

    pub fn floor_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| floor_name_from_path(&self.map))
    }
}

/// Floor name encoded in a map file name: everything before the first `_`.
///
/// `3FM_zone_maps.txt` names floor `3FM`; a name without `_` is used whole (minus extension).
pub fn floor_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    match file_name.split_once('_') {
        Some((prefix, _)) => prefix.to_owned(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot parse floor plan {path:?}: {source}")]
    FloorPlan {
        path: PathBuf,
        source: FloorPlanParseError,
    },
    #[error("cannot parse location table {path:?}: {source}")]
    Locations {
        path: PathBuf,
        source: LocationTableParseError,
    },
    #[error("cannot parse event log {path:?}: {source}")]
    EventLog {
        path: PathBuf,
        source: EventLogParseError,
    },
    #[error("event log has no events")]
    EmptyEventLog,
    #[error("dataset has no floors")]
    NoFloors,
    #[error("floor {name:?} is listed more than once")]
    DuplicateFloor { name: String },
    #[error("manifest decor of floor {floor:?}: {source}")]
    Decor { floor: String, source: DecorError },
    #[error("manifest {field} path {value:?} must be relative and stay inside the data directory")]
    InvalidRelativePath { field: &'static str, value: PathBuf },
}

/// A directory holding floor plans, location tables, the event log and an optional manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Reads `zonepick.json`, falling back to the defaults when the file does not exist.
    pub fn load_manifest(&self) -> Result<Manifest, StoreError> {
        let path = self.manifest_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no manifest; using default file names");
                return Ok(Manifest::default());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Json { path, source })
    }

    /// Loads every file the manifest names and assembles the dataset.
    pub fn load(&self) -> Result<Dataset, StoreError> {
        let manifest = self.load_manifest()?;
        self.load_with(&manifest)
    }

    pub fn load_with(&self, manifest: &Manifest) -> Result<Dataset, StoreError> {
        let entries = if manifest.floors.is_empty() {
            DEFAULT_FLOORS
                .iter()
                .map(|(map, locations)| FloorEntry::new(*map, *locations))
                .collect()
        } else {
            manifest.floors.clone()
        };

        let floors = entries
            .iter()
            .map(|entry| self.load_floor(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let events_rel = manifest
            .events
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_EVENTS_FILE));
        let events_path = self.resolve("events", events_rel)?;
        let events = parse_event_log(&helpers::read(&events_path)?).map_err(|source| {
            StoreError::EventLog {
                path: events_path.clone(),
                source,
            }
        })?;

        let zones = manifest.zones.clone().unwrap_or_else(builtin::zone_table);
        let dataset =
            Dataset::new(floors, zones, events)?.with_batched_only(manifest.batched_only);

        info!(
            root = %self.root.display(),
            floors = dataset.floors().len(),
            locations = dataset.floors().iter().map(|floor| floor.locations.len()).sum::<usize>(),
            timestamps = dataset.events().len(),
            batched_only = ?dataset.batched_only(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    fn load_floor(&self, entry: &FloorEntry) -> Result<FloorData, StoreError> {
        let map_path = self.resolve("map", &entry.map)?;
        let grid = parse_floor_plan(&helpers::read(&map_path)?).map_err(|source| {
            StoreError::FloorPlan {
                path: map_path.clone(),
                source,
            }
        })?;

        let locations_path = self.resolve("locations", &entry.locations)?;
        let locations = parse_locations(&helpers::read(&locations_path)?).map_err(|source| {
            StoreError::Locations {
                path: locations_path.clone(),
                source,
            }
        })?;

        let name = entry.floor_name();
        let overrides = FloorDecor {
            outlines: entry.outlines.clone().unwrap_or_default(),
            labels: entry.labels.clone().unwrap_or_default(),
        };
        overrides
            .check_fits(grid.width(), grid.height())
            .map_err(|source| StoreError::Decor {
                floor: name.clone(),
                source,
            })?;

        debug!(
            floor = %name,
            width = grid.width(),
            height = grid.height(),
            locations = locations.len(),
            "floor loaded"
        );

        let mut floor = FloorData::new(name, grid, locations);
        if let Some(title) = &entry.title {
            floor = floor.with_title(title.clone());
        }
        let mut decor = floor.decor.clone();
        if let Some(outlines) = &entry.outlines {
            decor.outlines = outlines.clone();
        }
        if let Some(labels) = &entry.labels {
            decor.labels = labels.clone();
        }
        Ok(floor.with_decor(decor))
    }

    fn resolve(&self, field: &'static str, rel: &Path) -> Result<PathBuf, StoreError> {
        helpers::validate_relative_path(field, rel)?;
        Ok(self.root.join(rel))
    }
}
