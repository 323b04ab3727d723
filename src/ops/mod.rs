// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tile-state updates.
//!
//! A frame is always derived from the immutable base grids plus the lists of a single timestamp,
//! so stepping back and forth through the log never accumulates state.

use std::fmt;
use std::ops::{Add, AddAssign};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::ZoneTable;
use crate::model::{FloorGrid, LocationTable, ShipmentId, TileCode, TilePos};
use crate::store::Dataset;

/// What to do with a timestamp whose pending list is empty but whose batched list is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchedOnlyPolicy {
    /// Show the untouched floor and report the frame as unchanged.
    #[default]
    Ignore,
    /// Apply the batched ids anyway.
    Apply,
}

/// Per-frame counters, summed across floors by [`Frame::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Tiles on a pending level after the update.
    pub pending_tiles: usize,
    /// Tiles on a batched level after the update.
    pub batched_tiles: usize,
    /// Ids not present in the floor's location table.
    pub skipped_missing: usize,
    /// Ids whose location could not be placed on the grid.
    pub skipped_unresolved: usize,
}

impl FrameStats {
    pub fn skipped(&self) -> usize {
        self.skipped_missing + self.skipped_unresolved
    }
}

impl Add for FrameStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            pending_tiles: self.pending_tiles + rhs.pending_tiles,
            batched_tiles: self.batched_tiles + rhs.batched_tiles,
            skipped_missing: self.skipped_missing + rhs.skipped_missing,
            skipped_unresolved: self.skipped_unresolved + rhs.skipped_unresolved,
        }
    }
}

impl AddAssign for FrameStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Result of applying one timestamp's lists to one floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameUpdate {
    pub grid: FloorGrid,
    /// `false` when the frame shows the base grid because nothing was applied.
    pub changed: bool,
    pub stats: FrameStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorFrame {
    pub name: String,
    pub grid: FloorGrid,
    pub changed: bool,
    pub stats: FrameStats,
}

/// Every floor at one timestamp of the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub timestamp: String,
    pub ppid: i64,
    pub batch_size: usize,
    pub floors: Vec<FloorFrame>,
}

impl Frame {
    pub fn stats(&self) -> FrameStats {
        self.floors
            .iter()
            .fold(FrameStats::default(), |acc, floor| acc + floor.stats)
    }

    pub fn changed(&self) -> bool {
        self.floors.iter().any(|floor| floor.changed)
    }

    /// Status line shown above the floors.
    pub fn header(&self) -> String {
        format!(
            "{}, PPID: {}, batchjobsize: {}",
            self.timestamp, self.ppid, self.batch_size
        )
    }
}

/// Applies one timestamp's pending and batched ids to a fresh copy of `base`.
///
/// Pending ids go first, then batched ids, each in list order; ids sharing a tile compound on it.
/// Ids missing from `locations` or resolving outside the grid are skipped and counted.
pub fn apply_events(
    base: &FloorGrid,
    locations: &LocationTable,
    zones: &ZoneTable,
    pending: &[ShipmentId],
    batched: &[ShipmentId],
    policy: BatchedOnlyPolicy,
) -> FrameUpdate {
    let mut grid = base.clone();
    let mut stats = FrameStats::default();

    let apply_batched = match policy {
        BatchedOnlyPolicy::Ignore => !pending.is_empty(),
        BatchedOnlyPolicy::Apply => true,
    };
    let changed = match policy {
        BatchedOnlyPolicy::Ignore => !pending.is_empty(),
        BatchedOnlyPolicy::Apply => !pending.is_empty() || !batched.is_empty(),
    };

    let mut placer = Placer {
        grid: &mut grid,
        locations,
        zones,
        stats: &mut stats,
    };
    placer.advance_all(pending, TileCode::advance_pending);
    if apply_batched {
        placer.advance_all(batched, TileCode::advance_batched);
    }

    stats.pending_tiles = grid.count(|tile| matches!(tile, TileCode::Pending(_)));
    stats.batched_tiles = grid.count(|tile| matches!(tile, TileCode::Batched(_)));

    FrameUpdate {
        grid,
        changed,
        stats,
    }
}

/// Derives every floor at the event `index`, or `None` when the index is past the log.
pub fn derive_frame(dataset: &Dataset, index: usize) -> Option<Frame> {
    let event = dataset.events().get(index)?;
    let floors = dataset
        .floors()
        .iter()
        .map(|floor| {
            let update = apply_events(
                &floor.grid,
                &floor.locations,
                dataset.zones(),
                &event.pending,
                &event.batched,
                dataset.batched_only(),
            );
            FloorFrame {
                name: floor.name.clone(),
                grid: update.grid,
                changed: update.changed,
                stats: update.stats,
            }
        })
        .collect();

    Some(Frame {
        index,
        timestamp: event.timestamp.clone(),
        ppid: event.ppid,
        batch_size: event.batch_size(),
        floors,
    })
}

/// One line of the whole-log summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub timestamp: String,
    pub ppid: i64,
    pub pending: usize,
    pub batched: usize,
    pub stats: FrameStats,
}

impl fmt::Display for SummaryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.timestamp,
            self.ppid,
            self.pending,
            self.batched,
            self.stats.pending_tiles,
            self.stats.batched_tiles,
            self.stats.skipped()
        )
    }
}

/// Frame statistics for every timestamp, in log order.
///
/// Frames are independent of each other, so they are derived in parallel.
pub fn summarize(dataset: &Dataset) -> Vec<SummaryRow> {
    (0..dataset.events().len())
        .into_par_iter()
        .filter_map(|index| {
            let frame = derive_frame(dataset, index)?;
            let event = dataset.events().get(index)?;
            Some(SummaryRow {
                timestamp: frame.timestamp.clone(),
                ppid: frame.ppid,
                pending: event.pending.len(),
                batched: event.batched.len(),
                stats: frame.stats(),
            })
        })
        .collect()
}

// Id placement helpers shared by the pending and batched passes.
include!("ops_impl.rs");
