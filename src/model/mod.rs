// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Floors are grids of tile codes; shipments map to storage locations; the event log lists, per
//! timestamp, the shipments pending and batched at that moment.

pub mod event;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod ids;
pub mod location;
pub mod tile;

pub use event::{EventLog, TimestampEvent};
pub use grid::{FloorGrid, TilePos};
pub use ids::{ShipmentId, Zone, ZoneError};
pub use location::{Location, LocationTable};
pub use tile::{Level, TileCode};
