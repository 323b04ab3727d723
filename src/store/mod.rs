// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading datasets from disk.
//!
//! A data directory holds one floor plan and one location table per floor, the shipment event log
//! and an optional `zonepick.json` manifest overriding file names and layout.

pub mod data_dir;
pub mod dataset;

pub use data_dir::{
    floor_name_from_path, DataDir, FloorEntry, Manifest, StoreError, DEFAULT_EVENTS_FILE,
    DEFAULT_FLOORS, MANIFEST_FILE,
};
pub use dataset::{Dataset, FloorData};
