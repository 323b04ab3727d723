// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Zonepick: warehouse picking-zone occupancy, one timestamp at a time.
//!
//! Floor plans, shipment locations and the batching event log are loaded once ([`store`]); each
//! timestamp is turned into a frame of tile levels ([`ops`]) and drawn in the terminal ([`tui`]) or
//! as plain text ([`render`]).

pub mod format;
pub mod layout;
pub mod logging;
pub mod model;
pub mod ops;
pub mod render;
pub mod store;
pub mod tui;
pub mod ui;
