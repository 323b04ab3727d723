// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Site layout: where storage locations sit on the floor grids, and how zones are outlined.

pub mod builtin;
pub mod decor;
pub mod zones;

pub use decor::{
    BoundaryPoint, DecorError, FloorDecor, Segment, SegmentAxis, SegmentError, ZoneLabel,
};
pub use zones::{AisleRule, Band, Banding, ColumnRule, ResolveError, ZoneRule, ZoneTable};
