// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::model::{Location, TilePos, Zone};

/// One bay band: bays up to `max_bay` (inclusive) sit `offset` rows from `ceil(bay / 2)`.
///
/// A band without `max_bay` matches every bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bay: Option<u32>,
    pub offset: i64,
}

impl Band {
    pub const fn upto(max_bay: u32, offset: i64) -> Self {
        Self {
            max_bay: Some(max_bay),
            offset,
        }
    }

    pub const fn rest(offset: i64) -> Self {
        Self {
            max_bay: None,
            offset,
        }
    }

    fn matches(&self, bay: u32) -> bool {
        self.max_bay.map_or(true, |max_bay| bay <= max_bay)
    }

    /// `None` when the row does not fit in an `i64`.
    fn row(&self, bay: u32) -> Option<i64> {
        i64::from(bay.div_ceil(2)).checked_add(self.offset)
    }
}

/// Ordered bay bands of an aisle; the first matching band wins.
///
/// Cross aisles interrupt the racking, so bays further along an aisle are pushed down by a few
/// extra rows per crossing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Banding(SmallVec<[Band; 4]>);

impl Banding {
    pub fn new(bands: impl IntoIterator<Item = Band>) -> Self {
        Self(bands.into_iter().collect())
    }

    /// First band covering `bay`.
    pub fn band_for(&self, bay: u32) -> Option<&Band> {
        self.0.iter().find(|band| band.matches(bay))
    }
}

/// Column of an aisle centerline: `aisle * stride + offset`.
///
/// `even_offset` replaces `offset` for even bays on aisles whose two rack faces are split by
/// something wider than a walkway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    pub stride: i64,
    pub offset: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub even_offset: Option<i64>,
}

impl ColumnRule {
    pub const fn linear(stride: i64, offset: i64) -> Self {
        Self {
            stride,
            offset,
            even_offset: None,
        }
    }

    pub const fn split(stride: i64, odd_offset: i64, even_offset: i64) -> Self {
        Self {
            stride,
            offset: odd_offset,
            even_offset: Some(even_offset),
        }
    }

    /// Column of the rack face holding `bay`: one left of the centerline for odd bays, one right
    /// for even bays. `None` when the arithmetic leaves `i64`.
    fn column(&self, aisle: u32, bay: u32) -> Option<i64> {
        let (offset, side) = match self.even_offset {
            Some(even_offset) if is_even(bay) => (even_offset, 1),
            _ if is_even(bay) => (self.offset, 1),
            _ => (self.offset, -1),
        };
        i64::from(aisle)
            .checked_mul(self.stride)?
            .checked_add(offset)?
            .checked_add(side)
    }
}

/// Placement rule for an inclusive aisle range of one zone (`to = None` is open ended).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AisleRule {
    pub from: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    pub column: ColumnRule,
    pub banding: Banding,
}

impl AisleRule {
    pub fn covers(&self, aisle: u32) -> bool {
        aisle >= self.from && self.to.map_or(true, |to| aisle <= to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRule {
    pub zone: Zone,
    pub aisles: Vec<AisleRule>,
}

/// Maps storage locations to floor-grid tiles.
///
/// Rules are consulted in order: first the zone, then the first aisle rule covering the aisle,
/// then the first band covering the bay. Odd bays sit one column left of the aisle centerline and
/// even bays one column right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneTable {
    zones: Vec<ZoneRule>,
}

impl ZoneTable {
    pub fn new(zones: Vec<ZoneRule>) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &[ZoneRule] {
        &self.zones
    }

    pub fn zone(&self, zone: &Zone) -> Option<&ZoneRule> {
        self.zones.iter().find(|rule| &rule.zone == zone)
    }

    pub fn resolve(&self, location: &Location) -> Result<TilePos, ResolveError> {
        let zone_rule = self.zone(&location.zone).ok_or_else(|| ResolveError::UnknownZone {
            zone: location.zone.clone(),
        })?;

        let aisle_rule = zone_rule
            .aisles
            .iter()
            .find(|rule| rule.covers(location.aisle))
            .ok_or_else(|| ResolveError::UnknownAisle {
                zone: location.zone.clone(),
                aisle: location.aisle,
            })?;

        let band = aisle_rule.banding.band_for(location.bay).ok_or_else(|| {
            ResolveError::UncoveredBay {
                zone: location.zone.clone(),
                aisle: location.aisle,
                bay: location.bay,
            }
        })?;

        let overflow = || ResolveError::CoordinateOverflow {
            location: location.clone(),
        };
        let row = band.row(location.bay).ok_or_else(overflow)?;
        let col = aisle_rule
            .column
            .column(location.aisle, location.bay)
            .ok_or_else(overflow)?;

        match (usize::try_from(col), usize::try_from(row)) {
            (Ok(col), Ok(row)) => Ok(TilePos::new(col, row)),
            _ => Err(ResolveError::NegativeCoordinate {
                location: location.clone(),
                col,
                row,
            }),
        }
    }
}

fn is_even(bay: u32) -> bool {
    bay % 2 == 0
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("zone {zone} has no layout rule")]
    UnknownZone { zone: Zone },
    #[error("aisle {aisle} of zone {zone} has no layout rule")]
    UnknownAisle { zone: Zone, aisle: u32 },
    #[error("bay {bay} of {zone}{aisle} is not covered by any band")]
    UncoveredBay { zone: Zone, aisle: u32, bay: u32 },
    #[error("{location} resolves to negative tile ({col},{row})")]
    NegativeCoordinate {
        location: Location,
        col: i64,
        row: i64,
    },
    #[error("{location} resolves past the representable tile range")]
    CoordinateOverflow { location: Location },
}
