// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

/// Identifier of a shipment as it appears in location tables and event logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShipmentId(u64);

impl ShipmentId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShipmentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// A picking zone name such as `A`, `AR` or `B`.
///
/// Zone names are short, so they are kept inline. The only requirement is that the name is a
/// non-empty token without whitespace or commas, because it appears inside CSV rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Zone(SmolStr);

impl Zone {
    pub fn new(value: impl AsRef<str>) -> Result<Self, ZoneError> {
        let value = value.as_ref();
        validate_zone(value)?;
        Ok(Self(SmolStr::new(value)))
    }

    /// Zone name known at compile time; the caller guarantees it is a valid token.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(validate_zone(value).is_ok(), "invalid built-in zone {value:?}");
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Zone {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Zone {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Zone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Zone {
    type Error = ZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Zone> for String {
    fn from(value: Zone) -> Self {
        value.0.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("zone must not be empty")]
    Empty,
    #[error("zone must not contain whitespace or ','")]
    InvalidChar,
}

fn validate_zone(value: &str) -> Result<(), ZoneError> {
    if value.is_empty() {
        return Err(ZoneError::Empty);
    }
    if value.chars().any(|ch| ch.is_whitespace() || ch == ',') {
        return Err(ZoneError::InvalidChar);
    }
    Ok(())
}
