// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Occupancy level on one of the two tile ladders (`1..=5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Next level up, clamped at [`Level::MAX`].
    pub fn saturating_next(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }
}

/// One cell of a floor plan.
///
/// The character codes match the floor-plan file format: `.` floor, `#` lot, `a`..`e` pending
/// levels 1..5, `1`..`5` batched levels 1..5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCode {
    Floor,
    Lot,
    Pending(Level),
    Batched(Level),
}

impl TileCode {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Lot),
            'a'..='e' => Level::new(ch as u8 - b'a' + 1).map(Self::Pending),
            '1'..='5' => Level::new(ch as u8 - b'0').map(Self::Batched),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Lot => '#',
            Self::Pending(level) => (b'a' + level.get() - 1) as char,
            Self::Batched(level) => (b'0' + level.get()) as char,
        }
    }

    /// One step up the pending ladder.
    ///
    /// `Lot` becomes pending level 1, pending levels climb and saturate at 5. Floor and batched
    /// tiles are left as they are.
    pub fn advance_pending(self) -> Self {
        match self {
            Self::Lot => Self::Pending(Level::MIN),
            Self::Pending(level) => Self::Pending(level.saturating_next()),
            other => other,
        }
    }

    /// One step up the batched ladder.
    ///
    /// A lot or any pending level jumps straight to batched level 1; batched levels climb and
    /// saturate at 5. Floor tiles are left as they are.
    pub fn advance_batched(self) -> Self {
        match self {
            Self::Lot | Self::Pending(_) => Self::Batched(Level::MIN),
            Self::Batched(level) => Self::Batched(level.saturating_next()),
            Self::Floor => Self::Floor,
        }
    }
}

impl fmt::Display for TileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;
        f.write_char(self.as_char())
    }
}
