// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ShipmentId;

/// What happened at one timestamp: the shipments waiting in sequence and the ones grouped into a
/// batch, both in log order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampEvent {
    pub timestamp: String,
    pub ppid: i64,
    pub pending: Vec<ShipmentId>,
    pub batched: Vec<ShipmentId>,
}

impl TimestampEvent {
    /// Number of shipments in the batch job (the header's "batchjobsize").
    pub fn batch_size(&self) -> usize {
        self.batched.len()
    }
}

/// Timestamp events ordered lexicographically by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<TimestampEvent>,
}

impl EventLog {
    /// Builds a log from events in any order.
    ///
    /// When a timestamp appears more than once the last event wins.
    pub fn from_events(events: impl IntoIterator<Item = TimestampEvent>) -> Self {
        let mut by_timestamp = BTreeMap::<String, TimestampEvent>::new();
        for event in events {
            by_timestamp.insert(event.timestamp.clone(), event);
        }
        Self {
            events: by_timestamp.into_values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimestampEvent> {
        self.events.get(index)
    }

    pub fn events(&self) -> &[TimestampEvent] {
        &self.events
    }
}
