// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;
use tracing::warn;

use super::split_fields;
use crate::model::{EventLog, ShipmentId, TimestampEvent};

/// Token separating the pending ids from the batched ids on an event line.
pub const BATCH_SEPARATOR: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventLogParseError {
    #[error("line {line_no} has no '{BATCH_SEPARATOR}' token between pending and batched ids")]
    MissingSeparator { line_no: usize },
    #[error("line {line_no} has no {field}")]
    MissingField { line_no: usize, field: &'static str },
    #[error("invalid {field} {value:?} on line {line_no}")]
    InvalidNumber {
        line_no: usize,
        field: &'static str,
        value: String,
    },
}

/// Parses the shipment batching log.
///
/// Each non-blank line reads `timestamp,ppid,<pending id>...,;,<batched id>...`. Empty id tokens
/// (from doubled or trailing commas) are ignored. Events come back sorted by timestamp text; when a
/// timestamp repeats, the later line replaces the earlier one.
pub fn parse_event_log(input: &str) -> Result<EventLog, EventLogParseError> {
    let mut events = Vec::new();
    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        events.push(parse_line(line, line_no)?);
    }

    let parsed = events.len();
    let log = EventLog::from_events(events);
    if log.len() < parsed {
        warn!(
            repeated = parsed - log.len(),
            "event log repeats timestamps; keeping the last line of each"
        );
    }
    Ok(log)
}

fn parse_line(line: &str, line_no: usize) -> Result<TimestampEvent, EventLogParseError> {
    let mut fields = split_fields(line).map(str::trim);

    let timestamp = fields
        .next()
        .filter(|value| !value.is_empty())
        .ok_or(EventLogParseError::MissingField {
            line_no,
            field: "timestamp",
        })?;
    let ppid_text = fields.next().filter(|value| !value.is_empty()).ok_or(
        EventLogParseError::MissingField {
            line_no,
            field: "ppid",
        },
    )?;
    let ppid = ppid_text
        .parse::<i64>()
        .map_err(|_| EventLogParseError::InvalidNumber {
            line_no,
            field: "ppid",
            value: ppid_text.to_owned(),
        })?;

    let mut pending = Vec::new();
    let mut saw_separator = false;
    for token in fields.by_ref() {
        if token == BATCH_SEPARATOR {
            saw_separator = true;
            break;
        }
        push_id(&mut pending, token, line_no)?;
    }
    if !saw_separator {
        return Err(EventLogParseError::MissingSeparator { line_no });
    }

    let mut batched = Vec::new();
    for token in fields {
        push_id(&mut batched, token, line_no)?;
    }

    Ok(TimestampEvent {
        timestamp: timestamp.to_owned(),
        ppid,
        pending,
        batched,
    })
}

fn push_id(ids: &mut Vec<ShipmentId>, token: &str, line_no: usize) -> Result<(), EventLogParseError> {
    if token.is_empty() {
        return Ok(());
    }
    let id = token
        .parse::<ShipmentId>()
        .map_err(|_| EventLogParseError::InvalidNumber {
            line_no,
            field: "shipment id",
            value: token.to_owned(),
        })?;
    ids.push(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_event_log, EventLogParseError};
    use crate::model::ShipmentId;

    fn ids(values: &[u64]) -> Vec<ShipmentId> {
        values.iter().copied().map(ShipmentId::new).collect()
    }

    #[test]
    fn splits_pending_and_batched_at_separator() {
        let log = parse_event_log("2020-01-01 08:00:00,7,11,12,;,13\n").expect("log");
        let event = log.get(0).expect("event");
        assert_eq!(event.timestamp, "2020-01-01 08:00:00");
        assert_eq!(event.ppid, 7);
        assert_eq!(event.pending, ids(&[11, 12]));
        assert_eq!(event.batched, ids(&[13]));
        assert_eq!(event.batch_size(), 1);
    }

    #[test]
    fn empty_lists_and_empty_tokens_are_fine() {
        let log = parse_event_log("t1,1,;\nt2,2,,5,,;,,\n\n").expect("log");
        assert_eq!(log.len(), 2);
        let first = log.get(0).expect("t1");
        assert!(first.pending.is_empty() && first.batched.is_empty());
        let second = log.get(1).expect("t2");
        assert_eq!(second.pending, ids(&[5]));
        assert!(second.batched.is_empty());
    }

    #[test]
    fn later_duplicate_timestamp_wins_and_order_is_lexicographic() {
        let log = parse_event_log("t2,1,1,;\nt1,2,2,;\nt2,3,3,;\n").expect("log");
        let order = log
            .events()
            .iter()
            .map(|event| (event.timestamp.as_str(), event.ppid))
            .collect::<Vec<_>>();
        assert_eq!(order, vec![("t1", 2), ("t2", 3)]);
    }

    #[test]
    fn missing_separator_is_an_error() {
        assert_eq!(
            parse_event_log("t1,1,;\nt2,1,5,6\n").unwrap_err(),
            EventLogParseError::MissingSeparator { line_no: 2 }
        );
    }

    #[test]
    fn bad_numbers_are_reported() {
        assert_eq!(
            parse_event_log("t1,x,;\n").unwrap_err(),
            EventLogParseError::InvalidNumber {
                line_no: 1,
                field: "ppid",
                value: "x".to_owned()
            }
        );
        assert!(matches!(
            parse_event_log("t1,1,;,9,;\n").unwrap_err(),
            EventLogParseError::InvalidNumber { field: "shipment id", .. }
        ));
        assert_eq!(
            parse_event_log("t1\n").unwrap_err(),
            EventLogParseError::MissingField {
                line_no: 1,
                field: "ppid"
            }
        );
    }

    #[test]
    fn empty_input_is_an_empty_log() {
        assert!(parse_event_log("\n\n").expect("log").is_empty());
    }
}
