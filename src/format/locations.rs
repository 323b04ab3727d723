// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use super::split_fields;
use crate::model::{Location, LocationTable, ShipmentId, Zone, ZoneError};

const ZONE: &str = "zone";
const AISLE: &str = "aisle";
const BAY: &str = "bay";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationTableParseError {
    #[error("location table has no header row")]
    MissingHeader,
    #[error("location table header has no '{column}' column")]
    MissingColumn { column: &'static str },
    #[error("line {line_no} has no '{column}' field")]
    MissingField { line_no: usize, column: &'static str },
    #[error("invalid {column} {value:?} on line {line_no}")]
    InvalidNumber {
        line_no: usize,
        column: &'static str,
        value: String,
    },
    #[error("invalid zone {value:?} on line {line_no}: {source}")]
    InvalidZone {
        line_no: usize,
        value: String,
        source: ZoneError,
    },
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    zone: usize,
    aisle: usize,
    bay: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, LocationTableParseError> {
        let names = split_fields(header).map(str::trim).collect::<Vec<_>>();
        let find = |column: &'static str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or(LocationTableParseError::MissingColumn { column })
        };
        Ok(Self {
            zone: find(ZONE)?,
            aisle: find(AISLE)?,
            bay: find(BAY)?,
        })
    }
}

/// Parses a location table CSV.
///
/// The first column holds the shipment id; `zone`, `aisle` and `bay` are located by header name and
/// may appear in any order. Other columns are ignored, as are blank lines. A repeated shipment id
/// keeps the last row.
pub fn parse_locations(input: &str) -> Result<LocationTable, LocationTableParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(LocationTableParseError::MissingHeader)?;
    let columns = Columns::from_header(header)?;

    let mut table = LocationTable::new();
    for (line_no, line) in lines {
        let fields = split_fields(line).map(str::trim).collect::<Vec<_>>();
        let field = |idx: usize, column: &'static str| {
            fields
                .get(idx)
                .copied()
                .filter(|value| !value.is_empty())
                .ok_or(LocationTableParseError::MissingField { line_no, column })
        };

        let id = parse_number::<u64>(field(0, "id")?, line_no, "id").map(ShipmentId::new)?;
        let zone_text = field(columns.zone, ZONE)?;
        let zone = Zone::new(zone_text).map_err(|source| LocationTableParseError::InvalidZone {
            line_no,
            value: zone_text.to_owned(),
            source,
        })?;
        let aisle = parse_number(field(columns.aisle, AISLE)?, line_no, AISLE)?;
        let bay = parse_number(field(columns.bay, BAY)?, line_no, BAY)?;

        table.insert(id, Location::new(zone, aisle, bay));
    }
    Ok(table)
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    line_no: usize,
    column: &'static str,
) -> Result<T, LocationTableParseError> {
    value
        .parse()
        .map_err(|_| LocationTableParseError::InvalidNumber {
            line_no,
            column,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_locations, LocationTableParseError};
    use crate::model::{Location, ShipmentId, Zone};

    fn location(zone: &str, aisle: u32, bay: u32) -> Location {
        Location::new(Zone::new(zone).expect("zone"), aisle, bay)
    }

    #[test]
    fn columns_are_found_by_name() {
        let csv = "ship_id,bay,floor,zone,aisle\n176653,12,3FM,B,4\n176654, 3 ,3FM,AR,1\n";
        let table = parse_locations(csv).expect("table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(ShipmentId::new(176653)), Some(&location("B", 4, 12)));
        assert_eq!(table.get(ShipmentId::new(176654)), Some(&location("AR", 1, 3)));
    }

    #[test]
    fn blank_lines_are_skipped_and_last_duplicate_wins() {
        let csv = ",zone,aisle,bay\r\n\r\n1,A,1,1\r\n1,A,2,2\r\n";
        let table = parse_locations(csv).expect("table");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(ShipmentId::new(1)), Some(&location("A", 2, 2)));
    }

    #[test]
    fn missing_header_column_is_reported() {
        assert_eq!(
            parse_locations("id,zone,bay\n1,A,1\n").unwrap_err(),
            LocationTableParseError::MissingColumn { column: "aisle" }
        );
        assert_eq!(parse_locations("").unwrap_err(), LocationTableParseError::MissingHeader);
    }

    #[test]
    fn bad_rows_report_line_numbers() {
        assert_eq!(
            parse_locations("id,zone,aisle,bay\n1,A,1,1\n2,A,x,1\n").unwrap_err(),
            LocationTableParseError::InvalidNumber {
                line_no: 3,
                column: "aisle",
                value: "x".to_owned()
            }
        );
        assert_eq!(
            parse_locations("id,zone,aisle,bay\n1,A,1\n").unwrap_err(),
            LocationTableParseError::MissingField {
                line_no: 2,
                column: "bay"
            }
        );
        assert!(matches!(
            parse_locations("id,zone,aisle,bay\n-1,A,1,1\n").unwrap_err(),
            LocationTableParseError::InvalidNumber { column: "id", .. }
        ));
    }
}
