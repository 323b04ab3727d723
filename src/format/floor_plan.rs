// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use crate::model::{FloorGrid, TileCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorPlanParseError {
    #[error("floor plan has no rows")]
    Empty,
    #[error("row on line {line_no} has {found} tiles, expected {expected}")]
    RaggedRow {
        line_no: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile code {token:?} on line {line_no}, column {column}")]
    UnknownTileCode {
        line_no: usize,
        column: usize,
        token: String,
    },
}

/// Parses a floor plan: one grid row per line, tile codes separated by single spaces.
///
/// Trailing whitespace and trailing blank lines are ignored. The first row fixes the width.
pub fn parse_floor_plan(input: &str) -> Result<FloorGrid, FloorPlanParseError> {
    let lines = input.lines().map(str::trim_end).collect::<Vec<_>>();
    let used = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);
    if used == 0 {
        return Err(FloorPlanParseError::Empty);
    }

    let mut rows = Vec::with_capacity(used);
    let mut width = None;
    for (idx, line) in lines[..used].iter().enumerate() {
        let line_no = idx + 1;
        let row = parse_row(line, line_no)?;
        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(FloorPlanParseError::RaggedRow {
                line_no,
                expected,
                found: row.len(),
            });
        }
        rows.push(row);
    }

    FloorGrid::from_rows(rows).ok_or(FloorPlanParseError::Empty)
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<TileCode>, FloorPlanParseError> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    line.split(' ')
        .enumerate()
        .map(|(idx, token)| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => TileCode::from_char(ch),
                _ => None,
            }
            .ok_or_else(|| FloorPlanParseError::UnknownTileCode {
                line_no,
                column: idx + 1,
                token: token.to_owned(),
            })
        })
        .collect()
}
