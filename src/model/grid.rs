// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::TileCode;

/// A tile position on a floor grid: `col` counts left to right, `row` top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    pub col: usize,
    pub row: usize,
}

impl TilePos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Row-major grid of tile codes for one floor.
///
/// Loaded floor plans are kept as immutable templates; frames work on clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileCode>,
}

impl FloorGrid {
    /// Creates a grid filled with `fill`.
    pub fn filled(width: usize, height: usize, fill: TileCode) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    /// Builds a grid from rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<TileCode>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            width,
            height,
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.col < self.width && pos.row < self.height
    }

    pub fn get(&self, pos: TilePos) -> Option<TileCode> {
        self.index_of(pos).map(|idx| self.tiles[idx])
    }

    /// Replaces the tile at `pos`, returning the previous one.
    pub fn set(&mut self, pos: TilePos, tile: TileCode) -> Option<TileCode> {
        let idx = self.index_of(pos)?;
        Some(std::mem::replace(&mut self.tiles[idx], tile))
    }

    /// Applies `step` to the tile at `pos`. Returns `false` when `pos` is outside the grid.
    pub fn update(&mut self, pos: TilePos, step: impl FnOnce(TileCode) -> TileCode) -> bool {
        match self.index_of(pos) {
            Some(idx) => {
                self.tiles[idx] = step(self.tiles[idx]);
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileCode]> + '_ {
        // `max(1)` keeps `chunks` happy for zero-width grids, which then yield no rows.
        self.tiles.chunks(self.width.max(1)).take(self.height)
    }

    pub fn count(&self, mut predicate: impl FnMut(TileCode) -> bool) -> usize {
        self.tiles.iter().filter(|tile| predicate(**tile)).count()
    }

    fn index_of(&self, pos: TilePos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }
}

impl fmt::Display for FloorGrid {
    /// Writes the grid in floor-plan file format (space separated codes, one row per line).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for (x, tile) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FloorGrid, TilePos};
    use crate::model::TileCode;

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![vec![TileCode::Lot; 3], vec![TileCode::Lot; 2]];
        assert!(FloorGrid::from_rows(rows).is_none());
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = FloorGrid::filled(3, 2, TileCode::Floor);
        assert_eq!(grid.set(TilePos::new(2, 1), TileCode::Lot), Some(TileCode::Floor));
        assert_eq!(grid.get(TilePos::new(2, 1)), Some(TileCode::Lot));
        assert_eq!(grid.get(TilePos::new(3, 0)), None);
        assert_eq!(grid.set(TilePos::new(0, 2), TileCode::Lot), None);
    }

    #[test]
    fn update_reports_out_of_grid() {
        let mut grid = FloorGrid::filled(2, 2, TileCode::Lot);
        assert!(grid.update(TilePos::new(1, 1), TileCode::advance_pending));
        assert!(!grid.update(TilePos::new(5, 1), TileCode::advance_pending));
        assert_eq!(grid.to_string(), "# #\n# a");
    }

    #[test]
    fn rows_of_empty_grid_are_empty() {
        let grid = FloorGrid::filled(0, 0, TileCode::Floor);
        assert_eq!(grid.rows().count(), 0);
    }
}
