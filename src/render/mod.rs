// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering floors to character cells.
//!
//! A floor renders to a [`Canvas`]: one tile per cell, zone borders as merged Unicode box-drawing
//! lines, zone labels as text. The TUI colors cells by their [`CellKind`]; the plain-text output
//! ignores the kind.

use std::fmt;

use thiserror::Error;

use crate::model::TileCode;

pub mod floor;
mod text;

pub use floor::{render_floor, render_frame_plain, FloorRenderOptions};
pub use text::canvas_to_string_trimmed;
pub(crate) use text::{text_len, truncate_with_ellipsis};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        // Straight runs, including line ends.
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        _ => UNICODE_BOX_CROSS,
    }
}

/// What a canvas cell shows, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// Outside the floor grid.
    #[default]
    Blank,
    Tile(TileCode),
    Border,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    kind: CellKind,
    edges: BoxEdges,
}

impl Cell {
    const BLANK: Self = Self {
        ch: ' ',
        kind: CellKind::Blank,
        edges: BoxEdges::NONE,
    };
}

/// A fixed-size, bounds-checked grid of styled character cells.
///
/// Tiles and labels overwrite whatever is below them. Border lines drawn over each other merge into
/// junctions (`┼`, `├`, `┤`, `┬`, `┴`) and corners instead of overwriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Largest number of cells a canvas may hold.
    pub const MAX_CELLS: usize = 1 << 24;

    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .filter(|len| *len <= Self::MAX_CELLS)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the glyph shown at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.glyph_at(x, y, idx))
    }

    pub fn kind(&self, x: usize, y: usize) -> Result<CellKind, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx].kind)
    }

    /// Glyph and kind of every cell of row `y`, left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = (char, CellKind)> + '_ {
        let start = if y < self.height { y * self.width } else { self.cells.len() };
        let end = (start + self.width).min(self.cells.len());
        (start..end).map(move |idx| (self.glyph_at(idx - start, y, idx), self.cells[idx].kind))
    }

    pub fn put_tile(&mut self, x: usize, y: usize, tile: TileCode) -> Result<(), CanvasError> {
        self.put(x, y, tile.as_char(), CellKind::Tile(tile))
    }

    /// Writes `text` as a label starting at `(x, y)`, clipped at the right edge.
    pub fn write_label(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        for (offset, ch) in text.chars().enumerate() {
            let cx = x + offset;
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, CellKind::Label)?;
        }
        Ok(())
    }

    /// Draws a border line from `x0..=x1` at `y`.
    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        if y >= self.height || max_x >= self.width {
            return Err(self.out_of_bounds(max_x, y));
        }
        for x in min_x..=max_x {
            self.add_edges(x, y, BoxEdges::LEFT.union(BoxEdges::RIGHT))?;
        }
        Ok(())
    }

    /// Draws a border line from `y0..=y1` at `x`.
    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        if x >= self.width || max_y >= self.height {
            return Err(self.out_of_bounds(x, max_y));
        }
        for y in min_y..=max_y {
            self.add_edges(x, y, BoxEdges::UP.union(BoxEdges::DOWN))?;
        }
        Ok(())
    }

    fn put(&mut self, x: usize, y: usize, ch: char, kind: CellKind) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = Cell {
            ch,
            kind,
            edges: BoxEdges::NONE,
        };
        Ok(())
    }

    fn add_edges(&mut self, x: usize, y: usize, edges: BoxEdges) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        let cell = &mut self.cells[idx];
        cell.edges = cell.edges.union(edges);
        cell.kind = CellKind::Border;
        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok((y * self.width) + x)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    fn glyph_at(&self, x: usize, y: usize, idx: usize) -> char {
        let cell = self.cells[idx];
        if cell.edges.is_empty() {
            return cell.ch;
        }

        let connected = self.connected_box_edges(x, y, cell.edges);
        box_char_from_edges(if connected.is_empty() {
            cell.edges
        } else {
            connected
        })
    }

    /// Keeps only the edges that meet a matching edge in the neighbouring cell, so a line ending
    /// on another line renders as a tee or corner.
    fn connected_box_edges(&self, x: usize, y: usize, edges: BoxEdges) -> BoxEdges {
        let neighbour = |dx: isize, dy: isize| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.in_bounds(nx, ny)
                .then(|| self.cells[(ny * self.width) + nx].edges)
        };

        [
            (BoxEdges::LEFT, BoxEdges::RIGHT, -1, 0),
            (BoxEdges::RIGHT, BoxEdges::LEFT, 1, 0),
            (BoxEdges::UP, BoxEdges::DOWN, 0, -1),
            (BoxEdges::DOWN, BoxEdges::UP, 0, 1),
        ]
        .into_iter()
        .filter(|(own, other, dx, dy)| {
            edges.contains(*own) && neighbour(*dx, *dy).is_some_and(|n| n.contains(*other))
        })
        .fold(BoxEdges::NONE, |acc, (own, ..)| acc.union(own))
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for (ch, _) in self.row(y) {
                f.write_char(ch)?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas area {width}*{height} exceeds the cell limit")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError, CellKind};
    use crate::model::TileCode;

    fn lots(width: usize, height: usize) -> Canvas {
        let mut c = Canvas::new(width, height).expect("canvas");
        for y in 0..height {
            for x in 0..width {
                c.put_tile(x, y, TileCode::Lot).unwrap();
            }
        }
        c
    }

    #[test]
    fn tiles_keep_their_kind() {
        let mut c = Canvas::new(3, 1).expect("canvas");
        c.put_tile(1, 0, TileCode::Lot).unwrap();
        assert_eq!(c.to_string(), " # ");
        assert_eq!(c.kind(1, 0).unwrap(), CellKind::Tile(TileCode::Lot));
        assert_eq!(c.kind(0, 0).unwrap(), CellKind::Blank);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        assert_eq!(
            c.put_tile(2, 0, TileCode::Lot).unwrap_err(),
            CanvasError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            }
        );
        assert!(c.get(0, 2).is_err());
        assert!(c.draw_hline(0, 2, 0).is_err());
        assert_eq!(c.to_string(), "  \n  ");
    }

    #[test]
    fn rejects_area_overflow() {
        assert_eq!(
            Canvas::new(usize::MAX, 2).unwrap_err(),
            CanvasError::AreaOverflow {
                width: usize::MAX,
                height: 2
            }
        );
        assert_eq!(
            Canvas::new(4_000_000_000, 46).unwrap_err(),
            CanvasError::AreaOverflow {
                width: 4_000_000_000,
                height: 46
            }
        );
        assert!(Canvas::new(4096, 4096).is_ok());
    }

    #[test]
    fn labels_clip_at_the_right_edge() {
        let mut c = lots(4, 1);
        c.write_label(2, 0, "ABC").unwrap();
        assert_eq!(c.to_string(), "##AB");
        assert_eq!(c.kind(3, 0).unwrap(), CellKind::Label);
    }

    #[test]
    fn borders_over_draw_tiles() {
        let mut c = lots(5, 3);
        c.draw_hline(1, 3, 1).unwrap();
        assert_eq!(c.to_string(), "#####\n#───#\n#####");
        assert_eq!(c.kind(2, 1).unwrap(), CellKind::Border);
    }

    #[test]
    fn crossing_lines_merge_into_a_cross() {
        let mut c = lots(5, 5);
        c.draw_hline(0, 4, 2).unwrap();
        c.draw_vline(2, 0, 4).unwrap();
        assert_eq!(c.to_string(), "##│##\n##│##\n──┼──\n##│##\n##│##");
    }

    #[test]
    fn meeting_lines_form_corners_and_tees() {
        let mut c = Canvas::new(4, 3).expect("canvas");
        c.draw_hline(0, 3, 0).unwrap();
        c.draw_vline(0, 0, 2).unwrap();
        c.draw_vline(2, 0, 2).unwrap();
        c.draw_hline(0, 2, 2).unwrap();
        assert_eq!(c.to_string(), "┌─┬─\n│ │ \n└─┘ ");
    }

    #[test]
    fn row_yields_glyphs_and_kinds() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        c.put_tile(0, 1, TileCode::Floor).unwrap();
        let row = c.row(1).collect::<Vec<_>>();
        assert_eq!(row, vec![('.', CellKind::Tile(TileCode::Floor)), (' ', CellKind::Blank)]);
        assert_eq!(c.row(5).count(), 0);
    }
}
