// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

use crate::model::{Level, TileCode};
use crate::render::CellKind;

pub(crate) const PALETTE_ENV: &str = "ZONEPICK_PALETTE";

const TEXT_COLOR: Color = Color::Rgb(0, 170, 255);
const FLOOR_TITLE_COLOR: Color = Color::Rgb(255, 0, 255);

/// Cell colors for the two occupancy ladders plus floor and empty lots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TileTheme {
    palette: TilePalette,
}

impl Default for TileTheme {
    fn default() -> Self {
        Self {
            palette: TilePalette::DEFAULT,
        }
    }
}

impl TileTheme {
    /// Default colors, or the `ZONEPICK_PALETTE` override when it is set and non-empty.
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        Self::from_var(env::var(PALETTE_ENV))
    }

    fn from_var(var: Result<String, env::VarError>) -> Result<Self, ThemeError> {
        let value = match var {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV,
                    value: "<non-unicode>".to_owned(),
                });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let palette = TilePalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV,
            value: format!("{trimmed} ({error})"),
        })?;
        Ok(Self { palette })
    }

    pub(crate) fn tile_color(&self, tile: TileCode) -> Color {
        let ladder_idx = |level: Level| usize::from(level.get() - 1);
        match tile {
            TileCode::Floor => self.palette.floor,
            TileCode::Lot => self.palette.lot,
            TileCode::Pending(level) => self.palette.pending[ladder_idx(level)],
            TileCode::Batched(level) => self.palette.batched[ladder_idx(level)],
        }
    }

    pub(crate) fn cell_style(&self, kind: CellKind) -> Style {
        match kind {
            CellKind::Blank => Style::default(),
            CellKind::Tile(tile @ (TileCode::Pending(_) | TileCode::Batched(_))) => Style::default()
                .fg(self.tile_color(tile))
                .add_modifier(Modifier::BOLD),
            CellKind::Tile(tile) => Style::default().fg(self.tile_color(tile)),
            CellKind::Border => Style::default().fg(Color::White),
            CellKind::Label => Style::default()
                .fg(Color::Black)
                .bg(TEXT_COLOR)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub(crate) fn text_style(&self) -> Style {
        Style::default().fg(TEXT_COLOR)
    }

    pub(crate) fn floor_title_style(&self) -> Style {
        Style::default()
            .fg(FLOOR_TITLE_COLOR)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        Style::default().fg(Color::Red)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TilePalette {
    floor: Color,
    lot: Color,
    pending: [Color; 5],
    batched: [Color; 5],
}

impl TilePalette {
    const CSV_LEN: usize = 12;

    /// Pending levels warm up from yellow to red, batched levels deepen from light to dark blue.
    const DEFAULT: Self = Self {
        floor: Color::DarkGray,
        lot: Color::Gray,
        pending: [
            Color::Rgb(255, 230, 120),
            Color::Rgb(255, 190, 80),
            Color::Rgb(255, 140, 50),
            Color::Rgb(240, 80, 40),
            Color::Rgb(200, 20, 20),
        ],
        batched: [
            Color::Rgb(150, 220, 255),
            Color::Rgb(90, 180, 250),
            Color::Rgb(40, 130, 240),
            Color::Rgb(20, 80, 210),
            Color::Rgb(10, 40, 160),
        ],
    };

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (floor,lot,p1,p2,p3,p4,p5,b1,b2,b3,b4,b5), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let colors = parts
            .iter()
            .map(|part| parse_palette_color(part))
            .collect::<Result<Vec<_>, _>>()?;
        let mut pending = [Color::Reset; 5];
        pending.copy_from_slice(&colors[2..7]);
        let mut batched = [Color::Reset; 5];
        batched.copy_from_slice(&colors[7..12]);

        Ok(Self {
            floor: colors[0],
            lot: colors[1],
            pending,
            batched,
        })
    }
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(
            parse_hex_channel(r)?,
            parse_hex_channel(g)?,
            parse_hex_channel(b)?,
        ));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let [_, r, g, b] = rgb.to_be_bytes();
    Ok(Color::Rgb(r, g, b))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        // 16-bit channels (`rgb:ffff/0000/8080`) keep their high byte.
        4 => u16::from_str_radix(value, 16)
            .map(|wide| wide.to_be_bytes()[0])
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!(
            "invalid rgb: component {value} (expected 2 or 4 hex digits)"
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: &'static str, value: String },
}
