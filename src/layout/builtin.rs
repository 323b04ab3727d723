// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in site layout for the DEO1 picking floors (3F and the 3FM mezzanine).
//!
//! The zone table numbers aisles and bays the way the location tables do. Columns are tile
//! columns on the 3FM plan, rows count from the top of the plan.

use super::decor::{BoundaryPoint, FloorDecor, ZoneLabel};
use super::zones::{AisleRule, Band, Banding, ColumnRule, ZoneRule, ZoneTable};
use crate::model::Zone;

/// Aisles that run the full depth of the floor, interrupted by three cross aisles.
fn front_56() -> Banding {
    Banding::new([Band::upto(16, -1), Band::upto(32, 0), Band::upto(56, 2), Band::rest(6)])
}

/// Full-depth aisles whose last cross aisle comes earlier and is wider.
fn front_52() -> Banding {
    Banding::new([Band::upto(16, -1), Band::upto(32, 0), Band::upto(52, 2), Band::rest(10)])
}

/// Aisles that start below the AR mezzanine block.
fn rear_40() -> Banding {
    Banding::new([Band::upto(16, 8), Band::upto(40, 10), Band::rest(14)])
}

fn flat() -> Banding {
    Banding::new([Band::rest(0)])
}

fn aisles(from: u32, to: Option<u32>, column: ColumnRule, banding: Banding) -> AisleRule {
    AisleRule {
        from,
        to,
        column,
        banding,
    }
}

fn zone_rule(name: &'static str, aisles: Vec<AisleRule>) -> ZoneRule {
    ZoneRule {
        zone: Zone::from_static(name),
        aisles,
    }
}

/// Zone rules shared by every floor of the site.
pub fn zone_table() -> ZoneTable {
    use ColumnRule as C;

    ZoneTable::new(vec![
        zone_rule("A", vec![aisles(0, None, C::linear(3, -1), front_56())]),
        zone_rule("AR", vec![aisles(0, None, C::linear(2, 11), flat())]),
        zone_rule(
            "B",
            vec![
                aisles(0, Some(0), C::linear(3, 23), front_56()),
                aisles(1, Some(2), C::linear(3, 23), rear_40()),
                aisles(3, Some(3), C::split(3, 23, 26), rear_40()),
                aisles(4, Some(10), C::linear(3, 26), rear_40()),
                aisles(11, Some(11), C::split(3, 26, 29), rear_40()),
                aisles(12, Some(19), C::linear(3, 29), rear_40()),
                aisles(20, Some(20), C::split(3, 29, 31), rear_40()),
            ],
        ),
        zone_rule(
            "C",
            vec![
                aisles(0, Some(17), C::linear(3, 94), rear_40()),
                aisles(18, Some(18), C::linear(3, 94), front_56()),
            ],
        ),
        zone_rule("D", vec![aisles(0, None, C::linear(3, 151), front_56())]),
        zone_rule(
            "E",
            vec![
                aisles(0, Some(0), C::linear(3, 178), front_56()),
                aisles(1, None, C::linear(3, 178), front_52()),
            ],
        ),
        zone_rule("F", vec![aisles(0, None, C::linear(3, 208), front_52())]),
    ])
}

/// Human-facing floor title for the title screen, when it differs from the file name.
pub fn floor_title(floor: &str) -> Option<&'static str> {
    match floor {
        "3FM" => Some("3.5F"),
        _ => None,
    }
}

/// Zone borders and labels of a known floor.
pub fn floor_decor(floor: &str) -> Option<FloorDecor> {
    match floor {
        "3F" => Some(decor_3f()),
        "3FM" => Some(decor_3fm()),
        _ => None,
    }
}

fn decor_3f() -> FloorDecor {
    const G_TOP_LEFT: BoundaryPoint = [0, 0];
    const G_BOTTOM_LEFT: BoundaryPoint = [0, 44];
    const G_TOP_RIGHT: BoundaryPoint = [8, 0];
    const G_STEP: BoundaryPoint = [8, 4];
    const H_TOP_LEFT: BoundaryPoint = [28, 4];
    const H_TOP_RIGHT: BoundaryPoint = [58, 4];
    const H_BOTTOM_LEFT: BoundaryPoint = [28, 44];
    const H_BOTTOM_RIGHT: BoundaryPoint = [58, 44];
    const I_TOP_RIGHT: BoundaryPoint = [123, 4];
    const I_BOTTOM_RIGHT: BoundaryPoint = [88, 44];

    FloorDecor::from_lines(
        &[
            (G_TOP_LEFT, G_TOP_RIGHT),
            (G_TOP_LEFT, G_BOTTOM_LEFT),
            (G_TOP_RIGHT, G_STEP),
            (G_STEP, I_TOP_RIGHT),
            (H_TOP_LEFT, H_BOTTOM_LEFT),
            (H_TOP_RIGHT, H_BOTTOM_RIGHT),
            (G_BOTTOM_LEFT, I_BOTTOM_RIGHT),
        ],
        Vec::new(),
    )
}

fn decor_3fm() -> FloorDecor {
    const TOP: usize = 0;
    const AR_BOTTOM: usize = 9;
    const BOTTOM: usize = 45;

    let a_top_left = [0, TOP];
    let a_bottom_left = [0, BOTTOM];
    let ar_top_left = [11, TOP];
    let ar_top_right = [51, TOP];
    let ar_bottom_left = [11, AR_BOTTOM];
    let ar_bottom_right = [51, AR_BOTTOM];
    let b_top_left = [22, AR_BOTTOM];
    let b_top_right = [93, AR_BOTTOM];
    let b_bottom_left = [22, BOTTOM];
    let b_bottom_right = [93, BOTTOM];
    let c_top_left = [93, AR_BOTTOM];
    let c_top_right = [150, AR_BOTTOM];
    let c_bottom_left = [93, BOTTOM];
    let c_bottom_right = [150, BOTTOM];
    let d_top_left = [150, TOP];
    let d_top_right = [177, TOP];
    let d_bottom_left = [150, BOTTOM];
    let d_bottom_right = [177, BOTTOM];
    let f_top_left = [207, TOP];
    let f_top_right = [237, TOP];
    let f_bottom_left = [207, BOTTOM];
    let f_bottom_right = [237, BOTTOM];

    let mid = BOTTOM / 2;
    let labels = vec![
        ZoneLabel::new("A", 11, mid),
        ZoneLabel::new("AR", (11 + 51) / 2, 5),
        ZoneLabel::new("B", (22 + 93) / 2, mid),
        ZoneLabel::new("C", (93 + 150) / 2, mid),
        ZoneLabel::new("D", (150 + 177) / 2, mid),
        ZoneLabel::new("E", (177 + 207) / 2, mid),
        ZoneLabel::new("F", (207 + 237) / 2, mid),
    ];

    FloorDecor::from_lines(
        &[
            (a_top_left, ar_top_left),
            (a_top_left, a_bottom_left),
            (a_bottom_left, b_bottom_left),
            (ar_top_left, ar_top_right),
            (ar_top_left, ar_bottom_left),
            (ar_bottom_left, b_top_left),
            (ar_top_right, ar_bottom_right),
            (b_top_left, b_top_right),
            (b_top_left, b_bottom_left),
            (b_bottom_left, b_bottom_right),
            (c_top_left, c_top_right),
            (c_top_left, c_bottom_left),
            (c_bottom_left, c_bottom_right),
            (c_top_right, c_bottom_right),
            (d_top_left, c_top_right),
            (d_top_left, f_top_right),
            (d_top_right, d_bottom_right),
            (d_bottom_left, f_bottom_right),
            (f_top_left, f_bottom_left),
            (f_bottom_left, f_bottom_right),
            (f_top_right, f_bottom_right),
        ],
        labels,
    )
}
