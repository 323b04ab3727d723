// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use rstest::{fixture, rstest};
use zonepick::model::{FloorGrid, Level, TileCode, TilePos};
use zonepick::ops::{derive_frame, summarize, Frame};
use zonepick::render::{render_frame_plain, FloorRenderOptions};
use zonepick::store::{DataDir, Dataset, StoreError};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("deo1")
}

#[fixture]
fn dataset() -> Dataset {
    DataDir::new(fixtures_dir())
        .load()
        .unwrap_or_else(|err| panic!("failed to load {:?}: {err}", fixtures_dir()))
}

fn frame(dataset: &Dataset, index: usize) -> Frame {
    derive_frame(dataset, index).unwrap_or_else(|| panic!("no frame at {index}"))
}

fn mezzanine(frame: &Frame) -> &FloorGrid {
    &frame
        .floors
        .iter()
        .find(|floor| floor.name == "3FM")
        .expect("3FM frame")
        .grid
}

fn pending(level: u8) -> Option<TileCode> {
    Level::new(level).map(TileCode::Pending)
}

fn batched(level: u8) -> Option<TileCode> {
    Level::new(level).map(TileCode::Batched)
}

#[rstest]
fn default_file_names_load_both_floors(dataset: Dataset) {
    let names = dataset
        .floors()
        .iter()
        .map(|floor| (floor.name.as_str(), floor.title.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(names, vec![("3F", "3F"), ("3FM", "3.5F")]);

    let mezzanine = dataset.floor("3FM").expect("3FM");
    assert_eq!((mezzanine.grid.width(), mezzanine.grid.height()), (238, 46));
    assert_eq!(mezzanine.locations.len(), 11);
    assert_eq!(mezzanine.decor.outlines.len(), 21);
}

#[rstest]
fn events_are_ordered_by_timestamp(dataset: Dataset) {
    let ppids = dataset
        .events()
        .events()
        .iter()
        .map(|event| event.ppid)
        .collect::<Vec<_>>();
    assert_eq!(ppids, vec![101, 102, 103, 104]);
}

#[rstest]
fn every_resolvable_location_sits_on_a_lot(dataset: Dataset) {
    let floor = dataset.floor("3FM").expect("3FM");
    let mut placed = 0;
    for (id, location) in floor.locations.iter() {
        let Ok(pos) = dataset.zones().resolve(location) else {
            continue;
        };
        assert_eq!(floor.grid.get(pos), Some(TileCode::Lot), "shipment {id} at {location}");
        placed += 1;
    }
    assert_eq!(placed, 10);
}

#[rstest]
fn pending_shipments_compound_on_their_tiles(dataset: Dataset) {
    let frame = frame(&dataset, 0);
    assert_eq!(frame.header(), "2020-10-01 08:00:00, PPID: 101, batchjobsize: 0");

    let grid = mezzanine(&frame);
    assert_eq!(grid.get(TilePos::new(1, 0)), pending(2));
    assert_eq!(grid.get(TilePos::new(4, 9)), pending(1));
    assert_eq!(grid.get(TilePos::new(3, 0)), Some(TileCode::Lot));

    let stats = frame.stats();
    assert_eq!(stats.pending_tiles, 2);
    assert_eq!(stats.skipped_missing, 4);
    assert_eq!(stats.skipped_unresolved, 1, "zone G has no layout rule");
}

#[rstest]
fn batched_shipments_override_pending_levels(dataset: Dataset) {
    let frame = frame(&dataset, 1);
    let grid = mezzanine(&frame);
    assert_eq!(grid.get(TilePos::new(16, 3)), pending(1));
    assert_eq!(grid.get(TilePos::new(1, 0)), batched(1));
    assert_eq!(grid.get(TilePos::new(3, 0)), batched(1));
    assert_eq!(grid.get(TilePos::new(58, 35)), batched(1));
    assert_eq!(frame.header(), "2020-10-01 08:05:00, PPID: 102, batchjobsize: 3");
}

#[rstest]
fn batched_only_timestamp_leaves_floors_unchanged(dataset: Dataset) {
    let frame = frame(&dataset, 2);
    assert!(!frame.changed());
    for (floor, floor_frame) in dataset.floors().iter().zip(&frame.floors) {
        assert_eq!(floor.grid, floor_frame.grid, "floor {}", floor.name);
    }
}

#[rstest]
fn print_mode_renders_every_floor(dataset: Dataset) {
    let frame = frame(&dataset, 0);
    let text = render_frame_plain(
        &dataset,
        &frame,
        FloorRenderOptions {
            borders: false,
            labels: false,
        },
    )
    .expect("render");

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("2020-10-01 08:00:00, PPID: 101, batchjobsize: 0"));
    assert!(text.contains("\n\nFloor: 3F\n"));
    assert!(text.contains("\n\nFloor: 3FM\n"));
    assert!(text.lines().any(|line| line.starts_with(".b.#....")));
}

#[rstest]
fn print_mode_draws_zone_borders(dataset: Dataset) {
    let frame = frame(&dataset, 0);
    let text = render_frame_plain(&dataset, &frame, FloorRenderOptions::default()).expect("render");
    assert!(text.contains('┌'));
    assert!(text.contains('│'));
}

#[rstest]
fn summary_lists_every_timestamp(dataset: Dataset) {
    let lines = summarize(&dataset)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "2020-10-01 08:00:00 101 4 0 2 0 5",
            "2020-10-01 08:05:00 102 1 3 1 3 4",
            "2020-10-01 08:10:00 103 0 1 0 0 0",
            "2020-10-01 08:15:00 104 6 1 4 1 9",
        ]
    );
}

#[test]
fn missing_data_directory_names_the_file() {
    let root = fixtures_dir().join("missing");
    let err = DataDir::new(&root).load().unwrap_err();
    match err {
        StoreError::Io { path, .. } => assert_eq!(path, root.join("3F_zone_maps.txt")),
        other => panic!("expected io error, got {other}"),
    }
}
