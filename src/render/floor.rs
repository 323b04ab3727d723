// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{canvas_to_string_trimmed, text_len, Canvas, CanvasError};
use crate::layout::{FloorDecor, SegmentAxis};
use crate::model::FloorGrid;
use crate::ops::Frame;
use crate::store::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRenderOptions {
    pub borders: bool,
    pub labels: bool,
}

impl Default for FloorRenderOptions {
    fn default() -> Self {
        Self {
            borders: true,
            labels: false,
        }
    }
}

/// Renders one floor grid with its zone decor.
///
/// The canvas covers both the grid and the decor, so toggling borders never changes its size.
/// Border lines sit on the cells at their boundary coordinates and over-draw the tiles there.
pub fn render_floor(
    grid: &FloorGrid,
    decor: &FloorDecor,
    options: FloorRenderOptions,
) -> Result<Canvas, CanvasError> {
    let (decor_width, decor_height) = decor.extent();
    let mut canvas = Canvas::new(grid.width().max(decor_width), grid.height().max(decor_height))?;

    for (y, row) in grid.rows().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            canvas.put_tile(x, y, *tile)?;
        }
    }

    if options.borders {
        for segment in &decor.outlines {
            match segment.axis() {
                SegmentAxis::Horizontal { y, x0, x1 } => canvas.draw_hline(x0, x1, y)?,
                SegmentAxis::Vertical { x, y0, y1 } => canvas.draw_vline(x, y0, y1)?,
            }
        }
    }

    if options.labels {
        for label in &decor.labels {
            if label.row >= canvas.height() {
                continue;
            }
            let x = label.col.saturating_sub(text_len(&label.text) / 2);
            canvas.write_label(x, label.row, &label.text)?;
        }
    }

    Ok(canvas)
}

/// Plain-text rendition of a frame: the header line, then every floor under a `Floor:` line.
pub fn render_frame_plain(
    dataset: &Dataset,
    frame: &Frame,
    options: FloorRenderOptions,
) -> Result<String, CanvasError> {
    let mut out = frame.header();
    for floor_frame in &frame.floors {
        let decor = dataset
            .floor(&floor_frame.name)
            .map(|floor| &floor.decor);
        let canvas = match decor {
            Some(decor) => render_floor(&floor_frame.grid, decor, options)?,
            None => render_floor(&floor_frame.grid, &FloorDecor::default(), options)?,
        };
        out.push_str("\n\nFloor: ");
        out.push_str(&floor_frame.name);
        out.push('\n');
        out.push_str(&canvas_to_string_trimmed(&canvas));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{render_floor, render_frame_plain, FloorRenderOptions};
    use crate::layout::{FloorDecor, ZoneLabel};
    use crate::model::fixtures::{grid, site};
    use crate::ops::derive_frame;
    use crate::render::{CanvasError, CellKind};

    fn boxed() -> FloorDecor {
        FloorDecor::from_lines(
            &[([0, 0], [4, 0]), ([0, 0], [0, 2]), ([4, 0], [4, 2]), ([0, 2], [4, 2])],
            vec![ZoneLabel::new("QQ", 2, 1)],
        )
    }

    #[test]
    fn tiles_only_without_borders() {
        let plan = grid("# # #\n# . #\n");
        let options = FloorRenderOptions {
            borders: false,
            labels: false,
        };
        let canvas = render_floor(&plan, &boxed(), options).expect("render");
        // The decor still sizes the canvas.
        assert_eq!((canvas.width(), canvas.height()), (5, 3));
        assert_eq!(canvas.to_string(), "###  \n#.#  \n     ");
    }

    #[test]
    fn borders_and_labels_over_draw_tiles() {
        let plan = grid("# # # # #\n# # # # #\n# # # # #\n");
        let options = FloorRenderOptions {
            borders: true,
            labels: true,
        };
        let canvas = render_floor(&plan, &boxed(), options).expect("render");
        assert_eq!(canvas.to_string(), "┌───┐\n│QQ#│\n└───┘");
        assert_eq!(canvas.kind(1, 1).expect("kind"), CellKind::Label);
        assert_eq!(canvas.kind(0, 1).expect("kind"), CellKind::Border);
    }

    #[test]
    fn labels_off_the_canvas_are_skipped() {
        let plan = grid("# #\n");
        let decor = FloorDecor {
            outlines: Vec::new(),
            labels: vec![ZoneLabel::new("far", 1, 9)],
        };
        let options = FloorRenderOptions {
            borders: true,
            labels: true,
        };
        let canvas = render_floor(&plan, &decor, options).expect("render");
        assert_eq!(canvas.to_string(), "##");
    }

    #[test]
    fn far_away_outlines_are_an_error() {
        let plan = grid("# #
");
        for line in [
            ([usize::MAX, 0], [usize::MAX, 1]),
            ([4_000_000_000, 0], [4_000_000_000, 0]),
            ([0, 0], [0, 4_000_000_000]),
        ] {
            let decor = FloorDecor::from_lines(&[line], Vec::new());
            let err = render_floor(&plan, &decor, FloorRenderOptions::default()).unwrap_err();
            assert!(matches!(err, CanvasError::AreaOverflow { .. }), "{line:?}: {err}");
        }
    }

    #[test]
    fn frame_plain_text_lists_every_floor() {
        let dataset = site();
        let frame = derive_frame(&dataset, 0).expect("frame");
        let text = render_frame_plain(&dataset, &frame, FloorRenderOptions::default())
            .expect("render");
        assert_eq!(
            text,
            "t1, PPID: 1, batchjobsize: 0\n\nFloor: N1\nb.a#.#\n#.##.#\n#.#...\n\nFloor: N2\n#.\n.."
        );
    }
}
