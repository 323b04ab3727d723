// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point on tile boundaries: `(x, y)` is the top-left corner of tile `(x, y)`.
pub type BoundaryPoint = [usize; 2];

/// Straight zone-border line between two boundary points.
///
/// Only horizontal and vertical lines are representable; anything else is rejected on
/// construction (and on deserialization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSegment", into = "RawSegment")]
pub struct Segment {
    from: BoundaryPoint,
    to: BoundaryPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentAxis {
    Horizontal { y: usize, x0: usize, x1: usize },
    Vertical { x: usize, y0: usize, y1: usize },
}

impl Segment {
    pub fn new(from: BoundaryPoint, to: BoundaryPoint) -> Result<Self, SegmentError> {
        if from[0] != to[0] && from[1] != to[1] {
            return Err(SegmentError::Diagonal { from, to });
        }
        Ok(Self { from, to })
    }

    /// Normalized form with ascending coordinates; a single point counts as horizontal.
    pub fn axis(&self) -> SegmentAxis {
        let [fx, fy] = self.from;
        let [tx, ty] = self.to;
        if fy == ty {
            SegmentAxis::Horizontal {
                y: fy,
                x0: fx.min(tx),
                x1: fx.max(tx),
            }
        } else {
            SegmentAxis::Vertical {
                x: fx,
                y0: fy.min(ty),
                y1: fy.max(ty),
            }
        }
    }

    /// Largest x and y touched by the segment.
    pub fn extent(&self) -> (usize, usize) {
        (self.from[0].max(self.to[0]), self.from[1].max(self.to[1]))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawSegment {
    from: BoundaryPoint,
    to: BoundaryPoint,
}

impl TryFrom<RawSegment> for Segment {
    type Error = SegmentError;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

impl From<Segment> for RawSegment {
    fn from(segment: Segment) -> Self {
        Self {
            from: segment.from,
            to: segment.to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("zone border {from:?} -> {to:?} is neither horizontal nor vertical")]
    Diagonal {
        from: BoundaryPoint,
        to: BoundaryPoint,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorError {
    #[error("zone border point {point:?} lies outside the {width}x{height} plan")]
    OutlineOutsidePlan {
        point: BoundaryPoint,
        width: usize,
        height: usize,
    },
    #[error("zone label {text:?} at ({col},{row}) lies outside the {width}x{height} plan")]
    LabelOutsidePlan {
        text: String,
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
}

/// Zone name drawn centered on `(col, row)` on the title screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneLabel {
    pub text: String,
    pub col: usize,
    pub row: usize,
}

impl ZoneLabel {
    pub fn new(text: impl Into<String>, col: usize, row: usize) -> Self {
        Self {
            text: text.into(),
            col,
            row,
        }
    }
}

/// Presentation extras of one floor: zone borders and zone labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorDecor {
    #[serde(default)]
    pub outlines: Vec<Segment>,
    #[serde(default)]
    pub labels: Vec<ZoneLabel>,
}

impl FloorDecor {
    /// Builds outlines from point pairs known to be axis aligned.
    pub(crate) fn from_lines(lines: &[(BoundaryPoint, BoundaryPoint)], labels: Vec<ZoneLabel>) -> Self {
        let outlines = lines
            .iter()
            .filter_map(|&(from, to)| Segment::new(from, to).ok())
            .collect();
        Self { outlines, labels }
    }

    /// Width and height (in cells) needed to draw every outline.
    pub fn extent(&self) -> (usize, usize) {
        self.outlines.iter().fold((0, 0), |(w, h), segment| {
            let (x, y) = segment.extent();
            (w.max(x.saturating_add(1)), h.max(y.saturating_add(1)))
        })
    }

    /// Checks that the decor stays on a `width` x `height` plan.
    ///
    /// Border points are tile corners, so `x == width` and `y == height` still fit. Label anchors
    /// must be tiles.
    pub fn check_fits(&self, width: usize, height: usize) -> Result<(), DecorError> {
        for segment in &self.outlines {
            for point in [segment.from, segment.to] {
                if point[0] > width || point[1] > height {
                    return Err(DecorError::OutlineOutsidePlan {
                        point,
                        width,
                        height,
                    });
                }
            }
        }
        for label in &self.labels {
            if label.col >= width || label.row >= height {
                return Err(DecorError::LabelOutsidePlan {
                    text: label.text.clone(),
                    col: label.col,
                    row: label.row,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}
