// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input file formats.
//!
//! All three loaders are line-oriented hand parsers that report the 1-based line number of the
//! first offending line.

pub mod event_log;
pub mod floor_plan;
pub mod locations;

pub use event_log::{parse_event_log, EventLogParseError};
pub use floor_plan::{parse_floor_plan, FloorPlanParseError};
pub use locations::{parse_locations, LocationTableParseError};

/// Splits one CSV line on `,` without quoting support.
pub(crate) fn split_fields(line: &str) -> impl Iterator<Item = &str> + '_ {
    let bytes = line.as_bytes();
    let mut start = 0usize;
    memchr::memchr_iter(b',', bytes)
        .chain(std::iter::once(bytes.len()))
        .map(move |end| {
            // `,` is ASCII, so every split point is a char boundary.
            let field = &line[start..end];
            start = end + 1;
            field
        })
}

#[cfg(test)]
mod tests {
    use super::split_fields;

    #[test]
    fn split_fields_keeps_empty_fields() {
        let fields = split_fields("a,,b,").collect::<Vec<_>>();
        assert_eq!(fields, vec!["a", "", "b", ""]);
        assert_eq!(split_fields("").collect::<Vec<_>>(), vec![""]);
    }
}
