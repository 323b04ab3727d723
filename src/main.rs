// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Zonepick CLI entrypoint.
//!
//! By default this runs the interactive TUI over the data directory. `--print` and `--summary`
//! are headless and write to stdout.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use zonepick::logging::{self, LogTarget};
use zonepick::ops::{derive_frame, summarize};
use zonepick::render::{render_frame_plain, FloorRenderOptions};
use zonepick::store::{DataDir, StoreError};
use zonepick::tui::{self, TuiOptions};
use zonepick::ui::Timeline;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-dir>] [--no-borders] [--log <file>]\n  {program} [--data <dir>] [--no-borders] [--log <file>]\n  {program} [<data-dir>] [--no-borders] --print <index>\n  {program} [<data-dir>] --summary\n\nIf data-dir/--data is omitted, the current working directory is used.\n--print renders the frame at a timestamp index (wrapping past the end) as plain text.\n--summary prints one line per timestamp: timestamp ppid pending batched pending_tiles batched_tiles skipped.\n--print and --summary cannot be combined.\n\nLogging is configured with {env} (default `{default}`). The TUI only logs when --log is given;\nheadless modes log to stderr.",
        env = logging::LOG_ENV,
        default = logging::DEFAULT_DIRECTIVES,
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    data_dir: Option<String>,
    log_file: Option<String>,
    print_index: Option<usize>,
    summary: bool,
    no_borders: bool,
}

impl CliOptions {
    fn headless(&self) -> bool {
        self.print_index.is_some() || self.summary
    }

    fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.headless()) {
            (Some(path), _) => LogTarget::File(PathBuf::from(path)),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.data_dir = Some(dir);
            }
            "--log" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.log_file = Some(file);
            }
            "--print" => {
                if options.print_index.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let index: usize = raw.parse().map_err(|_| ())?;
                options.print_index = Some(index);
            }
            "--summary" => {
                if options.summary {
                    return Err(());
                }
                options.summary = true;
            }
            "--no-borders" => {
                if options.no_borders {
                    return Err(());
                }
                options.no_borders = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(arg);
            }
        }
    }

    if options.print_index.is_some() && options.summary {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "zonepick".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        logging::init(options.log_target())?;

        let dir = options.data_dir.clone().unwrap_or_else(|| ".".to_owned());
        let dataset = DataDir::new(dir).load()?;
        let borders = !options.no_borders;

        if let Some(index) = options.print_index {
            let index = Timeline::at(dataset.events().len(), index)
                .ok_or(StoreError::EmptyEventLog)?
                .index();
            let frame = derive_frame(&dataset, index).ok_or(StoreError::EmptyEventLog)?;
            let text = render_frame_plain(
                &dataset,
                &frame,
                FloorRenderOptions {
                    borders,
                    labels: false,
                },
            )?;
            let mut out = io::stdout().lock();
            writeln!(out, "{text}")?;
            return Ok(());
        }

        if options.summary {
            let mut out = io::stdout().lock();
            for row in summarize(&dataset) {
                writeln!(out, "{row}")?;
            }
            return Ok(());
        }

        tui::run(dataset, TuiOptions { borders })
    })();

    if let Err(err) = result {
        eprintln!("zonepick: {err}");
        std::process::exit(1);
    }
}
