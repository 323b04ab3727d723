// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to a file or not at all. Headless runs log to
//! stderr.

use std::{
    env,
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::Mutex,
};

use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "ZONEPICK_LOG";
pub const DEFAULT_DIRECTIVES: &str = "zonepick=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    /// Appends to the file, creating it if needed.
    File(PathBuf),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid {LOG_ENV} directives {value:?}: {source}")]
    Filter { value: String, source: ParseError },
    #[error("cannot open log file {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot install log subscriber: {source}")]
    Install {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Builds the filter from `directives`, falling back to [`DEFAULT_DIRECTIVES`] when unset or blank.
pub fn env_filter(directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match directives.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => EnvFilter::try_new(value).map_err(|source| LoggingError::Filter {
            value: value.to_owned(),
            source,
        }),
        None => Ok(EnvFilter::new(DEFAULT_DIRECTIVES)),
    }
}

/// Installs the global subscriber for `target`, reading directives from [`LOG_ENV`].
pub fn init(target: LogTarget) -> Result<(), LoggingError> {
    let path = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => None,
        LogTarget::File(path) => Some(path),
    };

    let directives = env::var(LOG_ENV).ok();
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(directives.as_deref())?);
    let installed = match path {
        None => builder.with_writer(io::stderr).try_init(),
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| LoggingError::Open { path, source })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|source| LoggingError::Install { source })
}
