// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Timestamp stepping state, independent of any terminal.
//!
//! The TUI translates keys into [`StepCommand`]s; everything about which timestamp is shown and
//! which screen is up lives here.

/// Cursor over a non-empty event log. Stepping wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    index: usize,
    len: usize,
}

impl Timeline {
    /// Returns `None` for an empty log.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    /// Starts at `index` modulo `len`.
    pub fn at(len: usize, index: usize) -> Option<Self> {
        Self::new(len).map(|timeline| Self {
            index: index % len,
            ..timeline
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn back(&mut self) {
        self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Unmodified floors with zone labels, waiting for a key.
    Title,
    /// Floors at the current timestamp.
    Timeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCommand {
    Next,
    Back,
    Reset,
    Quit,
}

/// Screen plus timeline cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    screen: Screen,
    timeline: Timeline,
    quit: bool,
}

impl Stepper {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            screen: Screen::Title,
            timeline,
            quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn index(&self) -> usize {
        self.timeline.index()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Leaves the title screen; the timeline resumes where it was.
    pub fn start(&mut self) {
        self.screen = Screen::Timeline;
    }

    pub fn apply(&mut self, command: StepCommand) {
        match command {
            StepCommand::Next => self.timeline.next(),
            StepCommand::Back => self.timeline.back(),
            // The cursor is kept: reset only goes back to the title screen.
            StepCommand::Reset => self.screen = Screen::Title,
            StepCommand::Quit => self.quit = true,
        }
    }
}
