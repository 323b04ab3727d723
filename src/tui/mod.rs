// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A title screen with the unmodified floors, then the timeline: one frame per timestamp, stepped
//! with the keyboard (ratatui + crossterm).

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::{debug, warn};

use crate::model::{FloorGrid, Level, TileCode};
use crate::ops::{derive_frame, Frame as TimestampFrame};
use crate::render::{
    render_floor, text_len, truncate_with_ellipsis, Canvas, CanvasError, CellKind,
    FloorRenderOptions,
};
use crate::store::{Dataset, StoreError};
use crate::ui::{Screen, StepCommand, Stepper, Timeline};

mod theme;

use theme::TileTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const TITLE_HEADING: &str = "ZONEPICK";
const PAN_STEP_X: usize = 8;
const PAN_STEP_Y: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    /// Draw zone borders on the timeline screen (toggled with `z`).
    pub borders: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self { borders: true }
    }
}

/// Runs the interactive terminal UI until the user quits.
pub fn run(dataset: Dataset, options: TuiOptions) -> Result<(), Box<dyn Error>> {
    let theme = TileTheme::from_env()?;
    let mut app = App::new(dataset, theme, options).ok_or(StoreError::EmptyEventLog)?;
    let mut terminal = TerminalSession::new()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    app.refresh();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header_area = layout[0];
    let main_area = layout[1];
    let status_area = layout[2];

    frame.render_widget(Paragraph::new(header_lines(app)), header_area);

    let Some(view) = app.view.as_ref() else {
        return;
    };
    match &view.floors {
        Ok(floors) => {
            let mut constraints = floors
                .iter()
                .map(|(_, canvas)| {
                    Constraint::Max(u16::try_from(canvas.height() + 2).unwrap_or(u16::MAX))
                })
                .collect::<Vec<_>>();
            constraints.push(Constraint::Min(0));
            let blocks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(main_area);

            let title_style = app.theme.floor_title_style();
            for ((title, canvas), block_area) in floors.iter().zip(blocks.iter()) {
                if block_area.height < 3 {
                    continue;
                }
                let title_width = usize::from(block_area.width.saturating_sub(4));
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(FOOTER_LABEL_COLOR))
                    .title(floor_block_title(
                        &truncate_with_ellipsis(title, title_width.saturating_sub(7)),
                        title_style,
                    ));
                let inner = block.inner(*block_area);
                let text = canvas_text(
                    canvas,
                    &app.theme,
                    app.pan_x,
                    app.pan_y,
                    usize::from(inner.width),
                    usize::from(inner.height),
                );
                frame.render_widget(Paragraph::new(text).block(block), *block_area);
            }
        }
        Err(message) => {
            let error = Paragraph::new(message.clone())
                .style(app.theme.error_style())
                .wrap(Wrap { trim: false });
            frame.render_widget(error, main_area);
        }
    }

    frame.render_widget(Paragraph::new(footer_help_line(app)), status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

include!("chrome.rs");

/// What the cached canvases were rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewKey {
    screen: Screen,
    index: usize,
    borders: bool,
}

/// Rendered floors for one [`ViewKey`]: `(title, canvas)` per floor, or a render error message.
#[derive(Debug)]
struct FloorView {
    key: ViewKey,
    floors: Result<Vec<(String, Canvas)>, String>,
}

struct App {
    dataset: Dataset,
    theme: TileTheme,
    stepper: Stepper,
    frame: Option<TimestampFrame>,
    frame_derivations: usize,
    view: Option<FloorView>,
    borders: bool,
    pan_x: usize,
    pan_y: usize,
    plan_extent: (usize, usize),
    show_help: bool,
    help_scroll: u16,
    help_viewport_height: u16,
    should_quit: bool,
}

impl App {
    /// Returns `None` when the dataset has no timestamps to step through.
    fn new(dataset: Dataset, theme: TileTheme, options: TuiOptions) -> Option<Self> {
        let timeline = Timeline::new(dataset.events().len())?;
        let plan_extent = dataset.floors().iter().fold((0, 0), |(w, h), floor| {
            let (decor_w, decor_h) = floor.decor.extent();
            (
                w.max(floor.grid.width()).max(decor_w),
                h.max(floor.grid.height()).max(decor_h),
            )
        });
        Some(Self {
            dataset,
            theme,
            stepper: Stepper::new(timeline),
            frame: None,
            frame_derivations: 0,
            view: None,
            borders: options.borders,
            pan_x: 0,
            pan_y: 0,
            plan_extent,
            show_help: false,
            help_scroll: 0,
            help_viewport_height: 0,
            should_quit: false,
        })
    }

    /// Re-derives the frame when the timestamp index moved and re-renders stale canvases.
    fn refresh(&mut self) {
        if self.stepper.screen() == Screen::Timeline {
            self.ensure_frame();
        }
        let key = self.view_key();
        if self.view.as_ref().is_some_and(|view| view.key == key) {
            return;
        }
        let floors = self.render_floors(key).map_err(|err| {
            warn!(error = %err, "cannot render floors");
            format!("cannot render floors: {err}")
        });
        self.view = Some(FloorView { key, floors });
    }

    fn ensure_frame(&mut self) {
        let index = self.stepper.index();
        if self.frame.as_ref().is_some_and(|frame| frame.index == index) {
            return;
        }
        self.frame = derive_frame(&self.dataset, index);
        self.frame_derivations += 1;
        if let Some(frame) = &self.frame {
            let stats = frame.stats();
            debug!(
                index,
                timestamp = %frame.timestamp,
                pending_tiles = stats.pending_tiles,
                batched_tiles = stats.batched_tiles,
                skipped = stats.skipped(),
                derivations = self.frame_derivations,
                "frame derived"
            );
        }
    }

    fn view_key(&self) -> ViewKey {
        let screen = self.stepper.screen();
        ViewKey {
            screen,
            index: match screen {
                Screen::Title => 0,
                Screen::Timeline => self.stepper.index(),
            },
            borders: screen == Screen::Title || self.borders,
        }
    }

    fn render_floors(&self, key: ViewKey) -> Result<Vec<(String, Canvas)>, CanvasError> {
        let options = FloorRenderOptions {
            borders: key.borders,
            labels: key.screen == Screen::Title,
        };
        let grids: Vec<&FloorGrid> = match (key.screen, &self.frame) {
            (Screen::Timeline, Some(frame)) => frame.floors.iter().map(|floor| &floor.grid).collect(),
            _ => self.dataset.floors().iter().map(|floor| &floor.grid).collect(),
        };
        self.dataset
            .floors()
            .iter()
            .zip(grids)
            .map(|(floor, grid)| {
                // The title screen shows display titles (`3.5F`); the timeline names files (`3FM`).
                let title = match key.screen {
                    Screen::Title => &floor.title,
                    Screen::Timeline => &floor.name,
                };
                render_floor(grid, &floor.decor, options).map(|canvas| (title.clone(), canvas))
            })
            .collect()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.help_scroll = 0;
        }
    }

    fn help_scroll_by(&mut self, delta: i32) {
        if delta < 0 {
            self.help_scroll = self.help_scroll.saturating_sub(delta.unsigned_abs() as u16);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as u16);
        }
    }

    fn help_scroll_page(&mut self, direction: i32) {
        let page = self.help_viewport_height.max(1).saturating_sub(1) as i32;
        self.help_scroll_by(direction.signum() * page.max(1));
    }

    fn step(&mut self, command: StepCommand) {
        let before = (self.stepper.screen(), self.stepper.index());
        self.stepper.apply(command);
        let after = (self.stepper.screen(), self.stepper.index());
        if before != after {
            debug!(?command, index = after.1, screen = ?after.0, "stepped");
        }
    }

    fn pan(&mut self, dx: isize, dy: isize) {
        let (max_x, max_y) = (
            self.plan_extent.0.saturating_sub(1),
            self.plan_extent.1.saturating_sub(1),
        );
        self.pan_x = self.pan_x.saturating_add_signed(dx).min(max_x);
        self.pan_y = self.pan_y.saturating_add_signed(dy).min(max_y);
    }

    /// Applies one key press; returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.step(StepCommand::Quit),
                KeyCode::Down | KeyCode::Char('j') => self.help_scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.help_scroll_by(-1),
                KeyCode::PageDown => self.help_scroll_page(1),
                KeyCode::PageUp => self.help_scroll_page(-1),
                KeyCode::Home => self.help_scroll = 0,
                KeyCode::End => self.help_scroll = u16::MAX,
                _ => {}
            }
            return self.stepper.should_quit();
        }

        match self.stepper.screen() {
            Screen::Title => match code {
                KeyCode::Esc | KeyCode::Char('q') => self.step(StepCommand::Quit),
                KeyCode::Char('?') => self.toggle_help(),
                _ => self.stepper.start(),
            },
            Screen::Timeline => match code {
                KeyCode::Char('n') => self.step(StepCommand::Next),
                KeyCode::Char('b') => self.step(StepCommand::Back),
                KeyCode::Char('r') => self.step(StepCommand::Reset),
                KeyCode::Esc | KeyCode::Char('q') => self.step(StepCommand::Quit),
                KeyCode::Char('?') => self.toggle_help(),
                KeyCode::Char('h') => self.pan(-(PAN_STEP_X as isize), 0),
                KeyCode::Char('l') => self.pan(PAN_STEP_X as isize, 0),
                KeyCode::Char('k') => self.pan(0, -(PAN_STEP_Y as isize)),
                KeyCode::Char('j') => self.pan(0, PAN_STEP_Y as isize),
                KeyCode::Char('0') => {
                    self.pan_x = 0;
                    self.pan_y = 0;
                }
                KeyCode::Char('z') => self.borders = !self.borders,
                // Arrow keys do not step.
                KeyCode::Left | KeyCode::Right => {}
                _ => {}
            },
        }

        self.stepper.should_quit()
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.hide_cursor().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
