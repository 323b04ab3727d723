// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn header_lines(app: &App) -> Vec<Line<'static>> {
    let text_style = app.theme.text_style();
    let dim_style = Style::default().fg(FOOTER_LABEL_COLOR);

    match app.stepper.screen() {
        Screen::Title => {
            let floors = app.dataset.floors().len();
            let events = app.dataset.events().len();
            vec![
                Line::from(vec![
                    Span::styled(TITLE_HEADING.to_owned(), text_style.add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {floors} floors, {events} timestamps"),
                        dim_style,
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "press any key to start at timestamp {}/{}",
                        app.stepper.index() + 1,
                        events
                    ),
                    text_style,
                )),
            ]
        }
        Screen::Timeline => {
            let Some(frame) = app.frame.as_ref() else {
                return vec![Line::from(Span::styled(
                    "no frame at this timestamp".to_owned(),
                    app.theme.error_style(),
                ))];
            };
            let stats = frame.stats();
            let mut spans = Vec::<Span<'static>>::new();
            push_footer_entry(
                &mut spans,
                "frame",
                &format!("{}/{}", frame.index + 1, app.dataset.events().len()),
            );
            push_footer_entry(&mut spans, "pending tiles", &stats.pending_tiles.to_string());
            push_footer_entry(&mut spans, "batched tiles", &stats.batched_tiles.to_string());
            push_footer_entry_maybe_disabled(
                &mut spans,
                "skipped",
                &stats.skipped().to_string(),
                stats.skipped() == 0,
            );
            if !frame.changed() {
                spans.push(Span::styled("  (unchanged)".to_owned(), dim_style));
            }
            vec![
                Line::from(Span::styled(frame.header(), text_style.add_modifier(Modifier::BOLD))),
                Line::from(spans),
            ]
        }
    }
}

fn footer_help_line(app: &App) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    match app.stepper.screen() {
        Screen::Title => {
            push_footer_entry(&mut spans, "start", "any key");
            push_footer_entry(&mut spans, "help", "?");
            push_footer_entry(&mut spans, "quit", "Esc");
        }
        Screen::Timeline => {
            let borders = if app.borders { "z◼ " } else { "z◻ " };
            push_footer_entry(&mut spans, "next", "n");
            push_footer_entry(&mut spans, "back", "b");
            push_footer_entry(&mut spans, "reset", "r");
            push_footer_entry(&mut spans, "pan", "hjkl");
            push_footer_entry_maybe_disabled(&mut spans, "borders", borders, !app.borders);
            push_footer_entry(&mut spans, "help", "?");
            push_footer_entry(&mut spans, "quit", "Esc");
        }
    }
    Line::from(spans)
}

fn floor_block_title(title: &str, style: Style) -> Line<'static> {
    Line::from(Span::styled(format!("Floor: {title}"), style))
}

/// Converts visible canvas rows into styled lines, skipping `pan_x` columns and `pan_y` rows.
///
/// Runs of cells with the same kind share one span.
fn canvas_text(
    canvas: &Canvas,
    theme: &TileTheme,
    pan_x: usize,
    pan_y: usize,
    width: usize,
    height: usize,
) -> Text<'static> {
    let mut lines = Vec::with_capacity(height.min(canvas.height()));
    for y in (pan_y..canvas.height()).take(height) {
        let mut spans = Vec::<Span<'static>>::new();
        let mut run = String::new();
        let mut run_kind = None::<CellKind>;
        for (ch, kind) in canvas.row(y).skip(pan_x).take(width) {
            if let Some(current) = run_kind.filter(|current| *current != kind) {
                spans.push(Span::styled(std::mem::take(&mut run), theme.cell_style(current)));
            }
            run_kind = Some(kind);
            run.push(ch);
        }
        if let Some(kind) = run_kind {
            spans.push(Span::styled(run, theme.cell_style(kind)));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

fn help_key_style() -> Style {
    Style::default()
        .fg(FOOTER_KEY_COLOR)
        .add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn legend_line(theme: &TileTheme, label: &str, tiles: &[TileCode]) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{label:>9}  "))];
    for tile in tiles {
        spans.push(Span::styled(
            tile.as_char().to_string(),
            theme.cell_style(CellKind::Tile(*tile)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = help_key_style();
    let header_style = help_header_style();
    let dim_style = Style::default().fg(Color::DarkGray);
    let key_col_width = ["j/k, ↑/↓, PgUp/PgDn", "Esc/q"]
        .iter()
        .map(|s| text_len(s))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    lines.push(Line::from(Span::styled("--- Timeline ---", header_style)));
    lines.push(help_kv("n", "Next timestamp (wraps to the first)", key_col_width, key_style));
    lines.push(help_kv("b", "Previous timestamp (wraps to the last)", key_col_width, key_style));
    lines.push(help_kv("r", "Back to the title screen", key_col_width, key_style));
    lines.push(help_kv("h/j/k/l", "Pan the floors", key_col_width, key_style));
    lines.push(help_kv("0", "Reset pan", key_col_width, key_style));
    lines.push(help_kv("z", "Toggle zone borders", key_col_width, key_style));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("--- Global ---", header_style)));
    lines.push(help_kv("?", "Help (toggle)", key_col_width, key_style));
    lines.push(help_kv("Esc/q", "Quit", key_col_width, key_style));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("--- Help ---", header_style)));
    lines.push(help_kv("j/k, ↑/↓, PgUp/PgDn", "Scroll", key_col_width, key_style));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("--- Tiles ---", header_style)));
    lines.push(legend_line(&app.theme, "floor/lot", &[TileCode::Floor, TileCode::Lot]));
    let pending = ladder_tiles(TileCode::Pending);
    let batched = ladder_tiles(TileCode::Batched);
    lines.push(legend_line(&app.theme, "pending", &pending));
    lines.push(legend_line(&app.theme, "batched", &batched));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Each shipment raises its tile one level; levels stop at 5. Batched wins over pending.",
        dim_style,
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(Style::default().fg(FOOTER_KEY_COLOR))
        .title_style(
            Style::default()
                .fg(FOOTER_KEY_COLOR)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    app.help_viewport_height = inner.height;
    let max_scroll = lines
        .len()
        .saturating_sub(inner.height.max(1) as usize)
        .min(u16::MAX as usize) as u16;
    app.help_scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn ladder_tiles(ladder: fn(Level) -> TileCode) -> Vec<TileCode> {
    (Level::MIN.get()..=Level::MAX.get())
        .filter_map(Level::new)
        .map(ladder)
        .collect()
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            " | ".to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(footer_value_span(value, disabled));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn footer_value_span(value: &str, disabled: bool) -> Span<'static> {
    let color = if disabled {
        Color::DarkGray
    } else {
        FOOTER_KEY_COLOR
    };
    Span::styled(
        value.to_owned(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
