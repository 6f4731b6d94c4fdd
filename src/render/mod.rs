// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod results;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{App, events::Focus, render::results::draw_results};

const TITLE: &str = "MovieVillage";

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the title, the search bar, the results region
/// and a single line of key hints. The results region shows exactly one of
/// the loading message, the error message, the "no results" message or the
/// card grid.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let [title_area, search_area, results_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .areas(area);

    f.render_widget(
        Paragraph::new(Line::from(TITLE).centered()).style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        title_area,
    );

    let status = if app.controller.result().is_loading() {
        Some("searching")
    } else if app.controller.search_pending() {
        Some("\u{2026}")
    } else {
        None
    };

    app.search_bar.draw(
        f,
        search_area,
        app.focus == Focus::SearchInput,
        status,
        &app.theme,
    );

    draw_results(f, results_area, app);

    draw_footer(f, footer_area, app);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::SearchInput => "Enter search \u{2022} Tab results \u{2022} Ctrl-C quit",
        Focus::Results => "\u{2190}\u{2191}\u{2192}\u{2193} move \u{2022} / search \u{2022} r retry \u{2022} q quit",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(app.theme.muted_fg))];
    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(app.theme.error_fg),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
