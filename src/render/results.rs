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

//! Render the results region.
//!
//! Exactly one thing is shown here at a time, chosen in order: the loading
//! message, the error alert, the card grid, or the "no results" message.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{App, events::Focus, model::SearchResultState, theme::Theme};

const LOADING_MESSAGE: &str = "Searching for movies...";
const NO_RESULTS_HINT: &str = "Try searching with different keywords.";
const IDLE_HINT: &str = "Type a movie title to start searching.";

pub(super) fn draw_results(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    match app.controller.result() {
        SearchResultState::Loading => {
            draw_message(f, area, vec![Line::from(LOADING_MESSAGE)], theme.muted_fg)
        }

        SearchResultState::Failed { message } => draw_alert(f, area, message, &theme),

        SearchResultState::Succeeded { items } if !items.is_empty() => {
            app.movie_grid
                .draw(f, area, items, app.focus == Focus::Results, &theme)
        }

        _ if app.controller.shows_no_results() => {
            let lines = vec![
                Line::from(format!(
                    "No movies found for \"{}\"",
                    app.controller.query()
                ))
                .style(Style::default().add_modifier(Modifier::BOLD)),
                Line::from(""),
                Line::from(NO_RESULTS_HINT),
            ];
            draw_message(f, area, lines, theme.muted_fg);
        }

        SearchResultState::Idle => {
            draw_message(f, area, vec![Line::from(IDLE_HINT)], theme.muted_fg)
        }

        SearchResultState::Succeeded { .. } => {}
    }
}

fn draw_message(f: &mut Frame, area: Rect, lines: Vec<Line>, colour: Color) {
    let height = lines.len() as u16;
    let [_, middle, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let lines: Vec<Line> = lines.into_iter().map(Line::centered).collect();
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(colour))
            .wrap(Wrap { trim: true }),
        middle,
    );
}

fn draw_alert(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let [_, alert_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error_fg))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(Line::from(message).centered())
            .block(block)
            .style(Style::default().fg(theme.error_fg))
            .wrap(Wrap { trim: true }),
        alert_area,
    );
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{config::AppConfig, model::SearchResponse, tasks::AppTask};

    fn app() -> (App, Receiver<AppTask>, Receiver<AppTask>) {
        let (search_tx, search_rx) = mpsc::channel();
        let (poster_tx, poster_rx) = mpsc::channel();
        (
            App::new(AppConfig::default(), search_tx, poster_tx),
            search_rx,
            poster_rx,
        )
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| draw_results(f, f.area(), app))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn complete(app: &mut App, body: &str) {
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(app.controller.complete_search(1, Ok(response)));
    }

    #[test]
    fn shows_loading_message() {
        let (mut app, _search_rx, _poster_rx) = app();
        app.controller.execute_search("batman").unwrap();

        assert!(screen(&mut app).contains(LOADING_MESSAGE));
    }

    #[test]
    fn shows_api_error() {
        let (mut app, _search_rx, _poster_rx) = app();
        app.controller.execute_search("nothing").unwrap();
        complete(&mut app, r#"{"Response":"False","Error":"Movie not found!"}"#);

        let text = screen(&mut app);
        assert!(text.contains("Movie not found!"));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn shows_no_results_for_query() {
        let (mut app, _search_rx, _poster_rx) = app();
        app.controller.set_query("zzz");
        app.controller.trigger_immediate_search().unwrap();
        complete(&mut app, r#"{"Response":"True","Search":[]}"#);

        let text = screen(&mut app);
        assert!(text.contains("No movies found for \"zzz\""));
        assert!(text.contains(NO_RESULTS_HINT));
    }

    #[test]
    fn shows_cards_for_results() {
        let (mut app, _search_rx, _poster_rx) = app();
        app.controller.execute_search("batman").unwrap();
        complete(
            &mut app,
            r#"{"Response":"True","Search":[{"imdbID":"tt1","Title":"Batman","Year":"1989","Type":"movie","Poster":"N/A"}]}"#,
        );

        let text = screen(&mut app);
        assert!(text.contains("Batman"));
        assert!(text.contains("1989"));
        assert!(!text.contains("No movies found"));
    }
}
