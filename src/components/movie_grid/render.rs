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

//! UI rendering logic for the result grid.
//!
//! Cards are laid out left to right in as many columns as fit the width of
//! the results area, and the grid scrolls by whole rows to keep the selected
//! card visible.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::{
        MovieGrid,
        movie_grid::{PosterState, PosterView},
    },
    model::{
        MovieSummary, Thumbnail,
        poster::{POSTER_COLUMNS, POSTER_ROWS},
    },
    theme::Theme,
    util::format::truncate,
};

const CARD_WIDTH: u16 = POSTER_COLUMNS as u16 + 4;
const CARD_HEIGHT: u16 = POSTER_ROWS as u16 + 4;

// Upper half block, foreground is the top pixel and background the bottom.
const HALF_BLOCK: &str = "\u{2580}";

impl MovieGrid {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        movies: &[MovieSummary],
        is_active: bool,
        theme: &Theme,
    ) {
        self.columns = usize::from((area.width / CARD_WIDTH).max(1));
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        self.clamp(movies.len(), visible_rows);

        let first = self.first_row * self.columns;
        let cards = movies
            .iter()
            .enumerate()
            .skip(first)
            .take(visible_rows * self.columns);

        for (index, movie) in cards {
            let position = index - first;
            let row = (position / self.columns) as u16;
            let column = (position % self.columns) as u16;

            let rect = Rect::new(
                area.x + column * CARD_WIDTH,
                area.y + row * CARD_HEIGHT,
                CARD_WIDTH,
                CARD_HEIGHT,
            )
            .intersection(area);

            let selected = is_active && self.selected == Some(index);
            self.draw_card(f, rect, movie, selected, theme);
        }
    }

    fn draw_card(
        &self,
        f: &mut Frame,
        area: Rect,
        movie: &MovieSummary,
        selected: bool,
        theme: &Theme,
    ) {
        let border_colour = if selected {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                format!(" {} ", movie.year),
                Style::default().fg(theme.card_year_fg),
            ));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let [poster_area, kind_area, title_area] = Layout::vertical([
            Constraint::Length(POSTER_ROWS as u16),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let fallback = PosterState::new();
        let state = self.poster_state(&movie.id).unwrap_or(&fallback);

        match self.poster_view(movie, state) {
            PosterView::Loading => draw_loading(f, poster_area, theme),
            PosterView::Placeholder(url) => draw_placeholder(f, poster_area, url, theme),
            PosterView::Image(thumbnail) => draw_thumbnail(f, poster_area, thumbnail),
        }

        let width = usize::from(inner.width);

        f.render_widget(
            Paragraph::new(truncate(&movie.kind, width))
                .style(Style::default().fg(theme.card_kind_fg)),
            kind_area,
        );

        f.render_widget(
            Paragraph::new(truncate(&movie.title, width)).style(
                Style::default()
                    .fg(theme.card_title_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            title_area,
        );
    }
}

fn draw_loading(f: &mut Frame, area: Rect, theme: &Theme) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(Line::from("Loading...").centered())
            .style(Style::default().fg(theme.muted_fg)),
        middle,
    );
}

fn draw_placeholder(f: &mut Frame, area: Rect, url: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour));

    let lines = vec![
        Line::from(""),
        Line::from("No poster").centered(),
        Line::from(""),
        Line::from(url).centered(),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.muted_fg)),
        area,
    );
}

fn draw_thumbnail(f: &mut Frame, area: Rect, thumbnail: &Thumbnail) {
    let lines: Vec<Line> = (0..thumbnail.height() / 2)
        .map(|row| {
            let spans: Vec<Span> = (0..thumbnail.width())
                .map(|x| {
                    let [tr, tg, tb] = thumbnail.pixel(x, row * 2);
                    let [br, bg, bb] = thumbnail.pixel(x, row * 2 + 1);
                    Span::styled(
                        HALF_BLOCK,
                        Style::default()
                            .fg(Color::Rgb(tr, tg, tb))
                            .bg(Color::Rgb(br, bg, bb)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}
