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

//! Render the search bar: the text input, the placeholder when it is empty,
//! and the submit hint.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

const PLACEHOLDER: &str = "Search for movies";

impl SearchBar {
    /// Draws the search bar.
    ///
    /// `status` is a short hint shown on the right, next to the submit key.
    pub(crate) fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        is_active: bool,
        status: Option<&str>,
        theme: &Theme,
    ) {
        let border_colour = if is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.input_bg));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let submit_hint = match status {
            Some(status) => format!("{}  \u{23CE} Search", status),
            None => "\u{23CE} Search".to_string(),
        };

        let [text_area, hint_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(submit_hint.chars().count() as u16 + 1),
        ])
        .areas(inner);

        f.render_widget(
            Paragraph::new(Line::from(submit_hint).right_aligned())
                .style(Style::default().fg(theme.muted_fg)),
            hint_area,
        );

        let width = text_area.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let text = if self.value().is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(theme.muted_fg)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.value())
                .style(Style::default().fg(theme.input_fg))
                .scroll((0, scroll as u16))
        };
        f.render_widget(text, text_area);

        if is_active {
            let cursor = self.input.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((text_area.x + cursor as u16, text_area.y));
        }
    }
}
