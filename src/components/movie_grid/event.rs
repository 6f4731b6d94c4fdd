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

//! Input handling for the result grid.
//!
//! Maps raw terminal keyboard events to card navigation. Keys that leave the
//! grid are reported back as a [`MovieGridAction`].

use crossterm::event::{Event, KeyCode};

use crate::components::{MovieGrid, MovieGridAction};

impl MovieGrid {
    /// Handles a key for a grid showing `len` cards.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> Option<MovieGridAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('l') | KeyCode::Right => self.goto_next(len),
            KeyCode::Char('h') | KeyCode::Left => self.goto_previous(len),
            KeyCode::Char('j') | KeyCode::Down => self.goto_row_below(len),
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.goto_row_above(len) {
                    return Some(MovieGridAction::Leave);
                }
            }
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('i') => {
                return Some(MovieGridAction::Leave);
            }

            _ => {}
        }

        None
    }
}
