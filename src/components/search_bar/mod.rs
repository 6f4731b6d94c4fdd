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

//! Search text input and submit control.
//!
//! The search bar owns the editable text buffer; every edit is reported as a
//! [`SearchBarAction::QueryChanged`] so the controller always sees the latest
//! keystroke.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchBarAction {
    QueryChanged(String),
    Submit,
    Leave,
}

#[derive(Default)]
pub(crate) struct SearchBar {
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }
}
