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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) input_bg: Color,
    pub(crate) input_fg: Color,

    pub(crate) card_year_fg: Color,
    pub(crate) card_kind_fg: Color,
    pub(crate) card_title_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(33, 33, 33),
            accent_colour: Color::Rgb(245, 208, 151),
            border_colour: Color::Rgb(90, 90, 90),
            muted_fg: Color::Rgb(162, 161, 166),
            error_fg: Color::Rgb(255, 107, 107),

            input_bg: Color::Rgb(31, 37, 38),
            input_fg: Color::Rgb(169, 169, 169),

            card_year_fg: Color::Rgb(245, 208, 151),
            card_kind_fg: Color::Rgb(162, 161, 166),
            card_title_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background colour via
    /// escape sequences, so only RGB colours are meaningful. Any other colour
    /// yields `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
