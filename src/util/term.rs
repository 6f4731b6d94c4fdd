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

//! Terminal environment and styling utilities.
//!
//! The background colour of the terminal emulator is changed with OSC
//! (Operating System Command) escape sequences so the whole window, not just
//! the cells drawn by the UI, uses the theme background.
//!
//! # Compatibility
//!
//! Terminals that do not understand the OSC codes ignore them. XTerm, iTerm2,
//! Alacritty and Kitty all support them.

use std::io::{self, Write};

/// Sets the terminal background colour (OSC 11) to a `#rrggbb` string.
pub(crate) fn set_terminal_bg(hex_colour: &str) {
    write_osc(&format!("\x1b]11;{}\x07", hex_colour));
}

/// Reverts the terminal background to the user's own colour (OSC 111).
pub(crate) fn reset_terminal_bg() {
    write_osc("\x1b]111\x07");
}

// Failures are ignored, a wrong background colour is not worth aborting for.
fn write_osc(sequence: &str) {
    let mut stdout = io::stdout();
    stdout.write_all(sequence.as_bytes()).ok();
    stdout.flush().ok();
}
