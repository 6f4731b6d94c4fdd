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

/// Shortens `text` to at most `width` characters, marking the cut with an
/// ellipsis.
///
/// Card cells have a fixed width, so long titles and URLs are cut rather
/// than wrapped onto lines the card does not have.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate("Batman Begins", 8), "Batman \u{2026}");
/// assert_eq!(truncate("Up", 8), "Up");
/// ```
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    if width == 0 {
        return String::new();
    }

    let mut shortened: String = text.chars().take(width - 1).collect();
    shortened.push('\u{2026}');
    shortened
}
