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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the movie
//! records returned by the movie database, the state of the current search
//! and the decoded poster thumbnails shown on the result cards.

pub(crate) mod movie;
pub(crate) mod poster;
pub(crate) mod search;

pub(crate) use movie::{MovieSummary, SearchResponse};
pub(crate) use poster::Thumbnail;
pub(crate) use search::{SearchRequest, SearchResultState};
