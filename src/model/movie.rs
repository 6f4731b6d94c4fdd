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

//! Movie records as returned by the movie database search endpoint.
//!
//! The field names on the wire follow the OMDb conventions (`imdbID`,
//! `Title`, ...). Any field may be missing from a response, so every field is
//! decoded with a default rather than failing the whole payload.

use serde::Deserialize;

/// The poster value the API uses to mean "no artwork available".
pub(crate) const NO_POSTER: &str = "N/A";

const RESPONSE_TRUE: &str = "True";

/// A single search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct MovieSummary {
    #[serde(rename = "imdbID", default)]
    pub(crate) id: String,
    #[serde(rename = "Title", default)]
    pub(crate) title: String,
    #[serde(rename = "Year", default)]
    pub(crate) year: String,
    #[serde(rename = "Poster", default)]
    pub(crate) poster_url: String,
    #[serde(rename = "Type", default)]
    pub(crate) kind: String,
}

impl MovieSummary {
    pub(crate) fn has_poster(&self) -> bool {
        self.poster_url != NO_POSTER
    }
}

/// Body of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "Response", default)]
    pub(crate) response: Option<String>,
    #[serde(rename = "Search", default)]
    pub(crate) search: Option<Vec<MovieSummary>>,
    #[serde(rename = "Error", default)]
    pub(crate) error: Option<String>,
    #[serde(rename = "totalResults", default)]
    pub(crate) total_results: Option<String>,
}

impl SearchResponse {
    /// Whether the API reported success. Anything other than an explicit
    /// `"True"`, including a missing field, counts as failure.
    pub(crate) fn is_success(&self) -> bool {
        self.response.as_deref() == Some(RESPONSE_TRUE)
    }
}
