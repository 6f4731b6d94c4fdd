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

//! Search request and result state.
//!
//! The result of a search is always exactly one of the [`SearchResultState`]
//! variants. Completed requests are reconciled into a state with
//! [`SearchResultState::from_outcome`].

use crate::{
    model::movie::{MovieSummary, SearchResponse},
    omdb::ApiError,
};

pub(crate) const CONNECTION_FAILURE_MESSAGE: &str =
    "Failed to fetch movies. Please check your connection and try again.";

pub(crate) const NO_MOVIES_FOUND_MESSAGE: &str = "No movies found";

/// A search to be issued against the movie database.
///
/// The `id` is a token that increases with every request issued, it is used
/// to discard completions that have been superseded by a newer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    pub(crate) id: u64,
    pub(crate) title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum SearchResultState {
    #[default]
    Idle,
    Loading,
    Failed {
        message: String,
    },
    Succeeded {
        items: Vec<MovieSummary>,
    },
}

impl SearchResultState {
    pub(crate) fn empty() -> Self {
        Self::Succeeded { items: vec![] }
    }

    /// Maps the outcome of a completed request onto a result state.
    ///
    /// Transport errors are never shown verbatim, the user only ever sees a
    /// generic connection failure message.
    pub(crate) fn from_outcome(outcome: Result<SearchResponse, ApiError>) -> Self {
        match outcome {
            Err(e) => {
                log::warn!("Search request failed: {}", e);
                Self::Failed {
                    message: CONNECTION_FAILURE_MESSAGE.to_string(),
                }
            }
            Ok(response) if response.is_success() => Self::Succeeded {
                items: response.search.unwrap_or_default(),
            },
            Ok(response) => Self::Failed {
                message: response
                    .error
                    .unwrap_or_else(|| NO_MOVIES_FOUND_MESSAGE.to_string()),
            },
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub(crate) fn items(&self) -> &[MovieSummary] {
        match self {
            Self::Succeeded { items } => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::model::movie::NO_POSTER;

    fn response(body: &str) -> SearchResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn success_with_results() {
        let state = SearchResultState::from_outcome(Ok(response(
            r#"{"Response":"True","Search":[{"imdbID":"tt1","Title":"X","Year":"2000","Type":"movie","Poster":"N/A"}]}"#,
        )));

        let items = state.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "tt1");
        assert_eq!(items[0].poster_url, NO_POSTER);
    }

    #[test]
    fn success_without_list_is_empty() {
        let state = SearchResultState::from_outcome(Ok(response(r#"{"Response":"True"}"#)));
        assert_eq!(state, SearchResultState::empty());
    }

    #[test]
    fn api_failure_uses_api_message() {
        let state = SearchResultState::from_outcome(Ok(response(
            r#"{"Response":"False","Error":"Movie not found!"}"#,
        )));
        assert_eq!(
            state,
            SearchResultState::Failed {
                message: "Movie not found!".to_string()
            }
        );
    }

    #[test]
    fn api_failure_without_message_falls_back() {
        let state = SearchResultState::from_outcome(Ok(response(r#"{"Response":"False"}"#)));
        assert_eq!(
            state,
            SearchResultState::Failed {
                message: NO_MOVIES_FOUND_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn transport_failure_hides_raw_error() {
        let state = SearchResultState::from_outcome(Err(ApiError::Status(
            StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert_eq!(
            state,
            SearchResultState::Failed {
                message: CONNECTION_FAILURE_MESSAGE.to_string()
            }
        );
    }
}
