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

//! Result cards and per-card poster state.
//!
//! The grid never owns the movie records, those stay in the search result and
//! are passed in when drawing. What the grid does own is an arena of
//! [`PosterState`]s keyed by movie id, one per rendered card, which tracks
//! whether that card's poster is still loading or failed to load. Cards never
//! see each other's state.
//!
//! The arena is tagged with the id of the search it was built for. Poster
//! results carry the same id, so results that arrive late for an earlier
//! search never land on a card of the current one.

mod event;
mod render;

use std::collections::HashMap;

use crate::{
    model::{MovieSummary, Thumbnail},
    tasks::AppTask,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MovieGridAction {
    Leave,
}

/// Image loading state of a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PosterState {
    pub(crate) loading: bool,
    pub(crate) errored: bool,
    pub(crate) thumbnail: Option<Thumbnail>,
}

impl PosterState {
    pub(crate) fn new() -> Self {
        Self {
            loading: true,
            errored: false,
            thumbnail: None,
        }
    }

    fn loaded(&mut self, thumbnail: Thumbnail) {
        self.loading = false;
        self.errored = false;
        self.thumbnail = Some(thumbnail);
    }

    fn failed(&mut self) {
        self.loading = false;
        self.errored = true;
        self.thumbnail = None;
    }
}

impl Default for PosterState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the poster slot of a card shows.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PosterView<'a> {
    Loading,
    Placeholder(&'a str),
    Image(&'a Thumbnail),
}

/// Resolves the image source for a card: the placeholder when the movie has
/// no artwork or its poster failed to load, otherwise the poster URL.
pub(crate) fn poster_source<'a>(
    movie: &'a MovieSummary,
    state: &PosterState,
    placeholder_url: &'a str,
) -> &'a str {
    if !movie.has_poster() || state.errored {
        placeholder_url
    } else {
        &movie.poster_url
    }
}

pub(crate) struct MovieGrid {
    posters: HashMap<String, PosterState>,
    generation: u64,
    placeholder_url: String,
    pub(crate) selected: Option<usize>,
    pub(crate) columns: usize,
    pub(crate) first_row: usize,
}

impl MovieGrid {
    pub(crate) fn new(placeholder_url: String) -> Self {
        Self {
            posters: HashMap::new(),
            generation: 0,
            placeholder_url,
            selected: None,
            columns: 1,
            first_row: 0,
        }
    }

    /// Starts over with fresh poster state for `movies`, the results of
    /// search `generation`, returning the poster downloads to issue.
    ///
    /// Movies without artwork go straight to the placeholder, which is drawn
    /// locally and needs no download.
    pub(crate) fn reset(&mut self, movies: &[MovieSummary], generation: u64) -> Vec<AppTask> {
        self.posters.clear();
        self.generation = generation;
        self.selected = (!movies.is_empty()).then_some(0);
        self.first_row = 0;

        let mut tasks = vec![];
        for movie in movies {
            if self.posters.contains_key(&movie.id) {
                continue;
            }

            let mut state = PosterState::new();
            if movie.has_poster() {
                tasks.push(AppTask::LoadPoster {
                    generation,
                    movie_id: movie.id.clone(),
                    url: movie.poster_url.clone(),
                });
            } else {
                state.loading = false;
            }
            self.posters.insert(movie.id.clone(), state);
        }

        tasks
    }

    pub(crate) fn poster_loaded(
        &mut self,
        generation: u64,
        movie_id: &str,
        thumbnail: Thumbnail,
    ) {
        if let Some(state) = self.current_poster(generation, movie_id) {
            state.loaded(thumbnail);
        }
    }

    pub(crate) fn poster_failed(&mut self, generation: u64, movie_id: &str) {
        if let Some(state) = self.current_poster(generation, movie_id) {
            state.failed();
        }
    }

    fn current_poster(&mut self, generation: u64, movie_id: &str) -> Option<&mut PosterState> {
        if generation != self.generation {
            log::debug!(
                "Ignoring poster result for {} from search #{} (showing #{})",
                movie_id,
                generation,
                self.generation
            );
            return None;
        }
        self.posters.get_mut(movie_id)
    }

    pub(crate) fn poster_state(&self, movie_id: &str) -> Option<&PosterState> {
        self.posters.get(movie_id)
    }

    pub(crate) fn placeholder_url(&self) -> &str {
        &self.placeholder_url
    }

    /// Decides what the poster slot of `movie`'s card shows.
    pub(crate) fn poster_view<'a>(
        &'a self,
        movie: &'a MovieSummary,
        state: &'a PosterState,
    ) -> PosterView<'a> {
        if state.loading {
            return PosterView::Loading;
        }

        let source = poster_source(movie, state, &self.placeholder_url);
        match &state.thumbnail {
            Some(thumbnail) if source == movie.poster_url => PosterView::Image(thumbnail),
            _ => PosterView::Placeholder(self.placeholder_url()),
        }
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.selected = Some(i);
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.selected = Some(i);
    }

    fn goto_row_below(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.selected.map_or(0, |i| (i + self.columns).min(len - 1));
        self.selected = Some(i);
    }

    /// Moves up a row, returning `false` when already on the top row.
    fn goto_row_above(&mut self, len: usize) -> bool {
        match self.selected {
            Some(i) if i >= self.columns && len > 0 => {
                self.selected = Some((i - self.columns).min(len - 1));
                true
            }
            _ => false,
        }
    }

    fn goto_first(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
    }

    fn goto_last(&mut self, len: usize) {
        self.selected = len.checked_sub(1);
    }

    /// Keeps the selection in range and scrolls so that it is visible.
    pub(crate) fn clamp(&mut self, len: usize, visible_rows: usize) {
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };

        let columns = self.columns.max(1);
        let visible_rows = visible_rows.max(1);
        let row = self.selected.map_or(0, |i| i / columns);

        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + visible_rows {
            self.first_row = row + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;
    use crate::model::movie::NO_POSTER;

    const PLACEHOLDER: &str = "https://via.placeholder.com/400";

    fn movie(id: &str, poster_url: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("Movie {}", id),
            year: "2005".to_string(),
            poster_url: poster_url.to_string(),
            kind: "movie".to_string(),
        }
    }

    fn thumbnail() -> Thumbnail {
        let mut bytes = Cursor::new(vec![]);
        RgbImage::from_pixel(2, 3, Rgb([9, 9, 9]))
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        Thumbnail::decode(&bytes.into_inner()).unwrap()
    }

    #[test]
    fn new_poster_state_is_loading() {
        let state = PosterState::new();
        assert!(state.loading);
        assert!(!state.errored);
    }

    #[test]
    fn source_is_poster_url_when_available() {
        let movie = movie("tt1", "https://example.com/poster.jpg");
        assert_eq!(
            poster_source(&movie, &PosterState::new(), PLACEHOLDER),
            "https://example.com/poster.jpg"
        );
    }

    #[test]
    fn source_is_placeholder_without_artwork() {
        let movie = movie("tt1", NO_POSTER);
        assert_eq!(
            poster_source(&movie, &PosterState::new(), PLACEHOLDER),
            PLACEHOLDER
        );
    }

    #[test]
    fn load_error_always_shows_placeholder() {
        for url in ["https://example.com/poster.jpg", NO_POSTER, ""] {
            let movie = movie("tt1", url);
            let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
            grid.reset(std::slice::from_ref(&movie), 1);

            grid.poster_failed(1, "tt1");

            let state = grid.poster_state("tt1").unwrap();
            assert!(!state.loading);
            assert!(state.errored);
            assert_eq!(poster_source(&movie, state, PLACEHOLDER), PLACEHOLDER);
            assert_eq!(
                grid.poster_view(&movie, state),
                PosterView::Placeholder(PLACEHOLDER)
            );
        }
    }

    #[test]
    fn reset_requests_posters_only_for_real_artwork() {
        let movies = vec![
            movie("tt1", "https://example.com/1.jpg"),
            movie("tt2", NO_POSTER),
            movie("tt1", "https://example.com/1.jpg"),
        ];
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());

        let tasks = grid.reset(&movies, 1);

        assert_eq!(
            tasks,
            vec![AppTask::LoadPoster {
                generation: 1,
                movie_id: "tt1".to_string(),
                url: "https://example.com/1.jpg".to_string(),
            }]
        );
        assert!(grid.poster_state("tt1").unwrap().loading);
        assert!(!grid.poster_state("tt2").unwrap().loading);
        assert_eq!(grid.selected, Some(0));
    }

    #[test]
    fn loading_card_shows_indicator_until_loaded() {
        let movie = movie("tt1", "https://example.com/1.jpg");
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
        grid.reset(std::slice::from_ref(&movie), 1);

        let state = grid.poster_state("tt1").unwrap().clone();
        assert_eq!(grid.poster_view(&movie, &state), PosterView::Loading);

        let thumbnail = thumbnail();
        grid.poster_loaded(1, "tt1", thumbnail.clone());

        let state = grid.poster_state("tt1").unwrap();
        assert!(!state.loading);
        assert_eq!(grid.poster_view(&movie, state), PosterView::Image(&thumbnail));
    }

    #[test]
    fn events_for_unknown_cards_are_ignored() {
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
        grid.reset(&[movie("tt1", "https://example.com/1.jpg")], 1);

        grid.poster_failed(1, "tt9");
        grid.poster_loaded(1, "tt8", thumbnail());

        assert!(grid.poster_state("tt9").is_none());
        assert!(grid.poster_state("tt8").is_none());
        assert!(grid.poster_state("tt1").unwrap().loading);
    }

    #[test]
    fn results_for_earlier_search_are_ignored() {
        let movie = movie("tt1", "https://example.com/1.jpg");
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
        grid.reset(std::slice::from_ref(&movie), 1);
        grid.reset(std::slice::from_ref(&movie), 2);

        grid.poster_failed(1, "tt1");
        grid.poster_loaded(1, "tt1", thumbnail());

        let state = grid.poster_state("tt1").unwrap();
        assert!(state.loading);
        assert!(!state.errored);
        assert!(state.thumbnail.is_none());
    }

    #[test]
    fn load_success_clears_earlier_error() {
        let movie = movie("tt1", "https://example.com/1.jpg");
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
        grid.reset(std::slice::from_ref(&movie), 1);

        grid.poster_failed(1, "tt1");
        let thumbnail = thumbnail();
        grid.poster_loaded(1, "tt1", thumbnail.clone());

        let state = grid.poster_state("tt1").unwrap();
        assert!(!state.errored);
        assert_eq!(grid.poster_view(&movie, state), PosterView::Image(&thumbnail));
    }

    #[test]
    fn horizontal_navigation_wraps() {
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
        grid.selected = Some(0);

        grid.goto_previous(5);
        assert_eq!(grid.selected, Some(4));
        grid.goto_next(5);
        assert_eq!(grid.selected, Some(0));
    }

    #[test]
    fn vertical_navigation_moves_by_rows() {
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
        grid.columns = 3;
        grid.selected = Some(1);

        grid.goto_row_below(8);
        assert_eq!(grid.selected, Some(4));
        grid.goto_row_below(8);
        assert_eq!(grid.selected, Some(7));
        grid.goto_row_below(8);
        assert_eq!(grid.selected, Some(7));

        assert!(grid.goto_row_above(8));
        assert_eq!(grid.selected, Some(4));
        assert!(grid.goto_row_above(8));
        assert!(!grid.goto_row_above(8));
        assert_eq!(grid.selected, Some(1));

        grid.goto_last(8);
        assert_eq!(grid.selected, Some(7));
        grid.goto_first(8);
        assert_eq!(grid.selected, Some(0));
    }

    #[test]
    fn clamp_scrolls_selection_into_view() {
        let mut grid = MovieGrid::new(PLACEHOLDER.to_string());
        grid.columns = 2;
        grid.selected = Some(7);

        grid.clamp(10, 2);
        assert_eq!(grid.first_row, 2);

        grid.selected = Some(0);
        grid.clamp(10, 2);
        assert_eq!(grid.first_row, 0);

        grid.selected = Some(42);
        grid.clamp(3, 2);
        assert_eq!(grid.selected, Some(2));

        grid.clamp(0, 2);
        assert_eq!(grid.selected, None);
    }
}
