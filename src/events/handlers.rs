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

use std::sync::atomic::Ordering;

use anyhow::Result;

use crate::{
    App,
    model::{SearchResponse, SearchResultState, Thumbnail},
    omdb::ApiError,
};

pub(super) fn handle_debounce_elapsed(app: &mut App, timer_id: u64, query: &str) -> Result<()> {
    app.controller.on_debounce_elapsed(timer_id, query)
}

pub(super) fn handle_search_completed(
    app: &mut App,
    request_id: u64,
    outcome: Result<SearchResponse, ApiError>,
) -> Result<()> {
    if !app.controller.complete_search(request_id, outcome) {
        return Ok(());
    }

    if matches!(app.controller.result(), SearchResultState::Succeeded { .. }) {
        app.status_message = None;
    }

    // Posters still queued for earlier results are skipped by the worker
    app.poster_generation.store(request_id, Ordering::Release);

    let tasks = app
        .movie_grid
        .reset(app.controller.result().items(), request_id);
    for task in tasks {
        app.poster_tx.send(task)?;
    }

    Ok(())
}

pub(super) fn handle_poster_loaded(
    app: &mut App,
    generation: u64,
    movie_id: &str,
    thumbnail: Thumbnail,
) {
    app.movie_grid.poster_loaded(generation, movie_id, thumbnail);
}

pub(super) fn handle_poster_failed(app: &mut App, generation: u64, movie_id: &str) {
    app.movie_grid.poster_failed(generation, movie_id);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    log::error!("{}", message);
    app.status_message = Some(message);
}
