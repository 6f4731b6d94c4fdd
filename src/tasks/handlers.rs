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
    events::AppEvent,
    model::{SearchRequest, Thumbnail},
    omdb::MovieDatabase,
    tasks::TaskContext,
};

pub(super) fn search<D: MovieDatabase>(ctx: &TaskContext<D>, request: SearchRequest) -> Result<()> {
    let outcome = ctx.database.search(&request.title);

    ctx.event_tx.send(AppEvent::SearchCompleted {
        request_id: request.id,
        outcome,
    })?;

    Ok(())
}

/// Downloads and decodes a poster, unless a newer search has replaced the
/// cards since the task was queued.
pub(super) fn load_poster<D: MovieDatabase>(
    ctx: &TaskContext<D>,
    generation: u64,
    movie_id: String,
    url: &str,
) -> Result<()> {
    let latest = ctx.poster_generation.load(Ordering::Acquire);
    if generation < latest {
        log::debug!(
            "Skipping poster for {} from search #{} (showing #{})",
            movie_id,
            generation,
            latest
        );
        return Ok(());
    }

    let thumbnail = ctx
        .database
        .fetch_poster(url)
        .map_err(anyhow::Error::from)
        .and_then(|bytes| Ok(Thumbnail::decode(&bytes)?));

    let event = match thumbnail {
        Ok(thumbnail) => AppEvent::PosterLoaded {
            generation,
            movie_id,
            thumbnail,
        },
        Err(e) => {
            log::debug!("Poster {} for {} failed: {:#}", url, movie_id, e);
            AppEvent::PosterFailed {
                generation,
                movie_id,
            }
        }
    };

    ctx.event_tx.send(event)?;

    Ok(())
}
