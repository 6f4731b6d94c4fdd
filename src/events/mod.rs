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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (search completions, poster downloads, debounce timers), and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: [`handle_event`] updates the [`App`] state, hands search
//!    and poster tasks to the background workers and manages focus between
//!    the search bar and the result grid.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! All state is only ever touched from the thread running the loop.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    components::{MovieGridAction, SearchBarAction},
    model::{SearchResponse, Thumbnail},
    omdb::ApiError,
    render::draw,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,

    DebounceElapsed {
        timer_id: u64,
        query: String,
    },

    SearchCompleted {
        request_id: u64,
        outcome: Result<SearchResponse, ApiError>,
    },

    PosterLoaded {
        generation: u64,
        movie_id: String,
        thumbnail: Thumbnail,
    },
    PosterFailed {
        generation: u64,
        movie_id: String,
    },

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::DebounceElapsed { timer_id, query } => {
            handle_debounce_elapsed(app, timer_id, &query)?
        }
        AppEvent::SearchCompleted {
            request_id,
            outcome,
        } => handle_search_completed(app, request_id, outcome)?,
        AppEvent::PosterLoaded {
            generation,
            movie_id,
            thumbnail,
        } => handle_poster_loaded(app, generation, &movie_id, thumbnail),
        AppEvent::PosterFailed {
            generation,
            movie_id,
        } => handle_poster_failed(app, generation, &movie_id),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Resize | AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Routes keyboard input to the focused component.
///
/// `Ctrl-C` always quits. Otherwise the search bar receives every key while
/// it has focus, so that any character can be typed; the grid only consumes
/// navigation keys and leaves the rest to [`process_global_key_event`].
///
/// # Errors
///
/// Returns an error if a task fails to send to a background worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::SearchInput => {
            if let Some(action) = app.search_bar.process_event(&event) {
                match action {
                    SearchBarAction::QueryChanged(text) => app.controller.set_query(&text),
                    SearchBarAction::Submit => app.controller.trigger_immediate_search()?,
                    SearchBarAction::Leave => app.focus = Focus::Results,
                }
            }
            Ok(())
        }

        Focus::Results => {
            let len = app.controller.result().items().len();
            match app.movie_grid.process_event(&event, len) {
                Some(MovieGridAction::Leave) => {
                    app.focus = Focus::SearchInput;
                    Ok(())
                }
                None => process_global_key_event(app, key),
            }
        }
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Re-run the last search, there is no automatic retry
        KeyCode::Char('r') => app.controller.retry()?,

        _ => {}
    }

    Ok(())
}
