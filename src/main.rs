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

//! # MovieVillage.
//!
//! A terminal movie search client for the OMDb movie database.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and all
//!   search state.
//! * **Background Workers** run the blocking HTTP requests, one worker for
//!   searches and one for poster downloads.
//! * **Event Loops** capture user input, timer expiry and worker results to
//!   drive the UI state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a failure. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod controller;
mod events;
mod model;
mod omdb;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        atomic::AtomicU64,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use crate::{
    components::{MovieGrid, SearchBar},
    config::AppConfig,
    controller::SearchController,
    events::{AppEvent, Focus, process_events},
    omdb::OmdbClient,
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub poster_tx: Sender<AppTask>,
    pub poster_generation: Arc<AtomicU64>,

    pub controller: SearchController,

    pub search_bar: SearchBar,
    pub movie_grid: MovieGrid,

    pub status_message: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// Searches are sent to `search_tx` and poster downloads to `poster_tx`,
    /// the workers serving those channels are started separately.
    pub fn new(config: AppConfig, search_tx: Sender<AppTask>, poster_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let controller = SearchController::new(&config, search_tx, event_tx.clone());
        let movie_grid = MovieGrid::new(config.placeholder_poster_url.clone());

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::SearchInput,
            event_tx,
            event_rx,
            poster_tx,
            poster_generation: Arc::new(AtomicU64::new(0)),
            controller,
            search_bar: SearchBar::new(),
            movie_grid,
            status_message: None,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    // Logging is best-effort, the application works without a log file
    let log_file = util::logging::init_logging();

    let config = config::load_config();
    if let Ok(path) = &log_file {
        log::info!("Logging to {}", path.display());
    }

    let database = OmdbClient::new(&config).context("Failed to create HTTP client")?;

    let (search_tx, search_rx) = mpsc::channel();
    let (poster_tx, poster_rx) = mpsc::channel();

    let mut app = App::new(config, search_tx, poster_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, database, search_rx, poster_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the application theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A search worker and a poster worker to run [`AppTask`]s.
/// * An input thread to poll for terminal events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers it issues the initial search, then hands
/// control to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if a thread cannot be started or if the event processing
/// loop encounters an unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    database: OmdbClient,
    search_rx: Receiver<AppTask>,
    poster_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(
        "search-worker",
        database.clone(),
        search_rx,
        app.event_tx.clone(),
        Arc::clone(&app.poster_generation),
    )?;
    tasks::spawn_task_worker(
        "poster-worker",
        database,
        poster_rx,
        app.event_tx.clone(),
        Arc::clone(&app.poster_generation),
    )?;

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    log::error!("Failed to read terminal event: {}", e);
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Initial search so the results are never empty on first load
    let default_query = app.config.default_query.clone();
    app.controller.activate(&default_query)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
