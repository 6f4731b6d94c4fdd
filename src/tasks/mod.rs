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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking
//! network requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppTask`] requests into calls on a
//! [`MovieDatabase`] and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;

use anyhow::Result;
use std::{
    sync::{
        Arc,
        atomic::AtomicU64,
        mpsc::{Receiver, Sender},
    },
    thread,
};

use crate::{events::AppEvent, model::SearchRequest, omdb::MovieDatabase};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AppTask {
    Search(SearchRequest),

    /// Downloads the poster of a card. `generation` is the id of the search
    /// whose results the card belongs to.
    LoadPoster {
        generation: u64,
        movie_id: String,
        url: String,
    },
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns its database client and enters a blocking loop, listening
/// for incoming [`AppTask`]s until every sender has been dropped.
///
/// # Arguments
///
/// * `name` - Thread name, used in log output.
/// * `database` - The movie database the tasks are run against.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
/// * `poster_generation` - Id of the search whose cards are on screen, poster
///   tasks for older searches are dropped without downloading anything.
pub(crate) fn spawn_task_worker<D>(
    name: &str,
    database: D,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
    poster_generation: Arc<AtomicU64>,
) -> Result<thread::JoinHandle<()>>
where
    D: MovieDatabase + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            while let Ok(task) = task_rx.recv() {
                let ctx = TaskContext {
                    database: &database,
                    event_tx: &event_tx,
                    poster_generation: &poster_generation,
                };

                if let Err(e) = handle_task(task, &ctx) {
                    log::error!("Task failed: {:#}", e);
                    let _ = event_tx.send(AppEvent::Error(e.to_string()));
                }
            }

            log::debug!("Task channel closed, worker exiting");
        })?;

    Ok(handle)
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a, D> {
    database: &'a D,
    event_tx: &'a Sender<AppEvent>,
    poster_generation: &'a AtomicU64,
}

fn handle_task<D: MovieDatabase>(task: AppTask, ctx: &TaskContext<D>) -> Result<()> {
    match task {
        AppTask::Search(request) => handlers::search(ctx, request),
        AppTask::LoadPoster {
            generation,
            movie_id,
            url,
        } => handlers::load_poster(ctx, generation, movie_id, &url),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        io::Cursor,
        sync::mpsc::{self, RecvTimeoutError},
        time::Duration,
    };

    use image::{ImageFormat, Rgb, RgbImage};
    use reqwest::StatusCode;

    use super::*;
    use crate::{model::SearchResponse, omdb::ApiError};

    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Canned database recording the titles it was asked for.
    struct FakeDatabase {
        body: &'static str,
        poster: Option<Vec<u8>>,
        titles: RefCell<Vec<String>>,
        fetched: RefCell<Vec<String>>,
    }

    impl FakeDatabase {
        fn new(body: &'static str, poster: Option<Vec<u8>>) -> Self {
            Self {
                body,
                poster,
                titles: RefCell::new(vec![]),
                fetched: RefCell::new(vec![]),
            }
        }
    }

    impl MovieDatabase for FakeDatabase {
        fn search(&self, title: &str) -> Result<SearchResponse, ApiError> {
            self.titles.borrow_mut().push(title.to_string());
            Ok(serde_json::from_str(self.body).unwrap())
        }

        fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, ApiError> {
            self.fetched.borrow_mut().push(url.to_string());
            self.poster
                .clone()
                .ok_or(ApiError::Status(StatusCode::NOT_FOUND))
        }
    }

    fn png() -> Vec<u8> {
        let mut bytes = Cursor::new(vec![]);
        RgbImage::from_pixel(8, 12, Rgb([1, 2, 3]))
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    fn run_at(database: &FakeDatabase, task: AppTask, generation: u64) -> Option<AppEvent> {
        let (event_tx, event_rx) = mpsc::channel();
        let poster_generation = AtomicU64::new(generation);
        let ctx = TaskContext {
            database,
            event_tx: &event_tx,
            poster_generation: &poster_generation,
        };
        handle_task(task, &ctx).unwrap();
        event_rx.try_recv().ok()
    }

    fn run(database: &FakeDatabase, task: AppTask) -> AppEvent {
        run_at(database, task, 0).unwrap()
    }

    #[test]
    fn search_reports_completion_with_request_id() {
        let database = FakeDatabase::new(r#"{"Response":"True","Search":[]}"#, None);

        let event = run(
            &database,
            AppTask::Search(SearchRequest {
                id: 7,
                title: "bat".to_string(),
            }),
        );

        match event {
            AppEvent::SearchCompleted {
                request_id,
                outcome,
            } => {
                assert_eq!(request_id, 7);
                assert!(outcome.unwrap().is_success());
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(*database.titles.borrow(), vec!["bat".to_string()]);
    }

    #[test]
    fn poster_is_decoded_into_thumbnail() {
        let database = FakeDatabase::new("{}", Some(png()));

        let event = run(
            &database,
            AppTask::LoadPoster {
                generation: 0,
                movie_id: "tt1".to_string(),
                url: "https://example.com/p.png".to_string(),
            },
        );

        match event {
            AppEvent::PosterLoaded {
                generation,
                movie_id,
                thumbnail,
            } => {
                assert_eq!(generation, 0);
                assert_eq!(movie_id, "tt1");
                assert_eq!(thumbnail.pixel(0, 0), [1, 2, 3]);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn poster_download_failure_is_reported() {
        let database = FakeDatabase::new("{}", None);

        let event = run(
            &database,
            AppTask::LoadPoster {
                generation: 0,
                movie_id: "tt1".to_string(),
                url: "https://example.com/missing.jpg".to_string(),
            },
        );

        assert!(matches!(event, AppEvent::PosterFailed { movie_id, .. } if movie_id == "tt1"));
    }

    #[test]
    fn undecodable_poster_is_reported() {
        let database = FakeDatabase::new("{}", Some(b"not an image".to_vec()));

        let event = run(
            &database,
            AppTask::LoadPoster {
                generation: 0,
                movie_id: "tt2".to_string(),
                url: "https://example.com/p.jpg".to_string(),
            },
        );

        assert!(matches!(event, AppEvent::PosterFailed { movie_id, .. } if movie_id == "tt2"));
    }

    #[test]
    fn poster_for_superseded_search_is_skipped() {
        let database = FakeDatabase::new("{}", Some(png()));

        let event = run_at(
            &database,
            AppTask::LoadPoster {
                generation: 3,
                movie_id: "tt1".to_string(),
                url: "https://example.com/old.png".to_string(),
            },
            4,
        );

        assert!(event.is_none());
        assert!(database.fetched.borrow().is_empty());
    }

    #[test]
    fn poster_for_current_search_is_loaded() {
        let database = FakeDatabase::new("{}", Some(png()));

        let event = run_at(
            &database,
            AppTask::LoadPoster {
                generation: 4,
                movie_id: "tt1".to_string(),
                url: "https://example.com/new.png".to_string(),
            },
            4,
        );

        assert!(matches!(
            event,
            Some(AppEvent::PosterLoaded { generation: 4, .. })
        ));
        assert_eq!(
            *database.fetched.borrow(),
            vec!["https://example.com/new.png".to_string()]
        );
    }

    /// Thread-safe fake for the spawned worker, which must be `Send`.
    struct EmptyDatabase;

    impl MovieDatabase for EmptyDatabase {
        fn search(&self, _title: &str) -> Result<SearchResponse, ApiError> {
            Ok(SearchResponse::default())
        }

        fn fetch_poster(&self, _url: &str) -> Result<Vec<u8>, ApiError> {
            Err(ApiError::Status(StatusCode::NOT_FOUND))
        }
    }

    #[test]
    fn worker_processes_tasks_until_channel_closes() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let generation = Arc::new(AtomicU64::new(0));
        let worker =
            spawn_task_worker("test-worker", EmptyDatabase, task_rx, event_tx, generation).unwrap();

        task_tx
            .send(AppTask::Search(SearchRequest {
                id: 1,
                title: "x".to_string(),
            }))
            .unwrap();

        assert!(matches!(
            event_rx.recv_timeout(TIMEOUT).unwrap(),
            AppEvent::SearchCompleted { request_id: 1, .. }
        ));

        drop(task_tx);
        worker.join().unwrap();
        assert_eq!(
            event_rx.recv_timeout(Duration::from_millis(10)).unwrap_err(),
            RecvTimeoutError::Disconnected
        );
    }
}
