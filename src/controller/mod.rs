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

//! Search controller.
//!
//! Owns the current query text and the result state of the search. Typing
//! updates the query straight away and schedules a deferred search through
//! the [`Debouncer`]; submitting bypasses the delay. Requests are handed to
//! the search worker as [`AppTask::Search`], and their completions are
//! reconciled back into the result state on the UI thread.
//!
//! Every request carries a token that increases with each request issued.
//! Only the completion of the most recent request is applied, so a slow
//! response can never overwrite the result of a newer search.

mod debounce;

use std::sync::mpsc::Sender;

use anyhow::Result;

use crate::{
    config::AppConfig,
    events::AppEvent,
    model::{SearchRequest, SearchResponse, SearchResultState},
    omdb::ApiError,
    tasks::AppTask,
};

use debounce::Debouncer;

pub(crate) struct SearchController {
    query: String,
    result: SearchResultState,
    debouncer: Debouncer,
    task_tx: Sender<AppTask>,
    latest_request: u64,
    last_title: Option<String>,
}

impl SearchController {
    pub(crate) fn new(
        config: &AppConfig,
        task_tx: Sender<AppTask>,
        event_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            query: String::new(),
            result: SearchResultState::Idle,
            debouncer: Debouncer::new(config.debounce_delay(), event_tx),
            task_tx,
            latest_request: 0,
            last_title: None,
        }
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn result(&self) -> &SearchResultState {
        &self.result
    }

    /// Whether a deferred search is waiting for typing to pause.
    pub(crate) fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Whether the "no results" message applies: the last search succeeded
    /// with nothing and there is a query to report it for.
    pub(crate) fn shows_no_results(&self) -> bool {
        matches!(&self.result, SearchResultState::Succeeded { items } if items.is_empty())
            && !self.query.trim().is_empty()
    }

    /// Issues the initial search so the view is never empty on start-up.
    pub(crate) fn activate(&mut self, default_query: &str) -> Result<()> {
        log::info!("Initial search for {:?}", default_query);
        self.execute_search(default_query)
    }

    /// Replaces the query text and schedules a deferred search for it.
    ///
    /// A blank query cancels everything and settles on an empty result
    /// without touching the network.
    pub(crate) fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.debouncer.cancel();

        if text.trim().is_empty() {
            // Invalidate any request still in flight
            self.latest_request += 1;
            self.result = SearchResultState::empty();
            return;
        }

        self.debouncer.schedule(text.to_string());
    }

    /// Runs the deferred search if `timer_id` is still the pending timer.
    pub(crate) fn on_debounce_elapsed(&mut self, timer_id: u64, query: &str) -> Result<()> {
        if self.debouncer.fire(timer_id) {
            self.execute_search(query)?;
        } else {
            log::debug!("Ignoring superseded search timer {}", timer_id);
        }

        Ok(())
    }

    /// Searches for the current query at once, dropping any pending timer.
    pub(crate) fn trigger_immediate_search(&mut self) -> Result<()> {
        self.debouncer.cancel();
        let query = self.query.clone();
        self.execute_search(&query)
    }

    /// Re-issues the most recent search, whatever started it. Does nothing
    /// before the first search.
    ///
    /// The query text is not used here: the initial search runs for the
    /// default query while the input is still empty.
    pub(crate) fn retry(&mut self) -> Result<()> {
        match self.last_title.clone() {
            Some(title) => self.execute_search(&title),
            None => Ok(()),
        }
    }

    /// Issues a request for `title`. Blank titles are ignored.
    pub(crate) fn execute_search(&mut self, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }

        self.latest_request += 1;
        self.result = SearchResultState::Loading;

        let request = SearchRequest {
            id: self.latest_request,
            title: title.to_string(),
        };
        log::info!("Search #{} for {:?}", request.id, request.title);
        self.last_title = Some(request.title.clone());
        self.task_tx.send(AppTask::Search(request))?;

        Ok(())
    }

    /// Applies the outcome of request `request_id`, returning whether it was
    /// applied. Outcomes of superseded requests are discarded.
    pub(crate) fn complete_search(
        &mut self,
        request_id: u64,
        outcome: Result<SearchResponse, ApiError>,
    ) -> bool {
        if request_id != self.latest_request {
            log::debug!(
                "Discarding stale search #{} (latest is #{})",
                request_id,
                self.latest_request
            );
            return false;
        }

        self.result = SearchResultState::from_outcome(outcome);
        true
    }
}
