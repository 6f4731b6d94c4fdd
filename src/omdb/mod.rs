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

//! Movie database HTTP client.
//!
//! The [`MovieDatabase`] trait is the seam between the background workers and
//! the network; [`OmdbClient`] is the production implementation that talks to
//! the OMDb search endpoint and downloads poster images.
//!
//! All calls are blocking and are only ever made from worker threads, never
//! from the UI thread.

use reqwest::{StatusCode, blocking::Client};
use thiserror::Error;

use crate::{config::AppConfig, model::SearchResponse};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Failures that happen before a structured API response is obtained.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
}

pub(crate) trait MovieDatabase {
    /// Searches for movies matching `title`.
    fn search(&self, title: &str) -> Result<SearchResponse, ApiError>;

    /// Downloads the raw bytes of a poster image.
    fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}

#[derive(Debug, Clone)]
pub(crate) struct OmdbClient {
    http: Client,
    search_url: String,
    api_key: String,
}

impl OmdbClient {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        if config.api_key.is_empty() {
            log::warn!(
                "No API key configured, set api_key in the {} config file; \
                 the server rejects keyless searches and they show as connection failures",
                crate::config::CONFIG_NAME
            );
        }

        Ok(Self {
            http,
            search_url: config.search_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ApiError> {
        let response = self.http.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response)
    }
}

impl MovieDatabase for OmdbClient {
    fn search(&self, title: &str) -> Result<SearchResponse, ApiError> {
        let url = search_url(&self.search_url, &self.api_key, title);
        log::debug!("Searching for {:?}", title.trim());

        let response: SearchResponse = self.get(&url)?.json()?;
        log::debug!(
            "Search for {:?} answered {:?} ({} results)",
            title.trim(),
            response.response,
            response.total_results.as_deref().unwrap_or("0")
        );

        Ok(response)
    }

    fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let bytes = self.get(url)?.bytes()?;
        Ok(bytes.to_vec())
    }
}

/// Builds the search request URL, the title is trimmed and percent-encoded.
pub(crate) fn search_url(base: &str, api_key: &str, title: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}apikey={}&s={}",
        base,
        separator,
        urlencoding::encode(api_key),
        urlencoding::encode(title.trim())
    )
}
