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

//! Application configuration.
//!
//! This module manages the application configuration file. The API key and
//! endpoint are read from here and handed to the client at construction, there
//! is no process-wide key.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "movievillage";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_key: String,
    pub search_url: String,
    pub debounce_ms: u64,
    pub default_query: String,
    pub placeholder_poster_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: String::new(),
            search_url: "https://www.omdbapi.com/".to_string(),
            debounce_ms: 500,
            default_query: "Batman".to_string(),
            placeholder_poster_url: "https://via.placeholder.com/400".to_string(),
        }
    }
}

impl AppConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        log::warn!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    })
}

/// Directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
}
