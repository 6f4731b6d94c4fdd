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

//! Log file setup.
//!
//! The terminal is owned by the user interface, so log output is written to a
//! file next to the configuration file rather than to `stderr`. The level
//! defaults to `info` and can be changed with `RUST_LOG`.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config;

const LOG_FILE: &str = "movievillage.log";

/// Initialises the global logger, returning the path of the log file.
pub(crate) fn init_logging() -> Result<PathBuf> {
    let dir = config::config_dir().unwrap_or_else(std::env::temp_dir);
    fs::create_dir_all(&dir).context("Failed to create log directory")?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logger")?;

    Ok(path)
}
