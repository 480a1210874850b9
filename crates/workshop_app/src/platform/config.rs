use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use engine_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use workshop_engine::FetchSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `local_storage.json`.
    pub storage_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub pokemon_endpoint: String,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Drop lookups that were superseded by a newer one.
    pub ignore_stale_responses: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            storage_dir: PathBuf::from(".workshop"),
            log_destination: LogDestination::File,
            log_file: PathBuf::from("workshop.log"),
            log_level: "info".to_string(),
            pokemon_endpoint: fetch.endpoint,
            request_timeout_ms: fetch.request_timeout.as_millis() as u64,
            connect_timeout_ms: fetch.connect_timeout.as_millis() as u64,
            ignore_stale_responses: false,
        }
    }
}

impl AppConfig {
    /// Reads a RON config file; a missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {:?}", path));
            }
        };
        ron::from_str(&content).with_context(|| format!("parsing config {:?}", path))
    }

    /// Unknown level names fall back to `info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            endpoint: self.pokemon_endpoint.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            ..FetchSettings::default()
        }
    }
}
