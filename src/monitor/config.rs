//! Monitor configuration.
//!
//! Loaded from `config/<name>.json`:
//!
//! ```json
//! {
//!   "CharacterName": "Some Pilot",
//!   "LocalChatMonitor": {},
//!   "OverviewWatcher": { "OverviewColumn": "Name", "TargetsToAlarm": ["Dread Guristas"] }
//! }
//! ```
//!
//! Each bot section is optional, but at least one must be present.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::local_chat::LocalChatMonitor;
use super::overview_watch::OverviewWatcher;
use super::{Bot, MonitorError};

/// Default dump producer executable.
pub const DEFAULT_DUMP_EXECUTABLE: &str = "mem_reader/read-memory-64-bit.exe";

/// Directory holding configuration files.
pub const CONFIG_DIR: &str = "config";

/// Settings of the local chat monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalChatSettings {
    /// Suffix identifying the local chat window.
    #[serde(default = "default_channel_suffix")]
    pub channel_suffix: String,
    /// Standing hint fragments that mark a pilot as friendly.
    #[serde(default = "default_good_standing_patterns")]
    pub good_standing_patterns: Vec<String>,
}

impl Default for LocalChatSettings {
    fn default() -> Self {
        Self {
            channel_suffix: default_channel_suffix(),
            good_standing_patterns: default_good_standing_patterns(),
        }
    }
}

fn default_channel_suffix() -> String {
    "_local".to_string()
}

/// English and East Asian client wordings of friendly standings.
pub fn default_good_standing_patterns() -> Vec<String> {
    ["good standing", "excellent standing", "is in your", "所属", "良好", "優良"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Settings of the overview watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverviewWatchSettings {
    /// Overview column to read.
    pub overview_column: String,
    /// Values of that column to alarm on (case-insensitive).
    pub targets_to_alarm: Vec<String>,
}

/// Full monitor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitorConfig {
    /// Name of the monitored character.
    pub character_name: String,
    /// Local chat monitor, if enabled.
    #[serde(default)]
    pub local_chat_monitor: Option<LocalChatSettings>,
    /// Overview watcher, if enabled.
    #[serde(default)]
    pub overview_watcher: Option<OverviewWatchSettings>,
    /// Seconds between cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Seconds without a successful cycle before alarming.
    #[serde(default = "default_monitor_down_secs")]
    pub monitor_down_secs: u64,
    /// Dump producer executable.
    #[serde(default = "default_dump_executable")]
    pub dump_executable: PathBuf,
}

fn default_poll_interval_secs() -> u64 {
    3
}

fn default_monitor_down_secs() -> u64 {
    30
}

fn default_dump_executable() -> PathBuf {
    PathBuf::from(DEFAULT_DUMP_EXECUTABLE)
}

impl MonitorConfig {
    /// Path of the named configuration file.
    pub fn path_for(name: &str) -> PathBuf {
        Path::new(CONFIG_DIR).join(format!("{}.json", name))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MonitorError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| MonitorError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Parse a configuration document.
    pub fn from_json(text: &str) -> Result<Self, MonitorError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Time between cycles.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Time without success before the monitor-down alarm.
    pub fn monitor_down_after(&self) -> Duration {
        Duration::from_secs(self.monitor_down_secs)
    }

    /// Instantiate the configured bots.
    pub fn build_bots(&self) -> Result<Vec<Box<dyn Bot>>, MonitorError> {
        let mut bots: Vec<Box<dyn Bot>> = Vec::new();

        if let Some(settings) = &self.local_chat_monitor {
            bots.push(Box::new(LocalChatMonitor::new(&self.character_name, settings.clone())));
        }
        if let Some(settings) = &self.overview_watcher {
            bots.push(Box::new(OverviewWatcher::new(settings.clone())));
        }

        if bots.is_empty() {
            return Err(MonitorError::NoBotsConfigured);
        }
        Ok(bots)
    }
}
