//! Snapshot consumers.
//!
//! A [`Monitor`] re-runs the dump producer on a fixed cadence, parses each
//! dump into a [`UiTree`](crate::UiTree) and hands it to a set of [`Bot`]s.
//! Bots keep whatever cross-cycle state they need (debounce counters) and
//! raise [`Alarm`]s through an [`AlarmSink`]. The parser itself stays
//! stateless.

pub mod alarm;
pub mod config;
pub mod dump;
pub mod local_chat;
pub mod overview_watch;
pub mod runner;

use std::path::PathBuf;

use crate::error::ParseError;
use crate::types::UiTree;

pub use alarm::{Alarm, AlarmKind, AlarmSink, LogAlarmSink, RecordingAlarmSink};
pub use config::{LocalChatSettings, MonitorConfig, OverviewWatchSettings};
pub use dump::{dump_file_name, DumpSource, FileDump, ProcessDump};
pub use local_chat::LocalChatMonitor;
pub use overview_watch::OverviewWatcher;
pub use runner::{CycleOutcome, Monitor};

/// Error type for monitor operations.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The configuration enables no bot.
    #[error("No bot is configured")]
    NoBotsConfigured,
    /// The dump producer could not be started.
    #[error("Failed to start dump producer: {0}")]
    Spawn(#[source] std::io::Error),
    /// The dump producer exited unsuccessfully.
    #[error("Dump producer failed (exit code {code:?}): {stderr}")]
    DumpFailed {
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
    /// The dump could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// No local chat window is open.
    #[error("Local chat window not found")]
    LocalChatMissing,
    /// The configured overview column is not shown.
    #[error("Column {0:?} is not visible on the overview")]
    ColumnNotVisible(String),
}

impl MonitorError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A consumer of snapshots.
///
/// Called once per cycle with a fresh snapshot. Implementations own their
/// cross-cycle state.
pub trait Bot {
    /// Name used in logs and alarms.
    fn name(&self) -> &str;

    /// Inspect one snapshot.
    fn run(&mut self, tree: &UiTree, sink: &dyn AlarmSink) -> Result<(), MonitorError>;
}
