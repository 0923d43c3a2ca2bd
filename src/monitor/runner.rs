//! Polling cycle.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{debug, error, warn};

use super::alarm::{Alarm, AlarmKind, AlarmSink};
use super::dump::DumpSource;
use super::{Bot, MonitorError};

/// Beeps for the monitor-down alarm.
const MONITOR_DOWN_BEEPS: u32 = 3;

/// Result of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The dump was read and every bot succeeded.
    Success,
    /// The dump was read but at least one bot failed.
    BotFailed,
    /// The dump could not be read or parsed.
    ReadFailed,
}

/// Reads a snapshot per cycle and runs every bot on it.
pub struct Monitor<S: DumpSource> {
    source: S,
    bots: Vec<Box<dyn Bot>>,
    sink: Box<dyn AlarmSink>,
    monitor_down_after: Duration,
    debug_dir: Option<PathBuf>,
    last_success: DateTime<Local>,
}

impl<S: DumpSource> Monitor<S> {
    /// Create a monitor. The down timer starts now.
    pub fn new(source: S, bots: Vec<Box<dyn Bot>>, sink: Box<dyn AlarmSink>, monitor_down_after: Duration) -> Self {
        Self {
            source,
            bots,
            sink,
            monitor_down_after,
            debug_dir: None,
            last_success: Local::now(),
        }
    }

    /// Keep a copy of the dump in `dir` whenever a cycle fails.
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    /// Time of the last fully successful cycle.
    pub fn last_success(&self) -> DateTime<Local> {
        self.last_success
    }

    /// The dump source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Raise the monitor-down alarm if no cycle succeeded for too long.
    ///
    /// Returns true if the alarm was raised.
    pub fn check_liveness(&self, now: DateTime<Local>) -> bool {
        let silent = (now - self.last_success).to_std().unwrap_or_default();
        if silent <= self.monitor_down_after {
            return false;
        }

        self.sink.raise(&Alarm::new(
            "Monitor",
            AlarmKind::MonitorDown,
            MONITOR_DOWN_BEEPS,
            format!(
                "Monitor is down. Last scan: {}",
                self.last_success.format("%Y-%m-%d %H:%M:%S")
            ),
        ));
        true
    }

    /// Run one cycle.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        self.run_cycle_at(Local::now())
    }

    /// Run one cycle, recording `now` as its time.
    pub fn run_cycle_at(&mut self, now: DateTime<Local>) -> CycleOutcome {
        self.check_liveness(now);

        let tree = match self.source.read() {
            Ok(tree) => tree,
            Err(e) => {
                error!(error = %e, "failed to read UI tree");
                self.save_debug_copy(now);
                return CycleOutcome::ReadFailed;
            }
        };
        debug!(fingerprint = %tree.fingerprint(), "snapshot read");

        let mut all_succeeded = true;
        for bot in self.bots.iter_mut() {
            if let Err(e) = bot.run(&tree, self.sink.as_ref()) {
                warn!(bot = bot.name(), error = %e, "bot failed execution");
                all_succeeded = false;
            }
        }

        if all_succeeded {
            self.last_success = now;
            CycleOutcome::Success
        } else {
            self.save_debug_copy(now);
            CycleOutcome::BotFailed
        }
    }

    fn save_debug_copy(&self, now: DateTime<Local>) {
        let Some(dir) = &self.debug_dir else {
            return;
        };
        let target = dir.join(format!("debug-{}.json", now.timestamp_millis()));
        let result = std::fs::create_dir_all(dir)
            .and_then(|_| std::fs::copy(self.source.output_file(), &target));
        match result {
            Ok(_) => debug!(path = %target.display(), "saved dump for debugging"),
            Err(e) => warn!(
                error = %MonitorError::io(&target, e),
                "could not save dump for debugging"
            ),
        }
    }
}
