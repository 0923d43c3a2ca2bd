//! Overview watcher: alarms when a listed target shows up on the overview.

use tracing::info;

use crate::types::UiTree;

use super::alarm::{Alarm, AlarmKind, AlarmSink};
use super::config::OverviewWatchSettings;
use super::{Bot, MonitorError};

/// Consecutive sightings that still raise an alarm.
pub const ALARM_CYCLES: u32 = 2;

/// Watches one overview column for configured values.
#[derive(Debug, Clone)]
pub struct OverviewWatcher {
    column: String,
    targets: Vec<String>,
    consecutive: u32,
}

impl OverviewWatcher {
    /// Create a watcher.
    pub fn new(settings: OverviewWatchSettings) -> Self {
        Self {
            column: settings.overview_column,
            targets: settings
                .targets_to_alarm
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
            consecutive: 0,
        }
    }

    /// Cycles in a row with a watched target present.
    pub fn consecutive_sightings(&self) -> u32 {
        self.consecutive
    }
}

impl Bot for OverviewWatcher {
    fn name(&self) -> &str {
        "OverviewWatcher"
    }

    fn run(&mut self, tree: &UiTree, sink: &dyn AlarmSink) -> Result<(), MonitorError> {
        if tree.overview.is_empty() {
            return Ok(());
        }

        let values: Vec<String> = tree
            .overview
            .iter()
            .filter_map(|entry| entry.cell(&self.column))
            .map(str::to_lowercase)
            .collect();

        // Rows but no cell in the column: the column is hidden or was
        // momentarily not laid out. Either way this cycle says nothing.
        if values.is_empty() {
            return Err(MonitorError::ColumnNotVisible(self.column.clone()));
        }

        let spotted: Vec<&str> = self
            .targets
            .iter()
            .filter(|t| values.contains(*t))
            .map(String::as_str)
            .collect();

        if spotted.is_empty() {
            self.consecutive = 0;
            return Ok(());
        }

        self.consecutive += 1;
        if self.consecutive <= ALARM_CYCLES {
            info!(targets = ?spotted, "watched targets on overview");
            sink.raise(&Alarm::new(
                self.name(),
                AlarmKind::TargetSpotted,
                1,
                format!("Watched targets on overview: {}", spotted.join(", ")),
            ));
        }

        Ok(())
    }
}
