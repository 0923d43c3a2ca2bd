//! Local chat monitor: alarms while pilots without good standing are in local.

use tracing::{info, warn};

use crate::types::{ChatUserEntity, UiTree};

use super::alarm::{Alarm, AlarmKind, AlarmSink};
use super::config::LocalChatSettings;
use super::{Bot, MonitorError};

/// Consecutive identical hostile sightings after which alarms stop.
pub const MAX_REPEATED_ALARMS: u32 = 30;

/// Beeps per hostile alarm.
const HOSTILE_BEEPS: u32 = 2;

/// Watches the local chat roster.
#[derive(Debug, Clone)]
pub struct LocalChatMonitor {
    character: String,
    channel_suffix: String,
    good_patterns: Vec<String>,
    previous_hostiles: Vec<ChatUserEntity>,
    consecutive: u32,
}

impl LocalChatMonitor {
    /// Create a monitor for the given character.
    pub fn new(character: impl Into<String>, settings: LocalChatSettings) -> Self {
        Self {
            character: character.into(),
            channel_suffix: settings.channel_suffix,
            good_patterns: settings
                .good_standing_patterns
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            previous_hostiles: Vec::new(),
            consecutive: 0,
        }
    }

    /// How many cycles in a row the same hostiles were seen, minus one.
    pub fn consecutive_alarms(&self) -> u32 {
        self.consecutive
    }

    /// True if the user is neither the monitored character nor friendly.
    pub fn is_hostile(&self, user: &ChatUserEntity) -> bool {
        if user.name == self.character {
            return false;
        }
        match &user.standing {
            None => true,
            Some(standing) => {
                let standing = standing.to_lowercase();
                !self.good_patterns.iter().any(|p| standing.contains(p.as_str()))
            }
        }
    }
}

impl Bot for LocalChatMonitor {
    fn name(&self) -> &str {
        "LocalChatMonitor"
    }

    fn run(&mut self, tree: &UiTree, sink: &dyn AlarmSink) -> Result<(), MonitorError> {
        let local = tree
            .chat_window_with_suffix(&self.channel_suffix)
            .ok_or(MonitorError::LocalChatMissing)?;

        let hostiles: Vec<ChatUserEntity> = local
            .user_list
            .iter()
            .filter(|u| self.is_hostile(u))
            .cloned()
            .collect();

        if hostiles.is_empty() {
            if self.consecutive != 0 {
                info!("local is clear");
            }
            self.consecutive = 0;
            return Ok(());
        }

        if hostiles == self.previous_hostiles {
            self.consecutive += 1;
        } else {
            self.previous_hostiles = hostiles.clone();
            self.consecutive = 0;
        }

        let names: Vec<&str> = hostiles.iter().map(|h| h.name.as_str()).collect();
        warn!(
            hostiles = ?names,
            consecutive = self.consecutive,
            "hostiles in local"
        );

        if self.consecutive < MAX_REPEATED_ALARMS {
            sink.raise(&Alarm::new(
                self.name(),
                AlarmKind::Hostiles,
                HOSTILE_BEEPS,
                format!("{} hostile(s) in local: {}", names.len(), names.join(", ")),
            ));
        }

        Ok(())
    }
}
