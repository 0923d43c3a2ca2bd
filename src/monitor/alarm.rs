//! Alarms raised by bots and the monitor.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// What an alarm is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmKind {
    /// Pilots without good standing are in local.
    Hostiles,
    /// A watched target appeared on the overview.
    TargetSpotted,
    /// No successful cycle for too long.
    MonitorDown,
}

impl fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hostiles => write!(f, "hostiles"),
            Self::TargetSpotted => write!(f, "target_spotted"),
            Self::MonitorDown => write!(f, "monitor_down"),
        }
    }
}

/// An alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    /// Who raised it.
    pub source: String,
    /// What it is about.
    pub kind: AlarmKind,
    /// How many audible signals to give.
    pub beeps: u32,
    /// Human-readable detail.
    pub message: String,
}

impl Alarm {
    /// Create a new alarm.
    pub fn new(source: impl Into<String>, kind: AlarmKind, beeps: u32, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind,
            beeps,
            message: message.into(),
        }
    }
}

/// Destination for alarms.
pub trait AlarmSink {
    /// Deliver an alarm.
    fn raise(&self, alarm: &Alarm);
}

impl<T: AlarmSink + ?Sized> AlarmSink for std::sync::Arc<T> {
    fn raise(&self, alarm: &Alarm) {
        (**self).raise(alarm);
    }
}

/// Logs alarms and optionally rings the terminal bell.
#[derive(Debug, Default)]
pub struct LogAlarmSink {
    bell: bool,
}

impl LogAlarmSink {
    /// Create a sink. With `bell`, each beep writes BEL to stderr.
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl AlarmSink for LogAlarmSink {
    fn raise(&self, alarm: &Alarm) {
        warn!(
            source = %alarm.source,
            kind = %alarm.kind,
            beeps = alarm.beeps,
            "{}",
            alarm.message
        );

        if self.bell {
            let mut stderr = std::io::stderr().lock();
            for _ in 0..alarm.beeps {
                let _ = stderr.write_all(b"\x07");
            }
            let _ = stderr.flush();
        }
    }
}

/// In-memory sink for testing.
#[derive(Debug, Default)]
pub struct RecordingAlarmSink {
    /// Alarms raised so far.
    pub alarms: Mutex<Vec<Alarm>>,
}

impl AlarmSink for RecordingAlarmSink {
    fn raise(&self, alarm: &Alarm) {
        if let Ok(mut alarms) = self.alarms.lock() {
            alarms.push(alarm.clone());
        }
    }
}

impl RecordingAlarmSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of alarms of the given kind.
    pub fn count(&self, kind: AlarmKind) -> usize {
        self.alarms
            .lock()
            .map(|alarms| alarms.iter().filter(|a| a.kind == kind).count())
            .unwrap_or(0)
    }

    /// All alarms raised so far.
    pub fn take(&self) -> Vec<Alarm> {
        self.alarms
            .lock()
            .map(|mut alarms| std::mem::take(&mut *alarms))
            .unwrap_or_default()
    }
}
