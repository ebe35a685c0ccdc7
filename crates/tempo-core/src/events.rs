use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerKind;

/// Every state change in the timer produces an Event.
/// The CLI prints these as JSON lines; a GUI shell would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        kind: TimerKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        kind: TimerKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        kind: TimerKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Active kind changed; always lands in a paused state.
    KindSwitched {
        kind: TimerKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A countdown reached zero. The timer restarts the same kind at its
    /// full configured duration and keeps running.
    SessionCompleted {
        kind: TimerKind,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        kind: TimerKind,
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        at: DateTime<Utc>,
    },
}
