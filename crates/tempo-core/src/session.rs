//! Completed-session records and the recorder that persists them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{Persister, Store, SESSIONS_KEY};
use crate::timer::TimerKind;

/// One completed countdown. Immutable once created; the history is
/// append-only and never pruned by this core.
///
/// Wire shape: `{"timestamp": <epoch millis>, "type": "focus"|"break",
/// "duration": <seconds>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub completed_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TimerKind,
    /// The configured duration for `kind` at completion time, in seconds.
    #[serde(rename = "duration")]
    pub duration_secs: u64,
}

/// Owns the in-memory session history and appends completed countdowns.
///
/// Appends are logical: the transport rewrites the whole collection on every
/// completion. The in-memory history stays authoritative if a write fails.
#[derive(Debug)]
pub struct SessionRecorder {
    sessions: Vec<SessionRecord>,
    persister: Persister,
    /// Transient "just completed" notice, cleared only by explicit dismissal
    /// or overwritten by the next completion. Not persisted.
    just_completed: Option<SessionRecord>,
}

impl SessionRecorder {
    /// Load persisted history, falling back to an empty history when the
    /// store has none or the payload does not parse.
    pub fn load(store: &dyn Store, persister: Persister) -> Self {
        let sessions = match store.get(SESSIONS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!(%err, "stored session history unreadable; starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "session history unavailable from storage; starting empty");
                Vec::new()
            }
        };
        Self {
            sessions,
            persister,
            just_completed: None,
        }
    }

    /// Append a completed countdown stamped with the current instant and
    /// queue a write of the updated history.
    pub fn record_completion(&mut self, kind: TimerKind, duration_secs: u64) -> SessionRecord {
        let record = SessionRecord {
            completed_at: Utc::now(),
            kind,
            duration_secs,
        };
        self.sessions.push(record.clone());
        self.just_completed = Some(record.clone());
        self.persist();
        record
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    /// The pending completion notice, if the user has not dismissed it.
    pub fn just_completed(&self) -> Option<&SessionRecord> {
        self.just_completed.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.just_completed = None;
    }

    fn persist(&self) {
        match serde_json::to_string(&self.sessions) {
            Ok(json) => self.persister.write(SESSIONS_KEY, json),
            Err(err) => warn!(%err, "failed to serialize session history"),
        }
    }

    /// Write the current history synchronously. Used at process-exit
    /// boundaries where a queued write could be lost.
    pub fn save(&self, store: &dyn Store) -> Result<(), crate::error::CoreError> {
        let json = serde_json::to_string(&self.sessions)?;
        store.set(SESSIONS_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    #[test]
    fn record_appends_in_insertion_order() {
        let store = MemoryStore::new();
        let mut recorder = SessionRecorder::load(&store, Persister::disconnected());
        recorder.record_completion(TimerKind::Focus, 1500);
        recorder.record_completion(TimerKind::Break, 300);
        let kinds: Vec<_> = recorder.sessions().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![TimerKind::Focus, TimerKind::Break]);
    }

    #[test]
    fn notice_is_set_and_dismissed() {
        let store = MemoryStore::new();
        let mut recorder = SessionRecorder::load(&store, Persister::disconnected());
        assert!(recorder.just_completed().is_none());
        recorder.record_completion(TimerKind::Focus, 1500);
        assert_eq!(recorder.just_completed().unwrap().kind, TimerKind::Focus);
        recorder.dismiss_notice();
        assert!(recorder.just_completed().is_none());
    }

    #[test]
    fn next_completion_overwrites_notice() {
        let store = MemoryStore::new();
        let mut recorder = SessionRecorder::load(&store, Persister::disconnected());
        recorder.record_completion(TimerKind::Focus, 1500);
        recorder.record_completion(TimerKind::Break, 300);
        assert_eq!(recorder.just_completed().unwrap().kind, TimerKind::Break);
    }

    #[test]
    fn wire_shape_matches_storage_contract() {
        let record = SessionRecord {
            completed_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            kind: TimerKind::Focus,
            duration_secs: 1500,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(json["type"], "focus");
        assert_eq!(json["duration"], 1500);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let mut recorder = SessionRecorder::load(&store, Persister::disconnected());
        recorder.record_completion(TimerKind::Focus, 1500);
        recorder.save(&store).unwrap();

        let reloaded = SessionRecorder::load(&store, Persister::disconnected());
        assert_eq!(reloaded.sessions(), recorder.sessions());
    }

    #[test]
    fn garbage_history_starts_empty() {
        let store = MemoryStore::new();
        store.set(SESSIONS_KEY, "{broken").unwrap();
        let recorder = SessionRecorder::load(&store, Persister::disconnected());
        assert!(recorder.sessions().is_empty());
    }
}
