//! User-configurable durations and notification preference.
//!
//! Settings persist under the `settings` key on every change. Wire field
//! names and units (seconds) are part of the storage contract and must not
//! drift. Duration changes never resize an in-progress countdown; the engine
//! re-reads them only at reset, switch, and completion.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{Persister, Store, SETTINGS_KEY};
use crate::timer::TimerKind;

/// Convert a raw minutes string from the user into stored seconds.
///
/// Non-numeric, zero, and negative input all coerce to 1 minute before the
/// 60-multiplier: `"0"` -> 60, `"abc"` -> 60, `"25"` -> 1500.
///
/// Uses saturating arithmetic: absurdly large minute values clamp to
/// `u64::MAX` seconds instead of overflowing.
pub fn minutes_to_secs(raw: &str) -> u64 {
    let minutes = raw.trim().parse::<i64>().unwrap_or(0).max(1) as u64;
    minutes.saturating_mul(60)
}

/// Configured durations and notification preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Focus countdown length in seconds. At least 1.
    #[serde(rename = "focusDuration", default = "default_focus_secs")]
    pub focus_duration_secs: u64,
    /// Break countdown length in seconds. At least 1.
    #[serde(rename = "breakDuration", default = "default_break_secs")]
    pub break_duration_secs: u64,
    #[serde(rename = "notifications", default = "default_true")]
    pub notifications_enabled: bool,
}

fn default_focus_secs() -> u64 {
    25 * 60
}
fn default_break_secs() -> u64 {
    5 * 60
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_duration_secs: default_focus_secs(),
            break_duration_secs: default_break_secs(),
            notifications_enabled: true,
        }
    }
}

impl Settings {
    /// Configured duration in seconds for the given kind.
    pub fn duration_for(&self, kind: TimerKind) -> u64 {
        match kind {
            TimerKind::Focus => self.focus_duration_secs,
            TimerKind::Break => self.break_duration_secs,
        }
    }
}

/// Owns the live [`Settings`] value and persists every mutation.
#[derive(Debug)]
pub struct SettingsStore {
    settings: Settings,
    persister: Persister,
}

impl SettingsStore {
    /// Load persisted settings, falling back to defaults when the store has
    /// none or the payload does not parse. A field missing from an otherwise
    /// valid payload defaults individually.
    pub fn load(store: &dyn Store, persister: Persister) -> Self {
        let settings = match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!(%err, "stored settings unreadable; using defaults");
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(err) => {
                warn!(%err, "settings unavailable from storage; using defaults");
                Settings::default()
            }
        };
        Self {
            settings,
            persister,
        }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Set the focus duration in seconds, clamped to >= 1.
    pub fn set_focus_duration_secs(&mut self, secs: u64) {
        self.settings.focus_duration_secs = secs.max(1);
        self.persist();
    }

    /// Set the break duration in seconds, clamped to >= 1.
    pub fn set_break_duration_secs(&mut self, secs: u64) {
        self.settings.break_duration_secs = secs.max(1);
        self.persist();
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.settings.notifications_enabled = enabled;
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.settings) {
            Ok(json) => self.persister.write(SETTINGS_KEY, json),
            Err(err) => warn!(%err, "failed to serialize settings"),
        }
    }

    /// Write the current settings synchronously. Used at process-exit
    /// boundaries where a queued write could be lost.
    pub fn save(&self, store: &dyn Store) -> Result<(), crate::error::CoreError> {
        let json = serde_json::to_string(&self.settings)?;
        store.set(SETTINGS_KEY, &json)?;
        Ok(())
    }
}
