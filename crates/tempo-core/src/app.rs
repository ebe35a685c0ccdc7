//! Process-scoped wiring of settings, engine, and recorder.
//!
//! One [`Tracker`] instance owns all mutable timer state for the process and
//! is passed explicitly to whatever drives it (CLI loop, GUI shell). All
//! mutation flows through a single sequential command/tick stream; drivers in
//! concurrent environments must serialize access (single owner or mutex).

use chrono::NaiveDate;

use crate::events::Event;
use crate::session::{SessionRecord, SessionRecorder};
use crate::settings::{minutes_to_secs, Settings, SettingsStore};
use crate::stats::{trailing_week, DailyPoint};
use crate::storage::{Persister, Store};
use crate::timer::{TimerEngine, TimerKind};

/// The timer application: countdown state machine plus its collaborators.
#[derive(Debug)]
pub struct Tracker {
    settings: SettingsStore,
    engine: TimerEngine,
    recorder: SessionRecorder,
}

impl Tracker {
    /// Load settings and history from the store and build the initial state:
    /// idle, focus kind, full focus duration remaining.
    pub fn load(store: &dyn Store, persister: Persister) -> Self {
        let settings = SettingsStore::load(store, persister.clone());
        let engine = TimerEngine::new(settings.get());
        let recorder = SessionRecorder::load(store, persister);
        Self {
            settings,
            engine,
            recorder,
        }
    }

    // ── Timer commands ───────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.engine.start()
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.engine.pause()
    }

    pub fn toggle(&mut self) -> Event {
        self.engine.toggle()
    }

    pub fn reset(&mut self) -> Event {
        self.engine.reset(self.settings.get())
    }

    pub fn switch_kind(&mut self, kind: TimerKind) -> Event {
        self.engine.switch_kind(kind, self.settings.get())
    }

    /// Deliver one tick. A completion is routed into the recorder before the
    /// event is returned.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick(self.settings.get());
        if let Some(Event::SessionCompleted {
            kind,
            duration_secs,
            ..
        }) = &event
        {
            self.recorder.record_completion(*kind, *duration_secs);
        }
        event
    }

    // ── Settings commands ────────────────────────────────────────────

    /// Update the focus duration from raw minutes input (clamp-then-scale).
    pub fn set_focus_minutes(&mut self, raw: &str) {
        self.settings.set_focus_duration_secs(minutes_to_secs(raw));
    }

    /// Update the break duration from raw minutes input (clamp-then-scale).
    pub fn set_break_minutes(&mut self, raw: &str) {
        self.settings.set_break_duration_secs(minutes_to_secs(raw));
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        self.settings.set_notifications_enabled(enabled);
    }

    pub fn dismiss_notice(&mut self) {
        self.recorder.dismiss_notice();
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn kind(&self) -> TimerKind {
        self.engine.kind()
    }

    pub fn remaining_secs(&self) -> u64 {
        self.engine.remaining_secs()
    }

    pub fn settings(&self) -> &Settings {
        self.settings.get()
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        self.recorder.sessions()
    }

    pub fn just_completed(&self) -> Option<&SessionRecord> {
        self.recorder.just_completed()
    }

    pub fn snapshot(&self) -> Event {
        self.engine.snapshot(self.settings.get())
    }

    /// Daily focus minutes for the 7 days ending on `today`, oldest first.
    pub fn week(&self, today: NaiveDate) -> Vec<DailyPoint> {
        trailing_week(self.recorder.sessions(), today)
    }

    /// Persist settings and history synchronously (process-exit boundary).
    pub fn save(&self, store: &dyn Store) -> Result<(), crate::error::CoreError> {
        self.settings.save(store)?;
        self.recorder.save(store)?;
        Ok(())
    }
}
