//! Timer engine implementation.
//!
//! The timer engine is a tick-driven state machine. It does not use internal
//! threads or clocks - the caller delivers one `tick()` per second while the
//! timer is running (see [`super::Ticker`]).
//!
//! ## State Transitions
//!
//! ```text
//! Idle-Focus <-> Running-Focus
//!     ^               |
//!     | switch        | completion (auto-restarts, stays Running)
//!     v               v
//! Idle-Break <-> Running-Break
//! ```
//!
//! Durations live in [`Settings`] and are read only when a countdown is
//! (re)armed: at construction, `reset`, `switch_kind`, and completion. A
//! settings change never resizes an in-progress countdown.

use chrono::Utc;

use super::TimerKind;
use crate::events::Event;
use crate::settings::Settings;

/// Core countdown state machine.
///
/// All commands are total over the defined states: a command that does not
/// apply (e.g. `start` while running) returns `None` rather than erroring.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    kind: TimerKind,
    /// Seconds left in the current countdown. Never exceeds the configured
    /// duration for `kind`; never reaches 0 (completion fires first).
    remaining_secs: u64,
    running: bool,
}

impl TimerEngine {
    /// Create a new engine: idle, focus kind, full focus duration remaining.
    pub fn new(settings: &Settings) -> Self {
        Self {
            kind: TimerKind::Focus,
            remaining_secs: settings.focus_duration_secs,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, settings: &Settings) -> Event {
        Event::StateSnapshot {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            total_secs: settings.duration_for(self.kind),
            running: self.running,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None; // Already running.
        }
        self.running = true;
        Some(Event::TimerStarted {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) -> Event {
        self.running = !self.running;
        if self.running {
            Event::TimerStarted {
                kind: self.kind,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        } else {
            Event::TimerPaused {
                kind: self.kind,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        }
    }

    /// Stop and rewind the current kind to its full configured duration.
    /// Idempotent.
    pub fn reset(&mut self, settings: &Settings) -> Event {
        self.running = false;
        self.remaining_secs = settings.duration_for(self.kind);
        Event::TimerReset {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Switch the active kind. Always stops: switching while active is a
    /// deliberate pause, not a resume.
    pub fn switch_kind(&mut self, kind: TimerKind, settings: &Settings) -> Event {
        self.running = false;
        self.kind = kind;
        self.remaining_secs = settings.duration_for(kind);
        Event::KindSwitched {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Consume one tick. Only meaningful while running; a stale tick that
    /// arrives after a pause is ignored.
    ///
    /// Completion fires when the pre-tick remainder is <= 1 second: the
    /// engine emits `SessionCompleted` for the current kind at its configured
    /// duration, rewinds to that full duration, and keeps running. It does
    /// not auto-switch kind.
    pub fn tick(&mut self, settings: &Settings) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs <= 1 {
            let duration_secs = settings.duration_for(self.kind);
            self.remaining_secs = duration_secs;
            return Some(Event::SessionCompleted {
                kind: self.kind,
                duration_secs,
                at: Utc::now(),
            });
        }
        self.remaining_secs -= 1;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn starts_idle_focus_at_full_duration() {
        let engine = TimerEngine::new(&settings());
        assert_eq!(engine.kind(), TimerKind::Focus);
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(!engine.is_running());
    }

    #[test]
    fn start_pause_toggle() {
        let mut engine = TimerEngine::new(&settings());
        assert!(engine.start().is_some());
        assert!(engine.is_running());
        assert!(engine.start().is_none()); // No-op while running.

        assert!(engine.pause().is_some());
        assert!(!engine.is_running());
        assert!(engine.pause().is_none());

        engine.toggle();
        assert!(engine.is_running());
        engine.toggle();
        assert!(!engine.is_running());
    }

    #[test]
    fn tick_decrements_by_exactly_one() {
        let s = settings();
        let mut engine = TimerEngine::new(&s);
        engine.start();
        for expected in (1..1500u64).rev() {
            assert!(engine.tick(&s).is_none());
            assert_eq!(engine.remaining_secs(), expected);
        }
    }

    #[test]
    fn tick_while_idle_is_ignored() {
        let s = settings();
        let mut engine = TimerEngine::new(&s);
        assert!(engine.tick(&s).is_none());
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn completion_restarts_same_kind_still_running() {
        let s = settings();
        let mut engine = TimerEngine::new(&s);
        engine.start();
        for _ in 0..1499 {
            engine.tick(&s);
        }
        assert_eq!(engine.remaining_secs(), 1);
        let event = engine.tick(&s);
        match event {
            Some(Event::SessionCompleted {
                kind,
                duration_secs,
                ..
            }) => {
                assert_eq!(kind, TimerKind::Focus);
                assert_eq!(duration_secs, 1500);
            }
            other => panic!("Expected SessionCompleted, got {other:?}"),
        }
        assert!(engine.is_running());
        assert_eq!(engine.kind(), TimerKind::Focus);
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn reset_is_idempotent() {
        let s = settings();
        let mut engine = TimerEngine::new(&s);
        engine.start();
        engine.tick(&s);
        engine.tick(&s);
        engine.reset(&s);
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_secs(), 1500);
        engine.reset(&s);
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn switch_kind_stops_and_loads_target_duration() {
        let s = settings();
        let mut engine = TimerEngine::new(&s);
        engine.start();
        for _ in 0..600 {
            engine.tick(&s);
        }
        assert_eq!(engine.remaining_secs(), 900);
        engine.switch_kind(TimerKind::Break, &s);
        assert!(!engine.is_running());
        assert_eq!(engine.kind(), TimerKind::Break);
        assert_eq!(engine.remaining_secs(), 300);
    }

    #[test]
    fn settings_change_applies_lazily() {
        let mut s = settings();
        let mut engine = TimerEngine::new(&s);
        engine.start();
        engine.tick(&s);
        s.focus_duration_secs = 600;
        // In-progress countdown keeps its remainder.
        engine.tick(&s);
        assert_eq!(engine.remaining_secs(), 1498);
        // The new duration lands on the next reset.
        engine.reset(&s);
        assert_eq!(engine.remaining_secs(), 600);
    }

    proptest! {
        /// Under any command sequence, the remainder stays within
        /// (0, configured duration] for the active kind.
        #[test]
        fn remainder_stays_in_bounds(cmds in prop::collection::vec(0..6u8, 0..300)) {
            let s = settings();
            let mut engine = TimerEngine::new(&s);
            for cmd in cmds {
                match cmd {
                    0 => { engine.start(); }
                    1 => { engine.pause(); }
                    2 => { engine.toggle(); }
                    3 => { engine.reset(&s); }
                    4 => { engine.switch_kind(TimerKind::Break, &s); }
                    _ => { engine.tick(&s); }
                }
                prop_assert!(engine.remaining_secs() >= 1);
                prop_assert!(engine.remaining_secs() <= s.duration_for(engine.kind()));
            }
        }
    }
}
