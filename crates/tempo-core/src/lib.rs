//! # Tempo Core Library
//!
//! Core business logic for the Tempo productivity timer. The CLI binary is a
//! thin layer over this library; any future GUI shell would reuse the same
//! core unchanged.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine alternating focus and
//!   break countdowns. The caller delivers one `tick()` per second while the
//!   timer is running; the engine itself never blocks and owns no clock.
//! - **Ticker**: the single tick source. At most one tick is ever pending;
//!   every state-mutating command cancels it before taking effect.
//! - **Sessions**: completed countdowns become immutable [`SessionRecord`]s,
//!   appended to an insertion-ordered history.
//! - **Storage**: an opaque key-value [`Store`] the settings and session
//!   history persist through. Writes are fire-and-forget; a missing or
//!   failing store degrades to in-memory defaults, never to an error the
//!   caller sees.
//! - **Stats**: a pure trailing-week aggregation of focus minutes per day.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine
//! - [`Tracker`]: process-scoped wiring of settings, engine, and recorder
//! - [`Store`]: persistence contract with file, memory, and null backends
//! - [`trailing_week`]: daily focus-minute series for the last 7 days

pub mod app;
pub mod error;
pub mod events;
pub mod session;
pub mod settings;
pub mod stats;
pub mod storage;
pub mod timer;

pub use app::Tracker;
pub use error::{CoreError, StorageError};
pub use events::Event;
pub use session::{SessionRecord, SessionRecorder};
pub use settings::{minutes_to_secs, Settings, SettingsStore};
pub use stats::{trailing_week, DailyPoint};
pub use storage::{FileStore, MemoryStore, NullStore, Persister, Store};
pub use timer::{Ticker, TimerEngine, TimerKind};
