mod engine;
mod ticker;

pub use engine::TimerEngine;
pub use ticker::Ticker;

use serde::{Deserialize, Serialize};

/// The two countdown kinds, each with its own configured duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    Focus,
    Break,
}

impl TimerKind {
    pub fn label(self) -> &'static str {
        match self {
            TimerKind::Focus => "focus",
            TimerKind::Break => "break",
        }
    }
}

impl std::fmt::Display for TimerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
