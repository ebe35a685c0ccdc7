//! Trailing-week aggregation of focus minutes.
//!
//! Derived on every read; there is no cached series to invalidate.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::session::SessionRecord;
use crate::timer::TimerKind;

/// Focus minutes for one calendar day, labeled with its short weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub day: String,
    pub focus_minutes: u64,
}

/// Total focus minutes per day for the 7 calendar days ending on `today`,
/// oldest first.
///
/// Sessions bucket by calendar-day equality in local time. Per-day totals
/// sum focus durations and round to the nearest whole minute.
pub fn trailing_week(sessions: &[SessionRecord], today: NaiveDate) -> Vec<DailyPoint> {
    (0..7)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let focus_secs: f64 = sessions
                .iter()
                .filter(|s| s.kind == TimerKind::Focus)
                .filter(|s| s.completed_at.with_timezone(&Local).date_naive() == day)
                .map(|s| s.duration_secs as f64)
                .sum();
            DailyPoint {
                day: day.weekday().to_string(),
                focus_minutes: (focus_secs / 60.0).round() as u64,
            }
        })
        .collect()
}
