//! Alarm entries (runtime state)
//!
//! An `Alarm` is a scheduled wake-up tied to a day of the week and a
//! wall-clock minute. It lives in memory for the lifetime of the process;
//! snoozing rewrites its `time`, dismissing removes it from the engine.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// A scheduled alarm
///
/// Created from raw user input. `day` and `time` are stored as given:
/// an out-of-range day or a malformed time string is kept but can never
/// equal a tick's `(day, "HH:MM")`, so the alarm simply never fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    /// Stable identifier assigned by the engine at creation
    pub id: u64,

    /// Day of week, 0 = Sunday through 6 = Saturday
    pub day: i32,

    /// "HH:MM" in 24-hour format; rewritten by snooze
    pub time: String,

    /// How many times this alarm has been snoozed
    pub snooze_count: u8,
}

impl Alarm {
    pub fn new(id: u64, day: i32, time: impl Into<String>) -> Self {
        Self {
            id,
            day,
            time: time.into(),
            snooze_count: 0,
        }
    }

    /// Check whether this alarm matches the given tick coordinates
    pub fn matches(&self, day: i32, hhmm: &str) -> bool {
        self.day == day && self.time == hhmm
    }
}

/// Day-of-week of a timestamp using the 0 = Sunday convention
pub(crate) fn day_of_week(now: NaiveDateTime) -> i32 {
    now.weekday().num_days_from_sunday() as i32
}

/// Format a timestamp's wall-clock minute as "HH:MM"
pub(crate) fn format_hhmm(now: NaiveDateTime) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}
