//! Alarm engine
//!
//! Owns the alarm list and the firing state machine. The clock ticker
//! drives `check_tick`; the interaction loop drives everything else.
//!
//! At most one alarm is firing at a time: while a snooze/dismiss response
//! is pending, `check_tick` considers no further matches.

use chrono::{Duration, NaiveDateTime};

use super::alarm::{day_of_week, format_hhmm};
use super::{Alarm, AlarmError};
use crate::context::AppConfig;

/// Owns the alarm list, matches ticks against it, and tracks which alarm
/// (if any) is awaiting a snooze-or-dismiss response.
#[derive(Debug)]
pub struct AlarmEngine {
    alarms: Vec<Alarm>,
    next_id: u64,
    /// ID of the alarm currently firing, if any
    firing: Option<u64>,
    max_snoozes: u8,
    snooze_interval_minutes: i64,
}

impl Default for AlarmEngine {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AlarmEngine {
    pub fn new(max_snoozes: u8, snooze_interval_minutes: i64) -> Self {
        Self {
            alarms: Vec::new(),
            next_id: 1,
            firing: None,
            max_snoozes,
            snooze_interval_minutes,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_snoozes, config.snooze_interval_minutes as i64)
    }

    /// Append a new alarm and return its ID.
    ///
    /// No validation: an out-of-range day or malformed time is accepted
    /// and produces an alarm that never matches a tick.
    pub fn create(&mut self, day: i32, time: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alarms.push(Alarm::new(id, day, time));
        id
    }

    /// Alarms in insertion order (the CLI displays 1-based indices)
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn is_firing(&self) -> bool {
        self.firing.is_some()
    }

    /// Remove the alarm at the given 1-based display index.
    ///
    /// Removal is positional: with duplicate `(day, time)` pairs the
    /// displayed slot is the one removed.
    pub fn delete_by_index(&mut self, index: usize) -> Result<Alarm, AlarmError> {
        if index == 0 || index > self.alarms.len() {
            return Err(AlarmError::InvalidIndex {
                index,
                count: self.alarms.len(),
            });
        }
        let removed = self.alarms.remove(index - 1);
        if self.firing == Some(removed.id) {
            self.firing = None;
        }
        Ok(removed)
    }

    /// Match the current tick against the alarm list.
    ///
    /// Returns the first alarm (insertion order) whose `(day, time)`
    /// equals the tick's, marking it as firing. Returns `None` while a
    /// previous match is still awaiting its response; other alarms
    /// matching the same minute are not queued.
    pub fn check_tick(&mut self, now: NaiveDateTime) -> Option<Alarm> {
        if self.firing.is_some() {
            return None;
        }

        let day = day_of_week(now);
        let hhmm = format_hhmm(now);
        let hit = self.alarms.iter().find(|a| a.matches(day, &hhmm))?;

        tracing::debug!(id = hit.id, time = %hit.time, "alarm fired");
        self.firing = Some(hit.id);
        Some(hit.clone())
    }

    /// Reschedule a firing alarm to `now` plus the snooze interval.
    ///
    /// Invoking this ends the firing state for the given alarm whether or
    /// not the snooze succeeds; on failure the alarm itself is unchanged.
    /// Returns the new "HH:MM" on success.
    pub fn snooze(&mut self, id: u64, now: NaiveDateTime) -> Result<String, AlarmError> {
        if self.firing == Some(id) {
            self.firing = None;
        }

        let max = self.max_snoozes;
        let interval = self.snooze_interval_minutes;
        let alarm = self
            .alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AlarmError::NotFound { id })?;

        if alarm.snooze_count >= max {
            return Err(AlarmError::SnoozeLimit { max });
        }

        // Day is untouched: a snooze across midnight keeps the original day.
        alarm.time = format_hhmm(now + Duration::minutes(interval));
        alarm.snooze_count += 1;
        Ok(alarm.time.clone())
    }

    /// Remove an alarm by ID, ending its lifecycle.
    ///
    /// Like `snooze`, invoking this ends the firing state for the alarm.
    pub fn dismiss(&mut self, id: u64) -> Result<Alarm, AlarmError> {
        if self.firing == Some(id) {
            self.firing = None;
        }

        let index = self
            .alarms
            .iter()
            .position(|a| a.id == id)
            .ok_or(AlarmError::NotFound { id })?;
        Ok(self.alarms.remove(index))
    }
}
