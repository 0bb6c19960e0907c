//! Tests for the alarm engine
//!
//! Verifies tick matching, the firing state machine, and snooze/dismiss
//! bookkeeping against fixed timestamps.

use chrono::{NaiveDate, NaiveDateTime};

use super::AlarmEngine;
use super::error::AlarmError;

/// Engine with the default budget (3 snoozes, 5-minute interval)
fn make_engine() -> AlarmEngine {
    AlarmEngine::new(3, 5)
}

/// 2024-01-03 was a Wednesday (day 3 in the 0 = Sunday convention)
fn wednesday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 3)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn create_appends_one_unsnoozed_alarm() {
    let mut engine = make_engine();

    let id = engine.create(1, "23:30");

    assert_eq!(engine.alarms().len(), 1);
    let alarm = &engine.alarms()[0];
    assert_eq!(alarm.id, id);
    assert_eq!(alarm.day, 1);
    assert_eq!(alarm.time, "23:30");
    assert_eq!(alarm.snooze_count, 0);
}

#[test]
fn tick_fires_exact_match() {
    let mut engine = make_engine();
    engine.create(3, "08:00");

    let fired = engine.check_tick(wednesday_at(8, 0));

    assert!(engine.is_firing());
    assert_eq!(fired.expect("alarm should fire").time, "08:00");
}

#[test]
fn tick_ignores_wrong_day_or_minute() {
    let mut engine = make_engine();
    engine.create(3, "08:00");

    // Right minute, wrong day (2024-01-04 is a Thursday)
    let thursday = NaiveDate::from_ymd_opt(2024, 1, 4)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    assert!(engine.check_tick(thursday).is_none());

    // Right day, wrong minute
    assert!(engine.check_tick(wednesday_at(8, 1)).is_none());
    assert!(!engine.is_firing());
}

#[test]
fn tick_is_noop_while_firing() {
    let mut engine = make_engine();
    engine.create(3, "08:00");
    engine.create(3, "08:00");

    let first = engine.check_tick(wednesday_at(8, 0)).unwrap();

    // Second matching alarm must not fire while the first awaits a response
    assert!(engine.check_tick(wednesday_at(8, 0)).is_none());
    assert!(engine.is_firing());
    assert_eq!(first.id, engine.alarms()[0].id, "first match wins");
}

#[test]
fn first_match_wins_in_insertion_order() {
    let mut engine = make_engine();
    let early = engine.create(3, "08:00");
    engine.create(3, "08:00");

    let fired = engine.check_tick(wednesday_at(8, 0)).unwrap();
    assert_eq!(fired.id, early);
}

#[test]
fn snooze_reschedules_from_now() {
    let mut engine = make_engine();
    let id = engine.create(3, "08:00");
    engine.check_tick(wednesday_at(8, 0)).unwrap();

    let new_time = engine.snooze(id, wednesday_at(8, 0)).unwrap();

    assert_eq!(new_time, "08:05");
    assert_eq!(engine.alarms()[0].snooze_count, 1);
    assert!(!engine.is_firing(), "snooze ends the firing state");
}

#[test]
fn snooze_applies_configured_interval() {
    let mut engine = AlarmEngine::new(3, 10);
    let id = engine.create(3, "08:00");

    let new_time = engine.snooze(id, wednesday_at(8, 0)).unwrap();
    assert_eq!(new_time, "08:10");
}

#[test]
fn snooze_rolls_over_midnight_without_changing_day() {
    let mut engine = make_engine();
    let id = engine.create(3, "23:58");

    let new_time = engine.snooze(id, wednesday_at(23, 58)).unwrap();

    assert_eq!(new_time, "00:03");
    assert_eq!(engine.alarms()[0].day, 3);
}

#[test]
fn snooze_never_exceeds_budget() {
    let mut engine = make_engine();
    let id = engine.create(3, "08:00");

    for _ in 0..3 {
        engine.snooze(id, wednesday_at(8, 0)).unwrap();
    }
    assert_eq!(engine.alarms()[0].snooze_count, 3);
    let time_before = engine.alarms()[0].time.clone();

    // Fourth attempt fails and mutates nothing
    let err = engine.snooze(id, wednesday_at(9, 0)).unwrap_err();
    assert_eq!(err, AlarmError::SnoozeLimit { max: 3 });
    assert_eq!(engine.alarms()[0].time, time_before);
    assert_eq!(engine.alarms()[0].snooze_count, 3);
}

#[test]
fn exhausted_snooze_still_ends_firing() {
    let mut engine = make_engine();
    let id = engine.create(3, "08:00");

    // Burn the whole budget; each snooze at 07:40 lands on 07:45
    for _ in 0..3 {
        engine.snooze(id, wednesday_at(7, 40)).unwrap();
    }
    let fired = engine.check_tick(wednesday_at(7, 45)).unwrap();
    assert_eq!(fired.id, id);

    assert!(engine.snooze(id, wednesday_at(7, 45)).is_err());
    assert!(!engine.is_firing(), "a valid response always returns to idle");
}

#[test]
fn dismiss_removes_exactly_one() {
    let mut engine = make_engine();
    let first = engine.create(3, "08:00");
    let second = engine.create(3, "08:00");
    engine.create(5, "09:15");

    engine.dismiss(first).unwrap();

    assert_eq!(engine.alarms().len(), 2);
    assert_eq!(engine.alarms()[0].id, second, "duplicate time survives");
}

#[test]
fn dismiss_unknown_id_is_not_found() {
    let mut engine = make_engine();
    engine.create(3, "08:00");

    let err = engine.dismiss(999).unwrap_err();
    assert_eq!(err, AlarmError::NotFound { id: 999 });
    assert_eq!(engine.alarms().len(), 1);
}

#[test]
fn delete_by_index_rejects_out_of_range() {
    let mut engine = make_engine();
    engine.create(3, "08:00");

    assert!(engine.delete_by_index(0).is_err());
    assert!(engine.delete_by_index(2).is_err());
    assert_eq!(engine.alarms().len(), 1, "failed delete mutates nothing");
}

#[test]
fn delete_by_index_removes_displayed_slot() {
    let mut engine = make_engine();
    let first = engine.create(3, "08:00");
    let second = engine.create(3, "08:00");

    // With duplicate times, deleting slot 2 must remove the second alarm
    let removed = engine.delete_by_index(2).unwrap();
    assert_eq!(removed.id, second);
    assert_eq!(engine.alarms()[0].id, first);
}

#[test]
fn fire_then_snooze_scenario() {
    let mut engine = make_engine();
    engine.create(3, "08:00");

    let fired = engine
        .check_tick(wednesday_at(8, 0))
        .expect("Wednesday 08:00 tick should fire");
    assert!(engine.is_firing());

    let new_time = engine.snooze(fired.id, wednesday_at(8, 0)).unwrap();
    assert_eq!(new_time, "08:05");
    assert_eq!(engine.alarms()[0].snooze_count, 1);
    assert!(!engine.is_firing());

    // The rescheduled minute fires again
    let refired = engine.check_tick(wednesday_at(8, 5)).unwrap();
    assert_eq!(refired.id, fired.id);
}

#[test]
fn malformed_input_never_fires() {
    let mut engine = make_engine();
    engine.create(-1, "08:00"); // non-numeric day fallback
    engine.create(3, "8:00"); // missing leading zero
    engine.create(9, "08:00"); // day out of range

    assert!(engine.check_tick(wednesday_at(8, 0)).is_none());
    assert_eq!(engine.alarms().len(), 3, "alarms are kept, just inert");
}
