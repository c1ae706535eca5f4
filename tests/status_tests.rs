mod common;
use common::{dt, event, punch, shift};
use rotaview::core::calculator::status::derive_status;
use rotaview::core::rules::{DerivationRules, OvernightPolicy};
use rotaview::errors::AppError;
use rotaview::models::status::{StatusKind, StatusTone};

fn rules() -> DerivationRules {
    DerivationRules::default()
}

#[test]
fn unallocated_is_surplus_whatever_the_signals() {
    let mut s = shift(1, 10, "2024-01-01", 900, 1700);
    s.unallocated = true;

    let punches = vec![punch(10, "2024-01-01T08:50", Some("2024-01-01T17:00"))];
    let events = vec![event(10, 1, "Sick", "2024-01-01T07:00")];

    let st = derive_status(&s, &punches, &events, dt("2024-01-01T12:00"), &rules()).unwrap();
    assert_eq!(st.kind, StatusKind::Surplus);
    assert_eq!(st.label, "Surplus");
    assert_eq!(st.tone, StatusTone::Flagged);
}

#[test]
fn latest_event_wins_over_punches() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    let punches = vec![punch(10, "2024-01-01T08:50", Some("2024-01-01T17:00"))];
    let events = vec![
        event(10, 1, "Lateness", "2024-01-01T09:10"),
        event(10, 1, "SICK", "2024-01-01T09:40"),
        event(10, 2, "Note", "2024-01-01T10:00"),
    ];

    let st = derive_status(&s, &punches, &events, dt("2024-01-01T12:00"), &rules()).unwrap();
    assert_eq!(st.label, "SICK");
    assert_eq!(st.tone, StatusTone::Sick);
}

#[test]
fn unknown_event_category_is_flagged() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    let events = vec![event(10, 1, "SMS Sent", "2024-01-01T09:10")];

    let st = derive_status(&s, &[], &events, dt("2024-01-01T08:00"), &rules()).unwrap();
    assert_eq!(st.label, "SMS Sent");
    assert_eq!(st.tone, StatusTone::Flagged);
}

#[test]
fn awol_event_uses_absent_tone() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    let events = vec![event(10, 1, "AWOL", "2024-01-01T11:00")];

    let st = derive_status(&s, &[], &events, dt("2024-01-01T12:00"), &rules()).unwrap();
    assert_eq!(st.tone, StatusTone::Absent);
}

#[test]
fn future_shift_today_is_due_in() {
    let s = shift(1, 10, "2024-01-01", 1030, 1700);

    let st = derive_status(&s, &[], &[], dt("2024-01-01T09:15"), &rules()).unwrap();
    assert_eq!(st.kind, StatusKind::DueIn(75));
    assert_eq!(st.label, "Due in 1h 15m");
    assert_eq!(st.tone, StatusTone::Upcoming);
}

#[test]
fn future_shift_on_another_day_is_upcoming() {
    let s = shift(1, 10, "2024-01-03", 900, 1700);
    let punches = vec![punch(10, "2024-01-03T08:50", None)];

    let st = derive_status(&s, &punches, &[], dt("2024-01-01T12:00"), &rules()).unwrap();
    assert_eq!(st.kind, StatusKind::Upcoming);
    assert_eq!(st.tone, StatusTone::Upcoming);
}

#[test]
fn punch_exactly_at_start_is_attended() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    let punches = vec![punch(10, "2024-01-01T09:00", None)];

    let st = derive_status(&s, &punches, &[], dt("2024-01-01T09:30"), &rules()).unwrap();
    assert_eq!(st.kind, StatusKind::Attended);
    assert_eq!(st.tone, StatusTone::Attended);
}

#[test]
fn earliest_matching_punch_decides_lateness() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    let punches = vec![
        punch(10, "2024-01-01T13:00", Some("2024-01-01T17:00")),
        punch(10, "2024-01-01T09:20", Some("2024-01-01T12:30")),
        // other employee, on time
        punch(20, "2024-01-01T08:45", Some("2024-01-01T17:00")),
    ];

    let st = derive_status(&s, &punches, &[], dt("2024-01-01T15:00"), &rules()).unwrap();
    assert_eq!(st.kind, StatusKind::Late);
}

#[test]
fn punch_outside_tolerance_is_ignored() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    // clocked on 45 minutes early, clocked off before the shift started
    let punches = vec![punch(10, "2024-01-01T08:15", Some("2024-01-01T08:40"))];

    let st = derive_status(&s, &punches, &[], dt("2024-01-01T11:00"), &rules()).unwrap();
    assert_eq!(st.kind, StatusKind::Absent);
}

#[test]
fn off_time_within_tolerance_counts() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    // clocked on early (outside the on-window), off inside the shift
    let punches = vec![punch(10, "2024-01-01T07:00", Some("2024-01-01T10:00"))];

    let st = derive_status(&s, &punches, &[], dt("2024-01-01T11:00"), &rules()).unwrap();
    assert_eq!(st.kind, StatusKind::Attended);
}

#[test]
fn absent_threshold_is_sixty_minutes() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);

    let at_60 = derive_status(&s, &[], &[], dt("2024-01-01T10:00"), &rules()).unwrap();
    assert_eq!(at_60.kind, StatusKind::Late);

    let at_61 = derive_status(&s, &[], &[], dt("2024-01-01T10:01"), &rules()).unwrap();
    assert_eq!(at_61.kind, StatusKind::Absent);

    let at_90 = derive_status(&s, &[], &[], dt("2024-01-01T10:30"), &rules()).unwrap();
    assert_eq!(at_90.kind, StatusKind::Absent);
    assert_eq!(at_90.tone, StatusTone::Absent);
}

#[test]
fn attended_example_with_due_and_end() {
    let s = shift(1, 10, "2024-01-01", 900, 1700);
    let punches = vec![punch(10, "2024-01-01T08:55:00", Some("2024-01-01T17:05:00"))];

    let st = derive_status(&s, &punches, &[], dt("2024-01-01T18:00"), &rules()).unwrap();
    assert_eq!(st.label, "Attended");
    assert_eq!(st.due, dt("2024-01-01T09:00"));
    assert_eq!(st.end, dt("2024-01-01T17:00"));
}

#[test]
fn overnight_shift_policy() {
    let s = shift(1, 10, "2024-01-01", 2200, 600);

    let next_day = derive_status(&s, &[], &[], dt("2024-01-01T21:00"), &rules()).unwrap();
    assert_eq!(next_day.end, dt("2024-01-02T06:00"));

    let strict = DerivationRules {
        overnight: OvernightPolicy::Reject,
        ..DerivationRules::default()
    };
    let err = derive_status(&s, &[], &[], dt("2024-01-01T21:00"), &strict).unwrap_err();
    assert!(matches!(err, AppError::InvalidShiftWindow { .. }));
}
