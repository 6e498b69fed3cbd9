mod common;

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use common::at;
use rtimeclock::core::shifts::{day_window, days_window, reconstruct_shifts, worked_hours};
use rtimeclock::models::clock_event::ClockEvent;
use rtimeclock::models::event_type::ClockType::{self, In, Out};
use rtimeclock::models::shift::{Shift, Window};

fn events(log: &[(ClockType, (u32, u32))]) -> Vec<ClockEvent> {
    log.iter()
        .enumerate()
        .map(|(i, (kind, (h, m)))| ClockEvent::new(i as i64 + 1, 1, *kind, at(*h, *m)))
        .collect()
}

#[test]
fn test_empty_log_has_no_shifts() {
    assert!(reconstruct_shifts(&[], &Window::unbounded()).is_empty());
    assert_eq!(worked_hours(&[], &Window::unbounded()), 0.0);
}

#[test]
fn test_single_shift_of_eight_hours() {
    let evs = events(&[(In, (9, 0)), (Out, (17, 0))]);

    let shifts = reconstruct_shifts(&evs, &Window::unbounded());
    assert_eq!(
        shifts,
        vec![Shift {
            start: at(9, 0),
            end: at(17, 0)
        }]
    );
    assert_eq!(worked_hours(&evs, &Window::unbounded()), 8.0);
}

#[test]
fn test_lunch_break_splits_the_day() {
    let evs = events(&[
        (In, (9, 0)),
        (Out, (12, 30)),
        (In, (13, 0)),
        (Out, (17, 30)),
    ]);

    let shifts = reconstruct_shifts(&evs, &Window::unbounded());
    assert_eq!(shifts.len(), 2);
    assert_eq!(worked_hours(&evs, &Window::unbounded()), 8.0);
}

#[test]
fn test_repeated_in_keeps_the_first_one() {
    let evs = events(&[(In, (9, 0)), (In, (10, 0)), (Out, (12, 0))]);

    let shifts = reconstruct_shifts(&evs, &Window::unbounded());
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].start, at(9, 0));
    assert_eq!(shifts[0].hours(), 3.0);
}

#[test]
fn test_orphan_out_is_discarded() {
    let evs = events(&[(Out, (8, 0)), (In, (9, 0)), (Out, (10, 0)), (Out, (11, 0))]);

    let shifts = reconstruct_shifts(&evs, &Window::unbounded());
    assert_eq!(
        shifts,
        vec![Shift {
            start: at(9, 0),
            end: at(10, 0)
        }]
    );
}

#[test]
fn test_trailing_in_is_not_counted() {
    let evs = events(&[(In, (9, 0)), (Out, (11, 0)), (In, (12, 0))]);

    assert_eq!(reconstruct_shifts(&evs, &Window::unbounded()).len(), 1);
    assert_eq!(worked_hours(&evs, &Window::unbounded()), 2.0);
}

#[test]
fn test_unsorted_input_is_replayed_in_time_order() {
    let mut evs = events(&[(In, (9, 0)), (Out, (12, 0)), (In, (13, 0)), (Out, (14, 0))]);
    evs.reverse();

    let shifts = reconstruct_shifts(&evs, &Window::unbounded());
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].start, at(9, 0));
    assert_eq!(shifts[1].end, at(14, 0));
}

#[test]
fn test_same_timestamp_is_ordered_by_id() {
    // out (id 2) and in (id 3) share 12:00: out closes the morning, in opens the afternoon
    let evs = vec![
        ClockEvent::new(3, 1, In, at(12, 0)),
        ClockEvent::new(1, 1, In, at(9, 0)),
        ClockEvent::new(4, 1, Out, at(15, 0)),
        ClockEvent::new(2, 1, Out, at(12, 0)),
    ];

    assert_eq!(worked_hours(&evs, &Window::unbounded()), 6.0);
}

#[test]
fn test_zero_length_shift_is_kept() {
    let evs = events(&[(In, (9, 0)), (Out, (9, 0))]);

    let shifts = reconstruct_shifts(&evs, &Window::unbounded());
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].duration_ms(), 0);
}

#[test]
fn test_window_is_half_open() {
    let evs = events(&[(In, (9, 0)), (Out, (17, 0))]);

    // `to` excluded: the out at 17:00 falls outside, the in is left open
    assert!(reconstruct_shifts(&evs, &Window::new(at(9, 0), at(17, 0))).is_empty());

    // `from` included
    assert_eq!(
        reconstruct_shifts(&evs, &Window::new(at(9, 0), at(17, 1))).len(),
        1
    );
}

#[test]
fn test_shift_straddling_the_window_start_is_dropped() {
    let evs = events(&[(In, (9, 0)), (Out, (17, 0))]);

    // only the out lands in the window and is discarded as an orphan
    let window = Window::new(at(12, 0), at(23, 0));
    assert!(reconstruct_shifts(&evs, &window).is_empty());
}

#[test]
fn test_reconstruction_is_idempotent() {
    let evs = events(&[(In, (9, 0)), (Out, (12, 0)), (In, (13, 0)), (Out, (18, 0))]);
    let window = Window::unbounded();

    assert_eq!(
        reconstruct_shifts(&evs, &window),
        reconstruct_shifts(&evs, &window)
    );
}

#[test]
fn test_shifts_are_chronological_and_disjoint() {
    let evs = events(&[
        (In, (6, 0)),
        (In, (7, 0)),
        (Out, (8, 0)),
        (Out, (9, 0)),
        (In, (10, 0)),
        (Out, (11, 0)),
    ]);

    let shifts = reconstruct_shifts(&evs, &Window::unbounded());
    for s in &shifts {
        assert!(s.start <= s.end);
    }
    for pair in shifts.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn test_day_window_follows_the_time_zone() {
    let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let utc = day_window(day, &Utc);
    assert_eq!(utc.from, Some(at(0, 0)));
    assert_eq!(utc.to, Some(Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap()));

    let plus_one = FixedOffset::east_opt(3600).unwrap();
    let local = day_window(day, &plus_one);
    assert_eq!(
        local.from,
        Some(Utc.with_ymd_and_hms(2025, 3, 9, 23, 0, 0).unwrap())
    );
    assert_eq!(local.to, Some(at(23, 0)));
}

#[test]
fn test_days_window_spans_first_to_last_inclusive() {
    let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

    let w = days_window(first, last, &Utc);
    assert_eq!(w.from, Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()));
    assert_eq!(w.to, Some(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()));
}

#[test]
fn test_hours_worked_on_a_day() {
    let evs = events(&[(In, (9, 0)), (Out, (13, 30))]);
    let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let other = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();

    assert_eq!(worked_hours(&evs, &day_window(day, &Utc)), 4.5);
    assert_eq!(worked_hours(&evs, &day_window(other, &Utc)), 0.0);
}
