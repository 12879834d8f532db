//! Properties of the pure calculation and date helpers, exercised through
//! the library surface.

use chrono::{Duration, NaiveDateTime, Timelike};

use worktimer::core::blocks::{daily_blocks, weekly_blocks};
use worktimer::core::timer::is_on_the_clock;
use worktimer::models::event::Event;
use worktimer::utils::date::{parse_date, week_start, weekday_name};
use worktimer::utils::formatting::{format_date, format_duration, format_time};
use worktimer::utils::time::{Clock, SystemClock};

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[test]
fn daily_blocks_pairs_events_in_order() {
    let events = vec![
        Event::new(ts("2025-05-19T09:00:00"), true),
        Event::new(ts("2025-05-19T12:00:00"), false),
        Event::new(ts("2025-05-19T13:00:00"), true),
        Event::new(ts("2025-05-19T17:00:00"), false),
    ];

    let (total, blocks) = daily_blocks(&events, ts("2025-05-19T18:00:00"));

    assert_eq!(total, Duration::hours(7));
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].start, ts("2025-05-19T09:00:00"));
    assert_eq!(blocks[0].stop, ts("2025-05-19T12:00:00"));
    assert_eq!(blocks[0].duration, Duration::hours(3));
    assert_eq!(blocks[1].start, ts("2025-05-19T13:00:00"));
    assert_eq!(blocks[1].duration, Duration::hours(4));
}

#[test]
fn daily_blocks_measures_trailing_start_up_to_now() {
    let events = vec![Event::new(ts("2025-05-19T09:00:00"), true)];
    let now = ts("2025-05-19T10:30:00");

    let (total, blocks) = daily_blocks(&events, now);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].stop, now);
    assert_eq!(total, Duration::minutes(90));
    // The synthetic stop never lands in the caller's list.
    assert_eq!(events.len(), 1);
}

#[test]
fn daily_blocks_of_no_events_is_zero() {
    let (total, blocks) = daily_blocks(&[], ts("2025-05-19T18:00:00"));

    assert_eq!(total, Duration::zero());
    assert!(blocks.is_empty());
}

#[test]
fn weekly_blocks_of_empty_week_is_all_zero() {
    let week: Vec<Vec<Event>> = vec![Vec::new(); 7];

    let (total, daily_totals) = weekly_blocks(&week, ts("2025-05-19T18:00:00"));

    assert_eq!(total, Duration::zero());
    assert_eq!(daily_totals, vec![Duration::zero(); 7]);
}

#[test]
fn weekly_blocks_sums_daily_totals() {
    let mut week: Vec<Vec<Event>> = vec![Vec::new(); 7];
    week[0] = vec![
        Event::new(ts("2025-05-19T09:00:00"), true),
        Event::new(ts("2025-05-19T12:00:00"), false),
    ];
    week[2] = vec![
        Event::new(ts("2025-05-21T10:00:00"), true),
        Event::new(ts("2025-05-21T14:30:00"), false),
    ];

    let (total, daily_totals) = weekly_blocks(&week, ts("2025-05-25T18:00:00"));

    assert_eq!(daily_totals[0], Duration::hours(3));
    assert_eq!(daily_totals[2], Duration::minutes(270));
    assert_eq!(total, Duration::minutes(450));
}

#[test]
fn on_the_clock_follows_the_last_event() {
    let start = Event::new(ts("2025-05-19T09:00:00"), true);
    let stop = Event::new(ts("2025-05-19T12:00:00"), false);

    assert!(!is_on_the_clock(&[]));
    assert!(is_on_the_clock(&[start.clone()]));
    assert!(!is_on_the_clock(&[start.clone(), stop.clone()]));
    assert!(is_on_the_clock(&[start.clone(), stop, start]));
}

#[test]
fn weekday_names_match_the_calendar() {
    assert_eq!(weekday_name(0, false), "Monday");
    assert_eq!(weekday_name(1, false), "Tuesday");
    assert_eq!(weekday_name(2, false), "Wednesday");
    assert_eq!(weekday_name(3, false), "Thursday");
    assert_eq!(weekday_name(4, false), "Friday");
    assert_eq!(weekday_name(5, false), "Saturday");
    assert_eq!(weekday_name(6, false), "Sunday");

    // Abbreviation is exactly the first three letters.
    for i in 0..7 {
        assert_eq!(weekday_name(i, true), &weekday_name(i, false)[..3]);
    }

    assert_eq!(weekday_name(7, false), "N/A");
    assert_eq!(weekday_name(7, true), "N/A");
    assert_eq!(weekday_name(u32::MAX, false), "N/A");
}

#[test]
fn system_clock_truncates_subseconds() {
    let now = SystemClock.now();
    assert_eq!(now.nanosecond(), 0);
}

#[test]
fn week_start_is_the_monday_of_the_week() {
    let monday = parse_date("2025-05-19").unwrap();
    assert_eq!(week_start(monday), monday);
    assert_eq!(week_start(parse_date("2025-05-22").unwrap()), monday);
    assert_eq!(week_start(parse_date("2025-05-25").unwrap()), monday);
}

#[test]
fn parse_date_is_strict() {
    assert_eq!(parse_date("2025-05-19"), Some(ts("2025-05-19T00:00:00").date()));
    assert!(parse_date("19-05-2025").is_none());
    assert!(parse_date("2025-13-99").is_none());
    assert!(parse_date("not a date").is_none());
}

#[test]
fn formatting_matches_report_output() {
    assert_eq!(format_date(parse_date("2025-05-19").unwrap()), "Monday, 19 May 2025");
    assert_eq!(format_time(ts("2025-05-19T09:00:00")), "09:00AM");
    assert_eq!(format_time(ts("2025-05-19T17:00:00")), "05:00PM");
    assert_eq!(format_duration(Duration::zero()), "0:00:00");
    assert_eq!(format_duration(Duration::hours(7)), "7:00:00");
    assert_eq!(format_duration(Duration::seconds(3 * 3600 + 25 * 60 + 7)), "3:25:07");
    assert_eq!(format_duration(Duration::hours(26)), "26:00:00");
}
