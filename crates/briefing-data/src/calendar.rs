//! Hand-maintained economic event calendar.
//!
//! FOMC meeting dates are published years ahead and kept here verbatim. US
//! release dates are not published that far out, so the monthly schedule is
//! estimated from each release's usual day-of-month window.

use briefing_core::types::{CalendarEvent, EconomicCalendar, Importance};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Scheduled FOMC rate decision dates (second day of each meeting).
const FOMC_DATES: &[(i32, u32, u32)] = &[
    (2025, 1, 29),
    (2025, 3, 19),
    (2025, 5, 7),
    (2025, 6, 18),
    (2025, 7, 30),
    (2025, 9, 17),
    (2025, 11, 5),
    (2025, 12, 17),
    (2026, 1, 28),
    (2026, 3, 18),
    (2026, 5, 6),
    (2026, 6, 17),
    (2026, 7, 29),
    (2026, 9, 16),
    (2026, 11, 4),
    (2026, 12, 16),
];

/// Recurring monthly US releases with their usual day-of-month window.
const MONTHLY_RELEASES: &[(&str, u32, u32, Importance)] = &[
    ("ISM Manufacturing PMI", 1, 7, Importance::High),
    ("ISM Services PMI", 3, 7, Importance::High),
    ("Nonfarm Payrolls", 1, 7, Importance::High),
    ("CPI", 10, 14, Importance::High),
    ("Retail Sales", 14, 18, Importance::Medium),
    ("Housing Starts", 17, 22, Importance::Medium),
    ("PCE Price Index", 25, 30, Importance::High),
    ("GDP", 25, 30, Importance::High),
];

const FED_WINDOW_DAYS: i64 = 30;

/// FOMC decisions within the next 30 days of `today`, soonest first.
pub fn upcoming_fed_events(today: NaiveDate) -> Vec<CalendarEvent> {
    FOMC_DATES
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .filter_map(|date| {
            let days_until = (date - today).num_days();
            if (0..=FED_WINDOW_DAYS).contains(&days_until) {
                Some(CalendarEvent {
                    date,
                    name: "FOMC rate decision".to_string(),
                    importance: Importance::High,
                    days_until,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Estimated US releases falling inside the current Monday-to-Sunday week.
///
/// Each monthly release is placed at the midpoint of its usual window;
/// weekly jobless claims land on Thursday.
pub fn this_week_events(today: NaiveDate) -> Vec<CalendarEvent> {
    let week_start = today - Days::new(today.weekday().num_days_from_monday() as u64);
    let week_end = week_start + Days::new(6);

    let mut events = Vec::new();

    for &(name, first, last, importance) in MONTHLY_RELEASES {
        let est_day = (first + last) / 2;
        let Some(date) = NaiveDate::from_ymd_opt(today.year(), today.month(), est_day) else {
            continue;
        };
        if date >= week_start && date <= week_end && date >= today {
            events.push(CalendarEvent {
                date,
                name: name.to_string(),
                importance,
                days_until: (date - today).num_days(),
            });
        }
    }

    // Initial claims come out every Thursday morning.
    let mut claims = today;
    while claims.weekday() != Weekday::Thu {
        claims = claims + Days::new(1);
    }
    if claims <= week_end {
        events.push(CalendarEvent {
            date: claims,
            name: "Initial Jobless Claims".to_string(),
            importance: Importance::Medium,
            days_until: (claims - today).num_days(),
        });
    }

    events.sort_by_key(|e| e.date);
    events
}

/// Assemble both calendar sections relative to `today`.
pub fn build(today: NaiveDate) -> EconomicCalendar {
    EconomicCalendar {
        upcoming_fed: upcoming_fed_events(today),
        this_week: this_week_events(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fed_event_inside_window() {
        // 2026-09-16 meeting seen from 12 days out.
        let events = upcoming_fed_events(date(2026, 9, 4));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2026, 9, 16));
        assert_eq!(events[0].days_until, 12);
        assert_eq!(events[0].countdown(), "D-12");
    }

    #[test]
    fn test_fed_event_on_meeting_day() {
        let events = upcoming_fed_events(date(2026, 9, 16));
        assert_eq!(events[0].days_until, 0);
        assert_eq!(events[0].countdown(), "today");
    }

    #[test]
    fn test_past_meetings_excluded() {
        let events = upcoming_fed_events(date(2026, 9, 17));
        // The next meeting (11-04) is outside the 30-day window.
        assert!(events.is_empty());
    }

    #[test]
    fn test_this_week_cpi_window() {
        // Monday 2026-08-10; CPI estimated on the 12th falls in this week.
        let events = this_week_events(date(2026, 8, 10));
        let cpi = events.iter().find(|e| e.name == "CPI").unwrap();
        assert_eq!(cpi.date, date(2026, 8, 12));
        assert_eq!(cpi.days_until, 2);
        assert_eq!(cpi.importance, Importance::High);
    }

    #[test]
    fn test_jobless_claims_on_thursday() {
        let events = this_week_events(date(2026, 8, 10));
        let claims = events
            .iter()
            .find(|e| e.name == "Initial Jobless Claims")
            .unwrap();
        assert_eq!(claims.date.weekday(), Weekday::Thu);
        assert_eq!(claims.date, date(2026, 8, 13));
    }

    #[test]
    fn test_releases_earlier_in_week_omitted() {
        // Friday: CPI (Wednesday) already happened, claims (Thursday) too.
        let events = this_week_events(date(2026, 8, 14));
        assert!(events.iter().all(|e| e.name != "CPI"));
        // The next Thursday is in the following week.
        assert!(events.iter().all(|e| e.name != "Initial Jobless Claims"));
        // Mid-month releases estimated on the 16th are still ahead.
        let retail = events.iter().find(|e| e.name == "Retail Sales").unwrap();
        assert_eq!(retail.date, date(2026, 8, 16));
    }

    #[test]
    fn test_events_sorted_by_date() {
        let events = this_week_events(date(2026, 8, 10));
        let dates: Vec<_> = events.iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}
