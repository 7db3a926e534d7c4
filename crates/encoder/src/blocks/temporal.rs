//! Date and availability blocks.
//!
//! Date layout: [days_until_norm, month_frac, dow_frac, this_week,
//! this_month]. The date block is only fully meaningful on the catalog
//! side; queries carry coarse temporal keywords and neutral values
//! elsewhere. Availability layout: [count_norm, high, low, sold_out].

use super::neutral;
use chrono::{Datelike, NaiveDate};

pub const DATE_SIZE: usize = 5;
pub const AVAILABILITY_SIZE: usize = 4;

/// Normalization window for days-until-event.
const DAYS_HORIZON: f32 = 365.0;

/// Availability breakpoints.
const COUNT_CEILING: f32 = 100.0;
const HIGH_COUNT: u32 = 50;
const LOW_COUNT: u32 = 10;

/// Coarse temporal keyword detected in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalHint {
    Today,
    ThisWeek,
    ThisMonth,
}

/// Encode the date block for a catalog event date.
///
/// Past events encode as zero days-until with both window flags off.
pub fn encode_event(event: NaiveDate, reference: NaiveDate) -> Vec<f32> {
    let days_until = (event - reference).num_days();

    let days_norm = if days_until < 0 {
        0.0
    } else {
        (days_until as f32 / DAYS_HORIZON).min(1.0)
    };
    let month_frac = event.month() as f32 / 12.0;
    let dow_frac = event.weekday().num_days_from_monday() as f32 / 7.0;
    let this_week = if (0..7).contains(&days_until) { 1.0 } else { 0.0 };
    let this_month = if (0..30).contains(&days_until) { 1.0 } else { 0.0 };

    vec![days_norm, month_frac, dow_frac, this_week, this_month]
}

/// Encode the date block for a query from its temporal keyword, if any.
///
/// Month and day-of-week stay at the neutral midpoint; only the horizon
/// scalar and window flags are driven by the hint.
pub fn encode_query_date(hint: Option<TemporalHint>) -> Vec<f32> {
    match hint {
        Some(TemporalHint::Today) => vec![0.0, 0.5, 0.5, 1.0, 1.0],
        Some(TemporalHint::ThisWeek) => vec![3.0 / DAYS_HORIZON, 0.5, 0.5, 1.0, 1.0],
        Some(TemporalHint::ThisMonth) => vec![15.0 / DAYS_HORIZON, 0.5, 0.5, 0.0, 1.0],
        None => neutral(DATE_SIZE),
    }
}

/// Encode the availability block from a ticket count.
pub fn encode_availability(count: u32) -> Vec<f32> {
    vec![
        (count as f32 / COUNT_CEILING).min(1.0),
        if count >= HIGH_COUNT { 1.0 } else { 0.0 },
        if count < LOW_COUNT { 1.0 } else { 0.0 },
        if count == 0 { 1.0 } else { 0.0 },
    ]
}

/// Query-side availability: seeded from a detected group size, neutral
/// otherwise.
pub fn encode_query_availability(group_size: Option<u32>) -> Vec<f32> {
    match group_size {
        Some(size) => encode_availability(size),
        None => neutral(AVAILABILITY_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_event_this_week() {
        let block = encode_event(date(2026, 8, 10), date(2026, 8, 8));
        assert!((block[0] - 2.0 / 365.0).abs() < 1e-6);
        assert_eq!(block[3], 1.0); // this week
        assert_eq!(block[4], 1.0); // this month
    }

    #[test]
    fn test_event_far_out() {
        let block = encode_event(date(2027, 8, 8), date(2026, 8, 8));
        assert_eq!(block[0], 1.0);
        assert_eq!(block[3], 0.0);
        assert_eq!(block[4], 0.0);
    }

    #[test]
    fn test_past_event_clamps_to_zero() {
        let block = encode_event(date(2026, 7, 1), date(2026, 8, 8));
        assert_eq!(block[0], 0.0);
        assert_eq!(block[3], 0.0);
    }

    #[test]
    fn test_month_and_weekday_fractions() {
        // 2026-09-12 is a Saturday (weekday index 5).
        let block = encode_event(date(2026, 9, 12), date(2026, 8, 8));
        assert!((block[1] - 9.0 / 12.0).abs() < 1e-6);
        assert!((block[2] - 5.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_query_date_hints() {
        assert_eq!(encode_query_date(None), vec![0.5; DATE_SIZE]);
        let today = encode_query_date(Some(TemporalHint::Today));
        assert_eq!(today[3], 1.0);
        let month = encode_query_date(Some(TemporalHint::ThisMonth));
        assert_eq!(month[3], 0.0);
        assert_eq!(month[4], 1.0);
    }

    #[test]
    fn test_availability_flags() {
        assert_eq!(encode_availability(0), vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(encode_availability(8), vec![0.08, 0.0, 1.0, 0.0]);
        assert_eq!(encode_availability(75), vec![0.75, 1.0, 0.0, 0.0]);
        assert_eq!(encode_availability(500)[0], 1.0);
    }

    #[test]
    fn test_query_availability_from_group_size() {
        assert_eq!(
            encode_query_availability(None),
            vec![0.5; AVAILABILITY_SIZE]
        );
        assert_eq!(encode_query_availability(Some(4)), encode_availability(4));
    }
}
