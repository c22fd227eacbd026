use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),
    #[error("no such date: {year}-{month}")]
    InvalidDate { year: i32, month: u32 },
}

/// One Sunday-to-Saturday bucket of a month, truncated at the month
/// boundaries. Dates are consecutive and belong to the same month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    days: Vec<NaiveDate>,
}

/// Derived per-week display data. Never stored, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    pub title: String,
    pub period: String,
    pub total_expense: i64,
    pub start_day: u32,
    pub end_day: u32,
}

const ORDINALS: [&str; 6] = ["첫째", "둘째", "셋째", "넷째", "다섯째", "여섯째"];

/// Localized ordinal word for a 0-based week index. Months can produce
/// up to six buckets (a 31-day month starting on Saturday), anything
/// beyond that yields an empty label.
pub fn ordinal_week_label(index: usize) -> &'static str {
    ORDINALS.get(index).copied().unwrap_or("")
}

/// Partitions a month into week buckets: the current bucket closes
/// after each Saturday or at the last day of the month, whichever
/// comes first.
///
/// Months outside 1..=12 are rejected rather than carried over into
/// the next year.
pub fn weeks_in_month(year: i32, month: u32) -> Result<Vec<Week>, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::MonthOutOfRange(month));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidDate { year, month })?;

    let mut weeks = Vec::new();
    let mut current = Vec::new();
    let mut date = first;
    loop {
        current.push(date);
        if date.weekday() == Weekday::Sat {
            weeks.push(Week { days: std::mem::take(&mut current) });
        }
        match date.succ_opt() {
            Some(next) if next.month() == month => date = next,
            _ => break,
        }
    }
    if !current.is_empty() {
        weeks.push(Week { days: current });
    }

    Ok(weeks)
}

impl Week {
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// First date of the bucket; stable identity for keyed rendering.
    pub fn start_date(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn start_day(&self) -> u32 {
        self.days[0].day()
    }

    pub fn end_day(&self) -> u32 {
        self.days[self.days.len() - 1].day()
    }

    /// "첫째 주", "둘째 주", ... for the bucket at `index`.
    pub fn title(index: usize) -> String {
        format!("{} 주", ordinal_week_label(index))
    }

    /// Per-day `(day-of-month, amount)` pairs for the chart. Dates with
    /// no record count as zero spend.
    pub fn chart_series(&self, daily: &HashMap<String, i64>) -> Vec<(u32, i64)> {
        self.days
            .iter()
            .map(|d| (d.day(), daily.get(&date_key(*d)).copied().unwrap_or(0)))
            .collect()
    }

    /// Sums the daily totals over the bucket. An empty record map is
    /// fine, every week just aggregates to zero.
    pub fn summarize(&self, index: usize, daily: &HashMap<String, i64>) -> WeekSummary {
        let total_expense: i64 = self
            .days
            .iter()
            .map(|d| daily.get(&date_key(*d)).copied().unwrap_or(0))
            .sum();
        let month = self.days[0].month();
        WeekSummary {
            title: Self::title(index),
            period: format!(
                "{}월 {}일 - {}월 {}일",
                month,
                self.start_day(),
                month,
                self.end_day()
            ),
            total_expense,
            start_day: self.start_day(),
            end_day: self.end_day(),
        }
    }
}

/// Key format used by the daily summary API (`_id` field).
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(week: &Week) -> Vec<String> {
        week.days().iter().map(|d| date_key(*d)).collect()
    }

    #[test]
    fn february_2024_partitions_into_five_weeks() {
        // Feb 1 2024 is a Thursday, Feb 29 a Thursday.
        let weeks = weeks_in_month(2024, 2).unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(keys(&weeks[0]), vec!["2024-02-01", "2024-02-02", "2024-02-03"]);
        assert_eq!(
            keys(&weeks[4]),
            vec!["2024-02-25", "2024-02-26", "2024-02-27", "2024-02-28", "2024-02-29"]
        );
    }

    #[test]
    fn weeks_cover_the_month_without_gaps_or_duplicates() {
        for (year, month) in [(2024, 2), (2023, 7), (2022, 10), (2025, 12), (2026, 8)] {
            let weeks = weeks_in_month(year, month).unwrap();
            assert!((1..=6).contains(&weeks.len()));

            let all: Vec<NaiveDate> =
                weeks.iter().flat_map(|w| w.days().iter().copied()).collect();
            let mut expected = Vec::new();
            let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            while d.month() == month {
                expected.push(d);
                d = d.succ_opt().unwrap();
            }
            assert_eq!(all, expected);
        }
    }

    #[test]
    fn week_closes_after_each_saturday() {
        let weeks = weeks_in_month(2023, 7).unwrap();
        for week in &weeks[..weeks.len() - 1] {
            assert_eq!(week.days().last().unwrap().weekday(), Weekday::Sat);
        }
        assert!(weeks.iter().all(|w| w.days().len() <= 7));
    }

    #[test]
    fn month_starting_on_saturday_opens_with_one_day_week() {
        // Jul 1 2023 is a Saturday; 31 days from Saturday makes six buckets.
        let weeks = weeks_in_month(2023, 7).unwrap();
        assert_eq!(weeks.len(), 6);
        assert_eq!(keys(&weeks[0]), vec!["2023-07-01"]);
    }

    #[test]
    fn month_thirteen_is_rejected() {
        assert_eq!(weeks_in_month(2024, 13), Err(CalendarError::MonthOutOfRange(13)));
        assert_eq!(weeks_in_month(2024, 0), Err(CalendarError::MonthOutOfRange(0)));
    }

    #[test]
    fn ordinal_labels() {
        assert_eq!(ordinal_week_label(0), "첫째");
        assert_eq!(ordinal_week_label(5), "여섯째");
        assert_eq!(ordinal_week_label(6), "");
        assert_eq!(Week::title(1), "둘째 주");
    }

    #[test]
    fn summarize_fills_missing_dates_with_zero() {
        let weeks = weeks_in_month(2024, 2).unwrap();
        let mut daily = HashMap::new();
        daily.insert("2024-02-01".to_string(), 1000);
        daily.insert("2024-02-03".to_string(), 500);

        let summary = weeks[0].summarize(0, &daily);
        assert_eq!(summary.total_expense, 1500);
        assert_eq!(summary.title, "첫째 주");
        assert_eq!(summary.period, "2월 1일 - 2월 3일");
        assert_eq!(summary.start_day, 1);
        assert_eq!(summary.end_day, 3);
    }

    #[test]
    fn summarize_with_empty_records_is_zero() {
        let daily = HashMap::new();
        for (i, week) in weeks_in_month(2025, 6).unwrap().iter().enumerate() {
            assert_eq!(week.summarize(i, &daily).total_expense, 0);
        }
    }

    #[test]
    fn chart_series_pairs_days_with_amounts() {
        let weeks = weeks_in_month(2024, 2).unwrap();
        let mut daily = HashMap::new();
        daily.insert("2024-02-02".to_string(), 700);

        let series = weeks[0].chart_series(&daily);
        assert_eq!(series, vec![(1, 0), (2, 700), (3, 0)]);
    }
}
