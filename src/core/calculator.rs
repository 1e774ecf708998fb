//! Elapsed days, weeks and months since the wedding, and the message text.

use crate::domain::model::{AnniversaryEvent, Report};
use chrono::{Datelike, Duration, NaiveDate};

/// Weekday, full month name, zero-padded day, four digit year.
pub const DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Saturday in `Weekday::num_days_from_monday` numbering.
const SATURDAY_INDEX: i64 = 5;

#[derive(Debug, Clone)]
pub struct AnniversaryCalculator {
    event: AnniversaryEvent,
}

impl AnniversaryCalculator {
    pub fn new(event: AnniversaryEvent) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &AnniversaryEvent {
        &self.event
    }

    pub fn report(&self, today: NaiveDate) -> Report {
        let wedding_date = self.event.wedding_date;

        let days_elapsed = (today - wedding_date).num_days();

        let next_saturday = next_saturday(today);
        let weeks_elapsed = (next_saturday - wedding_date).num_days().div_euclid(7);

        let first_of_next_month = first_of_next_month(today);
        let months_elapsed = months_between(wedding_date, first_of_next_month);

        let rendered_text = format!(
            "{names} {did_this} on {original_date}.\r\n\
             Today is {today}.\r\n\
             It has been {days} days since the wedding.\r\n\
             On {week_date}, it will have been {weeks} weeks since the wedding.\r\n\
             On {month_date}, it will have been {months} months since the wedding.",
            names = self.event.names,
            did_this = self.event.verb_phrase,
            original_date = format_date(wedding_date),
            today = format_date(today),
            days = days_elapsed,
            week_date = format_date(next_saturday),
            weeks = weeks_elapsed,
            month_date = format_date(first_of_next_month),
            months = months_elapsed,
        );

        Report {
            wedding_date,
            today,
            days_elapsed,
            next_saturday,
            weeks_elapsed,
            first_of_next_month,
            months_elapsed,
            rendered_text,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 今天或之後最近的星期六 (今天是星期六時回傳今天)
pub fn next_saturday(today: NaiveDate) -> NaiveDate {
    let weekday_index = today.weekday().num_days_from_monday() as i64;
    today + Duration::days((SATURDAY_INDEX - weekday_index).rem_euclid(7))
}

/// 今天是 1 號時回傳今天, 否則回傳下個月 1 號
pub fn first_of_next_month(today: NaiveDate) -> NaiveDate {
    if today.day() == 1 {
        return today;
    }

    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    // only unreachable past the last year chrono can represent
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

/// Calendar months from the month of `from` to the month of `to`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + (to.month() as i64 - from.month() as i64)
}
