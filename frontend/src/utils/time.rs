use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::config;

/// Calendar day of `instant` as seen in `tz`; time-of-day is dropped.
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

pub fn is_same_day<Tz: TimeZone>(a: &DateTime<Utc>, b: &DateTime<Utc>, tz: &Tz) -> bool {
    local_day(a, tz) == local_day(b, tz)
}

/// Converts an instant to the viewer's calendar day, honouring a configured zone.
pub fn viewer_day(instant: &DateTime<Utc>) -> NaiveDate {
    match config::display_time_zone() {
        Some(tz) => local_day(instant, &tz),
        None => local_day(instant, &Local),
    }
}

pub fn today() -> NaiveDate {
    viewer_day(&Utc::now())
}
