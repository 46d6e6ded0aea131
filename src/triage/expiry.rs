use crate::types::item::ExpiryDate;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days from `now` until the start of `expiry`, rounded up.
/// Negative values mean the item has already expired.
pub fn days_until_expiry(expiry: NaiveDate, now: NaiveDateTime) -> i64 {
    let millis = (expiry.and_time(NaiveTime::MIN) - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

pub fn days_until(expiry: &ExpiryDate, now: NaiveDateTime) -> Option<i64> {
    expiry.date().map(|date| days_until_expiry(date, now))
}
