//! Utility date equations for the proleptic Gregorian calendar.
//!
//! These are stateless integer equations. Epoch days are counted from
//! 1970-01-01, which is epoch day 0.
//!
//! The conversions between epoch days and a (year, month, day) triple follow
//! Howard Hinnant's [`days_from_civil` and `civil_from_days`][date-algorithms]
//! algorithms, which shift the year to start in March so that the leap day is
//! the final day of the computational year.
//!
//! [date-algorithms]: http://howardhinnant.github.io/date_algorithms.html

use crate::SECONDS_PER_DAY;

/// The number of days in a 400 year Gregorian cycle.
pub(crate) const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

/// Returns whether the year is a Gregorian leap year.
#[inline]
pub(crate) const fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the days in a month, or 0 for a month outside of `1..=12`.
#[inline]
pub(crate) const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Calculates the epoch days of a Gregorian date.
///
/// The month and day are not validated.
pub(crate) const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let year = year as i64 - (month <= 2) as i64;
    let era = year.div_euclid(400);
    // [0, 399]
    let year_of_era = year - era * 400;
    // March = 0, ..., February = 11
    let computational_month = (month + 9) % 12;
    let day_of_year = (153 * computational_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_A_400Y_CYCLE + day_of_era - EPOCH_COMPUTATIONAL_RATA_DIE
}

/// Calculates the Gregorian (year, month, day) for epoch days.
///
/// The year is returned as an `i64`, callers must narrow it.
pub(crate) const fn ymd_from_epoch_days(epoch_days: i64) -> (i64, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE;
    let era = rata_die.div_euclid(DAYS_IN_A_400Y_CYCLE);
    // [0, 146_096]
    let day_of_era = rata_die - era * DAYS_IN_A_400Y_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let computational_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * computational_month + 2) / 5 + 1;
    let month = if computational_month < 10 {
        computational_month + 3
    } else {
        computational_month - 9
    };
    let year = year_of_era + era * 400 + (month <= 2) as i64;
    (year, month as u8, day as u8)
}

/// Returns the day of the week for epoch days, where 0 is Sunday.
#[inline]
pub(crate) const fn epoch_days_to_day_of_week(epoch_days: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    (epoch_days + 4).rem_euclid(7) as u8
}

/// Returns the epoch days containing the epoch seconds.
#[inline]
pub(crate) const fn epoch_seconds_to_epoch_days(epoch_seconds: i64) -> i64 {
    epoch_seconds.div_euclid(SECONDS_PER_DAY)
}

/// Returns the epoch days of January 1st of `year`.
#[inline]
pub(crate) const fn epoch_days_for_year(year: i32) -> i64 {
    epoch_days_from_gregorian_date(year, 1, 1)
}
