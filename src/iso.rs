//! This module implements the internal ISO field records.
//!
//! An [`IsoDate`] is a plain (year, month, day) record in the proleptic
//! Gregorian calendar. It carries no time zone and no calendar state, and
//! its ordering and hashing are those of the triple.

use crate::{
    error::{DayError, ErrorMessage},
    utils, DayResult, DayUnwrap, SECONDS_PER_DAY,
};

/// The epoch days of January 1st, `i32::MIN`.
pub(crate) const MIN_EPOCH_DAYS: i64 = utils::epoch_days_from_gregorian_date(i32::MIN, 1, 1);
/// The epoch days of December 31st, `i32::MAX`.
pub(crate) const MAX_EPOCH_DAYS: i64 = utils::epoch_days_from_gregorian_date(i32::MAX, 12, 31);

/// `IsoDate` serves as a record for the `[[ISOYear]]`, `[[ISOMonth]]`,
/// and `[[ISODay]]` of a day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub fn try_new(year: i32, month: u8, day: u8) -> DayResult<Self> {
        if !is_valid_date(year, month, day) {
            return Err(DayError::invalid_date().with_enum(ErrorMessage::NotAGregorianDate));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Create a balanced `IsoDate` from epoch days.
    ///
    /// Fails when the resulting year does not fit an `i32`.
    pub fn from_epoch_days(epoch_days: i64) -> DayResult<Self> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days) {
            return Err(DayError::range().with_enum(ErrorMessage::DayOutOfRange));
        }
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days);
        // The range guard keeps every year within `i32`.
        let year = i32::try_from(year).ok().day_unwrap()?;
        let date = Self::new_unchecked(year, month, day);
        crate::day_assert!(
            date.is_valid(),
            "epoch day {epoch_days} decomposed to {date:?}"
        );
        Ok(date)
    }

    /// Returns the epoch days for this date.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(&self) -> i64 {
        utils::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }

    /// Returns the epoch seconds of midnight UTC on this date.
    #[inline]
    #[must_use]
    pub const fn to_utc_epoch_seconds(&self) -> i64 {
        self.to_epoch_days() * SECONDS_PER_DAY
    }

    /// Returns whether this date is a valid Gregorian date.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }

    /// Returns the date `days` after this one.
    pub fn checked_add_days(self, days: i64) -> DayResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or(DayError::range().with_enum(ErrorMessage::DayOutOfRange))?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the signed count of days from this date to `other`.
    #[inline]
    #[must_use]
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.to_epoch_days() - self.to_epoch_days()
    }

    /// Returns the day of the week, where 0 is Sunday.
    #[inline]
    #[must_use]
    pub const fn day_of_week(&self) -> u8 {
        utils::epoch_days_to_day_of_week(self.to_epoch_days())
    }
}

#[inline]
const fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    // `iso_days_in_month` is 0 for invalid months, which rejects every day.
    day >= 1 && day <= utils::iso_days_in_month(year, month)
}
