//! An open-ended lower bound over days.

use super::Day;

/// Either a specific [`Day`] or `Any`, a bound that sorts before every day.
///
/// `DayBound` is meant for ranges and filters where "no lower limit" is a
/// meaningful value. `Any` carries no date, so it has no string views and
/// cannot take part in day arithmetic.
///
/// ```rust
/// use civil_day::{Day, DayBound};
///
/// let day = Day::new(2020, 4, 5).unwrap();
/// assert!(DayBound::Any < DayBound::from(day));
/// assert_eq!(DayBound::Any.to_string(), "AnyDay");
/// assert_eq!(DayBound::from(day).to_string(), "4/5/2020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayBound {
    /// Less than every day.
    Any,
    Day(Day),
}

impl DayBound {
    #[inline]
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns the bounding day, or `None` for `Any`.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> Option<Day> {
        match self {
            Self::Any => None,
            Self::Day(day) => Some(*day),
        }
    }

    /// Returns the bound moved by `days`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is `Any`, or if the result leaves the representable
    /// year range.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self::Day(self.expect_day("add_days").add_days(days))
    }

    /// Returns the signed number of days from `self` to `other`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is `Any`.
    #[must_use]
    pub fn distance_in_days(&self, other: &Self) -> i64 {
        let from = self.expect_day("distance_in_days");
        let to = other.expect_day("distance_in_days");
        from.distance_in_days(&to)
    }

    fn expect_day(&self, operation: &str) -> Day {
        match self {
            Self::Day(day) => *day,
            Self::Any => panic!("DayBound::{operation} called on AnyDay"),
        }
    }
}

impl From<Day> for DayBound {
    fn from(value: Day) -> Self {
        Self::Day(value)
    }
}

impl From<Option<Day>> for DayBound {
    fn from(value: Option<Day>) -> Self {
        value.map_or(Self::Any, Self::Day)
    }
}

impl PartialEq<Day> for DayBound {
    fn eq(&self, other: &Day) -> bool {
        self.day().as_ref() == Some(other)
    }
}

impl core::fmt::Display for DayBound {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Any => f.write_str("AnyDay"),
            Self::Day(day) => core::fmt::Display::fmt(day, f),
        }
    }
}
