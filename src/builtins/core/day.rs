//! This module implements `Day` and its supporting types.

use alloc::string::String;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

use writeable::Writeable;

use crate::{
    iso::IsoDate,
    parsers::{self, DayFormat, FormattableDay},
    provider::TimeZoneProvider,
    DayError, DayResult, Instant, TimeZone,
};

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Maps a day of week index, where 0 is Sunday, onto a `Weekday`.
    pub(crate) const fn from_day_of_week(day_of_week: u8) -> Self {
        match day_of_week % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the English name of the weekday, e.g. `Sunday`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Returns the three letter abbreviation of the weekday, e.g. `Sun`.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}

/// A single civil day in the proleptic Gregorian calendar.
///
/// A `Day` holds a validated (year, month, day) triple and nothing else. It
/// is ordered, compared and hashed on that triple, so days built through
/// different paths are interchangeable.
///
/// ## Construction
///
/// ```rust
/// use civil_day::Day;
///
/// let day = Day::new(2020, 4, 5).unwrap();
/// assert_eq!(day.year(), 2020);
/// assert_eq!(day.month(), 4);
/// assert_eq!(day.day(), 5);
///
/// assert!(Day::new(2021, 2, 29).is_err());
/// ```
///
/// ## Arithmetic
///
/// ```rust
/// use civil_day::Day;
///
/// let day = Day::new(2019, 12, 31).unwrap();
/// let next = day.add_days(1);
/// assert_eq!(next, Day::new(2020, 1, 1).unwrap());
/// assert_eq!(day.distance_in_days(&next), 1);
/// assert_eq!(next - day, 1);
/// ```
///
/// ## Time zones
///
/// ```rust
/// use civil_day::{provider::NeverProvider, Day, TimeZone};
///
/// let day = Day::new(2020, 4, 5).unwrap();
/// let tz = TimeZone::OffsetMinutes(-300);
///
/// let start = day.start_of_day_with_provider(&tz, &NeverProvider).unwrap();
/// assert_eq!(start.epoch_seconds(), 1_586_062_800);
/// assert!(day.contains_with_provider(&start, &tz, &NeverProvider));
///
/// let before = start.checked_add_seconds(-1).unwrap();
/// assert!(!day.contains_with_provider(&before, &tz, &NeverProvider));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day {
    iso: IsoDate,
}

// ==== Private API ====

impl Day {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }
}

// ==== Public API ====

impl Day {
    /// Creates a new `Day`, failing with `InvalidDate` if the triple is not
    /// a Gregorian calendar date.
    #[inline]
    pub fn new(year: i32, month: u8, day: u8) -> DayResult<Self> {
        IsoDate::try_new(year, month, day).map(Self::new_unchecked)
    }

    /// Parses a `Day` from its key, `{month}:{day}:{year}`.
    ///
    /// ```rust
    /// use civil_day::Day;
    ///
    /// let day = Day::from_key("12:31:1999").unwrap();
    /// assert_eq!(day, Day::new(1999, 12, 31).unwrap());
    /// assert!(Day::from_key("12/31/1999").is_err());
    /// ```
    pub fn from_key(key: &str) -> DayResult<Self> {
        parsers::parse_day_key(key).map(Self::new_unchecked)
    }

    /// Creates a `Day` from days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i64) -> DayResult<Self> {
        IsoDate::from_epoch_days(epoch_days).map(Self::new_unchecked)
    }

    /// Returns the local day of `instant` in `time_zone`.
    pub fn from_instant_with_provider(
        instant: &Instant,
        time_zone: &TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<Self> {
        time_zone
            .local_date_for(instant, provider)
            .map(Self::new_unchecked)
    }

    /// Returns the current day in `time_zone`.
    #[cfg(feature = "sys")]
    pub fn today_in_with_provider(
        time_zone: &TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<Self> {
        let now = Instant::now()?;
        Self::from_instant_with_provider(&now, time_zone, provider)
    }

    /// Returns the current day in the host time zone.
    #[cfg(feature = "sys")]
    pub fn today_with_provider(provider: &impl TimeZoneProvider) -> DayResult<Self> {
        let time_zone = TimeZone::system_with_provider(provider)?;
        Self::today_in_with_provider(&time_zone, provider)
    }

    /// Returns the year of this day.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.year
    }

    /// Returns the month of this day, from 1 to 12.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.day
    }

    /// Returns the day of the week.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_of_week(self.iso.day_of_week())
    }

    /// Returns the underlying `IsoDate`.
    #[inline]
    #[must_use]
    pub const fn iso(&self) -> IsoDate {
        self.iso
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(&self) -> i64 {
        self.iso.to_epoch_days()
    }

    /// Returns midnight UTC of this day.
    ///
    /// This is the anchor used for day arithmetic. It is not the start of the
    /// day in any other time zone; use [`Day::start_of_day_with_provider`]
    /// for that.
    pub fn utc_anchor(&self) -> DayResult<Instant> {
        Instant::from_epoch_seconds(self.iso.to_utc_epoch_seconds())
    }

    /// Returns the day `days` after this one, or an error if the result
    /// leaves the representable year range.
    pub fn checked_add_days(&self, days: i64) -> DayResult<Self> {
        self.iso.checked_add_days(days).map(Self::new_unchecked)
    }

    /// Returns the day `days` after this one. Negative values move backward.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves the representable year range. Use
    /// [`Day::checked_add_days`] to handle that case.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        match self.checked_add_days(days) {
            Ok(day) => day,
            Err(e) => panic!("cannot add {days} days to {self}: {e}"),
        }
    }

    /// Returns the signed number of days from this day to `other`, so that
    /// `self.add_days(self.distance_in_days(&other)) == other`.
    #[inline]
    #[must_use]
    pub const fn distance_in_days(&self, other: &Self) -> i64 {
        self.iso.days_until(&other.iso)
    }

    /// Returns the first instant of this day in `time_zone`.
    ///
    /// If local midnight is skipped by a transition, this is the first
    /// instant after the transition.
    pub fn start_of_day_with_provider(
        &self,
        time_zone: &TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<Instant> {
        time_zone.start_of_day(self.iso, provider)
    }

    /// Returns whether `instant` falls on this day in `time_zone`.
    ///
    /// The day covers the half open range from its start of day up to the
    /// start of the following day. A day the zone skips entirely covers no
    /// instants. Returns `false` if either bound cannot be computed.
    pub fn contains_with_provider(
        &self,
        instant: &Instant,
        time_zone: &TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> bool {
        let bounds = self.start_of_day_with_provider(time_zone, provider).and_then(|start| {
            let end = self
                .checked_add_days(1)?
                .start_of_day_with_provider(time_zone, provider)?;
            Ok((start, end))
        });
        match bounds {
            Ok((start, end)) => start <= *instant && *instant < end,
            Err(_e) => {
                #[cfg(feature = "log")]
                log::debug!("no bounds for {self} in {time_zone:?}: {_e}");
                false
            }
        }
    }

    /// Returns an iterator over the days from this day up to, but not
    /// including, `end`.
    ///
    /// ```rust
    /// use civil_day::Day;
    ///
    /// let start = Day::new(2020, 2, 27).unwrap();
    /// let end = Day::new(2020, 3, 2).unwrap();
    /// let keys: Vec<_> = start.days_until(end).map(|d| d.key()).collect();
    /// assert_eq!(keys, ["2:27:2020", "2:28:2020", "2:29:2020", "3:1:2020"]);
    /// ```
    #[must_use]
    pub fn days_until(&self, end: Self) -> DayRange {
        DayRange::new(self.to_epoch_days(), end.to_epoch_days())
    }

    /// Returns an iterator over the days from this day through `end`.
    #[must_use]
    pub fn days_through(&self, end: Self) -> DayRange {
        DayRange::new(self.to_epoch_days(), end.to_epoch_days() + 1)
    }

    /// Returns this day paired with a format, for use with `Writeable` or
    /// `Display`.
    #[inline]
    #[must_use]
    pub const fn format(&self, format: DayFormat) -> FormattableDay {
        FormattableDay::new(self.iso, format)
    }

    fn render(&self, format: DayFormat) -> String {
        self.format(format).write_to_string().into_owned()
    }

    /// `M/D/YYYY`, e.g. `4/5/2020`.
    #[must_use]
    pub fn description(&self) -> String {
        self.render(DayFormat::Description)
    }

    /// `M/D`, e.g. `4/5`.
    #[must_use]
    pub fn short_description(&self) -> String {
        self.render(DayFormat::ShortDescription)
    }

    /// The canonical key, `M:D:YYYY`, e.g. `4:5:2020`.
    ///
    /// [`Day::from_key`] parses every key back into the same day.
    #[must_use]
    pub fn key(&self) -> String {
        self.render(DayFormat::Key)
    }

    /// e.g. `Apr 5`.
    #[must_use]
    pub fn short_month_day_string(&self) -> String {
        self.render(DayFormat::ShortMonthDay)
    }

    /// e.g. `Apr 5, 2020`.
    #[must_use]
    pub fn short_month_day_year_string(&self) -> String {
        self.render(DayFormat::ShortMonthDayYear)
    }

    /// e.g. `Apr`.
    #[must_use]
    pub fn short_month_string(&self) -> String {
        self.render(DayFormat::ShortMonth)
    }

    /// e.g. `April 5, 2020`.
    #[must_use]
    pub fn full_formatted_string(&self) -> String {
        self.render(DayFormat::FullFormatted)
    }

    /// e.g. `Sunday, Apr 5`.
    #[must_use]
    pub fn weekday_date_string(&self) -> String {
        self.render(DayFormat::WeekdayDate)
    }
}

// ==== Trait impls ====

impl From<Day> for IsoDate {
    fn from(value: Day) -> Self {
        value.iso
    }
}

impl TryFrom<IsoDate> for Day {
    type Error = DayError;
    fn try_from(value: IsoDate) -> Result<Self, Self::Error> {
        Self::new(value.year, value.month, value.day)
    }
}

impl FromStr for Day {
    type Err = DayError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl core::fmt::Display for Day {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Writeable::write_to(&self.format(DayFormat::Description), f)
    }
}

impl Add<i64> for Day {
    type Output = Self;
    fn add(self, rhs: i64) -> Self::Output {
        self.add_days(rhs)
    }
}

impl AddAssign<i64> for Day {
    fn add_assign(&mut self, rhs: i64) {
        *self = self.add_days(rhs);
    }
}

impl Sub<i64> for Day {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self::Output {
        match rhs.checked_neg() {
            Some(days) => self.add_days(days),
            None => panic!("cannot subtract {rhs} days from {self}"),
        }
    }
}

impl SubAssign<i64> for Day {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

impl Sub for Day {
    type Output = i64;
    fn sub(self, rhs: Self) -> Self::Output {
        rhs.distance_in_days(&self)
    }
}

// ==== DayRange ====

/// An ascending iterator over consecutive days.
///
/// Created by [`Day::days_until`] and [`Day::days_through`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRange {
    // Epoch days, `next..end`.
    next: i64,
    end: i64,
}

impl DayRange {
    fn new(start: i64, end: i64) -> Self {
        Self {
            next: start,
            end: end.max(start),
        }
    }
}

impl Iterator for DayRange {
    type Item = Day;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let day = Day::from_epoch_days(self.next).ok()?;
        self.next += 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for DayRange {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let day = Day::from_epoch_days(self.end - 1).ok()?;
        self.end -= 1;
        Some(day)
    }
}

impl ExactSizeIterator for DayRange {}

impl FusedIterator for DayRange {}

#[cfg(test)]
mod tests;
