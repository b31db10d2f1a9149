//! An implementation of an absolute point in time.

use core::cmp::Ordering;

use crate::{
    error::ErrorMessage, time::EpochNanoseconds, DayError, DayResult, NS_PER_SECOND,
};

const NS_PER_MILLISECOND: i128 = 1_000_000;

/// An `Instant` is an exact point in time, independent of any time zone or
/// calendar, measured in nanoseconds since 1970-01-01T00:00:00Z.
///
/// Valid instants lie within 100,000,000 days on either side of the epoch.
///
/// ```rust
/// use civil_day::Instant;
///
/// let instant = Instant::from_epoch_seconds(1_586_044_800).unwrap();
/// assert_eq!(instant.epoch_milliseconds(), 1_586_044_800_000);
///
/// let earlier = instant.checked_add_seconds(-1).unwrap();
/// assert!(earlier < instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(EpochNanoseconds);

impl Instant {
    /// Creates a new `Instant` from epoch nanoseconds.
    pub fn try_new(epoch_nanoseconds: i128) -> DayResult<Self> {
        Self::try_from(EpochNanoseconds::from(epoch_nanoseconds))
    }

    /// Creates a new `Instant` from epoch seconds.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> DayResult<Self> {
        Self::try_from(EpochNanoseconds::from_seconds(epoch_seconds))
    }

    /// Creates a new `Instant` from epoch milliseconds.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> DayResult<Self> {
        Self::try_new(i128::from(epoch_milliseconds) * NS_PER_MILLISECOND)
    }

    /// Returns the epoch seconds of this instant, rounded toward negative infinity.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.0.as_seconds()
    }

    /// Returns the epoch milliseconds of this instant, rounded toward negative infinity.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.0.as_i128().div_euclid(NS_PER_MILLISECOND) as i64
    }

    /// Returns the epoch nanoseconds of this instant.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> i128 {
        self.0.as_i128()
    }

    /// Returns the instant `seconds` after this one.
    pub fn checked_add_seconds(&self, seconds: i64) -> DayResult<Self> {
        self.checked_add_nanoseconds(i128::from(seconds) * NS_PER_SECOND)
    }

    /// Returns the instant `nanoseconds` after this one.
    pub fn checked_add_nanoseconds(&self, nanoseconds: i128) -> DayResult<Self> {
        let result = self
            .epoch_nanoseconds()
            .checked_add(nanoseconds)
            .ok_or(DayError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        Self::try_new(result)
    }
}

impl TryFrom<EpochNanoseconds> for Instant {
    type Error = DayError;
    fn try_from(value: EpochNanoseconds) -> Result<Self, Self::Error> {
        value.check_validity()?;
        Ok(Self(value))
    }
}

impl From<Instant> for EpochNanoseconds {
    fn from(value: Instant) -> Self {
        value.0
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
