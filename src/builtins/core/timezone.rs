//! This module implements `TimeZone` and its calendar conversions.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::{iter::Peekable, str::Chars};

use crate::parsers::FormattableOffset;
use crate::provider::TimeZoneProvider;
use crate::{
    error::ErrorMessage, iso::IsoDate, utils, DayError, DayResult, Instant, SECONDS_PER_DAY,
};

/// A time zone used to convert between instants and civil days.
///
/// A time zone is either an IANA identifier resolved through a
/// [`TimeZoneProvider`], or a fixed offset from UTC in minutes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeZone {
    IanaIdentifier(String),
    OffsetMinutes(i16),
}

impl TimeZone {
    /// The UTC time zone as a zero offset.
    pub const UTC: Self = Self::OffsetMinutes(0);

    /// Parses a `TimeZone` from a provided `&str`.
    ///
    /// Offsets are accepted as `Z`, `±HH`, `±HHMM` or `±HH:MM`. Any other
    /// value must be an identifier known to the provider.
    pub fn try_from_str_with_provider(
        source: &str,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<Self> {
        if source == "Z" {
            return Ok(Self::UTC);
        }
        let mut cursor = source.chars().peekable();
        if cursor.peek().is_some_and(is_ascii_sign) {
            return parse_offset(&mut cursor);
        } else if provider.check_identifier(source) {
            return Ok(Self::IanaIdentifier(source.to_owned()));
        }
        Err(DayError::range().with_enum(ErrorMessage::UnknownTimeZone))
    }

    /// Returns the identifier of this time zone.
    ///
    /// Offset time zones are rendered as `±HH:MM`.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            Self::IanaIdentifier(s) => s.clone(),
            Self::OffsetMinutes(minutes) => {
                use writeable::Writeable;
                FormattableOffset::from_minutes(*minutes)
                    .write_to_string()
                    .into_owned()
            }
        }
    }

    /// Returns the UTC offset in seconds in effect at the instant.
    pub fn offset_seconds_for(
        &self,
        instant: &Instant,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<i64> {
        self.offset_seconds_at(instant.epoch_seconds(), provider)
    }

    pub(crate) fn offset_seconds_at(
        &self,
        epoch_seconds: i64,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<i64> {
        match self {
            Self::OffsetMinutes(minutes) => Ok(i64::from(*minutes) * 60),
            Self::IanaIdentifier(identifier) => {
                provider.get_named_tz_offset_seconds(identifier, epoch_seconds)
            }
        }
    }

    /// Returns the local calendar date of the instant in this time zone.
    pub fn local_date_for(
        &self,
        instant: &Instant,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<IsoDate> {
        let epoch_seconds = instant.epoch_seconds();
        let offset = self.offset_seconds_at(epoch_seconds, provider)?;
        IsoDate::from_epoch_days(utils::epoch_seconds_to_epoch_days(epoch_seconds + offset))
    }

    /// Returns the epoch seconds for a local wall-clock time, expressed as
    /// seconds since 1970-01-01T00:00:00 local time.
    ///
    /// A local time skipped by a transition resolves to the instant after
    /// the transition, shifted forward by the length of the gap. A repeated
    /// local time resolves to its earlier instant.
    pub fn epoch_seconds_for_local(
        &self,
        local_seconds: i64,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<i64> {
        if let Self::OffsetMinutes(minutes) = self {
            return Ok(local_seconds - i64::from(*minutes) * 60);
        }

        // Assumes at most one offset change within a day of the local time,
        // so the offsets a day either side are the only candidates. Zones
        // with closer transitions resolve as if only one had happened.
        let before = self.offset_seconds_at(local_seconds - SECONDS_PER_DAY, provider)?;
        let after = self.offset_seconds_at(local_seconds + SECONDS_PER_DAY, provider)?;

        let mut earliest: Option<i64> = None;
        for offset in [before, after] {
            let candidate = local_seconds - offset;
            if self.offset_seconds_at(candidate, provider)? == offset {
                earliest = Some(earliest.map_or(candidate, |e| e.min(candidate)));
            }
        }

        // Gap: interpret with the offset in effect before the transition.
        Ok(earliest.unwrap_or(local_seconds - before))
    }

    /// Returns the first instant of the date in this time zone.
    pub fn start_of_day(
        &self,
        date: IsoDate,
        provider: &impl TimeZoneProvider,
    ) -> DayResult<Instant> {
        let epoch_seconds = self
            .epoch_seconds_for_local(date.to_utc_epoch_seconds(), provider)
            .map_err(|e| {
                #[cfg(feature = "log")]
                log::debug!("no start of day for {date:?} in {self:?}: {e}");
                e
            })?;
        Instant::from_epoch_seconds(epoch_seconds)
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::UTC
    }
}

#[inline]
fn is_ascii_sign(ch: &char) -> bool {
    *ch == '+' || *ch == '-'
}

fn parse_offset(chars: &mut Peekable<Chars<'_>>) -> DayResult<TimeZone> {
    let sign = chars.next().map_or(1, |c| if c == '+' { 1 } else { -1 });
    let hours = parse_digit_pair(chars)?;
    let minutes = match chars.peek() {
        None => 0,
        Some(':') => {
            chars.next();
            parse_digit_pair(chars)?
        }
        Some(_) => parse_digit_pair(chars)?,
    };

    if chars.next().is_some() {
        return Err(DayError::parse().with_enum(ErrorMessage::InvalidTimeZoneIdentifier));
    }
    if hours > 23 || minutes > 59 {
        return Err(DayError::range().with_enum(ErrorMessage::OffsetOutOfRange));
    }

    Ok(TimeZone::OffsetMinutes(sign * (hours * 60 + minutes)))
}

fn parse_digit_pair(chars: &mut Peekable<Chars<'_>>) -> DayResult<i16> {
    let mut value = 0i16;
    for _ in 0..2 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(DayError::parse().with_enum(ErrorMessage::InvalidTimeZoneIdentifier))?;
        value = value * 10 + digit as i16;
    }
    Ok(value)
}
