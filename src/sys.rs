//! Host clock and host time zone access.

use crate::provider::TimeZoneProvider;
use crate::time::EpochNanoseconds;
use crate::{DayError, DayResult, Instant, TimeZone};
use web_time::{SystemTime, UNIX_EPOCH};

impl Instant {
    /// Returns the current instant according to the host clock.
    pub fn now() -> DayResult<Self> {
        Self::try_from(get_system_nanoseconds()?)
    }
}

impl TimeZone {
    /// Returns the host time zone.
    ///
    /// Falls back to UTC when the host does not report a time zone, or
    /// reports one the provider has no data for.
    pub fn system_with_provider(provider: &impl TimeZoneProvider) -> DayResult<Self> {
        match get_system_timezone(provider) {
            Ok(tz) => Ok(tz),
            Err(_e) => {
                #[cfg(feature = "log")]
                log::warn!("falling back to UTC for the host time zone: {_e}");
                Ok(Self::UTC)
            }
        }
    }
}

#[inline]
pub(crate) fn get_system_timezone(provider: &impl TimeZoneProvider) -> DayResult<TimeZone> {
    iana_time_zone::get_timezone()
        .map(|s| TimeZone::try_from_str_with_provider(&s, provider))
        .map_err(|_| DayError::general("Error fetching system time zone"))?
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> DayResult<EpochNanoseconds> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| DayError::general("Error fetching system time"))
        .map(|d| EpochNanoseconds::from(d.as_nanos() as i128))
}
