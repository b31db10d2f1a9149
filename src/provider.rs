//! The `TimeZoneProvider` trait.

use crate::{error::ErrorMessage, DayError, DayResult};

/// The `TimeZoneProvider` trait provides methods required for a provider
/// to implement in order to source time zone data from that provider.
///
/// Offsets are in seconds east of UTC.
pub trait TimeZoneProvider {
    /// Returns whether the provider has data for the identifier.
    fn check_identifier(&self, identifier: &str) -> bool;

    /// Returns the UTC offset in effect at the epoch seconds.
    fn get_named_tz_offset_seconds(&self, identifier: &str, epoch_seconds: i64)
        -> DayResult<i64>;
}

impl<P: TimeZoneProvider + ?Sized> TimeZoneProvider for &P {
    fn check_identifier(&self, identifier: &str) -> bool {
        (**self).check_identifier(identifier)
    }

    fn get_named_tz_offset_seconds(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> DayResult<i64> {
        (**self).get_named_tz_offset_seconds(identifier, epoch_seconds)
    }
}

/// A provider with no time zone data.
///
/// Only fixed offset time zones can be used with a `NeverProvider`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverProvider;

impl TimeZoneProvider for NeverProvider {
    fn check_identifier(&self, _: &str) -> bool {
        false
    }

    fn get_named_tz_offset_seconds(&self, _: &str, _: i64) -> DayResult<i64> {
        Err(DayError::range().with_enum(ErrorMessage::UnknownTimeZone))
    }
}
