use crate::{builtins::TZ_PROVIDER, DayError, DayResult, TimeZone};

impl TimeZone {
    /// Parses a `TimeZone` using the global provider.
    pub fn try_from_str(source: &str) -> DayResult<Self> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DayError::general("Unable to acquire lock"))?;
        Self::try_from_str_with_provider(source, &*provider)
    }

    /// Returns the host time zone.
    #[cfg(feature = "sys")]
    pub fn system() -> DayResult<Self> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DayError::general("Unable to acquire lock"))?;
        Self::system_with_provider(&*provider)
    }
}

impl core::str::FromStr for TimeZone {
    type Err = DayError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}
