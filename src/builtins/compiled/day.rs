use crate::{builtins::TZ_PROVIDER, Day, DayError, DayResult, Instant, TimeZone};

impl Day {
    /// Returns the local day of `instant` in `time_zone`.
    ///
    /// Uses the global provider; see [`Day::from_instant_with_provider`].
    pub fn from_instant(instant: &Instant, time_zone: &TimeZone) -> DayResult<Self> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DayError::general("Unable to acquire lock"))?;
        Self::from_instant_with_provider(instant, time_zone, &*provider)
    }

    /// Returns the current day in `time_zone`.
    #[cfg(feature = "sys")]
    pub fn today_in(time_zone: &TimeZone) -> DayResult<Self> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DayError::general("Unable to acquire lock"))?;
        Self::today_in_with_provider(time_zone, &*provider)
    }

    /// Returns the current day in the host time zone.
    #[cfg(feature = "sys")]
    pub fn today() -> DayResult<Self> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DayError::general("Unable to acquire lock"))?;
        Self::today_with_provider(&*provider)
    }

    /// Returns the first instant of this day in `time_zone`.
    pub fn start_of_day(&self, time_zone: &TimeZone) -> DayResult<Instant> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DayError::general("Unable to acquire lock"))?;
        self.start_of_day_with_provider(time_zone, &*provider)
    }

    /// Returns whether `instant` falls on this day in `time_zone`.
    ///
    /// Returns `false` if the global provider cannot be locked.
    #[must_use]
    pub fn contains(&self, instant: &Instant, time_zone: &TimeZone) -> bool {
        let Ok(provider) = TZ_PROVIDER.lock() else {
            return false;
        };
        self.contains_with_provider(instant, time_zone, &*provider)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Day, Instant, TimeZone};

    #[test]
    fn global_provider_resolves_named_zones() {
        let tz = TimeZone::try_from_str("America/New_York").unwrap();
        let day = Day::new(2021, 3, 14).unwrap();
        let start = day.start_of_day(&tz).unwrap();
        assert_eq!(start.epoch_seconds(), 1_615_698_000);
        assert!(day.contains(&start, &tz));

        // 2020-04-06T03:30:00Z
        let instant = Instant::from_epoch_seconds(1_586_143_800).unwrap();
        assert_eq!(
            Day::from_instant(&instant, &tz).unwrap(),
            Day::new(2020, 4, 5).unwrap()
        );
    }

    #[cfg(feature = "sys")]
    #[test]
    fn today_is_within_a_day_of_utc_today() {
        let utc = Day::today_in(&TimeZone::UTC).unwrap();
        let local = Day::today().unwrap();
        assert!(utc.distance_in_days(&local).abs() <= 1);
    }
}
