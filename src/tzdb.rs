//! A TZif backed [`TimeZoneProvider`].
//!
//! Zone data is read from the host zoneinfo directory when available and
//! from the `jiff-tzdb` bundled database otherwise.

// NOTE: the layout follows RFC 8536. Offsets from the data block and the
// footer are normalized to seconds east of UTC; POSIX TZ strings store them
// west of UTC.

use std::path::{Path, PathBuf};

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::cell::RefCell;

use combine::Parser;

use tzif::{
    self,
    data::{
        posix::{PosixTzString, TransitionDay, TimeZoneVariantInfo as ZoneVariantInfo},
        time::Seconds,
        tzif::{DataBlock, LocalTimeTypeRecord, TzifData},
    },
};

use crate::{
    error::ErrorMessage, provider::TimeZoneProvider, utils, DayError, DayResult, SECONDS_PER_DAY,
};

const ZONEINFO_DIR: &str = "/usr/share/zoneinfo";

/// `LocalTimeRecord` represents a local time offset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimeRecord {
    /// Whether the local time record is a Daylight Savings Time.
    pub is_dst: bool,
    /// The time zone offset in seconds east of UTC.
    pub offset: i64,
}

impl LocalTimeRecord {
    fn from_daylight_savings_time(info: &ZoneVariantInfo) -> Self {
        Self {
            is_dst: true,
            offset: -info.offset.0,
        }
    }

    fn from_standard_time(info: &ZoneVariantInfo) -> Self {
        Self {
            is_dst: false,
            offset: -info.offset.0,
        }
    }
}

impl From<LocalTimeTypeRecord> for LocalTimeRecord {
    fn from(value: LocalTimeTypeRecord) -> Self {
        Self {
            is_dst: value.is_dst,
            offset: value.utoff.0,
        }
    }
}

/// Parsed `TZif` data for a single zone, as laid out by [RFC 8536][rfc8536].
///
/// Only the most precise data block is kept: the 64-bit block of a v2+
/// file, or the 32-bit block of a v1 file.
///
/// [rfc8536]: https://datatracker.ietf.org/doc/html/rfc8536
#[derive(Debug, Clone)]
pub struct Tzif {
    data_block: DataBlock,
    footer: Option<PosixTzString>,
}

impl From<TzifData> for Tzif {
    fn from(value: TzifData) -> Self {
        let TzifData {
            data_block1,
            data_block2,
            footer,
            ..
        } = value;

        Self {
            data_block: data_block2.unwrap_or(data_block1),
            footer,
        }
    }
}

impl Tzif {
    pub fn from_bytes(data: &[u8]) -> DayResult<Self> {
        let Ok((parse_result, _)) = tzif::parse::tzif::tzif().parse(data) else {
            return Err(DayError::general("Illformed Tzif data."));
        };
        Ok(Self::from(parse_result))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> DayResult<Self> {
        tzif::parse_tzif_file(path.as_ref())
            .map(Into::into)
            .map_err(|e| DayError::general(e.to_string()))
    }

    pub fn posix_tz_string(&self) -> Option<&PosixTzString> {
        self.footer.as_ref()
    }

    /// Returns the local time record in effect at `epoch_seconds`.
    pub fn get(&self, epoch_seconds: &Seconds) -> DayResult<LocalTimeRecord> {
        let db = &self.data_block;
        let transitions = &db.transition_times;

        match transitions.binary_search(epoch_seconds) {
            Ok(idx) => get_local_record(db, idx),
            Err(_) if transitions.is_empty() => match self.posix_tz_string() {
                Some(posix) => resolve_posix_tz_string(posix, epoch_seconds.0),
                None => first_local_record(db),
            },
            // Before the first transition, RFC 8536 uses local time type 0.
            Err(0) => first_local_record(db),
            Err(idx) if idx == transitions.len() => match self.posix_tz_string() {
                Some(posix) => resolve_posix_tz_string(posix, epoch_seconds.0),
                None => get_local_record(db, idx - 1),
            },
            Err(idx) => get_local_record(db, idx - 1),
        }
    }

    /// Returns the UTC offset in seconds in effect at `epoch_seconds`.
    pub fn offset_seconds_at(&self, epoch_seconds: i64) -> DayResult<i64> {
        self.get(&Seconds(epoch_seconds)).map(|r| r.offset)
    }
}

#[inline]
fn get_local_record(db: &DataBlock, idx: usize) -> DayResult<LocalTimeRecord> {
    // NOTE: Transition types can be empty, in which case the first local
    // time type record applies.
    let record_idx = db.transition_types.get(idx).copied().unwrap_or(0);
    db.local_time_type_records
        .get(record_idx)
        .copied()
        .map(Into::into)
        .ok_or(DayError::general("Illformed Tzif data."))
}

#[inline]
fn first_local_record(db: &DataBlock) -> DayResult<LocalTimeRecord> {
    db.local_time_type_records
        .first()
        .copied()
        .map(Into::into)
        .ok_or(DayError::general("Illformed Tzif data."))
}

/// Resolves the footer of a tzif file for a UTC epoch second.
fn resolve_posix_tz_string(
    posix_tz_string: &PosixTzString,
    epoch_seconds: i64,
) -> DayResult<LocalTimeRecord> {
    let std = LocalTimeRecord::from_standard_time(&posix_tz_string.std_info);
    let Some(dst_info) = &posix_tz_string.dst_info else {
        // Regardless of the time, there is one variant and we can return it.
        return Ok(std);
    };
    let dst = LocalTimeRecord::from_daylight_savings_time(&dst_info.variant_info);

    let local_days = utils::epoch_seconds_to_epoch_days(epoch_seconds + std.offset);
    let (year, _, _) = utils::ymd_from_epoch_days(local_days);
    let year = i32::try_from(year).map_err(|_| DayError::range())?;

    // STD -> DST is the start transition, given in standard local time.
    // DST -> STD is the end transition, given in daylight local time.
    let start = &dst_info.start_date;
    let end = &dst_info.end_date;
    let start = rule_epoch_days(year, &start.day)? * SECONDS_PER_DAY + start.time.0 - std.offset;
    let end = rule_epoch_days(year, &end.day)? * SECONDS_PER_DAY + end.time.0 - dst.offset;

    // Southern hemisphere rules start DST late in the year and end it early.
    let is_dst = if start <= end {
        start <= epoch_seconds && epoch_seconds < end
    } else {
        epoch_seconds < end || start <= epoch_seconds
    };

    Ok(if is_dst { dst } else { std })
}

/// Returns the epoch days of the day a POSIX transition rule selects in `year`.
///
/// For more information, see the [POSIX tz string docs](https://sourceware.org/glibc/manual/2.40/html_node/Proleptic-TZ.html)
fn rule_epoch_days(year: i32, day: &TransitionDay) -> DayResult<i64> {
    let year_start = utils::epoch_days_for_year(year);
    match *day {
        // `Jn`: 1 based, February 29th is never counted.
        TransitionDay::NoLeap(n) => {
            let n = i64::from(n);
            let leap_shift = i64::from(utils::is_leap(year) && n > 59);
            Ok(year_start + n - 1 + leap_shift)
        }
        // `n`: 0 based, February 29th is counted.
        TransitionDay::WithLeap(n) => Ok(year_start + i64::from(n)),
        // `Mm.w.d`: weekday `d` of week `w` in month `m`, where week 5 is
        // the last such weekday of the month.
        TransitionDay::Mwd(month, week, weekday) => {
            let month = u8::try_from(month)
                .ok()
                .filter(|m| (1..=12).contains(m))
                .ok_or(DayError::general("Illformed POSIX tz string."))?;
            let first = utils::epoch_days_from_gregorian_date(year, month, 1);
            let first_weekday = i64::from(utils::epoch_days_to_day_of_week(first));
            let days_in_month = i64::from(utils::iso_days_in_month(year, month));

            let mut offset =
                (i64::from(weekday) - first_weekday).rem_euclid(7) + (i64::from(week) - 1) * 7;
            while offset >= days_in_month {
                offset -= 7;
            }
            Ok(first + offset)
        }
    }
}

/// A [`TimeZoneProvider`] reading TZif data, caching each parsed zone.
///
/// By default zones are read from `$TZDIR` or `/usr/share/zoneinfo`, with
/// the `jiff-tzdb` bundled database as a fallback.
#[derive(Debug)]
pub struct TzdbProvider {
    cache: RefCell<BTreeMap<String, Tzif>>,
    zoneinfo_dir: Option<PathBuf>,
}

impl Default for TzdbProvider {
    fn default() -> Self {
        Self::with_zoneinfo_dir(default_zoneinfo_dir())
    }
}

impl TzdbProvider {
    /// Creates a provider that reads zones from `zoneinfo_dir` before
    /// falling back to bundled data.
    pub fn with_zoneinfo_dir(zoneinfo_dir: Option<PathBuf>) -> Self {
        Self {
            cache: RefCell::default(),
            zoneinfo_dir,
        }
    }

    /// Creates a provider that only uses the bundled database.
    #[must_use]
    pub fn bundled() -> Self {
        Self::with_zoneinfo_dir(None)
    }

    fn with_tzif<T>(
        &self,
        identifier: &str,
        f: impl FnOnce(&Tzif) -> DayResult<T>,
    ) -> DayResult<T> {
        if let Some(tzif) = self.cache.borrow().get(identifier) {
            #[cfg(feature = "log")]
            log::trace!("tzif cache hit for {identifier}");
            return f(tzif);
        }

        let tzif = self.load(identifier)?;
        #[cfg(feature = "log")]
        log::debug!("caching tzif data for {identifier}");
        let result = f(&tzif);
        self.cache.borrow_mut().insert(identifier.into(), tzif);
        result
    }

    fn load(&self, identifier: &str) -> DayResult<Tzif> {
        if !is_safe_identifier(identifier) {
            return Err(DayError::range().with_enum(ErrorMessage::InvalidTimeZoneIdentifier));
        }

        if let Some(dir) = &self.zoneinfo_dir {
            let path = dir.join(identifier);
            if path.is_file() {
                match Tzif::from_path(&path) {
                    Ok(tzif) => return Ok(tzif),
                    Err(_e) => {
                        #[cfg(feature = "log")]
                        log::warn!(
                            "unreadable tzif file {}, using bundled data: {_e}",
                            path.display()
                        );
                    }
                }
            } else {
                #[cfg(feature = "log")]
                log::warn!("{identifier} not found in {}, using bundled data", dir.display());
            }
        }

        let Some((_canonical_name, data)) = jiff_tzdb::get(identifier) else {
            return Err(DayError::range().with_enum(ErrorMessage::UnknownTimeZone));
        };
        Tzif::from_bytes(data)
    }
}

impl TimeZoneProvider for TzdbProvider {
    fn check_identifier(&self, identifier: &str) -> bool {
        self.with_tzif(identifier, |_| Ok(())).is_ok()
    }

    fn get_named_tz_offset_seconds(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> DayResult<i64> {
        self.with_tzif(identifier, |tzif| tzif.offset_seconds_at(epoch_seconds))
    }
}

fn default_zoneinfo_dir() -> Option<PathBuf> {
    std::env::var_os("TZDIR")
        .map(PathBuf::from)
        .or_else(|| cfg!(not(target_os = "windows")).then(|| PathBuf::from(ZONEINFO_DIR)))
}

fn is_safe_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && !identifier.starts_with('/')
        && !identifier.contains('\\')
        && !identifier.contains("..")
}
