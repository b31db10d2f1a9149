//! The `civil_day` crate provides [`Day`], a calendar-day value type.
//!
//! A `Day` is a single civil day (year, month, day) in the proleptic
//! Gregorian calendar, independent of any time of day. It can be compared,
//! hashed, shifted by whole days, measured against other days, serialized to
//! a compact key, and converted to and from absolute [`Instant`]s in any
//! [`TimeZone`].
//!
//! ```rust
//! use civil_day::Day;
//!
//! let day = Day::new(2020, 2, 28).unwrap();
//! assert_eq!(day.add_days(1), Day::new(2020, 2, 29).unwrap());
//! assert_eq!(day.key(), "2:28:2020");
//! assert_eq!(Day::from_key("2:28:2020").unwrap(), day);
//! assert_eq!(day.full_formatted_string(), "February 28, 2020");
//! ```
//!
//! Conversions that depend on time zone rules take a
//! [`TimeZoneProvider`](crate::provider::TimeZoneProvider).
//! With the `compiled_data` feature, provider-less variants of those methods
//! use a process-wide TZif provider.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod error;
pub mod iso;
pub mod parsers;
pub mod provider;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;
mod epoch_nanoseconds;

#[cfg(feature = "tzdb")]
pub mod tzdb;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::DayError;

/// The `civil_day` result type
pub type DayResult<T> = Result<T, DayError>;

pub mod time {
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::builtins::{
    core::timezone::TimeZone, Day, DayBound, DayRange, Instant, Weekday,
};

#[cfg(feature = "compiled_data")]
pub use crate::builtins::TZ_PROVIDER;

pub use crate::parsers::{DayFormat, FormattableDay};

/// A library specific trait for unwrapping assertions.
pub(crate) trait DayUnwrap {
    type Output;

    /// `civil_day` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error at runtime.
    fn day_unwrap(self) -> DayResult<Self::Output>;
}

impl<T> DayUnwrap for Option<T> {
    type Output = T;

    fn day_unwrap(self) -> DayResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(DayError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! day_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DayError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DayError::assert());
        }
    };
}

// Relevant numeric constants
/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: i128 = 1_000_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i128 = SECONDS_PER_DAY as i128 * NS_PER_SECOND;
/// Max Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY * 100_000_000i128;
/// Min Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
