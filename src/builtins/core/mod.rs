//! The core implementation of the `civil_day` builtins.
//!
//! Every operation here that depends on time zone rules takes an explicit
//! [`TimeZoneProvider`](crate::provider::TimeZoneProvider).

pub mod timezone;

mod bound;
mod day;
mod instant;

#[doc(inline)]
pub use bound::DayBound;
#[doc(inline)]
pub use day::{Day, DayRange, Weekday};
#[doc(inline)]
pub use instant::Instant;
