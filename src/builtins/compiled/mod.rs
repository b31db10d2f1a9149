//! Provider-less APIs backed by [`TZ_PROVIDER`](crate::TZ_PROVIDER).

mod day;
mod timezone;
