//! The builtins of `civil_day`.

pub mod core;

#[cfg(feature = "compiled_data")]
mod compiled;

pub use self::core::*;

#[cfg(feature = "compiled_data")]
use crate::tzdb::TzdbProvider;
#[cfg(feature = "compiled_data")]
use std::sync::{LazyLock, Mutex};

/// The process-wide provider used by the provider-less APIs.
#[cfg(feature = "compiled_data")]
pub static TZ_PROVIDER: LazyLock<Mutex<TzdbProvider>> =
    LazyLock::new(|| Mutex::new(TzdbProvider::default()));
