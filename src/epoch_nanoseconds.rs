use crate::{error::ErrorMessage, DayError, NS_PER_SECOND};

/// Nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochNanoseconds(pub(crate) i128);

impl From<i128> for EpochNanoseconds {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl EpochNanoseconds {
    pub fn from_seconds(seconds: i64) -> Self {
        Self(i128::from(seconds) * NS_PER_SECOND)
    }

    pub fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns the epoch seconds, rounded toward negative infinity.
    pub fn as_seconds(&self) -> i64 {
        // The instant range keeps the quotient well within an i64.
        self.0.div_euclid(NS_PER_SECOND) as i64
    }

    pub fn check_validity(&self) -> Result<(), DayError> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(DayError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(())
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (crate::NS_MIN_INSTANT..=crate::NS_MAX_INSTANT).contains(nanos)
}
