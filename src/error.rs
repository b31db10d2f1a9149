//! This module implements `DayError`.

use alloc::borrow::Cow;
use core::fmt;

/// `DayError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error kind for host and general errors.
    #[default]
    Generic,
    /// A year, month, day triple that is not a Gregorian date.
    InvalidDate,
    /// A string that is not a well-formed day key or time zone.
    Parse,
    /// A value outside of its supported range.
    Range,
    /// An internal invariant that did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::InvalidDate => "InvalidDate",
            Self::Parse => "ParseError",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        })
    }
}

/// The error type for `civil_day`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl DayError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid date error.
    #[inline]
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create a parse error.
    #[inline]
    #[must_use]
    pub const fn parse() -> Self {
        Self::new(ErrorKind::Parse)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = ErrorMessage::String(msg.into());
        self
    }

    /// Add a predefined message to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        self.msg.as_str()
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        match self.msg {
            ErrorMessage::String(s) => s,
            other => Cow::Borrowed(other.as_static_str()),
        }
    }
}

impl fmt::Display for DayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.message();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for DayError {}

/// Predefined error messages.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorMessage {
    None,
    String(Cow<'static, str>),
    NotAGregorianDate,
    DayOutOfRange,
    InstantOutOfRange,
    OffsetOutOfRange,
    KeyTokenCount,
    KeyTokenNotANumber,
    UnknownTimeZone,
    InvalidTimeZoneIdentifier,
}

impl ErrorMessage {
    fn as_str(&self) -> &str {
        match self {
            Self::String(s) => s.as_ref(),
            other => other.as_static_str(),
        }
    }

    fn as_static_str(&self) -> &'static str {
        match self {
            Self::None | Self::String(_) => "",
            Self::NotAGregorianDate => "year, month and day do not form a Gregorian date.",
            Self::DayOutOfRange => "day is outside of the representable range.",
            Self::InstantOutOfRange => "instant nanoseconds are not within a valid epoch range.",
            Self::OffsetOutOfRange => "UTC offset is outside of the supported range.",
            Self::KeyTokenCount => "day key must contain exactly three ':' separated tokens.",
            Self::KeyTokenNotANumber => "day key tokens must be decimal integers.",
            Self::UnknownTimeZone => "time zone identifier does not exist.",
            Self::InvalidTimeZoneIdentifier => "time zone identifier is not well-formed.",
        }
    }
}
