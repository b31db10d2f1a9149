//! This module implements parsing and formatting of day strings.
//!
//! The canonical key format is `{month}:{day}:{year}` with decimal integers
//! and no padding, e.g. `4:5:2020`. The display formats use a fixed English
//! name table and are not locale sensitive.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{error::ErrorMessage, iso::IsoDate, DayError, DayResult, Weekday};

const KEY_SEPARATOR: char = ':';

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ==== Key parsing ====

/// Parses a day key of the form `{month}:{day}:{year}`.
pub fn parse_day_key(source: &str) -> DayResult<IsoDate> {
    let mut tokens = source.split(KEY_SEPARATOR);
    let (Some(month), Some(day), Some(year), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(DayError::parse().with_enum(ErrorMessage::KeyTokenCount));
    };

    let month = parse_key_token(month)?;
    let day = parse_key_token(day)?;
    let year = parse_key_token(year)?;

    let not_a_date = || DayError::parse().with_enum(ErrorMessage::NotAGregorianDate);
    let year = i32::try_from(year).map_err(|_| not_a_date())?;
    let month = u8::try_from(month).map_err(|_| not_a_date())?;
    let day = u8::try_from(day).map_err(|_| not_a_date())?;

    IsoDate::try_new(year, month, day).map_err(|_| not_a_date())
}

/// Parses a token written as `0` or `-?[1-9][0-9]*`.
///
/// Signs other than a leading `-`, and leading zeros, are rejected so that
/// every day has exactly one key.
#[inline]
fn parse_key_token(token: &str) -> DayResult<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let is_canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == token.len(),
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if !is_canonical {
        return Err(DayError::parse().with_enum(ErrorMessage::KeyTokenNotANumber));
    }
    token
        .parse::<i64>()
        .map_err(|_| DayError::parse().with_enum(ErrorMessage::KeyTokenNotANumber))
}

// ==== Day formatting ====

/// The available string renderings of a day.
///
/// The examples show how 2020-04-05, a Sunday, is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayFormat {
    /// `4/5/2020`
    Description,
    /// `4/5`
    ShortDescription,
    /// `4:5:2020`
    Key,
    /// `Apr 5`
    ShortMonthDay,
    /// `Apr 5, 2020`
    ShortMonthDayYear,
    /// `Apr`
    ShortMonth,
    /// `April 5, 2020`
    FullFormatted,
    /// `Sunday, Apr 5`
    WeekdayDate,
}

/// A day paired with the format to render it in.
///
/// `FormattableDay` implements [`Writeable`] and `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableDay {
    pub(crate) date: IsoDate,
    pub(crate) format: DayFormat,
}

impl FormattableDay {
    pub(crate) const fn new(date: IsoDate, format: DayFormat) -> Self {
        Self { date, format }
    }

    #[inline]
    fn month_index(&self) -> usize {
        usize::from(self.date.month - 1)
    }

    fn short_month_name(&self) -> &'static str {
        SHORT_MONTH_NAMES[self.month_index()]
    }

    fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index()]
    }

    fn weekday(&self) -> Weekday {
        Weekday::from_day_of_week(self.date.day_of_week())
    }
}

impl Writeable for FormattableDay {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let IsoDate { year, month, day } = self.date;
        match self.format {
            DayFormat::Description => {
                write_numeric(month, day, '/', sink)?;
                sink.write_char('/')?;
                year.write_to(sink)
            }
            DayFormat::ShortDescription => write_numeric(month, day, '/', sink),
            DayFormat::Key => {
                write_numeric(month, day, KEY_SEPARATOR, sink)?;
                sink.write_char(KEY_SEPARATOR)?;
                year.write_to(sink)
            }
            DayFormat::ShortMonthDay => write_named(self.short_month_name(), day, None, sink),
            DayFormat::ShortMonthDayYear => {
                write_named(self.short_month_name(), day, Some(year), sink)
            }
            DayFormat::ShortMonth => sink.write_str(self.short_month_name()),
            DayFormat::FullFormatted => write_named(self.month_name(), day, Some(year), sink),
            DayFormat::WeekdayDate => {
                sink.write_str(self.weekday().name())?;
                sink.write_str(", ")?;
                write_named(self.short_month_name(), day, None, sink)
            }
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let IsoDate { year, month, day } = self.date;
        let year = year.writeable_length_hint();
        let month = month.writeable_length_hint();
        let day = day.writeable_length_hint();
        let short_month = LengthHint::exact(self.short_month_name().len());
        match self.format {
            DayFormat::Description | DayFormat::Key => month + day + year + 2,
            DayFormat::ShortDescription => month + day + 1,
            DayFormat::ShortMonthDay => short_month + day + 1,
            DayFormat::ShortMonthDayYear => short_month + day + year + 3,
            DayFormat::ShortMonth => short_month,
            DayFormat::FullFormatted => {
                LengthHint::exact(self.month_name().len()) + day + year + 3
            }
            DayFormat::WeekdayDate => {
                LengthHint::exact(self.weekday().name().len()) + short_month + day + 3
            }
        }
    }
}

fn write_numeric<W: core::fmt::Write + ?Sized>(
    month: u8,
    day: u8,
    separator: char,
    sink: &mut W,
) -> core::fmt::Result {
    month.write_to(sink)?;
    sink.write_char(separator)?;
    day.write_to(sink)
}

fn write_named<W: core::fmt::Write + ?Sized>(
    month_name: &str,
    day: u8,
    year: Option<i32>,
    sink: &mut W,
) -> core::fmt::Result {
    sink.write_str(month_name)?;
    sink.write_char(' ')?;
    day.write_to(sink)?;
    if let Some(year) = year {
        sink.write_str(", ")?;
        year.write_to(sink)?;
    }
    Ok(())
}

// ==== Offset formatting ====

/// A UTC offset rendered as `±HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FormattableOffset {
    negative: bool,
    hour: u8,
    minute: u8,
}

impl FormattableOffset {
    pub(crate) fn from_minutes(minutes: i16) -> Self {
        let abs = minutes.unsigned_abs();
        Self {
            negative: minutes < 0,
            hour: (abs / 60) as u8,
            minute: (abs % 60) as u8,
        }
    }
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char(if self.negative { '-' } else { '+' })?;
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(6)
    }
}

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

impl_display_with_writeable!(FormattableDay);
impl_display_with_writeable!(FormattableOffset);
