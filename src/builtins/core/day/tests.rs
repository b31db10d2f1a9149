use super::{Day, Weekday};
use crate::{error::ErrorKind, provider::NeverProvider, Instant, TimeZone};
use alloc::{string::ToString, vec::Vec};
use core::str::FromStr;
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

fn day(year: i32, month: u8, day: u8) -> Day {
    Day::new(year, month, day).unwrap()
}

fn hash_of(day: &Day) -> u64 {
    let mut hasher = DefaultHasher::new();
    day.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn construction_validity() {
    assert!(Day::new(2024, 2, 29).is_ok());
    assert!(Day::new(2000, 2, 29).is_ok());
    assert!(Day::new(0, 2, 29).is_ok());
    assert!(Day::new(2021, 12, 31).is_ok());

    for (y, m, d) in [
        (2023, 2, 29),
        (1900, 2, 29),
        (2021, 4, 31),
        (2021, 6, 31),
        (2021, 1, 0),
        (2021, 0, 1),
        (2021, 13, 1),
        (2021, 1, 32),
    ] {
        let err = Day::new(y, m, d).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate, "{y}-{m}-{d}");
    }
}

#[test]
fn accessors() {
    let d = day(2020, 4, 5);
    assert_eq!(d.year(), 2020);
    assert_eq!(d.month(), 4);
    assert_eq!(d.day(), 5);
    assert_eq!(d.weekday(), Weekday::Sunday);
    assert_eq!(d.to_epoch_days(), 18_357);
    assert_eq!(Day::from_epoch_days(18_357).unwrap(), d);
    assert_eq!(Day::from_epoch_days(0).unwrap(), day(1970, 1, 1));
    assert_eq!(day(1970, 1, 1).weekday(), Weekday::Thursday);
    assert_eq!(day(2021, 9, 30).weekday().short_name(), "Thu");
}

#[test]
fn key_round_trip() {
    let start = day(2019, 12, 25);
    for d in start.days_through(day(2021, 3, 5)) {
        assert_eq!(Day::from_key(&d.key()).unwrap(), d);
    }
    for d in [
        day(i32::MIN, 1, 1),
        day(i32::MAX, 12, 31),
        day(-1, 12, 31),
        day(0, 2, 29),
        day(10_000, 10, 10),
    ] {
        assert_eq!(Day::from_key(&d.key()).unwrap(), d);
        assert_eq!(Day::from_str(&d.key()).unwrap(), d);
    }
}

#[test]
fn rejects_bad_keys() {
    for key in [
        "4:5",
        "4:5:2020:0",
        "x:5:2020",
        "2:30:2020",
        "-5:1:2020",
        "4.0:5:2020",
        "04:05:2020",
        "+4:5:2020",
        "4:5:02020",
    ] {
        assert_eq!(Day::from_key(key).unwrap_err().kind(), ErrorKind::Parse, "{key}");
    }
}

#[test]
fn accepted_keys_are_canonical() {
    for key in ["4:5:2020", "12:31:-1", "1:1:0", "2:29:-2000", "10:10:10000"] {
        assert_eq!(Day::from_key(key).unwrap().key(), key);
    }
}

#[test]
fn ordering() {
    assert!(day(2020, 12, 31) < day(2021, 1, 1));
    assert!(day(2021, 1, 31) < day(2021, 2, 1));
    assert!(day(2021, 2, 1) < day(2021, 2, 2));
    assert!(day(-1, 12, 31) < day(0, 1, 1));

    let mut days: Vec<Day> = [day(2021, 1, 1), day(2020, 12, 31), day(2020, 1, 31), day(2020, 2, 1)]
        .into_iter()
        .collect();
    days.sort();
    assert_eq!(
        days,
        [day(2020, 1, 31), day(2020, 2, 1), day(2020, 12, 31), day(2021, 1, 1)]
    );

    let a = day(2020, 4, 5);
    let b = day(2020, 4, 6);
    assert_eq!(
        [a < b, a == b, b < a].into_iter().filter(|x| *x).count(),
        1
    );
}

#[test]
fn equal_days_hash_identically() {
    let direct = day(2020, 3, 1);
    let arithmetic = day(2020, 2, 28).add_days(2);
    let parsed = Day::from_key("3:1:2020").unwrap();
    assert_eq!(direct, arithmetic);
    assert_eq!(direct, parsed);
    assert_eq!(hash_of(&direct), hash_of(&arithmetic));
    assert_eq!(hash_of(&direct), hash_of(&parsed));

    let set: HashSet<Day> = [direct, arithmetic, parsed].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn rollover() {
    assert_eq!(day(2020, 1, 31).add_days(1), day(2020, 2, 1));
    assert_eq!(day(2020, 12, 31).add_days(1), day(2021, 1, 1));
    assert_eq!(day(2020, 2, 28).add_days(1), day(2020, 2, 29));
    assert_eq!(day(2021, 2, 28).add_days(1), day(2021, 3, 1));
    assert_eq!(day(2021, 1, 1).add_days(-1), day(2020, 12, 31));
    assert_eq!(day(2020, 3, 1).add_days(-1), day(2020, 2, 29));
    assert_eq!(day(2020, 1, 1).add_days(366), day(2021, 1, 1));
    assert_eq!(day(1970, 1, 1).add_days(0), day(1970, 1, 1));
}

#[test]
fn add_and_distance_are_inverse() {
    let days = [day(2020, 4, 5), day(1900, 2, 28), day(-400, 3, 1), day(2400, 12, 31)];
    let offsets = [0, 1, -1, 28, -29, 365, -366, 146_097, -1_000_000];
    for d in days {
        for n in offsets {
            let shifted = d.add_days(n);
            assert_eq!(shifted.distance_in_days(&d), -n, "{d} {n}");
            assert_eq!(d.distance_in_days(&shifted), n, "{d} {n}");
            assert_eq!(shifted - d, n);
        }
    }
}

#[test]
fn operators() {
    let mut d = day(2020, 2, 28);
    assert_eq!(d + 1, day(2020, 2, 29));
    assert_eq!(d - 59, day(2019, 12, 31));
    d += 2;
    assert_eq!(d, day(2020, 3, 1));
    d -= 1;
    assert_eq!(d, day(2020, 2, 29));
    assert_eq!(day(2021, 1, 1) - day(2020, 1, 1), 366);
    assert_eq!(day(2020, 1, 1) - day(2021, 1, 1), -366);
}

#[test]
fn checked_add_days_at_the_edges() {
    let max = day(i32::MAX, 12, 31);
    let min = day(i32::MIN, 1, 1);
    assert_eq!(max.checked_add_days(1).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(min.checked_add_days(-1).unwrap_err().kind(), ErrorKind::Range);
    assert!(max.checked_add_days(i64::MAX).is_err());
    assert_eq!(max.checked_add_days(-1).unwrap(), day(i32::MAX, 12, 30));
    assert_eq!(min.checked_add_days(min.distance_in_days(&max)).unwrap(), max);
}

#[test]
#[should_panic]
fn add_days_panics_past_the_last_year() {
    let _ = day(i32::MAX, 12, 31).add_days(1);
}

#[test]
#[should_panic]
fn sub_panics_on_minimum_offset() {
    let _ = day(2020, 1, 1) - i64::MIN;
}

#[test]
fn formatting_literals() {
    let d = day(2020, 4, 5);
    assert_eq!(d.description(), "4/5/2020");
    assert_eq!(d.short_description(), "4/5");
    assert_eq!(d.key(), "4:5:2020");
    assert_eq!(d.short_month_day_string(), "Apr 5");
    assert_eq!(d.short_month_day_year_string(), "Apr 5, 2020");
    assert_eq!(d.short_month_string(), "Apr");
    assert_eq!(d.full_formatted_string(), "April 5, 2020");
    assert_eq!(d.weekday_date_string(), "Sunday, Apr 5");
    assert_eq!(d.to_string(), "4/5/2020");

    let d = day(1999, 12, 31);
    assert_eq!(d.short_month_day_year_string(), "Dec 31, 1999");
    assert_eq!(d.weekday_date_string(), "Friday, Dec 31");
    assert_eq!(d.full_formatted_string(), "December 31, 1999");
}

#[test]
fn day_ranges() {
    let start = day(2020, 12, 30);
    let end = day(2021, 1, 2);

    let exclusive: Vec<Day> = start.days_until(end).collect();
    assert_eq!(exclusive, [day(2020, 12, 30), day(2020, 12, 31), day(2021, 1, 1)]);

    let inclusive = start.days_through(end);
    assert_eq!(inclusive.len(), 4);
    let reversed: Vec<Day> = inclusive.rev().collect();
    assert_eq!(reversed.first(), Some(&end));
    assert_eq!(reversed.last(), Some(&start));

    assert_eq!(end.days_until(start).count(), 0);
    assert_eq!(start.days_until(start).count(), 0);
    assert_eq!(start.days_through(start).count(), 1);

    let mut range = start.days_through(end);
    assert_eq!(range.next(), Some(start));
    assert_eq!(range.next_back(), Some(end));
    assert_eq!(range.len(), 2);
}

#[test]
fn utc_anchor() {
    let d = day(2020, 4, 5);
    assert_eq!(d.utc_anchor().unwrap().epoch_seconds(), 1_586_044_800);
    assert_eq!(
        day(i32::MAX, 1, 1).utc_anchor().unwrap_err().kind(),
        ErrorKind::Range
    );
}

#[test]
fn containment_with_fixed_offsets() {
    let provider = NeverProvider;
    let d = day(2020, 4, 5);
    for tz in [
        TimeZone::UTC,
        TimeZone::OffsetMinutes(330),
        TimeZone::OffsetMinutes(-600),
    ] {
        let start = d.start_of_day_with_provider(&tz, &provider).unwrap();
        assert!(d.contains_with_provider(&start, &tz, &provider));
        let before = start.checked_add_seconds(-1).unwrap();
        assert!(!d.contains_with_provider(&before, &tz, &provider));
        let last = start.checked_add_seconds(86_399).unwrap();
        assert!(d.contains_with_provider(&last, &tz, &provider));
        let next = start.checked_add_seconds(86_400).unwrap();
        assert!(!d.contains_with_provider(&next, &tz, &provider));
        assert!(d.add_days(1).contains_with_provider(&next, &tz, &provider));
    }
}

#[test]
fn containment_fails_closed() {
    let provider = NeverProvider;
    let instant = Instant::from_epoch_seconds(0).unwrap();
    let new_york = TimeZone::IanaIdentifier("America/New_York".into());
    assert!(!day(1970, 1, 1).contains_with_provider(&instant, &new_york, &provider));
    assert!(!day(i32::MAX, 12, 31).contains_with_provider(&instant, &TimeZone::UTC, &provider));
}

#[test]
fn from_instant_with_fixed_offsets() {
    let provider = NeverProvider;
    // 2020-04-06T03:30:00Z
    let instant = Instant::from_epoch_seconds(1_586_143_800).unwrap();
    let utc = Day::from_instant_with_provider(&instant, &TimeZone::UTC, &provider).unwrap();
    assert_eq!(utc, day(2020, 4, 6));
    let west =
        Day::from_instant_with_provider(&instant, &TimeZone::OffsetMinutes(-240), &provider)
            .unwrap();
    assert_eq!(west, day(2020, 4, 5));

    let before_epoch = Instant::try_new(-1).unwrap();
    let d = Day::from_instant_with_provider(&before_epoch, &TimeZone::UTC, &provider).unwrap();
    assert_eq!(d, day(1969, 12, 31));
}

#[cfg(feature = "tzdb")]
mod zoned {
    use super::day;
    use crate::{tzdb::TzdbProvider, Day, Instant, TimeZone};

    fn zone(provider: &TzdbProvider, identifier: &str) -> TimeZone {
        TimeZone::try_from_str_with_provider(identifier, provider).unwrap()
    }

    #[test]
    fn from_instant_in_named_zones() {
        let provider = TzdbProvider::bundled();
        // 2020-04-06T03:30:00Z
        let instant = Instant::from_epoch_seconds(1_586_143_800).unwrap();

        let new_york = zone(&provider, "America/New_York");
        let d = Day::from_instant_with_provider(&instant, &new_york, &provider).unwrap();
        assert_eq!(d, day(2020, 4, 5));

        let sydney = zone(&provider, "Australia/Sydney");
        let d = Day::from_instant_with_provider(&instant, &sydney, &provider).unwrap();
        assert_eq!(d, day(2020, 4, 6));
    }

    #[test]
    fn spring_forward_day_is_short() {
        let provider = TzdbProvider::bundled();
        let new_york = zone(&provider, "America/New_York");
        let d = day(2021, 3, 14);

        let start = d.start_of_day_with_provider(&new_york, &provider).unwrap();
        assert_eq!(start.epoch_seconds(), 1_615_698_000);
        let end = d
            .add_days(1)
            .start_of_day_with_provider(&new_york, &provider)
            .unwrap();
        assert_eq!(end.epoch_seconds(), 1_615_780_800);

        assert!(d.contains_with_provider(&start, &new_york, &provider));
        let before = start.checked_add_seconds(-1).unwrap();
        assert!(!d.contains_with_provider(&before, &new_york, &provider));
        let last = end.checked_add_seconds(-1).unwrap();
        assert!(d.contains_with_provider(&last, &new_york, &provider));
        assert!(!d.contains_with_provider(&end, &new_york, &provider));
    }

    #[test]
    fn fall_back_day_is_long() {
        let provider = TzdbProvider::bundled();
        let sydney = zone(&provider, "Australia/Sydney");
        let d = day(2020, 4, 5);

        let start = d.start_of_day_with_provider(&sydney, &provider).unwrap();
        assert_eq!(start.epoch_seconds(), 1_586_005_200);
        let end = d
            .add_days(1)
            .start_of_day_with_provider(&sydney, &provider)
            .unwrap();
        assert_eq!(end.epoch_seconds() - start.epoch_seconds(), 25 * 3_600);

        let last = end.checked_add_seconds(-1).unwrap();
        assert!(d.contains_with_provider(&last, &sydney, &provider));
    }

    #[test]
    fn skipped_midnight_starts_after_the_gap() {
        let provider = TzdbProvider::bundled();
        let sao_paulo = zone(&provider, "America/Sao_Paulo");
        let d = day(2018, 11, 4);

        let start = d.start_of_day_with_provider(&sao_paulo, &provider).unwrap();
        // 01:00 local, UTC-2
        assert_eq!(start.epoch_seconds(), 1_541_300_400);
        assert!(d.contains_with_provider(&start, &sao_paulo, &provider));
        let before = start.checked_add_seconds(-1).unwrap();
        assert!(!d.contains_with_provider(&before, &sao_paulo, &provider));
        assert!(d
            .add_days(-1)
            .contains_with_provider(&before, &sao_paulo, &provider));
    }

    #[test]
    fn skipped_day_contains_nothing() {
        let provider = TzdbProvider::bundled();
        let apia = zone(&provider, "Pacific/Apia");
        let skipped = day(2011, 12, 30);

        let start = skipped.start_of_day_with_provider(&apia, &provider).unwrap();
        // 2011-12-30T10:00:00Z, local time jumps from UTC-10 to UTC+14.
        assert_eq!(start.epoch_seconds(), 1_325_239_200);
        let next = skipped
            .add_days(1)
            .start_of_day_with_provider(&apia, &provider)
            .unwrap();
        assert_eq!(next, start);

        assert!(!skipped.contains_with_provider(&start, &apia, &provider));
        assert!(day(2011, 12, 31).contains_with_provider(&start, &apia, &provider));
        let before = start.checked_add_seconds(-1).unwrap();
        assert!(!skipped.contains_with_provider(&before, &apia, &provider));
        assert!(day(2011, 12, 29).contains_with_provider(&before, &apia, &provider));
        assert_eq!(
            Day::from_instant_with_provider(&start, &apia, &provider).unwrap(),
            day(2011, 12, 31)
        );
    }
}
