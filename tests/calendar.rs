use apt_rtc::calendar::days::{calendar_to_days, days_to_calendar};
use apt_rtc::calendar::{
    absolute_seconds, days_in_month, is_leap, validate, BrokenDownTime, Calendar, Weekday,
};
use apt_rtc::config::{BASE_YEAR, MAX_YEAR_OFFSET, MIN_YEAR_OFFSET};
use apt_rtc::RtcError;

fn every_date() -> impl Iterator<Item = (u8, u8, u8)> {
    (MIN_YEAR_OFFSET..=MAX_YEAR_OFFSET).flat_map(|year| {
        let leap = is_leap(BASE_YEAR + year as i32);
        (1..=12u8).flat_map(move |month| {
            let last = days_in_month(month, leap).unwrap();
            (1..=last).map(move |day| (year, month, day))
        })
    })
}

#[test]
fn test_round_trip_every_day() {
    for (year, month, day) in every_date() {
        for (hour, minute, second) in [(0, 0, 0), (12, 34, 56), (23, 59, 59)] {
            let t = BrokenDownTime::new(year, month, day, hour, minute, second);
            let (calendar, ticks) = Calendar::anchored(&t).unwrap();
            assert_eq!(calendar.to_elapsed_seconds(&t), Ok(ticks), "{}", t);
            assert_eq!(calendar.from_elapsed_seconds(ticks), Ok(t), "{}", t);
        }
    }
}

#[test]
fn test_round_trip_ignores_input_weekday() {
    let mut t = BrokenDownTime::new(24, 2, 29, 6, 0, 0);
    let expected = t;
    t.weekday = 1;
    let (calendar, ticks) = Calendar::anchored(&t).unwrap();
    let decoded = calendar.from_elapsed_seconds(ticks).unwrap();
    assert_eq!(decoded, expected);
    assert_eq!(decoded, t);
    assert_eq!(decoded.weekday, expected.weekday);
    assert_eq!(decoded.weekday(), Some(Weekday::Thursday));
}

#[test]
fn test_day_numbers_are_contiguous() {
    let mut expected = 0;
    for (year, month, day) in every_date() {
        let full_year = BASE_YEAR + year as i32;
        assert_eq!(calendar_to_days(full_year, month, day), Some(expected));
        assert_eq!(days_to_calendar(expected), Some((full_year, month, day)));
        expected += 1;
    }
    assert_eq!(expected, 36525);
}

#[test]
fn test_february_length_every_year() {
    for year in MIN_YEAR_OFFSET..=MAX_YEAR_OFFSET {
        let full_year = BASE_YEAR + year as i32;
        let expected = if is_leap(full_year) { 29 } else { 28 };
        assert_eq!(days_in_month(2, is_leap(full_year)), Some(expected));
        assert_eq!(validate(&BrokenDownTime::new(year, 2, expected, 0, 0, 0)), Ok(()));
        assert_eq!(
            validate(&BrokenDownTime::new(year, 2, expected + 1, 0, 0, 0)),
            Err(RtcError::InvalidDay)
        );
    }
}

#[test]
fn test_absolute_seconds_monotonic() {
    let mut previous = -1;
    for (year, month, day) in every_date() {
        for (hour, minute, second) in [(0, 0, 0), (0, 0, 1), (23, 59, 59)] {
            let t = BrokenDownTime::new(year, month, day, hour, minute, second);
            let seconds = absolute_seconds(&t).unwrap();
            assert!(seconds > previous, "{}", t);
            previous = seconds;
        }
    }
}

#[test]
fn test_elapsed_seconds_monotonic_within_year() {
    for year in [23u8, 24] {
        let (calendar, _) = Calendar::anchored(&BrokenDownTime::new(year, 1, 1, 0, 0, 0)).unwrap();
        let mut previous = None;
        for (_, month, day) in every_date().filter(|&(y, _, _)| y == year) {
            let t = BrokenDownTime::new(year, month, day, 8, 0, 0);
            let ticks = calendar.to_elapsed_seconds(&t).unwrap();
            if let Some(previous) = previous {
                assert_eq!(ticks - previous, 86400);
            }
            previous = Some(ticks);
        }
    }
}

#[test]
fn test_validator_rejections() {
    assert_eq!(validate(&BrokenDownTime::new(24, 5, 5, 10, 10, 60)), Err(RtcError::OutOfRange));
    assert_eq!(validate(&BrokenDownTime::new(24, 13, 5, 10, 10, 10)), Err(RtcError::OutOfRange));
    assert_eq!(validate(&BrokenDownTime::new(23, 2, 30, 0, 0, 0)), Err(RtcError::InvalidDay));
    assert_eq!(validate(&BrokenDownTime::new(24, 2, 30, 0, 0, 0)), Err(RtcError::InvalidDay));
}

#[test]
fn test_conversions_validate_first() {
    let (mut calendar, _) = Calendar::anchored(&BrokenDownTime::new(23, 1, 1, 0, 0, 0)).unwrap();
    let bad = BrokenDownTime::new(23, 2, 29, 0, 0, 0);
    assert_eq!(calendar.to_elapsed_seconds(&bad), Err(RtcError::InvalidDay));
    assert_eq!(calendar.set_reference(&bad), Err(RtcError::InvalidDay));
    assert_eq!(absolute_seconds(&bad), Err(RtcError::InvalidDay));
}

#[test]
fn test_known_weekdays() {
    let t = BrokenDownTime::new(0, 1, 1, 0, 0, 0);
    assert_eq!(t.weekday(), Some(Weekday::Saturday));

    let (calendar, ticks) = Calendar::anchored(&BrokenDownTime::new(24, 2, 29, 0, 0, 0)).unwrap();
    let leap_day = calendar.from_elapsed_seconds(ticks).unwrap();
    assert_eq!(leap_day.weekday(), Some(Weekday::Thursday));
}

#[test]
fn test_weekday_advances_daily() {
    let mut previous: Option<u8> = None;
    for (year, month, day) in every_date() {
        let weekday = BrokenDownTime::new(year, month, day, 0, 0, 0).weekday;
        assert!((1..=7).contains(&weekday));
        if let Some(previous) = previous {
            assert_eq!(weekday, previous % 7 + 1);
        }
        previous = Some(weekday);
    }
}

#[test]
fn test_cache_for_another_year_is_stale() {
    let (calendar, _) = Calendar::anchored(&BrokenDownTime::new(10, 3, 1, 0, 0, 0)).unwrap();
    let other = BrokenDownTime::new(11, 3, 1, 0, 0, 0);
    assert_eq!(calendar.to_elapsed_seconds(&other), Err(RtcError::CacheStale));

    let (calendar, ticks) = Calendar::anchored(&other).unwrap();
    assert_eq!(calendar.to_elapsed_seconds(&other), Ok(ticks));
}

#[test]
fn test_day_number_helpers_reject_malformed_input() {
    assert_eq!(calendar_to_days(2024, 0, 1), None);
    assert_eq!(calendar_to_days(2024, 13, 1), None);
    assert_eq!(calendar_to_days(2024, 1, 0), None);
    assert_eq!(days_to_calendar(-5), None);
    assert_eq!(apt_rtc::calendar::days_before_month(13, true), None);
}
