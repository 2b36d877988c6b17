//! Timestamps and date ranges.
//!
//! Timestamps come either as a number of milliseconds since the epoch
//! (`"1343670421687"`) or as ISO 8601 date-times
//! (`"2012-07-30T17:47:01.687Z"`).  Dates are `yyyy-mm-dd` strings.

use std::borrow::Cow;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use crate::error::{Error, Result};

/// Format of the dates used by [`DateRange`] and [`date_in_range`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO 8601 date-times with an explicit offset.  `%.f` makes the
/// fractional seconds optional.
const OFFSET_FORMATS: [&str; 2] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// ISO 8601 date-times without offset, taken as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp to a UTC instant.
///
/// The string is first read as an integer number of milliseconds
/// since the epoch.  Only if that fails is it parsed as an ISO 8601
/// date-time, a trailing `Z` standing for `+00:00`.
///
/// ```
/// use chronomap::parse_timestamp;
/// let a = parse_timestamp("1343670421687")?;
/// let b = parse_timestamp("2012-07-30T17:47:01.687Z")?;
/// assert_eq!(a, b);
/// # Ok::<(), chronomap::Error>(())
/// ```
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>> {
    match timestamp.trim().parse::<i64>() {
        Ok(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or(Error::TimestampOutOfRange(ms)),
        Err(_) => {
            log::trace!("{timestamp:?} is not an epoch in ms, trying ISO 8601");
            parse_iso8601(timestamp)
        }
    }
}

fn parse_iso8601(timestamp: &str) -> Result<DateTime<Utc>> {
    let trimmed = timestamp.trim();
    let s: Cow<str> = match trimmed.strip_suffix(['Z', 'z']) {
        Some(t) => format!("{t}+00:00").into(),
        None => trimmed.into(),
    };
    // The error of the most common form is the one reported.
    let source = match DateTime::parse_from_str(&s, OFFSET_FORMATS[0]) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };
    if let Some(dt) = OFFSET_FORMATS[1..].iter()
        .find_map(|f| DateTime::parse_from_str(&s, f).ok()) {
        return Ok(dt.with_timezone(&Utc))
    }
    if let Some(dt) = NAIVE_FORMATS.iter()
        .find_map(|f| NaiveDateTime::parse_from_str(&s, f).ok()) {
        return Ok(dt.and_utc())
    }
    match NaiveDate::parse_from_str(&s, DATE_FORMAT) {
        Ok(d) => Ok(d.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => Err(Error::InvalidTimestamp { input: timestamp.to_string(),
                                                source }),
    }
}

/// Parse a `yyyy-mm-dd` date.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|source| Error::InvalidDate { input: date.to_string(),
                                               source })
}

/// An inclusive range of dates, each bound being optional.
///
/// ```
/// use chronomap::DateRange;
/// let r = DateRange::parse(Some("2012-07-01"), None)?;
/// assert!(r.contains(chronomap::parse_date("2012-07-01")?));
/// assert!(!r.contains(chronomap::parse_date("2012-06-30")?));
/// # Ok::<(), chronomap::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateRange {
    /// The range containing every date.
    pub const UNBOUNDED: DateRange = DateRange { min: None, max: None };

    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        DateRange { min, max }
    }

    /// Build a range from optional `yyyy-mm-dd` bounds.
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Result<Self> {
        Ok(DateRange { min: min.map(parse_date).transpose()?,
                       max: max.map(parse_date).transpose()? })
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `min <= date <= max`, absent bounds imposing nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| min <= date)
            && self.max.map_or(true, |max| date <= max)
    }
}

impl TryFrom<(Option<&str>, Option<&str>)> for DateRange {
    type Error = Error;

    fn try_from((min, max): (Option<&str>, Option<&str>)) -> Result<Self> {
        DateRange::parse(min, max)
    }
}

/// Whether the date of `timestamp` (in UTC) lies in `range`.  The
/// timestamp is not even parsed when the range is unbounded.
pub fn timestamp_in_range(timestamp: &str, range: &DateRange) -> Result<bool> {
    if range.is_unbounded() { return Ok(true) }
    let date = parse_timestamp(timestamp)?.date_naive();
    Ok(range.contains(date))
}

/// Whether the `yyyy-mm-dd` `date` lies in `range`.  The date is not
/// even parsed when the range is unbounded.
pub fn date_in_range(date: &str, range: &DateRange) -> Result<bool> {
    if range.is_unbounded() { return Ok(true) }
    Ok(range.contains(parse_date(date)?))
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_milliseconds() {
        let t = parse_timestamp("1343670421687").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2012, 7, 30, 17, 47, 1).unwrap()
                   + chrono::Duration::milliseconds(687));
        assert_eq!(parse_timestamp("0").unwrap(), DateTime::UNIX_EPOCH);
        assert_eq!(parse_timestamp("-1000").unwrap().timestamp(), -1);
        assert_eq!(parse_timestamp(" 1000 \n").unwrap().timestamp(), 1);
    }

    #[test]
    fn epoch_out_of_range() {
        assert!(matches!(parse_timestamp(&i64::MAX.to_string()),
                         Err(Error::TimestampOutOfRange(i64::MAX))));
    }

    #[test]
    fn iso8601_forms() {
        let t = parse_timestamp("2012-08-03T03:53:44Z").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2012, 8, 3, 3, 53, 44).unwrap());
        let t = parse_timestamp("2012-07-30T17:47:01.687Z").unwrap();
        assert_eq!(t.nanosecond(), 687_000_000);
        let t = parse_timestamp("2012-08-03T05:53:44+02:00").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2012, 8, 3, 3, 53, 44).unwrap());
        let t = parse_timestamp("2012-08-03 03:53:44").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2012, 8, 3, 3, 53, 44).unwrap());
        let t = parse_timestamp("2012-08-03").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2012, 8, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn malformed_timestamps() {
        for s in ["", "yesterday", "2012-13-03T03:53:44Z", "12.5",
                  "99999999999999999999999"] {
            match parse_timestamp(s) {
                Err(Error::InvalidTimestamp { input, .. }) => assert_eq!(input, s),
                r => panic!("{s:?} gave {r:?}"),
            }
        }
    }

    #[test]
    fn offsets_shift_the_date() {
        // Late evening in New York is the next day in UTC.
        let range = DateRange::new(Some(ymd(2012, 8, 4)), None);
        assert!(timestamp_in_range("2012-08-03T22:00:00-04:00", &range).unwrap());
        assert!(!timestamp_in_range("2012-08-03T19:00:00-04:00", &range).unwrap());
    }

    #[test]
    fn bounds_are_inclusive() {
        let r = DateRange::parse(Some("2020-01-01"), Some("2020-12-31")).unwrap();
        assert!(date_in_range("2020-01-01", &r).unwrap());
        assert!(date_in_range("2020-12-31", &r).unwrap());
        assert!(!date_in_range("2019-12-31", &r).unwrap());
        assert!(!date_in_range("2021-01-01", &r).unwrap());
    }

    #[test]
    fn half_open_ranges() {
        let from: DateRange = (Some("2020-06-15"), None).try_into().unwrap();
        assert!(date_in_range("2999-01-01", &from).unwrap());
        assert!(!date_in_range("2020-06-14", &from).unwrap());
        let until: DateRange = (None, Some("2020-06-15")).try_into().unwrap();
        assert!(date_in_range("1900-01-01", &until).unwrap());
        assert!(!date_in_range("2020-06-16", &until).unwrap());
    }

    #[test]
    fn unbounded_range_skips_parsing() {
        assert!(date_in_range("not a date", &DateRange::UNBOUNDED).unwrap());
        assert!(timestamp_in_range("garbage", &DateRange::UNBOUNDED).unwrap());
        assert_eq!(DateRange::default(), DateRange::UNBOUNDED);
    }

    #[test]
    fn malformed_dates() {
        let r = DateRange::new(Some(ymd(2020, 1, 1)), None);
        assert!(matches!(date_in_range("2020/01/02", &r),
                         Err(Error::InvalidDate { .. })));
        assert!(matches!(DateRange::parse(None, Some("31-12-2020")),
                         Err(Error::InvalidDate { .. })));
        assert!(matches!(timestamp_in_range("soon", &r),
                         Err(Error::InvalidTimestamp { .. })));
    }
}
