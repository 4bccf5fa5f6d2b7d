//! Date and time values at the precisions KML allows.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta};
use regex::Regex;
use serde::{Serialize, Serializer};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})$").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_MONTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid regex"));

/// A `when`, `begin`, `end` or `expires` value.
///
/// The variant records the precision the source used so that it can be
/// written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KmlDateTime {
    /// `YYYY`
    Year(i32),
    /// `YYYY-MM`
    YearMonth(i32, u32),
    /// `YYYY-MM-DD`
    Date(NaiveDate),
    /// `YYYY-MM-DDThh:mm:ss` without a zone designator.
    Local(NaiveDateTime),
    /// `YYYY-MM-DDThh:mm:ss` with `Z` or a numeric offset.
    Zoned(DateTime<FixedOffset>),
}

impl KmlDateTime {
    /// Decode the most precise form that matches, or `None`.
    ///
    /// # Examples
    /// ```
    /// use kml_codec::scalar::KmlDateTime;
    ///
    /// assert_eq!(KmlDateTime::parse("1997"), Some(KmlDateTime::Year(1997)));
    /// assert_eq!(KmlDateTime::parse("1997-07"), Some(KmlDateTime::YearMonth(1997, 7)));
    /// assert!(matches!(KmlDateTime::parse("1997-07-16T07:30:15Z"), Some(KmlDateTime::Zoned(_))));
    /// assert_eq!(KmlDateTime::parse("16 July 1997"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some(caps) = YEAR_PATTERN.captures(input) {
            return caps[1].parse().ok().map(Self::Year);
        }

        if let Some(caps) = YEAR_MONTH_PATTERN.captures(input) {
            let year = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            return (1..=12).contains(&month).then_some(Self::YearMonth(year, month));
        }

        if !input.contains('T') {
            return NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(Self::Date);
        }

        if let Ok(zoned) = DateTime::parse_from_rfc3339(input) {
            return Some(Self::Zoned(zoned));
        }

        NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(Self::Local)
    }

    /// First instant covered by the value, in UTC where a zone is known.
    #[must_use]
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Year(year) => NaiveDate::from_ymd_opt(year, 1, 1).and_then(at_midnight),
            Self::YearMonth(year, month) => {
                NaiveDate::from_ymd_opt(year, month, 1).and_then(at_midnight)
            }
            Self::Date(date) => at_midnight(date),
            Self::Local(local) => Some(local),
            Self::Zoned(zoned) => Some(zoned.naive_utc()),
        }
    }

    /// Text form at the stored precision.
    #[must_use]
    pub fn to_kml_string(&self) -> String {
        match self {
            Self::Year(year) => format!("{year:04}"),
            Self::YearMonth(year, month) => format!("{year:04}-{month:02}"),
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Local(local) => local.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            Self::Zoned(zoned) if zoned.offset().local_minus_utc() == 0 => {
                zoned.format("%Y-%m-%dT%H:%M:%S%.fZ").to_string()
            }
            Self::Zoned(zoned) => zoned.format("%Y-%m-%dT%H:%M:%S%.f%:z").to_string(),
        }
    }
}

fn at_midnight(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
}

/// Elapsed time between two endpoints, when both are known.
#[must_use]
pub fn span_between(begin: Option<&KmlDateTime>, end: Option<&KmlDateTime>) -> Option<TimeDelta> {
    let begin = begin?.start_instant()?;
    let end = end?.start_instant()?;
    Some(end - begin)
}

impl fmt::Display for KmlDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kml_string())
    }
}

impl Serialize for KmlDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_kml_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_precision() {
        let value = KmlDateTime::parse("2004").unwrap();
        assert_eq!(value, KmlDateTime::Year(2004));
        assert_eq!(value.to_kml_string(), "2004");
    }

    #[test]
    fn test_year_month_precision() {
        let value = KmlDateTime::parse("2004-03").unwrap();
        assert_eq!(value, KmlDateTime::YearMonth(2004, 3));
        assert_eq!(value.to_kml_string(), "2004-03");
        assert_eq!(KmlDateTime::parse("2004-13"), None);
    }

    #[test]
    fn test_date_precision() {
        let value = KmlDateTime::parse(" 2004-03-21 ").unwrap();
        assert_eq!(
            value,
            KmlDateTime::Date(NaiveDate::from_ymd_opt(2004, 3, 21).unwrap())
        );
        assert_eq!(value.to_kml_string(), "2004-03-21");
    }

    #[test]
    fn test_utc_datetime_roundtrip() {
        let value = KmlDateTime::parse("2010-05-28T02:02:09Z").unwrap();
        assert!(matches!(value, KmlDateTime::Zoned(_)));
        assert_eq!(value.to_kml_string(), "2010-05-28T02:02:09Z");
    }

    #[test]
    fn test_offset_datetime_roundtrip() {
        let value = KmlDateTime::parse("2010-05-28T02:02:09-08:00").unwrap();
        assert_eq!(value.to_kml_string(), "2010-05-28T02:02:09-08:00");
        assert_eq!(KmlDateTime::parse(&value.to_kml_string()), Some(value));
    }

    #[test]
    fn test_fractional_seconds_survive() {
        let value = KmlDateTime::parse("2010-05-28T02:02:09.5Z").unwrap();
        assert_eq!(KmlDateTime::parse(&value.to_kml_string()), Some(value));
    }

    #[test]
    fn test_local_datetime() {
        let value = KmlDateTime::parse("2010-05-28T02:02:09").unwrap();
        assert!(matches!(value, KmlDateTime::Local(_)));
        assert_eq!(value.to_kml_string(), "2010-05-28T02:02:09");
    }

    #[test]
    fn test_invalid_is_absent() {
        assert_eq!(KmlDateTime::parse(""), None);
        assert_eq!(KmlDateTime::parse("yesterday"), None);
        assert_eq!(KmlDateTime::parse("2010-02-30"), None);
        assert_eq!(KmlDateTime::parse("2010-05-28Tnoon"), None);
    }

    #[test]
    fn test_span_between_endpoints() {
        let begin = KmlDateTime::parse("2010-05-28T02:00:00Z");
        let end = KmlDateTime::parse("2010-05-28T03:30:00Z");
        let span = span_between(begin.as_ref(), end.as_ref()).unwrap();
        assert_eq!(span.num_minutes(), 90);

        assert!(span_between(begin.as_ref(), None).is_none());
    }

    #[test]
    fn test_span_mixed_precision() {
        let begin = KmlDateTime::parse("2000");
        let end = KmlDateTime::parse("2000-01-02");
        let span = span_between(begin.as_ref(), end.as_ref()).unwrap();
        assert_eq!(span.num_days(), 1);
    }
}
