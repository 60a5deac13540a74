//! Partial-precision temporal values.
//!
//! FHIR date and dateTime literals may omit trailing components (`"2024"`,
//! `"2024-03"`). Each wrapper stores the canonical literal text alongside
//! the precision it was written with and a fully resolved `chrono` value
//! (missing components default to their lowest value). Equality and hashing
//! include the text, so `"2024"` and `"2024-01-01"` are distinct values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use lumen_fhir_support::FhirError;

fn invalid(type_name: &'static str, text: &str) -> FhirError {
    FhirError::InvalidValue {
        type_name,
        value: text.to_string(),
    }
}

/// Precision a date literal was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    Year,
    YearMonth,
    Day,
}

/// A FHIR `date`: a calendar date with possibly reduced precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDate {
    text: String,
    precision: DatePrecision,
    date: NaiveDate,
}

impl PrecisionDate {
    /// Parse a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` literal.
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        let precision = match text.len() {
            4 => DatePrecision::Year,
            7 => DatePrecision::YearMonth,
            10 => DatePrecision::Day,
            _ => return Err(invalid("date", text)),
        };
        let date = match precision {
            DatePrecision::Year => {
                let year: i32 = text.parse().map_err(|_| invalid("date", text))?;
                NaiveDate::from_ymd_opt(year, 1, 1)
            }
            DatePrecision::YearMonth => {
                NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok()
            }
            DatePrecision::Day => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
        }
        .ok_or_else(|| invalid("date", text))?;
        Ok(Self {
            text: text.to_string(),
            precision,
            date,
        })
    }

    /// The canonical literal this value was parsed from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// The resolved date, with omitted components set to their lowest value.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for PrecisionDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            text: date.format("%Y-%m-%d").to_string(),
            precision: DatePrecision::Day,
            date,
        }
    }
}

impl FromStr for PrecisionDate {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Precision a dateTime literal was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimePrecision {
    Year,
    YearMonth,
    Day,
    /// Date, time of day and timezone offset all present.
    Full,
}

/// A FHIR `dateTime`: a date with optional time of day and offset.
///
/// When a time is present the literal must carry a timezone offset; the
/// date-only forms carry none.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDateTime {
    text: String,
    precision: DateTimePrecision,
    date: NaiveDate,
    instant: Option<DateTime<FixedOffset>>,
}

impl PrecisionDateTime {
    /// Parse a date literal or a full RFC 3339 timestamp.
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self {
                text: text.to_string(),
                precision: DateTimePrecision::Full,
                date: instant.date_naive(),
                instant: Some(instant),
            });
        }
        let date = PrecisionDate::parse(text).map_err(|_| invalid("dateTime", text))?;
        let precision = match date.precision() {
            DatePrecision::Year => DateTimePrecision::Year,
            DatePrecision::YearMonth => DateTimePrecision::YearMonth,
            DatePrecision::Day => DateTimePrecision::Day,
        };
        Ok(Self {
            text: text.to_string(),
            precision,
            date: date.date(),
            instant: None,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The fully resolved timestamp, present only at [`DateTimePrecision::Full`].
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        self.instant
    }
}

impl From<DateTime<FixedOffset>> for PrecisionDateTime {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self {
            text: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            precision: DateTimePrecision::Full,
            date: instant.date_naive(),
            instant: Some(instant),
        }
    }
}

impl FromStr for PrecisionDateTime {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A FHIR `time`: a time of day with at least second precision, no offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    text: String,
    time: NaiveTime,
}

impl PrecisionTime {
    /// Parse an `hh:mm:ss` literal with an optional fractional part.
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        if text.len() < 8 {
            return Err(invalid("time", text));
        }
        let time =
            NaiveTime::parse_from_str(text, "%H:%M:%S%.f").map_err(|_| invalid("time", text))?;
        Ok(Self {
            text: text.to_string(),
            time,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl FromStr for PrecisionTime {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A FHIR `instant`: a fully specified timestamp with timezone offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant {
    text: String,
    instant: DateTime<FixedOffset>,
}

impl PrecisionInstant {
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        let instant =
            DateTime::parse_from_rfc3339(text).map_err(|_| invalid("instant", text))?;
        Ok(Self {
            text: text.to_string(),
            instant,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl From<DateTime<FixedOffset>> for PrecisionInstant {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self {
            text: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            instant,
        }
    }
}

impl FromStr for PrecisionInstant {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_precision() {
        let year = PrecisionDate::parse("2024").unwrap();
        assert_eq!(year.precision(), DatePrecision::Year);
        assert_eq!(year.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(year.as_str(), "2024");

        let month = PrecisionDate::parse("2024-03").unwrap();
        assert_eq!(month.precision(), DatePrecision::YearMonth);
        assert_eq!(month.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let day = PrecisionDate::parse("2024-03-15").unwrap();
        assert_eq!(day.precision(), DatePrecision::Day);
        assert_eq!(day.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_date_rejects_malformed_literals() {
        for text in ["03/15/2024", "2024-13", "2024-02-30", "2024-3-5", ""] {
            assert!(PrecisionDate::parse(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_reduced_precision_dates_are_distinct_values() {
        let year = PrecisionDate::parse("2024").unwrap();
        let day = PrecisionDate::parse("2024-01-01").unwrap();
        assert_ne!(year, day);
        assert_eq!(year.date(), day.date());
    }

    #[test]
    fn test_date_time_forms() {
        let partial = PrecisionDateTime::parse("2024-03").unwrap();
        assert_eq!(partial.precision(), DateTimePrecision::YearMonth);
        assert!(partial.instant().is_none());

        let full = PrecisionDateTime::parse("2015-02-07T13:28:17-05:00").unwrap();
        assert_eq!(full.precision(), DateTimePrecision::Full);
        assert!(full.instant().is_some());
        assert_eq!(full.as_str(), "2015-02-07T13:28:17-05:00");

        // A time of day without an offset is not a valid dateTime.
        assert!(PrecisionDateTime::parse("2015-02-07T13:28:17").is_err());
    }

    #[test]
    fn test_time_requires_seconds() {
        assert!(PrecisionTime::parse("13:28:17").is_ok());
        assert!(PrecisionTime::parse("13:28:17.239").is_ok());
        assert!(PrecisionTime::parse("13:28").is_err());
        assert!(PrecisionTime::parse("25:00:00").is_err());
    }

    #[test]
    fn test_instant_requires_full_timestamp() {
        assert!(PrecisionInstant::parse("2015-02-07T13:28:17.239+02:00").is_ok());
        assert!(PrecisionInstant::parse("2015-02-07").is_err());
    }
}
