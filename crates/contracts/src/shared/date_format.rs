//! Conversions between `datetime-local` input values, UTC instants and
//! display strings.
//!
//! Every function takes the time zone the user sees (`chrono::Local` in the
//! browser). The offset is resolved for each instant separately, so dates on
//! either side of a daylight-saving change convert with their own offset.

use std::fmt::Display;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a `datetime-local` value ("2024-01-05T09:30") entered in `tz`.
///
/// A wall-clock time repeated by a backward shift resolves to its first
/// occurrence; one skipped by a forward shift moves forward by an hour.
pub fn parse_local_input<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, INPUT_FORMAT_SECONDS))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|local| local.with_timezone(&Utc))
}

/// Render an instant as a `datetime-local` value in `tz`
pub fn to_local_input<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format(INPUT_FORMAT).to_string()
}

/// Display format used in summaries and details: "05-Jan-2024 09:30"
pub fn format_display<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant
        .with_timezone(tz)
        .format("%d-%b-%Y %H:%M")
        .to_string()
}

/// Display an optional timestamp, "-" when absent
pub fn format_optional<Tz>(instant: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant
        .map(|i| format_display(i, tz))
        .unwrap_or_else(|| "-".to_string())
}


#[cfg(test)]
mod tests {
    use super::fixtures::Eastern2024;
    use super::*;
    use chrono::FixedOffset;

    fn jakarta() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn test_parse_local_input() {
        let parsed = parse_local_input("2024-01-05T09:30", &jakarta()).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-05T02:30:00+00:00");

        let with_seconds = parse_local_input("2024-01-05T09:30:15", &Utc).unwrap();
        assert_eq!(with_seconds.to_rfc3339(), "2024-01-05T09:30:15+00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_local_input("", &Utc), None);
        assert_eq!(parse_local_input("05/01/2024", &Utc), None);
    }

    #[test]
    fn test_parse_uses_offset_of_each_date() {
        let before = parse_local_input("2024-11-02T10:00", &Eastern2024).unwrap();
        let after = parse_local_input("2024-11-03T10:00", &Eastern2024).unwrap();
        assert_eq!(before.to_rfc3339(), "2024-11-02T14:00:00+00:00");
        assert_eq!(after.to_rfc3339(), "2024-11-03T15:00:00+00:00");
    }

    #[test]
    fn test_parse_repeated_hour_takes_first() {
        let repeated = parse_local_input("2024-11-03T01:30", &Eastern2024).unwrap();
        assert_eq!(repeated.to_rfc3339(), "2024-11-03T05:30:00+00:00");
    }

    #[test]
    fn test_local_input_round_trip_in_offset() {
        let instant = parse_local_input("2024-03-15T14:02", &jakarta()).unwrap();
        assert_eq!(to_local_input(instant, &jakarta()), "2024-03-15T14:02");
    }

    #[test]
    fn test_format_display() {
        let instant = parse_local_input("2024-01-05T09:30", &jakarta()).unwrap();
        assert_eq!(format_display(instant, &jakarta()), "05-Jan-2024 09:30");
        assert_eq!(format_optional(None, &jakarta()), "-");
    }

    #[test]
    fn test_format_display_across_shift() {
        let summer = Utc.with_ymd_and_hms(2024, 11, 2, 14, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 11, 3, 15, 0, 0).unwrap();
        assert_eq!(format_display(summer, &Eastern2024), "02-Nov-2024 10:00");
        assert_eq!(format_display(winter, &Eastern2024), "03-Nov-2024 10:00");
    }
}
