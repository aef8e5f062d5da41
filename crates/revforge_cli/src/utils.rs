use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a user-supplied timestamp in any of the accepted formats,
/// interpreted as UTC. Date-only inputs resolve to midnight.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc());
            }
        }
    }

    bail!("could not parse timestamp: '{}'", input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_common_datetime_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        for input in [
            "2024-01-01 10:00:00",
            "2024-01-01T10:00:00",
            "2024-01-01 10:00",
            "2024/01/01 10:00:00",
        ] {
            assert_eq!(parse_timestamp(input).unwrap(), expected, "input {}", input);
        }
    }

    #[test]
    fn date_only_means_midnight() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-01").unwrap(), expected);
        assert_eq!(parse_timestamp("2024/01/01").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday-ish").is_err());
    }
}
