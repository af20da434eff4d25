//! Time-of-day arithmetic shared by the time slot and options rules.
//!
//! All values are wall-clock times on a single day: there is no wraparound
//! past midnight. Callers compare ordering before relying on the sign of
//! [`minutes_between`].

use chrono::NaiveTime;

use crate::domain::DomainError;

/// Minute increments a planning may be split into.
pub const SPLIT_VALUES_ACCEPTED: [u32; 4] = [15, 20, 30, 60];

/// Whole minutes from `earlier` to `later` (negative if `later` comes first).
pub fn minutes_between(earlier: NaiveTime, later: NaiveTime) -> i64 {
    (later - earlier).num_minutes()
}

/// `true` when `split` evenly divides `minutes`. A zero split divides nothing.
pub fn is_divisible_by(minutes: i64, split: u32) -> bool {
    minutes
        .checked_rem(i64::from(split))
        .is_some_and(|rest| rest == 0)
}

/// `true` when every accepted split evenly divides `minutes`.
pub fn is_divisible_by_all(minutes: i64, accepted: &[u32]) -> bool {
    accepted.iter().all(|&split| is_divisible_by(minutes, split))
}

/// `true` when at least one accepted split evenly divides `minutes`.
pub fn is_divisible_by_any(minutes: i64, accepted: &[u32]) -> bool {
    accepted.iter().any(|&split| is_divisible_by(minutes, split))
}

/// Zero-pads a single time unit to two digits (`8` -> `"08"`).
pub fn format_time_unit(unit: u32) -> String {
    format!("{unit:02}")
}

/// Converts an `HH:MM` duration (weekly hours) into minutes.
///
/// An empty string counts as zero minutes.
pub fn hhmm_to_minutes(value: &str) -> Result<i64, DomainError> {
    if value.is_empty() {
        return Ok(0);
    }
    let invalid = || DomainError::InvalidDuration {
        value: value.to_owned(),
    };
    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.trim().parse().map_err(|_| invalid())?;
    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .ok_or_else(invalid)
}

/// Parses a time of day written `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, DomainError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| DomainError::InvalidTimeOfDay {
            value: value.to_owned(),
        })
}

/// Serde adapter writing optional times of day as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_some(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_time_of_day(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn minutes_between_is_signed() {
        assert_eq!(minutes_between(t(8, 0), t(8, 30)), 30);
        assert_eq!(minutes_between(t(19, 0), t(17, 0)), -120);
        assert_eq!(minutes_between(t(9, 0), t(9, 0)), 0);
    }

    #[test]
    fn divisibility_by_single_split() {
        assert!(is_divisible_by(120, 60));
        assert!(!is_divisible_by(30, 60));
        assert!(is_divisible_by(-120, 60));
        assert!(!is_divisible_by(60, 0));
    }

    #[test]
    fn divisibility_by_all_requires_every_value() {
        assert!(is_divisible_by_all(600, &SPLIT_VALUES_ACCEPTED));
        assert!(!is_divisible_by_all(30, &SPLIT_VALUES_ACCEPTED));
        assert!(!is_divisible_by_all(-169, &SPLIT_VALUES_ACCEPTED));
    }

    #[test]
    fn divisibility_by_any_needs_one_value() {
        assert!(is_divisible_by_any(30, &SPLIT_VALUES_ACCEPTED));
        assert!(is_divisible_by_any(20, &SPLIT_VALUES_ACCEPTED));
        assert!(!is_divisible_by_any(7, &SPLIT_VALUES_ACCEPTED));
    }

    #[test]
    fn time_unit_is_zero_padded() {
        assert_eq!(format_time_unit(8), "08");
        assert_eq!(format_time_unit(0), "00");
        assert_eq!(format_time_unit(45), "45");
    }

    #[test]
    fn oversized_duration_is_invalid() {
        assert!(matches!(
            hhmm_to_minutes("999999999999999999:00"),
            Err(DomainError::InvalidDuration { .. })
        ));
        assert!(matches!(
            hhmm_to_minutes(&format!("0:{}", i64::MAX)),
            Ok(i64::MAX)
        ));
    }

    #[test]
    fn hhmm_duration_conversion() {
        assert_eq!(hhmm_to_minutes("04:30").unwrap(), 270);
        assert_eq!(hhmm_to_minutes("").unwrap(), 0);
        assert!(matches!(
            hhmm_to_minutes("four hours"),
            Err(DomainError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn parses_times_with_or_without_seconds() {
        assert_eq!(parse_time_of_day("08:30").unwrap(), t(8, 30));
        assert_eq!(parse_time_of_day("8:30").unwrap(), t(8, 30));
        assert_eq!(parse_time_of_day("17:00:00").unwrap(), t(17, 0));
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("noon").is_err());
    }
}
