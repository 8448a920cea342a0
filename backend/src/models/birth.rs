//! Validated birth details shared by both calculation pipelines.

use chrono::NaiveDate;

use super::TimeOfDay;
use crate::error::{CalcError, CalcResult};

/// Message returned when any of the four request fields is absent or blank.
pub const MISSING_FIELDS: &str = "Missing required fields";

/// Birth details after schema validation. Downstream code never sees the
/// raw request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthDetails {
    /// Name exactly as submitted.
    pub name: String,
    pub dob: NaiveDate,
    /// Date of birth exactly as submitted.
    pub dob_text: String,
    pub birth_time: TimeOfDay,
    pub birth_place: String,
}

impl BirthDetails {
    /// Validate raw optional fields.
    ///
    /// Blank strings count as missing. The date must be `YYYY-MM-DD` and
    /// form a real calendar day; the time must be `HH:MM` or `HH:MM:SS`.
    pub fn parse(
        name: Option<&str>,
        dob: Option<&str>,
        birth_time: Option<&str>,
        birth_place: Option<&str>,
    ) -> CalcResult<Self> {
        let (Some(name), Some(dob), Some(birth_time), Some(birth_place)) =
            (name, dob, birth_time, birth_place)
        else {
            return Err(CalcError::InvalidInput(MISSING_FIELDS.to_string()));
        };
        if [name, dob, birth_time, birth_place]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(CalcError::InvalidInput(MISSING_FIELDS.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            dob: parse_date(dob)?,
            dob_text: dob.to_string(),
            birth_time: TimeOfDay::parse(birth_time)?,
            birth_place: birth_place.trim().to_string(),
        })
    }

    /// Date of birth as submitted.
    pub fn dob_string(&self) -> String {
        self.dob_text.clone()
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> CalcResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        CalcError::InvalidInput(format!("Invalid date '{}': expected YYYY-MM-DD", text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(
        name: Option<&str>,
        dob: Option<&str>,
        time: Option<&str>,
        place: Option<&str>,
    ) -> CalcResult<BirthDetails> {
        BirthDetails::parse(name, dob, time, place)
    }

    #[test]
    fn test_parse_complete_details() {
        let d = details(Some("Asha"), Some("1990-05-17"), Some("06:30"), Some("Pune")).unwrap();
        assert_eq!(d.name, "Asha");
        assert_eq!(d.dob, NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
        assert_eq!(d.birth_time, TimeOfDay::from_hms(6, 30, 0).unwrap());
        assert_eq!(d.birth_place, "Pune");
        assert_eq!(d.dob_string(), "1990-05-17");
    }

    #[test]
    fn test_missing_field_is_reported() {
        let err = details(Some("Asha"), None, Some("06:30"), Some("Pune")).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(ref m) if m == MISSING_FIELDS));
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let err = details(Some("  "), Some("1990-05-17"), Some("06:30"), Some("Pune")).unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn test_invalid_calendar_date() {
        let err = details(Some("A"), Some("1990-02-30"), Some("06:30"), Some("Pune")).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert!(err.to_string().contains("1990-02-30"));
    }

    #[test]
    fn test_submitted_text_is_echoed() {
        let d = details(Some(" Asha "), Some("1990-5-7"), Some("06:30"), Some(" Pune ")).unwrap();
        assert_eq!(d.name, " Asha ");
        assert_eq!(d.dob_string(), "1990-5-7");
        assert_eq!(d.dob, NaiveDate::from_ymd_opt(1990, 5, 7).unwrap());
        assert_eq!(d.birth_place, "Pune");
    }

    #[test]
    fn test_wrong_date_format() {
        assert!(details(Some("A"), Some("17/05/1990"), Some("06:30"), Some("Pune")).is_err());
    }

    #[test]
    fn test_bad_time_is_input_fault() {
        let err = details(Some("A"), Some("1990-05-17"), Some("6h30"), Some("Pune")).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
    }
}
