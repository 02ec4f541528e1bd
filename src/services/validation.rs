use chrono::{Days, NaiveDate};

use crate::models::{BookingDraft, NewBooking, TimeSlot};

/// First rule a draft breaks. The message is what the patient sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid Indian mobile number")]
    InvalidMobile,

    #[error("Please select a valid date")]
    InvalidDate,

    #[error("Please select a date from tomorrow onwards")]
    DateNotAllowed,

    #[error("Please select one of the available time slots")]
    UnknownTimeSlot,
}

/// Checks the draft against `today` (clinic local date). Rules run in order
/// and the first failure wins: completeness, mobile, date, time slot.
pub fn validate(draft: &BookingDraft, today: NaiveDate) -> Result<NewBooking, ValidationError> {
    let name = draft.name.trim();
    let mobile = draft.mobile.trim();
    let date = draft.date.trim();
    let time = draft.time.trim();

    if name.is_empty() || mobile.is_empty() || date.is_empty() || time.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_mobile(mobile) {
        return Err(ValidationError::InvalidMobile);
    }

    let date =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)?;
    if date < earliest_bookable_date(today) {
        return Err(ValidationError::DateNotAllowed);
    }

    let slot = TimeSlot::from_label(time).ok_or(ValidationError::UnknownTimeSlot)?;

    Ok(NewBooking {
        name: name.to_string(),
        mobile: mobile.to_string(),
        date,
        slot,
    })
}

/// Indian mobile numbering plan: ten digits starting with 6, 7, 8 or 9.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let bytes = mobile.as_bytes();
    bytes.len() == 10
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(u8::is_ascii_digit)
}

/// Same-day bookings are not taken; the first bookable day is tomorrow.
pub fn earliest_bookable_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    fn draft(name: &str, mobile: &str, date: &str, time: &str) -> BookingDraft {
        BookingDraft {
            name: name.to_string(),
            mobile: mobile.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    fn valid() -> BookingDraft {
        draft("Asha Rao", "9876543210", "2025-08-21", "9:00 AM")
    }

    #[test]
    fn test_valid_draft() {
        let booking = validate(&valid(), today()).unwrap();
        assert_eq!(booking.name, "Asha Rao");
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2025, 8, 21).unwrap());
        assert_eq!(booking.slot.label, "9:00 AM");
    }

    #[test]
    fn test_any_missing_field_reports_missing_fields() {
        let cases = [
            draft("", "9876543210", "2025-08-21", "9:00 AM"),
            draft("Asha Rao", "", "2025-08-21", "9:00 AM"),
            draft("Asha Rao", "9876543210", "", "9:00 AM"),
            draft("Asha Rao", "9876543210", "2025-08-21", ""),
            draft("   ", "9876543210", "2025-08-21", "9:00 AM"),
            BookingDraft::default(),
        ];
        for d in &cases {
            assert_eq!(validate(d, today()), Err(ValidationError::MissingFields), "{d:?}");
        }
    }

    #[test]
    fn test_missing_fields_wins_over_bad_mobile() {
        let d = draft("", "123", "2020-01-01", "9:00 AM");
        assert_eq!(validate(&d, today()), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_invalid_mobiles_rejected() {
        for mobile in ["1234567890", "98765432", "99999999999", "5876543210", "98765 4321", "+919876543"] {
            let mut d = valid();
            d.mobile = mobile.to_string();
            assert_eq!(validate(&d, today()), Err(ValidationError::InvalidMobile), "{mobile}");
        }
    }

    #[test]
    fn test_valid_mobiles_accepted() {
        for mobile in ["9876543210", "6000000000", "7508574656", "8123456789"] {
            assert!(is_valid_mobile(mobile), "{mobile}");
        }
    }

    #[test]
    fn test_mobile_checked_before_date() {
        let d = draft("Asha Rao", "1234567890", "2020-01-01", "9:00 AM");
        assert_eq!(validate(&d, today()), Err(ValidationError::InvalidMobile));
    }

    #[test]
    fn test_today_rejected() {
        let mut d = valid();
        d.date = "2025-08-20".to_string();
        assert_eq!(validate(&d, today()), Err(ValidationError::DateNotAllowed));
    }

    #[test]
    fn test_past_date_rejected() {
        let mut d = valid();
        d.date = "2025-08-19".to_string();
        assert_eq!(validate(&d, today()), Err(ValidationError::DateNotAllowed));
    }

    #[test]
    fn test_tomorrow_and_later_accepted() {
        for date in ["2025-08-21", "2025-12-31", "2026-01-15"] {
            let mut d = valid();
            d.date = date.to_string();
            assert!(validate(&d, today()).is_ok(), "{date}");
        }
    }

    #[test]
    fn test_unparsable_date() {
        for date in ["21/08/2025", "tomorrow", "2025-02-30"] {
            let mut d = valid();
            d.date = date.to_string();
            assert_eq!(validate(&d, today()), Err(ValidationError::InvalidDate), "{date}");
        }
    }

    #[test]
    fn test_unknown_time_slot() {
        for time in ["2:00 PM", "8:30 PM", "09:00"] {
            let mut d = valid();
            d.time = time.to_string();
            assert_eq!(validate(&d, today()), Err(ValidationError::UnknownTimeSlot), "{time}");
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let d = draft("  Asha Rao ", " 9876543210", "2025-08-21 ", " 9:00 AM");
        let booking = validate(&d, today()).unwrap();
        assert_eq!(booking.name, "Asha Rao");
        assert_eq!(booking.mobile, "9876543210");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let drafts = [valid(), draft("", "", "", ""), draft("A", "1234567890", "x", "y")];
        for d in &drafts {
            assert_eq!(validate(d, today()), validate(d, today()));
        }
    }

    #[test]
    fn test_earliest_bookable_date() {
        assert_eq!(
            earliest_bookable_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }
}
