//! Field validators for the booking form.
//!
//! Each validator trims its input first. Errors name the field the form
//! should focus and carry the message shown to the clerk.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::booking::models::DateCheck;

/// `07` followed by eight digits. ASCII digits only.
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^07[0-9]{8}$").expect("mobile pattern is valid"));

/// Form fields a validation error can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ClientId,
    FirstName,
    LastName,
    Mobile,
    RoomType,
    CheckIn,
    CheckOut,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::ClientId => "Client ID",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Mobile => "Mobile number",
            Field::RoomType => "Room type",
            Field::CheckIn => "Check-in",
            Field::CheckOut => "Check-out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required.", .field.label())]
    EmptyField { field: Field },

    #[error("{} must be a number.", .field.label())]
    NotANumber { field: Field },

    #[error("{} must match format 07########", .field.label())]
    FormatMismatch { field: Field },

    #[error("Invalid {} date format. Use YYYY-MM-DD", .field.label())]
    InvalidDateFormat { field: Field },

    #[error("Check-out date must be after Check-in date.")]
    CheckOutNotAfterCheckIn,

    #[error("Both Check-in and Check-out dates are required.")]
    IncompleteDates,

    #[error("Please select a valid room type.")]
    RoomTypeRequired,

    #[error("Price not calculated. Check room type and dates.")]
    PriceNotComputed,
}

impl ValidationError {
    /// The field the form should move focus to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NotANumber { field }
            | ValidationError::FormatMismatch { field }
            | ValidationError::InvalidDateFormat { field } => *field,
            ValidationError::CheckOutNotAfterCheckIn => Field::CheckOut,
            ValidationError::IncompleteDates => Field::CheckIn,
            ValidationError::RoomTypeRequired | ValidationError::PriceNotComputed => Field::RoomType,
        }
    }

    /// Short machine-readable name for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { .. } => "empty_field",
            ValidationError::NotANumber { .. } => "not_a_number",
            ValidationError::FormatMismatch { .. } => "format_mismatch",
            ValidationError::InvalidDateFormat { .. } => "invalid_date_format",
            ValidationError::CheckOutNotAfterCheckIn => "check_out_not_after_check_in",
            ValidationError::IncompleteDates => "incomplete_dates",
            ValidationError::RoomTypeRequired => "room_type_required",
            ValidationError::PriceNotComputed => "price_not_computed",
        }
    }
}

/// Client IDs are base-10 32-bit integers; a leading sign is accepted.
pub fn validate_client_id(raw: &str) -> Result<i32, ValidationError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyField {
            field: Field::ClientId,
        });
    }

    id.parse::<i32>().map_err(|_| ValidationError::NotANumber {
        field: Field::ClientId,
    })
}

pub fn validate_mobile(raw: &str) -> Result<String, ValidationError> {
    let mobile = raw.trim();
    if mobile.is_empty() {
        return Err(ValidationError::EmptyField {
            field: Field::Mobile,
        });
    }
    if !MOBILE_PATTERN.is_match(mobile) {
        return Err(ValidationError::FormatMismatch {
            field: Field::Mobile,
        });
    }

    Ok(mobile.to_string())
}

/// Non-empty after trimming; returns the trimmed value.
pub fn validate_required(raw: &str, field: Field) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_string())
}

/// Check the stay dates.
///
/// Blank fields are skipped; the ordering rule only applies when both
/// dates are present.
pub fn validate_dates(check_in: &str, check_out: &str) -> Result<DateCheck, ValidationError> {
    let check_in = check_in.trim();
    let check_out = check_out.trim();

    if check_in.is_empty() && check_out.is_empty() {
        return Ok(DateCheck::Undetermined);
    }

    let check_in = parse_optional_date(check_in, Field::CheckIn)?;
    let check_out = parse_optional_date(check_out, Field::CheckOut)?;

    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_out <= check_in {
            return Err(ValidationError::CheckOutNotAfterCheckIn);
        }
    }

    Ok(DateCheck::Checked {
        check_in,
        check_out,
    })
}

/// Strict `YYYY-MM-DD`: four-digit year, two-digit month and day, and a
/// date that exists on the calendar.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_optional_date(raw: &str, field: Field) -> Result<Option<NaiveDate>, ValidationError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_iso_date(raw)
        .map(Some)
        .ok_or(ValidationError::InvalidDateFormat { field })
}
