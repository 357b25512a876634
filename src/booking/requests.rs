//! Request DTOs for booking endpoints.

use serde::Deserialize;

use crate::booking::models::{BookingInput, RoomType};
use crate::booking::responses::DerivedFields;
use crate::booking::services::FormEvent;

/// The form fields as the browser submits them.
///
/// Every field is optional on the wire; a missing field is treated as blank.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingFormRequest {
    pub client_id: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    /// Selector value; anything other than a room label means unselected.
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
}

impl BookingFormRequest {
    pub fn into_input(self) -> BookingInput {
        BookingInput {
            room_type: RoomType::from_selection(&self.room_type),
            client_id: self.client_id,
            first_name: self.first_name,
            last_name: self.last_name,
            mobile: self.mobile,
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }
}

/// A single form event (field blur or selection change).
#[derive(Debug, Deserialize)]
pub struct FormEventRequest {
    pub event: FormEvent,
    #[serde(default)]
    pub form: BookingFormRequest,
    /// What the form currently shows in the read-only fields.
    #[serde(default)]
    pub derived: DerivedFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_blank() {
        let request: BookingFormRequest =
            serde_json::from_str(r#"{"client_id": "5", "room_type": "Suite"}"#).unwrap();
        let input = request.into_input();

        assert_eq!(input.client_id, "5");
        assert_eq!(input.first_name, "");
        assert_eq!(input.room_type, Some(RoomType::Suite));
    }

    #[test]
    fn test_placeholder_selection_is_unselected() {
        let request: BookingFormRequest =
            serde_json::from_str(r#"{"room_type": "-- Please Select --"}"#).unwrap();
        assert_eq!(request.into_input().room_type, None);
    }

    #[test]
    fn test_event_request() {
        let request: FormEventRequest = serde_json::from_str(
            r#"{"event": "dates_blur", "form": {"check_in": "2025-01-01"}}"#,
        )
        .unwrap();

        assert_eq!(request.event, FormEvent::DatesBlur);
        assert_eq!(request.form.check_in, "2025-01-01");
        assert_eq!(request.derived, DerivedFields::default());
    }
}
