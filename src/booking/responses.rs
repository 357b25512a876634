//! Response DTOs for booking endpoints.

use serde::{Deserialize, Serialize};

use crate::booking::calculators::display_money;
use crate::booking::models::{BookingRecord, StayPricing};
use crate::booking::validation::{Field, ValidationError};

/// Read-only fields of the form, as display strings.
///
/// Blank strings mean "nothing shown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivedFields {
    pub room_rate: String,
    pub nights: String,
    pub tax: String,
    pub discount: String,
    pub total_price: String,
}

impl DerivedFields {
    pub fn from_pricing(pricing: &StayPricing) -> Self {
        Self {
            room_rate: pricing.room_rate().to_string(),
            nights: pricing.nights().to_string(),
            tax: display_money(pricing.tax()),
            discount: display_money(pricing.discount()),
            total_price: display_money(pricing.total_price()),
        }
    }

    pub fn is_priced(&self) -> bool {
        !self.total_price.trim().is_empty()
    }
}

/// Validation problem to show the clerk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorResponse {
    pub error_type: String,
    pub message: String,
    pub field: Field,
}

impl From<&ValidationError> for FieldErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            error_type: err.kind().to_string(),
            message: err.to_string(),
            field: err.field(),
        }
    }
}

/// Response for a form event
#[derive(Debug, Serialize)]
pub struct FormEventResponse {
    pub derived: DerivedFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldErrorResponse>,
}

/// Response for a saved booking
#[derive(Debug, Serialize)]
pub struct BookingSavedResponse {
    pub message: String,
    pub booking: BookingRecord,
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}
