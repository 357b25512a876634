//! Booking service functions.
//!
//! `build_booking_record` is the single entry point for a save; `handle_event`
//! drives the live recompute of the read-only fields while the clerk types.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::db::{BookingStore, StorageError};

use super::calculators::{compute_pricing, room_rate, ComputeSkip};
use super::models::{BookingInput, BookingRecord, DateCheck};
use super::responses::DerivedFields;
use super::validation::{
    parse_iso_date, validate_client_id, validate_dates, validate_mobile, validate_required, Field,
    ValidationError,
};

/// Form interactions that trigger validation or recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    ClientIdBlur,
    MobileBlur,
    /// Either date field lost focus.
    DatesBlur,
    RoomTypeChanged,
}

/// What the form should show after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    pub derived: DerivedFields,
    pub error: Option<ValidationError>,
}

/// Saving a booking failed.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Validate and price a form snapshot.
///
/// Checks run in a fixed order and the first failure is returned:
/// client ID, first name, last name, mobile, dates, room type, price.
pub fn build_booking_record(input: &BookingInput) -> Result<BookingRecord, ValidationError> {
    let client_id = validate_client_id(&input.client_id)?;
    let first_name = validate_required(&input.first_name, Field::FirstName)?;
    let last_name = validate_required(&input.last_name, Field::LastName)?;
    let mobile = validate_mobile(&input.mobile)?;

    let (check_in, check_out) = validate_dates(&input.check_in, &input.check_out)?
        .both()
        .ok_or(ValidationError::IncompleteDates)?;

    if input.room_type.is_none() {
        return Err(ValidationError::RoomTypeRequired);
    }

    let pricing = compute_pricing(input.room_type, check_in, check_out)
        .map_err(|_| ValidationError::PriceNotComputed)?;

    Ok(BookingRecord::new(
        client_id, first_name, last_name, mobile, pricing,
    ))
}

/// Recompute the read-only fields from the current form.
///
/// - no room selected: every derived field is cleared;
/// - otherwise the room rate is shown, and nights/tax/discount/total are
///   replaced only when both dates parse and the stay is at least a night.
///   Unusable dates leave those four as they were.
pub fn refresh_derived(input: &BookingInput, current: &DerivedFields) -> DerivedFields {
    let Some(room_type) = input.room_type else {
        debug!("No room selected, clearing derived fields");
        return DerivedFields::default();
    };

    let mut derived = DerivedFields {
        room_rate: room_rate(room_type).to_string(),
        ..current.clone()
    };

    let dates = parse_iso_date(input.check_in.trim()).zip(parse_iso_date(input.check_out.trim()));
    let Some((check_in, check_out)) = dates else {
        return derived;
    };

    match compute_pricing(Some(room_type), check_in, check_out) {
        Ok(pricing) => {
            derived = DerivedFields::from_pricing(&pricing);
            debug!(
                "Priced {} for {} nights: total {}",
                room_type,
                pricing.nights(),
                derived.total_price
            );
        }
        Err(ComputeSkip::NonPositiveNights) => {
            debug!("Stay has no nights, keeping previous derived fields");
        }
        Err(ComputeSkip::RoomTypeUnselected) => return DerivedFields::default(),
    }

    derived
}

/// React to one form event.
pub fn handle_event(event: FormEvent, input: &BookingInput, current: &DerivedFields) -> EventOutcome {
    let unchanged = |error: Option<ValidationError>| EventOutcome {
        derived: current.clone(),
        error,
    };

    match event {
        FormEvent::ClientIdBlur => unchanged(validate_client_id(&input.client_id).err()),
        FormEvent::MobileBlur => unchanged(validate_mobile(&input.mobile).err()),
        FormEvent::DatesBlur => match validate_dates(&input.check_in, &input.check_out) {
            Err(err) => unchanged(Some(err)),
            Ok(DateCheck::Undetermined) => unchanged(None),
            Ok(DateCheck::Checked { .. }) => EventOutcome {
                derived: refresh_derived(input, current),
                error: None,
            },
        },
        FormEvent::RoomTypeChanged => EventOutcome {
            derived: refresh_derived(input, current),
            error: None,
        },
    }
}

/// Validate, price and store a booking.
///
/// Nothing is written unless every check passes. A storage failure is
/// returned as-is; the caller decides whether to resubmit.
pub async fn save_booking(
    store: &dyn BookingStore,
    input: &BookingInput,
) -> Result<BookingRecord, SaveError> {
    let record = build_booking_record(input).map_err(|err| {
        warn!("Booking rejected: {} (field {:?})", err, err.field());
        err
    })?;

    store.insert(&record).await?;

    info!(
        "Booking saved for client {}: {} x{} nights, total {}",
        record.client_id(),
        record.room_type(),
        record.nights(),
        record.total_price()
    );

    Ok(record)
}
