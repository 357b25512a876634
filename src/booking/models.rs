//! Booking domain models.
//!
//! `BookingInput` is the raw form snapshot, `StayPricing` the derived price
//! group and `BookingRecord` the finished booking handed to storage.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Room categories offered at the front desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Suite];

    /// Label shown in the room selector and stored in the booking table.
    pub fn label(self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }

    /// Map a selector value to a room type.
    ///
    /// Anything that is not one of the three labels (the placeholder entry,
    /// an empty string) counts as "nothing selected".
    pub fn from_selection(raw: &str) -> Option<RoomType> {
        raw.trim().parse().ok()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a stored or submitted room label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown room type: {0}")]
pub struct UnknownRoomType(pub String);

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(RoomType::Single),
            "Double" => Ok(RoomType::Double),
            "Suite" => Ok(RoomType::Suite),
            other => Err(UnknownRoomType(other.to_string())),
        }
    }
}

/// Snapshot of the form fields at the time of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingInput {
    pub client_id: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    /// `None` while the placeholder entry is selected.
    pub room_type: Option<RoomType>,
    pub check_in: String,
    pub check_out: String,
}

/// Outcome of checking the two date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    /// Both fields are blank: nothing to check, nothing to compute.
    Undetermined,
    /// Every non-blank field parsed, and when both are present check-out
    /// falls strictly after check-in.
    Checked {
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    },
}

impl DateCheck {
    /// Both dates, when both fields were filled in.
    pub fn both(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateCheck::Checked {
                check_in: Some(check_in),
                check_out: Some(check_out),
            } => Some((check_in, check_out)),
            _ => None,
        }
    }
}

/// Price group derived from a room type and a stay.
///
/// Only `calculators::compute_pricing` builds one, so rate, nights, tax,
/// discount and total always come from the same computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayPricing {
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    room_rate: Decimal,
    nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total_price: Decimal,
}

impl StayPricing {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_rate: Decimal,
        nights: i64,
        tax: Decimal,
        discount: Decimal,
        total_price: Decimal,
    ) -> Self {
        Self {
            room_type,
            check_in,
            check_out,
            room_rate,
            nights,
            tax,
            discount,
            total_price,
        }
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn room_rate(&self) -> Decimal {
        self.room_rate
    }

    pub fn nights(&self) -> i64 {
        self.nights
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

/// A validated, priced booking ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    client_id: i32,
    first_name: String,
    last_name: String,
    mobile: String,
    #[serde(flatten)]
    pricing: StayPricing,
}

impl BookingRecord {
    pub(crate) fn new(
        client_id: i32,
        first_name: String,
        last_name: String,
        mobile: String,
        pricing: StayPricing,
    ) -> Self {
        Self {
            client_id,
            first_name,
            last_name,
            mobile,
            pricing,
        }
    }

    pub fn client_id(&self) -> i32 {
        self.client_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn pricing(&self) -> &StayPricing {
        &self.pricing
    }

    pub fn room_type(&self) -> RoomType {
        self.pricing.room_type
    }

    pub fn check_in(&self) -> NaiveDate {
        self.pricing.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.pricing.check_out
    }

    pub fn room_rate(&self) -> Decimal {
        self.pricing.room_rate
    }

    pub fn nights(&self) -> i64 {
        self.pricing.nights
    }

    pub fn tax(&self) -> Decimal {
        self.pricing.tax
    }

    pub fn discount(&self) -> Decimal {
        self.pricing.discount
    }

    pub fn total_price(&self) -> Decimal {
        self.pricing.total_price
    }
}

/// Row from booking_data
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub room_type: String,
    pub room_rate: Decimal,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total_price: Decimal,
}

impl BookingRow {
    /// Rebuild a record from a stored row.
    ///
    /// Stored values are taken as written; they are not re-priced.
    pub fn into_record(self) -> Result<BookingRecord, UnknownRoomType> {
        let room_type = self.room_type.parse()?;
        let pricing = StayPricing::new(
            room_type,
            self.check_in,
            self.check_out,
            self.room_rate,
            self.nights,
            self.tax,
            self.discount,
            self.total_price,
        );

        Ok(BookingRecord::new(
            self.client_id,
            self.first_name,
            self.last_name,
            self.mobile,
            pricing,
        ))
    }
}
