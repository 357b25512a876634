//! Booking engine module.
//!
//! Validates the booking form, prices the stay and hands finished records
//! to storage.

pub mod calculators;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod validation;

// Re-export commonly used items
pub use calculators::{compute_pricing, display_money, ComputeSkip};
pub use models::{BookingInput, BookingRecord, DateCheck, RoomType, StayPricing};
pub use routes::router;
pub use services::{build_booking_record, handle_event, save_booking, FormEvent, SaveError};
pub use validation::{validate_client_id, validate_dates, validate_mobile, Field, ValidationError};
