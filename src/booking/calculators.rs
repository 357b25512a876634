//! Core stay pricing functions.
//!
//! Pure functions for pricing math - no database access, no form state.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use crate::booking::models::{RoomType, StayPricing};

/// Tax applied to every stay, as a fraction of the room charge.
pub const TAX_RATE: Decimal = dec!(0.05);

/// Long-stay discount, as a fraction of the room charge.
pub const LONG_STAY_DISCOUNT_RATE: Decimal = dec!(0.10);

/// Stays of at least this many nights get the long-stay discount.
pub const LONG_STAY_NIGHTS: i64 = 7;

/// Why no pricing was produced. Not an error: the form just has nothing
/// new to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeSkip {
    /// The room selector is on its placeholder. Derived fields get cleared.
    RoomTypeUnselected,
    /// Check-out is on or before check-in. Derived fields stay as they were.
    NonPositiveNights,
}

/// Nightly rate for a room type.
pub fn room_rate(room_type: RoomType) -> Decimal {
    match room_type {
        RoomType::Single => dec!(70000),
        RoomType::Double => dec!(120000),
        RoomType::Suite => dec!(190000),
    }
}

/// Whole days from check-in to check-out. Negative when the range is reversed.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    check_out.signed_duration_since(check_in).num_days()
}

/// Price a stay.
///
/// tax = nights x rate x 5%, discount = nights x rate x 10% from seven nights
/// on, total = nights x rate + tax - discount. Values keep full precision.
pub fn compute_pricing(
    room_type: Option<RoomType>,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<StayPricing, ComputeSkip> {
    let room_type = room_type.ok_or(ComputeSkip::RoomTypeUnselected)?;
    let rate = room_rate(room_type);

    let nights = nights_between(check_in, check_out);
    if nights <= 0 {
        return Err(ComputeSkip::NonPositiveNights);
    }

    let room_charge = rate * Decimal::from(nights);
    let tax = room_charge * TAX_RATE;
    let discount = if nights >= LONG_STAY_NIGHTS {
        room_charge * LONG_STAY_DISCOUNT_RATE
    } else {
        Decimal::ZERO
    };
    let total_price = room_charge + tax - discount;

    Ok(StayPricing::new(
        room_type,
        check_in,
        check_out,
        rate,
        nights,
        tax,
        discount,
        total_price,
    ))
}

/// Format an amount for display with exactly two fraction digits.
///
/// Halves round away from zero, the way `%.2f` formatting does.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use hotel_booking::booking::display_money;
///
/// assert_eq!(display_money(dec!(42000)), "42000.00");
/// assert_eq!(display_money(dec!(0.125)), "0.13");
/// ```
pub fn display_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // ==================== room_rate tests ====================

    #[test]
    fn test_room_rate_table() {
        assert_eq!(room_rate(RoomType::Single), dec!(70000));
        assert_eq!(room_rate(RoomType::Double), dec!(120000));
        assert_eq!(room_rate(RoomType::Suite), dec!(190000));
    }

    // ==================== nights_between tests ====================

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(date("2025-01-01"), date("2025-01-08")), 7);
        assert_eq!(nights_between(date("2025-01-01"), date("2025-01-01")), 0);
        assert_eq!(nights_between(date("2025-01-08"), date("2025-01-01")), -7);
    }

    #[test]
    fn test_nights_between_across_leap_day() {
        assert_eq!(nights_between(date("2024-02-28"), date("2024-03-01")), 2);
        assert_eq!(nights_between(date("2025-02-28"), date("2025-03-01")), 1);
    }

    // ==================== compute_pricing tests ====================

    #[test]
    fn test_compute_pricing_double_week_gets_discount() {
        let pricing =
            compute_pricing(Some(RoomType::Double), date("2025-01-01"), date("2025-01-08")).unwrap();

        assert_eq!(pricing.nights(), 7);
        assert_eq!(pricing.room_rate(), dec!(120000));
        assert_eq!(pricing.tax(), dec!(42000));
        assert_eq!(pricing.discount(), dec!(84000));
        assert_eq!(pricing.total_price(), dec!(798000));
    }

    #[test]
    fn test_compute_pricing_single_short_stay() {
        let pricing =
            compute_pricing(Some(RoomType::Single), date("2025-01-01"), date("2025-01-03")).unwrap();

        assert_eq!(pricing.nights(), 2);
        assert_eq!(pricing.room_rate(), dec!(70000));
        assert_eq!(pricing.tax(), dec!(7000));
        assert_eq!(pricing.discount(), dec!(0));
        assert_eq!(pricing.total_price(), dec!(147000));
    }

    #[test]
    fn test_compute_pricing_discount_boundary() {
        // 6 nights: no discount
        let six =
            compute_pricing(Some(RoomType::Suite), date("2025-03-01"), date("2025-03-07")).unwrap();
        assert_eq!(six.nights(), 6);
        assert_eq!(six.discount(), dec!(0));
        assert_eq!(six.total_price(), dec!(1197000)); // 1140000 + 57000

        // 7 nights: discount applies
        let seven =
            compute_pricing(Some(RoomType::Suite), date("2025-03-01"), date("2025-03-08")).unwrap();
        assert_eq!(seven.discount(), dec!(133000));
        assert_eq!(seven.total_price(), dec!(1263500)); // 1330000 + 66500 - 133000
    }

    #[test]
    fn test_compute_pricing_keeps_stay_details() {
        let pricing =
            compute_pricing(Some(RoomType::Single), date("2025-05-10"), date("2025-05-11")).unwrap();

        assert_eq!(pricing.room_type(), RoomType::Single);
        assert_eq!(pricing.check_in(), date("2025-05-10"));
        assert_eq!(pricing.check_out(), date("2025-05-11"));
    }

    #[test]
    fn test_compute_pricing_unselected_room_skips() {
        assert_eq!(
            compute_pricing(None, date("2025-01-01"), date("2025-01-08")),
            Err(ComputeSkip::RoomTypeUnselected)
        );
        // Unselected wins even when the range is also invalid
        assert_eq!(
            compute_pricing(None, date("2025-01-08"), date("2025-01-01")),
            Err(ComputeSkip::RoomTypeUnselected)
        );
    }

    #[test]
    fn test_compute_pricing_non_positive_nights_skips() {
        assert_eq!(
            compute_pricing(Some(RoomType::Double), date("2025-01-08"), date("2025-01-08")),
            Err(ComputeSkip::NonPositiveNights)
        );
        assert_eq!(
            compute_pricing(Some(RoomType::Double), date("2025-01-08"), date("2025-01-01")),
            Err(ComputeSkip::NonPositiveNights)
        );
    }

    // ==================== display_money tests ====================

    #[test]
    fn test_display_money_pads_to_two_places() {
        assert_eq!(display_money(dec!(798000)), "798000.00");
        assert_eq!(display_money(dec!(7000.0)), "7000.00");
        assert_eq!(display_money(dec!(0)), "0.00");
    }

    #[test]
    fn test_display_money_rounds_half_up() {
        assert_eq!(display_money(dec!(1.005)), "1.01");
        assert_eq!(display_money(dec!(1.004)), "1.00");
        assert_eq!(display_money(dec!(2.345)), "2.35");
    }
}
