//! Dynamic per-seat pricing.

use super::seat::{PricedSeat, Seat};

/// Base price used when the caller does not supply one.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

pub const DEFAULT_VIEW_QUALITY: f64 = 1.0;
pub const DEFAULT_DISTANCE: u32 = 1;
pub const DEFAULT_SECTION_POPULARITY: f64 = 1.0;
pub const DEFAULT_DEMAND_FACTOR: f64 = 1.0;
pub const DEFAULT_ACCESSIBILITY: f64 = 1.0;

/// Multiplier for a seat `distance` rows back: `max(1.0, 1.5 - distance * 0.05)`.
///
/// Floored at 1.0 from row 10 onwards.
pub fn distance_multiplier(distance: u32) -> f64 {
    (1.5 - f64::from(distance) * 0.05).max(1.0)
}

/// Rounds to 2 decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Price of a single seat given every factor.
pub fn calculate_seat_price(
    base_price: f64,
    view_quality: f64,
    distance: u32,
    section_popularity: f64,
    demand_factor: f64,
    accessibility: f64,
) -> f64 {
    let price = base_price
        * view_quality
        * distance_multiplier(distance)
        * section_popularity
        * demand_factor
        * accessibility;
    round_to_cents(price)
}

/// Prices every seat, filling missing factors with defaults.
///
/// Output order and length match the input; inputs are cloned, not modified.
pub fn price_seats(seats: &[Seat], base_price: f64) -> Vec<PricedSeat> {
    seats
        .iter()
        .map(|seat| {
            let price = calculate_seat_price(
                base_price,
                seat.view_quality.unwrap_or(DEFAULT_VIEW_QUALITY),
                seat.distance.unwrap_or(DEFAULT_DISTANCE),
                seat.section_popularity.unwrap_or(DEFAULT_SECTION_POPULARITY),
                seat.demand_factor.unwrap_or(DEFAULT_DEMAND_FACTOR),
                seat.accessibility.unwrap_or(DEFAULT_ACCESSIBILITY),
            );
            PricedSeat {
                seat: seat.clone(),
                price,
            }
        })
        .collect()
}
