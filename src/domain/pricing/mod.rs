//! Pricing module - Dynamic seat pricing and price-drop detection.
//!
//! Stateless and independent of discovery analysis. Inputs are never
//! modified; pricing returns new records.

mod calculator;
mod price_drop;
mod seat;

pub use calculator::{
    calculate_seat_price, distance_multiplier, price_seats, round_to_cents, DEFAULT_ACCESSIBILITY,
    DEFAULT_BASE_PRICE, DEFAULT_DEMAND_FACTOR, DEFAULT_DISTANCE, DEFAULT_SECTION_POPULARITY,
    DEFAULT_VIEW_QUALITY,
};
pub use price_drop::detect_highest_price_drop;
pub use seat::{PriceDrop, PricedSeat, Seat, SeatPrice};
