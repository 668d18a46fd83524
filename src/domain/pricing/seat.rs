//! Seat records consumed and produced by the pricing calculator.

use serde::{Deserialize, Serialize};

/// A seat and whichever pricing factors are known for it.
///
/// Missing factors fall back to neutral defaults when priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    /// View multiplier, roughly 0.5 (obstructed) to 1.5 (best view).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_quality: Option<f64>,
    /// Rows from the stage or screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_popularity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<f64>,
}

impl Seat {
    /// A seat with no pricing factors set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view_quality: None,
            distance: None,
            section_popularity: None,
            demand_factor: None,
            accessibility: None,
        }
    }

    pub fn with_view_quality(mut self, view_quality: f64) -> Self {
        self.view_quality = Some(view_quality);
        self
    }

    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_section_popularity(mut self, section_popularity: f64) -> Self {
        self.section_popularity = Some(section_popularity);
        self
    }

    pub fn with_demand_factor(mut self, demand_factor: f64) -> Self {
        self.demand_factor = Some(demand_factor);
        self
    }

    pub fn with_accessibility(mut self, accessibility: f64) -> Self {
        self.accessibility = Some(accessibility);
        self
    }
}

/// A seat together with its computed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedSeat {
    #[serde(flatten)]
    pub seat: Seat,
    pub price: f64,
}

impl PricedSeat {
    pub fn id(&self) -> &str {
        &self.seat.id
    }
}

/// One entry of a price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatPrice {
    pub id: String,
    pub price: f64,
}

impl SeatPrice {
    pub fn new(id: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            price,
        }
    }
}

impl From<&PricedSeat> for SeatPrice {
    fn from(priced: &PricedSeat) -> Self {
        Self::new(priced.seat.id.clone(), priced.price)
    }
}

/// Result of comparing two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDrop {
    pub seat_id: Option<String>,
    pub drop_amount: f64,
}

impl PriceDrop {
    /// No drop detected.
    pub fn none() -> Self {
        Self {
            seat_id: None,
            drop_amount: 0.0,
        }
    }

    pub fn new(seat_id: impl Into<String>, drop_amount: f64) -> Self {
        Self {
            seat_id: Some(seat_id.into()),
            drop_amount,
        }
    }

    pub fn is_drop(&self) -> bool {
        self.seat_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_deserializes_with_missing_factors() {
        let seat: Seat = serde_json::from_str(r#"{"id": "A1", "distance": 4}"#).unwrap();
        assert_eq!(seat, Seat::new("A1").with_distance(4));
    }

    #[test]
    fn priced_seat_serializes_flat() {
        let priced = PricedSeat {
            seat: Seat::new("B2").with_view_quality(1.2),
            price: 120.5,
        };
        let json = serde_json::to_value(&priced).unwrap();
        assert_eq!(json["id"], "B2");
        assert_eq!(json["view_quality"], 1.2);
        assert_eq!(json["price"], 120.5);
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn price_drop_none_is_not_a_drop() {
        assert!(!PriceDrop::none().is_drop());
        assert!(PriceDrop::new("A", 20.0).is_drop());
    }
}
