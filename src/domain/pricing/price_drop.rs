//! Detection of a price drop on the most expensive seat.

use std::collections::HashMap;

use super::seat::{PriceDrop, SeatPrice};

/// Identifier -> price map that remembers first-seen order.
///
/// A repeated identifier keeps its first position and takes the last price.
struct Snapshot<'a> {
    order: Vec<&'a str>,
    prices: HashMap<&'a str, f64>,
}

impl<'a> Snapshot<'a> {
    fn build(entries: &'a [SeatPrice]) -> Self {
        let mut order = Vec::with_capacity(entries.len());
        let mut prices = HashMap::with_capacity(entries.len());
        for entry in entries {
            if prices.insert(entry.id.as_str(), entry.price).is_none() {
                order.push(entry.id.as_str());
            }
        }
        Self { order, prices }
    }

    fn price(&self, id: &str) -> Option<f64> {
        self.prices.get(id).copied()
    }

    /// Highest-priced seat; ties go to the seat seen first.
    fn highest(&self) -> Option<(&'a str, f64)> {
        let mut best: Option<(&'a str, f64)> = None;
        for id in &self.order {
            let price = self.prices[id];
            match best {
                Some((_, top)) if price <= top => {}
                _ => best = Some((*id, price)),
            }
        }
        best
    }
}

/// Reports how much the previously most expensive seat dropped.
///
/// Only the seat that was highest in `old` is ever reported. A drop on any
/// other seat is ignored, however large. A seat missing from `new` counts as
/// priced at 0.
pub fn detect_highest_price_drop(old: &[SeatPrice], new: &[SeatPrice]) -> PriceDrop {
    let old_snapshot = Snapshot::build(old);
    let new_snapshot = Snapshot::build(new);

    let (Some((old_id, old_price)), Some((new_id, new_price))) =
        (old_snapshot.highest(), new_snapshot.highest())
    else {
        return PriceDrop::none();
    };

    if old_id == new_id && new_price < old_price {
        return PriceDrop::new(new_id, old_price - new_price);
    }

    let current = new_snapshot.price(old_id).unwrap_or(0.0);
    if current < old_price {
        return PriceDrop::new(old_id, old_price - current);
    }

    PriceDrop::none()
}
