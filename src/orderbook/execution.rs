//! Trade reports produced by matching

use super::order::{OrderId, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single pairing between a resting (maker) order and an incoming (taker) order.
///
/// The execution price is always the resting level's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Unique id of this execution
    pub match_id: Uuid,
    /// The sell-side order of the pairing
    pub ask_order_id: OrderId,
    /// The buy-side order of the pairing
    pub bid_order_id: OrderId,
    /// Side of the incoming order
    pub taker_side: Side,
    /// Execution price in ticks
    pub price: u64,
    /// Quantity exchanged in this pairing
    pub quantity: u64,
}

impl Match {
    pub(crate) fn new(
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        taker_side: Side,
        price: u64,
        quantity: u64,
    ) -> Self {
        let (ask_order_id, bid_order_id) = match taker_side {
            Side::Buy => (maker_order_id, taker_order_id),
            Side::Sell => (taker_order_id, maker_order_id),
        };
        Self {
            match_id: Uuid::new_v4(),
            ask_order_id,
            bid_order_id,
            taker_side,
            price,
            quantity,
        }
    }

    /// The resting order of the pairing
    pub fn maker_order_id(&self) -> OrderId {
        match self.taker_side {
            Side::Buy => self.ask_order_id,
            Side::Sell => self.bid_order_id,
        }
    }

    /// The incoming order of the pairing
    pub fn taker_order_id(&self) -> OrderId {
        match self.taker_side {
            Side::Buy => self.bid_order_id,
            Side::Sell => self.ask_order_id,
        }
    }

    /// Side of the resting order
    pub fn maker_side(&self) -> Side {
        self.taker_side.opposite()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[taker: {} {} | maker: {} | price: {} | size: {}]",
            self.taker_side,
            self.taker_order_id(),
            self.maker_order_id(),
            self.price,
            self.quantity
        )
    }
}

/// Outcome of matching one incoming order, against a single level or the whole book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The incoming order
    pub order_id: OrderId,
    /// Executions in the order they happened
    pub matches: Vec<Match>,
    /// Resting orders that were completely filled and left the book
    pub filled_order_ids: Vec<OrderId>,
    /// Quantity of the incoming order still open
    pub remaining_quantity: u64,
    /// Whether the incoming order was completely filled
    pub is_complete: bool,
}

impl MatchResult {
    /// Create an empty result for an incoming order of the given quantity
    pub fn new(order_id: OrderId, quantity: u64) -> Self {
        Self {
            order_id,
            matches: Vec::new(),
            filled_order_ids: Vec::new(),
            remaining_quantity: quantity,
            is_complete: quantity == 0,
        }
    }

    /// Total quantity executed across all matches
    pub fn executed_quantity(&self) -> u64 {
        self.matches.iter().map(|m| m.quantity).sum()
    }

    /// Total notional (price * quantity) across all matches
    pub fn executed_value(&self) -> u128 {
        self.matches
            .iter()
            .map(|m| m.price as u128 * m.quantity as u128)
            .sum()
    }

    /// Volume-weighted average execution price, if anything executed
    pub fn average_price(&self) -> Option<f64> {
        let executed = self.executed_quantity();
        if executed == 0 {
            return None;
        }
        Some(self.executed_value() as f64 / executed as f64)
    }

    /// Append the executions of another partial result, keeping their order
    pub(crate) fn absorb(&mut self, other: MatchResult) {
        self.matches.extend(other.matches);
        self.filled_order_ids.extend(other.filled_order_ids);
        self.remaining_quantity = other.remaining_quantity;
        self.is_complete = other.is_complete;
    }
}
