//! Orders, order identifiers and book sides

use crate::utils::next_sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of an order, stable for the order's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Create a new random order id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a deterministic order id from an integer, mostly useful in tests
    pub fn from_u64(id: u64) -> Self {
        Self(Uuid::from_u64_pair(0, id))
    }

    /// Access the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(OrderId)
    }
}

/// Side of the book an order belongs to.
///
/// - `Buy` orders rest on the bid side, best price is the highest one.
/// - `Sell` orders rest on the ask side, best price is the lowest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid
    Buy,
    /// Ask
    Sell,
}

impl Side {
    /// The side an order of this side trades against
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" | "BID" => Ok(Side::Buy),
            "SELL" | "ASK" => Ok(Side::Sell),
            _ => Err(format!("invalid side: `{s}`")),
        }
    }
}

/// Weak back-reference from a resting order to the level holding it.
///
/// The book resolves it through its side maps; it never owns the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelRef {
    /// Side of the book the level sits on
    pub side: Side,
    /// Price of the level in ticks
    pub price: u64,
}

/// A buy or sell instruction for a quantity of the instrument.
///
/// Identity and side are fixed at creation. The timestamp is drawn at creation
/// and renewed when the order is cancelled off the book. The remaining
/// quantity can only be reduced, and only by the book while matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    side: Side,
    initial_quantity: u64,
    remaining_quantity: u64,
    timestamp: u64,
    level: Option<LevelRef>,
}

impl Order {
    /// Create a new order with a fresh id and the next logical timestamp
    pub fn new(side: Side, quantity: u64) -> Self {
        Self::with_id(OrderId::new(), side, quantity)
    }

    /// Create a new order with a caller-provided id
    pub fn with_id(id: OrderId, side: Side, quantity: u64) -> Self {
        Self {
            id,
            side,
            initial_quantity: quantity,
            remaining_quantity: quantity,
            timestamp: next_sequence(),
            level: None,
        }
    }

    /// Unique identifier of the order
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Side of the order
    pub fn side(&self) -> Side {
        self.side
    }

    /// Quantity the order was submitted with
    pub fn initial_quantity(&self) -> u64 {
        self.initial_quantity
    }

    /// Quantity still open
    pub fn remaining_quantity(&self) -> u64 {
        self.remaining_quantity
    }

    /// Quantity already executed
    pub fn filled_quantity(&self) -> u64 {
        self.initial_quantity.saturating_sub(self.remaining_quantity)
    }

    /// Logical creation sequence number, lower means earlier
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The level currently holding this order, if it is resting
    pub fn level(&self) -> Option<LevelRef> {
        self.level
    }

    /// Whether the order has been completely executed
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    pub(crate) fn set_level(&mut self, level: Option<LevelRef>) {
        self.level = level;
    }

    /// Take the next logical timestamp, losing any earlier time priority
    pub(crate) fn restamp(&mut self) {
        self.timestamp = next_sequence();
    }

    /// Reduce the remaining quantity by an executed amount.
    pub(crate) fn fill(&mut self, quantity: u64) {
        debug_assert!(
            quantity <= self.remaining_quantity,
            "over-fill of order {}: {} > {}",
            self.id,
            quantity,
            self.remaining_quantity
        );
        self.remaining_quantity = self.remaining_quantity.saturating_sub(quantity);
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[size: {}]", self.remaining_quantity)
    }
}
