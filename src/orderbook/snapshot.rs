//! Order book snapshot for market data

use super::error::OrderBookError;
use super::level::PriceLevel;
use super::order::Order;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A copy of one price level at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevelSnapshot {
    /// Price in ticks
    pub price: u64,
    /// Sum of the remaining quantity of the level's orders
    pub total_volume: u64,
    /// Number of resting orders
    pub order_count: usize,
    /// Resting orders, oldest first
    pub orders: Vec<Order>,
}

impl From<&PriceLevel> for PriceLevelSnapshot {
    fn from(level: &PriceLevel) -> Self {
        Self {
            price: level.price(),
            total_volume: level.total_volume(),
            order_count: level.order_count(),
            orders: level.iter_orders().cloned().collect(),
        }
    }
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid levels, best (highest) price first
    pub bids: Vec<PriceLevelSnapshot>,

    /// Ask levels, best (lowest) price first
    pub asks: Vec<PriceLevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and volume
    pub fn best_bid(&self) -> Option<(u64, u64)> {
        let bid = self
            .bids
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and volume
    pub fn best_ask(&self) -> Option<(u64, u64)> {
        let ask = self
            .asks
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some(ask_price.saturating_sub(bid_price))
            }
            _ => None,
        }
    }

    /// Calculate the total volume on the bid side
    pub fn total_bid_volume(&self) -> u64 {
        self.bids.iter().map(|level| level.total_volume).sum()
    }

    /// Calculate the total volume on the ask side
    pub fn total_ask_volume(&self) -> u64 {
        self.asks.iter().map(|level| level.total_volume).sum()
    }

    /// Calculate the total value on the bid side (price * quantity)
    pub fn total_bid_value(&self) -> u128 {
        self.bids
            .iter()
            .map(|level| level.price as u128 * level.total_volume as u128)
            .sum()
    }

    /// Calculate the total value on the ask side (price * quantity)
    pub fn total_ask_value(&self) -> u128 {
        self.asks
            .iter()
            .map(|level| level.price as u128 * level.total_volume as u128)
            .sum()
    }

    /// Serialize the snapshot to JSON
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        serde_json::to_string(self).map_err(|e| OrderBookError::Serialization(e.to_string()))
    }

    /// Deserialize a snapshot from JSON
    pub fn from_json(data: &str) -> Result<Self, OrderBookError> {
        serde_json::from_str(data).map_err(|e| OrderBookError::Serialization(e.to_string()))
    }
}
