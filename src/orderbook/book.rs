//! Core OrderBook implementation for managing price levels and orders

use super::config::OrderBookConfig;
use super::error::OrderBookError;
use super::level::PriceLevel;
use super::order::{Order, OrderId, Side};
use super::snapshot::{OrderBookSnapshot, PriceLevelSnapshot};
use crate::utils::current_time_millis;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// The OrderBook manages the price levels of both sides of a single instrument.
///
/// Each side is a `BTreeMap` keyed by tick price, so the map order is the
/// best-price traversal order: asks from the lowest key upwards, bids from
/// the highest key downwards. Only non-empty levels are kept in the maps.
///
/// All mutating operations take `&mut self`; the book does no internal
/// locking. See [`crate::SharedOrderBook`] for a handle that serializes
/// callers on several threads.
#[derive(Debug)]
pub struct OrderBook {
    /// Configuration this book was built with
    pub(super) config: OrderBookConfig,

    /// Bid side price levels (buy orders)
    pub(super) bids: BTreeMap<u64, PriceLevel>,

    /// Ask side price levels (sell orders)
    pub(super) asks: BTreeMap<u64, PriceLevel>,

    /// Where each resting order lives, so cancellation does not scan the book
    pub(super) order_locations: HashMap<OrderId, (Side, u64)>,

    /// The last price at which a trade occurred
    pub(super) last_trade_price: Option<u64>,
}

impl OrderBook {
    /// Create a new order book for the given symbol with default configuration
    pub fn new(symbol: &str) -> Self {
        Self::from_valid_config(OrderBookConfig::new(symbol))
    }

    /// Create a new order book from a configuration, validating it first
    pub fn with_config(config: OrderBookConfig) -> Result<Self, OrderBookError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: OrderBookConfig) -> Self {
        trace!("Creating order book {}", config.symbol);
        Self {
            config,
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_locations: HashMap::new(),
            last_trade_price: None,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Get the configuration of this order book
    pub fn config(&self) -> &OrderBookConfig {
        &self.config
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Result<u64, OrderBookError> {
        self.bids
            .keys()
            .next_back()
            .copied()
            .ok_or(OrderBookError::NoLiquidity { side: Side::Buy })
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Result<u64, OrderBookError> {
        self.asks
            .keys()
            .next()
            .copied()
            .ok_or(OrderBookError::NoLiquidity { side: Side::Sell })
    }

    /// Get the best price of a side
    pub fn best_price(&self, side: Side) -> Result<u64, OrderBookError> {
        match side {
            Side::Buy => self.best_bid(),
            Side::Sell => self.best_ask(),
        }
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Ok(bid), Ok(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Ok(bid), Ok(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Get the last trade price, if any trade happened
    pub fn last_trade_price(&self) -> Option<u64> {
        self.last_trade_price
    }

    /// Total resting volume on one side
    pub fn total_volume(&self, side: Side) -> u64 {
        self.side_levels(side)
            .values()
            .map(PriceLevel::total_volume)
            .sum()
    }

    /// Number of price levels on one side
    pub fn level_count(&self, side: Side) -> usize {
        self.side_levels(side).len()
    }

    /// Number of resting orders in the whole book
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    /// Whether neither side has any resting order
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// The level at a price on one side, if any
    pub fn level(&self, side: Side, price: u64) -> Option<&PriceLevel> {
        self.side_levels(side).get(&price)
    }

    /// Levels of one side in best-price order
    pub fn levels(&self, side: Side) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        let levels = self.side_levels(side).values();
        match side {
            Side::Buy => Box::new(levels.rev()),
            Side::Sell => Box::new(levels),
        }
    }

    /// Get all orders at a specific price level, oldest first
    pub fn orders_at_price(&self, price: u64, side: Side) -> Vec<&Order> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.symbol(),
            price,
            side
        );
        self.level(side, price)
            .map(|level| level.iter_orders().collect())
            .unwrap_or_default()
    }

    /// Get a resting order by ID
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        let (side, price) = *self.order_locations.get(&order_id)?;
        self.level(side, price)?.get_order(order_id)
    }

    /// Get the total volume at each price level of both sides
    pub fn volume_by_price(&self) -> (HashMap<u64, u64>, HashMap<u64, u64>) {
        let collect = |levels: &BTreeMap<u64, PriceLevel>| {
            levels
                .iter()
                .map(|(price, level)| (*price, level.total_volume()))
                .collect::<HashMap<u64, u64>>()
        };
        (collect(&self.bids), collect(&self.asks))
    }

    /// Create a snapshot of the top `depth` levels of each side
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let bids = self
            .levels(Side::Buy)
            .take(depth)
            .map(PriceLevelSnapshot::from)
            .collect();
        let asks = self
            .levels(Side::Sell)
            .take(depth)
            .map(PriceLevelSnapshot::from)
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol().to_string(),
            timestamp: current_time_millis(),
            bids,
            asks,
        }
    }
}
