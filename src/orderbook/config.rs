//! Order book configuration and decimal price <-> tick conversion

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};

/// Relative tolerance when deciding whether a decimal price sits on the tick grid.
const TICK_TOLERANCE: f64 = 1e-9;

/// Static parameters of an order book.
///
/// Prices inside the book are integer ticks. `tick_size` is the decimal value
/// of one tick and is only used at the boundary to convert prices coming from
/// or going to the outside world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBookConfig {
    /// Instrument symbol, e.g. "BTC/USD"
    pub symbol: String,
    /// Decimal value of one price tick
    pub tick_size: f64,
    /// Smallest quantity accepted for a new order
    pub min_quantity: u64,
}

impl Default for OrderBookConfig {
    fn default() -> Self {
        Self {
            symbol: "DEFAULT".to_string(),
            tick_size: 1.0,
            min_quantity: 1,
        }
    }
}

impl OrderBookConfig {
    /// Default configuration for the given symbol
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Self::default()
        }
    }

    /// Set the tick size
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set the minimum order quantity
    pub fn with_min_quantity(mut self, min_quantity: u64) -> Self {
        self.min_quantity = min_quantity;
        self
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json(data: &str) -> Result<Self, OrderBookError> {
        let config: OrderBookConfig = serde_json::from_str(data)
            .map_err(|e| OrderBookError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        serde_json::to_string(self).map_err(|e| OrderBookError::Serialization(e.to_string()))
    }

    /// Check that the configuration can be used by a book
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.symbol.trim().is_empty() {
            return Err(OrderBookError::Config("symbol must not be empty".to_string()));
        }
        if !self.tick_size.is_finite() || self.tick_size <= 0.0 {
            return Err(OrderBookError::Config(format!(
                "tick_size must be a positive finite number, got {}",
                self.tick_size
            )));
        }
        if self.min_quantity == 0 {
            return Err(OrderBookError::Config(
                "min_quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert a decimal price into ticks.
    ///
    /// Fails if the price is not positive, not finite, or not a whole number
    /// of ticks.
    pub fn price_to_ticks(&self, price: f64) -> Result<u64, OrderBookError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(OrderBookError::InvalidPrice(format!(
                "{price} is not a positive finite price"
            )));
        }

        let ticks = price / self.tick_size;
        let rounded = ticks.round();
        if (ticks - rounded).abs() > TICK_TOLERANCE * rounded.max(1.0) {
            return Err(OrderBookError::InvalidPrice(format!(
                "{price} is not a multiple of tick size {}",
                self.tick_size
            )));
        }
        if rounded < 1.0 || rounded >= u64::MAX as f64 {
            return Err(OrderBookError::InvalidPrice(format!(
                "{price} is outside the representable tick range"
            )));
        }

        Ok(rounded as u64)
    }

    /// Convert ticks back into a decimal price
    pub fn ticks_to_price(&self, ticks: u64) -> f64 {
        ticks as f64 * self.tick_size
    }
}
