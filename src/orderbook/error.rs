//! Order book error types

use super::order::{OrderId, Side};
use thiserror::Error;

/// Errors that can occur within the OrderBook.
///
/// Every error is reported before the book is mutated, so a failed call leaves
/// the book exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderBookError {
    /// Not enough opposite-side volume to fill a market order completely
    #[error("Insufficient liquidity for {side} order: requested {requested}, available {available}")]
    InsufficientLiquidity {
        /// The side of the market order
        side: Side,
        /// Quantity requested
        requested: u64,
        /// Quantity available
        available: u64,
    },

    /// A best-price query on a side without any level
    #[error("No liquidity on {side} side")]
    NoLiquidity {
        /// The queried side
        side: Side,
    },

    /// Order quantity is zero or below the configured minimum
    #[error("Invalid quantity {quantity}: minimum is {minimum}")]
    InvalidQuantity {
        /// Quantity submitted
        quantity: u64,
        /// Smallest accepted quantity
        minimum: u64,
    },

    /// Resting the order would push the side volume past `u64::MAX`
    #[error("Volume overflow on {side} side: resting {resting}, adding {quantity}")]
    VolumeOverflow {
        /// The side of the limit order
        side: Side,
        /// Volume already resting on that side
        resting: u64,
        /// Quantity submitted
        quantity: u64,
    },

    /// Price is not a valid tick price
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// An order with the same id is already resting in the book
    #[error("Duplicate order id: {0}")]
    DuplicateOrderId(OrderId),

    /// Invalid order book configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Snapshot or configuration (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}
