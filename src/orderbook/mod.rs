//! OrderBook implementation for managing price levels and order matching.

pub mod book;
mod config;
mod error;
mod execution;
mod level;
mod operations;
mod order;
mod private;
mod shared;
mod snapshot;

pub mod matching;

pub use book::OrderBook;
pub use config::OrderBookConfig;
pub use error::OrderBookError;
pub use execution::{Match, MatchResult};
pub use level::PriceLevel;
pub use order::{LevelRef, Order, OrderId, Side};
pub use shared::SharedOrderBook;
pub use snapshot::{OrderBookSnapshot, PriceLevelSnapshot};
