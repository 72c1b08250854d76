//! # Limit Order Book Matching Core
//!
//! The matching core of a limit order book for a single instrument. It accepts
//! buy and sell orders, keeps resting liquidity grouped by price and executes
//! trades with price-time priority.
//!
//! ## Key Features
//!
//! - **Price-Time Priority**: Better prices always match first; at one price the
//!   oldest resting order matches first. Arrival order comes from a process-wide
//!   logical clock, never from the wall clock.
//!
//! - **Exact Tick Prices**: Prices are integer ticks. [`OrderBookConfig`] converts
//!   decimal prices at the boundary and rejects prices that are off the tick grid.
//!
//! - **Atomic Market Orders**: A market order is checked against the available
//!   opposite-side volume before anything is touched. If it cannot be filled
//!   completely it is rejected with [`OrderBookError::InsufficientLiquidity`] and
//!   the book is left unchanged.
//!
//! - **Clean Levels**: A price level exists in the book only while it holds at least
//!   one order. Levels drained by matching or cancellation are removed at once.
//!
//! - **Snapshots**: Depth-limited snapshots of both sides, serializable to JSON.
//!
//! ## Components
//!
//! | Type | Role |
//! |------|------|
//! | [`Order`] | Identity, side, logical timestamp and remaining quantity |
//! | [`PriceLevel`] | FIFO queue of orders at one price, intra-level matching |
//! | [`OrderBook`] | Both sides, best prices, limit/market/cancel operations |
//! | [`Match`] | One maker/taker pairing at the maker's price |
//! | [`SharedOrderBook`] | `Arc<Mutex<_>>` handle serializing callers on many threads |
//!
//! ## Example
//!
//! ```rust
//! use limit_orderbook::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new("BTC/USD");
//!
//! book.place_limit_order(10_000, Order::new(Side::Sell, 11)).unwrap();
//! book.place_limit_order(9_000, Order::new(Side::Sell, 10)).unwrap();
//!
//! let mut buy = Order::new(Side::Buy, 15);
//! let result = book.place_market_order(&mut buy).unwrap();
//!
//! assert_eq!(result.matches.len(), 2);
//! assert_eq!(result.matches[0].price, 9_000);
//! assert_eq!(result.matches[1].quantity, 5);
//! assert_eq!(book.best_ask().unwrap(), 10_000);
//! assert_eq!(book.total_volume(Side::Sell), 6);
//! assert!(buy.is_filled());
//! ```
//!
//! ## Concurrency
//!
//! The book itself is single-threaded: every mutating operation takes `&mut self`
//! and runs to completion. Callers on several threads must serialize their calls,
//! for instance through [`SharedOrderBook`] or a single dispatcher task.
//!
//! ## Logging
//!
//! Operations are instrumented with `tracing`. Binaries can install a subscriber
//! with [`setup_logger`], which reads its level from the `LOGLEVEL` environment
//! variable.

pub mod orderbook;

mod utils;

pub use orderbook::{
    LevelRef, Match, MatchResult, Order, OrderBook, OrderBookConfig, OrderBookError,
    OrderBookSnapshot, OrderId, PriceLevel, PriceLevelSnapshot, SharedOrderBook, Side,
};
pub use utils::{current_sequence, current_time_millis, next_sequence, setup_logger};
