//! Thread-safe handle that serializes access to one order book

use super::book::OrderBook;
use super::error::OrderBookError;
use super::execution::MatchResult;
use super::order::{Order, OrderId, Side};
use super::snapshot::OrderBookSnapshot;
use std::sync::{Arc, Mutex, MutexGuard};

/// A cloneable handle to an [`OrderBook`] shared between threads.
///
/// Every call takes the lock for its whole duration, so operations from
/// different threads are applied one at a time in lock acquisition order.
#[derive(Debug, Clone)]
pub struct SharedOrderBook {
    inner: Arc<Mutex<OrderBook>>,
}

impl SharedOrderBook {
    /// Wrap an order book
    pub fn new(book: OrderBook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    /// Run a closure with exclusive access to the book
    pub fn with_book<R>(&self, f: impl FnOnce(&mut OrderBook) -> R) -> R {
        f(&mut *self.lock())
    }

    /// See [`OrderBook::place_limit_order`]
    pub fn place_limit_order(&self, price: u64, order: Order) -> Result<OrderId, OrderBookError> {
        self.lock().place_limit_order(price, order)
    }

    /// See [`OrderBook::place_market_order`]
    pub fn place_market_order(
        &self,
        incoming: &mut Order,
    ) -> Result<MatchResult, OrderBookError> {
        self.lock().place_market_order(incoming)
    }

    /// See [`OrderBook::cancel_order`]
    pub fn cancel_order(&self, order_id: OrderId) -> Option<Order> {
        self.lock().cancel_order(order_id)
    }

    /// See [`OrderBook::best_price`]
    pub fn best_price(&self, side: Side) -> Result<u64, OrderBookError> {
        self.lock().best_price(side)
    }

    /// See [`OrderBook::total_volume`]
    pub fn total_volume(&self, side: Side) -> u64 {
        self.lock().total_volume(side)
    }

    /// See [`OrderBook::create_snapshot`]
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        self.lock().create_snapshot(depth)
    }

    // Operations validate before mutating and the volume sums cannot overflow,
    // so a poisoned lock still guards a consistent book.
    fn lock(&self) -> MutexGuard<'_, OrderBook> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<OrderBook> for SharedOrderBook {
    fn from(book: OrderBook) -> Self {
        Self::new(book)
    }
}
