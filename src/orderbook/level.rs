//! A single price level: FIFO queue of resting orders and intra-level matching

use super::execution::{Match, MatchResult};
use super::order::{LevelRef, Order, OrderId, Side};
use std::collections::VecDeque;
use std::fmt;
use tracing::trace;

/// All orders resting at one exact price on one side of the book.
///
/// Orders are kept in ascending `timestamp` order, which is the time priority
/// used when matching. `total_volume` is a cached sum of the remaining
/// quantities of the queued orders and is kept in step with every add,
/// removal and fill.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: u64,
    side: Side,
    orders: VecDeque<Order>,
    total_volume: u64,
}

impl PriceLevel {
    /// Create an empty price level
    pub fn new(price: u64, side: Side) -> Self {
        Self {
            price,
            side,
            orders: VecDeque::new(),
            total_volume: 0,
        }
    }

    /// Price of this level in ticks
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Side of the book this level sits on
    pub fn side(&self) -> Side {
        self.side
    }

    /// Sum of the remaining quantity of every order at this level
    pub fn total_volume(&self) -> u64 {
        self.total_volume
    }

    /// Number of resting orders
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order rests at this level
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders in time priority, oldest first
    pub fn iter_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Find a resting order by id
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == order_id)
    }

    /// Add an order to the queue at its time-priority position.
    ///
    /// Orders usually arrive with the newest timestamp, so the insertion point
    /// is almost always the back of the queue.
    pub fn add_order(&mut self, mut order: Order) {
        debug_assert_eq!(order.side(), self.side, "order side does not match level side");
        debug_assert!(!order.is_filled(), "filled order added to level");

        order.set_level(Some(LevelRef {
            side: self.side,
            price: self.price,
        }));
        self.total_volume += order.remaining_quantity();

        let timestamp = order.timestamp();
        let position = self.orders.partition_point(|o| o.timestamp() <= timestamp);
        trace!(
            "Level {} {}: inserting order {} at position {}",
            self.side,
            self.price,
            order.id(),
            position
        );
        self.orders.insert(position, order);
    }

    /// Remove an order by identity.
    ///
    /// Returns `None` when the order is not queued here, which is expected for
    /// orders that were already filled.
    pub fn remove_order(&mut self, order_id: OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.id() == order_id)?;
        let mut order = self.orders.remove(position)?;

        self.total_volume -= order.remaining_quantity();
        order.set_level(None);
        trace!(
            "Level {} {}: removed order {} ({} left)",
            self.side,
            self.price,
            order_id,
            self.orders.len()
        );
        Some(order)
    }

    /// Match an incoming order against the resting orders, oldest first.
    ///
    /// Stops as soon as the incoming order is filled or the queue is empty.
    /// Fully filled resting orders leave the queue and are reported in
    /// `filled_order_ids`.
    pub fn match_order(&mut self, incoming: &mut Order) -> MatchResult {
        debug_assert_eq!(incoming.side(), self.side.opposite(), "incoming order on same side");

        let mut result = MatchResult::new(incoming.id(), incoming.remaining_quantity());

        while !incoming.is_filled() {
            let Some(resting) = self.orders.front_mut() else {
                break;
            };

            let trade = Self::pairwise_fill(self.price, resting, incoming);
            self.total_volume -= trade.quantity;

            if resting.is_filled() {
                if let Some(mut filled) = self.orders.pop_front() {
                    filled.set_level(None);
                    result.filled_order_ids.push(filled.id());
                }
            }
            result.matches.push(trade);
        }

        result.remaining_quantity = incoming.remaining_quantity();
        result.is_complete = incoming.is_filled();
        self.debug_check_volume();
        result
    }

    /// Exchange `min(resting, incoming)` between two orders of opposite sides.
    fn pairwise_fill(price: u64, resting: &mut Order, incoming: &mut Order) -> Match {
        let filled = resting.remaining_quantity().min(incoming.remaining_quantity());
        resting.fill(filled);
        incoming.fill(filled);

        Match::new(resting.id(), incoming.id(), incoming.side(), price, filled)
    }

    fn debug_check_volume(&self) {
        debug_assert_eq!(
            self.total_volume,
            self.orders.iter().map(Order::remaining_quantity).sum::<u64>(),
            "level {} {} volume out of sync",
            self.side,
            self.price
        );
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[price: {} | volume: {}]", self.price, self.total_volume)
    }
}
