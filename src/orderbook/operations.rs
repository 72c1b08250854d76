//! Order book operations like resting limit orders and cancelling them

use super::book::OrderBook;
use super::error::OrderBookError;
use super::level::PriceLevel;
use super::order::{Order, OrderId, Side};
use tracing::{debug, trace, warn};

impl OrderBook {
    /// Rest a limit order on the book at a tick price.
    ///
    /// The order is queued behind every order already resting at that price.
    /// It is never matched against the opposite side here, even if the price
    /// crosses the spread; use [`OrderBook::will_cross_market`] and
    /// [`OrderBook::place_market_order`] first when that is wanted.
    pub fn place_limit_order(
        &mut self,
        price: u64,
        order: Order,
    ) -> Result<OrderId, OrderBookError> {
        let (order_id, side) = (order.id(), order.side());
        trace!(
            "Order book {}: Placing limit order {} {} {} @ {}",
            self.symbol(),
            order_id,
            side,
            order.remaining_quantity(),
            price
        );

        if let Err(err) = self.validate_limit_order(price, &order) {
            warn!(
                "Order book {}: Rejected limit order {}: {}",
                self.symbol(),
                order_id,
                err
            );
            return Err(err);
        }

        let level = self.side_levels_mut(side).entry(price).or_insert_with(|| {
            debug!("Creating {} level at {}", side, price);
            PriceLevel::new(price, side)
        });
        level.add_order(order);
        self.order_locations.insert(order_id, (side, price));

        self.debug_check_invariants();
        Ok(order_id)
    }

    /// Rest a limit order at a decimal price, converted with the book's tick size
    pub fn place_limit_order_at(
        &mut self,
        price: f64,
        order: Order,
    ) -> Result<OrderId, OrderBookError> {
        let ticks = self.config.price_to_ticks(price)?;
        self.place_limit_order(ticks, order)
    }

    /// Cancel a resting order.
    ///
    /// Returns the removed order, or `None` when the order is not resting,
    /// for example because it was already filled. The returned order carries a
    /// fresh timestamp, so placing it again queues it as a new arrival.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Option<Order> {
        trace!("Order book {}: Cancelling order {}", self.symbol(), order_id);

        let Some(&(side, price)) = self.order_locations.get(&order_id) else {
            trace!("Order book {}: Order {} not resting", self.symbol(), order_id);
            return None;
        };

        let removed = self
            .side_levels_mut(side)
            .get_mut(&price)
            .and_then(|level| level.remove_order(order_id))
            .map(|mut order| {
                order.restamp();
                order
            });
        self.order_locations.remove(&order_id);
        self.remove_level_if_empty(side, price);

        self.debug_check_invariants();
        removed
    }

    /// Check if a limit order at `price` would cross the opposite best price
    pub fn will_cross_market(&self, price: u64, side: Side) -> bool {
        match side {
            Side::Buy => self.best_ask().is_ok_and(|best_ask| price >= best_ask),
            Side::Sell => self.best_bid().is_ok_and(|best_bid| price <= best_bid),
        }
    }

    fn validate_limit_order(&self, price: u64, order: &Order) -> Result<(), OrderBookError> {
        if price == 0 {
            return Err(OrderBookError::InvalidPrice(
                "price must be at least one tick".to_string(),
            ));
        }
        self.check_quantity(order.remaining_quantity())?;
        if self.order_locations.contains_key(&order.id()) {
            return Err(OrderBookError::DuplicateOrderId(order.id()));
        }

        // A level never holds more than its side, so this bounds every level total too.
        let (side, quantity) = (order.side(), order.remaining_quantity());
        let resting = self.total_volume(side);
        if resting.checked_add(quantity).is_none() {
            return Err(OrderBookError::VolumeOverflow {
                side,
                resting,
                quantity,
            });
        }
        Ok(())
    }
}
