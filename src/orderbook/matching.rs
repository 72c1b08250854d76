//! Contains the core matching engine logic for the order book.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::execution::MatchResult;
use super::order::{Order, Side};
use tracing::{debug, trace, warn};

impl OrderBook {
    /// Sweep an incoming market order through the opposite side.
    ///
    /// Levels are consumed in best-price order (lowest ask first for a buy,
    /// highest bid first for a sell) and, within a level, oldest order first.
    /// Each drained level is removed from the book as soon as it is empty.
    ///
    /// If the opposite side holds less volume than the order's remaining
    /// quantity the order is rejected with
    /// [`OrderBookError::InsufficientLiquidity`] and nothing is touched.
    pub fn place_market_order(
        &mut self,
        incoming: &mut Order,
    ) -> Result<MatchResult, OrderBookError> {
        let side = incoming.side();
        let requested = incoming.remaining_quantity();
        trace!(
            "Order book {}: Placing market order {} {} {}",
            self.symbol(),
            incoming.id(),
            side,
            requested
        );

        self.check_quantity(requested)?;

        let available = self.total_volume(side.opposite());
        if available < requested {
            warn!(
                "Order book {}: Rejected market order {}: requested {}, available {}",
                self.symbol(),
                incoming.id(),
                requested,
                available
            );
            return Err(OrderBookError::InsufficientLiquidity {
                side,
                requested,
                available,
            });
        }

        let result = self.sweep(incoming);
        self.debug_check_invariants();
        Ok(result)
    }

    /// How much of a market order of `quantity` on `side` the book could fill now
    pub fn peek_match(&self, side: Side, quantity: u64) -> u64 {
        let mut matched = 0u64;
        for level in self.levels(side.opposite()) {
            if matched >= quantity {
                break;
            }
            matched = matched.saturating_add(level.total_volume().min(quantity - matched));
        }
        matched
    }

    /// Match `incoming` level by level until it is filled or the side runs dry.
    fn sweep(&mut self, incoming: &mut Order) -> MatchResult {
        let opposite = incoming.side().opposite();
        let mut result = MatchResult::new(incoming.id(), incoming.remaining_quantity());

        while !incoming.is_filled() {
            let Ok(price) = self.best_price(opposite) else {
                break;
            };
            let Some(level) = self.side_levels_mut(opposite).get_mut(&price) else {
                break;
            };

            let level_result = level.match_order(incoming);
            trace!(
                "Order book {}: {} matches at {}",
                self.symbol(),
                level_result.matches.len(),
                price
            );

            if !level_result.matches.is_empty() {
                self.last_trade_price = Some(price);
            }
            for filled_order_id in &level_result.filled_order_ids {
                self.order_locations.remove(filled_order_id);
            }
            result.absorb(level_result);

            self.remove_level_if_empty(opposite, price);
        }

        debug!(
            "Order book {}: Order {} executed {} in {} matches",
            self.symbol(),
            incoming.id(),
            result.executed_quantity(),
            result.matches.len()
        );
        result
    }
}
