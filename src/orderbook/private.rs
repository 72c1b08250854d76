use super::book::OrderBook;
use super::error::OrderBookError;
use super::level::PriceLevel;
use super::order::Side;
use std::collections::BTreeMap;
use tracing::debug;

impl OrderBook {
    /// Levels of one side, keyed by tick price
    pub(super) fn side_levels(&self, side: Side) -> &BTreeMap<u64, PriceLevel> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Mutable levels of one side, keyed by tick price
    pub(super) fn side_levels_mut(&mut self, side: Side) -> &mut BTreeMap<u64, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Reject quantities below the configured minimum
    pub(super) fn check_quantity(&self, quantity: u64) -> Result<(), OrderBookError> {
        let minimum = self.config.min_quantity.max(1);
        if quantity < minimum {
            return Err(OrderBookError::InvalidQuantity { quantity, minimum });
        }
        Ok(())
    }

    /// Drop a level from its side if nothing rests there anymore
    pub(super) fn remove_level_if_empty(&mut self, side: Side, price: u64) {
        let levels = self.side_levels_mut(side);
        if levels.get(&price).is_some_and(PriceLevel::is_empty) {
            levels.remove(&price);
            debug!("Removed empty {} level at {}", side, price);
        }
    }

    /// Check the structural invariants of the whole book in debug builds
    pub(super) fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            for side in [Side::Buy, Side::Sell] {
                for (price, level) in self.side_levels(side) {
                    debug_assert_eq!(*price, level.price());
                    debug_assert!(!level.is_empty(), "empty {side} level at {price}");
                    debug_assert!(
                        level.total_volume() > 0,
                        "{side} level at {price} has no volume"
                    );
                    debug_assert_eq!(
                        level.total_volume(),
                        level.iter_orders().map(|o| o.remaining_quantity()).sum::<u64>()
                    );
                }
            }
            let resting: usize = self
                .bids
                .values()
                .chain(self.asks.values())
                .map(PriceLevel::order_count)
                .sum();
            debug_assert_eq!(resting, self.order_locations.len(), "order index out of sync");
        }
    }
}
