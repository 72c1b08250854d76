// demos/src/bin/basic_orderbook.rs

use limit_orderbook::{Order, OrderBook, OrderBookConfig, OrderBookError, Side, setup_logger};
use tracing::{error, info};

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic OrderBook Example");

    let mut book = match create_orderbook("BTC/USD") {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to create order book: {}", e);
            return;
        }
    };

    demo_adding_orders(&mut book);
    display_orderbook_state(&book);

    demo_market_orders(&mut book);
    demo_rejected_market_order(&mut book);
    demo_cancel_orders(&mut book);

    info!("\nFinal OrderBook State:");
    display_orderbook_state(&book);
}

fn create_orderbook(symbol: &str) -> Result<OrderBook, OrderBookError> {
    info!("Creating OrderBook for symbol: {}", symbol);
    let config = OrderBookConfig::new(symbol).with_tick_size(0.5);
    OrderBook::with_config(config)
}

fn demo_adding_orders(book: &mut OrderBook) {
    info!("\nAdding orders to the OrderBook...");

    for i in 0..5 {
        let price = 9900.0 + (i as f64 * 10.0); // 9900, 9910, ... 9940
        let quantity = 10 + (i * 5); // 10, 15, 20, 25, 30
        match book.place_limit_order_at(price, Order::new(Side::Buy, quantity)) {
            Ok(id) => info!(
                "Added BUY limit order: id={}, price={}, qty={}",
                id, price, quantity
            ),
            Err(e) => info!("Failed to add BUY limit order: {}", e),
        }
    }

    for i in 0..5 {
        let price = 10000.0 + (i as f64 * 10.0); // 10000, 10010, ... 10040
        let quantity = 10 + (i * 5);
        match book.place_limit_order_at(price, Order::new(Side::Sell, quantity)) {
            Ok(id) => info!(
                "Added SELL limit order: id={}, price={}, qty={}",
                id, price, quantity
            ),
            Err(e) => info!("Failed to add SELL limit order: {}", e),
        }
    }

    // Off-grid price is rejected
    if let Err(e) = book.place_limit_order_at(10000.25, Order::new(Side::Sell, 1)) {
        info!("Rejected off-tick order: {}", e);
    }
}

fn display_orderbook_state(book: &OrderBook) {
    let config = book.config();
    match (book.best_bid(), book.best_ask()) {
        (Ok(bid), Ok(ask)) => info!(
            "Best bid: {} | Best ask: {} | Spread: {:?} ticks",
            config.ticks_to_price(bid),
            config.ticks_to_price(ask),
            book.spread()
        ),
        (bid, ask) => info!("Best bid: {:?} | Best ask: {:?}", bid, ask),
    }

    for side in [Side::Sell, Side::Buy] {
        info!("{} side, total volume {}", side, book.total_volume(side));
        for level in book.levels(side) {
            info!("  {}", level);
        }
    }
}

fn demo_market_orders(book: &mut OrderBook) {
    info!("\nSubmitting market orders...");

    let mut buy = Order::new(Side::Buy, 35);
    match book.place_market_order(&mut buy) {
        Ok(result) => {
            for m in &result.matches {
                info!("  {}", m);
            }
            info!(
                "Market BUY executed {} at average {:?}",
                result.executed_quantity(),
                result.average_price()
            );
        }
        Err(e) => info!("Market BUY failed: {}", e),
    }

    let mut sell = Order::new(Side::Sell, 12);
    match book.place_market_order(&mut sell) {
        Ok(result) => info!(
            "Market SELL executed {} in {} matches",
            result.executed_quantity(),
            result.matches.len()
        ),
        Err(e) => info!("Market SELL failed: {}", e),
    }
}

fn demo_rejected_market_order(book: &mut OrderBook) {
    info!("\nSubmitting an oversized market order...");
    let available = book.total_volume(Side::Buy);
    let mut sell = Order::new(Side::Sell, available.saturating_add(1));
    match book.place_market_order(&mut sell) {
        Ok(_) => info!("Unexpectedly executed"),
        Err(e) => info!("Rejected as expected: {}", e),
    }
    info!("Bid volume unchanged: {}", book.total_volume(Side::Buy));
}

fn demo_cancel_orders(book: &mut OrderBook) {
    info!("\nCancelling the oldest order at the best bid...");
    let Some(id) = book
        .levels(Side::Buy)
        .next()
        .and_then(|level| level.iter_orders().next())
        .map(Order::id)
    else {
        info!("No bids to cancel");
        return;
    };

    match book.cancel_order(id) {
        Some(order) => info!("Cancelled order {} {}", id, order),
        None => info!("Order {} was no longer resting", id),
    }
    // Cancelling again is a no-op
    info!(
        "Second cancel returned: {:?}",
        book.cancel_order(id).map(|o| o.id())
    );
}
