use criterion::Criterion;
use limit_orderbook::{Order, OrderBook, Side};
use std::hint::black_box;

/// Register benchmarks for mixed/realistic order book operations
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    group.bench_function("realistic_trading_scenario", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            let mut resting = Vec::with_capacity(100);

            // Phase 1: Build both sides of the book
            for i in 0..50 {
                let bid = Order::new(Side::Buy, 10);
                if let Ok(id) = order_book.place_limit_order(990 + i % 10, bid) {
                    resting.push(id);
                }
                let ask = Order::new(Side::Sell, 10);
                if let Ok(id) = order_book.place_limit_order(1010 + i % 10, ask) {
                    resting.push(id);
                }
            }

            // Phase 2: Market orders on both sides
            for i in 0..10 {
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let mut taker = Order::new(side, 15);
                let _ = black_box(order_book.place_market_order(&mut taker));
            }

            // Phase 3: Cancel every third resting order
            for id in resting.iter().step_by(3) {
                black_box(order_book.cancel_order(*id));
            }

            // Phase 4: Market data queries
            black_box(order_book.spread());
            black_box(order_book.create_snapshot(5));
        })
    });

    group.finish();
}
