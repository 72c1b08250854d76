use criterion::{BenchmarkId, Criterion};
use limit_orderbook::{Order, OrderBook, Side};
use std::hint::black_box;

/// Register all benchmarks for resting limit orders on an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // One new level per order
    group.bench_function("add_limit_orders_distinct_prices", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100 {
                let order = Order::new(Side::Buy, 10);
                let _ = black_box(order_book.place_limit_order(1000 + i, order));
            }
        })
    });

    // Deep queue at a single level
    group.bench_function("add_limit_orders_same_price", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for _ in 0..100 {
                let order = Order::new(Side::Sell, 10);
                let _ = black_box(order_book.place_limit_order(1000, order));
            }
        })
    });

    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("add_and_cancel", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut order_book = OrderBook::new("TEST-SYMBOL");
                    let ids: Vec<_> = (0..order_count)
                        .filter_map(|i| {
                            order_book
                                .place_limit_order(1000 + i % 20, Order::new(Side::Buy, 10))
                                .ok()
                        })
                        .collect();
                    for id in ids {
                        black_box(order_book.cancel_order(id));
                    }
                })
            },
        );
    }

    group.finish();
}
