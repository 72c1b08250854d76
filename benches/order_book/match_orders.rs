use criterion::{BenchmarkId, Criterion};
use limit_orderbook::{Order, OrderBook, Side};
use std::hint::black_box;

/// Register all benchmarks for matching market orders in an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");
    group.sample_size(100);

    // Market order against one deep level
    group.bench_function("match_market_single_level", |b| {
        b.iter(|| {
            let mut order_book = setup_limit_order_book(100, 1);
            let mut taker = Order::new(Side::Buy, 50);
            let _ = black_box(order_book.place_market_order(&mut taker));
        })
    });

    // Market order sweeping many levels
    group.bench_function("match_market_sweep_levels", |b| {
        b.iter(|| {
            let mut order_book = setup_limit_order_book(100, 50);
            let mut taker = Order::new(Side::Buy, 500);
            let _ = black_box(order_book.place_market_order(&mut taker));
        })
    });

    // Rejected order, only the liquidity check runs
    group.bench_function("reject_insufficient_liquidity", |b| {
        let mut order_book = setup_limit_order_book(100, 10);
        b.iter(|| {
            let mut taker = Order::new(Side::Buy, 10_000);
            let _ = black_box(order_book.place_market_order(&mut taker));
        })
    });

    for match_quantity in [10, 50, 100, 200, 500].iter() {
        group.bench_with_input(
            BenchmarkId::new("match_quantity_scaling", match_quantity),
            match_quantity,
            |b, &match_quantity| {
                b.iter(|| {
                    let mut order_book = setup_limit_order_book(50, 5);
                    let mut taker = Order::new(Side::Buy, match_quantity);
                    let _ = black_box(order_book.place_market_order(&mut taker));
                })
            },
        );
    }

    group.finish();
}

// Helper function to set up an order book with sell limit orders spread over `levels` prices
fn setup_limit_order_book(order_count: u64, levels: u64) -> OrderBook {
    let mut order_book = OrderBook::new("TEST-SYMBOL");

    for i in 0..order_count {
        let _ = order_book.place_limit_order(1000 + i % levels, Order::new(Side::Sell, 10));
    }

    order_book
}
