use criterion::Criterion;
use limit_orderbook::{Order, OrderBook, Side};
use std::hint::black_box;

pub fn benchmark_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("Basic OrderBook Operations");

    group.bench_function("create_order_book", |b| {
        b.iter(|| {
            let _order_book = black_box(OrderBook::new("TEST-SYMBOL"));
        })
    });

    group.bench_function("add_single_order", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            let _ = black_box(order_book.place_limit_order(1000, Order::new(Side::Buy, 10)));
        })
    });

    group.bench_function("best_prices", |b| {
        let mut order_book = OrderBook::new("TEST-SYMBOL");
        for i in 0..100 {
            let _ = order_book.place_limit_order(900 + i, Order::new(Side::Buy, 10));
            let _ = order_book.place_limit_order(1100 + i, Order::new(Side::Sell, 10));
        }
        b.iter(|| black_box((order_book.best_bid(), order_book.best_ask())))
    });

    group.finish();
}
