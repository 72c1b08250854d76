//! Book-wide properties checked over generated order flow

use limit_orderbook::{MatchResult, Order, OrderBook, OrderBookError, OrderId, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_side(rng: &mut StdRng) -> Side {
    if rng.random_bool(0.5) {
        Side::Buy
    } else {
        Side::Sell
    }
}

/// Every reachable level is non-empty, has positive volume equal to the sum of
/// its orders, and its orders are in timestamp order.
fn assert_book_consistent(book: &OrderBook) {
    let mut resting = 0;
    for side in [Side::Buy, Side::Sell] {
        let mut total = 0;
        let mut last_price: Option<u64> = None;
        for level in book.levels(side) {
            assert!(level.order_count() > 0, "empty level at {}", level.price());
            assert!(level.total_volume() > 0);
            let sum: u64 = level.iter_orders().map(Order::remaining_quantity).sum();
            assert_eq!(sum, level.total_volume());

            let timestamps: Vec<u64> = level.iter_orders().map(Order::timestamp).collect();
            assert!(timestamps.windows(2).all(|w| w[0] < w[1]));
            for order in level.iter_orders() {
                assert!(!order.is_filled());
                assert_eq!(order.side(), side);
                assert_eq!(order.level().map(|l| l.price), Some(level.price()));
            }

            if let Some(previous) = last_price {
                match side {
                    Side::Buy => assert!(level.price() < previous),
                    Side::Sell => assert!(level.price() > previous),
                }
            }
            last_price = Some(level.price());
            total += level.total_volume();
            resting += level.order_count();
        }
        assert_eq!(total, book.total_volume(side));
    }
    assert_eq!(resting, book.order_count());
}

fn assert_match_properties(
    result: &MatchResult,
    taker: &Order,
    initial: u64,
    available: u64,
    side: Side,
) {
    let executed: u64 = result.matches.iter().map(|m| m.quantity).sum();
    // Conservation
    assert_eq!(executed, initial.min(available));
    // No over-fill
    assert_eq!(taker.remaining_quantity(), initial - executed);
    assert_eq!(result.remaining_quantity, taker.remaining_quantity());

    // Price priority: prices never get worse-then-better along the sweep
    for pair in result.matches.windows(2) {
        match side {
            Side::Buy => assert!(pair[0].price <= pair[1].price),
            Side::Sell => assert!(pair[0].price >= pair[1].price),
        }
    }
    for m in &result.matches {
        assert!(m.quantity > 0);
        assert_eq!(m.taker_order_id(), taker.id());
        assert_eq!(m.taker_side, side);
    }
}

#[test]
fn test_random_flow_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut book = OrderBook::new("PROP");
    let mut resting_ids: Vec<OrderId> = Vec::new();

    for _ in 0..2_000 {
        match rng.random_range(0..10) {
            0..=5 => {
                let side = random_side(&mut rng);
                let price = match side {
                    Side::Buy => rng.random_range(90..=100),
                    Side::Sell => rng.random_range(101..=111),
                };
                let order = Order::new(side, rng.random_range(1..=20));
                resting_ids.push(book.place_limit_order(price, order).unwrap());
            }
            6..=7 => {
                let side = random_side(&mut rng);
                let initial = rng.random_range(1..=60);
                let available = book.total_volume(side.opposite());
                let before = book.create_snapshot(usize::MAX);
                let mut taker = Order::new(side, initial);

                match book.place_market_order(&mut taker) {
                    Ok(result) => {
                        assert!(initial <= available);
                        assert_match_properties(&result, &taker, initial, available, side);
                        assert!(taker.is_filled());
                    }
                    Err(OrderBookError::InsufficientLiquidity {
                        requested,
                        available: reported,
                        ..
                    }) => {
                        assert_eq!(requested, initial);
                        assert_eq!(reported, available);
                        assert!(initial > available);
                        let after = book.create_snapshot(usize::MAX);
                        assert_eq!(before.bids, after.bids);
                        assert_eq!(before.asks, after.asks);
                        assert_eq!(taker.remaining_quantity(), initial);
                    }
                    Err(other) => panic!("unexpected error {other}"),
                }
            }
            _ => {
                if !resting_ids.is_empty() {
                    let index = rng.random_range(0..resting_ids.len());
                    let id = resting_ids.swap_remove(index);
                    let was_resting = book.get_order(id).is_some();
                    assert_eq!(book.cancel_order(id).is_some(), was_resting);
                    assert!(book.get_order(id).is_none());
                }
            }
        }
        assert_book_consistent(&book);
    }
}

#[test]
fn test_time_priority_at_one_price() {
    let mut book = OrderBook::new("PROP");
    let ids: Vec<OrderId> = (0..5)
        .map(|_| {
            book.place_limit_order(100, Order::new(Side::Sell, 10))
                .unwrap()
        })
        .collect();

    let mut taker = Order::new(Side::Buy, 25);
    let result = book.place_market_order(&mut taker).unwrap();

    let makers: Vec<OrderId> = result.matches.iter().map(|m| m.maker_order_id()).collect();
    assert_eq!(makers, ids[..3].to_vec());
    assert_eq!(result.matches[2].quantity, 5);
    assert_eq!(book.get_order(ids[2]).unwrap().remaining_quantity(), 5);
    assert_eq!(book.get_order(ids[3]).unwrap().remaining_quantity(), 10);
    assert_book_consistent(&book);
}

#[test]
fn test_price_priority_for_both_sides() {
    let mut book = OrderBook::new("PROP");
    for price in [105, 103, 104] {
        book.place_limit_order(price, Order::new(Side::Sell, 1))
            .unwrap();
    }
    for price in [97, 99, 98] {
        book.place_limit_order(price, Order::new(Side::Buy, 1))
            .unwrap();
    }

    let mut buy = Order::new(Side::Buy, 3);
    let buys: Vec<u64> = book
        .place_market_order(&mut buy)
        .unwrap()
        .matches
        .iter()
        .map(|m| m.price)
        .collect();
    assert_eq!(buys, vec![103, 104, 105]);

    let mut sell = Order::new(Side::Sell, 3);
    let sells: Vec<u64> = book
        .place_market_order(&mut sell)
        .unwrap()
        .matches
        .iter()
        .map(|m| m.price)
        .collect();
    assert_eq!(sells, vec![99, 98, 97]);
    assert!(book.is_empty());
}
