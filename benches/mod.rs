use criterion::{criterion_group, criterion_main};

mod order_book;

use order_book::register_benchmarks as register_order_book_benchmarks;
use simple::basic::benchmark_data;

criterion_group!(benches, benchmark_data, register_order_book_benchmarks);

criterion_main!(benches);
