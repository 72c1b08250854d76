mod logger;
mod sequence;
mod time;


pub use logger::setup_logger;
pub use sequence::{current_sequence, next_sequence};
pub use time::current_time_millis;
