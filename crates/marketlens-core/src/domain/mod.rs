//! Canonical domain types for marketlens market data.
//!
//! All types validate their invariants at construction time and carry full
//! serde support, so anything that deserializes is safe to hand to the
//! indicator layer.

mod models;
mod period;
mod symbol;
mod timestamp;

pub use models::{PriceBar, PriceSeries, TickerMetadata};
pub use period::HistoryPeriod;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
