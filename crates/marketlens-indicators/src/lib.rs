//! Technical indicator engine for marketlens.
//!
//! This crate contains:
//! - Indicator computations over validated price series (RSI, MACD,
//!   Bollinger bands)
//! - Change arithmetic and threshold classification
//! - Dashboard summary helpers (sentiment vocabulary, latest-values
//!   snapshot, mover ranking)
//!
//! Every operation is a pure, synchronous transform: no I/O, no shared
//! state, and identical inputs always produce identical outputs.

pub mod bollinger;
pub mod change;
pub mod classify;
pub mod error;
pub mod macd;
pub mod rsi;
pub mod sentiment;
pub mod series;
pub mod summary;

pub use bollinger::{band_position, bollinger, BollingerBands, BollingerParams};
pub use change::ChangeStat;
pub use classify::ThresholdTable;
pub use error::{ConfigurationError, IndicatorError};
pub use macd::{macd, MacdParams, MacdSeries};
pub use rsi::{rsi, RsiParams};
pub use sentiment::{BandZone, MacdStance, MarketSentiment, MomentumZone};
pub use series::{IndicatorPoint, IndicatorSeries};
pub use summary::{rank_movers, snapshot, IndicatorSnapshot, SymbolChange};
