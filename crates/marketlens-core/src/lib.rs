//! Core contracts for marketlens.
//!
//! This crate contains:
//! - Canonical market data models and validation
//! - The history period vocabulary shared with providers
//! - The provider trait, its request/response types, and a fixture adapter

pub mod domain;
pub mod error;
pub mod provider;
pub mod providers;

pub use domain::{HistoryPeriod, PriceBar, PriceSeries, Symbol, TickerMetadata, UtcDateTime};
pub use error::{CoreError, InvalidInputError};
pub use provider::{HistoryRequest, MarketDataProvider, MarketSnapshot, ProviderError};
pub use providers::FixtureProvider;
