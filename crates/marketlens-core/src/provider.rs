use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{HistoryPeriod, InvalidInputError, PriceSeries, Symbol, TickerMetadata};

/// Request payload for history lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub period: HistoryPeriod,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol, period: HistoryPeriod) -> Self {
        Self { symbol, period }
    }
}

/// Full provider payload for one symbol: validated history plus whatever
/// descriptive metadata the upstream source reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: Symbol,
    pub period: HistoryPeriod,
    pub series: PriceSeries,
    pub metadata: TickerMetadata,
}

impl MarketSnapshot {
    pub fn new(
        period: HistoryPeriod,
        series: PriceSeries,
        metadata: TickerMetadata,
    ) -> Result<Self, InvalidInputError> {
        metadata.validate()?;
        Ok(Self {
            symbol: series.symbol().clone(),
            period,
            series,
            metadata,
        })
    }
}

/// Errors surfaced by market data providers.
///
/// `DataUnavailable` means the upstream source has nothing for the request;
/// malformed data keeps its own [`InvalidInputError`] so callers can tell
/// "missing" apart from "broken".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("no data available for '{symbol}': {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error(transparent)]
    Validation(#[from] InvalidInputError),
}

impl ProviderError {
    pub fn data_unavailable(symbol: &Symbol, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            symbol: symbol.as_str().to_owned(),
            reason: reason.into(),
        }
    }
}

/// Market data provider contract.
///
/// Implementations are synchronous and must be shareable across threads;
/// hosts that want async wrap calls themselves.
pub trait MarketDataProvider: Send + Sync {
    /// Stable provider name used in diagnostics.
    fn name(&self) -> &str;

    /// Descriptive metadata for a symbol.
    fn metadata(&self, symbol: &Symbol) -> Result<TickerMetadata, ProviderError>;

    /// Price history plus metadata for a symbol over a period.
    fn history(&self, request: &HistoryRequest) -> Result<MarketSnapshot, ProviderError>;
}
