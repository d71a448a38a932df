use std::collections::HashMap;

use crate::provider::{HistoryRequest, MarketDataProvider, MarketSnapshot, ProviderError};
use crate::{CoreError, HistoryPeriod, PriceSeries, Symbol, TickerMetadata};

/// Deterministic in-memory provider backed by pre-recorded snapshots.
///
/// The same instance can serve several periods per symbol; registering a
/// snapshot replaces any earlier entry for its symbol/period pair and takes
/// the symbol's metadata from the latest registration.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    metadata: HashMap<Symbol, TickerMetadata>,
    history: HashMap<(Symbol, HistoryPeriod), PriceSeries>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one snapshot.
    pub fn register(&mut self, snapshot: MarketSnapshot) {
        self.metadata
            .insert(snapshot.symbol.clone(), snapshot.metadata);
        self.history
            .insert((snapshot.symbol, snapshot.period), snapshot.series);
    }

    /// Load snapshots from a JSON array of [`MarketSnapshot`] records.
    ///
    /// Series invariants are enforced during decoding, so a fixture that
    /// loads is a fixture the indicator layer can trust.
    pub fn from_json_str(payload: &str) -> Result<Self, CoreError> {
        let snapshots: Vec<MarketSnapshot> = serde_json::from_str(payload)?;
        let mut provider = Self::new();
        for snapshot in snapshots {
            provider.register(snapshot);
        }
        Ok(provider)
    }

    pub fn symbol_count(&self) -> usize {
        self.metadata.len()
    }
}

impl MarketDataProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    fn metadata(&self, symbol: &Symbol) -> Result<TickerMetadata, ProviderError> {
        self.metadata
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::data_unavailable(symbol, "symbol not in fixture"))
    }

    fn history(&self, request: &HistoryRequest) -> Result<MarketSnapshot, ProviderError> {
        let key = (request.symbol.clone(), request.period);
        let series = self.history.get(&key).ok_or_else(|| {
            ProviderError::data_unavailable(
                &request.symbol,
                format!("no '{}' history in fixture", request.period),
            )
        })?;
        let metadata = self.metadata(&request.symbol)?;

        Ok(MarketSnapshot::new(
            request.period,
            series.clone(),
            metadata,
        )?)
    }
}
