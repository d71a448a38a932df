use serde::{Deserialize, Serialize};

use crate::{InvalidInputError, Symbol, UtcDateTime};

/// OHLCV bar for one trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub ts: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    pub fn new(
        ts: UtcDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, InvalidInputError> {
        let bar = Self {
            ts,
            open,
            high,
            low,
            close,
            volume,
        };
        bar.validate()?;
        Ok(bar)
    }

    /// Re-check bar invariants, e.g. after deserializing a standalone bar.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_non_negative("open", self.open)?;
        validate_non_negative("high", self.high)?;
        validate_non_negative("low", self.low)?;
        validate_non_negative("close", self.close)?;

        if self.high < self.low {
            return Err(InvalidInputError::InvalidBarRange);
        }

        if self.open < self.low
            || self.open > self.high
            || self.close < self.low
            || self.close > self.high
        {
            return Err(InvalidInputError::InvalidBarBounds);
        }

        Ok(())
    }
}

/// Validated price history for one symbol.
///
/// Construction guarantees the invariants indicator math relies on: at least
/// one bar, strictly increasing timestamps, finite non-negative prices.
/// Deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PriceSeriesRecord")]
pub struct PriceSeries {
    symbol: Symbol,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(symbol: Symbol, bars: Vec<PriceBar>) -> Result<Self, InvalidInputError> {
        if bars.is_empty() {
            return Err(InvalidInputError::EmptySeries);
        }

        for bar in &bars {
            bar.validate()?;
        }

        for (index, pair) in bars.windows(2).enumerate() {
            if pair[1].ts <= pair[0].ts {
                return Err(InvalidInputError::NonMonotonicTimestamp { index: index + 1 });
            }
        }

        Ok(Self { symbol, bars })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent bar. Total because the series is never empty.
    pub fn last(&self) -> &PriceBar {
        self.bars.last().expect("series is never empty")
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    pub fn timestamps(&self) -> Vec<UtcDateTime> {
        self.bars.iter().map(|bar| bar.ts).collect()
    }
}

/// Wire form of [`PriceSeries`] prior to invariant checks.
#[derive(Debug, Deserialize)]
struct PriceSeriesRecord {
    symbol: Symbol,
    bars: Vec<PriceBar>,
}

impl TryFrom<PriceSeriesRecord> for PriceSeries {
    type Error = InvalidInputError;

    fn try_from(record: PriceSeriesRecord) -> Result<Self, Self::Error> {
        Self::new(record.symbol, record.bars)
    }
}

/// Descriptive metadata for a ticker, as reported by a provider.
///
/// Every field is optional: upstream coverage is patchy, and an absent value
/// must stay absent rather than defaulting to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickerMetadata {
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub exchange: Option<String>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub average_volume: Option<u64>,
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub current_volume: Option<u64>,
}

impl TickerMetadata {
    /// Check numeric fields. Prices, caps, and yields must be finite and
    /// non-negative; trailing P/E only needs to be finite (it is negative
    /// for loss-making companies).
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_optional_non_negative("market_cap", self.market_cap)?;
        validate_optional_finite("trailing_pe", self.trailing_pe)?;
        validate_optional_non_negative("dividend_yield", self.dividend_yield)?;
        validate_optional_non_negative("fifty_two_week_high", self.fifty_two_week_high)?;
        validate_optional_non_negative("fifty_two_week_low", self.fifty_two_week_low)?;
        validate_optional_non_negative("current_price", self.current_price)?;
        validate_optional_non_negative("previous_close", self.previous_close)?;
        Ok(())
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(InvalidInputError::NegativeValue { field });
    }
    Ok(())
}

fn validate_optional_non_negative(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), InvalidInputError> {
    if let Some(value) = value {
        validate_non_negative(field, value)?;
    }
    Ok(())
}

fn validate_optional_finite(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), InvalidInputError> {
    if let Some(value) = value {
        if !value.is_finite() {
            return Err(InvalidInputError::NonFiniteValue { field });
        }
    }
    Ok(())
}
