use thiserror::Error;

/// Validation errors raised when market data fails a domain invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter or '^': '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid period '{value}', expected one of 1mo, 3mo, 6mo, 1y, 5y")]
    InvalidPeriod { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,

    #[error("price series must contain at least one bar")]
    EmptySeries,
    #[error("price series timestamps must be strictly increasing: violation at index {index}")]
    NonMonotonicTimestamp { index: usize },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] InvalidInputError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
