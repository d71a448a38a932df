use marketlens_core::InvalidInputError;
use thiserror::Error;

/// Parameter errors raised before any indicator math runs.
///
/// Every compute function validates its parameters first and fails fast, so
/// a misconfigured call can never produce a silently inverted or truncated
/// indicator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("{indicator} period must be greater than zero")]
    NonPositiveWindow { indicator: &'static str },

    #[error("macd fast span {fast} must be less than slow span {slow}")]
    MacdSpanOrder { fast: usize, slow: usize },

    #[error("std-dev multiplier must be finite and non-negative: {value}")]
    InvalidStdDevMultiplier { value: f64 },

    #[error("threshold boundary at index {index} must be finite")]
    NonFiniteThreshold { index: usize },
    #[error("threshold boundaries must be strictly ascending: violation at index {index}")]
    NonAscendingThreshold { index: usize },
}

/// Top-level error type for indicator operations.
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Input(#[from] InvalidInputError),
}
