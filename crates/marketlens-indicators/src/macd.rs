use marketlens_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::series::IndicatorSeries;

/// Parameters for [`macd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// MACD line and its signal line, both aligned with the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
}

/// Moving Average Convergence Divergence.
///
/// `macd[i]` is the fast EMA minus the slow EMA of the closes; the signal
/// line is the EMA of the MACD line with span `signal`. Every EMA is seeded
/// with its first observation, so both outputs are defined from index 0:
/// there is no warm-up gap and output length always equals input length.
///
/// `fast` must be strictly less than `slow`; a reversed pair is rejected
/// rather than computing an inverted indicator.
pub fn macd(series: &PriceSeries, params: MacdParams) -> Result<MacdSeries, ConfigurationError> {
    if params.fast == 0 || params.slow == 0 || params.signal == 0 {
        return Err(ConfigurationError::NonPositiveWindow { indicator: "MACD" });
    }
    if params.fast >= params.slow {
        return Err(ConfigurationError::MacdSpanOrder {
            fast: params.fast,
            slow: params.slow,
        });
    }

    let closes = series.closes();
    let fast = ema(&closes, params.fast);
    let slow = ema(&closes, params.slow);
    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = ema(&macd_line, params.signal);

    Ok(MacdSeries {
        macd: IndicatorSeries::aligned_with(series, macd_line.into_iter().map(Some).collect()),
        signal: IndicatorSeries::aligned_with(series, signal_line.into_iter().map(Some).collect()),
    })
}

/// Exponential moving average with `alpha = 2 / (span + 1)`, seeded by the
/// first observation: `ema[0] = values[0]`. `values` must be non-empty,
/// which the non-empty price series guarantees.
fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut current = values[0];
    out.push(current);
    for &value in &values[1..] {
        current = alpha * value + (1.0 - alpha) * current;
        out.push(current);
    }
    out
}
