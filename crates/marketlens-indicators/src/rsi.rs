use marketlens_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::series::IndicatorSeries;

/// Parameters for [`rsi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsiParams {
    /// Trailing window size, counted in deltas.
    pub window: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { window: 14 }
    }
}

/// Relative Strength Index over simple trailing means.
///
/// Per-step gains and losses are averaged with plain arithmetic means over
/// the trailing `window` deltas, not Wilder smoothing; switching the
/// smoothing would shift every output value. Position `i`
/// is defined once `window` deltas are available, i.e. from index `window`
/// onward; a series shorter than `window + 1` bars yields an all-undefined
/// output of input length.
///
/// Defined values always sit in `[0, 100]`: a window of pure gains is
/// exactly 100, a fully flat window exactly 50.
pub fn rsi(series: &PriceSeries, params: RsiParams) -> Result<IndicatorSeries, ConfigurationError> {
    if params.window == 0 {
        return Err(ConfigurationError::NonPositiveWindow { indicator: "RSI" });
    }

    let closes = series.closes();
    let len = closes.len();

    // Index 0 has no delta and contributes zero gain and zero loss.
    let mut gains = Vec::with_capacity(len);
    let mut losses = Vec::with_capacity(len);
    gains.push(0.0);
    losses.push(0.0);
    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let window = params.window;
    let mut values = vec![None; len];
    for i in window..len {
        // Fresh sums per window keep an all-zero window at exactly 0.0.
        let start = i + 1 - window;
        let avg_gain = gains[start..=i].iter().sum::<f64>() / window as f64;
        let avg_loss = losses[start..=i].iter().sum::<f64>() / window as f64;
        values[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(IndicatorSeries::aligned_with(series, values))
}

/// Map average gain/loss onto the bounded oscillator.
///
/// A zero-loss window maps to exactly 100 and a fully flat window to 50, so
/// the division can never produce NaN.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}
