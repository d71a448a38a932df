use marketlens_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::series::IndicatorSeries;

/// Parameters for [`bollinger`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub window: usize,
    pub std_dev_multiplier: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            window: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

/// Middle/upper/lower bands, each aligned with the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub middle: IndicatorSeries,
    pub upper: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Bollinger Bands around a simple moving average.
///
/// `middle[i]` is the SMA of the trailing `window` closes, defined from
/// index `window - 1` onward; `upper`/`lower` sit `std_dev_multiplier`
/// population standard deviations away. The population convention
/// (denominator `window`, not `window - 1`) is normative; a sample
/// deviation would widen every band.
///
/// Wherever defined, `lower[i] <= middle[i] <= upper[i]`.
pub fn bollinger(
    series: &PriceSeries,
    params: BollingerParams,
) -> Result<BollingerBands, ConfigurationError> {
    if params.window == 0 {
        return Err(ConfigurationError::NonPositiveWindow {
            indicator: "Bollinger",
        });
    }
    if !params.std_dev_multiplier.is_finite() || params.std_dev_multiplier < 0.0 {
        return Err(ConfigurationError::InvalidStdDevMultiplier {
            value: params.std_dev_multiplier,
        });
    }

    let closes = series.closes();
    let len = closes.len();
    let window = params.window;
    let k = params.std_dev_multiplier;

    let mut middle = vec![None; len];
    let mut upper = vec![None; len];
    let mut lower = vec![None; len];

    for i in (window - 1)..len {
        let slice = &closes[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        // Population standard deviation: denominator is the window size.
        let variance = slice
            .iter()
            .map(|close| (close - mean).powi(2))
            .sum::<f64>()
            / window as f64;
        let std_dev = variance.sqrt();

        middle[i] = Some(mean);
        upper[i] = Some(mean + k * std_dev);
        lower[i] = Some(mean - k * std_dev);
    }

    Ok(BollingerBands {
        middle: IndicatorSeries::aligned_with(series, middle),
        upper: IndicatorSeries::aligned_with(series, upper),
        lower: IndicatorSeries::aligned_with(series, lower),
    })
}

/// Percent position of a close between the lower and upper bands.
///
/// 0 sits on the lower band and 100 on the upper; a close outside the bands
/// falls outside `[0, 100]`. `None` for a zero-width band or non-finite
/// inputs.
pub fn band_position(close: f64, lower: f64, upper: f64) -> Option<f64> {
    if !close.is_finite() || !lower.is_finite() || !upper.is_finite() {
        return None;
    }
    let width = upper - lower;
    if width == 0.0 {
        return None;
    }
    let position = (close - lower) / width * 100.0;
    position.is_finite().then_some(position)
}
