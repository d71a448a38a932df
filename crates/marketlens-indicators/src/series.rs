use marketlens_core::{PriceSeries, UtcDateTime};
use serde::{Deserialize, Serialize};

/// One derived observation, paired with the timestamp of the bar it was
/// computed from.
///
/// `value` is `None` inside an indicator's warm-up window, never zero and
/// never NaN, so a renderer can show "N/A" without guessing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub ts: UtcDateTime,
    pub value: Option<f64>,
}

/// Derived indicator values aligned 1:1 with the input price series.
///
/// Every compute function returns a series of the same length and timestamp
/// index as its input, so bar `i` and indicator point `i` always describe
/// the same instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Pair computed values with the timestamps of the series they came
    /// from. Callers produce exactly one value per input bar.
    pub(crate) fn aligned_with(series: &PriceSeries, values: Vec<Option<f64>>) -> Self {
        let points = series
            .bars()
            .iter()
            .zip(values)
            .map(|(bar, value)| IndicatorPoint { ts: bar.ts, value })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[IndicatorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value at `index`; `None` when out of range or still warming up.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|point| point.value)
    }

    /// Value at the most recent position; `None` while the last position is
    /// still inside the warm-up window.
    pub fn latest(&self) -> Option<f64> {
        self.points.last().and_then(|point| point.value)
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|point| point.value).collect()
    }
}
