//! Dashboard summary helpers: the latest-values panel and the movers table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use marketlens_core::{PriceSeries, Symbol, UtcDateTime};

use crate::bollinger::{band_position, bollinger, BollingerParams};
use crate::change::ChangeStat;
use crate::error::ConfigurationError;
use crate::macd::{macd, MacdParams};
use crate::rsi::{rsi, RsiParams};
use crate::sentiment::{BandZone, MacdStance, MomentumZone};

/// Latest indicator values for one symbol, with their readings attached.
///
/// Each indicator field is `None` while the series is still inside that
/// indicator's warm-up window; hosts render those as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub symbol: Symbol,
    pub as_of: UtcDateTime,
    pub close: f64,
    pub rsi: Option<f64>,
    pub rsi_zone: Option<MomentumZone>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_stance: Option<MacdStance>,
    pub band_position: Option<f64>,
    pub band_zone: Option<BandZone>,
}

/// Compute all three indicators and report their most recent values.
pub fn snapshot(
    series: &PriceSeries,
    rsi_params: RsiParams,
    macd_params: MacdParams,
    bollinger_params: BollingerParams,
) -> Result<IndicatorSnapshot, ConfigurationError> {
    let rsi_series = rsi(series, rsi_params)?;
    let macd_series = macd(series, macd_params)?;
    let bands = bollinger(series, bollinger_params)?;

    let last = series.last();

    let rsi_value = rsi_series.latest();
    let macd_value = macd_series.macd.latest();
    let signal_value = macd_series.signal.latest();
    let macd_stance = match (macd_value, signal_value) {
        (Some(macd), Some(signal)) => Some(MacdStance::of(macd, signal)),
        _ => None,
    };
    let position = match (bands.lower.latest(), bands.upper.latest()) {
        (Some(lower), Some(upper)) => band_position(last.close, lower, upper),
        _ => None,
    };

    Ok(IndicatorSnapshot {
        symbol: series.symbol().clone(),
        as_of: last.ts,
        close: last.close,
        rsi: rsi_value,
        rsi_zone: rsi_value.map(MomentumZone::classify),
        macd: macd_value,
        macd_signal: signal_value,
        macd_stance,
        band_position: position,
        band_zone: position.map(BandZone::classify),
    })
}

/// One row of the movers table: a symbol with its day-over-day change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolChange {
    pub symbol: Symbol,
    pub change: ChangeStat,
    pub volume: Option<u64>,
}

/// Order movers by magnitude of percent change, largest first.
///
/// Rows without a defined percent change sort to the end. The sort is
/// stable, so equal magnitudes keep their input order.
pub fn rank_movers(mut movers: Vec<SymbolChange>) -> Vec<SymbolChange> {
    movers.sort_by(
        |a, b| match (a.change.percent_change, b.change.percent_change) {
            (Some(lhs), Some(rhs)) => rhs
                .abs()
                .partial_cmp(&lhs.abs())
                .unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    );
    movers
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketlens_core::PriceBar;

    fn sample_series(closes: &[f64]) -> PriceSeries {
        let symbol = Symbol::parse("TEST").expect("symbol");
        let bars = closes
            .iter()
            .enumerate()
            .map(|(index, &close)| {
                let day = 1 + index / 24;
                let hour = index % 24;
                let ts = UtcDateTime::parse(&format!("2024-01-{day:02}T{hour:02}:00:00Z"))
                    .expect("timestamp");
                PriceBar::new(ts, close, close, close, close, 1_000).expect("bar")
            })
            .collect();
        PriceSeries::new(symbol, bars).expect("series")
    }

    fn mover(symbol: &str, current: f64, previous: f64) -> SymbolChange {
        SymbolChange {
            symbol: Symbol::parse(symbol).expect("symbol"),
            change: ChangeStat::new(current, previous).expect("change"),
            volume: Some(1_000),
        }
    }

    #[test]
    fn snapshot_reports_latest_values_with_zones() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let series = sample_series(&closes);

        let snap = snapshot(
            &series,
            RsiParams::default(),
            MacdParams::default(),
            BollingerParams::default(),
        )
        .expect("snapshot");

        assert_eq!(snap.close, 139.0);
        // Forty strictly rising closes: RSI pegs at 100, overbought.
        assert_eq!(snap.rsi, Some(100.0));
        assert_eq!(snap.rsi_zone, Some(MomentumZone::Overbought));
        assert!(snap.macd.is_some());
        assert!(snap.macd_signal.is_some());
        assert_eq!(snap.macd_stance, Some(MacdStance::Bullish));
        // The latest close is the window maximum, so it sits above the
        // middle of the band.
        let position = snap.band_position.expect("band position");
        assert!(position > 50.0, "rising close must sit high: {position}");
        assert!(snap.band_zone.is_some());
    }

    #[test]
    fn snapshot_on_short_series_leaves_warm_up_fields_none() {
        let series = sample_series(&[100.0, 101.0, 102.0]);

        let snap = snapshot(
            &series,
            RsiParams::default(),
            MacdParams::default(),
            BollingerParams::default(),
        )
        .expect("snapshot");

        // Three bars cannot fill a 14-delta or 20-bar window.
        assert_eq!(snap.rsi, None);
        assert_eq!(snap.rsi_zone, None);
        assert_eq!(snap.band_position, None);
        assert_eq!(snap.band_zone, None);
        // MACD is seeded from the first observation and is always defined.
        assert!(snap.macd.is_some());
        assert_eq!(snap.macd_stance, Some(MacdStance::Bullish));
    }

    #[test]
    fn snapshot_rejects_invalid_parameters() {
        let series = sample_series(&[100.0, 101.0]);

        let err = snapshot(
            &series,
            RsiParams { window: 0 },
            MacdParams::default(),
            BollingerParams::default(),
        )
        .expect_err("must fail");
        assert!(matches!(
            err,
            ConfigurationError::NonPositiveWindow { indicator: "RSI" }
        ));
    }

    #[test]
    fn movers_sort_by_absolute_percent_change() {
        let movers = vec![
            mover("AAPL", 101.0, 100.0),  // +1%
            mover("TSLA", 95.0, 100.0),   // -5%
            mover("MSFT", 103.0, 100.0),  // +3%
        ];

        let ranked = rank_movers(movers);
        let order: Vec<&str> = ranked.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(order, vec!["TSLA", "MSFT", "AAPL"]);
    }

    #[test]
    fn movers_without_percent_change_sort_last() {
        let movers = vec![
            mover("IPO1", 50.0, 0.0), // no previous close, percent undefined
            mover("AAPL", 101.0, 100.0),
        ];

        let ranked = rank_movers(movers);
        assert_eq!(ranked[0].symbol.as_str(), "AAPL");
        assert_eq!(ranked[1].symbol.as_str(), "IPO1");
        assert_eq!(ranked[1].change.percent_change, None);
    }

    #[test]
    fn equal_magnitudes_keep_input_order() {
        let movers = vec![
            mover("AAAA", 105.0, 100.0), // +5%
            mover("BBBB", 95.0, 100.0),  // -5%
        ];

        let ranked = rank_movers(movers);
        assert_eq!(ranked[0].symbol.as_str(), "AAAA");
        assert_eq!(ranked[1].symbol.as_str(), "BBBB");
    }
}
