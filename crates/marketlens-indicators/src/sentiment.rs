//! Reading vocabulary for the dashboard: fear/greed sentiment, RSI momentum
//! zones, Bollinger band zones, and MACD stance, each with its default
//! bucket table.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::classify::ThresholdTable;

/// Fear/greed reading derived from a volatility index level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSentiment {
    ExtremeGreed,
    Greed,
    Neutral,
    Fear,
    ExtremeFear,
}

impl MarketSentiment {
    /// Default VIX buckets: below 20 / 30 / 40 / 50, Extreme Fear beyond.
    pub fn table() -> ThresholdTable<Self> {
        ThresholdTable::new(
            vec![
                (20.0, Self::ExtremeGreed),
                (30.0, Self::Greed),
                (40.0, Self::Neutral),
                (50.0, Self::Fear),
            ],
            Self::ExtremeFear,
        )
        .expect("default sentiment buckets are ascending")
    }

    pub fn classify(vix: f64) -> Self {
        *Self::table().classify(vix)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExtremeGreed => "Extreme Greed",
            Self::Greed => "Greed",
            Self::Neutral => "Neutral",
            Self::Fear => "Fear",
            Self::ExtremeFear => "Extreme Fear",
        }
    }
}

impl Display for MarketSentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Momentum reading for an RSI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumZone {
    Oversold,
    Neutral,
    Overbought,
}

impl MomentumZone {
    /// Default RSI buckets: below 30 oversold, below 70 neutral, overbought
    /// beyond.
    pub fn table() -> ThresholdTable<Self> {
        ThresholdTable::new(
            vec![(30.0, Self::Oversold), (70.0, Self::Neutral)],
            Self::Overbought,
        )
        .expect("default momentum buckets are ascending")
    }

    pub fn classify(rsi: f64) -> Self {
        *Self::table().classify(rsi)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oversold => "Oversold",
            Self::Neutral => "Neutral",
            Self::Overbought => "Overbought",
        }
    }
}

impl Display for MomentumZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a close sits relative to its Bollinger bands, from the band
/// position percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandZone {
    Lower,
    Middle,
    Upper,
}

impl BandZone {
    /// Default band-position buckets: below 20% lower, below 80% middle,
    /// upper beyond.
    pub fn table() -> ThresholdTable<Self> {
        ThresholdTable::new(vec![(20.0, Self::Lower), (80.0, Self::Middle)], Self::Upper)
            .expect("default band buckets are ascending")
    }

    pub fn classify(position_pct: f64) -> Self {
        *Self::table().classify(position_pct)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "Lower",
            Self::Middle => "Middle",
            Self::Upper => "Upper",
        }
    }
}

impl Display for BandZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend reading from the MACD line against its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdStance {
    Bullish,
    Bearish,
}

impl MacdStance {
    /// Bullish iff the MACD line sits above its signal line.
    pub fn of(macd: f64, signal: f64) -> Self {
        if macd > signal {
            Self::Bullish
        } else {
            Self::Bearish
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
        }
    }
}

impl Display for MacdStance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vix_levels_map_to_sentiment() {
        assert_eq!(MarketSentiment::classify(12.0), MarketSentiment::ExtremeGreed);
        assert_eq!(MarketSentiment::classify(25.0), MarketSentiment::Greed);
        assert_eq!(MarketSentiment::classify(35.0), MarketSentiment::Neutral);
        assert_eq!(MarketSentiment::classify(45.0), MarketSentiment::Fear);
        assert_eq!(MarketSentiment::classify(60.0), MarketSentiment::ExtremeFear);
    }

    #[test]
    fn sentiment_boundary_falls_into_next_bucket() {
        assert_eq!(MarketSentiment::classify(20.0), MarketSentiment::Greed);
        assert_eq!(MarketSentiment::classify(50.0), MarketSentiment::ExtremeFear);
    }

    #[test]
    fn rsi_levels_map_to_momentum_zones() {
        assert_eq!(MomentumZone::classify(15.0), MomentumZone::Oversold);
        assert_eq!(MomentumZone::classify(50.0), MomentumZone::Neutral);
        assert_eq!(MomentumZone::classify(85.0), MomentumZone::Overbought);
        assert_eq!(MomentumZone::classify(70.0), MomentumZone::Overbought);
    }

    #[test]
    fn band_positions_map_to_zones() {
        assert_eq!(BandZone::classify(5.0), BandZone::Lower);
        assert_eq!(BandZone::classify(50.0), BandZone::Middle);
        assert_eq!(BandZone::classify(95.0), BandZone::Upper);
        // Positions outside [0, 100] still land in the outer zones.
        assert_eq!(BandZone::classify(-10.0), BandZone::Lower);
        assert_eq!(BandZone::classify(140.0), BandZone::Upper);
    }

    #[test]
    fn macd_above_signal_is_bullish() {
        assert_eq!(MacdStance::of(1.2, 0.8), MacdStance::Bullish);
        assert_eq!(MacdStance::of(0.8, 1.2), MacdStance::Bearish);
        // Equal lines are not a bullish crossover.
        assert_eq!(MacdStance::of(1.0, 1.0), MacdStance::Bearish);
    }

    #[test]
    fn labels_render_the_dashboard_strings() {
        assert_eq!(MarketSentiment::ExtremeGreed.to_string(), "Extreme Greed");
        assert_eq!(MomentumZone::Overbought.to_string(), "Overbought");
        assert_eq!(BandZone::Middle.to_string(), "Middle");
        assert_eq!(MacdStance::Bullish.to_string(), "Bullish");
    }
}
