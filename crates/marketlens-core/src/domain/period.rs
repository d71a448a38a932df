use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// Supported lookback windows for history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
}

impl HistoryPeriod {
    pub const ALL: [Self; 5] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::FiveYears,
    ];

    /// Provider-facing period code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
        }
    }

    /// Human-readable label for selection UIs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::FiveYears => "5 Years",
        }
    }
}

impl Display for HistoryPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryPeriod {
    type Err = InvalidInputError;

    /// Accepts either the provider code (`1mo`) or the display label
    /// (`1 Month`), case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        for period in Self::ALL {
            if trimmed.eq_ignore_ascii_case(period.as_str())
                || trimmed.eq_ignore_ascii_case(period.label())
            {
                return Ok(period);
            }
        }
        Err(InvalidInputError::InvalidPeriod {
            value: trimmed.to_owned(),
        })
    }
}
