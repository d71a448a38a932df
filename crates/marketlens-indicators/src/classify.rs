use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Ascending `(upper bound, label)` table with a default label for values at
/// or beyond the last bound.
///
/// One implementation serves every bucket set in the dashboard (sentiment,
/// momentum zones, band zones), so the boundary rule cannot drift between
/// call sites: [`classify`](Self::classify) picks the first label whose
/// bound strictly exceeds the value, which puts a value sitting exactly on a
/// bound into the next bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdTableRecord<L>")]
pub struct ThresholdTable<L> {
    thresholds: Vec<(f64, L)>,
    default: L,
}

impl<L> ThresholdTable<L> {
    /// Build a table, rejecting non-finite or non-ascending bounds up front.
    pub fn new(thresholds: Vec<(f64, L)>, default: L) -> Result<Self, ConfigurationError> {
        for (index, (bound, _)) in thresholds.iter().enumerate() {
            if !bound.is_finite() {
                return Err(ConfigurationError::NonFiniteThreshold { index });
            }
            if index > 0 && *bound <= thresholds[index - 1].0 {
                return Err(ConfigurationError::NonAscendingThreshold { index });
            }
        }
        Ok(Self {
            thresholds,
            default,
        })
    }

    /// Label for `value`: the first entry whose bound exceeds it, else the
    /// default.
    pub fn classify(&self, value: f64) -> &L {
        self.thresholds
            .iter()
            .find(|(bound, _)| value < *bound)
            .map(|(_, label)| label)
            .unwrap_or(&self.default)
    }

    pub fn thresholds(&self) -> &[(f64, L)] {
        &self.thresholds
    }

    pub fn default_label(&self) -> &L {
        &self.default
    }
}

/// Wire form of [`ThresholdTable`] prior to invariant checks.
#[derive(Debug, Deserialize)]
struct ThresholdTableRecord<L> {
    thresholds: Vec<(f64, L)>,
    default: L,
}

impl<L> TryFrom<ThresholdTableRecord<L>> for ThresholdTable<L> {
    type Error = ConfigurationError;

    fn try_from(record: ThresholdTableRecord<L>) -> Result<Self, Self::Error> {
        Self::new(record.thresholds, record.default)
    }
}
