use marketlens_core::InvalidInputError;
use serde::{Deserialize, Serialize};

/// Change between a current and a previous observation.
///
/// `percent_change` is `None` whenever `previous` cannot serve as a base
/// (zero or negative, or the ratio overflows). It is never a substituted
/// zero, so a renderer shows "N/A" instead of a fake 0.00%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeStat {
    pub current: f64,
    pub previous: f64,
    pub absolute_change: f64,
    pub percent_change: Option<f64>,
}

impl ChangeStat {
    pub fn new(current: f64, previous: f64) -> Result<Self, InvalidInputError> {
        if !current.is_finite() {
            return Err(InvalidInputError::NonFiniteValue { field: "current" });
        }
        if !previous.is_finite() {
            return Err(InvalidInputError::NonFiniteValue { field: "previous" });
        }

        let absolute_change = current - previous;
        let percent_change = if previous > 0.0 {
            let percent = absolute_change / previous * 100.0;
            percent.is_finite().then_some(percent)
        } else {
            None
        };

        Ok(Self {
            current,
            previous,
            absolute_change,
            percent_change,
        })
    }
}
