use crate::wire;
use serde::{Deserialize, Serialize};

/// An inclusive lower and upper limit for a metric value.
///
/// Carried verbatim through conversion: no ordering or plausibility check
/// is applied to `lower` and `upper`. Under the passive sign convention,
/// bounds limiting discharge are negative and bounds limiting charge are
/// positive, so both signs are legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn from_wire(bounds: &wire::metric_sample_models::Bounds) -> Self {
        Self {
            lower: bounds.lower,
            upper: bounds.upper,
        }
    }

    pub fn to_wire(&self) -> wire::metric_sample_models::Bounds {
        wire::metric_sample_models::Bounds {
            lower: self.lower,
            upper: self.upper,
        }
    }

    /// Inclusive range membership.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Union-of-ranges membership over a list of bounds.
///
/// A value is within bounds when it falls inside at least one of the
/// ranges; the ranges may be disjoint (independent charge and discharge
/// limits, for example). An empty list means no operating limits were
/// reported, so every value is within bounds.
pub fn is_within_bounds(bounds: &[Bounds], value: f64) -> bool {
    bounds.is_empty() || bounds.iter().any(|b| b.contains(value))
}
