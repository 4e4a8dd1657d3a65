//! Legal-value rules for estimator parameters
//!
//! Pure functions over copies. The legal values for one parameter may depend
//! on the axis being extended and on values already fixed in the partial
//! configuration.

use super::types::{EstimatorAxis, EstimatorConfig, EstimatorKind};

/// Outlier probability seeded on configs that lack one, so a later mode
/// change to the quantile family has a value to start from
pub const DEFAULT_OUTLIER_PROB: f64 = 1e-4;

/// Legal estimation modes for one side of a range estimator
pub fn type_choices(axis: EstimatorAxis) -> &'static [EstimatorKind] {
    match axis {
        EstimatorAxis::Min => &[EstimatorKind::Min, EstimatorKind::Quantile],
        EstimatorAxis::Max => &[
            EstimatorKind::Max,
            EstimatorKind::AbsMax,
            EstimatorKind::Quantile,
            EstimatorKind::AbsQuantile,
        ],
    }
}

/// Legal outlier probabilities given the mode already fixed in `config`
///
/// Collapses to the current value unless the mode is quantile-family, so the
/// axis is a no-op for plain min/max estimators.
pub fn outlier_prob_choices(config: &EstimatorConfig, candidates: &[f64]) -> Vec<f64> {
    if config.kind.is_quantile() {
        candidates.to_vec()
    } else {
        vec![config.outlier_prob.unwrap_or(DEFAULT_OUTLIER_PROB)]
    }
}
