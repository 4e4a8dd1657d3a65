//! Built-in range-estimator defaults per tensor kind, mode and preset

use serde::{Deserialize, Serialize};

use crate::config::{QuantGranularity, QuantMode, TensorKind};
use crate::stats::aggregator;

use super::rules::DEFAULT_OUTLIER_PROB;
use super::types::{EstimatorConfig, EstimatorKind, RangeEstimatorConfig};

/// Named estimator profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorPreset {
    /// Plain extrema estimation
    #[default]
    Default,
    /// Quantile-family estimation, robust to outliers
    Quantile,
}

/// Default estimator configuration for one quantizer
///
/// Symmetric quantization is one-sided: the range is defined by its maximum
/// alone, so no minimum estimator is produced. Activation estimators
/// additionally aggregate statistics across calibration batches.
pub fn default_estimator_config(
    tensor: TensorKind,
    granularity: QuantGranularity,
    mode: QuantMode,
    preset: EstimatorPreset,
) -> RangeEstimatorConfig {
    let (min_kind, max_kind) = match (preset, mode) {
        (EstimatorPreset::Default, QuantMode::Symmetric) => (None, EstimatorKind::AbsMax),
        (EstimatorPreset::Default, QuantMode::Asymmetric) => {
            (Some(EstimatorKind::Min), EstimatorKind::Max)
        }
        (EstimatorPreset::Quantile, QuantMode::Symmetric) => (None, EstimatorKind::AbsQuantile),
        (EstimatorPreset::Quantile, QuantMode::Asymmetric) => {
            (Some(EstimatorKind::Quantile), EstimatorKind::Quantile)
        }
    };

    let side = |kind: EstimatorKind| {
        let mut config = EstimatorConfig::new(kind, granularity);
        if kind.is_quantile() {
            config.outlier_prob = Some(DEFAULT_OUTLIER_PROB);
        }
        if !tensor.is_weights() {
            config.aggregator = Some(aggregator::MEAN.to_string());
        }
        config
    };

    RangeEstimatorConfig {
        min: min_kind.map(&side),
        max: Some(side(max_kind)),
    }
}
