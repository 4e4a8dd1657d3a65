//! Statistic requests for a chosen estimator configuration
//!
//! Translates a `RangeEstimatorConfig` into named statistic requests for the
//! collection backend. The backend resolves each request to an actual
//! statistic function; this crate only describes what to collect.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{QuantGranularity, TensorKind};
use crate::estimator::{
    EstimatorAxis, EstimatorConfig, EstimatorKind, RangeEstimatorConfig, DEFAULT_OUTLIER_PROB,
};

/// Where a statistic is computed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatisticPlacement {
    /// Collected from extracted tensors after inference
    #[default]
    ComputeStatistic,
    /// Computed by a node inserted into the graph itself
    StatisticInGraph,
}

/// One named statistic to collect for a tensor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TensorStatistic {
    pub tensor: TensorKind,
    pub kind: EstimatorKind,
    pub granularity: QuantGranularity,
    pub placement: StatisticPlacement,
    /// Quantile level for quantile-family statistics; already flipped to
    /// `1 - outlier_prob` on the max side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantile: Option<f64>,
}

/// Statistic key: `<axis>_<type>` plus the outlier probability for
/// quantile-family modes
pub fn stat_name(config: &EstimatorConfig, axis: EstimatorAxis) -> String {
    let mut name = format!("{}_{}", axis, config.kind);
    if config.kind.is_quantile() {
        if let Some(prob) = config.outlier_prob {
            name.push('_');
            name.push_str(&prob.to_string());
        }
    }
    name
}

/// Statistic requests for every side of a range estimator
///
/// In-graph placement is only legal for non-quantile activation statistics;
/// everything else is collected from extracted tensors.
pub fn tensor_statistics(
    config: &RangeEstimatorConfig,
    tensor: TensorKind,
    inplace: bool,
) -> BTreeMap<String, TensorStatistic> {
    let mut stats = BTreeMap::new();
    for (axis, side) in config.axes() {
        let placement = if !side.kind.is_quantile() && !tensor.is_weights() && inplace {
            StatisticPlacement::StatisticInGraph
        } else {
            StatisticPlacement::ComputeStatistic
        };

        let quantile = side.kind.is_quantile().then(|| {
            let q = side.outlier_prob.unwrap_or(DEFAULT_OUTLIER_PROB);
            match axis {
                EstimatorAxis::Min => q,
                EstimatorAxis::Max => 1.0 - q,
            }
        });

        stats.insert(
            stat_name(side, axis),
            TensorStatistic {
                tensor,
                kind: side.kind,
                granularity: side.granularity,
                placement,
                quantile,
            },
        );
    }
    stats
}
