//! Merging per-axis option lists into complete estimator configurations

use super::expand::EstimatorOptions;
use super::types::{EstimatorAxis, RangeEstimatorConfig};

/// Combine expanded per-axis options into complete configurations
///
/// A single present axis yields standalone one-sided configs. With both axes
/// present the result is the full cross product: min- and max-side choices do
/// not constrain each other.
pub fn merge_options(options: &EstimatorOptions) -> Vec<RangeEstimatorConfig> {
    match (&options.min, &options.max) {
        (Some(min_options), Some(max_options)) => {
            let mut merged = Vec::with_capacity(min_options.len() * max_options.len());
            for min_config in min_options {
                for max_config in max_options {
                    merged.push(RangeEstimatorConfig::min_max(
                        min_config.clone(),
                        max_config.clone(),
                    ));
                }
            }
            merged
        }
        (Some(min_options), None) => min_options
            .iter()
            .map(|config| RangeEstimatorConfig::one_sided(EstimatorAxis::Min, config.clone()))
            .collect(),
        (None, Some(max_options)) => max_options
            .iter()
            .map(|config| RangeEstimatorConfig::one_sided(EstimatorAxis::Max, config.clone()))
            .collect(),
        (None, None) => Vec::new(),
    }
}
