//! Cross-product expansion of per-axis estimator options

use super::types::{EstimatorAxis, EstimatorConfig, EstimatorValue, RangeEstimatorConfig};

/// Partial estimator configurations accumulated per axis during expansion
///
/// Starts as singleton lists seeded from a base configuration; each expansion
/// step multiplies a list by the legal values for one parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EstimatorOptions {
    pub(crate) min: Option<Vec<EstimatorConfig>>,
    pub(crate) max: Option<Vec<EstimatorConfig>>,
}

impl EstimatorOptions {
    /// Singleton option list per axis present in `base`
    pub fn from_base(base: &RangeEstimatorConfig) -> Self {
        Self {
            min: base.min.as_ref().map(|config| vec![config.clone()]),
            max: base.max.as_ref().map(|config| vec![config.clone()]),
        }
    }

    pub fn axis(&self, axis: EstimatorAxis) -> Option<&[EstimatorConfig]> {
        match axis {
            EstimatorAxis::Min => self.min.as_deref(),
            EstimatorAxis::Max => self.max.as_deref(),
        }
    }
}

/// Extend every option list with one more varied parameter
///
/// For each partial configuration, `rule` decides the candidate values; each
/// value yields one derived copy with that single parameter overwritten.
/// Expansion is multiplicative: a list of N entries with M legal values per
/// entry becomes N*M entries, and different entries may expand by different
/// factors when the rule inspects the partial configuration.
pub fn extend_options<F>(options: &EstimatorOptions, rule: F) -> EstimatorOptions
where
    F: Fn(EstimatorAxis, &EstimatorConfig) -> Vec<EstimatorValue>,
{
    let expand_axis = |axis: EstimatorAxis, configs: &Option<Vec<EstimatorConfig>>| {
        configs.as_ref().map(|configs| {
            let mut expanded = Vec::new();
            for config in configs {
                for value in rule(axis, config) {
                    expanded.push(config.with(value));
                }
            }
            expanded
        })
    };

    EstimatorOptions {
        min: expand_axis(EstimatorAxis::Min, &options.min),
        max: expand_axis(EstimatorAxis::Max, &options.max),
    }
}
