//! Estimator attachment: expanding quantizer configs with range estimators

use crate::config::{GeneratorContext, Knob, QuantizerConfig, TensorKind};

use super::defaults::{default_estimator_config, EstimatorPreset};
use super::expand::{extend_options, EstimatorOptions};
use super::merge::merge_options;
use super::rules::{outlier_prob_choices, type_choices, DEFAULT_OUTLIER_PROB};
use super::types::{EstimatorValue, RangeEstimatorConfig};

/// Attach range-estimator configurations to quantizer configs
///
/// Every input config is replaced by one output per estimator configuration
/// legal for it under the enabled scope, so the result list grows
/// multiplicatively. `opt_estimator` is the estimator of a previously found
/// optimum for the same tensor kind, if any; it seeds the default instead of
/// the hardware default when its shape is compatible.
pub fn append_estimator_configs(
    configs: &[QuantizerConfig],
    tensor: TensorKind,
    ctx: &GeneratorContext,
    opt_estimator: Option<&RangeEstimatorConfig>,
) -> Vec<QuantizerConfig> {
    let mut out = Vec::new();
    for config in configs {
        for estimator in estimator_configs_for(config, tensor, ctx, opt_estimator) {
            let mut derived = config.clone();
            derived.range_estimator = Some(estimator);
            out.push(derived);
        }
    }
    out
}

/// Complete estimator configurations for one quantizer config
fn estimator_configs_for(
    config: &QuantizerConfig,
    tensor: TensorKind,
    ctx: &GeneratorContext,
    opt_estimator: Option<&RangeEstimatorConfig>,
) -> Vec<RangeEstimatorConfig> {
    let default = default_estimator_config(
        tensor,
        config.granularity,
        config.mode,
        EstimatorPreset::Default,
    );

    // A stale optimum may carry axes this operation does not have (e.g. a min
    // estimator for a now-symmetric quantizer): narrow it to the default's
    // shape, or fall back to the default entirely when it carries fewer axes.
    let base = match opt_estimator {
        Some(opt) if opt.axis_count() >= default.axis_count() => {
            let narrowed = opt.narrowed_to(&default);
            if narrowed.is_empty() {
                default.clone()
            } else {
                narrowed
            }
        }
        _ => default.clone(),
    };

    let mut bases = vec![base];
    if ctx.scope.contains(Knob::EstimatorPreset) {
        for preset in [EstimatorPreset::Default, EstimatorPreset::Quantile] {
            bases.push(default_estimator_config(
                tensor,
                config.granularity,
                config.mode,
                preset,
            ));
        }
    }

    let mut estimator_configs: Vec<RangeEstimatorConfig> = Vec::new();
    for mut base in bases {
        base.normalize_outlier_prob(DEFAULT_OUTLIER_PROB);
        if estimator_configs.contains(&base) {
            // Expanding this base again would only regenerate a subset of the
            // options already produced.
            continue;
        }

        let mut options = EstimatorOptions::from_base(&base);
        if ctx.scope.contains(Knob::EstimatorType) {
            options = extend_options(&options, |axis, _| {
                type_choices(axis).iter().copied().map(EstimatorValue::Kind).collect()
            });
        }
        // Outlier probabilities depend on the types introduced just above, so
        // this expansion must run after the type expansion.
        if ctx.scope.contains(Knob::EstimatorOutlierProb) {
            options = extend_options(&options, |_, partial| {
                outlier_prob_choices(partial, &ctx.outlier_prob_choices)
                    .into_iter()
                    .map(EstimatorValue::OutlierProb)
                    .collect()
            });
        }
        if ctx.scope.contains(Knob::EstimatorAggregator) && !tensor.is_weights() {
            options = extend_options(&options, |_, _| {
                ctx.aggregators
                    .names()
                    .iter()
                    .map(|name| EstimatorValue::Aggregator(name.clone()))
                    .collect()
            });
        }

        estimator_configs.extend(merge_options(&options));
    }
    estimator_configs
}
