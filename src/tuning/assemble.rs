//! Per-operation candidate assembly

use crate::config::{
    GeneratorContext, Knob, OperationConfig, OperationSpec, QuantizerConfig, TensorKind,
};
use crate::error::Result;
use crate::estimator::append_estimator_configs;

use super::select::select_options;

/// Enumerate the candidate configurations for one operation
///
/// Pure and deterministic: identical inputs always produce the same list in
/// the same order. Per-axis candidates are selected from the hardware spec,
/// cross-product merged (activations, then weights), optionally extended with
/// a skip-quantization variant, and finally expanded with range estimators.
///
/// A prior optimum that already disabled the operation short-circuits the
/// whole pass: a disabled operation is never re-expanded.
pub fn candidates(
    op: &OperationSpec,
    ctx: &GeneratorContext,
    optimal: Option<&OperationConfig>,
) -> Result<Vec<OperationConfig>> {
    if let Some(opt) = optimal {
        if !opt.quantize {
            return Ok(vec![opt.clone()]);
        }
    }

    let act_options = if op.activations.is_empty() {
        None
    } else {
        let default = optimal.and_then(|opt| opt.activations.as_ref());
        Some(select_options(&op.activations, default, ctx)?)
    };
    let wgt_options = if op.weights.is_empty() {
        None
    } else {
        let default = optimal.and_then(|opt| opt.weights.as_ref());
        Some(select_options(&op.weights, default, ctx)?)
    };

    let mut configs = vec![OperationConfig::quantized()];
    if let Some(options) = &act_options {
        configs = merge_axis(&configs, options, TensorKind::Activations);
    }
    if let Some(options) = &wgt_options {
        configs = merge_axis(&configs, options, TensorKind::Weights);
    }

    if ctx.scope.contains(Knob::Layer) {
        // The option to not quantize the operation at all, explored alongside
        // the quantized variants.
        let mut skipped = configs[0].clone();
        skipped.quantize = false;
        configs.push(skipped);
    }

    let mut out = Vec::new();
    for config in configs {
        if config.quantize {
            out.extend(attach_estimators(config, ctx, optimal));
        } else {
            // Sub-configurations of a disabled operation are ignored
            // downstream; no estimators to attach.
            out.push(config);
        }
    }
    Ok(out)
}

/// Cross-product one tensor axis's options into the accumulated configs
fn merge_axis(
    configs: &[OperationConfig],
    options: &[QuantizerConfig],
    tensor: TensorKind,
) -> Vec<OperationConfig> {
    let mut merged = Vec::with_capacity(configs.len() * options.len());
    for config in configs {
        for option in options {
            let mut derived = config.clone();
            derived.set_tensor(tensor, option.clone());
            merged.push(derived);
        }
    }
    merged
}

/// Expand one merged candidate with estimator configurations for each of its
/// tensor sub-configs, activations first
fn attach_estimators(
    config: OperationConfig,
    ctx: &GeneratorContext,
    optimal: Option<&OperationConfig>,
) -> Vec<OperationConfig> {
    let mut expanded = vec![config];
    for tensor in [TensorKind::Activations, TensorKind::Weights] {
        let opt_estimator = optimal
            .and_then(|opt| opt.tensor(tensor))
            .and_then(|sub| sub.range_estimator.as_ref());

        let mut next = Vec::new();
        for candidate in expanded {
            match candidate.tensor(tensor) {
                Some(sub) => {
                    let subs =
                        append_estimator_configs(&[sub.clone()], tensor, ctx, opt_estimator);
                    for sub in subs {
                        let mut derived = candidate.clone();
                        derived.set_tensor(tensor, sub);
                        next.push(derived);
                    }
                }
                None => next.push(candidate),
            }
        }
        expanded = next;
    }
    expanded
}
