//! Per-axis candidate selection from hardware base configurations

use crate::config::{GeneratorContext, Preset, QuantizerConfig, TuningScope};
use crate::error::{Result, TuneError};

/// Select candidate configurations for one tensor axis of an operation
///
/// The default is the prior optimum when one is supplied, otherwise picked
/// from the hardware-sorted list by preset (fastest first for performance,
/// most accurate last for accuracy). Every other hardware point is admitted
/// only when it differs from the default exclusively on in-scope axes;
/// anything with off-scope differences falls back to the default.
pub fn select_options(
    configs: &[QuantizerConfig],
    default: Option<&QuantizerConfig>,
    ctx: &GeneratorContext,
) -> Result<Vec<QuantizerConfig>> {
    let default = match default {
        Some(config) => config.clone(),
        None => {
            let picked = match ctx.preset {
                Preset::Performance => configs.first(),
                Preset::Accuracy => configs.last(),
            };
            picked.cloned().ok_or(TuneError::EmptyHardwareConfig)?
        }
    };

    let mut options = vec![default.clone()];
    for config in configs {
        let candidate = scoped_alternate(config, &default, &ctx.scope);
        if !options.contains(candidate) {
            options.push(candidate.clone());
        }
    }
    Ok(options)
}

/// `config` if it differs from the default only on in-scope axes, otherwise
/// the default itself
fn scoped_alternate<'a>(
    config: &'a QuantizerConfig,
    default: &'a QuantizerConfig,
    scope: &TuningScope,
) -> &'a QuantizerConfig {
    let mut in_scope = false;
    for axis in default.diff_axes(config) {
        if scope.contains(axis) {
            in_scope = true;
        } else {
            return default;
        }
    }
    if in_scope {
        config
    } else {
        default
    }
}
