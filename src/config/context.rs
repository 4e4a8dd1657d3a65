//! Generation-pass context

use serde::{Deserialize, Serialize};

use crate::stats::AggregatorRegistry;

use super::types::{Preset, TuningScope};

/// Outlier probabilities offered when `estimator_outlier_prob` is in scope
pub const DEFAULT_OUTLIER_PROB_CHOICES: [f64; 3] = [1e-3, 1e-4, 1e-5];

/// Everything one generation pass is parameterized by
///
/// Passed explicitly into the selector and the estimator builder instead of
/// being captured by closures; the context itself is never mutated during a
/// pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorContext {
    pub scope: TuningScope,
    pub preset: Preset,
    /// Candidate outlier probabilities for quantile-family estimators
    pub outlier_prob_choices: Vec<f64>,
    /// Registered aggregation functions, used for activation estimator expansion
    pub aggregators: AggregatorRegistry,
}

impl GeneratorContext {
    pub fn new(scope: TuningScope, preset: Preset) -> Self {
        Self {
            scope,
            preset,
            outlier_prob_choices: DEFAULT_OUTLIER_PROB_CHOICES.to_vec(),
            aggregators: AggregatorRegistry::default(),
        }
    }
}

impl Default for GeneratorContext {
    fn default() -> Self {
        Self::new(TuningScope::new(), Preset::default())
    }
}
