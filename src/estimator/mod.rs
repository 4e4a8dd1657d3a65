//! Range-estimator configuration expansion
//!
//! Turns one base estimator configuration into the full set of variants the
//! enabled tuning scope allows:
//! - per-axis option lists seeded from a default or prior-optimal base
//! - multiplicative expansion of type, outlier probability and aggregator
//! - cross-product merge of the min and max sides

mod builder;
mod defaults;
mod expand;
mod merge;
mod rules;
mod types;


pub use builder::append_estimator_configs;
pub use defaults::{default_estimator_config, EstimatorPreset};
pub use expand::{extend_options, EstimatorOptions};
pub use merge::merge_options;
pub use rules::{outlier_prob_choices, type_choices, DEFAULT_OUTLIER_PROB};
pub use types::{
    EstimatorAxis, EstimatorConfig, EstimatorKind, EstimatorValue, RangeEstimatorConfig,
};
