//! Range-estimator configuration types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::QuantGranularity;

/// The two sides of a range estimator
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorAxis {
    Min,
    Max,
}

impl fmt::Display for EstimatorAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorAxis::Min => write!(f, "min"),
            EstimatorAxis::Max => write!(f, "max"),
        }
    }
}

/// Statistic-estimation mode for one side of a range estimator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    Min,
    Max,
    AbsMax,
    Quantile,
    AbsQuantile,
}

impl EstimatorKind {
    /// Quantile-family modes carry an outlier probability
    pub fn is_quantile(self) -> bool {
        matches!(self, EstimatorKind::Quantile | EstimatorKind::AbsQuantile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EstimatorKind::Min => "min",
            EstimatorKind::Max => "max",
            EstimatorKind::AbsMax => "abs_max",
            EstimatorKind::Quantile => "quantile",
            EstimatorKind::AbsQuantile => "abs_quantile",
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate value for exactly one estimator parameter
///
/// The variant names the parameter it overwrites.
#[derive(Clone, Debug, PartialEq)]
pub enum EstimatorValue {
    Kind(EstimatorKind),
    OutlierProb(f64),
    Aggregator(String),
}

/// Partial configuration for one side of a range estimator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(rename = "type")]
    pub kind: EstimatorKind,
    pub granularity: QuantGranularity,
    /// Meaningful for the quantile family; a dormant default is pre-seeded by
    /// normalization so a later mode change has a value to start from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlier_prob: Option<f64>,
    /// Only ever set for activation estimators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<String>,
}

impl EstimatorConfig {
    pub fn new(kind: EstimatorKind, granularity: QuantGranularity) -> Self {
        Self { kind, granularity, outlier_prob: None, aggregator: None }
    }

    pub fn with_outlier_prob(mut self, prob: f64) -> Self {
        self.outlier_prob = Some(prob);
        self
    }

    pub fn with_aggregator(mut self, aggregator: &str) -> Self {
        self.aggregator = Some(aggregator.to_string());
        self
    }

    /// Copy of `self` with the parameter named by `value` overwritten
    pub fn with(&self, value: EstimatorValue) -> Self {
        let mut derived = self.clone();
        match value {
            EstimatorValue::Kind(kind) => derived.kind = kind,
            EstimatorValue::OutlierProb(prob) => derived.outlier_prob = Some(prob),
            EstimatorValue::Aggregator(name) => derived.aggregator = Some(name),
        }
        derived
    }
}

/// Complete range-estimator configuration
///
/// At least one side is present in any constructed value; iteration is always
/// min-then-max so downstream output order is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeEstimatorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<EstimatorConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<EstimatorConfig>,
}

impl RangeEstimatorConfig {
    pub fn one_sided(axis: EstimatorAxis, config: EstimatorConfig) -> Self {
        match axis {
            EstimatorAxis::Min => Self { min: Some(config), max: None },
            EstimatorAxis::Max => Self { min: None, max: Some(config) },
        }
    }

    pub fn min_max(min: EstimatorConfig, max: EstimatorConfig) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub fn axis(&self, axis: EstimatorAxis) -> Option<&EstimatorConfig> {
        match axis {
            EstimatorAxis::Min => self.min.as_ref(),
            EstimatorAxis::Max => self.max.as_ref(),
        }
    }

    /// Present sides in min-then-max order
    pub fn axes(&self) -> impl Iterator<Item = (EstimatorAxis, &EstimatorConfig)> {
        [
            (EstimatorAxis::Min, self.min.as_ref()),
            (EstimatorAxis::Max, self.max.as_ref()),
        ]
        .into_iter()
        .filter_map(|(axis, config)| config.map(|c| (axis, c)))
    }

    pub fn axis_count(&self) -> usize {
        self.axes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Keep only the axes `shape` has
    ///
    /// Used to cut a stale optimal configuration down to the axes the current
    /// operation actually carries.
    pub(crate) fn narrowed_to(&self, shape: &RangeEstimatorConfig) -> RangeEstimatorConfig {
        RangeEstimatorConfig {
            min: if shape.min.is_some() { self.min.clone() } else { None },
            max: if shape.max.is_some() { self.max.clone() } else { None },
        }
    }

    /// Seed a dormant outlier probability on every side missing one
    pub(crate) fn normalize_outlier_prob(&mut self, default: f64) {
        for config in [self.min.as_mut(), self.max.as_mut()].into_iter().flatten() {
            if config.outlier_prob.is_none() {
                config.outlier_prob = Some(default);
            }
        }
    }
}
