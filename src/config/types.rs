//! Quantization parameter and tuning-scope type definitions

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuneError;

/// Quantization mode: symmetric or asymmetric
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuantMode {
    /// Symmetric: zero-point = 0, range = [-max_abs, max_abs]
    #[default]
    Symmetric,
    /// Asymmetric: zero-point != 0, range = [min, max]
    Asymmetric,
}

/// Quantization granularity options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuantGranularity {
    /// Single scale/zero-point for the entire tensor
    #[default]
    PerTensor,
    /// Separate scale/zero-point per channel
    PerChannel,
}

/// Which tensor of an operation a configuration applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensorKind {
    Activations,
    Weights,
}

impl TensorKind {
    pub fn is_weights(self) -> bool {
        matches!(self, TensorKind::Weights)
    }
}

impl fmt::Display for TensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorKind::Activations => write!(f, "activations"),
            TensorKind::Weights => write!(f, "weights"),
        }
    }
}

/// Trade-off profile used to pick a default candidate when no prior optimum exists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Pick the fastest hardware configuration
    #[default]
    Performance,
    /// Pick the most accurate hardware configuration
    Accuracy,
}

impl FromStr for Preset {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performance" => Ok(Preset::Performance),
            "accuracy" => Ok(Preset::Accuracy),
            other => Err(TuneError::UnsupportedPreset(other.to_string())),
        }
    }
}

/// A knob the tuning pass is permitted to vary
///
/// `Bits`, `Mode` and `Granularity` gate which alternate hardware
/// configurations the selector admits; the `Estimator*` knobs gate range
/// estimator expansion; `Layer` enables the skip-quantization variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Knob {
    Bits,
    Mode,
    Granularity,
    Layer,
    EstimatorPreset,
    EstimatorType,
    EstimatorOutlierProb,
    EstimatorAggregator,
}

impl Knob {
    pub fn as_str(self) -> &'static str {
        match self {
            Knob::Bits => "bits",
            Knob::Mode => "mode",
            Knob::Granularity => "granularity",
            Knob::Layer => "layer",
            Knob::EstimatorPreset => "estimator_preset",
            Knob::EstimatorType => "estimator_type",
            Knob::EstimatorOutlierProb => "estimator_outlier_prob",
            Knob::EstimatorAggregator => "estimator_aggregator",
        }
    }
}

impl fmt::Display for Knob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Knob {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bits" => Ok(Knob::Bits),
            "mode" => Ok(Knob::Mode),
            "granularity" => Ok(Knob::Granularity),
            "layer" => Ok(Knob::Layer),
            "estimator_preset" => Ok(Knob::EstimatorPreset),
            "estimator_type" => Ok(Knob::EstimatorType),
            "estimator_outlier_prob" => Ok(Knob::EstimatorOutlierProb),
            "estimator_aggregator" => Ok(Knob::EstimatorAggregator),
            other => Err(TuneError::UnknownKnob(other.to_string())),
        }
    }
}

/// Set of knobs enabled for one generation pass
///
/// Constant for the duration of the pass; every axis outside the set is
/// pinned to its default value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningScope(BTreeSet<Knob>);

impl TuningScope {
    /// Empty scope: nothing is varied
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style scope construction
    pub fn with(mut self, knob: Knob) -> Self {
        self.0.insert(knob);
        self
    }

    /// Enable a knob
    pub fn enable(&mut self, knob: Knob) {
        self.0.insert(knob);
    }

    pub fn contains(&self, knob: Knob) -> bool {
        self.0.contains(&knob)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Knob> + '_ {
        self.0.iter().copied()
    }

    /// Parse a scope from knob names, failing fast on anything outside the
    /// fixed vocabulary
    pub fn parse<'a, I>(names: I) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut scope = Self::new();
        for name in names {
            scope.enable(name.parse()?);
        }
        Ok(scope)
    }
}

impl FromIterator<Knob> for TuningScope {
    fn from_iter<I: IntoIterator<Item = Knob>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
