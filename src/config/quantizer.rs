//! Hardware quantization points and per-operation configurations

use serde::{Deserialize, Serialize};

use crate::estimator::RangeEstimatorConfig;

use super::types::{Knob, QuantGranularity, QuantMode, TensorKind};

/// One legal hardware quantization point for a single tensor kind
///
/// Candidates are derived by copy-and-modify; two candidates never share a
/// nested sub-configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantizerConfig {
    /// Number of bits for quantization (e.g., 4, 8)
    pub bits: u8,
    pub mode: QuantMode,
    pub granularity: QuantGranularity,
    /// Lowest quantized level; fixed by the hardware point, never tuned
    pub level_low: i32,
    /// Highest quantized level; fixed by the hardware point, never tuned
    pub level_high: i32,
    /// Attached by estimator expansion; absent in hardware catalogue input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_estimator: Option<RangeEstimatorConfig>,
}

impl QuantizerConfig {
    /// Create a hardware point with levels derived from bits and mode
    ///
    /// Symmetric: levels [-(2^(bits-1) - 1), 2^(bits-1) - 1].
    /// Asymmetric: levels [0, 2^bits - 1].
    pub fn new(bits: u8, mode: QuantMode, granularity: QuantGranularity) -> Self {
        let (level_low, level_high) = match mode {
            QuantMode::Symmetric => {
                let level_high = (1i32 << (bits - 1)) - 1;
                (-level_high, level_high)
            }
            QuantMode::Asymmetric => (0, (1i32 << bits) - 1),
        };
        Self { bits, mode, granularity, level_low, level_high, range_estimator: None }
    }

    /// Tunable axes on which `self` and `other` disagree
    ///
    /// Clip levels follow bits/mode and are excluded from the diff; a pair of
    /// points differing only in levels counts as identical here.
    pub(crate) fn diff_axes(&self, other: &Self) -> Vec<Knob> {
        let mut axes = Vec::new();
        if self.bits != other.bits {
            axes.push(Knob::Bits);
        }
        if self.mode != other.mode {
            axes.push(Knob::Mode);
        }
        if self.granularity != other.granularity {
            axes.push(Knob::Granularity);
        }
        axes
    }
}

/// Full quantization choice for one operation
///
/// `quantize == false` means the operation is left unquantized; the tensor
/// sub-configurations are retained but ignored downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationConfig {
    pub quantize: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activations: Option<QuantizerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<QuantizerConfig>,
}

impl OperationConfig {
    /// Seed configuration before any axis has been merged in
    pub fn quantized() -> Self {
        Self { quantize: true, activations: None, weights: None }
    }

    pub fn tensor(&self, kind: TensorKind) -> Option<&QuantizerConfig> {
        match kind {
            TensorKind::Activations => self.activations.as_ref(),
            TensorKind::Weights => self.weights.as_ref(),
        }
    }

    pub fn set_tensor(&mut self, kind: TensorKind, config: QuantizerConfig) {
        match kind {
            TensorKind::Activations => self.activations = Some(config),
            TensorKind::Weights => self.weights = Some(config),
        }
    }
}

/// Legal base configurations for one operation type
///
/// Both lists come pre-sorted from the hardware catalogue: the fastest point
/// first, the most accurate last. Either list may be empty when the hardware
/// does not quantize that tensor kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationSpec {
    #[serde(default)]
    pub activations: Vec<QuantizerConfig>,
    #[serde(default)]
    pub weights: Vec<QuantizerConfig>,
}
