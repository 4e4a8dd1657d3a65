//! Data model for quantization-space generation
//!
//! Value-semantic snapshots throughout: candidates are derived by structural
//! copy-and-modify and must never alias a sibling's nested configuration.

mod context;
mod quantizer;
mod types;


pub use context::{GeneratorContext, DEFAULT_OUTLIER_PROB_CHOICES};
pub use quantizer::{OperationConfig, OperationSpec, QuantizerConfig};
pub use types::{Knob, Preset, QuantGranularity, QuantMode, TensorKind, TuningScope};
