//! afinar: configuration-space generation for post-training quantization tuning
//!
//! Given a hardware catalogue of legal quantization points for an operation
//! and an optional previously found optimum, produces the complete,
//! deduplicated candidate set an accuracy-aware search loop evaluates:
//! - per-axis candidate selection gated by a tuning scope
//! - cross-product merging of activation and weight options
//! - range-estimator expansion (type, outlier probability, aggregator)
//!
//! Generation is pure and per-operation: no shared state, no I/O, identical
//! inputs always yield the identical candidate list.
//!
//! # Example
//!
//! ```
//! use afinar::{
//!     candidates, GeneratorContext, Knob, OperationSpec, Preset, QuantGranularity, QuantMode,
//!     QuantizerConfig, TuningScope,
//! };
//!
//! # fn main() -> afinar::Result<()> {
//! let spec = OperationSpec {
//!     activations: vec![QuantizerConfig::new(
//!         8,
//!         QuantMode::Asymmetric,
//!         QuantGranularity::PerTensor,
//!     )],
//!     weights: vec![QuantizerConfig::new(
//!         8,
//!         QuantMode::Symmetric,
//!         QuantGranularity::PerChannel,
//!     )],
//! };
//!
//! let scope = TuningScope::new().with(Knob::Layer);
//! let ctx = GeneratorContext::new(scope, Preset::Performance);
//! let configs = candidates(&spec, &ctx, None)?;
//!
//! // One fully quantized candidate plus the skip-quantization variant.
//! assert_eq!(configs.len(), 2);
//! assert!(configs[0].quantize);
//! assert!(!configs[1].quantize);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod hardware;
pub mod stats;
pub mod tuning;

pub use config::{
    GeneratorContext, Knob, OperationConfig, OperationSpec, Preset, QuantGranularity, QuantMode,
    QuantizerConfig, TensorKind, TuningScope,
};
pub use error::{Result, TuneError};
pub use estimator::{
    EstimatorAxis, EstimatorConfig, EstimatorKind, EstimatorPreset, RangeEstimatorConfig,
};
pub use hardware::HardwareConfig;
pub use tuning::{candidates, select_options};
