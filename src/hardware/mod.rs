//! Hardware capability catalogue
//!
//! Per-device JSON catalogues of legal quantization points per operation
//! type. Loaded once per tuning session and read-only afterwards, so shared
//! unsynchronized reads across worker threads are safe.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::OperationSpec;
use crate::error::{Result, TuneError};


/// Catalogue of legal quantization configurations for one device
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareConfig {
    ops: BTreeMap<String, OperationSpec>,
}

impl HardwareConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Load the catalogue for a target device from a catalogue directory
    pub fn for_device(device: &str, dir: &Path) -> Result<Self> {
        Self::load(&dir.join(catalogue_file(device)?))
    }

    pub fn op_spec(&self, op_type: &str) -> Option<&OperationSpec> {
        self.ops.get(op_type)
    }

    pub fn ops(&self) -> impl Iterator<Item = (&str, &OperationSpec)> {
        self.ops.iter().map(|(op_type, spec)| (op_type.as_str(), spec))
    }

    pub fn insert(&mut self, op_type: &str, spec: OperationSpec) {
        self.ops.insert(op_type.to_string(), spec);
    }
}

/// Catalogue file for a target device identifier
///
/// GPU shares the CPU point set minus recurrent-cell quantization, hence its
/// own file.
fn catalogue_file(device: &str) -> Result<&'static str> {
    match device {
        "ANY" | "CPU" | "CPU_SPR" => Ok("cpu.json"),
        "GPU" => Ok("gpu.json"),
        "GNA" | "GNA3" | "GNA3.5" => Ok("gna.json"),
        "VPU" => Ok("vpu.json"),
        other => Err(TuneError::UnsupportedDevice(other.to_string())),
    }
}
