//! Aggregation-function name registry

use serde::{Deserialize, Serialize};

pub const MEAN: &str = "mean";

/// Aggregators registered by the statistics backend
const BUILTIN: [&str; 8] = [
    MEAN,
    "max",
    "min",
    "median",
    "mean_no_outliers",
    "median_no_outliers",
    "hl_estimator",
    "batch_mean",
];

/// Registered aggregation-function identifiers
///
/// The generator only ever reads the key set; resolving a name to an actual
/// aggregation function is the statistics backend's concern. Read-only after
/// construction, safe for unsynchronized shared reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorRegistry {
    names: Vec<String>,
}

impl AggregatorRegistry {
    /// Registry seeded with the backend's built-in aggregators
    pub fn with_builtins() -> Self {
        Self { names: BUILTIN.iter().map(|name| name.to_string()).collect() }
    }

    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Register an additional aggregator; repeated names are ignored
    pub fn register(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Registration-ordered key list
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for AggregatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
