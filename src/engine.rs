//! Evaluation-engine dataset selection
//!
//! Some engines can switch between tagged subsets of their dataset (one for
//! optimization statistics, one for accuracy evaluation); others expose a
//! single dataset. Dataset-tag operations are only defined for the capable
//! variant and are no-ops otherwise.

/// Engine handle as seen by the tuning loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Engine without dataset-tag support
    Generic,
    /// Engine that can switch between tagged dataset subsets
    DatasetTagCapable {
        evaluation_tag: String,
        optimization_tag: String,
        active_tag: Option<String>,
    },
}

impl Engine {
    pub fn dataset_tag_capable(evaluation_tag: &str, optimization_tag: &str) -> Self {
        Engine::DatasetTagCapable {
            evaluation_tag: evaluation_tag.to_string(),
            optimization_tag: optimization_tag.to_string(),
            active_tag: None,
        }
    }

    /// Switch to the accuracy-evaluation subset
    pub fn select_evaluation_dataset(&mut self) {
        if let Engine::DatasetTagCapable { evaluation_tag, active_tag, .. } = self {
            *active_tag = Some(evaluation_tag.clone());
        }
    }

    /// Switch to the statistics-collection subset
    pub fn select_optimization_dataset(&mut self) {
        if let Engine::DatasetTagCapable { optimization_tag, active_tag, .. } = self {
            *active_tag = Some(optimization_tag.clone());
        }
    }

    /// Drop any tag selection and fall back to the full dataset
    pub fn reset_dataset_to_default(&mut self) {
        if let Engine::DatasetTagCapable { active_tag, .. } = self {
            *active_tag = None;
        }
    }

    pub fn active_tag(&self) -> Option<&str> {
        match self {
            Engine::Generic => None,
            Engine::DatasetTagCapable { active_tag, .. } => active_tag.as_deref(),
        }
    }
}
