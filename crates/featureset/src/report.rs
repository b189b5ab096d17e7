use crate::{FeatureError, InstanceId};

/// Instance whose stored configuration could not be restored.
#[derive(Debug)]
pub struct DeserializeFailure {
    pub feature_key: String,
    /// Registration kept in the table, `None` when the instance was discarded.
    pub instance: Option<InstanceId>,
    pub error: FeatureError,
}

/// Outcome of loading a preset into a feature set.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Instances created from the preset, in preset order.
    pub loaded: Vec<InstanceId>,
    /// Preset URIs with no matching plugin.
    pub skipped: Vec<String>,
    pub failed: Vec<DeserializeFailure>,
}

impl LoadReport {
    /// Number of preset entries that found a plugin.
    pub fn matched(&self) -> usize {
        self.loaded.len()
            + self
                .failed
                .iter()
                .filter(|failure| failure.instance.is_none())
                .count()
    }

    /// True when every preset entry was instantiated and restored.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}
