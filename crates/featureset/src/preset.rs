use serde::{Deserialize, Serialize};

use crate::PresetError;

/// Stored configuration of one feature instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub feature_id_uri: String,
    pub config: Vec<u8>,
}

/// Snapshot of a feature set consumed and produced by the registry.
pub trait Preset {
    fn feature_count(&self) -> usize;
    fn feature_config(&self, index: usize) -> Option<&FeatureConfig>;
    fn add_feature(&mut self, feature_id_uri: &str, config: Vec<u8>);
}

/// Named feature set preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSetPreset {
    pub group: String,
    pub description: String,
    pub features: Vec<FeatureConfig>,
}

impl FeatureSetPreset {
    pub fn new(group: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            description: description.into(),
            features: Vec::new(),
        }
    }

    pub fn clear_features(&mut self) {
        self.features.clear();
    }

    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, PresetError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Preset for FeatureSetPreset {
    fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn feature_config(&self, index: usize) -> Option<&FeatureConfig> {
        self.features.get(index)
    }

    fn add_feature(&mut self, feature_id_uri: &str, config: Vec<u8>) {
        self.features.push(FeatureConfig {
            feature_id_uri: feature_id_uri.to_owned(),
            config,
        });
    }
}
