use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{SettingsError, UriAliases};

/// Per-tab configuration of a feature set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSetSettings {
    /// Index of the workspace tab hosting the set.
    pub tab_index: usize,
    /// Keep instances whose preset configuration failed to deserialize.
    pub keep_failed_instances: bool,
    /// Legacy plugin URIs mapped to their current URI.
    pub uri_aliases: BTreeMap<String, String>,
}

impl Default for FeatureSetSettings {
    fn default() -> Self {
        Self {
            tab_index: 0,
            keep_failed_instances: true,
            uri_aliases: BTreeMap::new(),
        }
    }
}

impl FeatureSetSettings {
    pub fn for_tab(tab_index: usize) -> Self {
        Self {
            tab_index,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub(crate) fn uri_matcher(&self) -> UriAliases {
        UriAliases::from(self.uri_aliases.clone())
    }
}
