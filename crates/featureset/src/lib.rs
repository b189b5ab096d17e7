//! Feature set registry
//! ====================
//!
//! Bookkeeping for the pluggable, non-visual features hosted in one workspace
//! tab. A [`FeatureSet`] owns every active feature instance together with its
//! presentation counterpart, keeps their display names in the
//! `feature_uri:index` form, and synchronises its contents with a
//! [`FeatureSetPreset`].
//!
//! Plugins plug into the registry through [`FeatureFactory`] entries collected
//! in a [`FeatureCatalog`]. The registry never renders anything itself; widgets
//! are handed straight to the host [`FeatureWindow`].

mod catalog;
mod error;
mod instance;
mod naming;
mod ordering;
mod plugin;
mod preset;
mod registry;
mod report;
mod settings;
#[cfg(test)]
mod test_support;

pub use catalog::{CatalogEntry, ExactUri, FeatureCatalog, UriAliases, UriMatcher};
pub use error::{FeatureError, PresetError, SettingsError};
pub use instance::{InstanceId, Registration};
pub use naming::instance_name;
pub use ordering::persistence_order;
pub use plugin::{Feature, FeatureFactory, FeaturePresentation, FeatureWindow, HostContext};
pub use preset::{FeatureConfig, FeatureSetPreset, Preset};
pub use registry::FeatureSet;
pub use report::{DeserializeFailure, LoadReport};
pub use settings::FeatureSetSettings;

/// Common imports for plugin authors implementing features.
pub mod prelude {
    pub use crate::{
        Feature, FeatureCatalog, FeatureError, FeatureFactory, FeaturePresentation, FeatureSet,
        HostContext, Preset,
    };
}
