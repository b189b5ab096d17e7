use std::any::Any;

use crate::FeatureError;

/// Non-visual logic of a feature instance.
pub trait Feature: Any {
    /// Identifier of the plugin that created this instance.
    fn uri(&self) -> &str;

    /// Serialized settings, used when the instance has no presentation.
    fn serialize(&self) -> Vec<u8>;

    /// Restore settings produced by [`Feature::serialize`].
    fn deserialize(&mut self, data: &[u8]) -> Result<(), FeatureError>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Controller side of a feature instance. Owns the configuration that ends up
/// in presets and carries the display name assigned by the registry.
pub trait FeaturePresentation {
    fn set_name(&mut self, name: &str);
    fn name(&self) -> &str;
    fn serialize(&self) -> Vec<u8>;
    fn deserialize(&mut self, data: &[u8]) -> Result<(), FeatureError>;

    /// Tear down the presentation and the feature logic behind it.
    fn destroy(self: Box<Self>);
}

/// Context handed to factories when they build a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostContext {
    /// Index of the workspace tab hosting the feature set.
    pub tab_index: usize,
}

/// Builds feature instances for one plugin.
pub trait FeatureFactory {
    fn create_feature(&self, context: &HostContext) -> Box<dyn Feature>;

    /// Build the presentation paired with `feature`. Headless plugins return
    /// `None`.
    fn create_presentation(
        &self,
        context: &HostContext,
        feature: &mut dyn Feature,
    ) -> Option<Box<dyn FeaturePresentation>>;
}

/// Visual container receiving instance widgets.
pub trait FeatureWindow {
    fn add_rollup_widget(&mut self, widget: Box<dyn Any>);
}
