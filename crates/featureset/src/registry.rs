use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::naming::instance_name;
use crate::{
    persistence_order, DeserializeFailure, Feature, FeatureCatalog, FeaturePresentation,
    FeatureSetSettings, FeatureWindow, HostContext, InstanceId, LoadReport, Preset, Registration,
    UriMatcher,
};

/// Feature instances active in one workspace tab.
///
/// Instances live in an arena keyed by [`InstanceId`]; a separate sequence of
/// ids holds the display order. Every structural change renames all instances
/// to `feature_key:position`, so positions are only meaningful until the next
/// change while ids stay valid for the lifetime of the instance.
///
/// All operations take `&mut self` and run to completion. Collaborators never
/// receive a reference to the set, so a presentation being destroyed cannot
/// call back into it.
pub struct FeatureSet {
    settings: FeatureSetSettings,
    window: Option<Box<dyn FeatureWindow>>,
    next_id: u64,
    instances: HashMap<InstanceId, Registration>,
    order: Vec<InstanceId>,
}

impl FeatureSet {
    pub fn new(settings: FeatureSetSettings) -> Self {
        Self {
            settings,
            window: None,
            next_id: 0,
            instances: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn with_window(settings: FeatureSetSettings, window: Box<dyn FeatureWindow>) -> Self {
        let mut set = Self::new(settings);
        set.window = Some(window);
        set
    }

    pub fn settings(&self) -> &FeatureSetSettings {
        &self.settings
    }

    pub fn tab_index(&self) -> usize {
        self.settings.tab_index
    }

    pub fn context(&self) -> HostContext {
        HostContext {
            tab_index: self.settings.tab_index,
        }
    }

    /// Forward an instance widget to the host window.
    pub fn add_rollup_widget(&mut self, widget: Box<dyn Any>) {
        match self.window.as_mut() {
            Some(window) => window.add_rollup_widget(widget),
            None => debug!(tab = self.settings.tab_index, "no feature window, widget dropped"),
        }
    }

    /// Append an instance built by the caller.
    pub fn register(
        &mut self,
        feature_key: impl Into<String>,
        feature: Box<dyn Feature>,
        presentation: Box<dyn FeaturePresentation>,
    ) -> InstanceId {
        self.insert(feature_key.into(), feature, Some(presentation))
    }

    /// Append an instance running without a presentation.
    pub fn register_headless(
        &mut self,
        feature_key: impl Into<String>,
        feature: Box<dyn Feature>,
    ) -> InstanceId {
        self.insert(feature_key.into(), feature, None)
    }

    fn insert(
        &mut self,
        feature_key: String,
        feature: Box<dyn Feature>,
        presentation: Option<Box<dyn FeaturePresentation>>,
    ) -> InstanceId {
        let id = InstanceId::next(&mut self.next_id);
        debug!(%id, feature = %feature_key, "registering feature");
        self.push(Registration::new(id, feature_key, feature, presentation));
        self.rename_instances();
        id
    }

    fn push(&mut self, registration: Registration) {
        self.order.push(registration.id());
        self.instances.insert(registration.id(), registration);
    }

    /// Take an instance out of the set without destroying it.
    ///
    /// Returns `None` and leaves the set untouched when `id` is not registered.
    /// The caller owns the returned instance and should
    /// [`destroy`](Registration::destroy) it once done.
    #[must_use = "a removed registration is not destroyed when dropped"]
    pub fn remove(&mut self, id: InstanceId) -> Option<Registration> {
        let index = self.position(id)?;
        self.order.remove(index);
        let registration = self.instances.remove(&id)?;
        debug!(%id, feature = %registration.feature_key(), index, "removed feature");
        self.rename_instances();
        Some(registration)
    }

    /// Destroy and remove the instance at `index`. Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.order.len() {
            return false;
        }
        let id = self.order.remove(index);
        if let Some(registration) = self.instances.remove(&id) {
            debug!(feature = %registration.feature_key(), index, "deleting feature");
            registration.destroy();
        }
        self.rename_instances();
        true
    }

    pub fn get(&self, index: usize) -> Option<&dyn Feature> {
        self.registration(index).map(Registration::feature)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Feature> {
        let id = *self.order.get(index)?;
        self.instances.get_mut(&id).map(Registration::feature_mut)
    }

    pub fn registration(&self, index: usize) -> Option<&Registration> {
        self.order.get(index).and_then(|id| self.instances.get(id))
    }

    pub fn registration_by_id(&self, id: InstanceId) -> Option<&Registration> {
        self.instances.get(&id)
    }

    /// Current display position of `id`.
    pub fn position(&self, id: InstanceId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// Registrations in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.order.iter().filter_map(|id| self.instances.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Registration::name).collect()
    }

    /// Destroy every instance and empty the set. Returns how many were torn
    /// down.
    pub fn destroy_all(&mut self) -> usize {
        let registrations = self.take_all();
        let count = registrations.len();
        for registration in registrations {
            debug!(feature = %registration.feature_key(), "destroying feature");
            registration.destroy();
        }
        count
    }

    /// Empty the set, returning its instances in display order.
    fn take_all(&mut self) -> Vec<Registration> {
        let mut instances = std::mem::take(&mut self.instances);
        std::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|id| instances.remove(&id))
            .collect()
    }

    /// Replace the set with the instances described by `preset`, matching
    /// plugin URIs through the aliases configured in the settings.
    ///
    /// Aliases only select the plugin: instances keep the URI stored in the
    /// preset as their key, so a legacy URI is saved back unchanged.
    pub fn load_preset(&mut self, preset: &dyn Preset, catalog: &FeatureCatalog) -> LoadReport {
        let matcher = self.settings.uri_matcher();
        self.load_preset_with(preset, catalog, &matcher)
    }

    /// Replace the set with the instances described by `preset`.
    ///
    /// Every current instance is destroyed before the first new one is built.
    /// Preset entries without a matching catalog entry are skipped. Instances
    /// and every entry of the returned report are keyed by the preset URI.
    pub fn load_preset_with(
        &mut self,
        preset: &dyn Preset,
        catalog: &FeatureCatalog,
        matcher: &dyn UriMatcher,
    ) -> LoadReport {
        for registration in self.take_all() {
            debug!(feature = %registration.feature_key(), "destroying old feature");
            registration.destroy();
        }

        debug!(count = preset.feature_count(), "feature(s) in preset");

        let context = self.context();
        let mut report = LoadReport::default();
        for index in 0..preset.feature_count() {
            let Some(config) = preset.feature_config(index) else {
                continue;
            };
            let Some(entry) = catalog.find(&config.feature_id_uri, matcher) else {
                warn!(feature = %config.feature_id_uri, "no plugin for feature, skipping");
                report.skipped.push(config.feature_id_uri.clone());
                continue;
            };

            debug!(
                plugin = %entry.feature_id_uri,
                feature = %config.feature_id_uri,
                "creating feature from config"
            );
            let mut feature = entry.factory.create_feature(&context);
            let presentation = entry
                .factory
                .create_presentation(&context, feature.as_mut());
            let id = InstanceId::next(&mut self.next_id);
            let mut registration =
                Registration::new(id, config.feature_id_uri.clone(), feature, presentation);

            match registration.deserialize(&config.config) {
                Ok(()) => {
                    self.push(registration);
                    report.loaded.push(id);
                }
                Err(error) => {
                    warn!(
                        %id,
                        feature = %config.feature_id_uri,
                        %error,
                        "failed to restore feature"
                    );
                    let instance = if self.settings.keep_failed_instances {
                        self.push(registration);
                        report.loaded.push(id);
                        Some(id)
                    } else {
                        registration.destroy();
                        None
                    };
                    report.failed.push(DeserializeFailure {
                        feature_key: config.feature_id_uri.clone(),
                        instance,
                        error,
                    });
                }
            }
        }

        self.rename_instances();
        info!(
            tab = self.settings.tab_index,
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "loaded feature set preset"
        );
        report
    }

    /// Append every instance to `preset`, sorted by display name.
    ///
    /// The sort is applied to the set itself, so the display order after a
    /// save matches the preset. Names are not recomputed.
    pub fn save_preset(&mut self, preset: &mut dyn Preset) {
        let instances = &self.instances;
        self.order
            .sort_by(|a, b| match (instances.get(a), instances.get(b)) {
                (Some(left), Some(right)) => persistence_order(left, right),
                _ => a.cmp(b),
            });
        for registration in self.iter() {
            debug!(
                feature = %registration.feature_key(),
                name = %registration.name(),
                "saving feature"
            );
            preset.add_feature(registration.feature_key(), registration.serialize());
        }
    }

    fn rename_instances(&mut self) {
        for (index, id) in self.order.iter().enumerate() {
            if let Some(registration) = self.instances.get_mut(id) {
                let name = instance_name(registration.feature_key(), index);
                registration.rename(name);
            }
        }
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::new(FeatureSetSettings::default())
    }
}

impl Drop for FeatureSet {
    fn drop(&mut self) {
        self.destroy_all();
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureSet")
            .field("settings", &self.settings)
            .field("registrations", &self.iter().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
