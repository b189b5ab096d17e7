use std::fmt;

use crate::{Feature, FeaturePresentation};

/// Stable identity of a registered feature instance. Ids are never reused by
/// the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn next(counter: &mut u64) -> Self {
        *counter += 1;
        InstanceId(*counter)
    }

    /// Insertion sequence number, increasing with every registration.
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One active feature instance.
#[must_use = "a registration must be destroyed to tear down its presentation"]
pub struct Registration {
    id: InstanceId,
    feature_key: String,
    name: String,
    feature: Box<dyn Feature>,
    presentation: Option<Box<dyn FeaturePresentation>>,
}

impl Registration {
    pub(crate) fn new(
        id: InstanceId,
        feature_key: String,
        feature: Box<dyn Feature>,
        presentation: Option<Box<dyn FeaturePresentation>>,
    ) -> Self {
        Self {
            id,
            feature_key,
            name: String::new(),
            feature,
            presentation,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Plugin URI used as persistence key and name prefix.
    pub fn feature_key(&self) -> &str {
        &self.feature_key
    }

    /// Display name assigned by the last naming pass.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn feature(&self) -> &dyn Feature {
        self.feature.as_ref()
    }

    pub fn feature_mut(&mut self) -> &mut dyn Feature {
        self.feature.as_mut()
    }

    pub fn presentation(&self) -> Option<&dyn FeaturePresentation> {
        self.presentation.as_deref()
    }

    pub fn has_presentation(&self) -> bool {
        self.presentation.is_some()
    }

    pub(crate) fn rename(&mut self, name: String) {
        if let Some(presentation) = self.presentation.as_mut() {
            presentation.set_name(&name);
        }
        self.name = name;
    }

    /// Serialized configuration, taken from the presentation when there is one.
    pub(crate) fn serialize(&self) -> Vec<u8> {
        match &self.presentation {
            Some(presentation) => presentation.serialize(),
            None => self.feature.serialize(),
        }
    }

    pub(crate) fn deserialize(&mut self, data: &[u8]) -> Result<(), crate::FeatureError> {
        match self.presentation.as_mut() {
            Some(presentation) => presentation.deserialize(data),
            None => self.feature.deserialize(data),
        }
    }

    /// Hand the instance over to its presentation for teardown. Headless
    /// instances are simply dropped.
    pub fn destroy(self) {
        if let Some(presentation) = self.presentation {
            presentation.destroy();
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("feature_key", &self.feature_key)
            .field("name", &self.name)
            .field("has_presentation", &self.has_presentation())
            .finish()
    }
}
