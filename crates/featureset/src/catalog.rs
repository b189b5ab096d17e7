use std::collections::BTreeMap;

use crate::FeatureFactory;

/// Rule deciding whether a registered plugin URI satisfies a requested one.
pub trait UriMatcher {
    fn matches(&self, registered: &str, requested: &str) -> bool;
}

impl<F> UriMatcher for F
where
    F: Fn(&str, &str) -> bool,
{
    fn matches(&self, registered: &str, requested: &str) -> bool {
        self(registered, requested)
    }
}

/// Byte-for-byte URI comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactUri;

impl UriMatcher for ExactUri {
    fn matches(&self, registered: &str, requested: &str) -> bool {
        registered == requested
    }
}

/// Exact comparison that also accepts legacy URIs renamed to a registered one.
#[derive(Debug, Clone, Default)]
pub struct UriAliases {
    aliases: BTreeMap<String, String>,
}

impl UriAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `legacy` wherever `current` is registered.
    pub fn alias(mut self, legacy: impl Into<String>, current: impl Into<String>) -> Self {
        self.aliases.insert(legacy.into(), current.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl From<BTreeMap<String, String>> for UriAliases {
    fn from(aliases: BTreeMap<String, String>) -> Self {
        Self { aliases }
    }
}

impl UriMatcher for UriAliases {
    fn matches(&self, registered: &str, requested: &str) -> bool {
        registered == requested
            || self
                .aliases
                .get(requested)
                .is_some_and(|current| current == registered)
    }
}

/// A plugin available for instantiation.
pub struct CatalogEntry {
    pub feature_id_uri: String,
    pub factory: Box<dyn FeatureFactory>,
}

/// Ordered list of the feature plugins known to the host.
#[derive(Default)]
pub struct FeatureCatalog {
    entries: Vec<CatalogEntry>,
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register_factory(
        &mut self,
        feature_id_uri: impl Into<String>,
        factory: Box<dyn FeatureFactory>,
    ) -> &mut Self {
        self.entries.push(CatalogEntry {
            feature_id_uri: feature_id_uri.into(),
            factory,
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose URI `matcher` accepts for `requested`.
    pub fn find(&self, requested: &str, matcher: &dyn UriMatcher) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| matcher.matches(&entry.feature_id_uri, requested))
    }
}
