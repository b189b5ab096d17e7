#![no_main]

use std::any::Any;

use featureset::prelude::*;
use featureset::FeatureSetPreset;
use libfuzzer_sys::fuzz_target;

struct Echo(Vec<u8>);

impl Feature for Echo {
    fn uri(&self) -> &str {
        "fuzz.echo"
    }

    fn serialize(&self) -> Vec<u8> {
        self.0.clone()
    }

    fn deserialize(&mut self, data: &[u8]) -> Result<(), FeatureError> {
        if data.first() == Some(&0) {
            return Err(FeatureError::InvalidConfig("leading zero".into()));
        }
        self.0 = data.to_vec();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct EchoFactory;

impl FeatureFactory for EchoFactory {
    fn create_feature(&self, _context: &HostContext) -> Box<dyn Feature> {
        Box::new(Echo(Vec::new()))
    }

    fn create_presentation(
        &self,
        _context: &HostContext,
        _feature: &mut dyn Feature,
    ) -> Option<Box<dyn FeaturePresentation>> {
        None
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(preset) = FeatureSetPreset::from_json(raw) else {
        return;
    };

    let mut catalog = FeatureCatalog::new();
    catalog.register_factory("fuzz.echo", Box::new(EchoFactory));
    let mut set = FeatureSet::default();
    let report = set.load_preset(&preset, &catalog);
    assert_eq!(set.len(), report.loaded.len());

    let mut saved = FeatureSetPreset::default();
    set.save_preset(&mut saved);
    assert_eq!(saved.feature_count(), set.len());
});
