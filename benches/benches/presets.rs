use std::any::Any;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use featureset::prelude::*;
use featureset::FeatureSetPreset;

struct BenchFeature;

impl Feature for BenchFeature {
    fn uri(&self) -> &str {
        "bench.feature"
    }

    fn serialize(&self) -> Vec<u8> {
        Vec::new()
    }

    fn deserialize(&mut self, _data: &[u8]) -> Result<(), FeatureError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Default)]
struct BenchGui {
    name: String,
    config: Vec<u8>,
}

impl FeaturePresentation for BenchGui {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self) -> Vec<u8> {
        self.config.clone()
    }

    fn deserialize(&mut self, data: &[u8]) -> Result<(), FeatureError> {
        self.config = data.to_vec();
        Ok(())
    }

    fn destroy(self: Box<Self>) {}
}

struct BenchFactory;

impl FeatureFactory for BenchFactory {
    fn create_feature(&self, _context: &HostContext) -> Box<dyn Feature> {
        Box::new(BenchFeature)
    }

    fn create_presentation(
        &self,
        _context: &HostContext,
        _feature: &mut dyn Feature,
    ) -> Option<Box<dyn FeaturePresentation>> {
        Some(Box::<BenchGui>::default())
    }
}

fn catalog(plugins: usize) -> FeatureCatalog {
    let mut catalog = FeatureCatalog::new();
    for index in 0..plugins {
        catalog.register_factory(format!("bench.feature.{index}"), Box::new(BenchFactory));
    }
    catalog
}

fn preset(features: usize, plugins: usize) -> FeatureSetPreset {
    let mut preset = FeatureSetPreset::new("bench", "generated");
    for index in 0..features {
        let uri = format!("bench.feature.{}", (index * 7) % plugins);
        preset.add_feature(&uri, vec![0u8; 256]);
    }
    preset
}

fn load_and_save_64_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("featureset");
    group.measurement_time(Duration::from_secs(5));

    let catalog = catalog(32);
    let preset = preset(64, 32);

    group.bench_function("load_64_features", |b| {
        let mut set = FeatureSet::default();
        b.iter(|| set.load_preset(&preset, &catalog));
    });

    group.bench_function("save_64_features", |b| {
        let mut set = FeatureSet::default();
        set.load_preset(&preset, &catalog);
        b.iter_batched(
            FeatureSetPreset::default,
            |mut saved| {
                set.save_preset(&mut saved);
                saved
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, load_and_save_64_features);
criterion_main!(benches);
