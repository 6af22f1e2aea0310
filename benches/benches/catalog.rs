use std::hint::black_box;

use chipbox_presets::{stock_catalog, Preset, PresetCatalog, PresetHandle};
use criterion::{criterion_group, criterion_main, Criterion};

fn full_catalog() -> PresetCatalog {
    PresetCatalog::build((0..32).map(|category| {
        let presets = (0..64)
            .map(|preset| {
                Preset::new(format!("Preset {category}.{preset}"))
                    .with_midi_program(preset as u8)
                    .with_general_midi()
            })
            .collect::<Vec<_>>();
        (format!("Category {category}"), presets)
    }))
    .expect("benchmark catalog")
}

fn lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let catalog = full_catalog();
    let last = PresetHandle::encode(31, 63);

    group.bench_function("resolve_handle", |b| {
        b.iter(|| catalog.resolve(black_box(last)));
    });

    group.bench_function("category_by_name_then_preset_by_name", |b| {
        b.iter(|| {
            catalog
                .category_by_name(black_box("Category 31"))
                .and_then(|category| category.presets.by_name(black_box("Preset 31.63")))
        });
    });

    group.bench_function("resolve_by_name_last", |b| {
        b.iter(|| catalog.resolve_by_name(black_box("Preset 31.63")));
    });

    group.bench_function("resolve_by_midi_program_miss", |b| {
        b.iter(|| catalog.resolve_by_midi_program(black_box(127)));
    });

    group.bench_function("stock_resolve", |b| {
        let stock = stock_catalog();
        b.iter(|| stock.resolve(black_box(PresetHandle::from_raw(192))));
    });

    group.finish();
}

criterion_group!(benches, lookups);
criterion_main!(benches);
