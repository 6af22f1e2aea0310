//! Shared fixtures for the cross-crate test suites.

use chipbox_presets::{Preset, PresetCatalog};
use chipbox_synth::InstrumentType;

/// Catalog where two categories claim General MIDI program 33.
pub fn general_midi_catalog() -> PresetCatalog {
    PresetCatalog::build([
        (
            "Custom Instruments",
            vec![
                Preset::for_instrument_type(InstrumentType::Chip),
                Preset::for_instrument_type(InstrumentType::Fm),
            ],
        ),
        (
            "Bass Presets",
            vec![
                Preset::new("Fretless Bass").with_midi_program(35),
                Preset::new("Finger Bass")
                    .with_midi_program(33)
                    .with_general_midi()
                    .with_subharmonic_octaves(-1),
            ],
        ),
        (
            "Retro Presets",
            vec![
                Preset::new("Chip Bass").with_midi_program(33).with_general_midi(),
                Preset::new("Chip Bass 2").with_midi_program(33),
            ],
        ),
    ])
    .unwrap_or_else(|err| panic!("fixture catalog is malformed: {err}"))
}

/// Catalog with `categories` categories of `presets_per_category` presets each.
pub fn grid_catalog(categories: usize, presets_per_category: usize) -> PresetCatalog {
    PresetCatalog::build((0..categories).map(|category| {
        let presets = (0..presets_per_category)
            .map(|preset| Preset::new(format!("Preset {category}.{preset}")))
            .collect::<Vec<_>>();
        (format!("Category {category}"), presets)
    }))
    .unwrap_or_else(|err| panic!("grid catalog is malformed: {err}"))
}
