use chipbox_synth::{
    ChipSettings, CommonSettings, Effect, EnvelopeSettings, FilterPoint, FmOperator, FmSettings,
    InstrumentSettings, InstrumentType, NoiseSettings, PulseWidthSettings, Transition,
};

use crate::entry::Preset;

pub const CUSTOM_INSTRUMENTS: &str = "Custom Instruments";
pub const BASE_INSTRUMENTS: &str = "Base Instruments";
pub const DRUM_PRESETS: &str = "Drum Presets";
pub const BASS_PRESETS: &str = "Bass Presets";

/// Instrument types offered as blank presets, in picker order.
const CUSTOM_TYPES: [InstrumentType; 11] = [
    InstrumentType::Chip,
    InstrumentType::Fm,
    InstrumentType::Noise,
    InstrumentType::Spectrum,
    InstrumentType::Drumset,
    InstrumentType::Harmonics,
    InstrumentType::PulseWidth,
    InstrumentType::PickedString,
    InstrumentType::Supersaw,
    InstrumentType::CustomChipWave,
    InstrumentType::Fm6Op,
];

/// The built-in preset table.
///
/// Handles of these presets are stored in song files. Append new presets and
/// categories at the end; moving or removing one changes saved songs.
pub fn stock_definitions() -> Vec<(&'static str, Vec<Preset>)> {
    vec![
        (
            CUSTOM_INSTRUMENTS,
            CUSTOM_TYPES
                .into_iter()
                .map(Preset::for_instrument_type)
                .collect(),
        ),
        (BASE_INSTRUMENTS, base_instruments()),
        (DRUM_PRESETS, drum_presets()),
        (BASS_PRESETS, bass_presets()),
    ]
}

fn with_effects(effects: &[Effect]) -> CommonSettings {
    CommonSettings {
        effects: effects.to_vec(),
        ..CommonSettings::default()
    }
}

fn operators(active: &[FmOperator]) -> Vec<FmOperator> {
    let mut operators = active.to_vec();
    operators.resize(6, FmOperator::default());
    operators
}

fn noise_hit_common(pitch_shift: i8, envelopes: Vec<EnvelopeSettings>) -> CommonSettings {
    CommonSettings {
        transition: Some(Transition::Interrupt),
        clickless_transition: Some(false),
        pitch_shift_semitones: Some(pitch_shift),
        envelopes,
        ..with_effects(&[Effect::Panning, Effect::TransitionType, Effect::PitchShift])
    }
}

fn base_instruments() -> Vec<Preset> {
    vec![
        Preset::new("Square Wave")
            .with_midi_program(80)
            .with_settings(InstrumentSettings::Chip(ChipSettings {
                common: CommonSettings {
                    effects: vec![Effect::Aliasing],
                    transition: Some(Transition::Normal),
                    chord: Some("simultaneous".into()),
                    ..CommonSettings::default()
                },
                wave: "square".into(),
                unison: "none".into(),
            })),
        Preset::new("Square Pulse")
            .with_midi_program(80)
            .with_settings(InstrumentSettings::PulseWidth(PulseWidthSettings {
                common: with_effects(&[Effect::Panning]),
                ..PulseWidthSettings::default()
            })),
        Preset::new("White Noise")
            .with_midi_program(80)
            .with_settings(InstrumentSettings::Noise(NoiseSettings {
                common: with_effects(&[Effect::Panning]),
                wave: "white".into(),
                unison: "none".into(),
            })),
        Preset::new("FM Sine")
            .with_midi_program(55)
            .with_settings(InstrumentSettings::Fm(FmSettings {
                common: CommonSettings {
                    eq_filter_type: true,
                    ..with_effects(&[Effect::Panning])
                },
                algorithm: "1←(2 3 4)".into(),
                feedback_type: "1⟲".into(),
                feedback_amplitude: 0,
                operators: operators(&[FmOperator::new("1×", 15, "sine")]),
            })),
    ]
}

fn drum_presets() -> Vec<Preset> {
    let kick_operators = operators(&[
        FmOperator::new("1×", 15, "pulse width"),
        FmOperator::new("100×", 15, "sine"),
        FmOperator::new("100×", 15, "sine"),
        FmOperator::new("100×", 15, "sine"),
    ]);

    vec![
        Preset::new("C1 Square Kick")
            .with_midi_program(80)
            .with_settings(InstrumentSettings::Fm(FmSettings {
                common: CommonSettings {
                    pitch_shift_semitones: Some(24),
                    envelopes: vec![
                        EnvelopeSettings::new("feedbackAmplitude", "blip", 32.0),
                        EnvelopeSettings::new("operatorAmplitude", "blip", 32.0).with_index(1),
                        EnvelopeSettings::new("operatorAmplitude", "blip", 32.0).with_index(2),
                        EnvelopeSettings::new("operatorAmplitude", "blip", 32.0).with_index(3),
                        EnvelopeSettings::new("pitchShift", "linear", 64.0).with_bounds(0.0, 2.0),
                        EnvelopeSettings::new("noteVolume", "blip", 0.75),
                    ],
                    ..with_effects(&[Effect::Panning, Effect::PitchShift])
                },
                algorithm: "1←(2 3 4)".into(),
                feedback_type: "ALL".into(),
                feedback_amplitude: 15,
                operators: kick_operators.clone(),
            })),
        Preset::new("C2 Snare (Part 1)")
            .with_midi_program(80)
            .with_settings(InstrumentSettings::Fm(FmSettings {
                common: noise_hit_common(
                    24,
                    vec![
                        EnvelopeSettings::new("noteVolume", "decay", 10.0),
                        EnvelopeSettings::new("noteVolume", "blip", 0.3),
                        EnvelopeSettings::new("pitchShift", "linear", 256.0).with_bounds(0.0, 2.0),
                    ],
                ),
                algorithm: "1←(2 3 4)".into(),
                feedback_type: "1⟲".into(),
                feedback_amplitude: 0,
                operators: operators(&[FmOperator::new("1×", 15, "pulse width")]),
            })),
        Preset::new("D3 Snare (Part 2)")
            .with_midi_program(80)
            .with_settings(InstrumentSettings::Noise(NoiseSettings {
                common: noise_hit_common(
                    19,
                    vec![
                        EnvelopeSettings::new("noteVolume", "decay", 10.0),
                        EnvelopeSettings::new("noteVolume", "blip", 0.4),
                        EnvelopeSettings::new("pitchShift", "linear", 64.0),
                        EnvelopeSettings::new("pitchShift", "linear", 24.0),
                    ],
                ),
                wave: "white".into(),
                unison: "none".into(),
            })),
        Preset::new("A4 Hi-Hat")
            .with_midi_program(80)
            .with_settings(InstrumentSettings::Fm(FmSettings {
                common: CommonSettings {
                    eq_filter: vec![FilterPoint::low_pass(13454.34, 2.8284)],
                    envelopes: vec![
                        EnvelopeSettings::new("noteVolume", "decay", 15.0),
                        EnvelopeSettings::new("noteVolume", "punch", 0.0).with_bounds(0.0, 0.5),
                    ],
                    ..with_effects(&[Effect::Panning])
                },
                algorithm: "1←(2 3 4)".into(),
                feedback_type: "ALL".into(),
                feedback_amplitude: 15,
                operators: kick_operators,
            })),
    ]
}

fn bass_presets() -> Vec<Preset> {
    vec![Preset::new("Shocker Bass")
        .with_midi_program(80)
        .with_settings(InstrumentSettings::Fm(FmSettings {
            common: CommonSettings {
                envelopes: vec![
                    EnvelopeSettings::new("operatorAmplitude", "twang", 10.0).with_index(1),
                    EnvelopeSettings::new("operatorAmplitude", "twang", 64.0).with_index(3),
                ],
                ..with_effects(&[Effect::Panning])
            },
            algorithm: "1←(2 3 4)".into(),
            feedback_type: "4⟲".into(),
            feedback_amplitude: 5,
            operators: operators(&[
                FmOperator::new("1×", 15, "sine"),
                FmOperator::new("1×", 13, "sine"),
                FmOperator::new("1×", 3, "sine"),
                FmOperator::new("10×", 9, "sine"),
            ]),
        }))]
}
