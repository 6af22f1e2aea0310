use chipbox_synth::{InstrumentSettings, InstrumentType};
use serde::{Deserialize, Serialize};

use crate::dictionary::{DictionaryError, Named, NamedOrdinalDictionary};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A named, ready-made instrument configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_noise: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_mod: bool,
    /// Whether `midi_program` may be used when importing General MIDI files.
    #[serde(default, skip_serializing_if = "is_false")]
    pub general_midi: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi_program: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi_subharmonic_octaves: Option<i8>,
    /// Set on the blank presets that create an instrument of the given type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<InstrumentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<InstrumentSettings>,
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_noise: false,
            is_mod: false,
            general_midi: false,
            midi_program: None,
            midi_subharmonic_octaves: None,
            custom_type: None,
            settings: None,
        }
    }

    /// Blank preset for an instrument type, named after the type's display name.
    pub fn for_instrument_type(ty: InstrumentType) -> Self {
        let mut preset = Self::new(ty.preset_name());
        preset.custom_type = Some(ty);
        preset.is_mod = ty == InstrumentType::Mod;
        preset
    }

    pub fn with_midi_program(mut self, program: u8) -> Self {
        self.midi_program = Some(program);
        self
    }

    /// Marks the preset as meant for noise channels.
    pub fn with_noise(mut self) -> Self {
        self.is_noise = true;
        self
    }

    pub fn with_general_midi(mut self) -> Self {
        self.general_midi = true;
        self
    }

    pub fn with_subharmonic_octaves(mut self, octaves: i8) -> Self {
        self.midi_subharmonic_octaves = Some(octaves);
        self
    }

    pub fn with_settings(mut self, settings: InstrumentSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Instrument type this preset produces, from its custom type or settings.
    pub fn instrument_type(&self) -> Option<InstrumentType> {
        self.custom_type
            .or_else(|| self.settings.as_ref().map(InstrumentSettings::instrument_type))
    }
}

impl Named for Preset {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Named group of presets shown together in the instrument picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetCategory {
    pub name: String,
    pub presets: NamedOrdinalDictionary<Preset>,
}

impl PresetCategory {
    pub fn new(name: impl Into<String>, presets: Vec<Preset>) -> Result<Self, DictionaryError> {
        Ok(Self {
            name: name.into(),
            presets: NamedOrdinalDictionary::new(presets)?,
        })
    }
}

impl Named for PresetCategory {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use chipbox_synth::{InstrumentSettings, NoiseSettings};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_presets_take_the_type_display_name() {
        let preset = Preset::for_instrument_type(InstrumentType::Drumset);
        assert_eq!(preset.name, "drum set");
        assert_eq!(preset.custom_type, Some(InstrumentType::Drumset));
        assert!(!preset.is_noise);
        assert!(!preset.is_mod);
        assert!(Preset::for_instrument_type(InstrumentType::Mod).is_mod);
    }

    #[test]
    fn noise_flag_is_set_only_explicitly() {
        let preset = Preset::new("Static")
            .with_settings(InstrumentSettings::Noise(NoiseSettings::default()));
        assert!(!preset.is_noise);
        assert_eq!(preset.instrument_type(), Some(InstrumentType::Noise));
        assert!(preset.with_noise().is_noise);
    }

    #[test]
    fn noise_flag_survives_json_as_written() {
        let preset: Preset =
            serde_json::from_str(r#"{"name":"n","settings":{"type":"noise"}}"#).unwrap();
        assert!(!preset.is_noise);
        let flagged: Preset =
            serde_json::from_str(r#"{"name":"n","isNoise":true,"settings":{"type":"chip"}}"#)
                .unwrap();
        assert!(flagged.is_noise);
        assert_eq!(
            serde_json::to_value(&flagged).unwrap()["isNoise"],
            serde_json::json!(true)
        );
    }

    #[test]
    fn omits_unset_flags_when_serialized() {
        let json = serde_json::to_string(&Preset::new("Lead").with_midi_program(80)).unwrap();
        assert_eq!(json, r#"{"name":"Lead","midiProgram":80}"#);
        let preset: Preset = serde_json::from_str(&json).unwrap();
        assert!(!preset.general_midi);
    }

    #[test]
    fn category_rejects_duplicate_presets() {
        let err = PresetCategory::new("Leads", vec![Preset::new("Lead"), Preset::new("Lead")])
            .unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateName { second: 1, .. }));
    }
}
