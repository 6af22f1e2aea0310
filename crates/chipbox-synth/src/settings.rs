use serde::{Deserialize, Serialize};

use crate::InstrumentType;

/// Settings document of a preset, tagged by the instrument type it configures.
///
/// Keys the editor does not know are ignored on load so newer song files
/// still open; an unknown `type` tag is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InstrumentSettings {
    #[serde(rename = "chip")]
    Chip(ChipSettings),
    #[serde(rename = "FM")]
    Fm(FmSettings),
    #[serde(rename = "noise")]
    Noise(NoiseSettings),
    #[serde(rename = "spectrum")]
    Spectrum(SpectrumSettings),
    #[serde(rename = "drumset")]
    Drumset(DrumsetSettings),
    #[serde(rename = "harmonics")]
    Harmonics(HarmonicsSettings),
    #[serde(rename = "PWM")]
    PulseWidth(PulseWidthSettings),
    #[serde(rename = "Picked String")]
    PickedString(PickedStringSettings),
    #[serde(rename = "supersaw")]
    Supersaw(SupersawSettings),
    #[serde(rename = "custom chip")]
    CustomChipWave(CustomChipSettings),
    #[serde(rename = "FM6op")]
    Fm6Op(FmSettings),
}

impl InstrumentSettings {
    pub fn instrument_type(&self) -> InstrumentType {
        match self {
            Self::Chip(_) => InstrumentType::Chip,
            Self::Fm(_) => InstrumentType::Fm,
            Self::Noise(_) => InstrumentType::Noise,
            Self::Spectrum(_) => InstrumentType::Spectrum,
            Self::Drumset(_) => InstrumentType::Drumset,
            Self::Harmonics(_) => InstrumentType::Harmonics,
            Self::PulseWidth(_) => InstrumentType::PulseWidth,
            Self::PickedString(_) => InstrumentType::PickedString,
            Self::Supersaw(_) => InstrumentType::Supersaw,
            Self::CustomChipWave(_) => InstrumentType::CustomChipWave,
            Self::Fm6Op(_) => InstrumentType::Fm6Op,
        }
    }

    pub fn common(&self) -> &CommonSettings {
        match self {
            Self::Chip(s) => &s.common,
            Self::Fm(s) | Self::Fm6Op(s) => &s.common,
            Self::Noise(s) => &s.common,
            Self::Spectrum(s) => &s.common,
            Self::Drumset(s) => &s.common,
            Self::Harmonics(s) => &s.common,
            Self::PulseWidth(s) => &s.common,
            Self::PickedString(s) => &s.common,
            Self::Supersaw(s) => &s.common,
            Self::CustomChipWave(s) => &s.common,
        }
    }
}

/// Parameters every instrument type carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonSettings {
    pub volume: f32,
    pub eq_filter: Vec<FilterPoint>,
    /// `true` selects the simple cut/peak EQ instead of the point list.
    pub eq_filter_type: bool,
    pub eq_simple_cut: u8,
    pub eq_simple_peak: u8,
    pub envelope_speed: f32,
    pub discrete_envelope: bool,
    pub effects: Vec<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickless_transition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_shift_semitones: Option<i8>,
    pub pan: i8,
    pub pan_delay: u8,
    pub fade_in_seconds: f32,
    pub fade_out_ticks: i32,
    pub envelopes: Vec<EnvelopeSettings>,
    pub is_drum: bool,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            volume: 0.0,
            eq_filter: Vec::new(),
            eq_filter_type: false,
            eq_simple_cut: 10,
            eq_simple_peak: 0,
            envelope_speed: 12.0,
            discrete_envelope: false,
            effects: Vec::new(),
            transition: None,
            clickless_transition: None,
            chord: None,
            pitch_shift_semitones: None,
            pan: 0,
            pan_delay: 10,
            fade_in_seconds: 0.0,
            fade_out_ticks: -1,
            envelopes: Vec::new(),
            is_drum: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    #[serde(rename = "reverb")]
    Reverb,
    #[serde(rename = "chorus")]
    Chorus,
    #[serde(rename = "echo")]
    Echo,
    #[serde(rename = "distortion")]
    Distortion,
    #[serde(rename = "bitcrusher")]
    Bitcrusher,
    #[serde(rename = "note filter")]
    NoteFilter,
    #[serde(rename = "panning")]
    Panning,
    #[serde(rename = "pitch shift")]
    PitchShift,
    #[serde(rename = "detune")]
    Detune,
    #[serde(rename = "vibrato")]
    Vibrato,
    #[serde(rename = "transition type")]
    TransitionType,
    #[serde(rename = "chord type")]
    ChordType,
    #[serde(rename = "ring modulation")]
    RingModulation,
    #[serde(rename = "granular")]
    Granular,
    #[serde(rename = "aliasing")]
    Aliasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Normal,
    Interrupt,
    Continue,
    Slide,
    #[serde(rename = "slide in pattern")]
    SlideInPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    LowPass,
    HighPass,
    Peak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPoint {
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub cutoff_hz: f32,
    pub linear_gain: f32,
}

impl FilterPoint {
    pub fn low_pass(cutoff_hz: f32, linear_gain: f32) -> Self {
        Self {
            kind: FilterKind::LowPass,
            cutoff_hz,
            linear_gain,
        }
    }
}

/// One envelope routed onto a modulation target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvelopeSettings {
    pub target: String,
    pub envelope: String,
    pub inverse: bool,
    pub per_envelope_speed: f32,
    pub per_envelope_lower_bound: f32,
    pub per_envelope_upper_bound: f32,
    /// Operator or filter index for targets that address one of several slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u8>,
}

impl Default for EnvelopeSettings {
    fn default() -> Self {
        Self {
            target: "noteVolume".into(),
            envelope: "none".into(),
            inverse: false,
            per_envelope_speed: 0.0,
            per_envelope_lower_bound: 0.0,
            per_envelope_upper_bound: 1.0,
            index: None,
        }
    }
}

impl EnvelopeSettings {
    pub fn new(target: impl Into<String>, envelope: impl Into<String>, speed: f32) -> Self {
        Self {
            target: target.into(),
            envelope: envelope.into(),
            per_envelope_speed: speed,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, lower: f32, upper: f32) -> Self {
        self.per_envelope_lower_bound = lower;
        self.per_envelope_upper_bound = upper;
        self
    }

    pub fn with_index(mut self, index: u8) -> Self {
        self.index = Some(index);
        self
    }
}

fn no_unison() -> String {
    "none".into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChipSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub wave: String,
    pub unison: String,
}

impl Default for ChipSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            wave: "square".into(),
            unison: no_unison(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoiseSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub wave: String,
    pub unison: String,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            wave: "retro".into(),
            unison: no_unison(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PulseWidthSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub unison: String,
    pub pulse_width: f32,
    pub decimal_offset: f32,
}

impl Default for PulseWidthSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            unison: no_unison(),
            pulse_width: 50.0,
            decimal_offset: 0.0,
        }
    }
}

/// Operator of the 4-op and 6-op FM engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FmOperator {
    /// Frequency ratio label, e.g. `"1×"`.
    pub frequency: String,
    pub amplitude: u8,
    pub waveform: String,
    pub pulse_width: u8,
}

impl Default for FmOperator {
    fn default() -> Self {
        Self {
            frequency: "1×".into(),
            amplitude: 0,
            waveform: "sine".into(),
            pulse_width: 5,
        }
    }
}

impl FmOperator {
    pub fn new(frequency: impl Into<String>, amplitude: u8, waveform: impl Into<String>) -> Self {
        Self {
            frequency: frequency.into(),
            amplitude,
            waveform: waveform.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FmSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub algorithm: String,
    pub feedback_type: String,
    pub feedback_amplitude: u8,
    pub operators: Vec<FmOperator>,
}

impl Default for FmSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            algorithm: "1←(2 3 4)".into(),
            feedback_type: "1⟲".into(),
            feedback_amplitude: 0,
            operators: vec![FmOperator::default(); 6],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpectrumSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub spectrum: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrumSettings {
    pub filter_envelope: String,
    pub spectrum: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrumsetSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub drums: Vec<DrumSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HarmonicsSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub unison: String,
    pub harmonics: Vec<u8>,
}

impl Default for HarmonicsSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            unison: no_unison(),
            harmonics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickedStringSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub unison: String,
    pub harmonics: Vec<u8>,
    pub string_sustain: u8,
    pub string_sustain_type: String,
}

impl Default for PickedStringSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            unison: no_unison(),
            harmonics: Vec::new(),
            string_sustain: 10,
            string_sustain_type: "acoustic".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupersawSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub pulse_width: f32,
    pub dynamism: f32,
    pub spread: f32,
    pub shape: f32,
}

impl Default for SupersawSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            pulse_width: 50.0,
            dynamism: 67.0,
            spread: 50.0,
            shape: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomChipSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub unison: String,
    pub custom_chip_wave: Vec<i8>,
}

impl Default for CustomChipSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            unison: no_unison(),
            custom_chip_wave: Vec::new(),
        }
    }
}
