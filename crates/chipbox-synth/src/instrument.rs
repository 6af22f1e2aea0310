use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of synthesizer backing an instrument.
///
/// The discriminants match the numeric type ids written into song data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    #[serde(rename = "chip")]
    Chip = 0,
    #[serde(rename = "FM")]
    Fm = 1,
    #[serde(rename = "noise")]
    Noise = 2,
    #[serde(rename = "spectrum")]
    Spectrum = 3,
    #[serde(rename = "drumset")]
    Drumset = 4,
    #[serde(rename = "harmonics")]
    Harmonics = 5,
    #[serde(rename = "PWM")]
    PulseWidth = 6,
    #[serde(rename = "Picked String")]
    PickedString = 7,
    #[serde(rename = "supersaw")]
    Supersaw = 8,
    #[serde(rename = "custom chip")]
    CustomChipWave = 9,
    #[serde(rename = "mod")]
    Mod = 10,
    #[serde(rename = "FM6op")]
    Fm6Op = 11,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown instrument type: {0}")]
pub struct UnknownInstrumentType(pub String);

impl InstrumentType {
    pub const ALL: [InstrumentType; 12] = [
        Self::Chip,
        Self::Fm,
        Self::Noise,
        Self::Spectrum,
        Self::Drumset,
        Self::Harmonics,
        Self::PulseWidth,
        Self::PickedString,
        Self::Supersaw,
        Self::CustomChipWave,
        Self::Mod,
        Self::Fm6Op,
    ];

    /// Name used for the `type` key of a settings document.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Chip => "chip",
            Self::Fm => "FM",
            Self::Noise => "noise",
            Self::Spectrum => "spectrum",
            Self::Drumset => "drumset",
            Self::Harmonics => "harmonics",
            Self::PulseWidth => "PWM",
            Self::PickedString => "Picked String",
            Self::Supersaw => "supersaw",
            Self::CustomChipWave => "custom chip",
            Self::Mod => "mod",
            Self::Fm6Op => "FM6op",
        }
    }

    /// Display name of the blank preset that creates an instrument of this type.
    ///
    /// The preset catalog keys its custom instrument presets by these names.
    pub fn preset_name(self) -> &'static str {
        match self {
            Self::Chip => "chip",
            Self::Fm => "FM (analog)",
            Self::Noise => "noise",
            Self::Spectrum => "spectrum",
            Self::Drumset => "drum set",
            Self::Harmonics => "harmonics",
            Self::PulseWidth => "pulse width",
            Self::PickedString => "picked string",
            Self::Supersaw => "supersaw",
            Self::CustomChipWave => "chip (custom)",
            Self::Mod => "mod",
            Self::Fm6Op => "FM (6-op)",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for InstrumentType {
    type Err = UnknownInstrumentType;

    /// Accepts either the settings type name or the preset display name,
    /// ignoring ASCII case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| {
                ty.type_name().eq_ignore_ascii_case(value)
                    || ty.preset_name().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| UnknownInstrumentType(value.to_owned()))
    }
}
