use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of low bits holding the preset index.
pub const PRESET_INDEX_BITS: u32 = 6;
pub const PRESET_INDEX_MASK: u32 = (1 << PRESET_INDEX_BITS) - 1;
/// Hard limit on presets per category imposed by the handle layout.
pub const MAX_PRESETS_PER_CATEGORY: usize = 1 << PRESET_INDEX_BITS;
pub const MAX_CATEGORY_INDEX: u32 = u32::MAX >> PRESET_INDEX_BITS;

/// Packed `(category, preset)` position in a [`crate::PresetCatalog`].
///
/// Song files and the instrument picker store this integer directly, so the
/// layout is frozen: the preset index lives in the low 6 bits and the category
/// index in the remaining high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetHandle(u32);

impl PresetHandle {
    /// Packs a position without range checks.
    ///
    /// A preset index of 64 or more wraps into the low bits and aliases another
    /// preset of the same category; use [`PresetHandle::new`] when the indices
    /// are not already known to be in range.
    pub const fn encode(category_index: u32, preset_index: u32) -> Self {
        Self((category_index << PRESET_INDEX_BITS) | (preset_index & PRESET_INDEX_MASK))
    }

    /// Packs a position, returning `None` if either index does not fit.
    pub const fn new(category_index: u32, preset_index: u32) -> Option<Self> {
        if preset_index > PRESET_INDEX_MASK || category_index > MAX_CATEGORY_INDEX {
            None
        } else {
            Some(Self::encode(category_index, preset_index))
        }
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn decode(self) -> (u32, u32) {
        (self.category_index(), self.preset_index())
    }

    pub const fn category_index(self) -> u32 {
        self.0 >> PRESET_INDEX_BITS
    }

    pub const fn preset_index(self) -> u32 {
        self.0 & PRESET_INDEX_MASK
    }
}

impl From<u32> for PresetHandle {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<PresetHandle> for u32 {
    fn from(handle: PresetHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for PresetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn packs_category_above_preset_bits() {
        assert_eq!(PresetHandle::encode(1, 0).raw(), 64);
        assert_eq!(PresetHandle::encode(3, 5).raw(), 197);
        assert_eq!(PresetHandle::from_raw(197).decode(), (3, 5));
    }

    #[test]
    fn unchecked_encode_masks_preset_index() {
        assert_eq!(PresetHandle::encode(0, 64), PresetHandle::encode(0, 0));
        assert_eq!(PresetHandle::encode(2, 65).decode(), (2, 1));
    }

    #[test]
    fn checked_encode_rejects_out_of_range_indices() {
        assert_eq!(PresetHandle::new(0, 63), Some(PresetHandle::from_raw(63)));
        assert_eq!(PresetHandle::new(0, 64), None);
        assert_eq!(
            PresetHandle::new(MAX_CATEGORY_INDEX, 0).map(PresetHandle::category_index),
            Some(MAX_CATEGORY_INDEX)
        );
        assert_eq!(PresetHandle::new(MAX_CATEGORY_INDEX + 1, 0), None);
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&PresetHandle::encode(2, 3)).unwrap();
        assert_eq!(json, "131");
        let handle: PresetHandle = serde_json::from_str("131").unwrap();
        assert_eq!(handle.decode(), (2, 3));
    }
}
