use chipbox_synth::InstrumentType;
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::dictionary::{DictionaryError, NamedOrdinalDictionary};
use crate::entry::{Preset, PresetCategory};
use crate::handle::{PresetHandle, MAX_CATEGORY_INDEX, MAX_PRESETS_PER_CATEGORY};
use crate::stock;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid preset catalog: {0}")]
    Dictionary(#[from] DictionaryError),
    #[error(
        "category '{category}' holds {count} presets, the limit is {}",
        MAX_PRESETS_PER_CATEGORY
    )]
    CategoryOverflow { category: String, count: usize },
    #[error("catalog holds {0} categories, more than a preset handle can address")]
    TooManyCategories(usize),
    #[error("failed to parse preset catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Two-level preset catalog: categories, each holding its own presets.
///
/// Positions in the catalog are addressed with [`PresetHandle`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    categories: NamedOrdinalDictionary<PresetCategory>,
}

static STOCK_CATALOG: Lazy<PresetCatalog> = Lazy::new(|| {
    let catalog = PresetCatalog::build(stock::stock_definitions())
        .unwrap_or_else(|err| panic!("built-in preset table is malformed: {err}"));
    debug!(
        categories = catalog.len(),
        presets = catalog.preset_count(),
        "built stock preset catalog"
    );
    catalog
});

/// The built-in catalog, built on first access.
pub fn stock_catalog() -> &'static PresetCatalog {
    &STOCK_CATALOG
}

impl PresetCatalog {
    pub fn new(categories: Vec<PresetCategory>) -> Result<Self, CatalogError> {
        if categories.len() > MAX_CATEGORY_INDEX as usize + 1 {
            return Err(CatalogError::TooManyCategories(categories.len()));
        }
        if let Some(category) = categories
            .iter()
            .find(|category| category.presets.len() > MAX_PRESETS_PER_CATEGORY)
        {
            return Err(CatalogError::CategoryOverflow {
                category: category.name.clone(),
                count: category.presets.len(),
            });
        }
        Ok(Self {
            categories: NamedOrdinalDictionary::new(categories)?,
        })
    }

    /// Builds a catalog from `(category name, presets)` pairs in handle order.
    pub fn build<I, S>(definitions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, Vec<Preset>)>,
        S: Into<String>,
    {
        let categories = definitions
            .into_iter()
            .map(|(name, presets)| PresetCategory::new(name, presets))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    /// Parses a JSON array of categories.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<PresetCategory> = serde_json::from_str(raw)?;
        Self::new(categories)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.categories)?)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn preset_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.presets.len())
            .sum()
    }

    pub fn categories(&self) -> &NamedOrdinalDictionary<PresetCategory> {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&PresetCategory> {
        self.categories.by_ordinal(index)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&PresetCategory> {
        self.categories.by_name(name)
    }

    /// Every preset with its handle and category, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (PresetHandle, &PresetCategory, &Preset)> {
        // Both indices were range checked in `new`, so the casts are lossless.
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(category_index, category)| {
                category
                    .presets
                    .iter()
                    .enumerate()
                    .map(move |(preset_index, preset)| {
                        let handle =
                            PresetHandle::encode(category_index as u32, preset_index as u32);
                        (handle, category, preset)
                    })
            })
    }

    /// Looks up the preset a handle points at, if the position exists.
    pub fn resolve(&self, handle: PresetHandle) -> Option<&Preset> {
        let (category_index, preset_index) = handle.decode();
        let category = self
            .categories
            .by_ordinal(usize::try_from(category_index).ok()?)?;
        category
            .presets
            .by_ordinal(usize::try_from(preset_index).ok()?)
    }

    /// Handle of the first General MIDI preset mapped to `program`.
    ///
    /// Earlier categories and presets win when several presets share a program.
    pub fn resolve_by_midi_program(&self, program: u8) -> Option<PresetHandle> {
        self.entries()
            .find(|(_, _, preset)| preset.general_midi && preset.midi_program == Some(program))
            .map(|(handle, _, _)| handle)
    }

    /// Handle of the first preset named exactly `name`.
    pub fn resolve_by_name(&self, name: &str) -> Option<PresetHandle> {
        self.entries()
            .find(|(_, _, preset)| preset.name == name)
            .map(|(handle, _, _)| handle)
    }

    /// Blank preset for an instrument type, taken from the first category.
    pub fn instrument_to_preset(&self, ty: InstrumentType) -> Option<&Preset> {
        self.categories
            .by_ordinal(0)?
            .presets
            .by_name(ty.preset_name())
    }
}
