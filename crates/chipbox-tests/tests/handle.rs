use chipbox_presets::{stock_catalog, PresetHandle, MAX_CATEGORY_INDEX, MAX_PRESETS_PER_CATEGORY};
use chipbox_tests::grid_catalog;
use proptest::prelude::*;

proptest! {
    #[test]
    fn encode_then_decode_is_identity(category in 0..=MAX_CATEGORY_INDEX, preset in 0u32..64) {
        let handle = PresetHandle::encode(category, preset);
        prop_assert_eq!(handle.decode(), (category, preset));
        prop_assert_eq!(PresetHandle::new(category, preset), Some(handle));
    }

    #[test]
    fn checked_encode_rejects_wide_preset_index(category in 0..=MAX_CATEGORY_INDEX, preset in 64u32..) {
        prop_assert_eq!(PresetHandle::new(category, preset), None);
    }

    #[test]
    fn resolve_never_panics(raw in any::<u32>()) {
        let catalog = stock_catalog();
        let (category, preset) = PresetHandle::from_raw(raw).decode();
        let in_range = catalog
            .category(category as usize)
            .is_some_and(|c| (preset as usize) < c.presets.len());
        prop_assert_eq!(catalog.resolve(PresetHandle::from_raw(raw)).is_some(), in_range);
    }

    #[test]
    fn resolve_matches_grid_position(
        categories in 1usize..6,
        presets in 1usize..=MAX_PRESETS_PER_CATEGORY,
        pick in any::<(usize, usize)>(),
    ) {
        let catalog = grid_catalog(categories, presets);
        let (category, preset) = (pick.0 % categories, pick.1 % presets);
        let handle = PresetHandle::encode(category as u32, preset as u32);
        let resolved = catalog.resolve(handle).map(|p| p.name.clone());
        prop_assert_eq!(resolved, Some(format!("Preset {category}.{preset}")));
    }
}

#[test]
fn every_stock_position_resolves_to_itself() {
    let catalog = stock_catalog();
    for (category_index, category) in catalog.categories().iter().enumerate() {
        for (preset_index, preset) in category.presets.iter().enumerate() {
            let handle = PresetHandle::encode(category_index as u32, preset_index as u32);
            assert_eq!(catalog.resolve(handle), Some(preset));
        }
    }
}

#[test]
fn every_stock_name_round_trips_through_its_handle() {
    let catalog = stock_catalog();
    for (_, _, preset) in catalog.entries() {
        let handle = catalog
            .resolve_by_name(&preset.name)
            .unwrap_or_else(|| panic!("no handle for {}", preset.name));
        assert_eq!(catalog.resolve(handle), Some(preset));
    }
}

#[test]
fn out_of_range_positions_are_absent() {
    let catalog = stock_catalog();
    let past_last_category = PresetHandle::encode(catalog.len() as u32, 0);
    assert_eq!(catalog.resolve(past_last_category), None);
    assert_eq!(
        PresetHandle::new(0, 64).and_then(|handle| catalog.resolve(handle)),
        None
    );
    let full = grid_catalog(1, MAX_PRESETS_PER_CATEGORY);
    assert_eq!(full.resolve(PresetHandle::encode(1, 0)), None);
}
