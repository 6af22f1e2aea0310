#![no_main]

use chipbox_presets::{stock_catalog, PresetHandle};
use libfuzzer_sys::fuzz_target;

// Handles come from song files and may be arbitrary.
fuzz_target!(|raw: u32| {
    let handle = PresetHandle::from_raw(raw);
    if let Some(preset) = stock_catalog().resolve(handle) {
        assert_eq!(stock_catalog().resolve_by_name(&preset.name), Some(handle));
    }
});
