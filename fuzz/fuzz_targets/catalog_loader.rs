#![no_main]

use chipbox_presets::{PresetCatalog, PresetHandle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(catalog) = PresetCatalog::from_json(raw) {
        for (handle, _, preset) in catalog.entries() {
            assert_eq!(catalog.resolve(handle), Some(preset));
            assert!(catalog.resolve_by_name(&preset.name).is_some());
        }
        let _ = catalog.resolve(PresetHandle::encode(catalog.len() as u32, 0));
    }
});
