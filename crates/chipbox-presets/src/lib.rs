//! Preset catalog of the ChipBox editor.
//!
//! Presets are grouped in named categories and addressed by a packed
//! [`PresetHandle`], the integer song files store for an instrument's preset.

mod catalog;
mod dictionary;
mod editor;
mod entry;
mod handle;
pub mod stock;

pub use catalog::*;
pub use dictionary::*;
pub use editor::*;
pub use entry::*;
pub use handle::*;
