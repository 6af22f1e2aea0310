//! Synthesis configuration shared between the ChipBox editor and its preset catalog.
//!
//! This crate owns the instrument type tags, the display names the editor
//! shows for each of them, and the typed settings documents that presets carry.

mod instrument;
mod settings;

pub use instrument::*;
pub use settings::*;
