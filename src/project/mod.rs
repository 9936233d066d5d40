//! Preset save/load
//!
//! Persists the composition's configuration as JSON and re-decodes
//! recordings when a preset is applied.

mod preset;

pub use preset::{CompositionPreset, LayerPreset};
