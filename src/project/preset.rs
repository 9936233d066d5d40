//! Composition presets
//!
//! A preset captures the configuration of every layer: slot paths, the
//! active-slot selector, scrub position and opacity.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::composition::Composition;

/// Snapshot of a composition's configuration.
///
/// Frame data is not persisted. Applying a preset re-decodes every recorded
/// path; paths that fail to decode degrade to cleared slots exactly as live
/// loads do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionPreset {
    /// Version of the crate that wrote the preset
    pub version: String,
    /// Per-layer configuration, ascending layer order
    pub layers: Vec<LayerPreset>,
}

/// Per-layer slice of a preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerPreset {
    /// Recording path per slot (None = empty slot)
    pub recordings: Vec<Option<PathBuf>>,
    /// 1-based active-slot selector
    pub active_slot: usize,
    /// Scrub position in [0, 1]
    pub scrub: f32,
    /// Opacity in [0, 1]
    pub opacity: f32,
}

impl CompositionPreset {
    /// Capture a composition's configuration.
    pub fn from_composition(composition: &Composition) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            layers: composition
                .layers()
                .iter()
                .map(|layer| LayerPreset {
                    recordings: (1..=layer.slot_count())
                        .map(|slot| {
                            layer
                                .slot(slot)
                                .and_then(|slot| slot.path())
                                .map(Path::to_path_buf)
                        })
                        .collect(),
                    active_slot: layer.active_slot(),
                    scrub: layer.scrub().get(),
                    opacity: layer.opacity(),
                })
                .collect(),
        }
    }

    /// Apply this preset to a composition, re-decoding every recorded path.
    ///
    /// The composition's grid never resizes: preset layers or slots beyond
    /// its fixed dimensions are ignored.
    pub fn apply_to(&self, composition: &mut Composition) {
        for (index, layer_preset) in self.layers.iter().enumerate() {
            let layer_number = index + 1;
            if composition.layer(layer_number).is_none() {
                log::warn!("preset layer {} has no counterpart, skipping", layer_number);
                continue;
            }
            for (slot_index, recording) in layer_preset.recordings.iter().enumerate() {
                let slot_number = slot_index + 1;
                match recording {
                    Some(path) => {
                        composition.load_recording(layer_number, slot_number, path);
                    }
                    None => composition.clear_recording(layer_number, slot_number),
                }
            }
            if let Some(layer) = composition.layer_mut(layer_number) {
                layer.set_active_slot(layer_preset.active_slot);
                layer.set_scrub(layer_preset.scrub);
                layer.set_opacity(layer_preset.opacity);
            }
        }
    }

    /// Save to a file as pretty JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("saved preset to {:?}", path);
        Ok(())
    }

    /// Load from a file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let preset: Self = serde_json::from_str(&json)?;
        log::info!("loaded preset from {:?}", path);
        Ok(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_apply() {
        let dir = tempfile::tempdir().unwrap();
        let recording = dir.path().join("recording.csv");
        std::fs::write(&recording, "5\n200\n100\n").unwrap();

        let mut original = Composition::with_dimensions(2, 2);
        original.load_recording(1, 2, &recording);
        {
            let layer = original.layer_mut(1).unwrap();
            layer.set_active_slot(2);
            layer.set_scrub(0.5);
            layer.set_opacity(0.25);
        }

        let preset = CompositionPreset::from_composition(&original);
        let mut restored = Composition::with_dimensions(2, 2);
        preset.apply_to(&mut restored);

        let layer = restored.layer(1).unwrap();
        assert_eq!(layer.active_slot(), 2);
        assert_eq!(layer.scrub().get(), 0.5);
        assert_eq!(layer.opacity(), 0.25);
        assert_eq!(layer.slot(2).unwrap().frames().len(), 2);
        assert!(layer.slot(1).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let recording = dir.path().join("recording.csv");
        std::fs::write(&recording, "1\n10\n").unwrap();

        let mut comp = Composition::with_dimensions(2, 2);
        comp.load_recording(2, 1, &recording);
        comp.layer_mut(2).unwrap().set_opacity(0.75);

        let preset_path = dir.path().join("show.json");
        CompositionPreset::from_composition(&comp)
            .save(&preset_path)
            .unwrap();

        let loaded = CompositionPreset::load(&preset_path).unwrap();
        let mut restored = Composition::with_dimensions(2, 2);
        loaded.apply_to(&mut restored);

        assert_eq!(restored.layer(2).unwrap().opacity(), 0.75);
        assert_eq!(restored.layer(2).unwrap().slot(1).unwrap().frames().len(), 1);
    }

    #[test]
    fn test_missing_recording_degrades_to_cleared_slot() {
        let preset = CompositionPreset {
            version: "0".to_string(),
            layers: vec![LayerPreset {
                recordings: vec![Some(PathBuf::from("/nonexistent/recording.csv")), None],
                active_slot: 1,
                scrub: 0.0,
                opacity: 1.0,
            }],
        };

        let mut comp = Composition::with_dimensions(1, 2);
        preset.apply_to(&mut comp);
        assert!(comp.layer(1).unwrap().slot(1).unwrap().is_empty());
    }

    #[test]
    fn test_oversized_preset_is_ignored_beyond_grid() {
        let layer = LayerPreset {
            recordings: vec![None; 4],
            active_slot: 1,
            scrub: 0.0,
            opacity: 0.5,
        };
        let preset = CompositionPreset {
            version: "0".to_string(),
            layers: vec![layer.clone(), layer.clone(), layer],
        };

        let mut comp = Composition::with_dimensions(2, 2);
        preset.apply_to(&mut comp);
        assert_eq!(comp.layer_count(), 2);
        assert_eq!(comp.layer(1).unwrap().slot_count(), 2);
        assert_eq!(comp.layer(1).unwrap().opacity(), 0.5);
    }
}
