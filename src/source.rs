//! Engine facade
//!
//! Owns the layer grid and its parameter table, and produces the packed
//! output frame each tick.

use std::path::Path;

use crate::composition::{Composition, LoadOutcome, NUM_LAYERS, SLOTS_PER_LAYER};
use crate::control::{ParamRegistry, ParamTarget};
use crate::render::{self, PixelFrame};

/// The DMX playback source: a layer grid plus its parameter surface.
///
/// A hosting shell configures the source between ticks (recording paths,
/// selectors, scrub, opacity) and calls [`render_tick`](Self::render_tick)
/// once per frame. All operations are synchronous and run on the calling
/// thread.
#[derive(Debug, Clone)]
pub struct DmxPlaybackSource {
    composition: Composition,
    params: ParamRegistry,
}

impl Default for DmxPlaybackSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DmxPlaybackSource {
    /// Create a source with the default 16x10 layer grid.
    pub fn new() -> Self {
        Self::with_dimensions(NUM_LAYERS, SLOTS_PER_LAYER)
    }

    /// Create a source with an explicit grid.
    pub fn with_dimensions(layer_count: usize, slots_per_layer: usize) -> Self {
        Self {
            composition: Composition::with_dimensions(layer_count, slots_per_layer),
            params: ParamRegistry::new(layer_count, slots_per_layer),
        }
    }

    /// The underlying composition.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// The underlying composition, mutably.
    pub fn composition_mut(&mut self) -> &mut Composition {
        &mut self.composition
    }

    /// The parameter table.
    pub fn params(&self) -> &ParamRegistry {
        &self.params
    }

    /// Load a recording into a layer's slot (both 1-based).
    pub fn load_recording(&mut self, layer: usize, slot: usize, path: &Path) -> LoadOutcome {
        self.composition.load_recording(layer, slot, path)
    }

    /// Set a float-typed parameter by ID.
    ///
    /// Returns false for unknown IDs and for text-typed targets.
    pub fn set_float(&mut self, id: u32, value: f32) -> bool {
        let Some(target) = self.params.target(id) else {
            return false;
        };
        match target {
            ParamTarget::ActiveSlot { layer } => {
                if let Some(layer) = self.composition.layer_mut(layer) {
                    layer.set_active_slot(value as usize);
                }
                true
            }
            ParamTarget::Scrub { layer } => {
                if let Some(layer) = self.composition.layer_mut(layer) {
                    layer.set_scrub(value);
                }
                true
            }
            ParamTarget::Opacity { layer } => {
                if let Some(layer) = self.composition.layer_mut(layer) {
                    layer.set_opacity(value);
                }
                true
            }
            ParamTarget::RecordingPath { .. } => false,
        }
    }

    /// Get a float-typed parameter by ID.
    pub fn get_float(&self, id: u32) -> Option<f32> {
        match self.params.target(id)? {
            ParamTarget::ActiveSlot { layer } => self
                .composition
                .layer(layer)
                .map(|layer| layer.active_slot() as f32),
            ParamTarget::Scrub { layer } => {
                self.composition.layer(layer).map(|layer| layer.scrub().get())
            }
            ParamTarget::Opacity { layer } => {
                self.composition.layer(layer).map(|layer| layer.opacity())
            }
            ParamTarget::RecordingPath { .. } => None,
        }
    }

    /// Set a text-typed parameter by ID (recording paths).
    ///
    /// An empty value clears the slot. Returns `None` for unknown IDs and
    /// for float-typed targets.
    pub fn set_text(&mut self, id: u32, value: &str) -> Option<LoadOutcome> {
        match self.params.target(id)? {
            ParamTarget::RecordingPath { layer, slot } => {
                Some(self.composition.load_recording(layer, slot, Path::new(value)))
            }
            _ => None,
        }
    }

    /// Get a text-typed parameter by ID: the recorded path, empty when the
    /// slot is clear.
    pub fn get_text(&self, id: u32) -> Option<String> {
        match self.params.target(id)? {
            ParamTarget::RecordingPath { layer, slot } => Some(
                self.composition
                    .layer(layer)
                    .and_then(|layer| layer.slot(slot))
                    .and_then(|slot| slot.path())
                    .map(|path| path.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Render one tick: composite every layer and pack the result.
    pub fn render_tick(&self) -> PixelFrame {
        PixelFrame::pack(&render::composite(&self.composition))
    }
}
