//! Layer-based playback composition
//!
//! Provides the fixed grid of layers and recording slots that the
//! compositor reads each tick.

mod layer;
mod playback;
mod slot;

pub use layer::Layer;
pub use playback::ScrubPosition;
pub use slot::{LoadOutcome, RecordingSlot};

use std::path::Path;

/// Number of layers in the default configuration.
pub const NUM_LAYERS: usize = 16;
/// Number of recording slots per layer in the default configuration.
pub const SLOTS_PER_LAYER: usize = 10;

/// The fixed grid of layers that recordings play back on.
///
/// Layer count and per-layer slot count are fixed at construction and never
/// change at runtime.
#[derive(Debug, Clone)]
pub struct Composition {
    layers: Vec<Layer>,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition {
    /// Create a composition with the default 16 layers x 10 slots.
    pub fn new() -> Self {
        Self::with_dimensions(NUM_LAYERS, SLOTS_PER_LAYER)
    }

    /// Create a composition with explicit dimensions.
    pub fn with_dimensions(layer_count: usize, slots_per_layer: usize) -> Self {
        let layers = (1..=layer_count)
            .map(|number| Layer::new(number, slots_per_layer))
            .collect();
        Self { layers }
    }

    /// Layers in ascending layer-number order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Get a layer by its 1-based number.
    pub fn layer(&self, number: usize) -> Option<&Layer> {
        number.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    /// Get a layer by its 1-based number, mutably.
    pub fn layer_mut(&mut self, number: usize) -> Option<&mut Layer> {
        number.checked_sub(1).and_then(move |i| self.layers.get_mut(i))
    }

    /// Load a recording file into a layer's slot (both 1-based).
    ///
    /// An empty path clears the slot. Unknown layer numbers load nothing and
    /// report [`LoadOutcome::Cleared`].
    pub fn load_recording(&mut self, layer: usize, slot: usize, path: &Path) -> LoadOutcome {
        match self.layer_mut(layer) {
            Some(layer) => layer.load_recording(slot, path),
            None => {
                log::warn!("no layer {} to load a recording into", layer);
                LoadOutcome::Cleared
            }
        }
    }

    /// Clear a layer's slot (both 1-based).
    pub fn clear_recording(&mut self, layer: usize, slot: usize) {
        if let Some(layer) = self.layer_mut(layer) {
            layer.clear_recording(slot);
        }
    }
}
