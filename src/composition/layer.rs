//! Playback layers
//!
//! Each layer owns a fixed row of recording slots, one of which is active
//! at a time, plus its scrub position and opacity.

use std::path::Path;

use super::{LoadOutcome, RecordingSlot, ScrubPosition};
use crate::recording::Frame;

/// One playback layer.
///
/// Selector and slot numbering are 1-based to match the layer numbering the
/// control surface exposes. Out-of-range selector, scrub and opacity inputs
/// are clamped rather than rejected.
#[derive(Debug, Clone)]
pub struct Layer {
    number: usize,
    slots: Vec<RecordingSlot>,
    active_slot: usize,
    scrub: ScrubPosition,
    opacity: f32,
}

impl Layer {
    /// Create a layer with a fixed number of slots (at least one).
    pub(crate) fn new(number: usize, slot_count: usize) -> Self {
        Self {
            number,
            slots: vec![RecordingSlot::default(); slot_count.max(1)],
            active_slot: 1,
            scrub: ScrubPosition::default(),
            opacity: 1.0,
        }
    }

    /// 1-based layer number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Number of slots (fixed at construction).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Get a slot by its 1-based number.
    pub fn slot(&self, number: usize) -> Option<&RecordingSlot> {
        number.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    /// Get a slot by its 1-based number, mutably.
    pub fn slot_mut(&mut self, number: usize) -> Option<&mut RecordingSlot> {
        number.checked_sub(1).and_then(move |i| self.slots.get_mut(i))
    }

    /// Load a recording into a slot (1-based). Unknown slot numbers load
    /// nothing and report [`LoadOutcome::Cleared`].
    pub fn load_recording(&mut self, slot: usize, path: &Path) -> LoadOutcome {
        match self.slot_mut(slot) {
            Some(slot) => slot.load(path),
            None => {
                log::warn!("layer {} has no slot {}", self.number, slot);
                LoadOutcome::Cleared
            }
        }
    }

    /// Clear a slot (1-based).
    pub fn clear_recording(&mut self, slot: usize) {
        if let Some(slot) = self.slot_mut(slot) {
            slot.clear();
        }
    }

    /// Currently selected slot number (1-based, always valid).
    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    /// Select the active slot. Out-of-range selections clamp into the valid
    /// 1-based range.
    pub fn set_active_slot(&mut self, slot: usize) {
        self.active_slot = slot.clamp(1, self.slots.len());
    }

    /// Scrub position.
    pub fn scrub(&self) -> ScrubPosition {
        self.scrub
    }

    /// Set the scrub position (clamped to [0, 1]).
    pub fn set_scrub(&mut self, position: f32) {
        self.scrub = ScrubPosition::new(position);
    }

    /// Layer opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the layer opacity (clamped to [0, 1]).
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// The active slot's decoded sequence.
    pub fn active_sequence(&self) -> &[Frame] {
        self.slots[self.active_slot - 1].frames()
    }

    /// The frame the scrub position selects in the active sequence, or
    /// `None` when the active slot is empty.
    pub fn current_frame(&self) -> Option<&Frame> {
        let frames = self.active_sequence();
        self.scrub.frame_index(frames.len()).map(|index| &frames[index])
    }
}
