//! Highest-takes-precedence compositor
//!
//! Merges the current frame of every layer into one 512-channel buffer each
//! tick.

use crate::composition::Composition;
use crate::recording::{channel_in_universe, CHANNEL_COUNT};

/// Merged per-channel state for one tick.
///
/// `present` records which channels were written by any layer this tick.
/// Downstream rendering uses it to tell recorded channels apart from
/// channels no recording addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBuffer {
    values: [u8; CHANNEL_COUNT],
    present: [bool; CHANNEL_COUNT],
}

impl Default for ChannelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelBuffer {
    /// Create a buffer with every channel at 0 and absent.
    pub fn new() -> Self {
        Self {
            values: [0; CHANNEL_COUNT],
            present: [false; CHANNEL_COUNT],
        }
    }

    fn index(channel: u16) -> Option<usize> {
        channel_in_universe(channel).then(|| channel as usize - 1)
    }

    /// Merged value for a channel (1-based); 0 for out-of-range channels.
    pub fn value(&self, channel: u16) -> u8 {
        Self::index(channel).map(|i| self.values[i]).unwrap_or(0)
    }

    /// Whether any layer wrote the channel this tick.
    pub fn is_present(&self, channel: u16) -> bool {
        Self::index(channel).map(|i| self.present[i]).unwrap_or(false)
    }

    /// HTP merge of one channel value.
    ///
    /// Overwrites only on strict improvement, so the highest value across
    /// layers wins and ties keep the first writer.
    pub fn blend_htp(&mut self, channel: u16, value: u8) {
        let Some(i) = Self::index(channel) else {
            return;
        };
        if value > self.values[i] {
            self.values[i] = value;
            self.present[i] = true;
        }
    }

    pub(crate) fn set(&mut self, channel: u16, value: u8, present: bool) {
        if let Some(i) = Self::index(channel) {
            self.values[i] = value;
            self.present[i] = present;
        }
    }
}

/// Composite all layers for the current tick.
///
/// Starts from a zeroed buffer and visits layers in ascending layer order.
/// Each recorded channel value is scaled by the layer's opacity with a
/// truncating cast, matching the 8-bit data format, before the HTP merge.
/// Layers whose active slot holds no frames contribute nothing.
pub fn composite(composition: &Composition) -> ChannelBuffer {
    let mut merged = ChannelBuffer::new();

    for layer in composition.layers() {
        let Some(frame) = layer.current_frame() else {
            continue;
        };
        for (channel, raw) in frame.iter() {
            let scaled = (raw as f32 * layer.opacity()) as u8;
            merged.blend_htp(channel, scaled);
        }
    }

    merged
}
