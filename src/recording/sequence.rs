//! Frame sequences
//!
//! Decodes parsed recording columns into time-indexed frames over the
//! 512-channel DMX universe.

use std::collections::HashMap;

use super::RecordingColumn;

/// Number of addressable channels in one DMX universe.
pub const CHANNEL_COUNT: usize = 512;

/// Check whether a channel index lies inside the 1..=512 universe.
pub fn channel_in_universe(channel: u16) -> bool {
    (1..=CHANNEL_COUNT as u16).contains(&channel)
}

/// One recorded time step: the channels that had a recorded value and their
/// intensities. Channels absent from the recording are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    channels: HashMap<u16, u8>,
}

impl Frame {
    /// Get the recorded value for a channel, if any.
    pub fn value(&self, channel: u16) -> Option<u8> {
        self.channels.get(&channel).copied()
    }

    /// Iterate over (channel, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.channels.iter().map(|(&channel, &value)| (channel, value))
    }

    /// Number of recorded channels in this frame.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Check whether the frame records no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl FromIterator<(u16, u8)> for Frame {
    fn from_iter<I: IntoIterator<Item = (u16, u8)>>(iter: I) -> Self {
        Self {
            channels: iter.into_iter().collect(),
        }
    }
}

/// Decode parsed columns into a frame sequence.
///
/// The frame count is taken from the first column's series length. Columns
/// whose channel index lies outside the 1..=512 universe are dropped
/// entirely, never appearing in any frame.
pub fn decode_frames(columns: &[RecordingColumn]) -> Vec<Frame> {
    let Some(first) = columns.first() else {
        return Vec::new();
    };

    (0..first.values.len())
        .map(|t| {
            columns
                .iter()
                .filter(|column| channel_in_universe(column.channel))
                .filter_map(|column| column.values.get(t).map(|&value| (column.channel, value)))
                .collect()
        })
        .collect()
}
