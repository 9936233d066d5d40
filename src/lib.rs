//! DMX Playback Library
//!
//! Plays back CSV-encoded DMX recordings: recordings decode into
//! time-indexed frame sequences held in a fixed grid of layers and slots,
//! layers composite with highest-takes-precedence blending, and the merged
//! channel state packs into a 32x16 two-plane pixel buffer ready for
//! texture upload by a rendering shell.

pub mod composition;
pub mod control;
pub mod project;
pub mod recording;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use composition::{Composition, Layer, LoadOutcome, RecordingSlot, ScrubPosition};
pub use composition::{NUM_LAYERS, SLOTS_PER_LAYER};
pub use control::{ParamRegistry, ParamTarget};
pub use project::CompositionPreset;
pub use recording::{CsvError, Frame, RecordingColumn, CHANNEL_COUNT};
pub use render::{composite, ChannelBuffer, PixelFrame};
pub use source::DmxPlaybackSource;
