//! Recording parsing and decoding
//!
//! Reads CSV-encoded DMX recordings into per-channel value series and
//! decodes them into time-indexed frame sequences.

mod csv;
mod sequence;

pub use csv::{read_recording, CsvError, RecordingColumn};
pub use sequence::{channel_in_universe, decode_frames, Frame, CHANNEL_COUNT};
