//! Per-tick rendering
//!
//! Composites the layer grid into one channel buffer and packs it into the
//! fixed two-plane pixel grid the playback texture uses.

mod compositor;
mod packer;

pub use compositor::{composite, ChannelBuffer};
pub use packer::{PixelFrame, PIXEL_COLUMNS, PIXEL_DATA_LEN, PIXEL_PLANES, PIXEL_ROWS};
