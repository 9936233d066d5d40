//! Recording slots
//!
//! A slot holds at most one decoded frame sequence and the source path it
//! came from.

use std::path::{Path, PathBuf};

use crate::recording::{self, Frame};

/// Result of loading a recording into a slot.
///
/// Loading never fails: anything that prevents a decode (missing file,
/// malformed content, empty input) clears the slot instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slot now holds a sequence of this many frames.
    Loaded(usize),
    /// The slot is now empty.
    Cleared,
}

/// One recording assignment within a layer.
///
/// The path and the sequence move together: an empty path always means an
/// empty sequence, and a load either replaces both or clears both.
#[derive(Debug, Clone, Default)]
pub struct RecordingSlot {
    path: Option<PathBuf>,
    frames: Vec<Frame>,
}

impl RecordingSlot {
    /// Source path of the loaded recording, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Decoded frame sequence (empty when nothing is loaded).
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Check whether the slot holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Load a recording file into this slot, replacing any previous
    /// sequence.
    ///
    /// An empty path clears the slot. Read and parse failures also clear the
    /// slot and are reported as [`LoadOutcome::Cleared`], never as errors.
    /// The new sequence is decoded in full before the old one is replaced,
    /// so a bad file can never leave partial state behind.
    pub fn load(&mut self, path: &Path) -> LoadOutcome {
        if path.as_os_str().is_empty() {
            self.clear();
            return LoadOutcome::Cleared;
        }

        let columns = match recording::read_recording(path) {
            Ok(columns) => columns,
            Err(err) => {
                log::warn!("clearing slot, could not read {:?}: {}", path, err);
                self.clear();
                return LoadOutcome::Cleared;
            }
        };

        let frames = recording::decode_frames(&columns);
        if frames.is_empty() {
            self.clear();
            return LoadOutcome::Cleared;
        }

        log::info!("loaded {} frames from {:?}", frames.len(), path);
        self.path = Some(path.to_path_buf());
        self.frames = frames;
        LoadOutcome::Loaded(self.frames.len())
    }

    /// Empty the slot.
    pub fn clear(&mut self) {
        self.path = None;
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_recording(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recording.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_well_formed() {
        let (_dir, path) = write_recording("1,2\n10,20\n11,21\n");
        let mut slot = RecordingSlot::default();
        assert_eq!(slot.load(&path), LoadOutcome::Loaded(2));
        assert_eq!(slot.frames().len(), 2);
        assert_eq!(slot.path(), Some(path.as_path()));
    }

    #[test]
    fn test_empty_path_clears() {
        let (_dir, path) = write_recording("1\n10\n");
        let mut slot = RecordingSlot::default();
        slot.load(&path);

        assert_eq!(slot.load(Path::new("")), LoadOutcome::Cleared);
        assert!(slot.is_empty());
        assert!(slot.path().is_none());
    }

    #[test]
    fn test_unreadable_file_clears() {
        let (_dir, path) = write_recording("1\n10\n");
        let mut slot = RecordingSlot::default();
        slot.load(&path);

        let outcome = slot.load(Path::new("/nonexistent/recording.csv"));
        assert_eq!(outcome, LoadOutcome::Cleared);
        assert!(slot.is_empty());
        assert!(slot.path().is_none());
    }

    #[test]
    fn test_malformed_header_clears() {
        let (_dir, path) = write_recording("not,a,header\n1,2,3\n");
        let mut slot = RecordingSlot::default();
        assert_eq!(slot.load(&path), LoadOutcome::Cleared);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_zero_frames_clears() {
        let (_dir, path) = write_recording("1,2\n");
        let mut slot = RecordingSlot::default();
        assert_eq!(slot.load(&path), LoadOutcome::Cleared);
        assert!(slot.is_empty());
        assert!(slot.path().is_none());
    }

    #[test]
    fn test_reload_replaces_sequence() {
        let (_dir, first) = write_recording("1\n10\n11\n12\n");
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("other.csv");
        std::fs::write(&second, "2\n20\n").unwrap();

        let mut slot = RecordingSlot::default();
        assert_eq!(slot.load(&first), LoadOutcome::Loaded(3));
        assert_eq!(slot.load(&second), LoadOutcome::Loaded(1));
        assert_eq!(slot.frames().len(), 1);
        assert_eq!(slot.frames()[0].value(2), Some(20));
        assert_eq!(slot.path(), Some(second.as_path()));
    }
}
