//! Integer-ID parameter surface
//!
//! A hosting shell drives the engine through contiguous integer parameter
//! IDs assigned from 0: for each layer, one recording-path parameter per
//! slot, then the layer's active-slot, scrub and opacity parameters. The
//! table is dense, so an ID resolves to its target without scanning.

/// What a parameter ID addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamTarget {
    /// Recording file path for a layer's slot (text parameter).
    RecordingPath { layer: usize, slot: usize },
    /// Active-slot selector for a layer (float parameter, 1-based value).
    ActiveSlot { layer: usize },
    /// Scrub position for a layer (float parameter in [0, 1]).
    Scrub { layer: usize },
    /// Opacity for a layer (float parameter in [0, 1]).
    Opacity { layer: usize },
}

/// Dense parameter table: the ID is the index.
///
/// IDs are assigned contiguously starting at 0 and never reused within one
/// engine instance.
#[derive(Debug, Clone)]
pub struct ParamRegistry {
    targets: Vec<ParamTarget>,
}

impl ParamRegistry {
    /// Build the table for a layer grid, in layer order.
    pub fn new(layer_count: usize, slots_per_layer: usize) -> Self {
        let mut targets = Vec::with_capacity(layer_count * (slots_per_layer + 3));
        for layer in 1..=layer_count {
            for slot in 1..=slots_per_layer {
                targets.push(ParamTarget::RecordingPath { layer, slot });
            }
            targets.push(ParamTarget::ActiveSlot { layer });
            targets.push(ParamTarget::Scrub { layer });
            targets.push(ParamTarget::Opacity { layer });
        }
        Self { targets }
    }

    /// Number of assigned IDs.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check whether the table has no parameters.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Resolve an ID to its target.
    pub fn target(&self, id: u32) -> Option<ParamTarget> {
        self.targets.get(id as usize).copied()
    }

    /// Display name for a parameter.
    pub fn name(&self, id: u32) -> Option<String> {
        self.target(id).map(|target| match target {
            ParamTarget::RecordingPath { layer, slot } => format!("Recording {}.{}", layer, slot),
            ParamTarget::ActiveSlot { layer } => format!("L{} active slot", layer),
            ParamTarget::Scrub { layer } => format!("L{} frame", layer),
            ParamTarget::Opacity { layer } => format!("L{} opacity", layer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_contiguous_in_layer_order() {
        let registry = ParamRegistry::new(2, 3);
        assert_eq!(registry.len(), 12);

        assert_eq!(
            registry.target(0),
            Some(ParamTarget::RecordingPath { layer: 1, slot: 1 })
        );
        assert_eq!(
            registry.target(2),
            Some(ParamTarget::RecordingPath { layer: 1, slot: 3 })
        );
        assert_eq!(registry.target(3), Some(ParamTarget::ActiveSlot { layer: 1 }));
        assert_eq!(registry.target(4), Some(ParamTarget::Scrub { layer: 1 }));
        assert_eq!(registry.target(5), Some(ParamTarget::Opacity { layer: 1 }));
        assert_eq!(
            registry.target(6),
            Some(ParamTarget::RecordingPath { layer: 2, slot: 1 })
        );
        assert_eq!(registry.target(11), Some(ParamTarget::Opacity { layer: 2 }));
        assert_eq!(registry.target(12), None);
    }

    #[test]
    fn test_default_grid_id_count() {
        let registry = ParamRegistry::new(16, 10);
        assert_eq!(registry.len(), 16 * 13);
    }

    #[test]
    fn test_names() {
        let registry = ParamRegistry::new(2, 3);
        assert_eq!(registry.name(0).unwrap(), "Recording 1.1");
        assert_eq!(registry.name(3).unwrap(), "L1 active slot");
        assert_eq!(registry.name(4).unwrap(), "L1 frame");
        assert_eq!(registry.name(11).unwrap(), "L2 opacity");
        assert!(registry.name(12).is_none());
    }
}
