//! Layer table entry

use super::TableEntry;
use crate::types::{Color, LineWeight};
use serde::{Deserialize, Serialize};

/// Layer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayerFlags {
    /// Layer is off (entities invisible, skipped by snapping and selection)
    pub off: bool,
    /// Layer is locked (entities visible but rejected by edits)
    pub locked: bool,
}

/// A named, independently visible/lockable grouping of drawn entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Layer flags
    pub flags: LayerFlags,
    /// Layer color, used by entities set to ByLayer
    pub color: Color,
    /// Line weight, used by entities set to ByLayer
    pub line_weight: LineWeight,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: LayerFlags::default(),
            color: Color::WHITE,
            line_weight: LineWeight::Standard,
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0() -> Self {
        Layer::new("0")
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }

    /// Lock the layer
    pub fn lock(&mut self) {
        self.flags.locked = true;
    }

    /// Unlock the layer
    pub fn unlock(&mut self) {
        self.flags.locked = false;
    }

    /// Check if the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.locked
    }

    /// Turn the layer off
    pub fn turn_off(&mut self) {
        self.flags.off = true;
    }

    /// Turn the layer on
    pub fn turn_on(&mut self) {
        self.flags.off = false;
    }

    /// Check if the layer is visible
    pub fn is_visible(&self) -> bool {
        !self.flags.off
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        self.name == "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::new("Formwork");
        assert!(layer.is_visible());
        assert!(!layer.is_locked());
        assert_eq!(layer.color, Color::WHITE);
    }

    #[test]
    fn test_layer_lock_toggle() {
        let mut layer = Layer::new("Rebar");
        layer.lock();
        assert!(layer.is_locked());
        layer.unlock();
        assert!(!layer.is_locked());
    }

    #[test]
    fn test_layer_visibility() {
        let mut layer = Layer::new("Grid");
        layer.turn_off();
        assert!(!layer.is_visible());
        layer.turn_on();
        assert!(layer.is_visible());
    }

    #[test]
    fn test_standard_layer() {
        assert!(Layer::layer_0().is_standard());
        assert!(!Layer::new("Dims").is_standard());
    }
}
