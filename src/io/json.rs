//! Native JSON drawing format
//!
//! The on-disk shape is a flat file struct rather than the live `Drawing`:
//! layers and entities persist as arrays, and the handle allocator is
//! rebuilt on load so a hand-edited file cannot corrupt handle assignment.

use crate::document::{Drawing, DrawingSettings};
use crate::entities::EntityKind;
use crate::error::Result;
use crate::tables::Layer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current file format version
pub const FILE_VERSION: u32 = 1;

/// Serializable snapshot of a drawing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingFile {
    /// Format version for forward compatibility
    pub version: u32,
    /// Drawing settings
    pub settings: DrawingSettings,
    /// Layers in table order
    pub layers: Vec<Layer>,
    /// Entities in handle order
    pub entities: Vec<EntityKind>,
    /// Handle allocator state
    pub next_handle: u64,
}

impl DrawingFile {
    /// Capture a drawing for persistence
    pub fn from_drawing(drawing: &Drawing) -> Self {
        let mut entities: Vec<EntityKind> = drawing.entities().cloned().collect();
        entities.sort_by_key(|e| e.common().handle);
        DrawingFile {
            version: FILE_VERSION,
            settings: drawing.settings.clone(),
            layers: drawing.layers.iter().cloned().collect(),
            entities,
            next_handle: drawing.next_handle(),
        }
    }

    /// Rebuild the live drawing
    pub fn into_drawing(self) -> Result<Drawing> {
        Drawing::from_parts(self.settings, self.layers, self.entities, self.next_handle)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Save a drawing to a JSON file
pub fn save_drawing(drawing: &Drawing, path: impl AsRef<Path>) -> Result<()> {
    let file = DrawingFile::from_drawing(drawing);
    fs::write(path, file.to_json()?)?;
    Ok(())
}

/// Load a drawing from a JSON file
pub fn load_drawing(path: impl AsRef<Path>) -> Result<Drawing> {
    let text = fs::read_to_string(path)?;
    DrawingFile::from_json(&text)?.into_drawing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Line};
    use crate::tables::Layer;
    use crate::types::Vector2;

    fn sample_drawing() -> Drawing {
        let mut drawing = Drawing::new();
        drawing.add_layer(Layer::new("Rebar")).unwrap();
        drawing
            .add_entity(EntityKind::Line(Line::from_coords(0.0, 0.0, 10.0, 0.0)))
            .unwrap();
        drawing
            .add_entity(EntityKind::Circle(Circle::new(Vector2::new(5.0, 5.0), 2.0)))
            .unwrap();
        drawing
    }

    #[test]
    fn test_round_trip_preserves_drawing() {
        let drawing = sample_drawing();
        let json = DrawingFile::from_drawing(&drawing).to_json().unwrap();
        let restored = DrawingFile::from_json(&json).unwrap().into_drawing().unwrap();

        assert_eq!(restored.entity_count(), drawing.entity_count());
        assert_eq!(restored.layers.len(), drawing.layers.len());
        assert_eq!(restored.next_handle(), drawing.next_handle());
        for handle in drawing.handles() {
            assert_eq!(restored.get_entity(handle), drawing.get_entity(handle));
        }
    }

    #[test]
    fn test_entities_persist_in_handle_order() {
        let file = DrawingFile::from_drawing(&sample_drawing());
        let handles: Vec<_> = file.entities.iter().map(|e| e.common().handle).collect();
        let mut sorted = handles.clone();
        sorted.sort();
        assert_eq!(handles, sorted);
    }

    #[test]
    fn test_load_repairs_missing_layer_0() {
        let drawing = sample_drawing();
        let mut file = DrawingFile::from_drawing(&drawing);
        file.layers.retain(|l| l.name != "0");
        file.entities.retain(|e| e.common().layer != "0");
        let restored = file.into_drawing().unwrap();
        assert!(restored.layers.contains("0"));
    }

    #[test]
    fn test_load_rejects_unknown_layer() {
        let mut file = DrawingFile::from_drawing(&sample_drawing());
        file.entities[0].common_mut().layer = "Ghost".to_string();
        assert!(file.into_drawing().is_err());
    }

    #[test]
    fn test_tagged_entity_json() {
        let json = DrawingFile::from_drawing(&sample_drawing()).to_json().unwrap();
        assert!(json.contains(r#""type": "Line""#));
        assert!(json.contains(r#""type": "Circle""#));
    }
}
