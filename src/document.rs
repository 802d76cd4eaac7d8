//! Drawing document structure

use crate::entities::{Entity, EntityKind};
use crate::error::{DraftError, Result};
use crate::tables::{Layer, Table, TableEntry};
use crate::types::{BoundingBox2D, Handle};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Drawing-wide units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[default]
    Millimeters,
    Meters,
    Inches,
}

impl Units {
    /// Conversion factor to meters
    pub fn to_meters(&self) -> f64 {
        match self {
            Units::Millimeters => 0.001,
            Units::Meters => 1.0,
            Units::Inches => 0.0254,
        }
    }
}

/// Per-drawing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingSettings {
    /// Snap tolerance in world units
    pub snap_tolerance: f64,
    /// Grid spacing in world units (0 disables grid snapping)
    pub grid_spacing: f64,
    /// Layer new entities are placed on
    pub current_layer: String,
    /// Drawing units
    pub units: Units,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        DrawingSettings {
            snap_tolerance: 10.0,
            grid_spacing: 0.0,
            current_layer: "0".to_string(),
            units: Units::Millimeters,
        }
    }
}

/// A drawing containing layers, entities, and settings
///
/// Entities live in a flat handle-indexed map; there is no spatial index,
/// queries scan the collection. The whole drawing is cheaply cloneable,
/// which is what the snapshot history relies on.
#[derive(Debug, Clone)]
pub struct Drawing {
    /// Drawing settings
    pub settings: DrawingSettings,
    /// Layer table
    pub layers: Table<Layer>,
    /// All entities, indexed by handle
    entities: AHashMap<Handle, EntityKind>,
    /// Next handle to assign
    next_handle: u64,
}

impl Drawing {
    /// Create a new empty drawing with the standard layer "0"
    pub fn new() -> Self {
        let mut layers = Table::new();
        layers.add(Layer::layer_0()).expect("empty table");
        Drawing {
            settings: DrawingSettings::default(),
            layers,
            entities: AHashMap::new(),
            next_handle: 1,
        }
    }

    /// Allocate a new unique handle
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// The next handle value (without allocating)
    pub fn next_handle(&self) -> u64 {
        self.next_handle
    }

    /// Add an entity to the drawing
    ///
    /// Allocates a handle if the entity has none. Fails if the entity's
    /// layer does not exist or is locked.
    pub fn add_entity(&mut self, mut entity: EntityKind) -> Result<Handle> {
        self.check_layer_editable(entity.as_entity().layer())?;

        let handle = if entity.as_entity().handle().is_null() {
            let h = self.allocate_handle();
            entity.as_entity_mut().set_handle(h);
            h
        } else {
            let h = entity.as_entity().handle();
            if h.value() >= self.next_handle {
                self.next_handle = h.value() + 1;
            }
            h
        };

        self.entities.insert(handle, entity);
        Ok(handle)
    }

    /// Add an entity on the current layer
    pub fn add_entity_on_current_layer(&mut self, mut entity: EntityKind) -> Result<Handle> {
        entity
            .as_entity_mut()
            .set_layer(self.settings.current_layer.clone());
        self.add_entity(entity)
    }

    /// Get an entity by handle
    pub fn get_entity(&self, handle: Handle) -> Option<&EntityKind> {
        self.entities.get(&handle)
    }

    /// Get a mutable entity by handle, refusing entities on locked layers
    pub fn get_entity_mut(&mut self, handle: Handle) -> Result<&mut EntityKind> {
        let layer = self
            .entities
            .get(&handle)
            .ok_or(DraftError::EntityNotFound(handle))?
            .as_entity()
            .layer()
            .to_string();
        self.check_layer_editable(&layer)?;
        Ok(self.entities.get_mut(&handle).expect("checked above"))
    }

    /// Remove an entity by handle, refusing entities on locked layers
    pub fn remove_entity(&mut self, handle: Handle) -> Result<EntityKind> {
        let layer = self
            .entities
            .get(&handle)
            .ok_or(DraftError::EntityNotFound(handle))?
            .as_entity()
            .layer()
            .to_string();
        self.check_layer_editable(&layer)?;
        Ok(self.entities.remove(&handle).expect("checked above"))
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities
    pub fn entities(&self) -> impl Iterator<Item = &EntityKind> {
        self.entities.values()
    }

    /// Iterate over the handles of all entities
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.entities.keys().copied()
    }

    /// Iterate over entities on a given layer
    pub fn entities_on_layer<'a>(
        &'a self,
        layer: &'a str,
    ) -> impl Iterator<Item = &'a EntityKind> {
        self.entities
            .values()
            .filter(move |e| e.as_entity().layer().eq_ignore_ascii_case(layer))
    }

    /// Bounding box of the whole drawing (None when empty)
    pub fn bounding_box(&self) -> Option<BoundingBox2D> {
        self.entities
            .values()
            .map(|e| e.as_entity().bounding_box())
            .reduce(|acc, b| acc.merge(&b))
    }

    /// Add a layer
    pub fn add_layer(&mut self, layer: Layer) -> Result<()> {
        self.layers.add(layer)
    }

    /// Remove a layer, moving its entities to layer "0"
    ///
    /// The standard layer "0" cannot be removed. Removing the current
    /// layer resets the current layer to "0".
    pub fn remove_layer(&mut self, name: &str) -> Result<Layer> {
        if name.eq_ignore_ascii_case("0") {
            return Err(DraftError::StandardLayerImmutable);
        }
        let layer = self
            .layers
            .remove(name)
            .ok_or_else(|| DraftError::LayerNotFound(name.to_string()))?;

        let mut moved = 0usize;
        for entity in self.entities.values_mut() {
            if entity.as_entity().layer().eq_ignore_ascii_case(name) {
                entity.as_entity_mut().set_layer("0".to_string());
                moved += 1;
            }
        }
        if moved > 0 {
            log::debug!("moved {} entities from removed layer '{}' to '0'", moved, name);
        }
        if self.settings.current_layer.eq_ignore_ascii_case(name) {
            self.settings.current_layer = "0".to_string();
        }
        Ok(layer)
    }

    /// Set the current layer (must exist)
    pub fn set_current_layer(&mut self, name: &str) -> Result<()> {
        let layer = self
            .layers
            .get(name)
            .ok_or_else(|| DraftError::LayerNotFound(name.to_string()))?;
        self.settings.current_layer = layer.name.clone();
        Ok(())
    }

    /// Check whether an entity can currently be edited
    pub fn is_entity_editable(&self, handle: Handle) -> bool {
        self.entities
            .get(&handle)
            .map(|e| {
                self.layers
                    .get(e.as_entity().layer())
                    .map(|l| !l.is_locked())
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    fn check_layer_editable(&self, name: &str) -> Result<()> {
        let layer = self
            .layers
            .get(name)
            .ok_or_else(|| DraftError::LayerNotFound(name.to_string()))?;
        if layer.is_locked() {
            return Err(DraftError::LayerLocked(layer.name.clone()));
        }
        Ok(())
    }

    /// Rebuild a drawing from persisted parts (used by the JSON loader)
    pub(crate) fn from_parts(
        settings: DrawingSettings,
        layers: Vec<Layer>,
        entities: Vec<EntityKind>,
        next_handle: u64,
    ) -> Result<Self> {
        let mut table = Table::new();
        let mut has_zero = false;
        for layer in layers {
            has_zero |= layer.is_standard();
            table.add(layer)?;
        }
        if !has_zero {
            table.add(Layer::layer_0())?;
        }

        let mut map = AHashMap::with_capacity(entities.len());
        let mut max_handle = next_handle;
        for entity in entities {
            let handle = entity.as_entity().handle();
            if handle.is_null() {
                return Err(DraftError::Custom(
                    "persisted entity without handle".to_string(),
                ));
            }
            if !table.contains(entity.as_entity().layer()) {
                return Err(DraftError::LayerNotFound(
                    entity.as_entity().layer().to_string(),
                ));
            }
            if handle.value() >= max_handle {
                max_handle = handle.value() + 1;
            }
            if map.insert(handle, entity).is_some() {
                return Err(DraftError::Custom(format!(
                    "duplicate handle {} in persisted drawing",
                    handle
                )));
            }
        }

        let mut drawing = Drawing {
            settings,
            layers: table,
            entities: map,
            next_handle: max_handle.max(1),
        };
        if !drawing.layers.contains(&drawing.settings.current_layer) {
            drawing.settings.current_layer = "0".to_string();
        }
        Ok(drawing)
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, EntityKind, Line};
    use crate::types::Vector2;

    #[test]
    fn test_new_drawing_has_layer_0() {
        let drawing = Drawing::new();
        assert!(drawing.layers.contains("0"));
        assert_eq!(drawing.settings.current_layer, "0");
        assert_eq!(drawing.entity_count(), 0);
    }

    #[test]
    fn test_add_entity_allocates_handle() {
        let mut drawing = Drawing::new();
        let h1 = drawing
            .add_entity(EntityKind::Line(Line::from_coords(0.0, 0.0, 1.0, 0.0)))
            .unwrap();
        let h2 = drawing
            .add_entity(EntityKind::Circle(Circle::new(Vector2::ZERO, 1.0)))
            .unwrap();
        assert!(h1.is_valid());
        assert_ne!(h1, h2);
        assert_eq!(drawing.entity_count(), 2);
    }

    #[test]
    fn test_add_entity_unknown_layer() {
        let mut drawing = Drawing::new();
        let mut line = Line::from_coords(0.0, 0.0, 1.0, 0.0);
        line.common.layer = "Missing".to_string();
        assert!(matches!(
            drawing.add_entity(EntityKind::Line(line)),
            Err(DraftError::LayerNotFound(_))
        ));
    }

    #[test]
    fn test_locked_layer_rejects_edits() {
        let mut drawing = Drawing::new();
        drawing.add_layer(Layer::new("Rebar")).unwrap();
        let mut line = Line::from_coords(0.0, 0.0, 1.0, 0.0);
        line.common.layer = "Rebar".to_string();
        let handle = drawing.add_entity(EntityKind::Line(line)).unwrap();

        drawing.layers.get_mut("Rebar").unwrap().lock();
        assert!(matches!(
            drawing.remove_entity(handle),
            Err(DraftError::LayerLocked(_))
        ));
        assert!(matches!(
            drawing.get_entity_mut(handle),
            Err(DraftError::LayerLocked(_))
        ));
        assert!(!drawing.is_entity_editable(handle));
        // Read access is still fine
        assert!(drawing.get_entity(handle).is_some());
    }

    #[test]
    fn test_remove_layer_reparents_entities() {
        let mut drawing = Drawing::new();
        drawing.add_layer(Layer::new("Dims")).unwrap();
        let mut line = Line::from_coords(0.0, 0.0, 1.0, 0.0);
        line.common.layer = "Dims".to_string();
        let handle = drawing.add_entity(EntityKind::Line(line)).unwrap();

        drawing.remove_layer("Dims").unwrap();
        assert_eq!(drawing.get_entity(handle).unwrap().as_entity().layer(), "0");
    }

    #[test]
    fn test_remove_layer_0_refused() {
        let mut drawing = Drawing::new();
        assert!(matches!(
            drawing.remove_layer("0"),
            Err(DraftError::StandardLayerImmutable)
        ));
    }

    #[test]
    fn test_current_layer_resets_on_removal() {
        let mut drawing = Drawing::new();
        drawing.add_layer(Layer::new("Work")).unwrap();
        drawing.set_current_layer("Work").unwrap();
        drawing.remove_layer("Work").unwrap();
        assert_eq!(drawing.settings.current_layer, "0");
    }

    #[test]
    fn test_drawing_bounding_box() {
        let mut drawing = Drawing::new();
        assert!(drawing.bounding_box().is_none());
        drawing
            .add_entity(EntityKind::Line(Line::from_coords(0.0, 0.0, 10.0, 0.0)))
            .unwrap();
        drawing
            .add_entity(EntityKind::Circle(Circle::new(Vector2::new(0.0, 5.0), 2.0)))
            .unwrap();
        let bbox = drawing.bounding_box().unwrap();
        assert_eq!(bbox.min, Vector2::new(-2.0, 0.0));
        assert_eq!(bbox.max, Vector2::new(10.0, 7.0));
    }

    #[test]
    fn test_explicit_handle_bumps_allocator() {
        let mut drawing = Drawing::new();
        let mut line = Line::from_coords(0.0, 0.0, 1.0, 0.0);
        line.common.handle = Handle::new(100);
        drawing.add_entity(EntityKind::Line(line)).unwrap();
        let next = drawing
            .add_entity(EntityKind::Line(Line::new()))
            .unwrap();
        assert!(next.value() > 100);
    }
}
