//! Drawing entity types and traits

use crate::snap::SnapPoint;
use crate::types::{BoundingBox2D, Color, Handle, LineWeight, Transform, Vector2};
use serde::{Deserialize, Serialize};

pub mod circle;
pub mod dimension;
pub mod hatch;
pub mod line;
pub mod member;
pub mod polyline;
pub mod rectangle;
pub mod text;

pub use circle::Circle;
pub use dimension::Dimension;
pub use hatch::Hatch;
pub use line::Line;
pub use member::{Member, MemberKind};
pub use polyline::Polyline;
pub use rectangle::Rectangle;
pub use text::Text;

/// Base trait for all drawing entities
pub trait Entity {
    /// Get the entity's unique handle
    fn handle(&self) -> Handle;

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Set the entity's layer name
    fn set_layer(&mut self, layer: String);

    /// Get the entity's color
    fn color(&self) -> Color;

    /// Set the entity's color
    fn set_color(&mut self, color: Color);

    /// Get the entity's line weight
    fn line_weight(&self) -> LineWeight;

    /// Set the entity's line weight
    fn set_line_weight(&mut self, weight: LineWeight);

    /// Check if the entity is individually hidden
    fn is_invisible(&self) -> bool;

    /// Set the entity's visibility
    fn set_invisible(&mut self, invisible: bool);

    /// Get the bounding box of the entity
    fn bounding_box(&self) -> BoundingBox2D;

    /// Translate the entity by an offset
    fn translate(&mut self, offset: Vector2) {
        self.apply_transform(&Transform::translation(offset));
    }

    /// Apply a general 2D transform to the entity
    fn apply_transform(&mut self, transform: &Transform);

    /// Get the entity type name
    fn entity_type(&self) -> &'static str;

    /// Snap candidates contributed by this entity
    fn snap_points(&self) -> Vec<SnapPoint>;
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Color
    pub color: Color,
    /// Line weight
    pub line_weight: LineWeight,
    /// Visibility flag
    pub invisible: bool,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            color: Color::ByLayer,
            line_weight: LineWeight::ByLayer,
            invisible: false,
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntityKind {
    /// Line entity
    Line(Line),
    /// Rectangle entity
    Rectangle(Rectangle),
    /// Circle entity
    Circle(Circle),
    /// Polyline entity
    Polyline(Polyline),
    /// Text entity
    Text(Text),
    /// Hatch entity
    Hatch(Hatch),
    /// Linear dimension entity
    Dimension(Dimension),
    /// Structural member entity
    Member(Member),
}

impl EntityKind {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityKind::Line(e) => e,
            EntityKind::Rectangle(e) => e,
            EntityKind::Circle(e) => e,
            EntityKind::Polyline(e) => e,
            EntityKind::Text(e) => e,
            EntityKind::Hatch(e) => e,
            EntityKind::Dimension(e) => e,
            EntityKind::Member(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityKind::Line(e) => e,
            EntityKind::Rectangle(e) => e,
            EntityKind::Circle(e) => e,
            EntityKind::Polyline(e) => e,
            EntityKind::Text(e) => e,
            EntityKind::Hatch(e) => e,
            EntityKind::Dimension(e) => e,
            EntityKind::Member(e) => e,
        }
    }

    /// Get a reference to the common entity data
    pub fn common(&self) -> &EntityCommon {
        match self {
            EntityKind::Line(e) => &e.common,
            EntityKind::Rectangle(e) => &e.common,
            EntityKind::Circle(e) => &e.common,
            EntityKind::Polyline(e) => &e.common,
            EntityKind::Text(e) => &e.common,
            EntityKind::Hatch(e) => &e.common,
            EntityKind::Dimension(e) => &e.common,
            EntityKind::Member(e) => &e.common,
        }
    }

    /// Get a mutable reference to the common entity data
    pub fn common_mut(&mut self) -> &mut EntityCommon {
        match self {
            EntityKind::Line(e) => &mut e.common,
            EntityKind::Rectangle(e) => &mut e.common,
            EntityKind::Circle(e) => &mut e.common,
            EntityKind::Polyline(e) => &mut e.common,
            EntityKind::Text(e) => &mut e.common,
            EntityKind::Hatch(e) => &mut e.common,
            EntityKind::Dimension(e) => &mut e.common,
            EntityKind::Member(e) => &mut e.common,
        }
    }
}

/// Forward the boilerplate `Entity` accessors to `self.common`
macro_rules! impl_entity_common {
    () => {
        fn handle(&self) -> crate::types::Handle {
            self.common.handle
        }

        fn set_handle(&mut self, handle: crate::types::Handle) {
            self.common.handle = handle;
        }

        fn layer(&self) -> &str {
            &self.common.layer
        }

        fn set_layer(&mut self, layer: String) {
            self.common.layer = layer;
        }

        fn color(&self) -> crate::types::Color {
            self.common.color
        }

        fn set_color(&mut self, color: crate::types::Color) {
            self.common.color = color;
        }

        fn line_weight(&self) -> crate::types::LineWeight {
            self.common.line_weight
        }

        fn set_line_weight(&mut self, weight: crate::types::LineWeight) {
            self.common.line_weight = weight;
        }

        fn is_invisible(&self) -> bool {
            self.common.invisible
        }

        fn set_invisible(&mut self, invisible: bool) {
            self.common.invisible = invisible;
        }
    };
}

pub(crate) use impl_entity_common;
