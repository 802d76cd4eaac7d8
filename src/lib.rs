//! # strucad
//!
//! A structural drafting and quantity-takeoff library.
//!
//! The core is a 2D drawing engine: a flat, handle-indexed object model
//! with layers, object snapping, snapshot undo/redo, viewport math and
//! selection. On top of it sit parametric reinforcement-detail builders,
//! a client for a remote design-check service, bill-of-quantities tables,
//! and JSON/DXF persistence.
//!
//! ## Quick Start
//!
//! ```rust
//! use strucad::{Drawing, EntityKind, Line};
//! use strucad::history::History;
//!
//! let mut drawing = Drawing::new();
//! drawing.add_entity(EntityKind::Line(Line::from_coords(0.0, 0.0, 100.0, 0.0)))?;
//!
//! let mut history = History::new(drawing.clone());
//! drawing.add_entity(EntityKind::Line(Line::from_coords(0.0, 0.0, 0.0, 50.0)))?;
//! history.record(drawing.clone());
//!
//! // Step back to the one-line drawing
//! let previous = history.undo().unwrap();
//! assert_eq!(previous.entity_count(), 1);
//! # Ok::<(), strucad::error::DraftError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Entity` - trait for drawable entities, stored as `EntityKind`
//! - `Drawing` - central document: settings, layer table, entity map
//! - `History` - whole-document snapshot undo/redo
//! - `detail` - pure parameter-to-mesh reinforcement builders
//! - `design` - blocking client for the calculation backend

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod boq;
pub mod design;
pub mod detail;
pub mod document;
pub mod entities;
pub mod error;
pub mod history;
pub mod io;
pub mod selection;
pub mod snap;
pub mod tables;
pub mod types;
pub mod viewport;

// Re-export commonly used types
pub use error::{DraftError, Result};
pub use types::{
    BoundingBox2D, BoundingBox3D, Color, Handle, LineWeight, Transform, Vector2, Vector3,
};

// Re-export entity types
pub use entities::{
    Circle, Dimension, Entity, EntityKind, Hatch, Line, Member, MemberKind, Polyline, Rectangle,
    Text,
};

pub use boq::{BoqItem, BoqTable};
pub use design::{CheckStatus, DesignClient, DesignReport};
pub use detail::{FootingDetail, SlabDetail, TriMesh};
pub use document::{Drawing, DrawingSettings, Units};
pub use history::History;
pub use selection::SelectionSet;
pub use snap::{resolve_snap, SnapKind, SnapMode, SnapPoint};
pub use tables::{Layer, Table, TableEntry};
pub use viewport::Viewport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
