//! ASCII DXF export
//!
//! Writes an R12-level file: a minimal header, the layer table, and the
//! entities section. Only primitives every reader understands are emitted;
//! rectangles and hatches become closed polylines, dimensions are exploded
//! into lines and text, members export as lines.

use crate::document::Drawing;
use crate::entities::{Dimension, Entity, EntityKind};
use crate::error::Result;
use crate::types::{Color, Vector2};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Text height for exploded dimension text, in drawing units
const DIM_TEXT_HEIGHT: f64 = 2.5;

struct DxfWriter {
    out: String,
}

impl DxfWriter {
    fn new() -> Self {
        DxfWriter { out: String::new() }
    }

    fn pair(&mut self, code: i32, value: &str) {
        // Writing to a String cannot fail
        let _ = writeln!(self.out, "{}\n{}", code, value);
    }

    fn float(&mut self, code: i32, value: f64) {
        let _ = writeln!(self.out, "{}\n{:.4}", code, value);
    }

    fn int(&mut self, code: i32, value: i64) {
        let _ = writeln!(self.out, "{}\n{}", code, value);
    }

    /// A 2D point as X/Y/Z triplet; `code` is the X group, Y adds 10, Z adds 20
    fn point(&mut self, code: i32, p: Vector2) {
        self.float(code, p.x);
        self.float(code + 10, p.y);
        self.float(code + 20, 0.0);
    }
}

/// Serialize a drawing to DXF text
pub fn to_dxf_string(drawing: &Drawing) -> String {
    let mut w = DxfWriter::new();

    w.pair(0, "SECTION");
    w.pair(2, "HEADER");
    w.pair(9, "$ACADVER");
    w.pair(1, "AC1009");
    w.pair(0, "ENDSEC");

    write_layer_table(&mut w, drawing);
    write_entities(&mut w, drawing);

    w.pair(0, "EOF");
    w.out
}

/// Write a drawing to a DXF file
pub fn save_dxf(drawing: &Drawing, path: impl AsRef<Path>) -> Result<()> {
    let text = to_dxf_string(drawing);
    fs::write(path, text)?;
    Ok(())
}

fn write_layer_table(w: &mut DxfWriter, drawing: &Drawing) {
    w.pair(0, "SECTION");
    w.pair(2, "TABLES");
    w.pair(0, "TABLE");
    w.pair(2, "LAYER");
    w.int(70, drawing.layers.len() as i64);
    for layer in drawing.layers.iter() {
        w.pair(0, "LAYER");
        w.pair(2, &layer.name);
        // Bit 4 marks a locked layer
        w.int(70, if layer.is_locked() { 4 } else { 0 });
        // An off layer exports its color index negated, by convention
        let mut color = layer.color.approximate_index();
        if color == 256 {
            color = 7;
        }
        if !layer.is_visible() {
            color = -color;
        }
        w.int(62, color.into());
        w.pair(6, "CONTINUOUS");
    }
    w.pair(0, "ENDTAB");
    w.pair(0, "ENDSEC");
}

fn write_entities(w: &mut DxfWriter, drawing: &Drawing) {
    w.pair(0, "SECTION");
    w.pair(2, "ENTITIES");

    // Stable output: entities in handle order
    let mut handles: Vec<_> = drawing.handles().collect();
    handles.sort();
    for handle in handles {
        let entity = match drawing.get_entity(handle) {
            Some(e) => e,
            None => continue,
        };
        if entity.as_entity().is_invisible() {
            continue;
        }
        write_entity(w, entity);
    }

    w.pair(0, "ENDSEC");
}

fn write_common(w: &mut DxfWriter, entity: &dyn Entity) {
    w.pair(8, entity.layer());
    if entity.color() != Color::ByLayer {
        w.int(62, entity.color().approximate_index().into());
    }
}

fn write_entity(w: &mut DxfWriter, entity: &EntityKind) {
    match entity {
        EntityKind::Line(e) => {
            w.pair(0, "LINE");
            write_common(w, e);
            w.point(10, e.start);
            w.point(11, e.end);
        }
        EntityKind::Member(e) => {
            // Members flatten to their axis line
            w.pair(0, "LINE");
            write_common(w, e);
            w.point(10, e.start);
            w.point(11, e.end);
        }
        EntityKind::Circle(e) => {
            w.pair(0, "CIRCLE");
            write_common(w, e);
            w.point(10, e.center);
            w.float(40, e.radius);
        }
        EntityKind::Polyline(e) => {
            write_polyline(w, e, &e.vertices, e.closed);
        }
        EntityKind::Rectangle(e) => {
            let corners = e.corners();
            write_polyline(w, e, &corners, true);
        }
        EntityKind::Hatch(e) => {
            // Readers without HATCH support still get the boundary
            write_polyline(w, e, &e.boundary, true);
        }
        EntityKind::Text(e) => {
            w.pair(0, "TEXT");
            write_common(w, e);
            w.point(10, e.insertion);
            w.float(40, e.height);
            w.float(50, e.rotation.to_degrees());
            w.pair(1, &e.value);
        }
        EntityKind::Dimension(e) => write_dimension(w, e),
    }
}

fn write_polyline(w: &mut DxfWriter, entity: &dyn Entity, vertices: &[Vector2], closed: bool) {
    w.pair(0, "POLYLINE");
    write_common(w, entity);
    // 66: vertices follow
    w.int(66, 1);
    w.int(70, if closed { 1 } else { 0 });
    for vertex in vertices {
        w.pair(0, "VERTEX");
        w.pair(8, entity.layer());
        w.point(10, *vertex);
    }
    w.pair(0, "SEQEND");
    w.pair(8, entity.layer());
}

/// Dimensions export exploded: two extension lines, the dimension line,
/// and the measurement text
fn write_dimension(w: &mut DxfWriter, dim: &Dimension) {
    let (a, b) = dim.dim_line();
    for (start, end) in [(dim.p1, a), (dim.p2, b), (a, b)] {
        w.pair(0, "LINE");
        write_common(w, dim);
        w.point(10, start);
        w.point(11, end);
    }
    let angle = (b - a).angle();
    w.pair(0, "TEXT");
    write_common(w, dim);
    w.point(10, dim.text_position());
    w.float(40, DIM_TEXT_HEIGHT);
    w.float(50, angle.to_degrees());
    w.pair(1, &dim.display_text());
}
