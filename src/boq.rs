//! Bill-of-quantities tables
//!
//! A BOQ is a flat list of measured items with units and optional rates,
//! rendered as a fixed-width text table. Quantity builders exist for the
//! parametric details; anything else is added by hand.

use crate::detail::{FootingDetail, SlabDetail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement unit for a BOQ item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Cubic meters
    CubicMeter,
    /// Square meters
    SquareMeter,
    /// Linear meters
    Meter,
    /// Kilograms
    Kilogram,
    /// Count of pieces
    Number,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Unit::CubicMeter => "m3",
            Unit::SquareMeter => "m2",
            Unit::Meter => "m",
            Unit::Kilogram => "kg",
            Unit::Number => "no",
        };
        write!(f, "{}", s)
    }
}

/// One measured line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoqItem {
    /// Item code, e.g. "C-01"
    pub code: String,
    /// Description of the work
    pub description: String,
    /// Measurement unit
    pub unit: Unit,
    /// Measured quantity
    pub quantity: f64,
    /// Unit rate in the project currency, if priced
    pub rate: Option<f64>,
}

impl BoqItem {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        unit: Unit,
        quantity: f64,
    ) -> Self {
        BoqItem {
            code: code.into(),
            description: description.into(),
            unit,
            quantity,
            rate: None,
        }
    }

    /// Attach a unit rate
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Line amount; zero when unpriced
    pub fn amount(&self) -> f64 {
        self.rate.map(|r| r * self.quantity).unwrap_or(0.0)
    }
}

/// A bill-of-quantities table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoqTable {
    /// Table title printed above the items
    pub title: String,
    /// Line items in insertion order
    pub items: Vec<BoqItem>,
}

impl BoqTable {
    pub fn new(title: impl Into<String>) -> Self {
        BoqTable {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item
    pub fn add(&mut self, item: BoqItem) {
        self.items.push(item);
    }

    /// Sum of all priced line amounts
    pub fn total(&self) -> f64 {
        self.items.iter().map(BoqItem::amount).sum()
    }

    /// Render the table as fixed-width text
    pub fn render(&self) -> String {
        let desc_width = self
            .items
            .iter()
            .map(|i| i.description.len())
            .max()
            .unwrap_or(11)
            .max(11);
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        let rule = format!("{:-<width$}", "", width = desc_width + 40);
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{:<6} {:<desc_width$} {:>4} {:>10} {:>8} {:>10}\n",
            "Code", "Description", "Unit", "Qty", "Rate", "Amount"
        ));
        out.push_str(&rule);
        out.push('\n');
        for item in &self.items {
            let rate = item
                .rate
                .map(|r| format!("{:.2}", r))
                .unwrap_or_else(|| "-".to_string());
            let amount = if item.rate.is_some() {
                format!("{:.2}", item.amount())
            } else {
                "-".to_string()
            };
            out.push_str(&format!(
                "{:<6} {:<desc_width$} {:>4} {:>10.2} {:>8} {:>10}\n",
                item.code,
                item.description,
                item.unit.to_string(),
                item.quantity,
                rate,
                amount
            ));
        }
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{:>width$} {:>10.2}\n",
            "Total",
            self.total(),
            width = desc_width + 31
        ));
        out
    }

    /// Quantities for a slab detail
    pub fn from_slab(detail: &SlabDetail) -> Self {
        let mut table = BoqTable::new("Slab quantities");
        table.add(BoqItem::new(
            "C-01",
            "Concrete in slab",
            Unit::CubicMeter,
            detail.concrete_volume_m3(),
        ));
        table.add(BoqItem::new(
            "F-01",
            "Edge formwork",
            Unit::SquareMeter,
            detail.formwork_area_m2(),
        ));
        table.add(BoqItem::new(
            "R-01",
            "Slab reinforcement",
            Unit::Kilogram,
            detail.steel_mass_kg(),
        ));
        table
    }

    /// Quantities for a footing detail
    pub fn from_footing(detail: &FootingDetail) -> Self {
        let mut table = BoqTable::new("Footing quantities");
        table.add(BoqItem::new(
            "C-01",
            "Concrete in footing and stub",
            Unit::CubicMeter,
            detail.concrete_volume_m3(),
        ));
        table.add(BoqItem::new(
            "F-01",
            "Side formwork",
            Unit::SquareMeter,
            detail.formwork_area_m2(),
        ));
        table.add(BoqItem::new(
            "R-01",
            "Footing reinforcement and dowels",
            Unit::Kilogram,
            detail.steel_mass_kg(),
        ));
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_and_total() {
        let mut table = BoqTable::new("Test");
        table.add(BoqItem::new("C-01", "Concrete", Unit::CubicMeter, 10.0).with_rate(120.0));
        table.add(BoqItem::new("R-01", "Rebar", Unit::Kilogram, 500.0));
        assert_eq!(table.items[0].amount(), 1200.0);
        assert_eq!(table.items[1].amount(), 0.0);
        assert_eq!(table.total(), 1200.0);
    }

    #[test]
    fn test_render_contains_items() {
        let mut table = BoqTable::new("Footing F1");
        table.add(BoqItem::new("C-01", "Concrete", Unit::CubicMeter, 2.5).with_rate(100.0));
        let text = table.render();
        assert!(text.starts_with("Footing F1\n"));
        assert!(text.contains("C-01"));
        assert!(text.contains("m3"));
        assert!(text.contains("2.50"));
        assert!(text.contains("250.00"));
    }

    #[test]
    fn test_from_slab() {
        let table = BoqTable::from_slab(&SlabDetail::default());
        assert_eq!(table.items.len(), 3);
        assert!((table.items[0].quantity - 2.4).abs() < 1e-9);
        assert_eq!(table.items[2].unit, Unit::Kilogram);
    }

    #[test]
    fn test_from_footing() {
        let table = BoqTable::from_footing(&FootingDetail::default());
        assert_eq!(table.items.len(), 3);
        assert!(table.items.iter().all(|i| i.quantity > 0.0));
    }
}
