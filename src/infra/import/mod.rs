pub mod csv;
pub mod file_source;
pub mod json;
pub mod xlsx;

use crate::domain::entities::record::{Quantity, Record};
use crate::domain::entities::schema;

/// Keyed access to one row of a catalog file, whatever its format.
pub trait FieldSource {
    fn text(&self, key: &str) -> Option<String>;

    fn quantity(&self, key: &str) -> Quantity;
}

pub fn record_from_fields(fields: &impl FieldSource) -> Record {
    let mut record = Record {
        code: fields.text(schema::CODE),
        description: fields.text(schema::DESCRIPTION),
        barcode: fields.text(schema::BARCODE).unwrap_or_default(),
        salon_quantity: fields.quantity(schema::SALON_QUANTITY),
        salon_label: fields.text(schema::SALON_LABEL).unwrap_or_default(),
        ..Record::default()
    };
    for (idx, slot) in record.locations.iter_mut().enumerate() {
        let number = idx + 1;
        slot.quantity = fields.quantity(&schema::location_quantity(number));
        slot.label = fields
            .text(&schema::location_label(number))
            .unwrap_or_default();
    }
    record
}

/// Quantity from an untyped text cell (CSV, or text typed into a sheet cell
/// that should have been numeric).
pub fn quantity_from_text(value: &str) -> Quantity {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Quantity::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Quantity::Number(number),
        _ => Quantity::NotNumeric(value.to_string()),
    }
}
