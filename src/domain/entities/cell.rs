use crate::domain::entities::record::{Quantity, Record};
use crate::domain::entities::schema::ColumnField;

pub fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if (value.fract()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        let mut text = format!("{value:.6}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

fn format_quantity(quantity: &Quantity) -> String {
    match quantity {
        Quantity::Number(value) => format_f64(*value),
        Quantity::Missing => String::new(),
        Quantity::NotNumeric(text) => text.clone(),
    }
}

/// Text shown in the grid for `field` of `record`.
pub fn record_cell(record: &Record, field: ColumnField) -> String {
    match field {
        ColumnField::Code => record.code.clone().unwrap_or_default(),
        ColumnField::Description => record.description.clone().unwrap_or_default(),
        ColumnField::Barcode => record.barcode.clone(),
        ColumnField::SalonQuantity => format_quantity(&record.salon_quantity),
        ColumnField::SalonLabel => record.salon_label.clone(),
        ColumnField::LocationQuantity(number) => record
            .location(number)
            .map(|slot| format_quantity(&slot.quantity))
            .unwrap_or_default(),
        ColumnField::LocationLabel(number) => record
            .location(number)
            .map(|slot| slot.label.clone())
            .unwrap_or_default(),
        ColumnField::TotalQuantity => format_f64(record.total_quantity()),
    }
}

/// Numeric value of a quantity column, `None` when the cell is not a number.
pub fn record_number(record: &Record, field: ColumnField) -> Option<f64> {
    let quantity = match field {
        ColumnField::SalonQuantity => &record.salon_quantity,
        ColumnField::LocationQuantity(number) => &record.location(number)?.quantity,
        ColumnField::TotalQuantity => return Some(record.total_quantity()),
        _ => return None,
    };
    match quantity {
        Quantity::Number(value) => Some(*value),
        Quantity::Missing | Quantity::NotNumeric(_) => None,
    }
}
