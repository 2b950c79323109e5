use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::domain::entities::record::{Quantity, Record};
use crate::infra::import::{record_from_fields, FieldSource};

struct JsonFields<'a>(&'a Map<String, Value>);

impl FieldSource for JsonFields<'_> {
    fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(value) => Some(value.clone()),
            other => Some(other.to_string()),
        }
    }

    fn quantity(&self, key: &str) -> Quantity {
        match self.0.get(key) {
            None | Some(Value::Null) => Quantity::Missing,
            Some(Value::Number(number)) => number
                .as_f64()
                .map(Quantity::Number)
                .unwrap_or_else(|| Quantity::NotNumeric(number.to_string())),
            Some(Value::String(value)) => Quantity::NotNumeric(value.clone()),
            Some(other) => Quantity::NotNumeric(other.to_string()),
        }
    }
}

/// Parses a JSON array of catalog objects keyed by column name.
pub fn parse_catalog_json(text: &str) -> Result<Vec<Record>> {
    let rows: Vec<Map<String, Value>> =
        serde_json::from_str(text).context("catalog json must be an array of objects")?;
    Ok(rows
        .iter()
        .map(|row| record_from_fields(&JsonFields(row)))
        .collect())
}

pub fn read_catalog_json(json_path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read json: {}", json_path.display()))?;
    parse_catalog_json(&text)
        .with_context(|| format!("failed to parse json: {}", json_path.display()))
}
