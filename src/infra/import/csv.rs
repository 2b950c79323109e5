use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::domain::entities::record::{Quantity, Record};
use crate::infra::import::{quantity_from_text, record_from_fields, FieldSource};

struct CsvFields<'a> {
    columns: &'a HashMap<String, usize>,
    row: &'a StringRecord,
}

impl CsvFields<'_> {
    fn cell(&self, key: &str) -> Option<&str> {
        self.columns.get(key).and_then(|idx| self.row.get(*idx))
    }
}

impl FieldSource for CsvFields<'_> {
    fn text(&self, key: &str) -> Option<String> {
        self.cell(key).map(str::to_string)
    }

    fn quantity(&self, key: &str) -> Quantity {
        self.cell(key).map(quantity_from_text).unwrap_or_default()
    }
}

pub fn parse_catalog_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .headers()
        .context("failed to read headers from csv")?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_string(), idx))
        .collect();

    let mut records = Vec::new();
    for (row_idx, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("failed to parse csv record {}", row_idx + 1))?;
        records.push(record_from_fields(&CsvFields {
            columns: &columns,
            row: &row,
        }));
    }
    Ok(records)
}

pub fn read_catalog_csv(csv_path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    parse_catalog_csv(file).with_context(|| format!("failed to import csv: {}", csv_path.display()))
}
