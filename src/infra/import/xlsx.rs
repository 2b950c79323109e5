use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::record::{Quantity, Record};
use crate::infra::import::{record_from_fields, FieldSource};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Only cells the sheet stores as numbers count as quantities.
pub fn cell_to_quantity(cell: &Data) -> Quantity {
    match cell {
        Data::Float(v) => Quantity::Number(*v),
        Data::Int(v) => Quantity::Number(*v as f64),
        Data::Empty => Quantity::Missing,
        other => Quantity::NotNumeric(cell_to_string(other)),
    }
}

struct SheetFields<'a> {
    columns: &'a HashMap<String, usize>,
    row: &'a [Data],
}

impl SheetFields<'_> {
    fn cell(&self, key: &str) -> Option<&Data> {
        self.columns.get(key).and_then(|idx| self.row.get(*idx))
    }
}

impl FieldSource for SheetFields<'_> {
    fn text(&self, key: &str) -> Option<String> {
        match self.cell(key)? {
            Data::Empty => None,
            cell => Some(cell_to_string(cell)),
        }
    }

    fn quantity(&self, key: &str) -> Quantity {
        self.cell(key).map(cell_to_quantity).unwrap_or_default()
    }
}

/// Reads rows below the header row of a sheet.
pub fn records_from_rows<'a>(mut rows: impl Iterator<Item = &'a [Data]>) -> Result<Vec<Record>> {
    let header = rows.next().ok_or_else(|| anyhow!("sheet header is required"))?;
    let columns: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| (cell_to_string(cell).trim().to_string(), idx))
        .filter(|(name, _)| !name.is_empty())
        .collect();

    Ok(rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| {
            record_from_fields(&SheetFields {
                columns: &columns,
                row,
            })
        })
        .collect())
}

/// Reads the first worksheet of an xlsx/xls/ods workbook.
pub fn read_catalog_xlsx(xlsx_path: &Path) -> Result<Vec<Record>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook has no sheets: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    records_from_rows(range.rows())
}
