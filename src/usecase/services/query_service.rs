use std::time::Instant;

use crate::domain::entities::filter::FilterSpec;
use crate::domain::entities::record::Record;
use crate::domain::error::CatalogError;
use crate::usecase::ports::grid::GridView;
use crate::usecase::services::aggregate::{compute_grand_total, compute_summary_row};
use crate::usecase::services::filter::filter_records;
use crate::usecase::services::totals::compute_row_total;

/// Records of one loaded catalog file, each with its derived total attached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    records: Vec<Record>,
    source: String,
}

impl Catalog {
    pub fn from_records(source: impl Into<String>, records: Vec<Record>) -> Self {
        let records = records
            .into_iter()
            .map(|record| {
                let total = compute_row_total(&record);
                record.with_total(total)
            })
            .collect();
        Self {
            records,
            source: source.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builds display views over an owned catalog. The catalog is never modified
/// after construction.
pub struct QueryService {
    catalog: Catalog,
}

impl QueryService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn show_all(&self) -> GridView {
        build_view(self.catalog.records().to_vec())
    }

    pub fn search(&self, spec: &FilterSpec) -> GridView {
        let started = Instant::now();
        let rows = filter_records(self.catalog.records(), spec);
        tracing::debug!(
            mode = %spec.mode,
            search_text = %spec.search_text,
            matched = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog search"
        );
        build_view(rows)
    }

    /// Search using the raw selector value coming from the form.
    pub fn search_raw(&self, mode: &str, search_text: &str) -> Result<GridView, CatalogError> {
        let spec = FilterSpec::parse(mode, search_text)?;
        Ok(self.search(&spec))
    }
}

pub fn build_view(rows: Vec<Record>) -> GridView {
    let summary = compute_summary_row(&rows);
    let grand_total = compute_grand_total(&rows);
    GridView {
        rows,
        summary,
        grand_total,
    }
}
