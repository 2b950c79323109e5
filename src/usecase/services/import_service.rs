use std::time::Instant;

use crate::domain::error::CatalogError;
use crate::usecase::ports::source::CatalogSource;
use crate::usecase::services::query_service::Catalog;

pub struct ImportService<S> {
    source: S,
}

impl<S: CatalogSource> ImportService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads the source once and attaches derived totals to every record.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        let started = Instant::now();
        let description = self.source.describe();
        match self.source.read_records() {
            Ok(records) => {
                let catalog = Catalog::from_records(description, records);
                tracing::info!(
                    source = catalog.source(),
                    records = catalog.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "catalog loaded"
                );
                if catalog.is_empty() {
                    tracing::warn!(source = catalog.source(), "catalog has no records");
                }
                Ok(catalog)
            }
            Err(err) => {
                tracing::error!(source = %description, error = %err, "catalog load failed");
                Err(err)
            }
        }
    }
}
