use std::path::{Path, PathBuf};

use crate::domain::entities::record::Record;
use crate::domain::error::CatalogError;
use crate::infra::import::csv::read_catalog_csv;
use crate::infra::import::json::read_catalog_json;
use crate::infra::import::xlsx::read_catalog_xlsx;
use crate::usecase::ports::source::CatalogSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
    Workbook,
}

impl CatalogFormat {
    pub const EXTENSIONS: [&'static str; 5] = ["json", "csv", "xlsx", "xls", "ods"];

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            "xlsx" | "xls" | "ods" => Ok(CatalogFormat::Workbook),
            _ => Err(CatalogError::UnsupportedFormat(extension)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    pub path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_records(&self) -> Result<Vec<Record>, CatalogError> {
        let result = match CatalogFormat::from_path(&self.path)? {
            CatalogFormat::Json => read_catalog_json(&self.path),
            CatalogFormat::Csv => read_catalog_csv(&self.path),
            CatalogFormat::Workbook => read_catalog_xlsx(&self.path),
        };
        result.map_err(|err| CatalogError::dataset_load(self.describe(), &err))
    }
}
