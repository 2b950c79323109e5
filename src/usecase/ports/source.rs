use crate::domain::entities::record::Record;
use crate::domain::error::CatalogError;

/// Somewhere a catalog can be read from. Totals are not attached yet.
pub trait CatalogSource {
    fn describe(&self) -> String;

    fn read_records(&self) -> Result<Vec<Record>, CatalogError>;
}
