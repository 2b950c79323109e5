use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog file could not be read or parsed.
    #[error("failed to load catalog from {source_path}: {message}")]
    DatasetLoad {
        source_path: String,
        message: String,
    },

    #[error("catalog format '{0}' is not supported")]
    UnsupportedFormat(String),

    #[error("Filter type {0} is not supported")]
    UnsupportedFilterType(String),
}

impl CatalogError {
    pub fn dataset_load(source_path: impl Into<String>, err: &anyhow::Error) -> Self {
        CatalogError::DatasetLoad {
            source_path: source_path.into(),
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_filter_type_names_the_mode() {
        let err = CatalogError::UnsupportedFilterType("bogus".to_string());
        assert_eq!(err.to_string(), "Filter type bogus is not supported");
    }

    #[test]
    fn dataset_load_keeps_context_chain() {
        let inner = anyhow::anyhow!("unexpected end of input").context("failed to parse json");
        let err = CatalogError::dataset_load("popis.json", &inner);

        let text = err.to_string();
        assert!(text.contains("popis.json"), "message should name the file: {text}");
        assert!(text.contains("failed to parse json"));
        assert!(text.contains("unexpected end of input"));
    }
}
