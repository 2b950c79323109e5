use std::fmt;
use std::str::FromStr;

use crate::domain::error::CatalogError;

/// Which record field a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Description,
    Code,
}

impl FilterMode {
    pub const ALL: [FilterMode; 2] = [FilterMode::Description, FilterMode::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Description => "description",
            FilterMode::Code => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::Description => "Description",
            FilterMode::Code => "Code",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "description" => Ok(FilterMode::Description),
            "code" => Ok(FilterMode::Code),
            other => Err(CatalogError::UnsupportedFilterType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub mode: FilterMode,
    pub search_text: String,
}

impl FilterSpec {
    pub fn new(mode: FilterMode, search_text: impl Into<String>) -> Self {
        Self {
            mode,
            search_text: search_text.into(),
        }
    }

    /// Builds a spec from the raw selector value of the search form.
    pub fn parse(mode: &str, search_text: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self::new(mode.parse()?, search_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_modes() {
        let spec = FilterSpec::parse("code", "A1").expect("code mode should parse");
        assert_eq!(spec.mode, FilterMode::Code);
        assert_eq!(spec.search_text, "A1");

        let spec = FilterSpec::parse("description", "red").expect("description should parse");
        assert_eq!(spec.mode, FilterMode::Description);
    }

    #[test]
    fn parse_rejects_unknown_mode_with_its_value() {
        let err = FilterSpec::parse("bogus", "x").expect_err("bogus mode should fail");
        assert_eq!(err, CatalogError::UnsupportedFilterType("bogus".to_string()));
    }

    #[test]
    fn mode_names_are_case_sensitive() {
        assert!("Code".parse::<FilterMode>().is_err());
    }
}
