use crate::domain::entities::schema::ColumnField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: ColumnField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub field: ColumnField,
    pub term: String,
}

/// Grid-side narrowing and ordering applied on top of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnQuery {
    pub filter: Option<ColumnFilter>,
    pub sort: Option<SortSpec>,
}
