pub mod aggregate;
pub mod column_query;
pub mod filter;
pub mod import_service;
pub mod query_service;
pub mod totals;
