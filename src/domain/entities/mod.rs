pub mod cell;
pub mod column_query;
pub mod filter;
pub mod record;
pub mod schema;
pub mod summary;
