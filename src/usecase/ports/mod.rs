pub mod grid;
pub mod source;
