pub mod grid;
pub mod state;
