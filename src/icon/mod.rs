pub mod grid;
pub mod model;
