pub mod dataset;
pub mod theme;
