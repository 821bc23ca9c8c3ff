pub mod bracket;
pub mod dataset;
