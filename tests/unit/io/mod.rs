pub mod dataset;
pub mod error;
pub mod progress;
pub mod visualization;
