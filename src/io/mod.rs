//! Input/output operations, configuration and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Default values and limits for grid, walk and export settings
pub mod configuration;
/// Instruction dataset text format, loading and emission
pub mod dataset;
/// Error types for walk and rendering operations
pub mod error;
/// PNG export of the finished canvas
pub mod image;
/// Walk progress display
pub mod progress;
/// Scene placement capture and animated GIF export
pub mod visualization;
