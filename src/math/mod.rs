//! Mathematical utilities for path construction

/// Angle conversions, heading vectors and arc sampling
pub mod geometry;
