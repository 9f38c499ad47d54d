//! Raster surface, turtle pen, grid layout, palette and bitmap font

/// Compact 5x7 bitmap glyphs for labels and captions
pub mod font;
/// Grid geometry, validation and backdrop drawing
pub mod grid;
/// Colour constants and specification parsing
pub mod palette;
/// Line, disc and polygon rasterisation
pub mod raster;
/// RGBA raster with a centred turtle coordinate system
pub mod surface;
/// Turtle-style pen over a surface
pub mod turtle;

pub use grid::GridLayout;
pub use surface::Surface;
pub use turtle::Pen;
