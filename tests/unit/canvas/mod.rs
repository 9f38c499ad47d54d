pub mod font;
pub mod palette;
pub mod surface;
