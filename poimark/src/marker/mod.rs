//! Marker display types: the vector icon drawn at a POI and its associated color.

mod color;
mod icon;

pub use color::*;
pub use icon::*;
