//! Core domain types for icongrid.
//!
//! - `Colour` - RGBA colour values
//! - `Shape` - a path primitive extracted from the icon sheet
//! - `ShapeSpecification` - a shape with per-use colour, offset and flips
//! - `Icon` - an ordered stack of specifications

mod colour;
mod icon;
mod shape;
mod specification;

pub use colour::Colour;
pub use icon::{Icon, IconKey, ICON_SIZE};
pub use shape::{Shape, CELL_SIZE, PLACEHOLDER_PATH, SMALL_PLACEHOLDER_PATH};
pub use specification::{ShapeSpecification, SpecificationKey};
