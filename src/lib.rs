//! icongrid - Map icon composition from an SVG shape sheet
//!
//! Shapes are extracted from one SVG sheet, combined into layered icons
//! according to the tag rules of a scheme, and written out as a grid sheet
//! and as individual SVG files.

pub mod cli;
pub mod collection;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod output;
pub mod render;
pub mod scheme;
pub mod types;

pub use collection::{
    combinations, file_name, CollectionOptions, GridLayout, GridPlacement, IconCollection,
    IconFileOptions,
};
pub use config::{Config, CONFIG_FILENAME};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{IconError, Result};
pub use extract::{ShapeConfig, ShapeExtractor, ShapeSource};
pub use render::{SvgDocument, SvgElement};
pub use scheme::{NodeMatcher, Scheme, ShapeEntry};
pub use types::{Colour, Icon, Shape, ShapeSpecification};
