//! SVG output.

pub mod svg;

pub use svg::{write_svg, Canvas, SvgDocument, SvgElement};
