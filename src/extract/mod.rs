//! Shape extraction from the icon sheet.
//!
//! The sheet is an ordinary SVG document. Every `path` with an `id` whose
//! data starts with a move command becomes a shape, anchored to the 16×16
//! cell containing that first point. Other graphics in the file are ignored.
//!
//! # Example
//!
//! ```ignore
//! use icongrid::extract::{ShapeExtractor, ShapeSource};
//!
//! let extractor = ShapeExtractor::load(Path::new("icons.svg"), None)?;
//! let mut diagnostics = Diagnostics::new();
//! let tree = extractor.get_shape("tree", &mut diagnostics);
//! ```

mod anchor;
mod config;
mod sheet;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{IconError, Result};
use crate::types::{Shape, PLACEHOLDER_PATH, SMALL_PLACEHOLDER_PATH};

pub use anchor::{anchor_of, parse_move};
pub use config::{ShapeConfig, ShapeMetadata};
pub use sheet::{parse_document, shape_paths, Node};

/// Ids with a dedicated placeholder that are not reported when missing.
pub const FALLBACK_IDS: [&str; 2] = ["no", "small"];

/// Anything shapes can be looked up in.
pub trait ShapeSource {
    /// The shape with this id, if it exists.
    fn lookup(&self, id: &str) -> Option<Shape>;

    /// Every id that can be looked up.
    fn shape_ids(&self) -> BTreeSet<String>;

    /// The shape with this id, or a placeholder.
    ///
    /// Missing ids other than the fallback ids are reported as errors.
    fn get_shape(&self, id: &str, diagnostics: &mut Diagnostics) -> Shape {
        if let Some(shape) = self.lookup(id) {
            return shape;
        }
        if !FALLBACK_IDS.contains(&id) {
            diagnostics.push(
                Diagnostic::error(
                    "icongrid::extract::unknown-shape",
                    format!("no such shape id `{}`", id),
                )
                .with_help("Add a path with this id to the icon sheet"),
            );
        }
        Shape::placeholder(id)
    }
}

/// Result of a raw path lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLookup<'a> {
    pub path: &'a str,
    pub anchor: (i32, i32),
    pub found: bool,
}

/// Shapes extracted from an SVG sheet.
#[derive(Debug, Clone, Default)]
pub struct ShapeExtractor {
    shapes: BTreeMap<String, Shape>,
    diagnostics: Diagnostics,
}

impl ShapeExtractor {
    /// Read the sheet and optional metadata file from disk.
    pub fn load(svg_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let svg = std::fs::read_to_string(svg_path).map_err(|e| IconError::Io {
            path: svg_path.to_path_buf(),
            message: format!("Failed to read icon sheet: {}", e),
        })?;
        let config = match config_path {
            Some(path) => ShapeConfig::load(path)?,
            None => ShapeConfig::default(),
        };
        Self::from_svg(&svg, &config)
    }

    /// Extract shapes from SVG text.
    ///
    /// Paths whose data does not start with a parseable move command are
    /// reported and left out.
    pub fn from_svg(svg: &str, config: &ShapeConfig) -> Result<Self> {
        let root = parse_document(svg)?;
        let mut extractor = Self::default();

        for node in shape_paths(&root) {
            let (Some(id), Some(d)) = (node.get_attr("id"), node.get_attr("d")) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }

            let Some(anchor) = anchor_of(d) else {
                extractor.diagnostics.push(Diagnostic::error(
                    "icongrid::extract::invalid-path",
                    format!("invalid path for `{}`: {}", id, d),
                ));
                continue;
            };

            let shape = config.apply(Shape::new(id, d, anchor));
            if extractor.shapes.insert(id.to_string(), shape).is_some() {
                extractor.diagnostics.warning(
                    "icongrid::extract::duplicate-shape",
                    format!("shape id `{}` is defined more than once; using the last", id),
                );
            }
        }

        Ok(extractor)
    }

    /// Build an extractor from already constructed shapes.
    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            shapes: shapes
                .into_iter()
                .map(|shape| (shape.id.clone(), shape))
                .collect(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Raw path data, anchor and whether the id was found.
    pub fn get_path(&self, id: &str) -> PathLookup<'_> {
        match self.shapes.get(id) {
            Some(shape) => PathLookup {
                path: &shape.path,
                anchor: shape.anchor,
                found: true,
            },
            None => PathLookup {
                path: if id == "small" {
                    SMALL_PLACEHOLDER_PATH
                } else {
                    PLACEHOLDER_PATH
                },
                anchor: (0, 0),
                found: false,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Problems found while reading the sheet.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

impl ShapeSource for ShapeExtractor {
    fn lookup(&self, id: &str) -> Option<Shape> {
        self.shapes.get(id).cloned()
    }

    fn shape_ids(&self) -> BTreeSet<String> {
        self.shapes.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64">
  <rect width="64" height="64" fill="white"/>
  <g id="icons">
    <path id="tree" d="M 32,48 l 4,0 0,4 z"/>
    <path id="bench" d="M 2,2 l 4,0 z"/>
    <path id="broken" d="L 2,2 z"/>
    <path d="M 16,16 z"/>
    <path id="" d="M 16,16 z"/>
  </g>
</svg>"#;

    fn extractor() -> ShapeExtractor {
        ShapeExtractor::from_svg(SHEET, &ShapeConfig::default()).unwrap()
    }

    #[test]
    fn test_extract_anchors() {
        let extractor = extractor();
        assert_eq!(extractor.len(), 2);

        let lookup = extractor.get_path("tree");
        assert_eq!(lookup.anchor, (2, 3));
        assert_eq!(lookup.path, "M 32,48 l 4,0 0,4 z");
        assert!(lookup.found);
    }

    #[test]
    fn test_invalid_path_reported_and_omitted() {
        let extractor = extractor();
        assert!(extractor.lookup("broken").is_none());
        assert_eq!(extractor.diagnostics().error_count(), 1);
        let message = &extractor.diagnostics().iter().next().unwrap().message;
        assert!(message.contains("broken"));
    }

    #[test]
    fn test_fallback_paths() {
        let extractor = extractor();

        let no = extractor.get_path("no");
        assert_eq!(no.path, PLACEHOLDER_PATH);
        assert_eq!(no.anchor, (0, 0));
        assert!(!no.found);

        let small = extractor.get_path("small");
        assert_eq!(small.path, SMALL_PLACEHOLDER_PATH);
        assert!(!small.found);

        let other = extractor.get_path("missing");
        assert_eq!(other.path, PLACEHOLDER_PATH);
        assert!(!other.found);
    }

    #[test]
    fn test_get_shape_reports_unknown_ids_only() {
        let extractor = extractor();
        let mut diagnostics = Diagnostics::new();

        assert!(extractor.get_shape("tree", &mut diagnostics).found);
        assert!(!extractor.get_shape("no", &mut diagnostics).found);
        assert!(!extractor.get_shape("small", &mut diagnostics).found);
        assert!(diagnostics.is_empty());

        let missing = extractor.get_shape("missing", &mut diagnostics);
        assert!(!missing.found);
        assert_eq!(missing.path, PLACEHOLDER_PATH);
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn test_config_is_applied() {
        let config = ShapeConfig::parse(r#"{"bench": {"name": "Bench", "is_part": true}}"#).unwrap();
        let extractor = ShapeExtractor::from_svg(SHEET, &config).unwrap();

        let bench = extractor.lookup("bench").unwrap();
        assert_eq!(bench.display_name(), "Bench");
        assert!(bench.is_part);
    }

    #[test]
    fn test_duplicate_ids_warn() {
        let svg = r#"<svg><path id="a" d="M 0,0 z"/><path id="a" d="M 16,0 z"/></svg>"#;
        let extractor = ShapeExtractor::from_svg(svg, &ShapeConfig::default()).unwrap();

        assert_eq!(extractor.get_path("a").anchor, (1, 0));
        assert_eq!(extractor.diagnostics().warning_count(), 1);
    }

    #[test]
    fn test_shape_ids() {
        let ids: Vec<_> = extractor().shape_ids().into_iter().collect();
        assert_eq!(ids, vec!["bench", "tree"]);
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let result = ShapeExtractor::load(Path::new("/nonexistent/icons.svg"), None);
        assert!(matches!(result, Err(IconError::Io { .. })));
    }
}
