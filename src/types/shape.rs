//! Shape primitives extracted from the icon sheet.
//!
//! Every shape is a single SVG path drawn somewhere on a sheet divided into
//! 16×16 cells. The cell that contains the path's first point is its anchor;
//! drawing a shape translates the centre of that cell to the target point.

use std::collections::BTreeSet;

/// Side of one sheet cell in pixels.
pub const CELL_SIZE: i32 = 16;

/// Placeholder drawn for unknown ids and for the `no` fallback id.
pub const PLACEHOLDER_PATH: &str = "M 4,4 L 4,10 10,10 10,4 z";

/// Smaller placeholder for the `small` fallback id.
pub const SMALL_PLACEHOLDER_PATH: &str = "M 6,6 L 6,8 8,8 8,6 z";

/// A named path primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Shape identifier (the `id` attribute in the sheet).
    pub id: String,

    /// Raw SVG path data.
    pub path: String,

    /// Sheet cell the path lives in.
    pub anchor: (i32, i32),

    /// Human-readable name, if configured.
    pub name: Option<String>,

    /// Only valid as a layer of a composite icon.
    pub is_part: bool,

    /// Free-form categories from the shape configuration.
    pub categories: BTreeSet<String>,

    /// False when this is a placeholder standing in for a missing shape.
    pub found: bool,
}

impl Shape {
    /// Create a shape found in the sheet.
    pub fn new(id: impl Into<String>, path: impl Into<String>, anchor: (i32, i32)) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            anchor,
            name: None,
            is_part: false,
            categories: BTreeSet::new(),
            found: true,
        }
    }

    /// Create a placeholder for an id the sheet does not contain.
    pub fn placeholder(id: impl Into<String>) -> Self {
        let id = id.into();
        let path = if id == "small" {
            SMALL_PLACEHOLDER_PATH
        } else {
            PLACEHOLDER_PATH
        };
        Self {
            found: false,
            ..Self::new(id, path, (0, 0))
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_part(mut self, is_part: bool) -> Self {
        self.is_part = is_part;
        self
    }

    /// Pixel translation moving the anchor cell's centre to the origin.
    pub fn offset(&self) -> (f64, f64) {
        let cell = CELL_SIZE as f64;
        (
            -(self.anchor.0 as f64) * cell - cell / 2.0,
            -(self.anchor.1 as f64) * cell - cell / 2.0,
        )
    }

    /// Name for file names and listings, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
