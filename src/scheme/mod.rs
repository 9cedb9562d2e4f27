//! Icon scheme: matcher rules and named colours.
//!
//! The scheme is a YAML document. Only the parts the icon pipeline needs
//! are read; other sections are ignored.
//!
//! ```yaml
//! colors:
//!   default: "#444444"
//! node_icons:
//!   - group: Shops
//!     tags:
//!       - tags: {shop: bakery}
//!         shapes: [bread]
//! ```

mod matcher;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{IconError, Result};
use crate::extract::ShapeSource;
use crate::types::{Colour, ShapeSpecification};

pub use matcher::{DetailedShape, NodeMatcher, ShapeEntry, TEMPLATE_MARKER};

/// Shape used when a detailed entry has no `shape` key.
pub const DEFAULT_SHAPE_ID: &str = "default";

/// A named group of matchers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconGroup {
    pub group: String,
    pub tags: Vec<NodeMatcher>,
}

/// The parsed scheme document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheme {
    /// Named colours, referenced by name from shape entries.
    pub colors: HashMap<String, String>,

    /// Matcher groups for point features.
    pub node_icons: Vec<IconGroup>,
}

impl Scheme {
    /// Load a scheme from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scheme: {}", e),
        })?;
        Self::parse(&content)
    }

    /// Parse a scheme from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid scheme: {}", e),
            help: Some("Check the node_icons section of the scheme".to_string()),
        })
    }

    /// Every matcher of every group, in document order.
    pub fn node_matchers(&self) -> impl Iterator<Item = &NodeMatcher> {
        self.node_icons.iter().flat_map(|group| group.tags.iter())
    }

    /// Matchers that apply to a feature with `tags`.
    pub fn matching(&self, tags: &BTreeMap<String, String>) -> Vec<&NodeMatcher> {
        self.node_matchers()
            .filter(|matcher| matcher.is_matched(tags))
            .collect()
    }

    /// Resolve a colour name through the colour table, then as a literal.
    ///
    /// Unknown colours are reported and replaced by the default icon colour.
    pub fn get_color(&self, name: &str, diagnostics: &mut Diagnostics) -> Colour {
        let value = self
            .colors
            .get(name)
            .or_else(|| self.colors.get(&name.to_lowercase()))
            .map(String::as_str)
            .unwrap_or(name);

        match Colour::parse(value) {
            Ok(colour) => colour,
            Err(_) => {
                diagnostics.push(
                    Diagnostic::error(
                        "icongrid::scheme::unknown-colour",
                        format!("unknown colour `{}`", name),
                    )
                    .with_help("Use a colour from the scheme's colors table, a CSS name or #RRGGBB"),
                );
                Colour::DEFAULT_ICON
            }
        }
    }

    /// Turn a scheme entry into a drawable specification.
    pub fn get_shape_specification(
        &self,
        entry: &ShapeEntry,
        source: &impl ShapeSource,
        diagnostics: &mut Diagnostics,
    ) -> ShapeSpecification {
        let detailed = match entry {
            ShapeEntry::Id(id) => return ShapeSpecification::new(source.get_shape(id, diagnostics)),
            ShapeEntry::Detailed(detailed) => detailed,
        };

        let id = detailed.shape.as_deref().unwrap_or_else(|| {
            diagnostics.error(
                "icongrid::scheme::missing-shape-key",
                "invalid shape specification: `shape` key expected",
            );
            DEFAULT_SHAPE_ID
        });

        let mut specification = ShapeSpecification::new(source.get_shape(id, diagnostics));
        if let Some(color) = &detailed.color {
            specification.color = Some(self.get_color(color, diagnostics));
        }
        if let Some([x, y]) = detailed.offset {
            specification.offset = (x, y);
        }
        specification.flip_horizontally = detailed.flip_horizontally;
        specification.flip_vertically = detailed.flip_vertically;
        if let Some(outline) = detailed.outline {
            specification.use_outline = outline;
        }
        specification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ShapeExtractor;
    use crate::types::Shape;

    const SCHEME: &str = r##"
colors:
  default: "#444444"
  water: "#AADDFF"
options:
  ignored: true
node_icons:
  - group: Shops
    tags:
      - tags: {shop: bakery}
        shapes: [bread]
  - group: Towers
    tags:
      - tags: {man_made: tower}
        under_icon: [tower_lattice]
        over_icon: [{shape: circle_9, color: water}]
      - tags: {man_made: "*"}
        shapes: ["no"]
"##;

    fn source() -> ShapeExtractor {
        ShapeExtractor::from_shapes(vec![
            Shape::new("bread", "M 0,0 z", (0, 0)),
            Shape::new("tower_lattice", "M 16,0 z", (1, 0)),
            Shape::new("circle_9", "M 32,0 z", (2, 0)),
        ])
    }

    #[test]
    fn test_parse_scheme() {
        let scheme = Scheme::parse(SCHEME).unwrap();
        assert_eq!(scheme.node_icons.len(), 2);
        assert_eq!(scheme.node_icons[1].group, "Towers");
        assert_eq!(scheme.node_matchers().count(), 3);
    }

    #[test]
    fn test_invalid_scheme() {
        assert!(Scheme::parse("node_icons: 5").is_err());
    }

    #[test]
    fn test_matching() {
        let scheme = Scheme::parse(SCHEME).unwrap();
        let tags: BTreeMap<String, String> = [("man_made".to_string(), "tower".to_string())].into();

        let matchers = scheme.matching(&tags);
        assert_eq!(matchers.len(), 2);
        assert_eq!(matchers[0].under_icon, vec![ShapeEntry::id("tower_lattice")]);
    }

    #[test]
    fn test_get_color() {
        let scheme = Scheme::parse(SCHEME).unwrap();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(scheme.get_color("water", &mut diagnostics), Colour::rgb(0xAA, 0xDD, 0xFF));
        assert_eq!(scheme.get_color("Water", &mut diagnostics), Colour::rgb(0xAA, 0xDD, 0xFF));
        assert_eq!(scheme.get_color("white", &mut diagnostics), Colour::WHITE);
        assert_eq!(scheme.get_color("#123456", &mut diagnostics), Colour::rgb(0x12, 0x34, 0x56));
        assert!(diagnostics.is_empty());

        assert_eq!(scheme.get_color("blurple", &mut diagnostics), Colour::DEFAULT_ICON);
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn test_shape_specification_from_entries() {
        let scheme = Scheme::parse(SCHEME).unwrap();
        let source = source();
        let mut diagnostics = Diagnostics::new();

        let plain = scheme.get_shape_specification(&ShapeEntry::id("bread"), &source, &mut diagnostics);
        assert_eq!(plain.shape.id, "bread");
        assert_eq!(plain.color, None);

        let detailed = ShapeEntry::Detailed(DetailedShape {
            shape: Some("circle_9".to_string()),
            color: Some("water".to_string()),
            offset: Some([1.0, 2.0]),
            flip_vertically: true,
            outline: Some(false),
            ..DetailedShape::default()
        });
        let spec = scheme.get_shape_specification(&detailed, &source, &mut diagnostics);
        assert_eq!(spec.shape.anchor, (2, 0));
        assert_eq!(spec.color, Some(Colour::rgb(0xAA, 0xDD, 0xFF)));
        assert_eq!(spec.offset, (1.0, 2.0));
        assert!(spec.flip_vertically);
        assert!(!spec.use_outline);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_shape_key_uses_default() {
        let scheme = Scheme::default();
        let mut diagnostics = Diagnostics::new();

        let entry = ShapeEntry::Detailed(DetailedShape::default());
        let spec = scheme.get_shape_specification(&entry, &source(), &mut diagnostics);

        assert_eq!(spec.shape.id, DEFAULT_SHAPE_ID);
        assert!(!spec.shape.found);
        // Missing key, then the unknown `default` id.
        assert_eq!(diagnostics.error_count(), 2);
    }
}
