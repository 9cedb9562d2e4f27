//! Matcher rules from the scheme's `node_icons` section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marks shape ids that are templates rather than concrete shapes.
pub const TEMPLATE_MARKER: char = '#';

/// One layer of an icon as written in the scheme.
///
/// Either a bare shape id (`tree`) or a map with modifiers
/// (`{shape: tree, color: white, offset: [1, 0]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeEntry {
    Id(String),
    Detailed(DetailedShape),
}

/// A shape entry with per-use modifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedShape {
    pub shape: Option<String>,
    pub color: Option<String>,
    pub offset: Option<[f64; 2]>,
    pub flip_horizontally: bool,
    pub flip_vertically: bool,
    pub outline: Option<bool>,
}

impl ShapeEntry {
    pub fn id(id: impl Into<String>) -> Self {
        ShapeEntry::Id(id.into())
    }

    /// The referenced shape id, if the entry names one.
    pub fn shape_id(&self) -> Option<&str> {
        match self {
            ShapeEntry::Id(id) => Some(id.as_str()),
            ShapeEntry::Detailed(detailed) => detailed.shape.as_deref(),
        }
    }

    /// Whether the entry refers to a template id that cannot be drawn.
    pub fn is_template(&self) -> bool {
        self.shape_id()
            .is_some_and(|id| id.contains(TEMPLATE_MARKER))
    }
}

/// A rule mapping a tag pattern to icon shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeMatcher {
    /// Tags that must all be present; `*` accepts any value.
    pub tags: BTreeMap<String, String>,

    /// Tags that disqualify a match.
    pub exception: BTreeMap<String, String>,

    /// Complete icon.
    pub shapes: Vec<ShapeEntry>,

    /// Additional icon, independent of `shapes`.
    pub add_shapes: Vec<ShapeEntry>,

    /// Base layer candidates.
    pub under_icon: Vec<ShapeEntry>,

    /// Middle layer candidates.
    pub with_icon: Vec<ShapeEntry>,

    /// Top layers, drawn over every combination.
    pub over_icon: Vec<ShapeEntry>,

    /// Whether the icon is the main icon of the feature.
    pub set_main: bool,
}

impl Default for NodeMatcher {
    fn default() -> Self {
        Self {
            tags: BTreeMap::new(),
            exception: BTreeMap::new(),
            shapes: Vec::new(),
            add_shapes: Vec::new(),
            under_icon: Vec::new(),
            with_icon: Vec::new(),
            over_icon: Vec::new(),
            set_main: true,
        }
    }
}

impl NodeMatcher {
    /// Check whether a feature with `tags` is matched by this rule.
    pub fn is_matched(&self, tags: &BTreeMap<String, String>) -> bool {
        let all_present = self
            .tags
            .iter()
            .all(|(key, value)| tag_matches(tags, key, value));
        let excluded = self
            .exception
            .iter()
            .any(|(key, value)| tag_matches(tags, key, value));

        all_present && !excluded
    }
}

fn tag_matches(tags: &BTreeMap<String, String>, key: &str, pattern: &str) -> bool {
    tags.get(key)
        .is_some_and(|value| pattern == "*" || value == pattern)
}
