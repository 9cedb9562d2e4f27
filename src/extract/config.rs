//! Per-shape metadata loaded from a JSON file.
//!
//! ```json
//! {
//!   "tree": { "name": "tree", "categories": ["nature"] },
//!   "circle_9": { "name": "circle", "is_part": true }
//! }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::types::Shape;

/// Metadata for one shape id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub is_part: bool,

    #[serde(default)]
    pub categories: BTreeSet<String>,
}

/// Metadata for every configured shape, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeConfig {
    shapes: HashMap<String, ShapeMetadata>,
}

impl ShapeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read shape configuration: {}", e),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid shape configuration: {}", e),
            help: Some("Expected a JSON object mapping shape ids to metadata".to_string()),
        })
    }

    pub fn get(&self, id: &str) -> Option<&ShapeMetadata> {
        self.shapes.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, metadata: ShapeMetadata) {
        self.shapes.insert(id.into(), metadata);
    }

    /// Copy the configured metadata of `shape.id` onto the shape.
    pub fn apply(&self, mut shape: Shape) -> Shape {
        if let Some(metadata) = self.get(&shape.id) {
            shape.name = metadata.name.clone();
            shape.is_part = metadata.is_part;
            shape.categories = metadata.categories.clone();
        }
        shape
    }
}
