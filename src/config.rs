//! Project configuration (icongrid.yaml) parsing.
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Command-line flags override values read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collection::{CollectionOptions, GridLayout, IconFileOptions};
use crate::error::{IconError, Result};
use crate::types::Colour;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "icongrid.yaml";

/// Configuration loaded from icongrid.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SVG sheet containing the shapes.
    pub icons: PathBuf,

    /// Optional JSON file with shape names, parts and categories.
    pub icons_config: Option<PathBuf>,

    /// Scheme document with the matcher rules.
    pub scheme: PathBuf,

    /// Output directory.
    pub output: PathBuf,

    /// Sheet background, also replaces white plates.
    pub background_color: Colour,

    /// Foreground colour of every icon.
    pub color: Colour,

    pub add_unused: bool,
    pub add_all: bool,

    /// Grid columns.
    pub columns: usize,

    /// Pixels between cell centres.
    pub step: f64,

    /// Draw an outline under individual icon files.
    pub outline: bool,
    pub outline_opacity: f64,

    /// First word of by-name icon file names.
    pub name_prefix: String,

    /// Also write a JSON index of the grid sheet.
    pub index: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icons: PathBuf::from("icons/icons.svg"),
            icons_config: None,
            scheme: PathBuf::from("scheme/default.yml"),
            output: PathBuf::from("out"),
            background_color: Colour::WHITE,
            color: Colour::BLACK,
            add_unused: false,
            add_all: false,
            columns: 16,
            step: 24.0,
            outline: false,
            outline_opacity: 1.0,
            name_prefix: "Röntgen".to_string(),
            index: false,
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read configuration: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse and validate configuration from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid configuration: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `icongrid.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(IconError::Config {
                message: "columns must be at least 1".to_string(),
                help: None,
            });
        }
        self.layout().validate()?;
        if !(0.0..=1.0).contains(&self.outline_opacity) {
            return Err(IconError::Config {
                message: format!("outline_opacity must be between 0 and 1, got {}", self.outline_opacity),
                help: None,
            });
        }
        Ok(())
    }

    /// Serialize for `init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IconError::Build {
            message: format!("Failed to serialize configuration: {}", e),
            help: None,
        })
    }

    pub fn collection_options(&self) -> CollectionOptions {
        CollectionOptions {
            color: self.color,
            background_color: self.background_color,
            add_unused: self.add_unused,
            add_all: self.add_all,
        }
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.columns, self.step)
    }

    pub fn file_options(&self, by_name: bool) -> IconFileOptions {
        IconFileOptions {
            by_name,
            name_prefix: self.name_prefix.clone(),
            color: None,
            outline: self.outline,
            outline_opacity: self.outline_opacity,
        }
    }

    pub fn grid_path(&self) -> PathBuf {
        self.output.join("icon_grid.svg")
    }

    pub fn index_path(&self) -> PathBuf {
        self.output.join("icon_grid.json")
    }

    pub fn by_id_dir(&self) -> PathBuf {
        self.output.join("icons_by_id")
    }

    pub fn by_name_dir(&self) -> PathBuf {
        self.output.join("icons_by_name")
    }
}
