//! One SVG file per icon.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{IconError, Result};
use crate::types::{Colour, Icon};

use super::IconCollection;

/// Joins shape ids in by-id file names.
pub const ID_SEPARATOR: &str = "___";

/// How individual icon files are named and drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFileOptions {
    /// Name files after shape names instead of shape ids.
    pub by_name: bool,

    /// First word of by-name file names.
    pub name_prefix: String,

    /// Overrides the colour of every layer when set.
    pub color: Option<Colour>,

    pub outline: bool,
    pub outline_opacity: f64,
}

impl Default for IconFileOptions {
    fn default() -> Self {
        Self {
            by_name: false,
            name_prefix: "Röntgen".to_string(),
            color: None,
            outline: false,
            outline_opacity: 1.0,
        }
    }
}

/// File name for `icon`: `a___b.svg` or `<prefix> A + B.svg`.
pub fn file_name(icon: &Icon, options: &IconFileOptions) -> String {
    let stem = if options.by_name {
        let names = icon.names().join(" + ");
        if options.name_prefix.is_empty() {
            names
        } else {
            format!("{} {}", options.name_prefix, names)
        }
    } else {
        icon.shape_ids().join(ID_SEPARATOR)
    };
    format!("{}.svg", stem.replace(['/', '\\'], "_"))
}

impl IconCollection {
    /// Write every icon into `dir`, creating it if needed.
    ///
    /// Icons that map to the same file name overwrite each other, so the
    /// returned count is the number of distinct files in `dir`.
    pub fn draw_icons(&self, dir: &Path, options: &IconFileOptions) -> Result<usize> {
        fs::create_dir_all(dir).map_err(|e| IconError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create icon directory: {}", e),
        })?;

        let mut written = HashSet::new();
        for icon in self.icons() {
            let name = file_name(icon, options);
            icon.draw_to_file(&dir.join(&name), options.color, options.outline, options.outline_opacity)?;
            written.insert(name);
        }
        Ok(written.len())
    }
}
