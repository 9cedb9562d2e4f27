//! Grid sheet layout.
//!
//! Icons are placed left to right, top to bottom, one every `step` pixels.
//! Each icon sits on a small background plate so it stays readable when
//! the sheet is viewed over another colour.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{IconError, Result};
use crate::render::svg::{write_svg, SvgDocument, SvgElement};
use crate::types::Colour;

use super::files::ID_SEPARATOR;
use super::IconCollection;

/// Side of the background plate under every icon.
const PLATE_SIZE: f64 = 20.0;

/// Distance from the right edge at which the cursor wraps.
const WRAP_MARGIN: f64 = 8.0;

/// Column count and spacing of the grid sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub step: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 16,
            step: 24.0,
        }
    }
}

/// Where every icon of a sheet ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlacement {
    pub width: f64,
    pub height: f64,
    pub step: f64,
    pub centers: Vec<(f64, f64)>,
}

impl GridLayout {
    pub fn new(columns: usize, step: f64) -> Self {
        Self { columns, step }
    }

    /// The step must be a positive, finite number of pixels.
    pub fn validate(&self) -> Result<()> {
        if self.step.is_finite() && self.step > 0.0 {
            return Ok(());
        }
        Err(IconError::Config {
            message: format!("step must be positive, got {}", self.step),
            help: Some("24 fits 16 pixel icons with a small gap".to_string()),
        })
    }

    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    pub fn width(&self) -> f64 {
        self.columns() as f64 * self.step
    }

    /// Height allocated before placement starts: one spare row.
    pub fn initial_height(&self, count: usize) -> f64 {
        (count as f64 / self.columns() as f64 + 1.0).ceil() * self.step
    }

    /// Cell centres for `count` icons.
    ///
    /// The height grows to the next whole step whenever a row would not
    /// fit, so every plate lies inside the canvas. Call [`validate`] first:
    /// an invalid step still terminates but gives a meaningless placement.
    ///
    /// [`validate`]: GridLayout::validate
    pub fn place(&self, count: usize) -> GridPlacement {
        let width = self.width();
        let mut height = self.initial_height(count);
        let half = self.step / 2.0;

        let mut centers = Vec::with_capacity(count);
        let (mut x, mut y) = (half, half);
        for _ in 0..count {
            let bottom = y + half;
            if bottom > height {
                height = (bottom / self.step).ceil() * self.step;
            }
            centers.push((x, y));

            x += self.step;
            if x > width - WRAP_MARGIN {
                x = half;
                y += self.step;
            }
        }

        GridPlacement {
            width,
            height,
            step: self.step,
            centers,
        }
    }
}

impl IconCollection {
    /// Build the grid sheet document without writing it.
    pub fn grid_svg(&self, layout: &GridLayout, background: Colour) -> Result<(SvgDocument, GridPlacement)> {
        layout.validate()?;
        let placement = layout.place(self.len());
        let fill = background.to_string();

        let mut document = SvgDocument::new(placement.width, placement.height);
        document.push(SvgElement::rect(0.0, 0.0, placement.width, placement.height, fill.as_str()));

        let half = PLATE_SIZE / 2.0;
        for (icon, &(x, y)) in self.icons().iter().zip(&placement.centers) {
            document.push(SvgElement::rect(x - half, y - half, PLATE_SIZE, PLATE_SIZE, fill.as_str()));
            icon.draw(&mut document, (x, y));
        }

        Ok((document, placement))
    }

    /// Write every icon into one sheet at `path`.
    pub fn draw_grid(&self, path: &Path, layout: &GridLayout, background: Colour) -> Result<GridPlacement> {
        let (document, placement) = self.grid_svg(layout, background)?;
        write_svg(&document, path)?;
        Ok(placement)
    }

    /// Write a JSON index of the sheet: file id, names and centre per icon.
    pub fn write_grid_index(&self, path: &Path, placement: &GridPlacement) -> Result<()> {
        let index = GridIndex {
            width: placement.width,
            height: placement.height,
            step: placement.step,
            icons: self
                .icons()
                .iter()
                .zip(&placement.centers)
                .map(|(icon, &(x, y))| IndexEntry {
                    id: icon.shape_ids().join(ID_SEPARATOR),
                    shapes: icon.shape_ids(),
                    names: icon.names(),
                    x,
                    y,
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&index).map_err(|e| IconError::Build {
            message: format!("Failed to serialize grid index: {}", e),
            help: None,
        })?;
        fs::write(path, json).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write grid index: {}", e),
        })
    }
}

// --- Grid index serialization types ---

#[derive(Serialize)]
struct GridIndex<'a> {
    width: f64,
    height: f64,
    step: f64,
    icons: Vec<IndexEntry<'a>>,
}

#[derive(Serialize)]
struct IndexEntry<'a> {
    id: String,
    shapes: Vec<&'a str>,
    names: Vec<&'a str>,
    x: f64,
    y: f64,
}
