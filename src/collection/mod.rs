//! Icon composition.
//!
//! Expands every matcher of a scheme into concrete icons: direct shape
//! lists, and for layered matchers every base shape under the top layers,
//! optionally with one or two middle layers. Identical stacks are kept once.
//!
//! # Example
//!
//! ```ignore
//! let collection = IconCollection::from_scheme(&scheme, &extractor, &CollectionOptions::default());
//! collection.draw_grid(Path::new("grid.svg"), &GridLayout::default(), Colour::WHITE)?;
//! ```

mod files;
mod grid;

use std::collections::{BTreeSet, HashSet};

use crate::diagnostics::Diagnostics;
use crate::extract::ShapeSource;
use crate::scheme::{NodeMatcher, Scheme, ShapeEntry};
use crate::types::{Colour, Icon, IconKey, Shape};

pub use files::{file_name, IconFileOptions, ID_SEPARATOR};
pub use grid::{GridLayout, GridPlacement};

/// Options controlling which icons are generated and how they are coloured.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOptions {
    /// Foreground colour of every icon.
    pub color: Colour,

    /// Replacement for white background plates.
    pub background_color: Colour,

    /// Add single-shape icons for shapes no matcher uses (parts excluded).
    pub add_unused: bool,

    /// Add a single-shape icon for every shape, parts included.
    pub add_all: bool,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self {
            color: Colour::BLACK,
            background_color: Colour::WHITE,
            add_unused: false,
            add_all: false,
        }
    }
}

/// The ordered stacks a single matcher asks for.
///
/// Pairs of middle layers are generated in both orders; since the later
/// layer is drawn on top, the two orders are different icons.
pub fn combinations(matcher: &NodeMatcher) -> Vec<Vec<&ShapeEntry>> {
    let mut result: Vec<Vec<&ShapeEntry>> = Vec::new();

    if !matcher.shapes.is_empty() {
        result.push(matcher.shapes.iter().collect());
    }
    if !matcher.add_shapes.is_empty() {
        result.push(matcher.add_shapes.iter().collect());
    }
    if matcher.over_icon.is_empty() || matcher.under_icon.is_empty() {
        return result;
    }

    let over = matcher.over_icon.as_slice();
    for base in &matcher.under_icon {
        result.push(stacked(&[base], over));
    }
    if matcher.with_icon.is_empty() {
        return result;
    }

    for base in &matcher.under_icon {
        for middle in &matcher.with_icon {
            result.push(stacked(&[base, middle], over));
        }
        for first in &matcher.with_icon {
            for second in &matcher.with_icon {
                if first != second && first != base && second != base {
                    result.push(stacked(&[base, first, second], over));
                }
            }
        }
    }

    result
}

fn stacked<'a>(layers: &[&'a ShapeEntry], over: &'a [ShapeEntry]) -> Vec<&'a ShapeEntry> {
    layers.iter().copied().chain(over).collect()
}

/// All icons generated from a scheme.
#[derive(Debug, Clone, Default)]
pub struct IconCollection {
    icons: Vec<Icon>,
    diagnostics: Diagnostics,
}

impl IconCollection {
    pub fn new(icons: Vec<Icon>) -> Self {
        Self {
            icons,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Generate every distinct icon the scheme's matchers describe.
    pub fn from_scheme(scheme: &Scheme, source: &impl ShapeSource, options: &CollectionOptions) -> Self {
        let mut composer = Composer {
            scheme,
            source,
            options,
            icons: Vec::new(),
            seen: HashSet::new(),
            diagnostics: Diagnostics::new(),
        };

        for matcher in scheme.node_matchers() {
            for stack in combinations(matcher) {
                composer.add(&stack);
            }
        }

        let specified: BTreeSet<String> = composer
            .icons
            .iter()
            .flat_map(|icon| icon.shape_ids())
            .map(str::to_string)
            .collect();

        if options.add_unused {
            for id in source.shape_ids().difference(&specified) {
                let shape = source.get_shape(id, &mut composer.diagnostics);
                if shape.is_part {
                    continue;
                }
                composer.push_single(shape);
            }
        }

        if options.add_all {
            for id in source.shape_ids() {
                let shape = source.get_shape(&id, &mut composer.diagnostics);
                composer.push_single(shape);
            }
        }

        Self {
            icons: composer.icons,
            diagnostics: composer.diagnostics,
        }
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Stable sort by concatenated shape ids.
    pub fn sort(&mut self) {
        self.icons.sort_by_cached_key(Icon::sort_key);
    }

    /// Problems found while resolving shapes and colours.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

struct Composer<'a, S> {
    scheme: &'a Scheme,
    source: &'a S,
    options: &'a CollectionOptions,
    icons: Vec<Icon>,
    seen: HashSet<IconKey>,
    diagnostics: Diagnostics,
}

impl<S: ShapeSource> Composer<'_, S> {
    /// Build, recolour and keep the icon unless an equal one exists.
    fn add(&mut self, stack: &[&ShapeEntry]) {
        if stack.iter().any(|entry| entry.is_template()) {
            return;
        }

        let specifications = stack
            .iter()
            .map(|entry| {
                self.scheme
                    .get_shape_specification(entry, self.source, &mut self.diagnostics)
            })
            .collect();
        let Ok(mut icon) = Icon::new(specifications) else {
            return;
        };

        icon.recolor(self.options.color, Some(self.options.background_color));
        if self.seen.insert(icon.key()) {
            self.icons.push(icon);
        }
    }

    fn push_single(&mut self, shape: Shape) {
        let mut icon = Icon::single(shape);
        icon.recolor(self.options.color, None);
        self.icons.push(icon);
    }
}
