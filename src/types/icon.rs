//! Composite icons: ordered stacks of shape specifications.
//!
//! Later specifications are drawn over earlier ones, so the order of the
//! stack is part of an icon's identity.

use std::path::Path;

use crate::error::{IconError, Result};
use crate::render::svg::{write_svg, Canvas, SvgDocument, SvgElement};

use super::specification::SpecificationKey;
use super::{Colour, Shape, ShapeSpecification};

/// Side of an individual icon file in pixels.
pub const ICON_SIZE: f64 = 16.0;

/// One map symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    specifications: Vec<ShapeSpecification>,
}

/// Hashable, order-sensitive identity of an icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconKey(Vec<SpecificationKey>);

impl Icon {
    /// Build an icon from a non-empty stack.
    pub fn new(specifications: Vec<ShapeSpecification>) -> Result<Self> {
        if specifications.is_empty() {
            return Err(IconError::Build {
                message: "Icon has no shapes".to_string(),
                help: Some("Every icon needs at least one shape specification".to_string()),
            });
        }
        Ok(Self { specifications })
    }

    /// Icon consisting of a single uncoloured shape.
    pub fn single(shape: Shape) -> Self {
        Self {
            specifications: vec![ShapeSpecification::new(shape)],
        }
    }

    pub fn specifications(&self) -> &[ShapeSpecification] {
        &self.specifications
    }

    pub fn shape_ids(&self) -> Vec<&str> {
        self.specifications
            .iter()
            .map(|s| s.shape.id.as_str())
            .collect()
    }

    /// Human-readable names of every layer.
    pub fn names(&self) -> Vec<&str> {
        self.specifications
            .iter()
            .map(|s| s.shape.display_name())
            .collect()
    }

    pub fn key(&self) -> IconKey {
        IconKey(self.specifications.iter().map(|s| s.key()).collect())
    }

    /// Key for deterministic ordering in grids.
    pub fn sort_key(&self) -> String {
        self.shape_ids().concat()
    }

    /// Apply the foreground colour, turning white plates into `white`.
    ///
    /// Explicit colours other than white are kept.
    pub fn recolor(&mut self, color: Colour, white: Option<Colour>) {
        for specification in &mut self.specifications {
            specification.color = match (specification.color, white) {
                (Some(Colour::WHITE), Some(background)) => Some(background),
                (Some(Colour::WHITE), None) | (None, _) => Some(color),
                (Some(explicit), _) => Some(explicit),
            };
        }
    }

    /// Draw the icon centred on `point`.
    pub fn draw(&self, canvas: &mut impl Canvas, point: (f64, f64)) {
        let mut group = SvgElement::group();
        for specification in &self.specifications {
            specification.draw(&mut group, point);
        }
        canvas.add(group);
    }

    /// Draw the outline of every layer centred on `point`.
    pub fn draw_outline(&self, canvas: &mut impl Canvas, point: (f64, f64), opacity: f64) {
        let mut group = SvgElement::group();
        for specification in &self.specifications {
            specification.draw_outline(&mut group, point, opacity);
        }
        canvas.add(group);
    }

    /// Render the icon alone into a 16×16 document.
    ///
    /// A `color` overrides the colour of every layer.
    pub fn to_document(&self, color: Option<Colour>, outline: bool, outline_opacity: f64) -> SvgDocument {
        let mut icon = self.clone();
        if let Some(color) = color {
            for specification in &mut icon.specifications {
                specification.color = Some(color);
            }
        }

        let centre = (ICON_SIZE / 2.0, ICON_SIZE / 2.0);
        let mut document = SvgDocument::new(ICON_SIZE, ICON_SIZE);
        if outline {
            icon.draw_outline(&mut document, centre, outline_opacity);
        }
        icon.draw(&mut document, centre);
        document
    }

    pub fn to_svg(&self, color: Option<Colour>, outline: bool, outline_opacity: f64) -> String {
        self.to_document(color, outline, outline_opacity).to_svg_string()
    }

    pub fn draw_to_file(
        &self,
        path: &Path,
        color: Option<Colour>,
        outline: bool,
        outline_opacity: f64,
    ) -> Result<()> {
        write_svg(&self.to_document(color, outline, outline_opacity), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str) -> ShapeSpecification {
        ShapeSpecification::new(Shape::new(id, "M 0,0 l 4,4", (0, 0)))
    }

    #[test]
    fn test_empty_icon_rejected() {
        assert!(Icon::new(vec![]).is_err());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab = Icon::new(vec![spec("a"), spec("b")]).unwrap();
        let ab2 = Icon::new(vec![spec("a"), spec("b")]).unwrap();
        let ba = Icon::new(vec![spec("b"), spec("a")]).unwrap();

        assert_eq!(ab, ab2);
        assert_eq!(ab.key(), ab2.key());
        assert_ne!(ab, ba);
        assert_ne!(ab.key(), ba.key());
    }

    #[test]
    fn test_recolor_background_plate() {
        let mut icon = Icon::new(vec![
            spec("plate").with_color(Colour::WHITE),
            spec("ink"),
        ])
        .unwrap();
        let red = Colour::rgb(255, 0, 0);
        let blue = Colour::rgb(0, 0, 255);

        icon.recolor(red, Some(blue));

        assert_eq!(icon.specifications()[0].color, Some(blue));
        assert_eq!(icon.specifications()[1].color, Some(red));
    }

    #[test]
    fn test_recolor_keeps_explicit_colour() {
        let green = Colour::rgb(0, 128, 0);
        let mut icon = Icon::new(vec![spec("a").with_color(green), spec("b").with_color(Colour::WHITE)]).unwrap();

        icon.recolor(Colour::BLACK, None);

        assert_eq!(icon.specifications()[0].color, Some(green));
        assert_eq!(icon.specifications()[1].color, Some(Colour::BLACK));
    }

    #[test]
    fn test_names_and_sort_key() {
        let named = Shape::new("tree", "M 0,0", (0, 0)).with_name("Tree");
        let icon = Icon::new(vec![ShapeSpecification::new(named), spec("fence")]).unwrap();

        assert_eq!(icon.shape_ids(), vec!["tree", "fence"]);
        assert_eq!(icon.names(), vec!["Tree", "fence"]);
        assert_eq!(icon.sort_key(), "treefence");
    }

    #[test]
    fn test_draw_order_follows_stack() {
        let icon = Icon::new(vec![spec("bottom"), spec("top")]).unwrap();
        let mut doc = SvgDocument::new(24.0, 24.0);
        icon.draw(&mut doc, (12.0, 12.0));

        let group = &doc.children[0];
        assert_eq!(group.name, "g");
        assert_eq!(group.children.len(), 2);
        assert_eq!(group.get_attr("opacity"), None);
    }

    #[test]
    fn test_to_document_with_outline() {
        let icon = Icon::new(vec![spec("a")]).unwrap();
        let doc = icon.to_document(Some(Colour::BLACK), true, 0.4);

        assert_eq!(doc.width, 16.0);
        assert_eq!(doc.children.len(), 2);

        let outline = &doc.children[0].children[0];
        assert_eq!(outline.get_attr("stroke"), Some("#FFFFFF"));
        assert_eq!(outline.get_attr("opacity"), Some("0.4"));

        let ink = &doc.children[1].children[0];
        assert_eq!(ink.get_attr("fill"), Some("#000000"));
        assert_eq!(ink.get_attr("transform"), Some("translate(8,8) translate(-8,-8)"));
    }

    #[test]
    fn test_draw_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.svg");
        Icon::single(Shape::new("a", "M 0,0 l 4,4", (0, 0)))
            .draw_to_file(&path, None, false, 1.0)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("d=\"M 0,0 l 4,4\""));
        assert!(content.contains("fill=\"#444444\""));
    }
}
