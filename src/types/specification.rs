//! A shape plus the modifiers of one particular use.

use crate::render::svg::{number, Canvas, SvgElement};

use super::{Colour, Shape};

/// Stroke width of the outline drawn beneath shapes.
const OUTLINE_WIDTH: &str = "2.2";

/// A shape with colour, offset and flips applied.
#[derive(Debug, Clone)]
pub struct ShapeSpecification {
    pub shape: Shape,

    /// Fill colour; `None` until the icon is recoloured.
    pub color: Option<Colour>,

    /// Extra pixel offset applied when drawing.
    pub offset: (f64, f64),

    pub flip_horizontally: bool,
    pub flip_vertically: bool,

    /// Whether the outline pass draws this shape.
    pub use_outline: bool,
}

/// Hashable structural identity of a specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecificationKey {
    pub shape_id: String,
    pub color: Option<Colour>,
    pub offset: (u64, u64),
    pub flip_horizontally: bool,
    pub flip_vertically: bool,
}

impl ShapeSpecification {
    /// Plain, uncoloured use of a shape.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            color: None,
            offset: (0.0, 0.0),
            flip_horizontally: false,
            flip_vertically: false,
            use_outline: true,
        }
    }

    pub fn with_color(mut self, color: Colour) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn flipped_horizontally(mut self) -> Self {
        self.flip_horizontally = true;
        self
    }

    pub fn key(&self) -> SpecificationKey {
        SpecificationKey {
            shape_id: self.shape.id.clone(),
            color: self.color,
            offset: (float_bits(self.offset.0), float_bits(self.offset.1)),
            flip_horizontally: self.flip_horizontally,
            flip_vertically: self.flip_vertically,
        }
    }

    /// Colour the shape is drawn with.
    pub fn fill(&self) -> Colour {
        self.color.unwrap_or(Colour::DEFAULT_ICON)
    }

    /// Draw the shape centred on `point`.
    pub fn draw(&self, canvas: &mut impl Canvas, point: (f64, f64)) {
        canvas.add(self.element(point).attr("fill", self.fill().to_string()));
    }

    /// Draw the thickened outline of the shape centred on `point`.
    pub fn draw_outline(&self, canvas: &mut impl Canvas, point: (f64, f64), opacity: f64) {
        if !self.use_outline {
            return;
        }
        let colour = self.fill().outline().to_string();
        canvas.add(
            self.element(point)
                .attr("fill", colour.clone())
                .attr("stroke", colour)
                .attr("stroke-width", OUTLINE_WIDTH)
                .attr("stroke-linejoin", "round")
                .attr("opacity", number(opacity)),
        );
    }

    fn element(&self, point: (f64, f64)) -> SvgElement {
        let shift = (
            point.0.trunc() + self.offset.0,
            point.1.trunc() + self.offset.1,
        );
        let mut transform = format!("translate({},{})", number(shift.0), number(shift.1));

        let scale = (
            if self.flip_horizontally { -1 } else { 1 },
            if self.flip_vertically { -1 } else { 1 },
        );
        if scale != (1, 1) {
            transform.push_str(&format!(" scale({},{})", scale.0, scale.1));
        }

        let (dx, dy) = self.shape.offset();
        transform.push_str(&format!(" translate({},{})", number(dx), number(dy)));

        SvgElement::path(self.shape.path.clone()).attr("transform", transform)
    }
}

impl PartialEq for ShapeSpecification {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ShapeSpecification {}

/// Bit pattern of a float with `-0.0` folded into `0.0`.
fn float_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
