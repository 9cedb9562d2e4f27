//! Minimal SVG document model.
//!
//! Icons and grid sheets are built as a small element tree and serialized
//! in one pass. Only the handful of elements the pipeline emits are needed.

use std::fs;
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::{IconError, Result};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An SVG element with ordered attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A `<g>` element.
    pub fn group() -> Self {
        Self::new("g")
    }

    /// A `<path>` element with the given path data.
    pub fn path(d: impl Into<String>) -> Self {
        Self::new("path").attr("d", d)
    }

    /// A filled `<rect>` element.
    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self::new("rect")
            .attr("x", number(x))
            .attr("y", number(y))
            .attr("width", number(width))
            .attr("height", number(height))
            .attr("fill", fill)
    }

    /// Add an attribute (builder style).
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Get an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Append a child element.
    pub fn push(&mut self, child: SvgElement) {
        self.children.push(child);
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write(out);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

/// A standalone SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub children: Vec<SvgElement>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, element: SvgElement) {
        self.children.push(element);
    }

    /// Serialize to SVG text.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\">",
            SVG_NAMESPACE,
            number(self.width),
            number(self.height)
        ));
        for child in &self.children {
            child.write(&mut out);
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Anything SVG elements can be drawn into.
pub trait Canvas {
    fn add(&mut self, element: SvgElement);
}

impl Canvas for SvgDocument {
    fn add(&mut self, element: SvgElement) {
        self.push(element);
    }
}

impl Canvas for SvgElement {
    fn add(&mut self, element: SvgElement) {
        self.push(element);
    }
}

/// Write a document to disk.
pub fn write_svg(document: &SvgDocument, path: &Path) -> Result<()> {
    fs::write(path, document.to_svg_string()).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })
}

/// Format a coordinate without a trailing `.0`.
pub fn number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(12.0), "12");
        assert_eq!(number(-8.0), "-8");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(2.5), "2.5");
    }

    #[test]
    fn test_serialize_document() {
        let mut doc = SvgDocument::new(16.0, 16.0);
        let mut group = SvgElement::group().attr("opacity", "0.5");
        group.push(SvgElement::path("M 0,0 L 1,1").attr("fill", "#000000"));
        doc.push(SvgElement::rect(0.0, 0.0, 16.0, 16.0, "#FFFFFF"));
        doc.push(group);

        assert_eq!(
            doc.to_svg_string(),
            "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\" height=\"16\">\
             <rect x=\"0\" y=\"0\" width=\"16\" height=\"16\" fill=\"#FFFFFF\"/>\
             <g opacity=\"0.5\"><path d=\"M 0,0 L 1,1\" fill=\"#000000\"/></g>\
             </svg>\n"
        );
    }

    #[test]
    fn test_attribute_escaping() {
        let mut doc = SvgDocument::new(1.0, 1.0);
        doc.push(SvgElement::new("text").attr("id", "a<b&\"c\""));
        let svg = doc.to_svg_string();
        assert!(svg.contains("id=\"a&lt;b&amp;&quot;c&quot;\""));
    }

    #[test]
    fn test_get_attr() {
        let rect = SvgElement::rect(1.0, 2.0, 3.0, 4.0, "#000000");
        assert_eq!(rect.get_attr("y"), Some("2"));
        assert_eq!(rect.get_attr("rx"), None);
    }

    #[test]
    fn test_write_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        write_svg(&SvgDocument::new(4.0, 4.0), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("width=\"4\""));
    }
}
