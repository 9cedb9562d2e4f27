//! Reading the icon sheet into a small element tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{IconError, Result};

/// An XML element with attributes and element children. Text is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parse a document and return its root element.
pub fn parse_document(svg: &str) -> Result<Node> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event()? {
            Event::Start(start) => return parse_element(&mut reader, &start),
            Event::Empty(start) => return parse_start(&start),
            Event::Eof => {
                return Err(IconError::Parse {
                    message: "No root element found".to_string(),
                    help: None,
                })
            }
            _ => {}
        }
    }
}

/// Path elements worth extracting, in document order.
///
/// Only `g` and `path` children of the root `svg` are considered; groups
/// are searched recursively.
pub fn shape_paths(root: &Node) -> Vec<&Node> {
    let mut paths = Vec::new();
    if root.name != "svg" {
        return paths;
    }
    for child in &root.children {
        if child.name == "g" || child.name == "path" {
            collect_paths(child, &mut paths);
        }
    }
    paths
}

fn collect_paths<'a>(node: &'a Node, paths: &mut Vec<&'a Node>) {
    if node.name == "path" {
        paths.push(node);
        return;
    }
    for child in &node.children {
        collect_paths(child, paths);
    }
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Node> {
    let mut node = parse_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => node.children.push(parse_element(reader, &start)?),
            Event::Empty(start) => node.children.push(parse_start(&start)?),
            Event::End(_) => break,
            Event::Eof => {
                return Err(IconError::Parse {
                    message: format!("Unexpected end of file inside <{}>", node.name),
                    help: None,
                })
            }
            _ => {}
        }
    }

    Ok(node)
}

fn parse_start(start: &BytesStart) -> Result<Node> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| IconError::Parse {
            message: format!("Invalid attribute in <{}>: {}", name, e),
            help: None,
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Node {
        name,
        attributes,
        children: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree() {
        let root = parse_document(
            r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="32">
  <g id="layer"><path id="a" d="M 1,1 z"/></g>
  <rect/>
</svg>"#,
        )
        .unwrap();

        assert_eq!(root.name, "svg");
        assert_eq!(root.get_attr("width"), Some("32"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].children[0].get_attr("id"), Some("a"));
    }

    #[test]
    fn test_shape_paths_skip_non_group_children() {
        let root = parse_document(
            r#"<svg>
  <defs><path id="hidden" d="M 1,1 z"/></defs>
  <path id="top" d="M 1,1 z"/>
  <g><g><path id="nested" d="M 1,1 z"/></g><text><path id="deep" d="M 1,1 z"/></text></g>
</svg>"#,
        )
        .unwrap();

        let ids: Vec<_> = shape_paths(&root)
            .iter()
            .filter_map(|p| p.get_attr("id"))
            .collect();
        assert_eq!(ids, vec!["top", "nested", "deep"]);
    }

    #[test]
    fn test_non_svg_root_has_no_shapes() {
        let root = parse_document(r#"<html><path id="a" d="M 1,1 z"/></html>"#).unwrap();
        assert!(shape_paths(&root).is_empty());
    }

    #[test]
    fn test_unclosed_document_is_error() {
        assert!(parse_document("<svg><g>").is_err());
        assert!(parse_document("").is_err());
    }
}
