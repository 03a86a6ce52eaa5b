//! # Shape Extractor
//!
//! Reads the markup, rejects raster content, and dispatches each recognized
//! element to its [`ShapeKind`] conversion.
//!
//! Extraction runs in two passes. The first collects every element with its
//! attributes; the second converts shapes. Raster detection therefore wins
//! over any shape error further down the document.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::error::SvgError;
use crate::primitive::RawPrimitive;
use crate::raster;
use crate::shapes::ShapeKind;

/// One markup element: lowercase local name and attributes in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    /// Returns the value of the attribute with the given local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Extracts all supported shapes from a drawing.
///
/// ## Parameters
///
/// - `svg`: raw document bytes
///
/// ## Errors
///
/// - `InvalidInput` when the markup does not parse
/// - `UnsupportedContent` when a raster image is embedded or referenced
/// - `UnsupportedPathCommand` when a path uses curves or arcs
/// - `EmptyGeometry` when no shape yields at least three points
///
/// # Example
///
/// ```rust
/// use stamp_svg::extract_primitives;
///
/// let svg = br#"<svg><polyline points="0,0 5,0 5,5"/></svg>"#;
/// let prims = extract_primitives(svg).unwrap();
/// assert!(!prims[0].is_closed());
/// ```
pub fn extract_primitives(svg: &[u8]) -> Result<Vec<RawPrimitive>, SvgError> {
    let elements = read_elements(svg)?;

    if let Some(detail) = elements.iter().find_map(raster::raster_reference) {
        warn!(detail = %detail, "rejecting drawing with raster content");
        return Err(SvgError::unsupported_content(detail));
    }

    let mut primitives = Vec::new();
    for element in &elements {
        let Some(kind) = ShapeKind::from_tag(&element.name) else {
            continue;
        };
        match kind.to_primitive(element)? {
            Some(primitive) => primitives.push(primitive),
            None => debug!(tag = %element.name, "skipping degenerate shape"),
        }
    }

    if primitives.is_empty() {
        return Err(SvgError::EmptyGeometry);
    }

    debug!(
        elements = elements.len(),
        primitives = primitives.len(),
        "extracted primitives"
    );
    Ok(primitives)
}

/// Reads every element of the document in document order.
fn read_elements(svg: &[u8]) -> Result<Vec<Element>, SvgError> {
    let mut reader = Reader::from_reader(svg);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut elements = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                elements.push(read_element(e)?);
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => elements.push(read_element(e)?),
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(SvgError::invalid_input(e.to_string())),
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(SvgError::invalid_input("unexpected end of document"));
    }
    if elements.is_empty() {
        return Err(SvgError::invalid_input("document has no root element"));
    }
    Ok(elements)
}

fn read_element(e: &BytesStart) -> Result<Element, SvgError> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase();
    let mut attributes = Vec::new();

    for attr in e.attributes() {
        let attr = attr.map_err(|err| SvgError::invalid_input(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| SvgError::invalid_input(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element { name, attributes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_shape_kinds() {
        let svg = br#"<?xml version="1.0"?>
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <g transform="translate(1 1)">
                    <rect x="0" y="0" width="10" height="5"/>
                    <circle cx="20" cy="20" r="4"/>
                    <ellipse cx="40" cy="40" rx="4" ry="2"/>
                </g>
                <polygon points="0,0 10,0 10,10"/>
                <polyline points="0 0 10 0 10 10 0 10"/>
                <path d="M0 0 L5 0 L5 5 Z"/>
            </svg>"#;
        let prims = extract_primitives(svg).unwrap();
        assert_eq!(prims.len(), 6);
        assert_eq!(prims.iter().filter(|p| !p.is_closed()).count(), 1);
    }

    #[test]
    fn test_unknown_elements_skipped() {
        let svg = br#"<svg><text x="0" y="0">hello</text><rect width="3" height="3"/></svg>"#;
        assert_eq!(extract_primitives(svg).unwrap().len(), 1);
    }

    #[test]
    fn test_text_only_is_empty() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg"><text>hi</text></svg>"#;
        assert_eq!(extract_primitives(svg).unwrap_err(), SvgError::EmptyGeometry);
    }

    #[test]
    fn test_raster_wins_over_path_error() {
        let svg = br#"<svg xmlns:xlink="http://www.w3.org/1999/xlink">
            <path d="M0 0 C1 1 2 2 3 3"/>
            <image xlink:href="photo.png"/>
        </svg>"#;
        assert!(matches!(
            extract_primitives(svg),
            Err(SvgError::UnsupportedContent { .. })
        ));
    }

    #[test]
    fn test_malformed_markup() {
        assert!(matches!(
            extract_primitives(b"<svg><rect width='1' height='1'></svg>"),
            Err(SvgError::InvalidInput { .. })
        ));
        assert!(matches!(
            extract_primitives(b"<svg><rect width='1' height='1'/>"),
            Err(SvgError::InvalidInput { .. })
        ));
        assert!(matches!(
            extract_primitives(b"not markup at all"),
            Err(SvgError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_namespaced_attributes_use_local_name() {
        let element = read_elements(br#"<svg xmlns:xlink="x"><use xlink:href="a.png"/></svg>"#)
            .unwrap()
            .pop()
            .unwrap();
        assert_eq!(element.name, "use");
        assert_eq!(element.attr("href"), Some("a.png"));
    }

    #[test]
    fn test_uppercase_tags_recognized() {
        let svg = br#"<SVG><RECT width="2" height="2"/></SVG>"#;
        assert_eq!(extract_primitives(svg).unwrap().len(), 1);
    }
}
