//! # Shape Kinds
//!
//! One conversion per supported element. Adding a kind means adding a
//! variant here; the match in [`ShapeKind::to_primitive`] is exhaustive.

use std::f64::consts::TAU;

use config::constants::CIRCLE_SEGMENTS;
use glam::DVec2;

use crate::error::SvgError;
use crate::extract::Element;
use crate::path;
use crate::primitive::RawPrimitive;

/// Supported shape elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Circle,
    Ellipse,
    Polygon,
    Polyline,
    Path,
}

impl ShapeKind {
    /// Maps a lowercase element name to its kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rect" => Some(Self::Rect),
            "circle" => Some(Self::Circle),
            "ellipse" => Some(Self::Ellipse),
            "polygon" => Some(Self::Polygon),
            "polyline" => Some(Self::Polyline),
            "path" => Some(Self::Path),
            _ => None,
        }
    }

    /// Converts an element of this kind into a primitive.
    ///
    /// Returns `None` for shapes with non-positive extent or fewer than three
    /// points. Missing numeric attributes default to zero.
    pub fn to_primitive(self, element: &Element) -> Result<Option<RawPrimitive>, SvgError> {
        match self {
            Self::Rect => {
                let x = number_attr(element, "x")?;
                let y = number_attr(element, "y")?;
                let w = number_attr(element, "width")?;
                let h = number_attr(element, "height")?;
                if w <= 0.0 || h <= 0.0 {
                    return Ok(None);
                }
                Ok(RawPrimitive::closed(vec![
                    DVec2::new(x, y),
                    DVec2::new(x + w, y),
                    DVec2::new(x + w, y + h),
                    DVec2::new(x, y + h),
                ]))
            }
            Self::Circle => {
                let center = DVec2::new(number_attr(element, "cx")?, number_attr(element, "cy")?);
                let r = number_attr(element, "r")?;
                if r <= 0.0 {
                    return Ok(None);
                }
                Ok(RawPrimitive::closed(ellipse_points(center, DVec2::splat(r))))
            }
            Self::Ellipse => {
                let center = DVec2::new(number_attr(element, "cx")?, number_attr(element, "cy")?);
                let radii = DVec2::new(number_attr(element, "rx")?, number_attr(element, "ry")?);
                if radii.x <= 0.0 || radii.y <= 0.0 {
                    return Ok(None);
                }
                Ok(RawPrimitive::closed(ellipse_points(center, radii)))
            }
            Self::Polygon => Ok(RawPrimitive::closed(points_attr(element)?)),
            Self::Polyline => Ok(RawPrimitive::open(points_attr(element)?)),
            Self::Path => path::interpret(element.attr("d").unwrap_or_default()),
        }
    }
}

/// Counter-clockwise outline of an ellipse with [`CIRCLE_SEGMENTS`] vertices.
pub fn ellipse_points(center: DVec2, radii: DVec2) -> Vec<DVec2> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            center + radii * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Parses a length attribute. Missing means zero; a `px` suffix is allowed.
fn number_attr(element: &Element, name: &str) -> Result<f64, SvgError> {
    let Some(raw) = element.attr(name) else {
        return Ok(0.0);
    };
    let text = raw.trim();
    let text = text.strip_suffix("px").unwrap_or(text).trim_end();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SvgError::invalid_input(format!(
            "attribute {name}=\"{raw}\" on <{}> is not a number",
            element.name
        ))),
    }
}

/// Parses a `points` list. A trailing unpaired number is ignored.
fn points_attr(element: &Element) -> Result<Vec<DVec2>, SvgError> {
    let raw = element.attr("points").unwrap_or_default();
    let numbers = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(SvgError::invalid_input(format!(
                "malformed number '{s}' in points of <{}>",
                element.name
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(numbers
        .chunks_exact(2)
        .map(|pair| DVec2::new(pair[0], pair[1]))
        .collect())
}
