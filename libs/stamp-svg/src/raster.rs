//! Raster content detection.

use crate::extract::Element;

const RASTER_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Returns a description of the raster content an element carries, if any.
///
/// An element is raster content when it is an `<image>`, or when its `href`
/// (plain or `xlink:`) is a `data:` URI that is not `image/svg+xml`, or
/// points at a file with a raster extension.
pub fn raster_reference(element: &Element) -> Option<String> {
    if element.name == "image" {
        return Some("<image> element".to_string());
    }

    element
        .attributes
        .iter()
        .filter(|(key, _)| key == "href")
        .find(|(_, href)| is_raster_href(href))
        .map(|(_, href)| format!("<{}> references raster data: {}", element.name, truncate(href)))
}

/// Checks a link target for raster data.
pub fn is_raster_href(href: &str) -> bool {
    if href.starts_with("data:") && !href.contains("image/svg+xml") {
        return true;
    }
    has_raster_extension(href)
}

/// Matches `.ext` followed by `?`, `#` or the end of the string.
fn has_raster_extension(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    lower.match_indices('.').any(|(dot, _)| {
        let rest = &lower[dot + 1..];
        RASTER_EXTENSIONS.iter().any(|ext| {
            rest.strip_prefix(ext)
                .is_some_and(|tail| tail.is_empty() || tail.starts_with(['?', '#']))
        })
    })
}

fn truncate(href: &str) -> &str {
    match href.char_indices().nth(64) {
        Some((end, _)) => &href[..end],
        None => href,
    }
}
