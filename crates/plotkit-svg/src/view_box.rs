//! viewBox extraction.

use regex::Regex;

use crate::error::{SvgError, SvgResult};

/// The document's coordinate system, from its `viewBox` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    /// Fallback used when the attribute is absent.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }
}

/// Read the `viewBox` attribute from raw SVG markup.
///
/// A missing attribute falls back to `0 0 100 100`; a present but
/// unparseable one is an error rather than a silent guess.
pub fn extract_view_box(svg: &str) -> SvgResult<ViewBox> {
    let re = Regex::new(r#"viewBox\s*=\s*["']([^"']+)["']"#).expect("invalid viewBox regex");

    let Some(caps) = re.captures(svg) else {
        return Ok(ViewBox::default());
    };
    let raw = &caps[1];

    let values: Vec<f64> = raw
        .split([' ', ','])
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| SvgError::MalformedViewBox(raw.to_string()))?;

    match values[..] {
        [min_x, min_y, width, height] if width > 0.0 && height > 0.0 => Ok(ViewBox {
            min_x,
            min_y,
            width,
            height,
        }),
        _ => Err(SvgError::MalformedViewBox(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_space_separated() {
        let vb = extract_view_box(r#"<svg viewBox="0 0 210 297">"#).unwrap();
        assert_eq!(vb.width, 210.0);
        assert_eq!(vb.height, 297.0);
    }

    #[test]
    fn test_extracts_comma_separated() {
        let vb = extract_view_box(r#"<svg viewBox="-5, 10, 20, 40">"#).unwrap();
        assert_eq!(vb.min_x, -5.0);
        assert_eq!(vb.min_y, 10.0);
        assert_eq!(vb.width, 20.0);
    }

    #[test]
    fn test_missing_view_box_defaults() {
        assert_eq!(extract_view_box("<svg>").unwrap(), ViewBox::default());
    }

    #[test]
    fn test_malformed_view_box_is_an_error() {
        assert!(extract_view_box(r#"<svg viewBox="0 0 ten 10">"#).is_err());
        assert!(extract_view_box(r#"<svg viewBox="0 0 10">"#).is_err());
        assert!(extract_view_box(r#"<svg viewBox="0 0 0 10">"#).is_err());
    }
}
