use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Fill value that inherits the surrounding theme's foreground color
pub const PLACEHOLDER_FILL: &str = "currentColor";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no shape elements left after filtering {scanned} path(s)")]
    NoShapes { scanned: usize },
    #[error("invalid element pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Outer `<svg>` attributes of the monochrome document
#[derive(Debug, Clone, PartialEq)]
pub struct SvgFrame {
    /// Square view box edge, matching the source bitmap size
    pub view_box: u32,
    pub width: u32,
    pub height: u32,
    pub fill: String,
}

impl Default for SvgFrame {
    fn default() -> Self {
        Self {
            view_box: 1206,
            width: 24,
            height: 24,
            fill: PLACEHOLDER_FILL.to_string(),
        }
    }
}

/// Which rule selected the retained elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Elements filled black
    Foreground,
    /// Nothing was black; everything not filled white
    NotBackground,
}

/// Final theme-adaptive document
#[derive(Debug, Clone, PartialEq)]
pub struct MonochromeDocument {
    pub frame: SvgFrame,
    pub paths: Vec<String>,
    pub selection: Selection,
}

impl fmt::Display for MonochromeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vb} {vb}" width="{w}" height="{h}" fill="{fill}">"#,
            vb = self.frame.view_box,
            w = self.frame.width,
            h = self.frame.height,
            fill = self.frame.fill,
        )?;
        for path in &self.paths {
            writeln!(f, "{}", path)?;
        }
        write!(f, "</svg>")
    }
}

/// Pulls foreground paths out of a binary VTracer document
pub struct PathExtractor {
    element: Regex,
    fill: Regex,
}

impl PathExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            element: Regex::new(r"<path[^>]+/>")?,
            fill: Regex::new(r#"fill="([^"]*)""#)?,
        })
    }

    /// All self-closing `<path .../>` elements, in document order
    pub fn scan<'a>(&self, svg: &'a str) -> Vec<&'a str> {
        self.element.find_iter(svg).map(|m| m.as_str()).collect()
    }

    fn fill_value<'a>(&self, element: &'a str) -> Option<&'a str> {
        self.fill
            .captures(element)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    pub fn is_black(&self, element: &str) -> bool {
        self.fill_value(element)
            .map(|fill| {
                let fill = fill.to_ascii_lowercase();
                fill.contains("#000") || fill.contains("black")
            })
            .unwrap_or(false)
    }

    pub fn is_white(&self, element: &str) -> bool {
        self.fill_value(element)
            .map(|fill| {
                let fill = fill.to_ascii_lowercase();
                fill.contains("#fff") || fill.contains("white")
            })
            .unwrap_or(false)
    }

    /// Point every fill at the placeholder, adding one if the element has none
    pub fn rewrite_fill(&self, element: &str) -> String {
        let replacement = format!(r#"fill="{}""#, PLACEHOLDER_FILL);

        if self.fill.is_match(element) {
            return self
                .fill
                .replace_all(element, replacement.as_str())
                .into_owned();
        }

        let body = element.trim_end_matches("/>").trim_end();
        format!("{} {}/>", body, replacement)
    }

    /// Select foreground paths and wrap them in a placeholder-filled document
    pub fn extract(&self, svg: &str, frame: SvgFrame) -> Result<MonochromeDocument, ExtractError> {
        let elements = self.scan(svg);

        let mut selection = Selection::Foreground;
        let mut retained: Vec<&str> = elements
            .iter()
            .copied()
            .filter(|e| self.is_black(e))
            .collect();

        if retained.is_empty() {
            selection = Selection::NotBackground;
            retained = elements
                .iter()
                .copied()
                .filter(|e| !self.is_white(e))
                .collect();
        }

        if retained.is_empty() {
            return Err(ExtractError::NoShapes {
                scanned: elements.len(),
            });
        }

        tracing::debug!(
            "Retained {} of {} path(s) ({:?})",
            retained.len(),
            elements.len(),
            selection
        );

        Ok(MonochromeDocument {
            frame,
            paths: retained.into_iter().map(|e| self.rewrite_fill(e)).collect(),
            selection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BINARY_TRACE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: visioncortex VTracer 0.6.4 -->
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="64" height="64">
<path d="M0 0 C10 0 20 10 20 20 Z " fill="#000000" transform="translate(12,8)"/>
<path d="M0 0 L64 0 L64 64 L0 64 Z " fill="#FFFFFF" transform="translate(0,0)"/>
<path d="M4 4 L8 4 L8 8 Z " fill="#000000" transform="translate(30,30)"/>
</svg>
"##;

    fn extractor() -> PathExtractor {
        PathExtractor::new().unwrap()
    }

    #[test]
    fn test_scan_finds_self_closing_paths() {
        let elements = extractor().scan(BINARY_TRACE);

        assert_eq!(elements.len(), 3);
        assert!(elements.iter().all(|e| e.starts_with("<path") && e.ends_with("/>")));
    }

    #[test]
    fn test_keeps_only_black_paths() {
        let doc = extractor()
            .extract(BINARY_TRACE, SvgFrame::default())
            .unwrap();

        assert_eq!(doc.selection, Selection::Foreground);
        assert_eq!(doc.paths.len(), 2);
        assert!(doc.paths[0].contains("translate(12,8)"));
        assert!(doc.paths[1].contains("translate(30,30)"));
    }

    #[test]
    fn test_every_fill_becomes_placeholder() {
        let doc = extractor()
            .extract(BINARY_TRACE, SvgFrame::default())
            .unwrap();

        for path in &doc.paths {
            assert!(path.contains(r#"fill="currentColor""#));
            assert!(!path.contains('#'));
        }
    }

    #[test]
    fn test_black_by_name_and_short_hex() {
        let x = extractor();

        assert!(x.is_black(r#"<path d="M0 0" fill="black"/>"#));
        assert!(x.is_black(r#"<path d="M0 0" fill="BLACK"/>"#));
        assert!(x.is_black(r##"<path d="M0 0" fill="#000"/>"##));
        assert!(!x.is_black(r##"<path d="M0 0" fill="#123456"/>"##));
        assert!(!x.is_black(r#"<path d="M0 0"/>"#));
    }

    #[test]
    fn test_fallback_drops_white_only() {
        let svg = r##"<svg>
<path d="M0 0 L1 1 Z" fill="#1a1a1a"/>
<path d="M0 0 L2 2 Z" fill="#fff"/>
<path d="M0 0 L3 3 Z" fill="#FFFFFF"/>
<path d="M0 0 L4 4 Z"/>
</svg>"##;

        let doc = extractor().extract(svg, SvgFrame::default()).unwrap();

        assert_eq!(doc.selection, Selection::NotBackground);
        assert_eq!(doc.paths.len(), 2);
        assert!(doc.paths[0].contains("L1 1"));
        assert_eq!(doc.paths[1], r#"<path d="M0 0 L4 4 Z" fill="currentColor"/>"#);
    }

    #[test]
    fn test_no_shapes_is_an_error() {
        let svg = r##"<svg><path d="M0 0 L2 2 Z" fill="#ffffff"/></svg>"##;

        match extractor().extract(svg, SvgFrame::default()) {
            Err(ExtractError::NoShapes { scanned }) => assert_eq!(scanned, 1),
            other => panic!("expected NoShapes, got {:?}", other),
        }

        assert!(matches!(
            extractor().extract("<svg></svg>", SvgFrame::default()),
            Err(ExtractError::NoShapes { scanned: 0 })
        ));
    }

    #[test]
    fn test_document_rendering() {
        let doc = MonochromeDocument {
            frame: SvgFrame::default(),
            paths: vec![r#"<path d="M0 0 Z" fill="currentColor"/>"#.to_string()],
            selection: Selection::Foreground,
        };

        assert_eq!(
            doc.to_string(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1206 1206\" width=\"24\" height=\"24\" fill=\"currentColor\">\n\
             <path d=\"M0 0 Z\" fill=\"currentColor\"/>\n\
             </svg>"
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let x = extractor();
        let first = x.extract(BINARY_TRACE, SvgFrame::default()).unwrap().to_string();
        let second = x.extract(BINARY_TRACE, SvgFrame::default()).unwrap().to_string();

        assert_eq!(first, second);
    }
}
