//! Paragraph style lookup from `styles.xml`.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::DEFAULT_STYLE_NAME;

use super::wml::{self, attr, child_val};

/// Built-in style names stored in lower case that Word shows capitalised.
const UI_NAMES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
    ("title", "Title"),
    ("subtitle", "Subtitle"),
    ("body text", "Body Text"),
    ("list bullet", "List Bullet"),
    ("list number", "List Number"),
    ("list paragraph", "List Paragraph"),
];

/// Paragraph styles of a document, keyed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_name: Option<String>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the paragraph styles of a `styles.xml` part.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        let mut sheet = Self::new();

        for style in doc
            .root_element()
            .descendants()
            .filter(|n| wml::is_wml(*n, "style"))
        {
            if attr(style, "type") != Some("paragraph") {
                continue;
            }
            let Some(id) = attr(style, "styleId") else {
                continue;
            };
            let name = ui_name(child_val(style, "name").unwrap_or(id));
            if matches!(attr(style, "default"), Some("1" | "true" | "on")) {
                sheet.default_name = Some(name.clone());
            }
            sheet.names.insert(id.to_string(), name);
        }

        log::debug!("Loaded {} paragraph styles", sheet.names.len());
        Ok(sheet)
    }

    /// Display name for a paragraph style id.
    ///
    /// Missing or unknown ids resolve to the default paragraph style.
    pub fn name_of(&self, style_id: Option<&str>) -> &str {
        style_id
            .and_then(|id| self.names.get(id))
            .map(String::as_str)
            .unwrap_or_else(|| self.default_name())
    }

    /// Name of the default paragraph style.
    pub fn default_name(&self) -> &str {
        self.default_name.as_deref().unwrap_or(DEFAULT_STYLE_NAME)
    }

    /// Number of known paragraph styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no paragraph style is known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Map a stored style name to the name Word displays.
fn ui_name(name: &str) -> String {
    UI_NAMES
        .iter()
        .find(|(stored, _)| *stored == name)
        .map(|(_, ui)| ui.to_string())
        .unwrap_or_else(|| name.to_string())
}
