//! Core document properties (`docProps/core.xml`).

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::Metadata;

/// Parse core properties into metadata.
///
/// Elements are matched by local name; `cp:`, `dc:` and `dcterms:`
/// prefixes vary between producers.
pub(crate) fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut metadata = Metadata::default();

    for node in doc.root_element().children().filter(|n| n.is_element()) {
        let value = node.text().map(str::trim).filter(|t| !t.is_empty());
        let Some(value) = value else {
            continue;
        };
        match node.tag_name().name() {
            "title" => metadata.title = Some(value.to_string()),
            "subject" => metadata.subject = Some(value.to_string()),
            "creator" => metadata.author = Some(value.to_string()),
            "keywords" => metadata.keywords = Some(value.to_string()),
            "description" => metadata.description = Some(value.to_string()),
            "lastModifiedBy" => metadata.last_modified_by = Some(value.to_string()),
            "created" => metadata.created = parse_w3cdtf(value),
            "modified" => metadata.modified = parse_w3cdtf(value),
            _ => {}
        }
    }

    Ok(metadata)
}

/// Parse a W3CDTF timestamp (e.g., "2024-01-15T10:30:00Z").
fn parse_w3cdtf(s: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            log::debug!("Ignoring unparseable timestamp {:?}: {}", s, e);
            None
        }
    }
}
