//! Document-level types.

use super::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed DOCX document, reduced to its top-level tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Core document properties
    pub metadata: Metadata,

    /// Top-level tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of top-level tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if the document has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Get plain text content of all tables.
    pub fn plain_text(&self) -> String {
        self.tables
            .iter()
            .map(Table::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Core document properties (`docProps/core.xml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub subject: Option<String>,
    /// `dc:creator`
    pub author: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub last_modified_by: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,

    /// Number of top-level tables
    pub table_count: u32,
}

impl Metadata {
    /// Check if no core property is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subject.is_none()
            && self.author.is_none()
            && self.keywords.is_none()
            && self.description.is_none()
            && self.last_modified_by.is_none()
            && self.created.is_none()
            && self.modified.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableCell;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.table_count(), 0);
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_plain_text_joins_tables() {
        let mut doc = Document::new();
        for text in ["first", "second"] {
            let mut table = Table::new();
            table.add_row([TableCell::text(text)]);
            doc.add_table(table);
        }
        assert_eq!(doc.plain_text(), "first\n\nsecond");
    }

    #[test]
    fn test_metadata_serializes() {
        let metadata = Metadata {
            title: Some("Report".to_string()),
            table_count: 2,
            ..Default::default()
        };
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("\"title\":\"Report\""));
        assert!(json.contains("\"table_count\":2"));
    }
}
