//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ExtractionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of top-level tables
    pub table_count: u32,

    /// Number of tables nested inside cells
    pub nested_table_count: u32,

    /// Number of rows across all tables
    pub row_count: u32,

    /// Number of emitted `<td>` elements
    pub cell_count: u32,

    /// Number of emitted cells carrying a colspan or rowspan
    pub merged_cell_count: u32,

    /// Number of paragraphs rendered
    pub paragraph_count: u32,

    /// Number of text runs rendered
    pub run_count: u32,

    /// Deepest table nesting level seen (0 = no nested tables)
    pub max_depth: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a table at the given nesting level.
    pub fn add_table(&mut self, level: usize) {
        if level == 0 {
            self.table_count += 1;
        } else {
            self.nested_table_count += 1;
        }
        self.max_depth = self.max_depth.max(level as u32);
    }

    /// Increment row count.
    pub fn add_row(&mut self) {
        self.row_count += 1;
    }

    /// Record an emitted cell.
    pub fn add_cell(&mut self, merged: bool) {
        self.cell_count += 1;
        if merged {
            self.merged_cell_count += 1;
        }
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Record a run and its words.
    pub fn add_run(&mut self, text: &str) {
        self.run_count += 1;
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.table_count += other.table_count;
        self.nested_table_count += other.nested_table_count;
        self.row_count += other.row_count;
        self.cell_count += other.cell_count;
        self.merged_cell_count += other.merged_cell_count;
        self.paragraph_count += other.paragraph_count;
        self.run_count += other.run_count;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.word_count += other.word_count;
    }
}
