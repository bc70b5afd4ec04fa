//! Document model types for DOCX table content.
//!
//! This module defines the read-only object model produced by the parser
//! and consumed by the HTML renderer: tables are grids of cell ids, cells
//! hold paragraphs and nested tables, paragraphs hold formatted runs.

mod document;
mod paragraph;
mod table;

pub use document::{Document, Metadata};
pub use paragraph::{Paragraph, RunFormat, TextRun, DEFAULT_STYLE_NAME};
pub use table::{Block, CellId, Table, TableCell};
