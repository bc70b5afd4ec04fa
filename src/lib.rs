//! # undocx
//!
//! Convert the tables of a DOCX document to HTML.
//!
//! Every top-level table of the document body becomes one `<table>`
//! element. Merged cells turn into `colspan`/`rowspan` attributes, cell
//! shading into a background color, and run formatting into inline tags.
//! Tables nested inside cells are rendered in place.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("report.docx")?;
//!
//!     // Convert its tables to HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Merge resolution**: horizontal, vertical and block merges
//! - **Styling**: bold, italic, underline, strike-through and run colors
//! - **Layout**: paragraph indentation and heading emphasis
//! - **Nested tables**: rendered recursively inside their cells

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, Result};
pub use model::{
    Block, CellId, Document, Metadata, Paragraph, RunFormat, Table, TableCell, TextRun,
};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{ExtractionStats, RenderOptions, RenderResult, VerticalScan};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return its tables.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Tables: {}", doc.table_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use undocx::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient().with_max_table_depth(4);
/// let doc = parse_file_with_options("report.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX package from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX package from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX package from a reader.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("report.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a DOCX package from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Extract the plain text of every table in a DOCX file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert the tables of a DOCX file to HTML.
///
/// # Example
///
/// ```no_run
/// use undocx::to_html;
///
/// let html = to_html("report.docx").unwrap();
/// std::fs::write("report.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    let options = RenderOptions::default();
    render::to_html(&doc, &options)
}

/// Convert the tables of a DOCX file to HTML with custom options.
///
/// # Example
///
/// ```no_run
/// use undocx::{to_html_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_table_class("data")
///     .with_escaped_text(true);
/// let html = to_html_with_options("report.docx", &options).unwrap();
/// ```
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::{Undocx, VerticalScan};
///
/// let html = Undocx::new()
///     .lenient()
///     .with_table_class("data")
///     .with_vertical_scan(VerticalScan::CarryOver)
///     .parse("report.docx")?
///     .to_html()?;
/// # Ok::<(), undocx::Error>(())
/// ```
pub struct Undocx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Undocx {
    /// Create a new Undocx builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Limit how deep tables may nest inside cells.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.parse_options = self.parse_options.with_max_table_depth(depth);
        self
    }

    /// Set the class of top-level tables.
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_table_class(class);
        self
    }

    /// Set the indentation unit in points.
    pub fn with_indent_unit(mut self, points: f32) -> Self {
        self.render_options = self.render_options.with_indent_unit(points);
        self
    }

    /// Set the vertical merge scan mode.
    pub fn with_vertical_scan(mut self, scan: VerticalScan) -> Self {
        self.render_options = self.render_options.with_vertical_scan(scan);
        self
    }

    /// Escape markup characters in run text.
    pub fn with_escaped_text(mut self, escape: bool) -> Self {
        self.render_options = self.render_options.with_escaped_text(escape);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX package from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UndocxResult> {
        let parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Undocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct UndocxResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UndocxResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to HTML and collect statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Get the plain text of all tables.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
