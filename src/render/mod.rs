//! Rendering module for converting parsed tables to HTML.

mod html;
mod options;
mod result;
mod spans;
mod text;

pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use options::{RenderOptions, VerticalScan, DEFAULT_INDENT_UNIT_PT, DEFAULT_TABLE_CLASS};
pub use result::{ExtractionStats, RenderResult};
pub use spans::{resolve_spans, Span, SpanMap};
pub use text::{escape_html, transform_text, NBSP, TAB_NBSP};
