//! DOCX parsing module.

mod core_props;
mod docx_parser;
mod options;
mod styles;
mod wml;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use styles::StyleSheet;
