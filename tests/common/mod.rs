//! Shared helpers for building DOCX packages in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#;

/// Builder for minimal DOCX packages.
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
    styles: Option<String>,
    core: Option<String>,
    document_xml: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw `w:body` content.
    pub fn body(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// Replace the whole main document part.
    pub fn raw_document(mut self, xml: &str) -> Self {
        self.document_xml = Some(xml.to_string());
        self
    }

    /// Add `word/styles.xml` holding the given `w:style` elements.
    pub fn styles(mut self, styles: &str) -> Self {
        self.styles = Some(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:styles xmlns:w="{}">{}</w:styles>"#,
            WML_NS, styles
        ));
        self
    }

    /// Add `word/styles.xml` verbatim.
    pub fn raw_styles(mut self, xml: &str) -> Self {
        self.styles = Some(xml.to_string());
        self
    }

    /// Add `docProps/core.xml` verbatim.
    pub fn core(mut self, xml: &str) -> Self {
        self.core = Some(xml.to_string());
        self
    }

    pub fn build(self) -> Vec<u8> {
        let document = self.document_xml.unwrap_or_else(|| {
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
                WML_NS, self.body
            )
        });

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let mut add = |name: &str, content: &str| {
            zip.start_file(name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        };
        add("[Content_Types].xml", CONTENT_TYPES);
        add("_rels/.rels", PACKAGE_RELS);
        add("word/document.xml", &document);
        if let Some(ref styles) = self.styles {
            add("word/styles.xml", styles);
        }
        if let Some(ref core) = self.core {
            add("docProps/core.xml", core);
        }

        zip.finish().unwrap().into_inner()
    }
}

/// A `w:tc` holding one plain paragraph.
pub fn cell(text: &str) -> String {
    format!("<w:tc><w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p></w:tc>", text)
}

/// A `w:tc` with raw cell properties and content.
pub fn cell_with(props: &str, content: &str) -> String {
    format!("<w:tc><w:tcPr>{}</w:tcPr>{}</w:tc>", props, content)
}

/// A `w:tr` from cell markup.
pub fn row(cells: &[String]) -> String {
    format!("<w:tr>{}</w:tr>", cells.concat())
}

/// A `w:tbl` from row markup.
pub fn table(rows: &[String]) -> String {
    format!("<w:tbl>{}</w:tbl>", rows.concat())
}
