//! Integration tests for package loading and parsing.

mod common;

use std::io::Write;

use chrono::Datelike;
use common::{cell, row, table, DocxBuilder};
use undocx::model::DEFAULT_STYLE_NAME;
use undocx::{
    detect, parse_bytes, parse_bytes_with_options, parse_file, parse_reader, to_html, Block,
    Error, ParseOptions,
};

const CORE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
    xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>Price List</dc:title>
  <dc:creator>Sales</dc:creator>
  <dcterms:created xsi:type="dcterms:W3CDTF">2023-03-01T08:00:00Z</dcterms:created>
</cp:coreProperties>"#;

fn simple_table() -> String {
    table(&[row(&[cell("a"), cell("b")])])
}

fn nested_body(depth: usize) -> String {
    let mut inner = simple_table();
    for _ in 0..depth {
        inner = table(&[row(&[format!("<w:tc>{}<w:p/></w:tc>", inner)])]);
    }
    inner
}

#[test]
fn test_parse_core_properties() {
    let data = DocxBuilder::new().core(CORE).body(&simple_table()).build();
    let doc = parse_bytes(&data).unwrap();

    assert_eq!(doc.metadata.title.as_deref(), Some("Price List"));
    assert_eq!(doc.metadata.author.as_deref(), Some("Sales"));
    assert_eq!(doc.metadata.created.map(|d| d.year()), Some(2023));
    assert_eq!(doc.metadata.table_count, 1);
}

#[test]
fn test_missing_optional_parts_use_defaults() {
    let body = table(&[row(&[
        "<w:tc><w:p><w:pPr><w:pStyle w:val=\"Unknown\"/></w:pPr><w:r><w:t>x</w:t></w:r></w:p></w:tc>"
            .to_string(),
    ])]);
    let data = DocxBuilder::new().body(&body).build();
    let doc = parse_bytes(&data).unwrap();

    assert!(doc.metadata.title.is_none());
    let cell = doc.tables[0].cell_at(0, 0).unwrap();
    match &cell.content[0] {
        Block::Paragraph(p) => assert_eq!(p.style_name, DEFAULT_STYLE_NAME),
        Block::Table(_) => panic!("expected paragraph"),
    }
}

#[test]
fn test_style_names_resolved() {
    let styles = r#"<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>"#;
    let body = table(&[row(&[
        "<w:tc><w:p><w:pPr><w:pStyle w:val=\"Heading2\"/></w:pPr></w:p></w:tc>".to_string(),
    ])]);
    let data = DocxBuilder::new().styles(styles).body(&body).build();
    let doc = parse_bytes(&data).unwrap();

    match &doc.tables[0].cell_at(0, 0).unwrap().content[0] {
        Block::Paragraph(p) => {
            assert_eq!(p.style_name, "Heading 2");
            assert!(p.is_heading());
        }
        Block::Table(_) => panic!("expected paragraph"),
    }
}

#[test]
fn test_malformed_styles_strict_and_lenient() {
    let data = DocxBuilder::new()
        .raw_styles("<w:styles><unclosed>")
        .body(&simple_table())
        .build();

    let err = parse_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::DocumentLoad(_)));

    let doc = parse_bytes_with_options(&data, ParseOptions::new().lenient()).unwrap();
    assert_eq!(doc.table_count(), 1);
}

#[test]
fn test_malformed_document_is_load_error() {
    let data = DocxBuilder::new().raw_document("<w:document>").build();
    let err = parse_bytes(&data).unwrap_err();
    assert!(err.is_load_error());
    assert!(matches!(err, Error::DocumentLoad(_)));
}

#[test]
fn test_not_a_zip() {
    let err = parse_bytes(b"plain text, not a package").unwrap_err();
    assert!(matches!(err, Error::UnknownFormat));
}

#[test]
fn test_zip_without_main_part() {
    let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"hello").unwrap();
    let data = zip.finish().unwrap().into_inner();

    let err = parse_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::MissingPart(ref part) if part == "word/document.xml"));
}

#[test]
fn test_max_table_depth() {
    let data = DocxBuilder::new().body(&nested_body(2)).build();

    let doc = parse_bytes(&data).unwrap();
    assert_eq!(doc.tables[0].nesting_depth(), 2);

    let strict = ParseOptions::new().with_max_table_depth(1);
    let err = parse_bytes_with_options(&data, strict).unwrap_err();
    assert!(matches!(err, Error::NestingTooDeep { depth: 2, limit: 1 }));

    let lenient = ParseOptions::new().lenient().with_max_table_depth(1);
    let doc = parse_bytes_with_options(&data, lenient).unwrap();
    assert_eq!(doc.tables[0].nesting_depth(), 1);
}

#[test]
fn test_parse_file_and_reader() {
    let data = DocxBuilder::new().body(&simple_table()).build();
    let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let from_path = parse_file(file.path()).unwrap();
    let from_reader = parse_reader(std::io::Cursor::new(&data)).unwrap();
    assert_eq!(from_path.tables, from_reader.tables);
    assert_eq!(from_path.plain_text(), "a\tb");

    let html = to_html(file.path()).unwrap();
    assert!(html.contains("<td><p>a</p></td><td><p>b</p></td>"));

    assert!(detect::is_docx(file.path()));
}

#[test]
fn test_parse_file_not_docx() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"%PDF-1.7").unwrap();
    file.flush().unwrap();

    assert!(matches!(parse_file(file.path()), Err(Error::UnknownFormat)));
    assert!(!detect::is_docx(file.path()));
}

#[test]
fn test_detect_format_reports_parts() {
    let data = DocxBuilder::new()
        .styles("")
        .core(CORE)
        .body(&simple_table())
        .build();

    let format = detect::detect_format_from_bytes(&data).unwrap();
    assert_eq!(format.main_part, "word/document.xml");
    assert!(format.has_styles);
    assert!(format.has_core_properties);
}
