//! Benchmarks for undocx parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic tables with regular merge patterns.

use std::io::{Cursor, Write};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use undocx::model::{Table, TableCell};
use undocx::render::{resolve_spans, RenderOptions, VerticalScan};

/// Creates a table where every other row starts with a two-row merge and
/// every third row ends with a two-column merge.
fn create_merged_table(rows: usize, cols: usize) -> Table {
    let mut table = Table::new();
    let mut above = None;
    for i in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for j in 0..cols {
            let id = match (j, above) {
                (0, Some(id)) if i % 2 == 1 => id,
                _ if j == cols - 1 && i % 3 == 0 => row[j - 1],
                _ => table.add_cell(TableCell::text(format!("r{}c{} sample text", i, j))),
            };
            row.push(id);
        }
        above = Some(row[0]);
        table.push_row(row);
    }
    table
}

/// Creates a minimal DOCX package holding one table of the given size.
fn create_test_docx(rows: usize, cols: usize) -> Vec<u8> {
    let mut body = String::from("<w:tbl>");
    for i in 0..rows {
        body.push_str("<w:tr>");
        for j in 0..cols {
            body.push_str(&format!(
                "<w:tc><w:tcPr><w:shd w:val=\"clear\" w:fill=\"D9E2F3\"/></w:tcPr>\
                 <w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Cell {} {}</w:t></w:r></w:p></w:tc>",
                i, j
            ));
        }
        body.push_str("</w:tr>");
    }
    body.push_str("</w:tbl>");

    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    );

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}

/// Benchmark merge-span resolution.
fn bench_resolve_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_spans");

    for size in [10, 50, 200].iter() {
        let table = create_merged_table(*size, 8);

        group.bench_function(format!("{}_rows", size), |b| {
            b.iter(|| resolve_spans(black_box(&table), VerticalScan::ColumnLocal));
        });
    }

    group.finish();
}

/// Benchmark HTML rendering of an already parsed document.
fn bench_html_rendering(c: &mut Criterion) {
    let mut doc = undocx::Document::new();
    doc.add_table(create_merged_table(200, 8));
    let options = RenderOptions::default();

    c.bench_function("render_200_rows", |b| {
        b.iter(|| undocx::render::to_html(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark parsing of DOCX packages at various sizes.
fn bench_docx_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_parsing");

    for rows in [10, 100].iter() {
        let data = create_test_docx(*rows, 6);

        group.bench_function(format!("{}_rows", rows), |b| {
            b.iter(|| undocx::parse_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_spans,
    bench_html_rendering,
    bench_docx_parsing,
);
criterion_main!(benches);
