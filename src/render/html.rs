//! HTML rendering for DOCX tables.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::{Block, Document, Paragraph, Table, TableCell, TextRun};

use super::spans::{resolve_spans, Span};
use super::text::{escape_html, transform_text, TAB_NBSP};
use super::{ExtractionStats, RenderOptions, RenderResult};

/// Separator between top-level tables.
const TABLE_SEPARATOR: &str = "\n\n\n";

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    collect_stats: bool,
    stats: ExtractionStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            collect_stats: false,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to HTML with extraction statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.collect_stats = true;
        let content = self.render_internal(doc)?;
        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if doc.tables.is_empty() {
            self.open_frame(&mut output)?;
            self.close_frame(&mut output);
        }

        for (idx, table) in doc.tables.iter().enumerate() {
            if idx > 0 {
                output.push_str(TABLE_SEPARATOR);
            }
            self.open_frame(&mut output)?;
            self.render_table(&mut output, table, 0)?;
            self.close_frame(&mut output);
        }

        log::debug!(
            "Rendered {} tables into {} bytes of HTML",
            doc.tables.len(),
            output.len()
        );
        Ok(output)
    }

    fn open_frame(&self, output: &mut String) -> Result<()> {
        write!(
            output,
            "<table class=\"{}\">\n<tbody>\n",
            self.options.table_class
        )
        .map_err(fmt_error)
    }

    fn close_frame(&self, output: &mut String) {
        output.push_str("</tbody>\n</table>");
    }

    /// Emit the rows of `table`. `level` is 0 for top-level tables and grows
    /// by one per nesting; output does not depend on it.
    fn render_table(&mut self, output: &mut String, table: &Table, level: usize) -> Result<()> {
        if self.collect_stats {
            self.stats.add_table(level);
        }

        let spans = resolve_spans(table, self.options.vertical_scan);

        for (i, row) in table.rows().iter().enumerate() {
            if self.collect_stats {
                self.stats.add_row();
            }
            output.push_str("<tr>");

            for (j, id) in row.iter().enumerate() {
                if spans.is_continuation(i, j) {
                    continue;
                }
                let cell = table.cell(*id);
                let span = spans.span(i, j);
                if self.collect_stats {
                    self.stats.add_cell(span.is_merged());
                }
                self.render_cell(output, cell, span, level)?;
            }

            output.push_str("</tr>");
        }

        Ok(())
    }

    fn render_cell(
        &mut self,
        output: &mut String,
        cell: &TableCell,
        span: Span,
        level: usize,
    ) -> Result<()> {
        output.push_str("<td");
        if span.colspan_extra > 0 {
            write!(output, " colspan=\"{}\"", span.colspan()).map_err(fmt_error)?;
        }
        if span.rowspan_extra > 0 {
            write!(output, " rowspan=\"{}\"", span.rowspan()).map_err(fmt_error)?;
        }
        if let Some(color) = cell.background() {
            write!(output, " style=\"background-color:#{}\"", color).map_err(fmt_error)?;
        }
        output.push('>');

        for block in &cell.content {
            match block {
                Block::Paragraph(para) => self.render_paragraph(output, para)?,
                Block::Table(nested) => {
                    output.push_str("<table>\n<tbody>");
                    self.render_table(output, nested, level + 1)?;
                    output.push_str("</tbody>\n</table>");
                }
            }
        }

        output.push_str("</td>");
        Ok(())
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) -> Result<()> {
        if self.collect_stats {
            self.stats.add_paragraph();
        }

        output.push_str("<p>");

        let levels = para.indent_levels(self.options.indent_unit_pt);
        output.push_str(&TAB_NBSP.repeat(levels));

        let heading = para.is_heading();
        if heading {
            output.push_str("<b>");
        }

        for run in &para.runs {
            self.render_run(output, run)?;
        }

        if heading {
            output.push_str("</b>");
        }
        output.push_str("</p>");
        Ok(())
    }

    fn render_run(&mut self, output: &mut String, run: &TextRun) -> Result<()> {
        if self.collect_stats {
            self.stats.add_run(&run.text);
        }

        let format = &run.format;
        if format.bold {
            output.push_str("<b>");
        }
        if format.italic {
            output.push_str("<i>");
        }
        if format.underline {
            output.push_str("<u>");
        }
        if format.strike {
            output.push_str("<strike>");
        }
        if let Some(ref color) = format.color {
            write!(output, "<span style=\"color:#{}\">", color).map_err(fmt_error)?;
        }

        let text = if self.options.escape_text {
            transform_text(&escape_html(&run.text))
        } else {
            transform_text(&run.text)
        };
        output.push_str(&text);

        if format.color.is_some() {
            output.push_str("</span>");
        }
        if format.strike {
            output.push_str("</strike>");
        }
        if format.underline {
            output.push_str("</u>");
        }
        if format.italic {
            output.push_str("</i>");
        }
        if format.bold {
            output.push_str("</b>");
        }
        Ok(())
    }
}

fn fmt_error(e: std::fmt::Error) -> Error {
    Error::Render(e.to_string())
}
