//! DOCX document parser using zip and roxmltree.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use roxmltree::Node;
use zip::ZipArchive;

use crate::detect::{inspect_archive, read_part, CORE_PROPERTIES_PART};
use crate::error::{Error, Result};
use crate::model::{Block, CellId, Document, Metadata, Paragraph, RunFormat, Table, TableCell, TextRun};

use super::core_props::parse_core_properties;
use super::options::ParseOptions;
use super::styles::StyleSheet;
use super::wml::{self, attr, child, child_val, children, toggle, twips_to_pts};

/// Grid width assumed for tables without `w:tblGrid` (Word allows 63 columns).
const MAX_GRID_COLUMNS: usize = 63;

/// DOCX document parser.
///
/// The package parts needed for conversion are read into memory when the
/// parser is created; [`DocxParser::parse`] works on those copies only.
pub struct DocxParser {
    document_xml: String,
    styles_xml: Option<String>,
    core_xml: Option<String>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening {}", path.display());
        let mut file = File::open(path)?;
        let mut header = [0u8; 4];
        if file.read_exact(&mut header).is_err() || !crate::detect::is_zip_bytes(&header) {
            return Err(Error::UnknownFormat);
        }
        file.rewind()?;
        Self::from_archive(ZipArchive::new(file)?, options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        if !crate::detect::is_zip_bytes(data) {
            return Err(Error::UnknownFormat);
        }
        Self::from_archive(ZipArchive::new(Cursor::new(data))?, options)
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    fn from_archive<R: Read + Seek>(
        mut archive: ZipArchive<R>,
        options: ParseOptions,
    ) -> Result<Self> {
        let format = inspect_archive(&mut archive)?;
        let document_xml = read_part(&mut archive, &format.main_part)?
            .ok_or_else(|| Error::MissingPart(format.main_part.clone()))?;
        let styles_xml = read_part(&mut archive, &format.styles_part())?;
        let core_xml = read_part(&mut archive, CORE_PROPERTIES_PART)?;

        Ok(Self {
            document_xml,
            styles_xml,
            core_xml,
            options,
        })
    }

    /// Parse the document and return its tables.
    pub fn parse(&self) -> Result<Document> {
        let styles = self.load_styles()?;

        let xml = roxmltree::Document::parse(&self.document_xml)?;
        let body = child(xml.root_element(), "body")
            .ok_or_else(|| Error::DocumentLoad("missing w:body element".into()))?;

        let walker = BodyWalker {
            styles: &styles,
            options: &self.options,
        };

        let mut document = Document::new();
        document.metadata = self.load_metadata()?;

        for tbl in children(body, "tbl") {
            document.add_table(walker.table(tbl, 0)?);
        }
        document.metadata.table_count = document.table_count() as u32;

        log::debug!("Parsed {} top-level tables", document.table_count());
        Ok(document)
    }

    fn load_styles(&self) -> Result<StyleSheet> {
        let Some(ref xml) = self.styles_xml else {
            return Ok(StyleSheet::new());
        };
        match StyleSheet::parse(xml) {
            Ok(sheet) => Ok(sheet),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring malformed style sheet: {}", e);
                Ok(StyleSheet::new())
            }
            Err(e) => Err(e),
        }
    }

    fn load_metadata(&self) -> Result<Metadata> {
        let Some(ref xml) = self.core_xml else {
            return Ok(Metadata::default());
        };
        match parse_core_properties(xml) {
            Ok(metadata) => Ok(metadata),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring malformed core properties: {}", e);
                Ok(Metadata::default())
            }
            Err(e) => Err(e),
        }
    }
}

/// Converts `w:body` content into model types.
struct BodyWalker<'s> {
    styles: &'s StyleSheet,
    options: &'s ParseOptions,
}

impl BodyWalker<'_> {
    /// Build a table grid. Horizontally merged positions repeat the cell id
    /// (`w:gridSpan`); vertically continued positions reuse the id from the
    /// row above at the same grid column (`w:vMerge` without `restart`).
    /// Columns skipped by `w:gridBefore`/`w:gridAfter` hold an empty
    /// placeholder cell that no continuation attaches to.
    fn table(&self, tbl: Node, depth: usize) -> Result<Table> {
        let width = grid_width(tbl);
        let mut table = Table::new();
        // `None` marks placeholder positions
        let mut above: Vec<Option<CellId>> = Vec::new();

        for tr in children(tbl, "tr") {
            let tr_pr = child(tr, "trPr");
            let mut row: Vec<CellId> = Vec::new();
            let mut owners: Vec<Option<CellId>> = Vec::new();

            let before = tr_pr.map_or(0, |pr| grid_count(pr, "gridBefore", width));
            if before > 0 {
                let pad = table.add_cell(TableCell::empty());
                row.extend(std::iter::repeat(pad).take(before));
                owners.extend(std::iter::repeat(None).take(before));
            }

            for tc in children(tr, "tc") {
                let tc_pr = child(tc, "tcPr");
                let span = tc_pr
                    .map_or(1, |pr| grid_count(pr, "gridSpan", width))
                    .max(1);
                let continues = tc_pr
                    .and_then(|pr| child(pr, "vMerge"))
                    .is_some_and(|vm| attr(vm, "val") != Some("restart"));

                let id = match above.get(row.len()) {
                    Some(&Some(id)) if continues => id,
                    _ => {
                        let cell = self.cell(tc, depth)?;
                        table.add_cell(cell)
                    }
                };
                row.extend(std::iter::repeat(id).take(span));
                owners.extend(std::iter::repeat(Some(id)).take(span));
            }

            let after = tr_pr.map_or(0, |pr| grid_count(pr, "gridAfter", width));
            if after > 0 {
                let pad = table.add_cell(TableCell::empty());
                row.extend(std::iter::repeat(pad).take(after));
                owners.extend(std::iter::repeat(None).take(after));
            }

            table.push_row(row);
            above = owners;
        }

        if !table.is_rectangular() {
            log::debug!("Table at depth {} has rows of different lengths", depth);
        }
        Ok(table)
    }

    fn cell(&self, tc: Node, depth: usize) -> Result<TableCell> {
        let fill = child(tc, "tcPr")
            .and_then(|pr| child(pr, "shd"))
            .and_then(|shd| attr(shd, "fill"))
            .map(str::to_string);

        let mut content = Vec::new();
        for node in tc.children() {
            if wml::is_wml(node, "p") {
                content.push(Block::Paragraph(self.paragraph(node)));
            } else if wml::is_wml(node, "tbl") {
                let nested = depth + 1;
                if let Some(limit) = self.options.max_table_depth {
                    if nested > limit {
                        if self.options.is_lenient() {
                            log::warn!("Skipping table nested {} deep (limit {})", nested, limit);
                            continue;
                        }
                        return Err(Error::NestingTooDeep {
                            depth: nested,
                            limit,
                        });
                    }
                }
                content.push(Block::Table(self.table(node, nested)?));
            }
        }

        Ok(TableCell { content, fill })
    }

    fn paragraph(&self, p: Node) -> Paragraph {
        let p_pr = child(p, "pPr");
        let style_id = p_pr.and_then(|pr| child_val(pr, "pStyle"));
        let left_indent = p_pr
            .and_then(|pr| child(pr, "ind"))
            .and_then(|ind| attr(ind, "left").or_else(|| attr(ind, "start")))
            .and_then(|v| v.parse::<f32>().ok())
            .map(twips_to_pts);

        Paragraph {
            runs: children(p, "r").map(run).collect(),
            style_name: self.styles.name_of(style_id).to_string(),
            left_indent,
        }
    }
}

/// Column count declared by `w:tblGrid`, or [`MAX_GRID_COLUMNS`] when absent.
fn grid_width(tbl: Node) -> usize {
    match child(tbl, "tblGrid").map_or(0, |grid| children(grid, "gridCol").count()) {
        0 => MAX_GRID_COLUMNS,
        declared => declared,
    }
}

/// Numeric `w:val` of the property `name`, clamped to the grid width.
fn grid_count(props: Node, name: &str, width: usize) -> usize {
    let count = child_val(props, name)
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    if count > width {
        log::debug!("Clamping {} of {} to grid width {}", name, count, width);
    }
    count.min(width)
}

/// Convert a `w:r` element into a text run.
fn run(r: Node) -> TextRun {
    let format = child(r, "rPr").map(run_format).unwrap_or_default();

    let mut text = String::new();
    for node in r.children().filter(|n| n.is_element()) {
        if node.tag_name().namespace() != Some(wml::WML_NS) {
            continue;
        }
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or("")),
            "tab" | "ptab" => text.push('\t'),
            "br" => match attr(node, "type") {
                None | Some("textWrapping") => text.push('\n'),
                _ => {}
            },
            "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }

    TextRun { text, format }
}

fn run_format(r_pr: Node) -> RunFormat {
    let underline = child(r_pr, "u")
        .is_some_and(|u| !matches!(attr(u, "val"), Some("none")) && !wml::is_off(attr(u, "val")));
    let color = child_val(r_pr, "color")
        .filter(|c| !c.eq_ignore_ascii_case("auto"))
        .map(str::to_string);

    RunFormat {
        bold: toggle(r_pr, "b"),
        italic: toggle(r_pr, "i"),
        underline,
        strike: toggle(r_pr, "strike"),
        color,
    }
}
