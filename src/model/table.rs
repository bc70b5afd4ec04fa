//! Table types.
//!
//! A table stores each distinct logical cell once and addresses it through a
//! [`CellId`]. The grid holds ids, so merged positions are simply positions
//! holding the same id.

use super::Paragraph;

/// Stable identifier of a logical cell within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Distinct logical cells
    cells: Vec<TableCell>,

    /// Row-major grid of cell ids
    grid: Vec<Vec<CellId>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logical cell and return its id.
    pub fn add_cell(&mut self, cell: TableCell) -> CellId {
        self.cells.push(cell);
        CellId(self.cells.len() - 1)
    }

    /// Append a grid row.
    ///
    /// # Panics
    ///
    /// Panics if an id was not returned by [`Table::add_cell`] on this table.
    pub fn push_row(&mut self, row: Vec<CellId>) {
        assert!(
            row.iter().all(|id| id.0 < self.cells.len()),
            "cell id out of range for this table"
        );
        self.grid.push(row);
    }

    /// Append a row of distinct, unmerged cells.
    pub fn add_row(&mut self, cells: impl IntoIterator<Item = TableCell>) {
        let row = cells.into_iter().map(|c| self.add_cell(c)).collect();
        self.grid.push(row);
    }

    /// Look up a logical cell.
    pub fn cell(&self, id: CellId) -> &TableCell {
        &self.cells[id.0]
    }

    /// Cell id at a grid position.
    pub fn cell_id_at(&self, row: usize, col: usize) -> Option<CellId> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Cell at a grid position.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.cell_id_at(row, col).map(|id| self.cell(id))
    }

    /// Grid rows.
    pub fn rows(&self) -> &[Vec<CellId>] {
        &self.grid
    }

    /// Column `col` as `(row index, id)` pairs, skipping rows too short to reach it.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, CellId)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .filter_map(move |(i, row)| row.get(col).map(|id| (i, *id)))
    }

    /// All distinct logical cells.
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    /// Get the number of grid columns (widest row).
    pub fn column_count(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(Vec::is_empty)
    }

    /// Check if every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.grid.iter().all(|r| r.len() == width)
    }

    /// Check if any logical cell occupies more than one position.
    pub fn has_merged_cells(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];
        for id in self.grid.iter().flatten() {
            if std::mem::replace(&mut seen[id.0], true) {
                return true;
            }
        }
        false
    }

    /// Depth of the deepest table nested inside this one (0 = no nesting).
    pub fn nesting_depth(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|c| c.nested_tables())
            .map(|t| 1 + t.nesting_depth())
            .max()
            .unwrap_or(0)
    }

    /// Get plain text, one line per row, each logical cell once per row.
    pub fn plain_text(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                let mut texts = Vec::new();
                let mut last = None;
                for id in row {
                    if last != Some(*id) {
                        texts.push(self.cell(*id).plain_text());
                        last = Some(*id);
                    }
                }
                texts.join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A logical table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    /// Block content in document order
    pub content: Vec<Block>,

    /// Background fill as found in the cell shading (e.g., "FF0000" or "auto")
    pub fill: Option<String>,
}

impl TableCell {
    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a cell with a single plain paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(vec![Block::Paragraph(Paragraph::with_text(text))])
    }

    /// Create a cell with block content.
    pub fn with_content(content: Vec<Block>) -> Self {
        Self {
            content,
            fill: None,
        }
    }

    /// Set the fill and return self.
    pub fn filled(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Fill color usable as a background, ignoring "auto".
    pub fn background(&self) -> Option<&str> {
        self.fill
            .as_deref()
            .filter(|f| !f.is_empty() && !f.eq_ignore_ascii_case("auto"))
    }

    /// Tables directly nested in this cell.
    pub fn nested_tables(&self) -> impl Iterator<Item = &Table> {
        self.content.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|b| match b {
                Block::Paragraph(p) => p.plain_text(),
                Block::Table(t) => t.plain_text(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Block-level content of a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),
    /// A nested table
    Table(Table),
}
