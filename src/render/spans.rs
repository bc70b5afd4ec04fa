//! Merge-span resolution for table grids.
//!
//! Merged cells appear in the grid as neighbouring positions holding the same
//! [`CellId`]. Resolution scans the grid twice, once per row and once per
//! column, and records for every position whether it continues a merge and,
//! for every origin, how many extra columns and rows it absorbs.

use crate::model::{CellId, Table};

use super::options::VerticalScan;

/// Extra columns and rows absorbed by a merge origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub colspan_extra: usize,
    pub rowspan_extra: usize,
}

impl Span {
    /// Value of the `colspan` attribute.
    pub fn colspan(&self) -> usize {
        self.colspan_extra + 1
    }

    /// Value of the `rowspan` attribute.
    pub fn rowspan(&self) -> usize {
        self.rowspan_extra + 1
    }

    /// Check if the origin spans more than one position.
    pub fn is_merged(&self) -> bool {
        self.colspan_extra > 0 || self.rowspan_extra > 0
    }
}

/// Per-position merge classification for one table, shaped like its grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanMap {
    continuation: Vec<Vec<bool>>,
    spans: Vec<Vec<Span>>,
}

impl SpanMap {
    /// Whether the position is absorbed into another cell's span.
    pub fn is_continuation(&self, row: usize, col: usize) -> bool {
        self.continuation
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Span counters at a position (all zero when nothing was merged into it).
    pub fn span(&self, row: usize, col: usize) -> Span {
        self.spans
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// Positions that are rendered, in row-major order.
    pub fn origins(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.continuation.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, skip)| !**skip)
                .map(move |(j, _)| (i, j))
        })
    }

    /// Number of continuation positions.
    pub fn continuation_count(&self) -> usize {
        self.continuation.iter().flatten().filter(|c| **c).count()
    }

    fn mark(&mut self, row: usize, col: usize) {
        self.continuation[row][col] = true;
    }
}

/// Resolve merge origins and spans for a table.
///
/// # Example
///
/// ```
/// use undocx::model::{Table, TableCell};
/// use undocx::render::{resolve_spans, VerticalScan};
///
/// let mut table = Table::new();
/// let merged = table.add_cell(TableCell::text("wide"));
/// table.push_row(vec![merged, merged]);
///
/// let spans = resolve_spans(&table, VerticalScan::ColumnLocal);
/// assert!(spans.is_continuation(0, 1));
/// assert_eq!(spans.span(0, 0).colspan(), 2);
/// ```
pub fn resolve_spans(table: &Table, scan: VerticalScan) -> SpanMap {
    let mut map = SpanMap {
        continuation: table.rows().iter().map(|r| vec![false; r.len()]).collect(),
        spans: table.rows().iter().map(|r| vec![Span::default(); r.len()]).collect(),
    };

    let carried = scan_rows(table, &mut map);

    let mut last = match scan {
        VerticalScan::ColumnLocal => None,
        VerticalScan::CarryOver => carried,
    };
    for j in 0..table.column_count() {
        if scan == VerticalScan::ColumnLocal {
            last = None;
        }
        let mut origin = 0;
        let mut expected = 0;
        for (i, id) in table.column(j) {
            // a row too short for this column breaks the run
            if i != expected {
                last = None;
            }
            expected = i + 1;
            if last == Some(id) {
                map.mark(i, j);
                map.spans[origin][j].rowspan_extra += 1;
            } else {
                last = Some(id);
                origin = i;
            }
        }
    }

    map
}

/// Horizontal pass. Returns the cell tracked when the last row ended.
fn scan_rows(table: &Table, map: &mut SpanMap) -> Option<CellId> {
    let mut last = None;
    for (i, row) in table.rows().iter().enumerate() {
        last = None;
        let mut origin = 0;
        for (j, id) in row.iter().enumerate() {
            if last == Some(*id) {
                map.mark(i, j);
                map.spans[i][origin].colspan_extra += 1;
            } else {
                last = Some(*id);
                origin = j;
            }
        }
    }
    last
}
