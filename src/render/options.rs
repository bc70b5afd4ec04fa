//! Rendering options and configuration.

/// Points of left indentation that make up one indentation level.
pub const DEFAULT_INDENT_UNIT_PT: f32 = 18.0;

/// Class attribute of each top-level table.
pub const DEFAULT_TABLE_CLASS: &str = "table table-bordered table-hover";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Class attribute of top-level `<table>` elements
    pub table_class: String,

    /// Points per indentation level
    pub indent_unit_pt: f32,

    /// How the vertical merge pass compares cells
    pub vertical_scan: VerticalScan,

    /// Escape `&`, `<` and `>` in run text
    pub escape_text: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class of top-level tables.
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    /// Set the indentation unit in points. Non-positive values disable indentation.
    pub fn with_indent_unit(mut self, points: f32) -> Self {
        self.indent_unit_pt = points;
        self
    }

    /// Set the vertical merge scan mode.
    pub fn with_vertical_scan(mut self, scan: VerticalScan) -> Self {
        self.vertical_scan = scan;
        self
    }

    /// Enable or disable escaping of run text.
    pub fn with_escaped_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            indent_unit_pt: DEFAULT_INDENT_UNIT_PT,
            vertical_scan: VerticalScan::default(),
            escape_text: false,
        }
    }
}

/// Cell comparison used by the vertical merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalScan {
    /// Compare each position with the cell above it in the same column
    #[default]
    ColumnLocal,
    /// Compare against the last cell tracked so far, starting from the one
    /// the row pass ended on and carried from column to column
    CarryOver,
}
