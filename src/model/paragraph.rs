//! Paragraph and run-level types.

/// Name given to paragraphs without an explicit or default style.
pub const DEFAULT_STYLE_NAME: &str = "Normal";

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Text runs in document order
    pub runs: Vec<TextRun>,

    /// Display name of the paragraph style (e.g., "Heading 1")
    pub style_name: String,

    /// Left indentation in points
    pub left_indent: Option<f32>,
}

impl Paragraph {
    /// Create a new empty paragraph with the default style.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style_name: DEFAULT_STYLE_NAME.to_string(),
            left_indent: None,
        }
    }

    /// Create a paragraph holding a single unformatted run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::plain(text));
        p
    }

    /// Set the style name and return self.
    pub fn styled(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    /// Set the left indent (points) and return self.
    pub fn indented(mut self, points: f32) -> Self {
        self.left_indent = Some(points);
        self
    }

    /// Add a run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Whether the style marks this paragraph as a heading.
    pub fn is_heading(&self) -> bool {
        self.style_name.contains("Heading")
    }

    /// Number of whole indentation levels for the given unit size.
    ///
    /// Zero and negative indents yield no levels.
    pub fn indent_levels(&self, unit_pt: f32) -> usize {
        match self.left_indent {
            Some(points) if points > 0.0 && unit_pt > 0.0 => (points / unit_pt).floor() as usize,
            _ => 0,
        }
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A contiguous span of uniformly formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Raw text (tabs and line breaks already expanded to `\t` and `\n`)
    pub text: String,

    /// Run-level formatting
    pub format: RunFormat,
}

impl TextRun {
    /// Create a run with formatting.
    pub fn new(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Create an unformatted run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunFormat::default())
    }
}

/// Direct run formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    /// Explicit font color as `RRGGBB`; `None` for automatic
    pub color: Option<String>,
}

impl RunFormat {
    /// Bold formatting.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Italic formatting.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    /// Set the font color and return self.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Check if no formatting is applied.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}
