use console::Term;

/// Wrap width used when no provider can report one.
pub const DEFAULT_WIDTH: usize = 80;

/// Source of the column count usage text is wrapped to.
pub trait WidthProvider {
    /// Columns available on the sink, or `None` when unknown.
    fn columns(&self) -> Option<usize>;
}

/// Constant width, for deterministic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl Default for FixedWidth {
    fn default() -> Self {
        FixedWidth(DEFAULT_WIDTH)
    }
}

impl WidthProvider for FixedWidth {
    fn columns(&self) -> Option<usize> {
        Some(self.0)
    }
}

/// Width of an attached terminal. Reports nothing when the stream is
/// redirected to a file or pipe.
#[derive(Debug, Clone)]
pub struct TerminalWidth {
    term: Term,
}

impl TerminalWidth {
    pub fn stdout() -> Self {
        TerminalWidth {
            term: Term::stdout(),
        }
    }
}

impl WidthProvider for TerminalWidth {
    fn columns(&self) -> Option<usize> {
        self.term
            .size_checked()
            .map(|(_rows, cols)| usize::from(cols))
    }
}
