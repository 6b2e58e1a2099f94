use std::io::{self, Write};

use super::UsageFormatter;
use super::width::{TerminalWidth, WidthProvider};
use crate::flags::FlagRegistry;

/// Full usage text: preamble, blank line, flag table and an optional
/// postamble preceded by a blank line.
#[derive(Debug, Clone, Default)]
pub struct UsageProducer {
    preamble: String,
    postamble: String,
}

impl UsageProducer {
    pub fn new(preamble: impl Into<String>) -> Self {
        UsageProducer {
            preamble: preamble.into(),
            postamble: String::new(),
        }
    }

    pub fn with_postamble(mut self, postamble: impl Into<String>) -> Self {
        self.postamble = postamble.into();
        self
    }

    pub fn write_usage<W: Write + ?Sized, P: WidthProvider>(
        &self,
        out: &mut W,
        registry: &FlagRegistry,
        formatter: &UsageFormatter<P>,
    ) -> io::Result<()> {
        write!(out, "{}\n\n", self.preamble)?;
        formatter.write_flags(out, registry)?;
        if !self.postamble.is_empty() {
            write!(out, "\n{}\n", self.postamble)?;
        }
        Ok(())
    }

    /// Writes the usage text to standard output, wrapped to the terminal.
    pub fn print(&self, registry: &FlagRegistry) -> io::Result<()> {
        let formatter = UsageFormatter::with_width_provider(TerminalWidth::stdout());
        let mut out = io::stdout().lock();
        self.write_usage(&mut out, registry, &formatter)?;
        out.flush()
    }
}
