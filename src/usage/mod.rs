//! Pretty usage text for a [`FlagRegistry`].
//!
//! Each flag is printed as an indented label followed by its help text,
//! word-wrapped so every continuation line starts in the description column:
//!
//! ```text
//!   -v, --verbose=false Enable verbose output.
//!   --timeout=30s       How long to wait for a reply before giving up
//!                       and reporting an error.
//! ```

pub mod args;
pub mod producer;
pub mod width;
pub mod wrap;

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::flags::{Flag, FlagRegistry};
use width::{DEFAULT_WIDTH, FixedWidth, WidthProvider};
use wrap::wrap_text;

/// Spaces before each label.
pub const LABEL_INDENT: usize = 2;

/// Added to the widest label to get the description column. With
/// [`LABEL_INDENT`] this leaves at least one space after the widest label.
pub const COLUMN_PADDING: usize = 3;

/// `-<alias>, --<name>=<default>`, or `--<name>=<default>` without an alias.
pub fn format_label(flag: &Flag) -> String {
    match flag.shorthand() {
        Some(short) => format!("-{}, --{}={}", short, flag.name(), flag.default_text()),
        None => format!("--{}={}", flag.name(), flag.default_text()),
    }
}

/// Column at which descriptions start.
pub fn column_width(registry: &FlagRegistry) -> usize {
    registry
        .entries()
        .map(|flag| format_label(flag).width())
        .max()
        .unwrap_or(0)
        + COLUMN_PADDING
}

#[derive(Debug, Clone, Default)]
pub struct UsageFormatter<P = FixedWidth> {
    width: P,
}

impl UsageFormatter {
    /// Formatter wrapping at the fixed default of 80 columns.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: WidthProvider> UsageFormatter<P> {
    pub fn with_width_provider(width: P) -> Self {
        UsageFormatter { width }
    }

    /// Width lines are wrapped to; falls back to [`DEFAULT_WIDTH`].
    pub fn wrap_width(&self) -> usize {
        self.width
            .columns()
            .filter(|&columns| columns > 0)
            .unwrap_or(DEFAULT_WIDTH)
    }

    /// Writes one line group per flag, in registry order.
    pub fn write_flags<W: Write + ?Sized>(
        &self,
        out: &mut W,
        registry: &FlagRegistry,
    ) -> io::Result<()> {
        let column = column_width(registry);
        let available = self.wrap_width().saturating_sub(column);
        for flag in registry.entries() {
            out.write_all(flag_group(flag, column, available).as_bytes())?;
        }
        Ok(())
    }

    /// Same output as [`UsageFormatter::write_flags`], collected into a string.
    pub fn render(&self, registry: &FlagRegistry) -> String {
        let column = column_width(registry);
        let available = self.wrap_width().saturating_sub(column);
        registry
            .entries()
            .map(|flag| flag_group(flag, column, available))
            .collect()
    }
}

fn flag_group(flag: &Flag, column: usize, available: usize) -> String {
    let label = format_label(flag);
    let pad = column.saturating_sub(LABEL_INDENT + label.width()).max(1);
    let indent = " ".repeat(column);

    let mut lines = wrap_text(flag.help(), available).into_iter();
    let first = lines.next().unwrap_or_default();

    let mut group = format!("{}{}{}{}", " ".repeat(LABEL_INDENT), label, " ".repeat(pad), first);
    truncate_trailing_whitespace(&mut group);
    group.push('\n');

    for line in lines {
        if !line.is_empty() {
            group.push_str(&indent);
            group.push_str(&line);
        }
        group.push('\n');
    }
    group
}

fn truncate_trailing_whitespace(line: &mut String) {
    let len = line.trim_end().len();
    line.truncate(len);
}
