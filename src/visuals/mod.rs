use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::commands::CheckOutcome;
use crate::flags::FlagRegistry;

pub fn print_summary(outcome: &CheckOutcome) {
    match &outcome.report {
        Some(report) => println!(
            "✓ Applied {} config values to '{}' ({} skipped, {} overrides)",
            report.applied.len(),
            outcome.registry.name(),
            report.skipped.len(),
            outcome.overrides
        ),
        None => println!(
            "✓ Loaded {} flags into '{}' ({} overrides)",
            outcome.registry.len(),
            outcome.registry.name(),
            outcome.overrides
        ),
    }
}

/// One row per flag with its type, default and current value.
pub fn flags_table(registry: &FlagRegistry) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Flag").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Default").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Changed").add_attribute(Attribute::Bold),
        ]);

    for flag in registry.entries() {
        let name = match flag.shorthand() {
            Some(short) => format!("{} (-{})", flag.name(), short),
            None => flag.name().to_string(),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(flag.kind()),
            Cell::new(flag.default_text()),
            Cell::new(flag.value()),
            Cell::new(if flag.is_changed() { "yes" } else { "" }),
        ]);
    }

    table
}

pub fn print_flags(registry: &FlagRegistry) {
    println!("{}\n", flags_table(registry));
}
