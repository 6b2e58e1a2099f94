use std::io::Write;

use crate::args::{CheckArgs, UsageCommandArgs};
use crate::error::FlagutilError;
use crate::flags::{self, FlagRegistry};
use crate::merge::args::MergeArgs;
use crate::merge::{ConfigMerger, MergeReport};
use crate::usage::UsageFormatter;
use crate::usage::args::UsageArgs;
use crate::usage::producer::UsageProducer;
use crate::usage::width::{FixedWidth, TerminalWidth};

/// Result of the check command.
#[derive(Debug)]
pub struct CheckOutcome {
    pub registry: FlagRegistry,
    /// `None` when no config document was given.
    pub report: Option<MergeReport>,
    pub overrides: usize,
}

/// Merges the configured document, if any, into `registry`.
pub fn merge_config(
    args: &MergeArgs,
    registry: &mut FlagRegistry,
) -> Result<Option<MergeReport>, FlagutilError> {
    let Some(path) = &args.config else {
        return Ok(None);
    };
    let merger = ConfigMerger::new(args.policy());
    Ok(Some(merger.merge_file(path, registry)?))
}

/// Applies `--set NAME=VALUE` overrides in order. Returns how many were applied.
pub fn apply_overrides(
    args: &MergeArgs,
    registry: &mut FlagRegistry,
) -> Result<usize, FlagutilError> {
    let overrides = args
        .parsed_overrides()
        .map_err(|raw| FlagutilError::InvalidOverride(raw.to_string()))?;

    for (name, text) in &overrides {
        registry.set_value(name, text)?;
        tracing::debug!(flag = *name, value = *text, "applied override");
    }
    Ok(overrides.len())
}

/// Loads declarations and merges the config. Overrides are applied separately
/// with [`apply_overrides`] so their errors can be reported as usage errors.
pub fn load_and_merge(
    args: &CheckArgs,
) -> Result<(FlagRegistry, Option<MergeReport>), FlagutilError> {
    let mut registry = flags::load_declarations(&args.declarations.flags)?;
    let report = merge_config(&args.merge, &mut registry)?;
    Ok((registry, report))
}

pub fn usage_producer(args: &UsageArgs) -> UsageProducer {
    let producer = UsageProducer::new(args.preamble.clone());
    match &args.postamble {
        Some(postamble) => producer.with_postamble(postamble.clone()),
        None => producer,
    }
}

/// Producer used when `--set` overrides are rejected by the check command.
pub fn override_usage(registry: &FlagRegistry) -> UsageProducer {
    UsageProducer::new(format!("Flags accepted by --set for '{}':", registry.name()))
        .with_postamble("Overrides take the form NAME=VALUE and may be repeated.")
}

/// Writes usage text for `registry`. Without `--width` the terminal width of
/// stdout is used when available.
pub fn write_usage<W: Write>(
    args: &UsageArgs,
    registry: &FlagRegistry,
    out: &mut W,
) -> Result<(), FlagutilError> {
    let producer = usage_producer(args);
    match args.width {
        Some(width) => {
            let formatter = UsageFormatter::with_width_provider(FixedWidth(usize::from(width)));
            producer.write_usage(out, registry, &formatter)?;
        }
        None => {
            let formatter = UsageFormatter::with_width_provider(TerminalWidth::stdout());
            producer.write_usage(out, registry, &formatter)?;
        }
    }
    Ok(())
}

pub fn usage<W: Write>(args: &UsageCommandArgs, out: &mut W) -> Result<(), FlagutilError> {
    let registry = flags::load_declarations(&args.declarations.flags)?;
    write_usage(&args.usage, &registry, out)
}
