use std::path::PathBuf;

use clap::Args;

use super::MergePolicy;

/// Config document and override options for the check command.
#[derive(Args, Debug, Clone, Default)]
pub struct MergeArgs {
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Path to a JSON object whose keys are flag names"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Skip config keys that do not name a declared flag")]
    pub lenient: bool,

    #[arg(
        short = 's',
        long = "set",
        value_name = "NAME=VALUE",
        help = "Override a flag after the config is merged (repeatable)"
    )]
    pub overrides: Vec<String>,
}

impl MergeArgs {
    pub fn policy(&self) -> MergePolicy {
        if self.lenient {
            MergePolicy::Lenient
        } else {
            MergePolicy::Strict
        }
    }

    /// Splits each `--set` value at its first '='.
    /// Returns the offending raw text when one has no '='.
    pub fn parsed_overrides(&self) -> Result<Vec<(&str, &str)>, &str> {
        self.overrides
            .iter()
            .map(|raw| raw.split_once('=').ok_or(raw.as_str()))
            .collect()
    }
}
