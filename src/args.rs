use crate::flags::args::DeclarationArgs;
use crate::merge::args::MergeArgs;
use crate::usage::args::UsageArgs;
use clap::{Args as ClapArgs, Parser, Subcommand};

// Top-level CLI parser. Each subcommand flattens the per-module Args structs.
#[derive(Parser, Debug)]
#[command(
    name = "flagutil",
    author,
    version,
    about = "Load flag values from JSON config files and print aligned flag usage"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge a config document into declared flags and show the result
    Check(CheckArgs),
    /// Print the pretty usage text for declared flags
    Usage(UsageCommandArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub declarations: DeclarationArgs,

    #[command(flatten)]
    pub merge: MergeArgs,

    #[arg(short, long, help = "Suppress all output except errors")]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct UsageCommandArgs {
    #[command(flatten)]
    pub declarations: DeclarationArgs,

    #[command(flatten)]
    pub usage: UsageArgs,
}
