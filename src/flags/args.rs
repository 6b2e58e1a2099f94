use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct DeclarationArgs {
    #[arg(
        short = 'f',
        long = "flags",
        value_name = "FILE",
        help = "Path to the flag declarations file (.json, .toml, .yaml or .yml)"
    )]
    pub flags: PathBuf,
}
