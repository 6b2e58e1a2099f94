use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct UsageArgs {
    #[arg(
        short = 'w',
        long,
        value_name = "COLUMNS",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Wrap width; defaults to the terminal width, or 80 when not a terminal"
    )]
    pub width: Option<u16>,

    #[arg(long, value_name = "TEXT", default_value = "", help = "Text printed before the flag table")]
    pub preamble: String,

    #[arg(long, value_name = "TEXT", help = "Text printed after the flag table")]
    pub postamble: Option<String>,
}
