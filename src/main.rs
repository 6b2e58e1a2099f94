use std::io::Write;

use clap::Parser;

use flagutil::args::{Args, Command};
use flagutil::commands;
use flagutil::error::FlagutilError;
use flagutil::exit::{fatal, usage_error};
use flagutil::logging;
use flagutil::visuals;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.command {
        Command::Check(check) => {
            let (mut registry, report) =
                commands::load_and_merge(&check).unwrap_or_else(|e| fatal(e));

            // Bad overrides are command-line mistakes, so show what is accepted.
            let overrides = match commands::apply_overrides(&check.merge, &mut registry) {
                Ok(n) => n,
                Err(e) => usage_error(e, &commands::override_usage(&registry), &registry),
            };

            if !check.quiet {
                let outcome = commands::CheckOutcome {
                    registry,
                    report,
                    overrides,
                };
                visuals::print_flags(&outcome.registry);
                visuals::print_summary(&outcome);
            }
        }
        Command::Usage(usage) => {
            let mut out = std::io::stdout().lock();
            if let Err(e) = commands::usage(&usage, &mut out)
                .and_then(|()| out.flush().map_err(FlagutilError::from))
            {
                fatal(e);
            }
        }
    }
}
