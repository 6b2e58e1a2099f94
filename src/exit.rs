//! Print-and-exit helpers for binaries built on this crate.

use std::fmt::Display;
use std::process;

use crate::flags::FlagRegistry;
use crate::usage::producer::UsageProducer;

pub const EXIT_FAILURE: i32 = 1;

/// `error: <message>`, the line written by [`fatal`] and [`usage_error`].
pub fn error_message(message: impl Display) -> String {
    format!("error: {message}")
}

/// Prints the error to stderr and exits with a failure status.
pub fn fatal(message: impl Display) -> ! {
    eprintln!("{}", error_message(message));
    process::exit(EXIT_FAILURE)
}

/// Like [`fatal`], but prints the usage text for `registry` before exiting.
pub fn usage_error(message: impl Display, usage: &UsageProducer, registry: &FlagRegistry) -> ! {
    eprintln!("{}", error_message(message));
    if let Err(e) = usage.print(registry) {
        tracing::warn!("failed to print usage: {}", e);
    }
    process::exit(EXIT_FAILURE)
}
