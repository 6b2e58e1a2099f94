//! Load flag values from JSON documents and print flag usage that doesn't
//! make your eyes bleed.
//!
//! ```
//! use flagutil::flags::FlagRegistry;
//! use flagutil::merge::ConfigMerger;
//! use flagutil::usage::UsageFormatter;
//!
//! let mut registry = FlagRegistry::new("demo");
//! registry.int("port", 8080, "Port to listen on").unwrap();
//!
//! ConfigMerger::strict()
//!     .merge_str(r#"{"port": 9000}"#, &mut registry)
//!     .unwrap();
//! assert_eq!(registry.get_int("port"), Some(9000));
//!
//! let usage = UsageFormatter::new().render(&registry);
//! assert_eq!(usage, "  --port=8080 Port to listen on\n");
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod exit;
pub mod flags;
pub mod logging;
pub mod merge;
pub mod usage;
pub mod visuals;

pub use flags::{Flag, FlagRegistry};
pub use merge::{ConfigMerger, MergePolicy, MergeReport};
pub use usage::UsageFormatter;
