#![allow(dead_code)]

use std::io::Write;
use std::time::Duration;

use flagutil::flags::FlagRegistry;
use flagutil::flags::value::FlagValue;
use tempfile::NamedTempFile;

pub const CONFIG_DOCUMENT: &str = r#"{"testbool":true,"testint":99,"testfloat":99.9,"teststring":"a string","testduration":"99s"}"#;

/// Registry with one flag of every kind, all at their zero defaults.
pub fn test_registry() -> FlagRegistry {
    let mut flags = FlagRegistry::new("test");
    flags
        .bool("testbool", false, "test bool")
        .expect("register testbool");
    flags.int("testint", 0, "test int").expect("register testint");
    flags
        .float("testfloat", 0.0, "test float")
        .expect("register testfloat");
    flags
        .string("teststring", "", "test string")
        .expect("register teststring");
    flags
        .duration("testduration", Duration::ZERO, "test duration")
        .expect("register testduration");
    flags
}

/// Current values in registry order, for whole-registry comparisons.
pub fn snapshot(registry: &FlagRegistry) -> Vec<(String, FlagValue)> {
    registry
        .entries()
        .map(|flag| (flag.name().to_string(), flag.value().clone()))
        .collect()
}

pub fn write_temp_json(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
