use std::time::Duration;

use flagutil::flags::errors::FlagError;
use flagutil::flags::value::{FlagKind, FlagValue};
use flagutil::flags::{Flag, FlagRegistry};

#[path = "common/mod.rs"]
mod common;

#[test]
fn duplicate_names_are_rejected() {
    let mut flags = common::test_registry();

    let err = flags
        .int("testint", 1, "again")
        .expect_err("duplicate name");

    assert!(matches!(err, FlagError::DuplicateFlag(name) if name == "testint"));
    assert_eq!(flags.len(), 5);
}

#[test]
fn duplicate_shorthands_are_rejected() {
    let mut flags = FlagRegistry::new("short");
    flags
        .register(Flag::new("verbose", FlagValue::Bool(false), "").with_shorthand('v'))
        .expect("register verbose");

    let err = flags
        .register(Flag::new("version", FlagValue::Bool(false), "").with_shorthand('v'))
        .expect_err("shorthand clash");

    assert!(matches!(
        err,
        FlagError::DuplicateShorthand { shorthand: 'v', ref existing, .. } if existing == "verbose"
    ));
    assert!(flags.lookup("version").is_none());
}

#[test]
fn lookup_by_shorthand() {
    let mut flags = FlagRegistry::new("short");
    flags
        .register(Flag::new("count", FlagValue::Int(3), "how many").with_shorthand('n'))
        .expect("register count");

    let flag = flags.lookup_shorthand('n').expect("shorthand resolves");
    assert_eq!(flag.name(), "count");
    assert!(flags.lookup_shorthand('x').is_none());
}

#[test]
fn set_value_on_unknown_flag_fails() {
    let mut flags = common::test_registry();

    let err = flags.set_value("nope", "1").expect_err("unknown flag");

    assert!(matches!(err, FlagError::UnknownFlag(name) if name == "nope"));
}

#[test]
fn rejected_text_leaves_flag_untouched() {
    let mut flags = common::test_registry();

    let err = flags
        .set_value("testint", "ninety-nine")
        .expect_err("not an int");

    assert!(matches!(
        err,
        FlagError::InvalidValue { kind: FlagKind::Int, ref text, .. } if text == "ninety-nine"
    ));
    let flag = flags.lookup("testint").expect("testint exists");
    assert_eq!(flag.value(), &FlagValue::Int(0));
    assert!(!flag.is_changed());
}

#[test]
fn set_marks_flag_changed() {
    let mut flags = common::test_registry();

    flags.set_value("teststring", "hello").expect("set string");

    let flag = flags.lookup("teststring").expect("teststring exists");
    assert!(flag.is_changed());
    assert_eq!(flag.default_text(), "");
    assert_eq!(flags.get_str("teststring"), Some("hello"));
}

#[test]
fn defaults_render_as_text() {
    let flags = common::test_registry();
    let defaults: Vec<String> = flags.entries().map(|f| f.default_text()).collect();
    assert_eq!(defaults, ["false", "0", "0", "", "0s"]);
}

#[test]
fn typed_getters_check_the_kind() {
    let flags = common::test_registry();
    assert_eq!(flags.get_int("testbool"), None);
    assert_eq!(flags.get_bool("missing"), None);
    assert_eq!(flags.get_duration("testduration"), Some(Duration::ZERO));
}

#[test]
fn current_text_round_trips_through_the_setter() {
    let mut flags = common::test_registry();
    for (name, text) in [
        ("testbool", "true"),
        ("testint", "-42"),
        ("testfloat", "0.1"),
        ("teststring", "with spaces and = signs"),
        ("testduration", "1h2m3.5s"),
    ] {
        flags.set_value(name, text).expect("initial set");
        let before = flags.lookup(name).expect("flag exists").value().clone();

        flags
            .set_value(name, &before.to_text())
            .expect("canonical text is accepted");

        assert_eq!(flags.lookup(name).expect("flag exists").value(), &before);
    }
}

#[test]
fn float_text_keeps_full_precision() {
    let value = FlagValue::Float(0.1 + 0.2);
    let reparsed = FlagValue::parse(FlagKind::Float, &value.to_text()).expect("parse float");
    assert_eq!(reparsed, value);
}

#[test]
fn duration_text_is_canonical() {
    let mut flags = common::test_registry();
    flags.set_value("testduration", "99s").expect("set duration");

    let flag = flags.lookup("testduration").expect("flag exists");
    assert_eq!(flag.value().to_text(), "1m39s");
}
