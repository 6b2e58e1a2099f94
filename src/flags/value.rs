use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use super::duration::{format_duration, parse_duration};
use super::errors::FlagError;

/// Declared type of a flag, derived from the 'type' string in declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    Bool,
    Int,
    Float,
    String,
    Duration,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagKind::Bool => "bool",
            FlagKind::Int => "int",
            FlagKind::Float => "float",
            FlagKind::String => "string",
            FlagKind::Duration => "duration",
        };
        f.write_str(name)
    }
}

/// Current or default value of a flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Duration(Duration),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::Float(_) => FlagKind::Float,
            FlagValue::Str(_) => FlagKind::String,
            FlagValue::Duration(_) => FlagKind::Duration,
        }
    }

    /// Parses `text` with the parser of the given kind.
    pub fn parse(kind: FlagKind, text: &str) -> Result<Self, FlagError> {
        match kind {
            FlagKind::Bool => parse_bool(text).map(FlagValue::Bool),
            FlagKind::Int => parse_int(text).map(FlagValue::Int),
            FlagKind::Float => text
                .parse::<f64>()
                .map(FlagValue::Float)
                .map_err(|e| FlagError::invalid(kind, text, e.to_string())),
            FlagKind::String => Ok(FlagValue::Str(text.to_string())),
            FlagKind::Duration => parse_duration(text)
                .map(FlagValue::Duration)
                .map_err(|reason| FlagError::invalid(kind, text, reason)),
        }
    }

    /// Canonical text form; always accepted by [`FlagValue::parse`] for the same kind.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(v) => write!(f, "{v}"),
            FlagValue::Int(v) => write!(f, "{v}"),
            FlagValue::Float(v) => write!(f, "{v}"),
            FlagValue::Str(v) => f.write_str(v),
            FlagValue::Duration(v) => f.write_str(&format_duration(*v)),
        }
    }
}

fn parse_bool(text: &str) -> Result<bool, FlagError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(FlagError::invalid(
            FlagKind::Bool,
            text,
            "expected true or false",
        )),
    }
}

/// Accepts decimal, `0x`/`0o`/`0b` prefixed and leading-zero octal integers.
fn parse_int(text: &str) -> Result<i64, FlagError> {
    let invalid = |reason: String| FlagError::invalid(FlagKind::Int, text, reason);

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(d) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, d)
    } else if let Some(d) = unsigned
        .strip_prefix("0o")
        .or_else(|| unsigned.strip_prefix("0O"))
    {
        (8, d)
    } else if let Some(d) = unsigned
        .strip_prefix("0b")
        .or_else(|| unsigned.strip_prefix("0B"))
    {
        (2, d)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix would otherwise accept a second sign after the prefix
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid("expected an integer".to_string()));
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|e| invalid(e.to_string()))?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
            .ok_or_else(|| invalid("value out of range".to_string()))
    } else {
        i64::try_from(magnitude).map_err(|_| invalid("value out of range".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_parser_handles_prefixes() {
        assert_eq!(parse_int("99").ok(), Some(99));
        assert_eq!(parse_int("-42").ok(), Some(-42));
        assert_eq!(parse_int("0x1f").ok(), Some(31));
        assert_eq!(parse_int("0o17").ok(), Some(15));
        assert_eq!(parse_int("017").ok(), Some(15));
        assert_eq!(parse_int("0b101").ok(), Some(5));
        assert_eq!(parse_int("0").ok(), Some(0));
        assert_eq!(parse_int("-9223372036854775808").ok(), Some(i64::MIN));
    }

    #[test]
    fn int_parser_rejects_junk() {
        for text in ["", "-", "0x", "99.9", "1e3", "--1", "0x-1", "9223372036854775808"] {
            assert!(parse_int(text).is_err(), "accepted '{text}'");
        }
    }

    #[test]
    fn bool_parser_is_strict() {
        assert!(matches!(parse_bool("True"), Ok(true)));
        assert!(matches!(parse_bool("0"), Ok(false)));
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("notabool").is_err());
    }
}
