pub mod args;
pub mod declaration;
pub mod duration;
pub mod errors;
pub mod value;

use std::collections::HashMap;
use std::time::Duration;

use errors::FlagError;
use indexmap::IndexMap;
use value::{FlagKind, FlagValue};

pub use declaration::load_declarations;

/// A named, typed, mutable configuration value.
#[derive(Debug, Clone)]
pub struct Flag {
    name: String,
    shorthand: Option<char>,
    help: String,
    default: FlagValue,
    value: FlagValue,
    changed: bool,
}

impl Flag {
    /// Creates a flag whose current value starts at `default`.
    pub fn new(name: impl Into<String>, default: FlagValue, help: impl Into<String>) -> Self {
        Flag {
            name: name.into(),
            shorthand: None,
            help: help.into(),
            value: default.clone(),
            default,
            changed: false,
        }
    }

    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn kind(&self) -> FlagKind {
        self.default.kind()
    }

    pub fn default_value(&self) -> &FlagValue {
        &self.default
    }

    pub fn default_text(&self) -> String {
        self.default.to_text()
    }

    pub fn value(&self) -> &FlagValue {
        &self.value
    }

    /// True once any value has been assigned through [`Flag::set`].
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Parses `text` with this flag's type-specific parser and stores it.
    /// The current value is untouched when the text is rejected.
    pub fn set(&mut self, text: &str) -> Result<(), FlagError> {
        self.value = FlagValue::parse(self.kind(), text)?;
        self.changed = true;
        Ok(())
    }
}

/// Ordered set of flags owned by the hosting application.
///
/// Iteration follows registration order. Names are matched exactly and
/// case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    name: String,
    flags: IndexMap<String, Flag>,
    shorthands: HashMap<char, String>,
}

impl FlagRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        FlagRegistry {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a flag. Names and shorthands must be unique within the registry.
    pub fn register(&mut self, flag: Flag) -> Result<&mut Flag, FlagError> {
        if self.flags.contains_key(flag.name()) {
            return Err(FlagError::DuplicateFlag(flag.name().to_string()));
        }
        if let Some(shorthand) = flag.shorthand() {
            if let Some(existing) = self.shorthands.get(&shorthand) {
                return Err(FlagError::DuplicateShorthand {
                    shorthand,
                    flag: flag.name().to_string(),
                    existing: existing.clone(),
                });
            }
            self.shorthands.insert(shorthand, flag.name().to_string());
        }

        let entry = self.flags.entry(flag.name().to_string());
        Ok(entry.or_insert(flag))
    }

    pub fn bool(
        &mut self,
        name: &str,
        default: bool,
        help: &str,
    ) -> Result<&mut Flag, FlagError> {
        self.register(Flag::new(name, FlagValue::Bool(default), help))
    }

    pub fn int(&mut self, name: &str, default: i64, help: &str) -> Result<&mut Flag, FlagError> {
        self.register(Flag::new(name, FlagValue::Int(default), help))
    }

    pub fn float(&mut self, name: &str, default: f64, help: &str) -> Result<&mut Flag, FlagError> {
        self.register(Flag::new(name, FlagValue::Float(default), help))
    }

    pub fn string(
        &mut self,
        name: &str,
        default: &str,
        help: &str,
    ) -> Result<&mut Flag, FlagError> {
        self.register(Flag::new(name, FlagValue::Str(default.to_string()), help))
    }

    pub fn duration(
        &mut self,
        name: &str,
        default: Duration,
        help: &str,
    ) -> Result<&mut Flag, FlagError> {
        self.register(Flag::new(name, FlagValue::Duration(default), help))
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    pub fn lookup_shorthand(&self, shorthand: char) -> Option<&Flag> {
        self.shorthands
            .get(&shorthand)
            .and_then(|name| self.flags.get(name))
    }

    /// Assigns `text` to the named flag through its type-specific parser.
    pub fn set_value(&mut self, name: &str, text: &str) -> Result<(), FlagError> {
        self.flags
            .get_mut(name)
            .ok_or_else(|| FlagError::UnknownFlag(name.to_string()))?
            .set(text)
    }

    /// Flags in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.lookup(name)?.value() {
            FlagValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.lookup(name)?.value() {
            FlagValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.lookup(name)?.value() {
            FlagValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.lookup(name)?.value() {
            FlagValue::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_duration(&self, name: &str) -> Option<Duration> {
        match self.lookup(name)?.value() {
            FlagValue::Duration(v) => Some(*v),
            _ => None,
        }
    }
}
