use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use super::errors::FlagError;
use super::value::{FlagKind, FlagValue};
use super::{Flag, FlagRegistry};
use crate::merge::scalar::scalar_text;

/// Flag declaration file: an optional registry name and a list of flags.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub flags: Vec<FlagDeclaration>,
}

/// Single flag entry in a declaration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FlagKind,
    #[serde(default)]
    pub short: Option<char>,
    /// Scalar default; converted to text with the same rule as config merges.
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub help: String,
}

impl FlagDeclaration {
    fn default_value(&self) -> Result<FlagValue, FlagError> {
        let Some(raw) = &self.default else {
            return Ok(match self.kind {
                FlagKind::Bool => FlagValue::Bool(false),
                FlagKind::Int => FlagValue::Int(0),
                FlagKind::Float => FlagValue::Float(0.0),
                FlagKind::String => FlagValue::Str(String::new()),
                FlagKind::Duration => FlagValue::Duration(Duration::ZERO),
            });
        };

        let text = scalar_text(raw).map_err(|found| {
            FlagError::Declaration(format!("default must be a scalar, found {found}"))
        })?;
        FlagValue::parse(self.kind, &text)
    }

    pub fn to_flag(&self) -> Result<Flag, FlagError> {
        if self.name.is_empty() {
            return Err(FlagError::Declaration("flag name is empty".to_string()));
        }

        let flag = Flag::new(self.name.clone(), self.default_value()?, self.help.clone());
        Ok(match self.short {
            Some(short) => flag.with_shorthand(short),
            None => flag,
        })
    }
}

impl DeclarationFile {
    /// Registers every declared flag, in file order, into a new registry.
    pub fn into_registry(self, fallback_name: &str) -> Result<FlagRegistry, FlagError> {
        let mut registry = FlagRegistry::new(self.name.as_deref().unwrap_or(fallback_name));
        for decl in &self.flags {
            decl.to_flag()
                .and_then(|flag| registry.register(flag).map(|_| ()))
                .map_err(|e| FlagError::InFlag {
                    flag: decl.name.clone(),
                    source: Box::new(e),
                })?;
        }
        Ok(registry)
    }
}

/// Loads a `.json`, `.toml`, `.yaml` or `.yml` declaration file into a registry.
///
/// The registry is named after the file's `name` field, or the file stem.
pub fn load_declarations(path: impl AsRef<Path>) -> Result<FlagRegistry, FlagError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        FlagError::FileError(format!("failed to open file {}: {}", path.display(), e))
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file: DeclarationFile = match ext.as_str() {
        "json" => serde_json::from_str(&content)
            .map_err(|e| FlagError::Declaration(format!("failed to parse JSON: {}", e)))?,
        "toml" => toml::from_str(&content)
            .map_err(|e| FlagError::Declaration(format!("failed to parse TOML: {}", e)))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| FlagError::Declaration(format!("failed to parse YAML: {}", e)))?,
        other => {
            return Err(FlagError::FileError(format!(
                "unsupported declaration file extension '.{}' for {}",
                other,
                path.display()
            )));
        }
    };

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("flags");
    let registry = file.into_registry(stem)?;
    tracing::debug!(
        registry = registry.name(),
        flags = registry.len(),
        "loaded flag declarations from {}",
        path.display()
    );
    Ok(registry)
}
