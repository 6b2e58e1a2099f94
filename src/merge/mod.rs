pub mod args;
pub mod errors;
pub mod scalar;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use errors::MergeError;
use serde_json::{Map, Value};

use crate::flags::FlagRegistry;
use scalar::{json_type_name, scalar_text};

/// How document keys without a matching flag are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Unknown keys abort the merge with [`MergeError::UnknownKey`].
    #[default]
    Strict,
    /// Unknown keys are skipped and reported in [`MergeReport::skipped`].
    Lenient,
}

/// Keys touched by a successful merge, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
}

/// Copies flat JSON objects onto a [`FlagRegistry`].
///
/// Entries are applied in document order. On failure the entries processed
/// before the offending key stay applied; nothing is rolled back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigMerger {
    policy: MergePolicy,
}

impl ConfigMerger {
    pub fn new(policy: MergePolicy) -> Self {
        ConfigMerger { policy }
    }

    pub fn strict() -> Self {
        Self::new(MergePolicy::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(MergePolicy::Lenient)
    }

    /// Opens `path`, merges its contents and closes it again on every path.
    pub fn merge_file(
        &self,
        path: impl AsRef<Path>,
        registry: &mut FlagRegistry,
    ) -> Result<MergeReport, MergeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MergeError::FileError(format!("failed to open file {}: {}", path.display(), e))
        })?;
        let report = self.merge_reader(BufReader::new(file), registry)?;
        tracing::info!(
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "merged config file {}",
            path.display()
        );
        Ok(report)
    }

    /// Decodes a single JSON object from `reader` and merges it.
    pub fn merge_reader<R: Read>(
        &self,
        reader: R,
        registry: &mut FlagRegistry,
    ) -> Result<MergeReport, MergeError> {
        let document: Value = serde_json::from_reader(reader)?;
        self.merge_value(&document, registry)
    }

    pub fn merge_str(
        &self,
        text: &str,
        registry: &mut FlagRegistry,
    ) -> Result<MergeReport, MergeError> {
        let document: Value = serde_json::from_str(text)?;
        self.merge_value(&document, registry)
    }

    /// Merges an already parsed document, which must be a JSON object.
    pub fn merge_value(
        &self,
        document: &Value,
        registry: &mut FlagRegistry,
    ) -> Result<MergeReport, MergeError> {
        match document {
            Value::Object(map) => self.merge_map(map, registry),
            other => Err(MergeError::NotAnObject {
                found: json_type_name(other),
            }),
        }
    }

    pub fn merge_map(
        &self,
        map: &Map<String, Value>,
        registry: &mut FlagRegistry,
    ) -> Result<MergeReport, MergeError> {
        let mut report = MergeReport::default();

        for (key, value) in map {
            if registry.lookup(key).is_none() {
                match self.policy {
                    MergePolicy::Strict => {
                        return Err(MergeError::UnknownKey { key: key.clone() });
                    }
                    MergePolicy::Lenient => {
                        tracing::debug!(key = key.as_str(), "skipping unknown flag");
                        report.skipped.push(key.clone());
                        continue;
                    }
                }
            }

            let text = scalar_text(value).map_err(|found| MergeError::UnsupportedValue {
                key: key.clone(),
                found,
            })?;

            registry
                .set_value(key, &text)
                .map_err(|source| MergeError::Conversion {
                    key: key.clone(),
                    text: text.clone(),
                    source,
                })?;

            tracing::debug!(key = key.as_str(), value = text.as_str(), "applied flag");
            report.applied.push(key.clone());
        }

        Ok(report)
    }
}
