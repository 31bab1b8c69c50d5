//! The registry: validated containers resolved to concrete files, and
//! the materialize/load/save machinery the process-global operations
//! drive.
//!
//! A [`Registry`] owns no global state itself, so tests build one
//! directly against a scratch directory. The `OnceLock` lifecycle
//! around it lives in [`handler`](crate::handler).

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::coerce::{CoerceError, SlotValue};
use crate::error::SlotcfgError;
use crate::schema::{Encoding, Field, Schema};
use crate::{json, native, validate, xml};

/// File name of the main configuration file.
pub(crate) const MAIN_FILE_NAME: &str = "config";

/// One container resolved to a concrete file.
#[derive(Debug)]
struct ConfigFile {
    identity: String,
    path: PathBuf,
    encoding: Encoding,
    fields: Vec<Field>,
}

/// The validated registry built once per `setup()`.
#[derive(Debug)]
pub(crate) struct Registry {
    files: Vec<ConfigFile>,
}

impl Registry {
    /// Validates the schema, resolves each container to a path under
    /// the base directory, and materializes missing files with the
    /// slots' current values. No file is touched if validation fails.
    pub(crate) fn build(schema: Schema) -> Result<Registry, SlotcfgError> {
        validate::validate(&schema)?;

        let base_dir = match schema.base_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| SlotcfgError::ReadError {
                path: PathBuf::from("."),
                source: e,
            })?,
        };

        let files = schema
            .containers
            .into_iter()
            .map(|container| {
                let identity = container
                    .file
                    .unwrap_or_else(|| MAIN_FILE_NAME.to_string());
                ConfigFile {
                    path: base_dir.join(&identity),
                    identity,
                    encoding: container.encoding,
                    fields: container.fields,
                }
            })
            .collect();

        let registry = Registry { files };
        registry.materialize_missing()?;
        Ok(registry)
    }

    /// Writes a default file for every configured file that does not
    /// exist yet. Existing files are left alone even when their
    /// contents are malformed; that surfaces on the next load.
    fn materialize_missing(&self) -> Result<(), SlotcfgError> {
        for file in &self.files {
            if file.path.exists() {
                continue;
            }
            debug!(
                file = %file.identity,
                path = %file.path.display(),
                "materializing default config file"
            );
            write_file(file)?;
        }
        Ok(())
    }

    /// Overwrites every configured file in full with the slots'
    /// current values.
    pub(crate) fn save(&self) -> Result<(), SlotcfgError> {
        for file in &self.files {
            debug!(file = %file.identity, path = %file.path.display(), "saving config file");
            write_file(file)?;
        }
        Ok(())
    }

    /// Reads every configured file and stores the decoded values into
    /// the bound slots. Slots mutated before a later file fails stay
    /// mutated.
    pub(crate) fn load(&self) -> Result<(), SlotcfgError> {
        for file in &self.files {
            debug!(file = %file.identity, path = %file.path.display(), "loading config file");
            load_file(file)?;
        }
        Ok(())
    }
}

fn write_file(file: &ConfigFile) -> Result<(), SlotcfgError> {
    let entries: Vec<(String, String)> = file
        .fields
        .iter()
        .map(|f| (f.name.clone(), f.binding.render()))
        .collect();
    let text = match file.encoding {
        Encoding::Native => native::encode(&entries),
        Encoding::Json => json::encode(&entries).map_err(|e| SlotcfgError::JsonError {
            path: file.path.clone(),
            source: e,
        })?,
        Encoding::Xml => xml::encode(&entries),
    };
    fs::write(&file.path, text).map_err(|e| SlotcfgError::WriteError {
        path: file.path.clone(),
        source: e,
    })
}

fn load_file(file: &ConfigFile) -> Result<(), SlotcfgError> {
    let content = fs::read_to_string(&file.path).map_err(|e| SlotcfgError::ReadError {
        path: file.path.clone(),
        source: e,
    })?;
    let entries = match file.encoding {
        Encoding::Native => native::decode(&content, &file.path)?,
        Encoding::Json => json::decode(&content, &file.path)?,
        Encoding::Xml => xml::decode(&content, &file.path)?,
    };

    for field in &file.fields {
        let Some(text) = lookup(&entries, &field.name) else {
            return Err(SlotcfgError::MissingField {
                path: file.path.clone(),
                field: field.name.clone(),
            });
        };
        let stored = if file.encoding.uses_inference() {
            field.binding.store_inferred(SlotValue::infer(text))
        } else {
            field.binding.store_declared(text)
        };
        stored.map_err(|e| coerce_error(file, &field.name, e))?;
    }
    Ok(())
}

/// Finds the value for a declared field. The last occurrence wins for
/// encodings that let duplicates through; keys with no declared field
/// are ignored entirely.
fn lookup<'a>(entries: &'a [(String, String)], name: &str) -> Option<&'a str> {
    entries
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn coerce_error(file: &ConfigFile, field: &str, err: CoerceError) -> SlotcfgError {
    match err {
        CoerceError::Invalid { text, expected } => SlotcfgError::InvalidValue {
            path: file.path.clone(),
            field: field.to_string(),
            text,
            expected,
        },
        CoerceError::Mismatch { found, storage } => SlotcfgError::StorageMismatch {
            path: file.path.clone(),
            field: field.to_string(),
            found,
            storage,
        },
    }
}
