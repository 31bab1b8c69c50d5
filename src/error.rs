use std::path::PathBuf;
use thiserror::Error;

use crate::schema::ValueKind;

#[derive(Debug, Error)]
pub enum SlotcfgError {
    #[error("No configuration container was declared")]
    NoContainers,

    #[error("Containers '{first}' and '{second}' both claim the main config file")]
    MultipleMain { first: String, second: String },

    #[error("Containers '{first}' and '{second}' both persist to '{file}'")]
    DuplicateFile {
        first: String,
        second: String,
        file: String,
    },

    #[error("Container '{container}' declares an empty file name")]
    EmptyFileName { container: String },

    #[error("Main container '{main}' cannot coexist with named container '{named}'")]
    MixedTopology { main: String, named: String },

    #[error("Container '{container}' does not contain any fields")]
    EmptyContainer { container: String },

    #[error("{container}.{field} is declared more than once")]
    DuplicateField { container: String, field: String },

    #[error("{container}.{field} is marked {kind} but binds a {storage} slot")]
    KindMismatch {
        container: String,
        field: String,
        kind: ValueKind,
        storage: &'static str,
    },

    #[error("Config store is not initialized — call setup() first")]
    NotInitialized,

    #[error("Config store is already initialized — setup() runs once per process")]
    AlreadyInitialized,

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed line {line} in {path}: expected 'Name = Value'")]
    MalformedLine { path: PathBuf, line: usize },

    #[error("Duplicate key '{key}' in {path}")]
    DuplicateKey { path: PathBuf, key: String },

    #[error("Failed to parse {path}: {source}")]
    JsonError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse {path}: {reason}")]
    XmlError { path: PathBuf, reason: String },

    #[error("Value for key '{key}' in {path} is not a scalar")]
    NonScalarValue { path: PathBuf, key: String },

    #[error("No value for field '{field}' in {path}")]
    MissingField { path: PathBuf, field: String },

    #[error("Invalid value for '{field}' in {path}: '{text}' is not a valid {expected}")]
    InvalidValue {
        path: PathBuf,
        field: String,
        text: String,
        expected: &'static str,
    },

    #[error("Cannot store a {found} value into the {storage} slot of '{field}' in {path}")]
    StorageMismatch {
        path: PathBuf,
        field: String,
        found: &'static str,
        storage: &'static str,
    },
}
