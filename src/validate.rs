//! Schema validation: the structural checks `setup()` runs before
//! touching any file.
//!
//! Checks run in a fixed order and the first violation aborts: the
//! container list must be non-empty, at most one container may claim
//! the main file, explicit file names must be unique and non-empty,
//! main and named containers cannot mix, and every container needs at
//! least one field, unique field names, and kind-compatible bindings.
//!
//! Two mistakes cannot arise at runtime and have no check here: a
//! field always carries exactly one kind (the declaring method sets
//! it), and a binding always points at one of the five supported
//! storage types (`SlotBinding` has no other variants).

use crate::error::SlotcfgError;
use crate::schema::{Container, Schema, ValueKind};
use crate::slot::SlotBinding;

pub(crate) fn validate(schema: &Schema) -> Result<(), SlotcfgError> {
    let containers = &schema.containers;
    if containers.is_empty() {
        return Err(SlotcfgError::NoContainers);
    }

    let mains: Vec<&Container> = containers.iter().filter(|c| c.file.is_none()).collect();
    if mains.len() > 1 {
        return Err(SlotcfgError::MultipleMain {
            first: mains[0].name.clone(),
            second: mains[1].name.clone(),
        });
    }

    for (i, container) in containers.iter().enumerate() {
        let Some(file) = &container.file else { continue };
        if file.is_empty() {
            return Err(SlotcfgError::EmptyFileName {
                container: container.name.clone(),
            });
        }
        for earlier in &containers[..i] {
            if earlier.file.as_deref() == Some(file.as_str()) {
                return Err(SlotcfgError::DuplicateFile {
                    first: earlier.name.clone(),
                    second: container.name.clone(),
                    file: file.clone(),
                });
            }
        }
    }

    if let Some(main) = mains.first()
        && let Some(named) = containers.iter().find(|c| c.file.is_some())
    {
        return Err(SlotcfgError::MixedTopology {
            main: main.name.clone(),
            named: named.name.clone(),
        });
    }

    for container in containers {
        if container.fields.is_empty() {
            return Err(SlotcfgError::EmptyContainer {
                container: container.name.clone(),
            });
        }
        for (i, field) in container.fields.iter().enumerate() {
            if container.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SlotcfgError::DuplicateField {
                    container: container.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !kind_allows(field.kind, field.binding) {
                return Err(SlotcfgError::KindMismatch {
                    container: container.name.clone(),
                    field: field.name.clone(),
                    kind: field.kind,
                    storage: field.binding.storage_name(),
                });
            }
        }
    }

    Ok(())
}

/// Number is compatible with the three numeric storages; Text and
/// Boolean with exactly their own.
fn kind_allows(kind: ValueKind, binding: SlotBinding) -> bool {
    matches!(
        (kind, binding),
        (ValueKind::Number, SlotBinding::Int(_))
            | (ValueKind::Number, SlotBinding::Float(_))
            | (ValueKind::Number, SlotBinding::Double(_))
            | (ValueKind::Text, SlotBinding::Text(_))
            | (ValueKind::Boolean, SlotBinding::Bool(_))
    )
}
