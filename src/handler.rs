//! Process-global lifecycle: one `OnceLock` around the registry and
//! the `setup`/`load`/`save` operations the application calls.

use std::sync::OnceLock;

use crate::error::SlotcfgError;
use crate::registry::Registry;
use crate::schema::Schema;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Validates the schema, creates any missing config files with the
/// slots' current values, and publishes the registry.
///
/// Runs once per process: there is no way back to the uninitialized
/// state, and a second call fails with
/// [`SlotcfgError::AlreadyInitialized`].
pub fn setup(schema: Schema) -> Result<(), SlotcfgError> {
    if REGISTRY.get().is_some() {
        return Err(SlotcfgError::AlreadyInitialized);
    }
    let registry = Registry::build(schema)?;
    REGISTRY
        .set(registry)
        .map_err(|_| SlotcfgError::AlreadyInitialized)
}

/// Reads every configured file and stores its values into the bound
/// slots. Fails with [`SlotcfgError::NotInitialized`] before a
/// successful [`setup()`].
pub fn load() -> Result<(), SlotcfgError> {
    registry()?.load()
}

/// Writes every configured file from the bound slots' current values.
/// Fails with [`SlotcfgError::NotInitialized`] before a successful
/// [`setup()`].
pub fn save() -> Result<(), SlotcfgError> {
    registry()?.save()
}

fn registry() -> Result<&'static Registry, SlotcfgError> {
    REGISTRY.get().ok_or(SlotcfgError::NotInitialized)
}
