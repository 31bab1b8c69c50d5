//! Process-wide mutable storage cells and the typed handles that bind
//! them to configuration fields.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::coerce::{CoerceError, SlotValue, parse_bool};

/// A process-wide mutable cell holding one configuration value.
///
/// Applications declare slots as `static`s and hand a binding for each
/// to the schema:
///
/// ```
/// use slotcfg::Slot;
///
/// static PORT: Slot<i32> = Slot::new(0);
/// static MOTD: Slot<String> = Slot::new(String::new());
///
/// PORT.set(8080);
/// MOTD.set("welcome".to_string());
/// assert_eq!(PORT.get(), 8080);
/// assert_eq!(MOTD.get(), "welcome");
/// ```
pub struct Slot<T> {
    value: Mutex<T>,
}

impl<T> Slot<T> {
    pub const fn new(initial: T) -> Self {
        Self {
            value: Mutex::new(initial),
        }
    }

    /// Replaces the stored value.
    pub fn set(&self, value: T) {
        *self.lock() = value;
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Slot<T> {
    /// Returns a copy of the stored value.
    pub fn get(&self) -> T {
        self.lock().clone()
    }
}

impl Slot<i32> {
    pub fn bind(&'static self) -> SlotBinding {
        SlotBinding::Int(self)
    }
}

impl Slot<f32> {
    pub fn bind(&'static self) -> SlotBinding {
        SlotBinding::Float(self)
    }
}

impl Slot<f64> {
    pub fn bind(&'static self) -> SlotBinding {
        SlotBinding::Double(self)
    }
}

impl Slot<String> {
    pub fn bind(&'static self) -> SlotBinding {
        SlotBinding::Text(self)
    }
}

impl Slot<bool> {
    pub fn bind(&'static self) -> SlotBinding {
        SlotBinding::Bool(self)
    }
}

/// A typed handle from a configuration field to its backing slot.
///
/// One variant per supported storage type. The binding borrows the
/// slot, which lives as long as the process.
#[derive(Clone, Copy)]
pub enum SlotBinding {
    Int(&'static Slot<i32>),
    Float(&'static Slot<f32>),
    Double(&'static Slot<f64>),
    Text(&'static Slot<String>),
    Bool(&'static Slot<bool>),
}

impl SlotBinding {
    /// Name of the storage type behind this binding, for diagnostics.
    pub fn storage_name(self) -> &'static str {
        match self {
            SlotBinding::Int(_) => "int",
            SlotBinding::Float(_) => "float",
            SlotBinding::Double(_) => "double",
            SlotBinding::Text(_) => "text",
            SlotBinding::Bool(_) => "bool",
        }
    }

    /// Renders the current slot value as config-file text. Booleans
    /// render as the lowercase words.
    pub(crate) fn render(self) -> String {
        match self {
            SlotBinding::Int(slot) => slot.get().to_string(),
            SlotBinding::Float(slot) => slot.get().to_string(),
            SlotBinding::Double(slot) => slot.get().to_string(),
            SlotBinding::Text(slot) => slot.get(),
            SlotBinding::Bool(slot) => slot.get().to_string(),
        }
    }

    /// Parses `text` strictly by the storage type and stores the
    /// result. The declared-type policy of the native encoding.
    pub(crate) fn store_declared(self, text: &str) -> Result<(), CoerceError> {
        match self {
            SlotBinding::Int(slot) => slot.set(parse_typed(text, "int")?),
            SlotBinding::Float(slot) => slot.set(parse_typed(text, "float")?),
            SlotBinding::Double(slot) => slot.set(parse_typed(text, "double")?),
            SlotBinding::Text(slot) => slot.set(text.to_string()),
            SlotBinding::Bool(slot) => {
                let parsed = parse_bool(text).ok_or_else(|| CoerceError::Invalid {
                    text: text.to_string(),
                    expected: "bool",
                })?;
                slot.set(parsed);
            }
        }
        Ok(())
    }

    /// Stores an inferred value, converting it into the storage type
    /// where a widening or stringifying conversion exists. Narrowing
    /// assignments are rejected.
    pub(crate) fn store_inferred(self, value: SlotValue) -> Result<(), CoerceError> {
        let found = value.type_name();
        match (self, value) {
            (SlotBinding::Int(slot), SlotValue::Int(i)) => slot.set(i),
            (SlotBinding::Float(slot), SlotValue::Int(i)) => slot.set(i as f32),
            (SlotBinding::Float(slot), SlotValue::Float(f)) => slot.set(f),
            (SlotBinding::Double(slot), SlotValue::Int(i)) => slot.set(i as f64),
            (SlotBinding::Double(slot), SlotValue::Float(f)) => slot.set(f as f64),
            (SlotBinding::Double(slot), SlotValue::Double(d)) => slot.set(d),
            (SlotBinding::Bool(slot), SlotValue::Bool(b)) => slot.set(b),
            (SlotBinding::Text(slot), SlotValue::Int(i)) => slot.set(i.to_string()),
            (SlotBinding::Text(slot), SlotValue::Float(f)) => slot.set(f.to_string()),
            (SlotBinding::Text(slot), SlotValue::Double(d)) => slot.set(d.to_string()),
            (SlotBinding::Text(slot), SlotValue::Bool(b)) => slot.set(b.to_string()),
            (SlotBinding::Text(slot), SlotValue::Text(t)) => slot.set(t),
            (binding, _) => {
                return Err(CoerceError::Mismatch {
                    found,
                    storage: binding.storage_name(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SlotBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotBinding({})", self.storage_name())
    }
}

fn parse_typed<T: std::str::FromStr>(text: &str, expected: &'static str) -> Result<T, CoerceError> {
    text.parse().map_err(|_| CoerceError::Invalid {
        text: text.to_string(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_initial_value() {
        static S: Slot<i32> = Slot::new(41);
        assert_eq!(S.get(), 41);
    }

    #[test]
    fn set_replaces_value() {
        static S: Slot<String> = Slot::new(String::new());
        S.set("hello".to_string());
        assert_eq!(S.get(), "hello");
    }

    #[test]
    fn render_bool_is_lowercase() {
        static S: Slot<bool> = Slot::new(true);
        assert_eq!(S.bind().render(), "true");
    }

    #[test]
    fn store_declared_parses_by_storage_type() {
        static N: Slot<i32> = Slot::new(0);
        N.bind().store_declared("42").unwrap();
        assert_eq!(N.get(), 42);

        static B: Slot<bool> = Slot::new(false);
        B.bind().store_declared("true").unwrap();
        assert!(B.get());
    }

    #[test]
    fn store_declared_rejects_mixed_case_bool() {
        static B: Slot<bool> = Slot::new(false);
        let err = B.bind().store_declared("True").unwrap_err();
        assert!(matches!(
            err,
            CoerceError::Invalid {
                expected: "bool",
                ..
            }
        ));
    }

    #[test]
    fn store_declared_reports_expected_type() {
        static N: Slot<i32> = Slot::new(0);
        let err = N.bind().store_declared("1.5").unwrap_err();
        match err {
            CoerceError::Invalid { text, expected } => {
                assert_eq!(text, "1.5");
                assert_eq!(expected, "int");
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn store_inferred_widens_int_into_double() {
        static D: Slot<f64> = Slot::new(0.0);
        D.bind().store_inferred(SlotValue::Int(7)).unwrap();
        assert_eq!(D.get(), 7.0);
    }

    #[test]
    fn store_inferred_rejects_float_into_int() {
        static N: Slot<i32> = Slot::new(0);
        let err = N.bind().store_inferred(SlotValue::Float(1.5)).unwrap_err();
        assert!(matches!(
            err,
            CoerceError::Mismatch {
                found: "float",
                storage: "int"
            }
        ));
    }

    #[test]
    fn store_inferred_stringifies_into_text() {
        static T: Slot<String> = Slot::new(String::new());
        T.bind().store_inferred(SlotValue::Bool(true)).unwrap();
        assert_eq!(T.get(), "true");
    }
}
