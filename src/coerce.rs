//! Text-to-value coercion: the inference trial chain used by the JSON
//! and XML encodings, and the boolean word mapping shared with the
//! native declared-type path.

/// A value produced by the inference policy, before it is stored into
/// a slot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SlotValue {
    Int(i32),
    Float(f32),
    Double(f64),
    Bool(bool),
    Text(String),
}

impl SlotValue {
    /// Trial-parses decoded text in fixed precedence: int, float,
    /// double, bool word, raw text. The float tiers accept only finite
    /// results; a magnitude that overflows f32 falls through to the
    /// f64 tier.
    pub(crate) fn infer(text: &str) -> SlotValue {
        if let Ok(i) = text.parse::<i32>() {
            return SlotValue::Int(i);
        }
        if let Ok(f) = text.parse::<f32>()
            && f.is_finite()
        {
            return SlotValue::Float(f);
        }
        if let Ok(d) = text.parse::<f64>()
            && d.is_finite()
        {
            return SlotValue::Double(d);
        }
        if let Some(b) = parse_bool(text) {
            return SlotValue::Bool(b);
        }
        SlotValue::Text(text.to_string())
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            SlotValue::Int(_) => "int",
            SlotValue::Float(_) => "float",
            SlotValue::Double(_) => "double",
            SlotValue::Bool(_) => "bool",
            SlotValue::Text(_) => "text",
        }
    }
}

/// The two-entry boolean word mapping. Case-sensitive: only the exact
/// lowercase words count.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "false" => Some(false),
        "true" => Some(true),
        _ => None,
    }
}

/// Failure modes of storing decoded text into a slot. Callers attach
/// file and field context before surfacing them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CoerceError {
    Invalid {
        text: String,
        expected: &'static str,
    },
    Mismatch {
        found: &'static str,
        storage: &'static str,
    },
}
