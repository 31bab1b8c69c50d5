//! Declarative schema: containers, fields, and the builder handed to
//! [`setup()`](crate::setup).

use std::fmt;
use std::path::PathBuf;

use crate::slot::SlotBinding;

/// The declared kind of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "Number",
            ValueKind::Text => "Text",
            ValueKind::Boolean => "Boolean",
        };
        f.write_str(name)
    }
}

/// The on-disk encoding of one configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Native,
    Json,
    Xml,
}

impl Encoding {
    /// Whether decoded text is stored through type inference rather
    /// than the field's declared kind. Native honors the declaration;
    /// JSON and XML infer from the text itself.
    pub(crate) fn uses_inference(self) -> bool {
        matches!(self, Encoding::Json | Encoding::Xml)
    }
}

/// One declared field: a name, a kind, and the slot it binds.
#[derive(Debug, Clone)]
pub(crate) struct Field {
    pub(crate) name: String,
    pub(crate) kind: ValueKind,
    pub(crate) binding: SlotBinding,
}

/// A declared configuration container.
///
/// Controls three things:
///
/// - **Identity**: the container name, used in diagnostics.
/// - **Placement**: [`main()`](Self::main) persists to the implicit
///   `config` file; [`named()`](Self::named) to an explicit file name.
/// - **Shape**: the ordered field list, declared through the per-kind
///   methods [`number()`](Self::number), [`text()`](Self::text), and
///   [`boolean()`](Self::boolean), plus the
///   [`encoding()`](Self::encoding) the file is written in.
#[derive(Debug, Clone)]
pub struct Container {
    pub(crate) name: String,
    pub(crate) file: Option<String>,
    pub(crate) encoding: Encoding,
    pub(crate) fields: Vec<Field>,
}

impl Container {
    /// Declares the main container, persisted to the implicit `config`
    /// file. At most one may exist, and it excludes named containers.
    pub fn main(name: &str) -> Self {
        Self {
            name: name.to_string(),
            file: None,
            encoding: Encoding::default(),
            fields: Vec::new(),
        }
    }

    /// Declares a container persisted to an explicitly named file under
    /// the base directory.
    pub fn named(name: &str, file: &str) -> Self {
        Self {
            name: name.to_string(),
            file: Some(file.to_string()),
            encoding: Encoding::default(),
            fields: Vec::new(),
        }
    }

    /// Selects the on-disk encoding (default: [`Encoding::Native`]).
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Declares a numeric field. Valid on int, float, and double slots.
    pub fn number(self, name: &str, binding: SlotBinding) -> Self {
        self.field(name, ValueKind::Number, binding)
    }

    /// Declares a text field. Valid on text slots only.
    pub fn text(self, name: &str, binding: SlotBinding) -> Self {
        self.field(name, ValueKind::Text, binding)
    }

    /// Declares a boolean field. Valid on bool slots only.
    pub fn boolean(self, name: &str, binding: SlotBinding) -> Self {
        self.field(name, ValueKind::Boolean, binding)
    }

    fn field(mut self, name: &str, kind: ValueKind, binding: SlotBinding) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            kind,
            binding,
        });
        self
    }
}

/// The full declaration set handed to [`setup()`](crate::setup).
#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) containers: Vec<Container>,
    pub(crate) base_dir: Option<PathBuf>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }
}

/// Builder for a [`Schema`].
pub struct SchemaBuilder {
    containers: Vec<Container>,
    base_dir: Option<PathBuf>,
}

impl SchemaBuilder {
    fn new() -> Self {
        Self {
            containers: Vec::new(),
            base_dir: None,
        }
    }

    /// Adds a container declaration. Order is preserved.
    pub fn container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }

    /// Overrides the directory config files live in (default: the
    /// process working directory, resolved when `setup()` runs).
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            containers: self.containers,
            base_dir: self.base_dir,
        }
    }
}
