//! Process-wide configuration slots persisted as plain files. Declare
//! each value as a `static`, describe the set once, and go.
//!
//! Slotcfg keeps an application's configuration in typed storage cells
//! ([`Slot`]) that the rest of the program reads and writes directly.
//! A declarative [`Schema`] names each slot, groups slots into
//! containers, and picks a file and encoding per container. [`setup()`]
//! validates the schema and creates missing files with default
//! contents; [`load()`] and [`save()`] then synchronize the slots with
//! the files on demand.
//!
//! ```no_run
//! use slotcfg::{Container, Schema, Slot};
//!
//! static PORT: Slot<i32> = Slot::new(0);
//! static HOST: Slot<String> = Slot::new(String::new());
//! static DEBUG: Slot<bool> = Slot::new(false);
//!
//! fn main() -> Result<(), slotcfg::SlotcfgError> {
//!     slotcfg::setup(
//!         Schema::builder()
//!             .container(
//!                 Container::main("ServerCfg")
//!                     .number("Port", PORT.bind())
//!                     .text("Host", HOST.bind())
//!                     .boolean("Debug", DEBUG.bind()),
//!             )
//!             .build(),
//!     )?;
//!     slotcfg::load()?;
//!
//!     // The application reads and writes the statics directly.
//!     if DEBUG.get() {
//!         println!("listening on {}:{}", HOST.get(), PORT.get());
//!     }
//!     PORT.set(8080);
//!     slotcfg::save()?;
//!     Ok(())
//! }
//! ```
//!
//! # Why slots
//!
//! Most config libraries hand you a struct after loading, and the
//! application threads that struct through everything that needs a
//! value. Slotcfg inverts this: the configuration values *are* the
//! statics the program already reads. Loading overwrites them in
//! place, saving snapshots them, and no plumbing carries a config
//! object around. The cost is global state; the lifecycle below keeps
//! that state explicit.
//!
//! # Declaring a schema
//!
//! A [`Container`] is a named group of fields persisted to one file.
//! Each field declaration pairs a field name with a binding to a
//! `static` slot ([`Slot::bind`]) and states the field's kind:
//!
//! | Declared kind | Accepted storage types |
//! |---------------|------------------------|
//! | `number` | `i32`, `f32`, `f64` |
//! | `text` | `String` |
//! | `boolean` | `bool` |
//!
//! These five storage types are the complete set. A kind that doesn't
//! match its slot's storage type fails [`setup()`].
//!
//! # Topologies
//!
//! Containers place their file one of two ways, and a schema must
//! commit to one of them:
//!
//! - **Main**: [`Container::main`] persists to the implicit file named
//!   `config`. At most one container may do this, and then it must be
//!   the only container.
//! - **Named**: [`Container::named`] persists to an explicit file name.
//!   Any number may coexist as long as the names are unique.
//!
//! Files live under the base directory — the process working directory
//! unless [`SchemaBuilder::base_dir`] overrides it.
//!
//! # Encodings
//!
//! Each container picks one of three encodings for its file. All three
//! carry the same flat name/value pairs; only the framing differs.
//!
//! [`Encoding::Native`] (the default), one `Name = Value` line per
//! field:
//!
//! ```text
//! Port = 8080
//! Host = 127.0.0.1
//! Debug = false
//! ```
//!
//! [`Encoding::Json`], a flat object whose values are always strings:
//!
//! ```text
//! {
//!     "Port": "8080",
//!     "Host": "127.0.0.1",
//!     "Debug": "false"
//! }
//! ```
//!
//! [`Encoding::Xml`], one `field` element per field:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <config>
//!     <field name="Port" value="8080"/>
//!     <field name="Host" value="127.0.0.1"/>
//!     <field name="Debug" value="false"/>
//! </config>
//! ```
//!
//! Booleans always render as the lowercase words `true`/`false`, and
//! fields appear in declaration order.
//!
//! # Loading and coercion
//!
//! How decoded text reaches a slot depends on the encoding:
//!
//! - **Native** honors the declared kind: a `number` field parses by
//!   its slot's storage type, a `boolean` field accepts exactly the
//!   words `true`/`false`, a `text` field takes the raw string.
//! - **JSON and XML** ignore the declared kind and infer from the text
//!   in fixed precedence: `i32`, then finite `f32`, then finite `f64`,
//!   then the boolean words, then raw text. The inferred value is
//!   widened into the slot's storage type where that is lossless
//!   (integers into float slots, anything into text slots as its
//!   rendering); a narrowing assignment such as `"1.5"` into an `i32`
//!   slot is an error. A side effect worth knowing: a text field whose
//!   value looks numeric comes back as the *rendering* of the inferred
//!   number, so `"1.50"` reloads as `"1.5"`.
//!
//! # Lifecycle
//!
//! [`setup()`] runs once per process: it validates the declarations,
//! resolves file paths, writes a default file for every path that does
//! not exist yet (using the slots' current values), and only then
//! publishes the registry. A second `setup()` is rejected, and
//! [`load()`]/[`save()`] before the first successful `setup()` fail
//! with [`SlotcfgError::NotInitialized`].
//!
//! `load()` and `save()` always cover every configured file. Each
//! file's contents are read or rewritten in full; there is no partial
//! write, no rollback across files, and no file locking. Slots are
//! individually thread-safe, but callers that need a consistent
//! multi-slot view serialize `load()`/`save()` themselves.
//!
//! # Error handling
//!
//! All fallible operations return [`SlotcfgError`]. Errors name the
//! offending container, field, or file path, and decode errors carry
//! the position information the underlying parser can give (the native
//! decoder reports 1-based line numbers). See the [`error`] module.

pub mod error;
pub mod schema;

mod coerce;
mod handler;
mod json;
mod native;
mod registry;
mod slot;
mod validate;
mod xml;

pub use error::SlotcfgError;
pub use handler::{load, save, setup};
pub use schema::{Container, Encoding, Schema, SchemaBuilder, ValueKind};
pub use slot::{Slot, SlotBinding};
