//! Slot declarations for the slotcfg demo application.
//!
//! The demo spreads its fields over three named files to showcase every
//! encoding side by side:
//!
//! | File      | Encoding | Fields                             |
//! |-----------|----------|------------------------------------|
//! | `server`  | Native   | `Host`, `Port`, `Debug`            |
//! | `display` | JSON     | `Color`, `Scale`                   |
//! | `limits`  | XML      | `MaxConnections`, `TimeoutSecs`, `Motd` |
//!
//! Numeric and boolean slots carry their defaults in the initializer.
//! Text slots cannot (static initializers are const, and `String` only
//! offers `String::new()` there), so [`seed()`] fills them in at startup
//! before `setup()` materializes any missing file.

use slotcfg::{Container, Encoding, Schema, Slot};

/// Directory the demo's config files live in, relative to the working
/// directory. Created by `main` before `setup()` runs.
pub const BASE_DIR: &str = "demo-config";

// --- server (Native) ---

/// Hostname the demo pretends to bind to.
pub static HOST: Slot<String> = Slot::new(String::new());

/// Port number.
pub static PORT: Slot<i32> = Slot::new(3000);

/// Enable verbose output.
pub static DEBUG: Slot<bool> = Slot::new(false);

// --- display (JSON) ---

/// Terminal color for the value listing.
pub static COLOR: Slot<String> = Slot::new(String::new());

/// UI scale factor.
pub static SCALE: Slot<f32> = Slot::new(1.0);

// --- limits (XML) ---

/// Maximum number of allowed connections.
pub static MAX_CONNECTIONS: Slot<i32> = Slot::new(100);

/// Request timeout in seconds.
pub static TIMEOUT_SECS: Slot<f64> = Slot::new(2.5);

/// Message of the day. Defaults to text with an ampersand so the XML
/// file shows entity escaping in action.
pub static MOTD: Slot<String> = Slot::new(String::new());

/// Fill in the textual defaults. Call once, before `setup()`.
pub fn seed() {
    HOST.set("127.0.0.1".to_string());
    COLOR.set("yellow".to_string());
    MOTD.set("ready & waiting".to_string());
}

/// The demo schema: three named containers, one per encoding, persisted
/// under `demo-config/` relative to the working directory.
pub fn schema() -> Schema {
    Schema::builder()
        .base_dir(BASE_DIR)
        .container(
            Container::named("Server", "server")
                .text("Host", HOST.bind())
                .number("Port", PORT.bind())
                .boolean("Debug", DEBUG.bind()),
        )
        .container(
            Container::named("Display", "display")
                .encoding(Encoding::Json)
                .text("Color", COLOR.bind())
                .number("Scale", SCALE.bind()),
        )
        .container(
            Container::named("Limits", "limits")
                .encoding(Encoding::Xml)
                .number("MaxConnections", MAX_CONNECTIONS.bind())
                .number("TimeoutSecs", TIMEOUT_SECS.bind())
                .text("Motd", MOTD.bind()),
        )
        .build()
}
