//! # slotcfg demo application
//!
//! A sample tool that showcases how to wire
//! [slotcfg](https://docs.rs/slotcfg) into a real application. This is
//! **not** a real app; it exists purely to demonstrate and manually
//! verify slotcfg's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example slotcfg_demo -- show
//! cargo run --example slotcfg_demo -- bump
//! cargo run --example slotcfg_demo -- reset
//! ```
//!
//! Config files live under `demo-config/` in the working directory.
//!
//! ## Features demonstrated
//!
//! | Feature             | How to exercise it                                       |
//! |---------------------|----------------------------------------------------------|
//! | Materialized files  | Delete `demo-config/`, then run `show`                   |
//! | Native encoding     | Inspect `demo-config/server` after any run               |
//! | JSON encoding       | Inspect `demo-config/display`                            |
//! | XML encoding        | Inspect `demo-config/limits` (note the escaped `&`)      |
//! | Hand edits          | Change `Port` in `demo-config/server`, then run `show`   |
//! | Type inference      | Set `"Scale": "2.75"` in `display`, then run `show`      |
//! | Saving slot changes | Run `bump`, then `show`                                  |
//! | Compiled defaults   | Run `reset` to rewrite every file from the slot defaults |

mod config;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn load_or_die() {
    slotcfg::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config:\n{e}");
        std::process::exit(1);
    });
}

fn save_or_die() {
    slotcfg::save().unwrap_or_else(|e| {
        eprintln!("Failed to save config:\n{e}");
        std::process::exit(1);
    });
}

/// Print every slot, aligned, as `file.Field  value`.
fn print_values() {
    let entries = [
        ("server.Host", config::HOST.get()),
        ("server.Port", config::PORT.get().to_string()),
        ("server.Debug", config::DEBUG.get().to_string()),
        ("display.Color", config::COLOR.get()),
        ("display.Scale", config::SCALE.get().to_string()),
        (
            "limits.MaxConnections",
            config::MAX_CONNECTIONS.get().to_string(),
        ),
        ("limits.TimeoutSecs", config::TIMEOUT_SECS.get().to_string()),
        ("limits.Motd", config::MOTD.get()),
    ];

    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        println!("{key:<width$}  {value}");
    }
}

/// Nudge every mutable kind of slot so a following save has something
/// new to persist.
fn bump() {
    config::PORT.set(config::PORT.get() + 1);
    config::DEBUG.set(!config::DEBUG.get());
    config::SCALE.set(config::SCALE.get() + 0.25);
    config::MAX_CONNECTIONS.set(config::MAX_CONNECTIONS.get() * 2);
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let command = std::env::args().nth(1).unwrap_or_else(|| "show".to_string());

    config::seed();
    std::fs::create_dir_all(config::BASE_DIR).unwrap_or_else(|e| {
        eprintln!("Failed to create {}: {e}", config::BASE_DIR);
        std::process::exit(1);
    });
    slotcfg::setup(config::schema()).unwrap_or_else(|e| {
        eprintln!("Setup failed:\n{e}");
        std::process::exit(1);
    });

    match command.as_str() {
        // Pull file contents into the slots and list them.
        "show" => {
            load_or_die();
            print_values();
        }
        // Load, mutate the slots in memory, and persist the result.
        "bump" => {
            load_or_die();
            bump();
            save_or_die();
            print_values();
        }
        // Save without loading: the slots still hold their compiled
        // defaults, so every file is rewritten from scratch.
        "reset" => {
            save_or_die();
            print_values();
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("Usage: slotcfg_demo [show|bump|reset]");
            std::process::exit(2);
        }
    }
}
