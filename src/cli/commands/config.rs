//! Config command handler

use crate::args::ConfigSubcommand;
use grade_point::config::Config;
use std::io::{self, Write};

/// Keys the config layer understands, shown when a lookup misses
const KNOWN_KEYS: &str = "level, file, verbose, default_scale, reports_dir";

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => print_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => print_value(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_value(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_value(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_all(),
    }
}

/// Print every configuration value together with the backing file path
fn print_all(config: &Config) {
    println!(
        "\n=== Configuration ({}) ===\n",
        Config::get_config_file_path().display()
    );
    print!("{config}");
}

/// Print a single configuration value
fn print_value(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => {
            eprintln!("Unknown config key: '{key}'");
            eprintln!("Known keys: {KNOWN_KEYS}");
            std::process::exit(1);
        }
    }
}

/// Validate, apply, and persist a single configuration value
fn set_value(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    persist(config);
    println!("✓ Set {key} = {value}");
    if matches!(key, "default_scale" | "default-scale" | "scale") {
        println!("  compute runs without --scale now use the {value} scale");
    }
}

/// Restore one key to its compiled-in default and persist
fn unset_value(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    persist(config);
    let restored = config.get(key).unwrap_or_default();
    println!("✓ Reset {key} to its default (\"{restored}\")");
}

fn persist(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Delete the config file after confirmation; the next run recreates it
/// from the compiled-in defaults.
fn reset_all() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset all GradePoint settings to their defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
