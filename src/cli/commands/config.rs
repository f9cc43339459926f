//! Config command handler

use super::{read_line, CommandError};
use crate::args::ConfigSubcommand;
use uni_records::config::Config;
use uni_records::error::ConfigError;

/// Dispatch config subcommands
///
/// # Errors
/// Returns an error for unknown keys, invalid values, or a config file that
/// cannot be written
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), CommandError> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), CommandError> {
    if let Some(k) = key {
        let value = config.get(&k).ok_or(ConfigError::UnknownKey(k))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
    Ok(())
}

/// Handle the config set subcommand
fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Result<(), CommandError> {
    config.set(key, value)?;
    config.save()?;

    if key.contains("password") {
        println!("✓ Set {key}");
    } else {
        println!("✓ Set {key} = {value}");
    }
    Ok(())
}

/// Handle the config unset subcommand
fn handle_config_unset(
    config: &mut Config,
    defaults: &Config,
    key: &str,
) -> Result<(), CommandError> {
    config.unset(key, defaults)?;
    config.save()?;

    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
fn handle_config_reset() -> Result<(), CommandError> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    let response = read_line("Are you sure you want to reset config to defaults? (y/n)")?;

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(ConfigError::Io)?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
