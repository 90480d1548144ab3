//! Config command handler

use super::{confirm, CommandResult};
use crate::args::ConfigSubcommand;
use studyhub::config::Config;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> CommandResult {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn handle_config_get(config: &Config, key: Option<String>) -> CommandResult {
    let Some(k) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return Ok(());
    };

    let value = config
        .get(&k)
        .ok_or_else(|| format!("✗ Unknown config key: '{k}'"))?;
    println!("{value}");
    Ok(())
}

fn save(config: &Config) -> CommandResult {
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))
}

fn handle_config_set(config: &mut Config, key: &str, value: &str) -> CommandResult {
    config.set(key, value).map_err(|e| format!("✗ {e}"))?;
    save(config)?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> CommandResult {
    config.unset(key, defaults).map_err(|e| format!("✗ {e}"))?;
    save(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn handle_config_reset() -> CommandResult {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if !confirm("Are you sure you want to reset config to defaults?") {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}
