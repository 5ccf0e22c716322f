//! Config command implementation.

use anyhow::Result;

use super::{ConfigAction, ConfigArgs};

/// Run the config command.
pub fn run(args: ConfigArgs) -> Result<()> {
    let mut config = filefly_core::config::Config::load()?;

    match args.action {
        ConfigAction::Get { key } => {
            let value = get_config_value(&config, &key);
            match value {
                Some(v) => println!("{}: {}", key, v),
                None => println!("Unknown configuration key: {}", key),
            }
        }

        ConfigAction::Set { key, value } => {
            if set_config_value(&mut config, &key, &value)? {
                config.save()?;
                println!("Set {} = {}", key, value);
            } else {
                println!("Unknown configuration key: {}", key);
            }
        }

        ConfigAction::Show => {
            println!();
            println!("FileFly Configuration");
            println!("{}", "─".repeat(50));
            println!();
            println!("[sender]");
            println!("  first_name = \"{}\"", config.sender.first_name);
            println!("  last_name = \"{}\"", config.sender.last_name);
            println!();
            println!("[storage]");
            println!("  data_dir = \"{}\"", config.data_dir().display());
            println!("  received_dir = \"{}\"", config.received_dir().display());
            println!("  database_path = \"{}\"", config.database_path().display());
            println!();
            println!("[intake]");
            println!(
                "  strip_transport_prefix = {}",
                config.intake.strip_transport_prefix
            );
            println!(
                "  content_authority = \"{}\"",
                config.intake.content_authority
            );
            println!();
        }

        ConfigAction::Path => {
            println!("{}", filefly_core::config::Config::config_path().display());
        }

        ConfigAction::Reset => {
            let config = filefly_core::config::Config::default();
            config.save()?;
            println!("Configuration reset to defaults.");
        }
    }

    Ok(())
}

fn get_config_value(config: &filefly_core::config::Config, key: &str) -> Option<String> {
    match key {
        "first_name" => Some(config.sender.first_name.clone()),
        "last_name" => Some(config.sender.last_name.clone()),
        "data_dir" => Some(config.data_dir().display().to_string()),
        "strip_transport_prefix" => Some(config.intake.strip_transport_prefix.to_string()),
        "content_authority" => Some(config.intake.content_authority.clone()),
        _ => None,
    }
}

fn set_config_value(
    config: &mut filefly_core::config::Config,
    key: &str,
    value: &str,
) -> Result<bool> {
    match key {
        "first_name" => {
            config.sender.first_name = value.to_string();
            Ok(true)
        }
        "last_name" => {
            config.sender.last_name = value.to_string();
            Ok(true)
        }
        "data_dir" => {
            config.storage.data_dir = Some(value.into());
            Ok(true)
        }
        "strip_transport_prefix" => {
            config.intake.strip_transport_prefix = value.parse()?;
            Ok(true)
        }
        "content_authority" => {
            config.intake.content_authority = value.to_string();
            Ok(true)
        }
        _ => Ok(false),
    }
}
