use anyhow::Result;
use clap::Subcommand;
use tana_stdio::config::KEYS;
use tana_stdio::Config;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// List all configuration values
    List,
    /// Get a specific configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// Print the config file path
    Path,
}

pub fn handle_config(cmd: &ConfigSubcommand) -> Result<()> {
    let path = Config::config_file_path()?;

    match cmd {
        ConfigSubcommand::List => {
            let config = Config::load()?;
            tana_stdio::header("Current Configuration");
            tana_stdio::info("file", &path.display().to_string());
            for key in KEYS {
                if let Some(value) = config.get(key) {
                    tana_stdio::info(key, &value);
                }
            }
        }
        ConfigSubcommand::Get { key } => {
            let config = Config::load()?;
            match config.get(key) {
                Some(value) => println!("{}", value),
                None => tana_stdio::fatal("config", &format!("Unknown config key: {}", key)),
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // A file that no longer parses is replaced rather than kept
            let mut config = Config::load().unwrap_or_else(|e| {
                tracing::warn!("Replacing unreadable config: {}", e);
                Config::default()
            });
            config.set(key, value)?;
            config.save()?;
            tana_stdio::success(&format!("Set '{}' to '{}'", key, value));
        }
        ConfigSubcommand::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
