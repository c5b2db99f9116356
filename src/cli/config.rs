//! `config` command: inspect and change the settings file.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Inspect or change settings
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Print the effective settings
    Show(ConfigShowArgs),
    /// Change data file paths or the active user
    Set(ConfigSetArgs),
}

/// Print the effective settings
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change data file paths or the active user
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Wardrobe JSON file
    #[arg(long, value_name = "FILE")]
    wardrobe: Option<PathBuf>,

    /// Saved style cards JSON file
    #[arg(long, value_name = "FILE")]
    saved_boards: Option<PathBuf>,

    /// Active user ID
    #[arg(long, value_name = "ID")]
    user: Option<String>,
}

/// `config show --json` payload
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    profile: ProfileOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    wardrobe: String,
    saved_boards: String,
}

#[derive(Serialize, Debug)]
struct ProfileOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

impl ConfigArgs {
    /// Runs the selected config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            return print_json(&ConfigOutput::from(&config));
        }

        print_settings(&config);
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.wardrobe.is_none() && self.saved_boards.is_none() && self.user.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --wardrobe, --saved-boards, or --user",
            ));
        }

        let mut config = load_config()?;

        if let Some(path) = &self.wardrobe {
            config.paths.wardrobe.clone_from(path);
        }
        if let Some(path) = &self.saved_boards {
            config.paths.saved_boards.clone_from(path);
        }
        if let Some(user) = &self.user {
            config.profile.user_id = Some(user.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn config_file_display() -> String {
    Config::config_file_path().map_or_else(|_| "(unknown)".to_string(), |path| path.display().to_string())
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            config_file: config_file_display(),
            paths: PathsOutput {
                wardrobe: config.paths.wardrobe.display().to_string(),
                saved_boards: config.paths.saved_boards.display().to_string(),
            },
            profile: ProfileOutput {
                user_id: config.profile.user_id.clone(),
            },
        }
    }
}

fn print_settings(config: &Config) {
    let file_state = if Config::exists() { "" } else { " (not written yet, showing defaults)" };

    println!("{APP_NAME} settings");
    println!();
    println!("Config file:  {}{file_state}", config_file_display());
    println!("Wardrobe:     {}", config.paths.wardrobe.display());
    println!("Saved boards: {}", config.paths.saved_boards.display());
    println!(
        "User:         {}",
        config.profile.user_id.as_deref().unwrap_or("(none, pass --user or set one)")
    );
}
