//! Shared CLI plumbing: error type, exit codes, and config fallbacks.

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::models::WardrobeItem;
use crate::services::{JsonSavedBoardStore, JsonWardrobeStore, WardrobeStore};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or a rule was violated
    Validation = 1,
    /// File could not be read, parsed, or written
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every command that reads the wardrobe.
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Wardrobe JSON file (defaults to the configured path)
    #[arg(long, value_name = "FILE")]
    pub wardrobe: Option<PathBuf>,

    /// User ID (defaults to the configured user)
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,
}

impl StoreArgs {
    /// Resolves the wardrobe store and user, falling back to `config`.
    pub fn open(&self, config: &Config) -> CliResult<(JsonWardrobeStore, String)> {
        let user = resolve_user(self.user.as_deref(), config)?;
        let path = self
            .wardrobe
            .clone()
            .unwrap_or_else(|| config.paths.wardrobe.clone());
        Ok((JsonWardrobeStore::new(path), user))
    }

    /// Loads the user's wardrobe snapshot.
    pub fn load_wardrobe(&self, config: &Config) -> CliResult<(Vec<WardrobeItem>, String)> {
        let (store, user) = self.open(config)?;
        let items = store
            .list_items(&user)
            .map_err(|e| CliError::io(format!("Failed to load wardrobe: {e:#}")))?;
        Ok((items, user))
    }
}

/// Loads configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Picks the explicit user, else the configured one.
pub fn resolve_user(explicit: Option<&str>, config: &Config) -> CliResult<String> {
    explicit
        .map(ToString::to_string)
        .or_else(|| config.profile.user_id.clone())
        .ok_or_else(|| {
            CliError::validation(format!(
                "No user specified. Pass --user or run `{APP_BINARY_NAME} config set --user <ID>`"
            ))
        })
}

/// Opens the saved board store at the explicit path, else the configured one.
pub fn saved_board_store(explicit: Option<&PathBuf>, config: &Config) -> JsonSavedBoardStore {
    JsonSavedBoardStore::new(
        explicit
            .cloned()
            .unwrap_or_else(|| config.paths.saved_boards.clone()),
    )
}

/// Prints a value as a single line of JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
