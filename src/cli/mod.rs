//! CLI command handlers for StyleBoard.
//!
//! This module provides headless, scriptable access to the outfit composer
//! for automation and testing.

pub mod board;
pub mod classify;
pub mod common;
pub mod config;
pub mod wardrobe;

// Re-export types used by main.rs and tests
pub use board::BoardArgs;
pub use classify::ClassifyArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use wardrobe::WardrobeArgs;
