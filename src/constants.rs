//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "StyleBoard";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "styleboard";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "StyleBoard";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "STYLEBOARD_CONFIG_DIR";

/// Name given to a style card when the user doesn't pick one.
pub const DEFAULT_CARD_NAME: &str = "My Style Board";
