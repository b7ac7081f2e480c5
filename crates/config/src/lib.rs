//! Configuration for the intake engine
//!
//! Three layers:
//! - [`Settings`]: runtime tunables loaded from an optional TOML file plus
//!   `CYBERSATHI_`-prefixed environment variables
//! - [`MessageTemplates`]: all user-facing copy (menus, confirmations,
//!   apologies)
//! - [`FieldPrompts`]: the per-field configuration table (prompt text,
//!   validation kind, error copy, quick-reply options)

pub mod fields;
pub mod menus;
pub mod prompts;
pub mod settings;

pub use fields::{FieldKind, FieldPrompts, FieldSpec};
pub use menus::{branch_menu, confirmation_menu, follow_up_menu, welcome_menu};
pub use prompts::MessageTemplates;
pub use settings::{
    load_settings, RetryConfig, SessionConfig, Settings, TicketConfig, DEFAULT_CONFIG_FILE,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
