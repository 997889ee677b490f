//! TOML configuration.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Collaborator, Config, LoggingConfig, SubmitConfig, WizardConfig};
