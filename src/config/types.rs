use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub submit: SubmitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Label translations keyed by the English source string.
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

/// Settings for the project wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Organizations offered on the details step. The first one is the
    /// default selection.
    #[serde(default = "default_organizations")]
    pub organizations: Vec<String>,
    /// GitHub users offered on the collaborators step.
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    pub login: String,
}

/// Settings for the local stand-in submission service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Simulated round-trip time in milliseconds (default: 800).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Project names the service reports as already existing.
    #[serde(default)]
    pub taken_names: Vec<String>,
    /// Fail every submission with a transport error.
    #[serde(default)]
    pub offline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file base path. Logging is off when unset and `STEPFORM_LOG` is
    /// not set either.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_organizations() -> Vec<String> {
    vec!["personal".to_string()]
}

fn default_latency_ms() -> u64 {
    800
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            organizations: default_organizations(),
            collaborators: Vec::new(),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            taken_names: Vec::new(),
            offline: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_log_filter(),
        }
    }
}
