#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use serde::{Deserialize, Serialize};

/// App-level toggles from the settings screen. Plain values, no invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_true")]
    pub save_history: bool,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            save_history: true,
        }
    }
}

fn default_true() -> bool {
    true
}
