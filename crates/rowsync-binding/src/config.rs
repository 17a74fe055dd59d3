//! Binding configuration
//!
//! Loaded from TOML. Every key is optional; unknown keys are rejected.
//!
//! ```toml
//! default_row_animation = "fade"
//! animate_differences = true
//! reload_strategy = "reconfigure"
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{config_error, Result};

/// Row animation the host uses for incremental updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAnimation {
    Fade,
    Right,
    Left,
    Top,
    Bottom,
    None,
    Middle,
    /// Let the host pick a suitable style
    #[default]
    Automatic,
}

/// How the host refreshes a row marked for reload-in-place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReloadStrategy {
    /// Re-configure the existing row in place
    #[default]
    Reconfigure,
    /// Replace the row with a freshly built one
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
    pub default_row_animation: RowAnimation,
    /// Animate every snapshot after the first
    pub animate_differences: bool,
    pub reload_strategy: ReloadStrategy,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            default_row_animation: RowAnimation::Automatic,
            animate_differences: true,
            reload_strategy: ReloadStrategy::Reconfigure,
        }
    }
}

impl BindingConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ERR_INVALID_CONFIG` on malformed TOML, unknown keys or
    /// unknown enum values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| config_error(&format!("TOML parse error: {}", e)))
    }

    /// Render this configuration as TOML text
    ///
    /// # Errors
    ///
    /// Returns `ERR_INVALID_CONFIG` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| config_error(&format!("TOML write error: {}", e)))
    }
}
