//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    String::from("json")
}

/// Deletes ask for confirmation unless disabled.
const fn default_confirm_deletes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (json, table, raw).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Whether `delete` prompts before issuing the request.
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_format, "json");
        assert!(config.confirm_deletes);
    }
}
