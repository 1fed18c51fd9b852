//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use atl_config::{AtelierConfig, ConfigError};
use figment::Jail;

#[test]
fn loads_project_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atelier")?;
        jail.create_file(
            ".atelier/config.toml",
            r#"
[api]
base_url = "https://records.example.com/"
user_agent = "studio-terminal"

[general]
default_format = "table"
confirm_deletes = false
"#,
        )?;

        let config = AtelierConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "https://records.example.com");
        assert_eq!(config.api.user_agent, "studio-terminal");
        assert_eq!(config.general.default_format, "table");
        assert!(!config.general.confirm_deletes);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atelier")?;
        jail.create_file(
            ".atelier/config.toml",
            r#"
[general]
default_format = "raw"
"#,
        )?;

        let config = AtelierConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://localhost:5000");
        assert_eq!(config.general.default_format, "raw");
        assert!(config.general.confirm_deletes);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atelier")?;
        jail.create_file(
            ".atelier/config.toml",
            r#"
[api]
base_url = "records.example.com"
"#,
        )?;

        let err = AtelierConfig::load().expect_err("scheme-less URL should fail");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
