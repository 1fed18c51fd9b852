use atl_config::AtelierConfig;
use figment::Jail;

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atelier")?;
        jail.create_file(
            ".atelier/config.toml",
            r#"
[api]
base_url = "http://from-file:5000"
"#,
        )?;
        jail.set_env("ATELIER_API__BASE_URL", "http://from-env:5000");

        let config = AtelierConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://from-env:5000");
        Ok(())
    });
}

#[test]
fn nested_boolean_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("ATELIER_GENERAL__CONFIRM_DELETES", "false");

        let config = AtelierConfig::load().expect("config loads");
        assert!(!config.general.confirm_deletes);
        Ok(())
    });
}

#[test]
fn explicit_api_url_beats_env() {
    Jail::expect_with(|jail| {
        jail.set_env("ATELIER_API__BASE_URL", "http://from-env:5000");

        let config =
            AtelierConfig::load_with_api_url(Some("http://from-flag:8080")).expect("config loads");
        assert_eq!(config.api.base_url(), "http://from-flag:8080");

        let config = AtelierConfig::load_with_api_url(None).expect("config loads");
        assert_eq!(config.api.base_url(), "http://from-env:5000");
        Ok(())
    });
}
