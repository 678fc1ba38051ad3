//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use dx_config::{DxConfig, PROJECT_CONFIG_PATH};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://dx.example.org/api"
timeout_secs = 30
user_agent = "dxwiz-test"
"#,
        )?;

        let config: DxConfig = Figment::from(Serialized::defaults(DxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://dx.example.org/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.user_agent, "dxwiz-test");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
export_dir = "reports"
"#,
        )?;

        let config: DxConfig = Figment::from(Serialized::defaults(DxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.export_dir, "reports");
        assert_eq!(config.general.state_dir, ".dxwiz");
        assert_eq!(config.general.history_limit, 20);
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dxwiz")?;
        jail.create_file(
            PROJECT_CONFIG_PATH,
            r#"
[general]
history_limit = 5
"#,
        )?;

        let config = DxConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.general.history_limit, 5);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dxwiz")?;
        jail.create_file(
            PROJECT_CONFIG_PATH,
            r#"
[api]
base_url = "localhost:5000"
"#,
        )?;

        let err = DxConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.base_url"), "{err}");
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dxwiz")?;
        jail.create_file(PROJECT_CONFIG_PATH, "[api\nbase_url = ")?;

        let err = DxConfig::load().unwrap_err();
        assert!(matches!(err, dx_config::ConfigError::Figment(_)));
        Ok(())
    });
}
