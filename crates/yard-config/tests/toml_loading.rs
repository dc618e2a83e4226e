//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use yard_config::YardConfig;

#[test]
fn loads_export_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r##"
[export]
page_format = "a4"
orientation = "landscape"
unit = "mm"
capture_scale = 3.0
background = "#101010"
"##,
        )?;

        let config: YardConfig = Figment::from(Serialized::defaults(YardConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.export.page_format, "a4");
        assert_eq!(config.export.orientation, "landscape");
        assert_eq!(config.export.unit, "mm");
        assert!((config.export.capture_scale - 3.0).abs() < f32::EPSILON);
        assert_eq!(config.export.background, "#101010");
        Ok(())
    });
}

#[test]
fn loads_analytics_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analytics]
base_url = "https://console.example.com"
api_token = "tok-123"
timeout_secs = 15
"#,
        )?;

        let config: YardConfig = Figment::from(Serialized::defaults(YardConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.analytics.base_url, "https://console.example.com");
        assert_eq!(config.analytics.api_token, "tok-123");
        assert_eq!(config.analytics.timeout_secs, Some(15));
        assert!(config.analytics.is_configured());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_other_fields() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[export]
page_format = "letter"
"#,
        )?;

        let config: YardConfig = Figment::from(Serialized::defaults(YardConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.export.page_format, "letter");
        assert_eq!(config.export.orientation, "portrait");
        assert!((config.export.capture_scale - 2.0).abs() < f32::EPSILON);
        assert!(!config.analytics.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analytics]
base_url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("YARD_ANALYTICS__BASE_URL", "https://from-env.example.com");
        jail.set_env("YARD_EXPORT__CAPTURE_SCALE", "1.5");

        let config: YardConfig = Figment::from(Serialized::defaults(YardConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("YARD_").split("__"))
            .extract()?;

        assert_eq!(config.analytics.base_url, "https://from-env.example.com");
        assert!((config.export.capture_scale - 1.5).abs() < f32::EPSILON);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".switchyard")?;
        jail.create_file(
            ".switchyard/config.toml",
            r#"
[export]
unit = "in"
"#,
        )?;

        let config: YardConfig = YardConfig::figment().extract()?;
        assert_eq!(config.export.unit, "in");
        Ok(())
    });
}

#[test]
fn invalid_type_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("YARD_EXPORT__CAPTURE_SCALE", "not-a-number");
        let result = YardConfig::load();
        assert!(matches!(result, Err(yard_config::ConfigError::Figment(_))));
        Ok(())
    });
}
