//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use najia_config::{ConfigError, NajiaConfig, OutputFormat};
use najia_core::Topic;
use pretty_assertions::assert_eq;

fn chain() -> Figment {
    Figment::from(Serialized::defaults(NajiaConfig::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("NAJIA_").split("__"))
}

#[test]
fn loads_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
output = "json"
utc_offset_hours = 8
default_topic = "財運"
"#,
        )?;

        let config = NajiaConfig::from_figment(chain()).map_err(|e| e.to_string())?;
        assert_eq!(config.general.output, OutputFormat::Json);
        assert_eq!(config.general.utc_offset_hours, Some(8));
        assert_eq!(
            config.general.topic().map_err(|e| e.to_string())?,
            Some(Topic::Wealth)
        );
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\noutput = \"json\"\n")?;
        jail.set_env("NAJIA_GENERAL__OUTPUT", "text");
        jail.set_env("NAJIA_GENERAL__UTC_OFFSET_HOURS", "-5");

        let config = NajiaConfig::from_figment(chain()).map_err(|e| e.to_string())?;
        assert_eq!(config.general.output, OutputFormat::Text);
        assert_eq!(config.general.utc_offset_hours, Some(-5));
        Ok(())
    });
}

#[test]
fn local_project_file_is_read() {
    Jail::expect_with(|jail| {
        jail.create_dir(".najia")?;
        jail.create_file(".najia/config.toml", "[general]\ndefault_topic = \"exam\"\n")?;

        let config =
            NajiaConfig::from_figment(NajiaConfig::layered(None)).map_err(|e| e.to_string())?;
        assert_eq!(
            config.general.topic().map_err(|e| e.to_string())?,
            Some(Topic::Exam)
        );
        Ok(())
    });
}

#[test]
fn local_file_overrides_global_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "global.toml",
            r#"
[general]
output = "json"
utc_offset_hours = 9
"#,
        )?;
        jail.create_dir(".najia")?;
        jail.create_file(".najia/config.toml", "[general]\noutput = \"text\"\n")?;

        let global = jail.directory().join("global.toml");
        let config = NajiaConfig::from_figment(NajiaConfig::layered(Some(&global)))
            .map_err(|e| e.to_string())?;
        assert_eq!(config.general.output, OutputFormat::Text);
        assert_eq!(config.general.utc_offset_hours, Some(9));
        Ok(())
    });
}

#[test]
fn missing_global_file_is_skipped() {
    Jail::expect_with(|jail| {
        let global = jail.directory().join("absent.toml");
        let config = NajiaConfig::from_figment(NajiaConfig::layered(Some(&global)))
            .map_err(|e| e.to_string())?;
        assert_eq!(config, NajiaConfig::default());
        Ok(())
    });
}

#[test]
fn rejects_out_of_range_offset() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\nutc_offset_hours = 20\n")?;
        let err = NajiaConfig::from_figment(chain()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "general.utc_offset_hours"
        ));
        Ok(())
    });
}

#[test]
fn rejects_unknown_output_format() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\noutput = \"yaml\"\n")?;
        let err = NajiaConfig::from_figment(chain()).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
