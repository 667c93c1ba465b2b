//! Configuration loader

use config::{Config, Environment, File};
use rust_decimal::Decimal;
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{QuoteError, Result};
use crate::strategy::BaseKind;

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with DELIVERY__)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    // Pick up a .env file if present
    dotenvy::dotenv().ok();

    load_layered(config_path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix("DELIVERY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Layer an optional TOML file under the given environment source
fn load_layered(config_path: Option<&str>, env: Environment) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(env);

    let config = builder
        .build()
        .map_err(|e| QuoteError::Configuration(e.to_string()))?;

    let app: AppConfig = config
        .try_deserialize()
        .map_err(|e| QuoteError::Configuration(e.to_string()))?;

    validate(&app)?;
    Ok(app)
}

/// Load configuration from a TOML string (no file or environment sources)
pub fn load_from_str(toml: &str) -> Result<AppConfig> {
    let config = Config::builder()
        .add_source(File::from_str(toml, config::FileFormat::Toml))
        .build()
        .map_err(|e| QuoteError::Configuration(e.to_string()))?;

    let app: AppConfig = config
        .try_deserialize()
        .map_err(|e| QuoteError::Configuration(e.to_string()))?;

    validate(&app)?;
    Ok(app)
}

fn validate(app: &AppConfig) -> Result<()> {
    if BaseKind::lookup(&app.defaults.base_type).is_none() {
        return Err(QuoteError::Configuration(format!(
            "defaults.base_type must be one of {:?}, got {:?}",
            BaseKind::names(),
            app.defaults.base_type
        )));
    }
    if app.defaults.distance < Decimal::ZERO {
        return Err(QuoteError::Configuration(format!(
            "defaults.distance must be non-negative, got {}",
            app.defaults.distance
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_from_empty_source() {
        let app = load_from_str("").unwrap();
        assert_eq!(app, AppConfig::default());
        assert_eq!(app.settings.log_level, "info");
        assert_eq!(app.defaults.base_type, "courier");
    }

    #[test]
    fn test_load_from_toml() {
        let app = load_from_str(
            r#"
            [settings]
            log_level = "debug"
            pretty_output = false

            [defaults]
            base_type = "postal"
            distance = 80
            "#,
        )
        .unwrap();
        assert_eq!(app.settings.log_level, "debug");
        assert!(!app.settings.pretty_output);
        assert_eq!(app.defaults.base_type, "postal");
        assert_eq!(app.defaults.distance, dec!(80));
    }

    #[test]
    fn test_unknown_default_base_rejected() {
        let err = load_from_str("[defaults]\nbase_type = \"drone\"\n").unwrap_err();
        assert!(matches!(err, QuoteError::Configuration(_)));
    }

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        env_source().source(Some(map))
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let app = load_layered(Some("/nonexistent/delivery.toml"), env_with(&[])).unwrap();
        assert_eq!(app, AppConfig::default());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let env = env_with(&[
            ("DELIVERY__DEFAULTS__BASE_TYPE", "postal"),
            ("DELIVERY__SETTINGS__LOG_LEVEL", "debug"),
            ("OTHER__DEFAULTS__BASE_TYPE", "drone"),
        ]);
        let app = load_layered(None, env).unwrap();
        assert_eq!(app.defaults.base_type, "postal");
        assert_eq!(app.settings.log_level, "debug");
    }

    #[test]
    fn test_environment_value_is_validated() {
        let env = env_with(&[("DELIVERY__DEFAULTS__BASE_TYPE", "teleport")]);
        let err = load_layered(None, env).unwrap_err();
        assert!(matches!(err, QuoteError::Configuration(_)));
    }
}
