use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Default number of concurrent extraction jobs
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Site configuration compiled into the binary, always the lowest file layer
const SHIPPED_CONFIG: &str = include_str!("../../config/default.toml");

const ENV_PREFIX: &str = "WEATHER_EXTRACT";

/// Keys whose environment values are comma-separated lists
const ENV_LIST_KEYS: &[&str] = &["app.inmet.strategy.cities"];

/// Loaded application settings.
///
/// `sites` keeps every entry of the `app` table except `pool_size`. Entries
/// that are not tables are left in place and skipped by the orchestrator.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub pool_size: usize,
    pub sites: BTreeMap<String, Value>,
}

impl AppSettings {
    /// Load the shipped settings, then `config/default.toml`, the optional
    /// `config/{APP_ENVIRONMENT}.toml`, then `WEATHER_EXTRACT__*` variables.
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::load(Path::new("config"), &env, environment(None))
    }

    fn load(config_dir: &Path, env: &str, environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("app.pool_size", DEFAULT_POOL_SIZE as i64)?
            .add_source(File::from_str(SHIPPED_CONFIG, FileFormat::Toml))
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join(env)).required(false))
            .add_source(environment)
            .build()?;

        Self::from_config(config)
    }

    /// Load settings from a TOML document
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("app.pool_size", DEFAULT_POOL_SIZE as i64)?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let pool_size = config.get::<usize>("app.pool_size")?;
        if pool_size == 0 {
            return Err(ConfigError::Message(
                "app.pool_size must be at least 1".to_string(),
            ));
        }

        let mut sites: BTreeMap<String, Value> = config.get("app")?;
        sites.remove("pool_size");

        Ok(Self { pool_size, sites })
    }
}

/// Environment layer. Values are parsed into numbers and booleans where
/// possible so they can override typed site parameters.
fn environment(source: Option<Map<String, String>>) -> Environment {
    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",");

    ENV_LIST_KEYS
        .iter()
        .fold(environment, |env, key| env.with_list_parse_key(key))
        .source(source)
}
