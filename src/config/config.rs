use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Page scanned for card images.
pub const TARGET_URL: &str = "https://www.moneyhero.com.hk/zh/credit-card/best-deal";

/// Sent on every request to get past trivial bot filtering.
pub const USER_AGENT: &str = "Mozilla/5.0";

pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout. `None` waits forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(Path::new(SETTINGS_FILE))
}

/// Layers an optional TOML file under `APP_*` environment variables.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    build_config(path, environment())
}

/// `APP_HTTP__TIMEOUT_SECS` maps to `http.timeout_secs`.
fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_config(path: &Path, env: Environment) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(env)
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
