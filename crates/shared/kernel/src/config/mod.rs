use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Error raised while loading configuration.
#[recruit_derive::recruit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Prefix of environment overrides (`RECRUIT__UPSTREAM__BASE_URL`).
pub const ENV_PREFIX: &str = "RECRUIT";

/// Loads `T` from a config file overlaid with environment variables.
///
/// 1. **Base file**: `path`, or `server` in the working directory. The format is
///    picked from the extension (`toml`, `yaml`, `json`, ...); with no extension the
///    loader probes the supported ones.
/// 2. **Environment**: variables prefixed with `RECRUIT__`; nested keys are separated
///    by `__` (`RECRUIT__SERVER__PORT=8080` sets `server.port`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does not
/// match the shape of `T`.
///
/// # Example
/// ```rust
/// use recruit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", path.display());

    Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("registration.interests")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
