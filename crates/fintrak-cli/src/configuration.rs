use std::path::{Path, PathBuf};

use serde_aux::field_attributes::deserialize_bool_from_anything;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub storage: StorageSettings,
    pub tracing: TracingSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct StorageSettings {
    /// File the session record is kept in
    pub path: PathBuf,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TracingSettings {
    /// Used when `RUST_LOG` is not set
    pub default_filter: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub to_stdout: bool,
}

/// Reads `configuration/` in the current directory. Values not set there fall
/// back to built in defaults so the binary also works from anywhere else
pub fn get_configuration() -> anyhow::Result<Configuration> {
    let base_path = std::env::current_dir()?;

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    Ok(get_configuration_from(
        &base_path.join("configuration"),
        environment,
    )?)
}

pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Configuration, config::ConfigError> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .set_default("storage.path", "fintrak_session.json")?
        .set_default("tracing.default_filter", "info")?
        .set_default("tracing.to_stdout", false)?
        .add_source(
            config::File::from(configuration_directory.join("base.toml")).required(false),
        )
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_STORAGE__PATH=other.json` would set `Configuration.storage.path`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Configuration>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
