use config::{Config, Environment, File, FileFormat, Map, Source};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    build_configuration(File::new("configuration.yaml", FileFormat::Yaml), None)
}

/// Layers `APP_`-prefixed variables over `file`.
///
/// `env` replaces the process environment when given.
pub fn build_configuration(
    file: impl Source + Send + Sync + 'static,
    env: Option<Map<String, String>>,
) -> Result<Settings, config::ConfigError> {
    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("_")
                .source(env),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
