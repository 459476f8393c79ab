use anyhow::Error;
use serde::Deserialize;
use stack_string::StackString;
use std::{
    ops::Deref,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Configuration data
#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
pub struct ConfigInner {
    #[serde(default = "default_host")]
    pub host: StackString,
    #[serde(default = "default_port")]
    pub port: u32,
    /// forecast fixture (json)
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// page title
    #[serde(default = "default_title")]
    pub title: StackString,
}
fn default_host() -> StackString {
    "0.0.0.0".into()
}
fn default_port() -> u32 {
    3097
}
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| "./".into())
        .join("weather_dashboard_rust")
}
fn default_data_path() -> PathBuf {
    config_dir().join("forecast.json")
}
fn default_title() -> StackString {
    "Weather Dashboard".into()
}

/// Configuration struct
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull in configuration data using `[dotenvy](https://crates.io/dotenvy)`.
    ///
    /// If a .env file exists in the current directory, pull in any ENV
    /// variables in it.
    ///
    /// Next, if a config file exists in the current directory named config.env,
    /// or if a config file exists at
    /// `${HOME}/.config/weather_dashboard_rust/config.env`, set ENV variables
    /// using it.
    ///
    /// Config files should have lines of the following form:
    /// `DATA_PATH=/path/to/forecast.json`
    ///
    /// # Errors
    /// Return error if deserializing environment variables fails
    pub fn init_config(config_path: Option<&Path>) -> Result<Self, Error> {
        let fname = config_path.unwrap_or_else(|| Path::new("config.env"));
        let default_fname = config_dir().join("config.env");

        let env_file = if fname.exists() {
            fname
        } else {
            &default_fname
        };

        dotenvy::dotenv().ok();

        if env_file.exists() {
            dotenvy::from_path(env_file).ok();
        }

        let conf: ConfigInner = envy::from_env()?;

        Ok(Self(Arc::new(conf)))
    }

    #[must_use]
    pub fn from_inner(inner: ConfigInner) -> Self {
        Self(Arc::new(inner))
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
