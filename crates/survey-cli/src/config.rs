use std::path::Path;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use survey_client::session::DEFAULT_LOGIN_ROUTE;
use survey_client::DEFAULT_BASE_URL;

/// Name of the config file looked up in the work dir
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend origin, endpoints are appended to it as-is
    pub api_url: String,
    /// Route reported when the session ends
    pub login_route: String,
    /// Proxy every request goes through
    pub proxy: Option<String>,
    /// Skip TLS certificate validation
    pub accept_invalid_certs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            proxy: None,
            accept_invalid_certs: false,
        }
    }
}

impl Settings {
    /// Defaults overridden by a config file
    ///
    /// An explicit `config_file` must exist; the work dir's `config.toml` is
    /// optional.
    pub fn load(work_dir: &Path, config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path.to_path_buf()),
            None => File::from(work_dir.join(CONFIG_FILE_NAME)).required(false),
        };

        let config: Config = Config::builder()
            // use defaults
            .add_source(Config::try_from(&Self::default())?)
            // override with file contents
            .add_source(file)
            .build()?;

        config.try_deserialize()
    }
}
