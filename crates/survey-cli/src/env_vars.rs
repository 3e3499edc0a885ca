use std::env;

use anyhow::{anyhow, Result};

use crate::config::Settings;

pub const ENV_API_URL: &str = "SURVEY_CLI_API_URL";
pub const ENV_LOGIN_ROUTE: &str = "SURVEY_CLI_LOGIN_ROUTE";
pub const ENV_PROXY: &str = "SURVEY_CLI_PROXY";
pub const ENV_ACCEPT_INVALID_CERTS: &str = "SURVEY_CLI_ACCEPT_INVALID_CERTS";

impl Settings {
    /// Override settings with any `SURVEY_CLI_*` variables that are set
    pub fn from_env(mut self) -> Result<Self> {
        if let Ok(api_url) = env::var(ENV_API_URL) {
            self.api_url = api_url;
        }

        if let Ok(login_route) = env::var(ENV_LOGIN_ROUTE) {
            self.login_route = login_route;
        }

        if let Ok(proxy) = env::var(ENV_PROXY) {
            self.proxy = (!proxy.is_empty()).then_some(proxy);
        }

        if let Ok(accept) = env::var(ENV_ACCEPT_INVALID_CERTS) {
            self.accept_invalid_certs = accept
                .parse()
                .map_err(|_| anyhow!("{} must be true or false", ENV_ACCEPT_INVALID_CERTS))?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so no other test observes the variables
    #[test]
    fn test_env_overrides() {
        env::set_var(ENV_API_URL, "http://10.0.0.5:3030");
        env::set_var(ENV_PROXY, "");
        env::set_var(ENV_ACCEPT_INVALID_CERTS, "true");

        let settings = Settings {
            proxy: Some("http://proxy:8080".to_string()),
            ..Default::default()
        }
        .from_env()
        .expect("valid env");

        assert_eq!(settings.api_url, "http://10.0.0.5:3030");
        assert_eq!(settings.login_route, "/login");
        assert_eq!(settings.proxy, None);
        assert!(settings.accept_invalid_certs);

        env::set_var(ENV_ACCEPT_INVALID_CERTS, "maybe");
        assert!(Settings::default().from_env().is_err());

        env::remove_var(ENV_API_URL);
        env::remove_var(ENV_PROXY);
        env::remove_var(ENV_ACCEPT_INVALID_CERTS);
    }
}
