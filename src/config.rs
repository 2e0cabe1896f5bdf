use std::env;
use std::path::PathBuf;

pub const DEFAULT_SECRETS_DIR: &str = "/var/openfaas/secrets";
pub const DEFAULT_MERAKI_API_KEY_SECRET: &str = "afarina-meraki-api-key";
pub const DEFAULT_MERAKI_BASE_URL: &str = "https://api.meraki.com/api/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub secrets_dir: PathBuf,
    pub meraki_api_key_secret: String,
    pub meraki_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secrets_dir: PathBuf::from(DEFAULT_SECRETS_DIR),
            meraki_api_key_secret: DEFAULT_MERAKI_API_KEY_SECRET.to_string(),
            meraki_base_url: DEFAULT_MERAKI_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Config::default();
        Config {
            secrets_dir: get("SECRETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.secrets_dir),
            meraki_api_key_secret: get("MERAKI_API_KEY_SECRET")
                .unwrap_or(defaults.meraki_api_key_secret),
            meraki_base_url: get("MERAKI_BASE_URL").unwrap_or(defaults.meraki_base_url),
        }
    }

    pub fn meraki_api_key_path(&self) -> PathBuf {
        self.secrets_dir.join(&self.meraki_api_key_secret)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(
            config.meraki_api_key_path(),
            PathBuf::from("/var/openfaas/secrets/afarina-meraki-api-key")
        );
    }

    #[test]
    fn test_overrides_and_empty_values() {
        let vars: HashMap<&str, &str> = vec![
            ("SECRETS_DIR", "/run/secrets"),
            ("MERAKI_API_KEY_SECRET", "meraki"),
            ("MERAKI_BASE_URL", ""),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.meraki_api_key_path(), PathBuf::from("/run/secrets/meraki"));
        assert_eq!(config.meraki_base_url, "https://api.meraki.com/api/v1");
    }
}
