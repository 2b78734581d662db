use crate::error::{RosterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
const DEFAULT_RESULTS: u32 = 12;

/// Where people are fetched from, stored in `config.json` in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Base URL of the people API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// How many people to request
    #[serde(default = "default_results")]
    pub results: u32,

    /// Nationality filter (e.g. "us", "ca")
    #[serde(default = "default_nationalities")]
    pub nationalities: Vec<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_results() -> u32 {
    DEFAULT_RESULTS
}

fn default_nationalities() -> Vec<String> {
    vec!["us".to_string(), "ca".to_string(), "au".to_string()]
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            results: default_results(),
            nationalities: default_nationalities(),
        }
    }
}

/// The keys `roster config` understands.
pub const CONFIG_KEYS: [&str; 3] = ["endpoint", "results", "nat"];

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Query parameters sent to the endpoint. `nat` is left out when no
    /// nationality is configured.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("results", self.results.to_string())];
        if !self.nationalities.is_empty() {
            params.push(("nat", self.nationalities.join(",")));
        }
        params
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "endpoint" => Ok(self.endpoint.clone()),
            "results" => Ok(self.results.to_string()),
            "nat" => Ok(self.nationalities.join(",")),
            other => Err(RosterError::Api(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => {
                if value.trim().is_empty() {
                    return Err(RosterError::Api("Endpoint cannot be empty".into()));
                }
                self.endpoint = value.trim().to_string();
            }
            "results" => {
                let results: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| RosterError::Api(format!("Invalid result count: {}", value)))?;
                if results == 0 {
                    return Err(RosterError::Api("Result count must be at least 1".into()));
                }
                self.results = results;
            }
            "nat" => {
                self.nationalities = value
                    .split(',')
                    .map(|n| n.trim().to_lowercase())
                    .filter(|n| !n.is_empty())
                    .collect();
            }
            other => return Err(RosterError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.results, 12);
        assert_eq!(config.endpoint, "https://randomuser.me/api/");
        assert_eq!(
            config.query_params(),
            [("results", "12".to_string()), ("nat", "us,ca,au".to_string())]
        );
    }

    #[test]
    fn test_query_params_without_nationalities() {
        let mut config = RosterConfig::default();
        config.set("nat", "").unwrap();
        assert_eq!(config.query_params(), [("results", "12".to_string())]);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = RosterConfig::default();
        config.set("results", " 30 ").unwrap();
        config.set("nat", "GB, fr,,").unwrap();
        config.set("endpoint", "http://localhost:8080/api/").unwrap();
        assert_eq!(config.get("results").unwrap(), "30");
        assert_eq!(config.get("nat").unwrap(), "gb,fr");
        assert_eq!(config.get("endpoint").unwrap(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = RosterConfig::default();
        assert!(matches!(config.set("results", "0"), Err(RosterError::Api(_))));
        assert!(matches!(config.set("results", "many"), Err(RosterError::Api(_))));
        assert!(matches!(config.set("endpoint", " "), Err(RosterError::Api(_))));
        assert!(matches!(config.set("colour", "red"), Err(RosterError::Api(_))));
        assert!(matches!(config.get("colour"), Err(RosterError::Api(_))));
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = RosterConfig::default();
        config.set("results", "5").unwrap();
        config.save(&dir).unwrap();

        let loaded = RosterConfig::load(&dir).unwrap();
        assert_eq!(loaded.results, 5);
        assert_eq!(loaded.nationalities, default_nationalities());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"results": 3}"#).unwrap();
        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.results, 3);
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
    }
}
