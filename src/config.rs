//! Configuration management for the backend URL, admin account, and theme.

use std::collections::HashMap;

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

pub const DEFAULT_CONFIG_ID: &str = "default";
/// Base URL of the coaching backend.
pub const DEFAULT_API_URL: &str = "https://interview-coach-api.example.com";
/// Account the backend treats as the administrator.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@interviewcoach.com";

/// Application configuration persisted between runs.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub id: String,
    pub api_url: String,
    pub admin_email: String,
    pub theme: String,
}

impl Config {
    /// Creates a config with compile-time defaults.
    pub fn new() -> Self {
        Self {
            id: DEFAULT_CONFIG_ID.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            theme: Theme::Blue.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Persists and retrieves configurations from a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path to the config file
    path: String,
    #[builder(setter(skip))]
    configs: HashMap<String, Config>,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        let f: Result<std::fs::File, std::io::Error> = std::fs::File::open(&manager.path);

        match f {
            Ok(file) => {
                manager.configs = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!("Failed to parse config file, using defaults: {}", e);
                        let default_conf = Config::new();
                        let mut configs: HashMap<String, Config> = HashMap::new();
                        configs.insert(default_conf.id.clone(), default_conf);
                        configs
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                let default_conf = Config::new();
                let mut configs: HashMap<String, Config> = HashMap::new();
                configs.insert(default_conf.id.clone(), default_conf);
                manager.configs = configs;
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Retrieves a config by its unique ID.
    pub fn get_by_id(&self, id: &str) -> Option<Config> {
        let c = self.configs.get(id);
        c.cloned()
    }

    /// Updates an existing config and persists it to disk.
    pub fn update_config(&mut self, new_config: Config) -> Result<()> {
        self.configs.insert(new_config.id.clone(), new_config);
        self.write()
    }

    fn write(&mut self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.configs)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
