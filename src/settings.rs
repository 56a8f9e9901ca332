// Runtime settings.
//
// Layered: built-in defaults, then an optional TOML file under the user
// config directory, then TAVUS_* environment variables. A missing file is
// fine; a malformed file or base URL falls back to defaults rather than
// aborting the wizard.

use std::path::PathBuf;

use config::{Config, Environment, File};
use log::warn;
use serde::Deserialize;
use url::Url;

use crate::api::conversations::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pre-fills the wizard's API key field.
    pub api_key: String,
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Config file location: ~/.config/tavus-wizard/config.toml
/// Respects XDG_CONFIG_HOME if set.
fn config_file_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|p| p.join("tavus-wizard").join("config.toml"))
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(config_file_path())
    }

    fn load_from(path: Option<PathBuf>) -> Self {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("TAVUS"));

        let settings = match builder
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
        {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    "[PHASE: config] Failed to load settings, using defaults: {}",
                    e
                );
                Settings::default()
            }
        };
        settings.normalized()
    }

    fn normalized(mut self) -> Self {
        if Url::parse(&self.api_base_url).is_err() {
            warn!(
                "[PHASE: config] Invalid api_base_url '{}', using {}",
                self.api_base_url, DEFAULT_BASE_URL
            );
            self.api_base_url = DEFAULT_BASE_URL.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_production_api() {
        let settings = Settings::default();
        assert!(settings.api_key.is_empty());
        assert_eq!(settings.api_base_url, "https://api.tavus.io");
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "api_key = \"tvk_file\"").unwrap();
        writeln!(f, "api_base_url = \"https://api.example.test\"").unwrap();

        let settings = Settings::load_from(Some(path));
        assert_eq!(settings.api_key, "tvk_file");
        assert_eq!(settings.api_base_url, "https://api.example.test");
    }

    #[test]
    fn malformed_base_url_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = \"not a url\"\n").unwrap();

        let settings = Settings::load_from(Some(path));
        assert_eq!(settings.api_base_url, "https://api.tavus.io");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert_eq!(settings.api_base_url, "https://api.tavus.io");
    }
}
