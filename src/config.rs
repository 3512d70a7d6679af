//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API key configuration.
    #[serde(default)]
    pub keys: KeysConfig,

    /// Default option values (used when CLI flags are omitted).
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// API key configuration.
#[derive(Debug, Default, Deserialize)]
pub struct KeysConfig {
    /// Gemini API key.
    pub gemini: Option<String>,
}

/// Default option values from the config file.
#[derive(Debug, Deserialize)]
pub struct DefaultsConfig {
    /// Default model name.
    pub model: String,
    /// Default style label.
    pub style: String,
    /// Default aspect ratio.
    pub aspect_ratio: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            style: "Realistic".to_string(),
            aspect_ratio: "1:1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the Gemini API key, preferring the environment variable.
    #[must_use]
    pub fn gemini_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY").ok().or_else(|| self.keys.gemini.clone())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `LUMINA_CONFIG` environment variable
/// 3. `~/.config/lumina/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("LUMINA_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/lumina/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/lumina/config.toml")
    } else {
        PathBuf::from("lumina.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.keys.gemini.is_none());
        assert_eq!(config.defaults.model, DEFAULT_MODEL);
        assert_eq!(config.defaults.style, "Realistic");
        assert_eq!(config.defaults.aspect_ratio, "1:1");
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.defaults.model, DEFAULT_MODEL);
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("lumina_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[keys]
gemini = "test-gemini-key"

[defaults]
model = "gemini-3-pro-image-preview"
style = "Anime"
aspect_ratio = "16:9"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.keys.gemini.as_deref(), Some("test-gemini-key"));
        assert_eq!(config.defaults.model, "gemini-3-pro-image-preview");
        assert_eq!(config.defaults.style, "Anime");
        assert_eq!(config.defaults.aspect_ratio, "16:9");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("lumina_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn gemini_key_from_file() {
        let config = Config {
            keys: KeysConfig { gemini: Some("from-file".into()) },
            ..Config::default()
        };

        // Without env var, returns file value
        std::env::remove_var("GEMINI_API_KEY");
        assert_eq!(config.gemini_key().as_deref(), Some("from-file"));
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
