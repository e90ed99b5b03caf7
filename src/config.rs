//! Configuration for numshow
//!
//! Configuration is loaded in order of precedence:
//! 1. CLI flags (highest priority, applied in main)
//! 2. Environment variables (`NUMSHOW_NUMBER`, `NUMSHOW_THEME`)
//! 3. Config file (~/.config/numshow/config.toml)
//! 4. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number to display on startup
    pub num_to_show: i64,

    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_to_show: 3,
            theme: "auto".to_string(),
            use_theme_background: true,
        }
    }
}

/// Config file structure (all fields optional so partial files work)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub num_to_show: Option<i64>,
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
}

impl Config {
    /// Path to the config file (~/.config/numshow/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("numshow").join("config.toml"))
    }

    /// Load configuration: defaults, then config file, then environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                match toml::from_str::<FileConfig>(&contents) {
                    Ok(file) => config.apply_file(file),
                    Err(e) => {
                        eprintln!("Warning: ignoring malformed config {}: {}", path.display(), e)
                    }
                }
            }
        }

        config.apply_env();
        config
    }

    /// Overlay values from a parsed config file
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(n) = file.num_to_show {
            self.num_to_show = n;
        }
        if let Some(theme) = file.theme {
            self.theme = theme;
        }
        if let Some(bg) = file.use_theme_background {
            self.use_theme_background = bg;
        }
    }

    /// Overlay values from environment variables
    fn apply_env(&mut self) {
        if let Ok(raw) = std::env::var("NUMSHOW_NUMBER") {
            match raw.parse::<i64>() {
                Ok(n) => self.num_to_show = n,
                Err(_) => eprintln!("Warning: NUMSHOW_NUMBER={raw} is not an integer, ignoring"),
            }
        }
        if let Ok(theme) = std::env::var("NUMSHOW_THEME") {
            self.theme = theme;
        }
    }

    /// Serialize the effective configuration as TOML
    pub fn to_toml(&self) -> String {
        format!(
            "# numshow configuration\n\
             # Generated by numshow v{}\n\
             \n\
             # Number to display on startup\n\
             num_to_show = {}\n\
             \n\
             # Theme: \"auto\", \"dracula\", \"nord\", \"gruvbox\"\n\
             theme = \"{}\"\n\
             \n\
             # Use the theme's background color instead of the terminal's\n\
             use_theme_background = {}\n",
            VERSION, self.num_to_show, self.theme, self.use_theme_background
        )
    }

    /// Write the default configuration to the config file, creating directories
    pub fn write_default() -> anyhow::Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::default().to_toml())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that serialized config can be parsed back.
    #[test]
    fn default_config_round_trips() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: FileConfig = toml::from_str(&toml_str).expect("default config should parse");
        assert_eq!(parsed.num_to_show, Some(3));
        assert_eq!(parsed.theme.as_deref(), Some("auto"));
        assert_eq!(parsed.use_theme_background, Some(true));
    }

    #[test]
    fn file_values_override_defaults() {
        let mut config = Config::default();
        let file: FileConfig = toml::from_str("num_to_show = 42\ntheme = \"nord\"").unwrap();

        config.apply_file(file);

        assert_eq!(config.num_to_show, 42);
        assert_eq!(config.theme, "nord");
        // Untouched fields keep their defaults
        assert!(config.use_theme_background);
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let mut config = Config::default();
        config.apply_file(FileConfig::default());
        assert_eq!(config, Config::default());
    }
}
