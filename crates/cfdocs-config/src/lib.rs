//! Configuration management for cfdocs.
//!
//! Parses `cfdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `navigation.source`
//! - `corpora.source`

mod expand;

use std::path::{Path, PathBuf};

use cfdocs_corpora::{SortDirection, SortKey};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation feed path.
    pub nav_source: Option<PathBuf>,
    /// Override corpus dataset path.
    pub corpora_source: Option<PathBuf>,
    /// Override number of sections open by default.
    pub default_open_sections: Option<usize>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "cfdocs.toml";

/// Default navigation feed filename, relative to the config directory.
const DEFAULT_NAV_SOURCE: &str = "navigation.json";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation configuration (paths are relative strings from TOML).
    navigation: NavigationConfigRaw,
    /// Corpus table configuration (paths are relative strings from TOML).
    corpora: CorporaConfigRaw,

    /// Resolved navigation configuration (set after loading).
    #[serde(skip)]
    pub navigation_resolved: NavigationConfig,
    /// Resolved corpus table configuration (set after loading).
    #[serde(skip)]
    pub corpora_resolved: CorporaConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw navigation configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NavigationConfigRaw {
    source: Option<String>,
    default_open_sections: Option<usize>,
    indent_step: Option<u32>,
    indent_base: Option<u32>,
}

/// Resolved sidebar configuration with an absolute feed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Navigation feed JSON file.
    pub source: PathBuf,
    /// Number of leading sections open by default.
    pub default_open_sections: usize,
    /// Indentation per nesting level, in pixels.
    pub indent_step: u32,
    /// Indentation of top-level items, in pixels.
    pub indent_base: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_NAV_SOURCE),
            default_open_sections: 3,
            indent_step: 12,
            indent_base: 8,
        }
    }
}

/// Raw corpus table configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CorporaConfigRaw {
    source: Option<String>,
    sort_key: Option<SortKey>,
    sort_direction: Option<SortDirection>,
}

/// Resolved corpus table configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorporaConfig {
    /// Dataset file (`.json`, `.yaml` or `.yml`); the built-in catalog when `None`.
    pub source: Option<PathBuf>,
    /// Initial sort column.
    pub sort_key: SortKey,
    /// Initial sort direction.
    pub sort_direction: SortDirection,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`navigation.source`").
        field: String,
        /// Error message (e.g., "${`NAV_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cfdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.nav_source {
            self.navigation_resolved.source.clone_from(source);
        }
        if let Some(source) = &settings.corpora_source {
            self.corpora_resolved.source = Some(source.clone());
        }
        if let Some(count) = settings.default_open_sections {
            self.navigation_resolved.default_open_sections = count;
        }
    }

    /// Search for a config file in `start` and its parents.
    #[must_use]
    pub fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        Self {
            navigation: NavigationConfigRaw::default(),
            corpora: CorporaConfigRaw::default(),
            navigation_resolved: NavigationConfig {
                source: base.join(DEFAULT_NAV_SOURCE),
                ..NavigationConfig::default()
            },
            corpora_resolved: CorporaConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation_resolved.indent_step == 0 {
            return Err(ConfigError::Validation(
                "navigation.indent_step must be greater than 0".to_owned(),
            ));
        }
        if self.navigation_resolved.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "navigation.source cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in path strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source) = self.navigation.source {
            self.navigation.source = Some(expand::expand_env(source, "navigation.source")?);
        }
        if let Some(ref source) = self.corpora.source {
            self.corpora.source = Some(expand::expand_env(source, "corpora.source")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory and fill defaults.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = NavigationConfig::default();
        let nav = &self.navigation;

        self.navigation_resolved = NavigationConfig {
            source: config_dir.join(nav.source.as_deref().unwrap_or(DEFAULT_NAV_SOURCE)),
            default_open_sections: nav
                .default_open_sections
                .unwrap_or(defaults.default_open_sections),
            indent_step: nav.indent_step.unwrap_or(defaults.indent_step),
            indent_base: nav.indent_base.unwrap_or(defaults.indent_base),
        };

        self.corpora_resolved = CorporaConfig {
            source: self.corpora.source.as_deref().map(|s| config_dir.join(s)),
            sort_key: self.corpora.sort_key.unwrap_or_default(),
            sort_direction: self.corpora.sort_direction.unwrap_or_default(),
        };
    }
}
