//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (cwd-derived)
//! 2. Global config: `$XDG_CONFIG_HOME/rskata/rskata.toml`
//! 3. Local config: `<solutions_dir>/.rskata.toml`
//! 4. Environment variables: `RSKATA_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Name of the templates directory used for the cwd fallback.
const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so overlays only replace what they name).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub solutions_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub editor: Option<String>,
}

/// Unified configuration for rskata.
///
/// Constructed once at startup and passed by reference to whatever
/// consumes it; there is no process-wide static configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding solution files and the catalog
    pub solutions_dir: PathBuf,
    /// Directory holding solution templates
    pub templates_dir: PathBuf,
    /// Editor command (default: $EDITOR or "vim")
    pub editor: String,
}

impl Default for Settings {
    fn default() -> Self {
        // Try $EDITOR, fall back to vim
        let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".into());

        // Everything else derives from the working directory
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            solutions_dir: cwd.join("solutions"),
            templates_dir: cwd.join(DEFAULT_TEMPLATES_DIR),
            editor,
        }
    }
}

/// Get the XDG config directory for rskata.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rskata").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rskata.toml"))
}

/// Get the path to the local config file in a solutions directory.
pub fn local_config_path(solutions_dir: &Path) -> PathBuf {
    solutions_dir.join(".rskata.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// The catalog file inside the solutions directory.
    pub fn catalog_path(&self) -> PathBuf {
        self.solutions_dir.join("catalog.toml")
    }

    /// The configured templates directory when it exists on disk,
    /// otherwise the absolute `templates/` path derived from the current
    /// working directory.
    pub fn resolved_templates_dir(&self) -> PathBuf {
        if self.templates_dir.is_dir() {
            return self.templates_dir.clone();
        }
        std::env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_TEMPLATES_DIR))
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATES_DIR))
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        self.solutions_dir = PathBuf::from(expand_env_vars(
            self.solutions_dir.to_string_lossy().as_ref(),
        ));
        self.templates_dir = PathBuf::from(expand_env_vars(
            self.templates_dir.to_string_lossy().as_ref(),
        ));
        // Editor may contain a path like ~/bin/myeditor
        self.editor = expand_env_vars(&self.editor);
    }

    /// Merge overlay config onto self (base): overlay wins where it
    /// specifies a value, otherwise the base value is kept.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            solutions_dir: overlay
                .solutions_dir
                .clone()
                .unwrap_or_else(|| self.solutions_dir.clone()),
            templates_dir: overlay
                .templates_dir
                .clone()
                .unwrap_or_else(|| self.templates_dir.clone()),
            editor: overlay
                .editor
                .clone()
                .unwrap_or_else(|| self.editor.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `solutions_dir` - Optional solutions directory for local config
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults (cwd-derived)
    /// 2. Global config: `$XDG_CONFIG_HOME/rskata/rskata.toml`
    /// 3. Local config: `<solutions_dir>/.rskata.toml`
    /// 4. Environment variables: `RSKATA_*` prefix (explicit override)
    pub fn load(solutions_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Merge global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Merge local config from the solutions directory
        if let Some(dir) = solutions_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply RSKATA_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder =
            Config::builder().add_source(Environment::with_prefix("RSKATA").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("solutions_dir") {
            settings.solutions_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("templates_dir") {
            settings.templates_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("editor") {
            settings.editor = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rskata configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rskata/rskata.toml
#   Local:  <solutions_dir>/.rskata.toml
#   Env:    RSKATA_* environment variables (explicit overrides)

# Directory holding solution files and catalog.toml
# solutions_dir = "~/kata/solutions"

# Directory holding solution templates; falls back to ./templates
# when the configured directory does not exist
# templates_dir = "~/kata/templates"

# Editor for opening solution files
# editor = "vim"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}`, and `~` for the home directory.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
