//! Swatch configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use swatch_theme::{Mode, ResolveOptions};

pub const CONFIG_FILE: &str = "swatch.toml";

/// Top-level Swatch configuration (swatch.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SwatchConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the working theme comes from
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme JSON file (relative to the config file)
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Preset used when no theme file is given
    #[serde(default)]
    pub preset: Option<String>,
}

/// Resolution defaults
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ResolveConfig {
    #[serde(default)]
    pub mode: Mode,
    /// Treat a scale on a foundation reference as unresolvable
    #[serde(default)]
    pub strict: bool,
}

impl ResolveConfig {
    pub fn options(&self, strict_flag: bool) -> ResolveOptions {
        if self.strict || strict_flag {
            ResolveOptions::strict()
        } else {
            ResolveOptions::lenient()
        }
    }
}

/// Output format of `swatch resolve`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Css,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Prefix of generated CSS custom properties
    #[serde(default = "default_css_prefix")]
    pub css_prefix: String,
}

fn default_css_prefix() -> String {
    "swatch".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            css_prefix: default_css_prefix(),
        }
    }
}

impl SwatchConfig {
    /// Load configuration from a directory (looks for swatch.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!("No {} found at {}", CONFIG_FILE, config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        // Theme paths are relative to the config file
        if let (Some(theme), Some(dir)) = (config.theme.path.as_mut(), config_path.parent()) {
            if theme.is_relative() {
                *theme = dir.join(&*theme);
            }
        }

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Load an explicit config file, or `swatch.toml` in the current directory
    /// if present, or fall back to defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_dir(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load_from_dir(Path::new(".")),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
