use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::RenderOptions;
use crate::stroke::StrokeMode;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "launcher-icons.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Root of the app project the icon paths are relative to
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,
}

fn default_base_path() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            base_path: default_base_path(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RenderConfig {
    #[serde(default)]
    pub stroke: StrokeMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Per-user config location, e.g. `~/.config/launcher-icons/config.yaml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("launcher-icons").join("config.yaml"))
    }

    /// Loads `explicit` if given (it must exist), otherwise the first of
    /// `./launcher-icons.yaml` and the per-user file that exists, otherwise
    /// the defaults. Returns the path that was read, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)).chain(Self::user_config_path());
        for candidate in candidates {
            if candidate.exists() {
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        Ok((Config::default(), None))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output.base_path.as_os_str().is_empty() {
            bail!("output.base_path cannot be empty");
        }

        Ok(())
    }

    /// Writes the config as YAML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .context("Failed to create config directory")?;
        }

        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs::write(path, yaml)
            .context("Failed to write config file")?;

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            stroke_mode: self.render.stroke,
        }
    }
}
