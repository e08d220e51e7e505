use crate::bidi::BaseDirection;
use crate::error::{Result, RtlkitError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIRNAME: &str = ".rtlkit";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TEMPLATES_DIR: &str = "templates/bodies";
const DEFAULT_TEMPLATE_PATTERN: &str = "*.html";
const DEFAULT_PANEL_BORDER: &str = "green";

/// Configuration for rtlkit, stored in .rtlkit/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RtlkitConfig {
    /// Directory holding the email body templates, relative to the working directory
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Glob matched against file names inside `templates_dir`
    #[serde(default = "default_template_pattern")]
    pub template_pattern: String,

    /// Paragraph direction for the demo and `reorder`
    #[serde(default)]
    pub base_direction: BaseDirection,

    /// Border style of the demo panel, as a dotted console style ("green", "cyan.bold")
    #[serde(default = "default_panel_border")]
    pub panel_border: String,
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATES_DIR)
}

fn default_template_pattern() -> String {
    DEFAULT_TEMPLATE_PATTERN.to_string()
}

fn default_panel_border() -> String {
    DEFAULT_PANEL_BORDER.to_string()
}

impl Default for RtlkitConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            template_pattern: default_template_pattern(),
            base_direction: BaseDirection::default(),
            panel_border: default_panel_border(),
        }
    }
}

impl RtlkitConfig {
    /// Path of the config file inside `config_dir`.
    pub fn path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::path(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RtlkitError::Io)?;
        let config: RtlkitConfig =
            serde_json::from_str(&content).map_err(RtlkitError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RtlkitError::Io)?;
        }

        let config_path = Self::path(config_dir);
        let content = serde_json::to_string_pretty(self).map_err(RtlkitError::Serialization)?;
        fs::write(config_path, content).map_err(RtlkitError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.template_pattern.trim().is_empty() {
            return Err(RtlkitError::Config(
                "template_pattern cannot be empty".to_string(),
            ));
        }
        if self.template_pattern.contains('/') {
            return Err(RtlkitError::Config(format!(
                "template_pattern matches file names only, got {}",
                self.template_pattern
            )));
        }
        Ok(())
    }
}
