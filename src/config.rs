use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Styling and caption options for the rewrite. Every default reproduces
/// the output Plotly's own export would have gotten from the original
/// combined trace, so running with no config file is the common case.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Options {
    #[serde(default)]
    pub marker: MarkerStyle,
    #[serde(default)]
    pub label: LabelStyle,
    #[serde(default)]
    pub captions: Captions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStyle {
    #[serde(default = "default_marker_size")]
    pub size: u32,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_line_color")]
    pub line_color: String,
    #[serde(default = "default_line_width")]
    pub line_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelStyle {
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_position")]
    pub position: String,
}

/// The dropdown caption rename: any annotation whose text equals `from`
/// is relabeled to `to`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Captions {
    #[serde(default = "default_caption_from")]
    pub from: String,
    #[serde(default = "default_caption_to")]
    pub to: String,
}

fn default_marker_size() -> u32 {
    40
}

fn default_opacity() -> f64 {
    0.75
}

fn default_line_color() -> String {
    "black".to_string()
}

fn default_line_width() -> u32 {
    2
}

fn default_font_color() -> String {
    "#ffffff".to_string()
}

fn default_font_size() -> u32 {
    10
}

fn default_position() -> String {
    "top center".to_string()
}

fn default_caption_from() -> String {
    "Show Edges for:".to_string()
}

fn default_caption_to() -> String {
    "Show Node:".to_string()
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: default_marker_size(),
            opacity: default_opacity(),
            line_color: default_line_color(),
            line_width: default_line_width(),
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_color: default_font_color(),
            font_size: default_font_size(),
            position: default_position(),
        }
    }
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            from: default_caption_from(),
            to: default_caption_to(),
        }
    }
}

impl Options {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("plotsplit");
        Ok(config_dir.join("config.toml"))
    }

    /// Load options from the config file, falling back to defaults when no
    /// file exists.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

        let options: Options = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", config_path.display()))?;

        Ok(options)
    }
}
