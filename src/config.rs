use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::driver::NormalPolicy;
use crate::math::Rgb;
use crate::params::Parameters;
use crate::scene::SceneConfig;

/// Startup settings, layered as defaults < JSON file < command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Fixed window size; the window starts maximized when either is unset
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub color: Rgb,
    pub parameters: Parameters,
    pub normals: NormalPolicy,
    pub show_ui: bool,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            color: Rgb::default(),
            parameters: Parameters::default(),
            normals: NormalPolicy::default(),
            show_ui: true,
        }
    }
}

impl WaveConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_json(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.parameters = config.parameters.validated()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: WaveConfig = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Build the effective config for a command line: its `--config` file
    /// (if any) with the flags applied on top.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.merge_cli(cli)?;
        Ok(config)
    }

    /// Apply explicitly given flags. Parameter flags must be in range.
    pub fn merge_cli(&mut self, cli: &Cli) -> Result<()> {
        if cli.no_ui {
            self.show_ui = false;
        }
        if cli.width.is_some() {
            self.width = cli.width;
        }
        if cli.height.is_some() {
            self.height = cli.height;
        }
        if let Some(color) = cli.color {
            self.color = color;
        }
        if let Some(normals) = cli.normals {
            self.normals = normals;
        }

        let params = &mut self.parameters;
        let merged = Parameters {
            frequency: cli.frequency.unwrap_or(params.frequency),
            speed: cli.speed.unwrap_or(params.speed),
            amount: cli.amount.unwrap_or(params.amount),
        };
        *params = merged.validated().context("Invalid wave parameter")?;
        Ok(())
    }

    /// Explicit window size, if both dimensions are given
    pub fn window_size(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
            _ => None,
        }
    }

    pub fn scene(&self) -> SceneConfig {
        SceneConfig {
            color: self.color,
            ..SceneConfig::default()
        }
    }
}
