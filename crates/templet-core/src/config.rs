//! Editor configuration.

use crate::layout::{LayoutResult, ZoomFactor};
use crate::surface::LANDSCAPE_SIZE;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables of the editing surface and its transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Surface size in landscape orientation.
    pub landscape_size: Size,
    /// Persisted geometry is this many times the editor geometry.
    pub persisted_scale: f64,
    /// Surface multiplier while previewing.
    pub preview_zoom: f64,
    /// Preview redraw rate in frames per second.
    pub preview_fps: u32,
    /// Where file-backed template storage lives; platform default if unset.
    pub storage_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            landscape_size: LANDSCAPE_SIZE,
            persisted_scale: ZoomFactor::PERSISTED.value(),
            preview_zoom: ZoomFactor::PREVIEW.value(),
            preview_fps: 30,
            storage_dir: None,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded editor config from {}", path.display());
        Self::from_json(&json)
    }

    pub fn persisted_factor(&self) -> LayoutResult<ZoomFactor> {
        ZoomFactor::new(self.persisted_scale)
    }

    pub fn preview_factor(&self) -> LayoutResult<ZoomFactor> {
        ZoomFactor::new(self.preview_zoom)
    }

    /// Delay between preview frames.
    pub fn preview_interval(&self) -> Duration {
        Duration::from_secs(1) / self.preview_fps.max(1)
    }
}
