use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::core::present_chain::DEFAULT_BUFFER_COUNT;
use crate::core::surface_size::SurfaceSize;
use crate::error::Result;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FPS: f64 = 10.0;

/// Window and presentation settings, loadable from JSON
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Length of the presentation buffer ring
    pub buffer_count: usize,
    pub background: Color,
    /// Initial owner update rate, frames per second
    pub fps: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "Pixel Surface".to_string(),
            buffer_count: DEFAULT_BUFFER_COUNT,
            background: Color::BLACK,
            fps: DEFAULT_FPS,
        }
    }
}

impl SurfaceConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading surface config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validated drawable size
    pub fn size(&self) -> Result<SurfaceSize> {
        SurfaceSize::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurfaceError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SurfaceConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.buffer_count, 4);
        assert_eq!(config.background, Color::BLACK);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SurfaceConfig::from_json_str(r#"{ "width": 400, "background": 16711680 }"#).unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.background, Color::RED);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            SurfaceConfig::from_json_str("{ width: }"),
            Err(SurfaceError::Config(_))
        ));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            SurfaceConfig::with_size(0, 10).size(),
            Err(SurfaceError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "life", "fps": 30.0 }}"#).unwrap();

        let config = SurfaceConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.title, "life");
        assert_eq!(config.fps, 30.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            SurfaceConfig::from_json_file("/definitely/not/here.json"),
            Err(SurfaceError::Io(_))
        ));
    }
}
