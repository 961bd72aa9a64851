// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;
use pixel_surface::{SurfaceConfig, SurfaceError};

#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-surface")]
#[command(about = "Pixel grid display running Conway's Game of Life", long_about = None)]
pub struct Cli {
    /// JSON file with surface settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Drawable width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Drawable height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Board rows
    #[arg(long, default_value_t = 60)]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 80)]
    pub cols: usize,

    /// Initial generations per second
    #[arg(long)]
    pub fps: Option<f64>,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn surface_config(&self) -> Result<SurfaceConfig, SurfaceError> {
        let mut config = match &self.config {
            Some(path) => SurfaceConfig::from_json_file(path)?,
            None => SurfaceConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }

        config.size()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["pixel-surface"]);
        assert_eq!((cli.rows, cli.cols), (60, 80));
        assert_eq!(cli.surface_config().unwrap(), SurfaceConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["pixel-surface", "--width", "400", "--height", "300", "--fps", "20"]);
        let config = cli.surface_config().unwrap();
        assert_eq!((config.width, config.height), (400, 300));
        assert_eq!(config.fps, 20.0);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let cli = Cli::parse_from(["pixel-surface", "--width", "0"]);
        assert!(matches!(
            cli.surface_config(),
            Err(SurfaceError::InvalidDimensions { .. })
        ));
    }
}
