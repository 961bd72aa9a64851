use std::num::NonZeroU32;

use crate::error::{Result, SurfaceError};

/// Drawable area dimensions in physical pixels, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl SurfaceSize {
    /// Validated constructor; zero width or height is rejected
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(SurfaceError::InvalidDimensions { width, height }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Dimensions in the form pixel-buffer APIs expect
    pub fn non_zero(&self) -> (NonZeroU32, NonZeroU32) {
        (self.width, self.height)
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_size_with_dimensions() {
        let size = SurfaceSize::new(1920, 1080).unwrap();
        assert_eq!(size.width(), 1920);
        assert_eq!(size.height(), 1080);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            SurfaceSize::new(0, 300),
            Err(SurfaceError::InvalidDimensions { width: 0, height: 300 })
        ));
        assert!(SurfaceSize::new(400, 0).is_err());
    }

    #[test]
    fn test_pixel_count_calculation() {
        let size = SurfaceSize::new(640, 480).unwrap();
        assert_eq!(size.pixel_count(), 307200);
    }

    #[test]
    fn test_various_common_resolutions() {
        let resolutions = [
            (1, 1),
            (640, 480),
            (1280, 720),
            (3840, 2160),
        ];

        for (width, height) in resolutions {
            let size = SurfaceSize::new(width, height).unwrap();
            assert_eq!(size.pixel_count(), (width * height) as usize);
        }
    }
}
