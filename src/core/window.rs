use crate::error::Result;

use super::surface_size::SurfaceSize;

/// Native window abstraction - presents finished frames and owns the title
pub trait WindowBackend {
    /// Current drawable area in physical pixels
    fn drawable_size(&self) -> SurfaceSize;

    /// Show `pixels` (row-major, `size.width()` per row) on screen
    fn present(&mut self, pixels: &[u32], size: SurfaceSize) -> Result<()>;

    fn set_title(&mut self, title: &str);

    /// Ask the toolkit for another redraw
    fn request_redraw(&self);
}
