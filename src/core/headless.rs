use std::cell::Cell;

use crate::error::{Result, SurfaceError};

use super::surface_size::SurfaceSize;
use super::window::WindowBackend;

/// In-memory window that keeps the last presented frame
///
/// Useful for tests and for owners that want the rasterized output without
/// opening a native window.
#[derive(Debug)]
pub struct HeadlessWindow {
    size: SurfaceSize,
    realized: bool,
    frame: Vec<u32>,
    frame_size: Option<SurfaceSize>,
    title: String,
    presents: usize,
    redraws: Cell<usize>,
}

impl HeadlessWindow {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            realized: true,
            frame: Vec::new(),
            frame_size: None,
            title: String::new(),
            presents: 0,
            redraws: Cell::new(0),
        }
    }

    /// A window whose surface never becomes available
    pub fn unrealized(size: SurfaceSize) -> Self {
        Self {
            realized: false,
            ..Self::new(size)
        }
    }

    /// Simulate an OS-driven resize of the drawable area
    pub fn set_drawable_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn frame(&self) -> &[u32] {
        &self.frame
    }

    pub fn frame_size(&self) -> Option<SurfaceSize> {
        self.frame_size
    }

    /// Pixel of the last presented frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let size = self.frame_size?;
        if x >= size.width() || y >= size.height() {
            return None;
        }
        self.frame.get((y * size.width() + x) as usize).copied()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn present_count(&self) -> usize {
        self.presents
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws.get()
    }
}

impl WindowBackend for HeadlessWindow {
    fn drawable_size(&self) -> SurfaceSize {
        self.size
    }

    fn present(&mut self, pixels: &[u32], size: SurfaceSize) -> Result<()> {
        if !self.realized {
            return Err(SurfaceError::SurfaceUnavailable(
                "headless surface is not realized".to_string(),
            ));
        }
        if pixels.len() != size.pixel_count() {
            return Err(SurfaceError::Present(format!(
                "expected {} pixels, got {}",
                size.pixel_count(),
                pixels.len()
            )));
        }

        self.frame.clear();
        self.frame.extend_from_slice(pixels);
        self.frame_size = Some(size);
        self.presents += 1;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn request_redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}
