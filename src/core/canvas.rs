use crate::color::Color;

use super::surface_size::SurfaceSize;

/// 2D drawing operations for canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Color),

    /// Filled rectangle, clipped to the canvas
    Rect { x: u32, y: u32, width: u32, height: u32, color: Color },
}

/// Canvas state - packed `0x00RRGGBB` pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new black canvas
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            pixels: vec![0; size.pixel_count()],
            width: size.width(),
            height: size.height(),
        }
    }

    /// Reallocate to a new size; contents are reset to black
    pub fn resize(&mut self, size: SurfaceSize) {
        self.width = size.width();
        self.height = size.height();
        self.pixels.clear();
        self.pixels.resize(size.pixel_count(), 0);
    }

    /// Execute a single draw operation
    pub fn apply(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.pixels.fill(color.to_pixel()),
            DrawOp::Rect { x, y, width, height, color } => {
                self.fill_rect(x, y, width, height, color)
            }
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }

        let pixel = color.to_pixel();
        let stride = self.width as usize;
        for row in y as usize..y_end as usize {
            let start = row * stride;
            self.pixels[start + x as usize..start + x_end as usize].fill(pixel);
        }
    }

    /// Pixel at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
