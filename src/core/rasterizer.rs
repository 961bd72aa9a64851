use crate::color::Color;
use crate::grid::ColorGrid;

use super::canvas::{Canvas, DrawOp};
use super::surface_size::SurfaceSize;

/// Caller-owned pixel buffer the rasterized image is copied onto
pub struct FrameTarget<'a> {
    pub pixels: &'a mut [u32],
    pub width: u32,
    pub height: u32,
}

/// Turns a grid of cell colors into filled rectangles covering the surface
///
/// Cell edges are proportional, so column `c` of `n` spans
/// `[c * W / n, (c + 1) * W / n)`. Neighbouring cells differ by at most one
/// pixel and the union of all cells is exactly `W x H`.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    size: SurfaceSize,
    background: Color,
    canvas: Canvas,
}

impl Rasterizer {
    pub fn new(size: SurfaceSize, background: Color) -> Self {
        Self {
            size,
            background,
            canvas: Canvas::new(size),
        }
    }

    /// Adopt new surface dimensions. Zero in either axis is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        let Ok(size) = SurfaceSize::new(width, height) else {
            log::debug!("ignoring resize to {}x{}", width, height);
            return;
        };
        if size == self.size {
            return;
        }

        log::debug!(
            "rasterizer resized {}x{} -> {}x{}",
            self.size.width(),
            self.size.height(),
            width,
            height
        );
        self.size = size;
        self.canvas.resize(size);
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Fill the whole image with the background color
    pub fn clear(&mut self) {
        self.canvas.apply(&DrawOp::Clear(self.background));
    }

    /// Cell rectangles for `grid`, row-major. Empty grids plan nothing.
    pub fn plan<G: ColorGrid + ?Sized>(&self, grid: &G) -> Vec<DrawOp> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows == 0 || cols == 0 {
            return Vec::new();
        }

        let (width, height) = (self.size.width(), self.size.height());
        let mut ops = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            let y0 = edge(row, rows, height);
            let y1 = edge(row + 1, rows, height);

            for col in 0..cols {
                let Some(color) = grid.color_at(row, col) else {
                    continue;
                };
                let x0 = edge(col, cols, width);
                let x1 = edge(col + 1, cols, width);

                ops.push(DrawOp::Rect {
                    x: x0,
                    y: y0,
                    width: x1 - x0,
                    height: y1 - y0,
                    color,
                });
            }
        }

        ops
    }

    /// Rasterize `grid` onto the internal image and return it
    pub fn paint<G: ColorGrid + ?Sized>(&mut self, grid: &G) -> &Canvas {
        for op in self.plan(grid) {
            self.canvas.apply(&op);
        }
        &self.canvas
    }

    /// Cell under a drawable-local pixel for a `rows x cols` grid
    pub fn cell_at(&self, x: i32, y: i32, rows: usize, cols: usize) -> Option<(usize, usize)> {
        if rows == 0 || cols == 0 || x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }

        Some((
            index_of(y, rows, self.size.height()),
            index_of(x, cols, self.size.width()),
        ))
    }

    /// Copy the image onto `target`, clearing the target first.
    /// Only the overlapping region is copied when sizes differ. A target
    /// shorter than its declared size is left untouched.
    pub fn render(&self, target: &mut FrameTarget<'_>) {
        let expected = target.width as usize * target.height as usize;
        if target.pixels.len() < expected {
            log::warn!(
                "frame target holds {} pixels, {}x{} needs {}; skipping",
                target.pixels.len(),
                target.width,
                target.height,
                expected
            );
            return;
        }

        target.pixels.fill(self.background.to_pixel());

        let copy_width = self.size.width().min(target.width) as usize;
        let copy_height = self.size.height().min(target.height) as usize;
        let source = self.canvas.pixels();
        let source_stride = self.size.width() as usize;
        let target_stride = target.width as usize;

        for row in 0..copy_height {
            let src = &source[row * source_stride..row * source_stride + copy_width];
            let dst_start = row * target_stride;
            target.pixels[dst_start..dst_start + copy_width].copy_from_slice(src);
        }
    }

    /// Last painted image
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

/// Start pixel of cell `index` when `extent` pixels are split into `count` cells
fn edge(index: usize, count: usize, extent: u32) -> u32 {
    (index as u64 * extent as u64 / count as u64) as u32
}

/// Inverse of `edge`: the cell whose span contains `pixel`
fn index_of(pixel: u32, count: usize, extent: u32) -> usize {
    ((pixel as u64 + 1) * count as u64 - 1) as usize / extent as usize
}
