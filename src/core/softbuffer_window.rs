use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::config::SurfaceConfig;
use crate::error::{Result, SurfaceError};

use super::surface_size::SurfaceSize;
use super::window::WindowBackend;

/// winit window presented through a softbuffer pixel surface
///
/// The window cannot be resized by dragging; OS-driven resizes still arrive
/// as events.
pub struct SoftbufferWindow {
    window: Arc<Window>,
    surface: Surface<Arc<Window>, Arc<Window>>,
    _context: Context<Arc<Window>>,
    requested: SurfaceSize,
    surface_size: Option<SurfaceSize>,
}

impl SoftbufferWindow {
    /// Create the visible window, centered on the primary monitor when known
    pub fn create(event_loop: &ActiveEventLoop, config: &SurfaceConfig) -> Result<Self> {
        let size = config.size()?;
        let mut attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(size.width(), size.height()))
            .with_resizable(false)
            .with_visible(true);

        if let Some(monitor) = event_loop.primary_monitor() {
            let screen = monitor.size();
            let origin = monitor.position();
            let x = origin.x + (screen.width.saturating_sub(size.width()) / 2) as i32;
            let y = origin.y + (screen.height.saturating_sub(size.height()) / 2) as i32;
            attributes = attributes.with_position(PhysicalPosition::new(x, y));
        }

        let window = event_loop
            .create_window(attributes)
            .map_err(|e| SurfaceError::Window(e.to_string()))?;
        let window = Arc::new(window);

        let context = Context::new(window.clone())
            .map_err(|e| SurfaceError::SurfaceUnavailable(format!("context create failed: {e}")))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| SurfaceError::SurfaceUnavailable(format!("surface create failed: {e}")))?;

        log::info!("window created at {}x{}", size.width(), size.height());

        Ok(Self {
            window,
            surface,
            _context: context,
            requested: size,
            surface_size: None,
        })
    }

}

impl WindowBackend for SoftbufferWindow {
    fn drawable_size(&self) -> SurfaceSize {
        let inner = self.window.inner_size();
        SurfaceSize::new(inner.width, inner.height).unwrap_or(self.requested)
    }

    fn present(&mut self, pixels: &[u32], size: SurfaceSize) -> Result<()> {
        if self.surface_size != Some(size) {
            let (width, height) = size.non_zero();
            self.surface
                .resize(width, height)
                .map_err(|e| SurfaceError::SurfaceUnavailable(format!("surface resize failed: {e}")))?;
            self.surface_size = Some(size);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| SurfaceError::SurfaceUnavailable(format!("buffer unavailable: {e}")))?;

        let len = buffer.len().min(pixels.len());
        buffer[..len].copy_from_slice(&pixels[..len]);

        buffer
            .present()
            .map_err(|e| SurfaceError::Present(e.to_string()))
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
