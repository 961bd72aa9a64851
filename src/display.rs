use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use winit::event::WindowEvent;

use crate::config::SurfaceConfig;
use crate::core::{
    InputEvent, PresentChain, RateChange, Rasterizer, SurfaceSize, WindowBackend, WinitInput,
};
use crate::error::{Result, SurfaceError};
use crate::grid::ColorGrid;

/// Owner callback for pointer drags and clicks, in drawable-local pixels
pub type DrawCallback = Box<dyn FnMut(i32, i32)>;

/// Owner callback receiving a `rate -> new rate` transform
pub type RateCallback = Box<dyn FnMut(fn(f64) -> f64)>;

/// Lifecycle of a display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// Callbacks bound and rasterizer built; no window yet
    Initializing,
    /// Window attached, accepting renders and input
    Ready,
    /// Window closed; the owner should end the program
    Closed,
}

/// What the owner's event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Pending window title written by the owner
///
/// Clone it into the rate callback; the surface applies whatever was written
/// once the current event has been handled.
#[derive(Debug, Clone, Default)]
pub struct TitleSlot(Rc<RefCell<Option<String>>>);

impl TitleSlot {
    pub fn set(&self, title: impl Into<String>) {
        *self.0.borrow_mut() = Some(title.into());
    }

    pub fn take(&self) -> Option<String> {
        self.0.borrow_mut().take()
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Window, presentation chain and input routing for one pixel grid display
pub struct DisplaySurface<B: WindowBackend> {
    config: SurfaceConfig,
    state: SurfaceState,
    rasterizer: Rasterizer,
    chain: Option<PresentChain>,
    backend: Option<B>,
    input: WinitInput,
    on_draw: DrawCallback,
    on_rate_change: RateCallback,
    title: TitleSlot,
}

impl<B: WindowBackend> DisplaySurface<B> {
    /// Create a surface of `width x height` pixels with default settings
    pub fn new(
        width: u32,
        height: u32,
        on_draw: impl FnMut(i32, i32) + 'static,
        on_rate_change: impl FnMut(fn(f64) -> f64) + 'static,
    ) -> Result<Self> {
        Self::with_config(SurfaceConfig::with_size(width, height), on_draw, on_rate_change)
    }

    pub fn with_config(
        config: SurfaceConfig,
        on_draw: impl FnMut(i32, i32) + 'static,
        on_rate_change: impl FnMut(fn(f64) -> f64) + 'static,
    ) -> Result<Self> {
        let size = config.size()?;
        let rasterizer = Rasterizer::new(size, config.background);

        Ok(Self {
            config,
            state: SurfaceState::Initializing,
            rasterizer,
            chain: None,
            backend: None,
            input: WinitInput::new(),
            on_draw: Box::new(on_draw),
            on_rate_change: Box::new(on_rate_change),
            title: TitleSlot::default(),
        })
    }

    /// Share a title slot the owner created before constructing the surface
    pub fn with_title_slot(mut self, title: TitleSlot) -> Self {
        self.title = title;
        self
    }

    /// Take ownership of the created window and allocate the buffer chain
    pub fn attach(&mut self, mut backend: B) {
        if self.state == SurfaceState::Closed {
            log::warn!("ignoring window attach after close");
            return;
        }

        let size = backend.drawable_size();
        self.rasterizer.resize(size.width(), size.height());
        let chain = PresentChain::new(self.config.buffer_count, size);
        let buffers = chain.buffer_count();
        self.chain = Some(chain);

        backend.set_title(&self.config.title);
        backend.request_redraw();
        self.backend = Some(backend);
        self.state = SurfaceState::Ready;

        log::info!(
            "display ready: {}x{} with {} presentation buffers",
            size.width(),
            size.height(),
            buffers
        );
    }

    /// Rasterize `grid` into the next buffer and show it
    pub fn render<G: ColorGrid + ?Sized>(&mut self, grid: &G) -> Result<()> {
        let (chain, backend) = match (self.state, self.chain.as_mut(), self.backend.as_mut()) {
            (SurfaceState::Ready, Some(chain), Some(backend)) => (chain, backend),
            (SurfaceState::Closed, ..) => {
                return Err(SurfaceError::SurfaceUnavailable("window is closed".to_string()))
            }
            _ => {
                return Err(SurfaceError::SurfaceUnavailable(
                    "window is not created yet".to_string(),
                ))
            }
        };

        let mut frame = chain.acquire();
        self.rasterizer.clear();
        self.rasterizer.paint(grid);
        self.rasterizer.render(&mut frame.target());
        frame.complete();

        let pixels = chain
            .shown()
            .ok_or_else(|| SurfaceError::Present("no completed frame to show".to_string()))?;
        backend.present(pixels, chain.size())
    }

    /// Translate and handle a raw winit event
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Flow {
        match self.input.translate(event) {
            Some(input) => self.handle_event(input),
            None if self.state == SurfaceState::Closed => Flow::Exit,
            None => Flow::Continue,
        }
    }

    /// Single entry point for input. Never panics into the caller.
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        if self.state == SurfaceState::Closed {
            return Flow::Exit;
        }

        match event {
            InputEvent::Resized { width, height } => self.rasterizer.resize(width, height),
            InputEvent::PointerDragged(position) | InputEvent::PointerClicked(position) => {
                let (x, y) = position.to_pixel();
                let on_draw = &mut self.on_draw;
                guarded("draw", || on_draw(x, y));
            }
            InputEvent::CharTyped(c) => {
                if let Some(change) = RateChange::from_char(c) {
                    log::debug!("rate change {:?} from key {:?}", change, c);
                    let on_rate_change = &mut self.on_rate_change;
                    guarded("rate change", || on_rate_change(change.transform()));
                }
            }
            InputEvent::CloseRequested => {
                log::info!("window close requested");
                self.state = SurfaceState::Closed;
                self.chain = None;
                self.backend = None;
                return Flow::Exit;
            }
        }

        self.apply_pending_title();
        Flow::Continue
    }

    /// Reallocate the presentation buffers at the current drawable size
    pub fn rebuild_buffers(&mut self) {
        let size = self.rasterizer.size();
        if let Some(chain) = self.chain.as_mut() {
            chain.reallocate(size);
        }
    }

    pub fn set_title(&mut self, title: &str) {
        if let Some(backend) = self.backend.as_mut() {
            backend.set_title(title);
        }
    }

    pub fn request_redraw(&self) {
        if let Some(backend) = &self.backend {
            backend.request_redraw();
        }
    }

    /// Slot the owner writes window titles into
    pub fn title_slot(&self) -> TitleSlot {
        self.title.clone()
    }

    /// Grid cell under a drawable-local pixel
    pub fn cell_at(&self, x: i32, y: i32, rows: usize, cols: usize) -> Option<(usize, usize)> {
        self.rasterizer.cell_at(x, y, rows, cols)
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SurfaceState::Ready
    }

    /// Surface size used for rasterization
    pub fn size(&self) -> SurfaceSize {
        self.rasterizer.size()
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    fn apply_pending_title(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            if let Some(title) = self.title.take() {
                backend.set_title(&title);
            }
        }
    }
}

/// Run an owner callback, logging instead of unwinding on panic
fn guarded(label: &str, callback: impl FnOnce()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(callback)) {
        log::error!("{} callback panicked: {}", label, panic_message(payload.as_ref()));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
