pub mod canvas;
pub mod headless;
pub mod input;
pub mod input_adapter;
pub mod present_chain;
pub mod rasterizer;
pub mod softbuffer_window;
pub mod surface_size;
pub mod window;

pub use canvas::{Canvas, DrawOp};
pub use headless::HeadlessWindow;
pub use input::{rate_title, InputEvent, PointerPosition, RateChange, RATE_HINT};
pub use input_adapter::WinitInput;
pub use present_chain::{FrameGuard, PresentChain, DEFAULT_BUFFER_COUNT};
pub use rasterizer::{FrameTarget, Rasterizer};
pub use softbuffer_window::SoftbufferWindow;
pub use surface_size::SurfaceSize;
pub use window::WindowBackend;
